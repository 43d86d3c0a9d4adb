// # Store
//
// The in-memory contact list and the pure functions that read it:
// duplicate checks before a write and the search view for rendering.

pub mod contacts;
pub mod filter;
pub mod guard;

pub use contacts::ContactStore;
pub use filter::{FilterView, SearchFilter};
pub use guard::DuplicateGuard;
