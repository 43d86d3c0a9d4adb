// # phonebook-core
//
// Core library for the phonebook contact client.
//
// ## Architecture Overview
//
// This library provides the client-side state of a contact book backed by a
// remote REST API:
// - **ContactApi**: Trait for list/create/delete round trips to the remote store
// - **Confirm**: Trait for asking the user before a delete
// - **ContactStore**: In-memory contact list mirrored from the API
// - **DuplicateGuard**: Rejects empty fields and name/number collisions
// - **SearchFilter**: Case-insensitive name filter producing a render view
// - **NotificationChannel**: Single auto-expiring status line
// - **PhonebookApp**: Application state that routes front-end actions
//
// ## Design Principles
//
// 1. **Separation of Concerns**: Core logic knows nothing about HTTP or rendering
// 2. **Event-Driven**: Front ends dispatch typed actions, the app emits events
// 3. **Acknowledged Writes**: The store only changes after a successful round trip
// 4. **Library-First**: All behavior can be used and tested without a terminal
// 5. **Errors End at the Notification**: Failed actions never propagate or retry

pub mod traits;
pub mod app;
pub mod store;
pub mod model;
pub mod notification;
pub mod config;
pub mod error;

// Re-export core types for convenience
pub use traits::{Confirm, ContactApi, AlwaysConfirm};
pub use app::{Action, AppEvent, Draft, PhonebookApp};
pub use store::{ContactStore, DuplicateGuard, FilterView, SearchFilter};
pub use model::{Contact, ContactId, NewContact};
pub use notification::{Notification, NotificationChannel, NotificationKind};
pub use config::{ApiConfig, NotificationConfig, PhonebookConfig};
pub use error::{Error, Result, ValidationError};
