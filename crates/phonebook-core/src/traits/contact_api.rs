// # Contact API Trait
//
// Defines the interface to the remote contacts store.
//
// ## Implementations
//
// - HTTP/JSON: `phonebook-http` crate
//
// ## Usage
//
// ```rust,ignore
// use phonebook_core::{ContactApi, NewContact};
//
// #[tokio::main]
// async fn main() -> phonebook_core::Result<()> {
//     let api = /* ContactApi implementation */;
//
//     let created = api.create(&NewContact::new("Bo", "456")).await?;
//     api.delete_by_id(&created.id).await?;
//
//     Ok(())
// }
// ```

use async_trait::async_trait;

use crate::model::{Contact, ContactId, NewContact};

/// Trait for contacts API implementations
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// ## Contract
///
/// - One request per call: no retry, no backoff, no caching
/// - Own no contact data; the application state is the only copy
/// - Report every failure (transport, status, decoding) as
///   [`crate::Error::Remote`]; callers only distinguish success from failure
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Fetch the full contact collection in server order
    async fn list_all(&self) -> Result<Vec<Contact>, crate::Error>;

    /// Persist a new contact
    ///
    /// # Returns
    ///
    /// - `Ok(Contact)`: the stored contact, including the server-assigned id
    /// - `Err(Error)`: if the request failed
    async fn create(&self, contact: &NewContact) -> Result<Contact, crate::Error>;

    /// Delete the contact with the given id
    async fn delete_by_id(&self, id: &ContactId) -> Result<(), crate::Error>;

    /// Get the API name (for logging/debugging)
    fn api_name(&self) -> &'static str;
}
