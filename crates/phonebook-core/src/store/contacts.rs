// # Contact Store
//
// In-memory list of contacts mirrored from the contacts API.
//
// ## Ordering
//
// - After a load: exactly the order the server returned
// - After a create: the new contact is appended at the end
// - After a delete: the entry is removed, the rest keep their order
//
// ## Synchronization
//
// The store never talks to the network. `PhonebookApp` calls these
// primitives from the completion of a successful round trip only, so the
// list never holds a change the server has not acknowledged.

use crate::model::{Contact, ContactId};

/// Ordered, in-memory contact list
///
/// # Example
///
/// ```rust
/// use phonebook_core::{Contact, ContactStore};
///
/// let mut store = ContactStore::new();
/// store.replace_all(vec![Contact::new("1", "Ann", "123")]);
/// store.append(Contact::new("2", "Bo", "456"));
///
/// assert_eq!(store.len(), 2);
/// assert!(store.remove_by_id(&"1".into()).is_some());
/// assert_eq!(store.contacts()[0].name, "Bo");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given contacts
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// Replace the whole list (full overwrite, no merge)
    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    /// Append a contact at the end of the list
    pub fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Remove the contact with the given id
    ///
    /// # Returns
    ///
    /// The removed contact, or `None` if no entry had that id
    pub fn remove_by_id(&mut self, id: &ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| &c.id == id)?;
        Some(self.contacts.remove(index))
    }

    /// All contacts in display order
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Look up a contact by id
    pub fn get(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| &c.id == id)
    }

    /// Get the number of contacts in the store
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
