//! Phonebook application state
//!
//! The PhonebookApp is responsible for:
//! - Loading the contact list from the ContactApi
//! - Running submissions through the DuplicateGuard
//! - Creating and deleting contacts via the ContactApi
//! - Applying acknowledged changes to the ContactStore
//! - Reporting every outcome on the NotificationChannel
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Front end   │─── Action ───┐
//! └──────────────┘              │
//!                               ▼
//!                      ┌──────────────┐
//!                      │ PhonebookApp │
//!                      └──────────────┘
//!                               │
//!     ┌─────────────┬───────────┼─────────────┬──────────────┐
//!     │             │           │             │              │
//!     ▼             ▼           ▼             ▼              ▼
//! ┌────────┐ ┌────────────┐ ┌─────────┐ ┌────────────┐ ┌──────────┐
//! │ Guard  │ │ ContactApi │ │ Confirm │ │ContactStore│ │ AppEvent │
//! │(check) │ │ (round     │ │ (ask)   │ │ (mirror)   │ │ (notify) │
//! └────────┘ │  trip)     │ └─────────┘ └────────────┘ └──────────┘
//!            └────────────┘
//! ```
//!
//! ## Action Flow
//!
//! 1. Front end dispatches an [`Action`]
//! 2. Input actions update the draft or search query synchronously
//! 3. Writes are validated, then sent as a single request
//! 4. The store changes only after the request succeeds
//! 5. The outcome is shown as a notification and emitted as an [`AppEvent`]
//!
//! Errors never leave this module: they end at the notification line.

use crate::config::PhonebookConfig;
use crate::error::Result;
use crate::model::{Contact, ContactId};
use crate::notification::{Notification, NotificationChannel};
use crate::store::{ContactStore, DuplicateGuard, FilterView, SearchFilter};
use crate::traits::{Confirm, ContactApi, DELETE_PROMPT};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Shown while the initial load is in flight
pub const MSG_LOADING: &str = "Loading all contacts from DB";
/// Shown when the initial load fails
pub const MSG_LOAD_FAILED: &str = "Failed to load initial data";
/// Shown while a create request is in flight
pub const MSG_SAVING: &str = "Adding contact to database...";
/// Shown after a successful create
pub const MSG_SAVED: &str = "Contact saved to Database";
/// Shown after a failed create
pub const MSG_SAVE_FAILED: &str = "Error saving contact!";
/// Shown after a successful delete
pub const MSG_DELETED: &str = "Deleted contact successfully!";
/// Shown after a failed delete
pub const MSG_DELETE_FAILED: &str = "Error deleting contact";

/// Input events raised by the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// (Re)load the full list from the API
    Load,
    /// Name input changed
    NameInput(String),
    /// Number input changed
    NumberInput(String),
    /// Submit the current draft
    Submit,
    /// Search input changed
    SearchInput(String),
    /// Delete button pressed for a contact
    DeleteRequest(ContactId),
}

/// Events emitted by the PhonebookApp
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Contact list replaced from the API
    ContactsLoaded { count: usize },

    /// Initial load failed
    LoadFailed { error: String },

    /// Contact created and appended
    ContactCreated { id: ContactId },

    /// Submission blocked before any request
    SubmissionRejected { reason: String },

    /// Create request failed
    CreateFailed { error: String },

    /// Contact deleted and removed
    ContactDeleted { id: ContactId },

    /// User declined the delete confirmation
    DeleteDeclined { id: ContactId },

    /// Delete request failed
    DeleteFailed { id: ContactId, error: String },
}

/// Current values of the input fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Name input
    pub name: String,
    /// Number input
    pub number: String,
}

impl Draft {
    /// Reset both fields
    pub fn clear(&mut self) {
        self.name.clear();
        self.number.clear();
    }
}

/// Phonebook application state
///
/// Owns the contact list, the input draft, the search query and the
/// notification line. All mutation goes through [`PhonebookApp::dispatch`]
/// or the operation methods it routes to.
///
/// ## Threading
///
/// The app is driven through `&mut self`: each action runs to completion,
/// including its single request, before the next one is dispatched.
pub struct PhonebookApp {
    /// Remote contacts store
    api: Box<dyn ContactApi>,

    /// Delete confirmation
    confirm: Box<dyn Confirm>,

    /// Mirrored contact list
    store: ContactStore,

    /// Input fields
    draft: Draft,

    /// Search input
    query: String,

    /// Status line
    notifications: NotificationChannel,

    /// Event sender for external monitoring
    event_tx: mpsc::Sender<AppEvent>,
}

impl PhonebookApp {
    /// Create a new application state
    ///
    /// The store starts empty and the loading notification is shown until
    /// [`PhonebookApp::load`] completes.
    ///
    /// # Returns
    ///
    /// A tuple of (app, event_receiver) where event_receiver yields app events
    pub fn new(
        api: Box<dyn ContactApi>,
        confirm: Box<dyn Confirm>,
        config: &PhonebookConfig,
    ) -> Result<(Self, mpsc::Receiver<AppEvent>)> {
        config.validate()?;

        let (tx, rx) = mpsc::channel(config.app.event_channel_capacity);

        let mut notifications = NotificationChannel::new(config.notifications.display_duration());
        notifications.show(MSG_LOADING);

        let app = Self {
            api,
            confirm,
            store: ContactStore::new(),
            draft: Draft::default(),
            query: String::new(),
            notifications,
            event_tx: tx,
        };

        Ok((app, rx))
    }

    /// Route an action to its operation
    pub async fn dispatch(&mut self, action: Action) {
        match action {
            Action::Load => self.load().await,
            Action::NameInput(name) => self.set_name(name),
            Action::NumberInput(number) => self.set_number(number),
            Action::Submit => self.submit().await,
            Action::SearchInput(query) => self.set_query(query),
            Action::DeleteRequest(id) => self.remove(&id).await,
        }
    }

    /// Replace the contact list with the API's
    ///
    /// On failure the list is left as is.
    pub async fn load(&mut self) {
        match self.api.list_all().await {
            Ok(contacts) => {
                info!("Loaded {} contact(s) from {}", contacts.len(), self.api.api_name());
                let count = contacts.len();
                self.store.replace_all(contacts);
                self.notifications.clear();
                self.emit_event(AppEvent::ContactsLoaded { count });
            }
            Err(e) => {
                warn!("Failed to load contacts: {}", e);
                self.notifications.show_error(MSG_LOAD_FAILED);
                self.emit_event(AppEvent::LoadFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    /// Update the name input
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Update the number input
    pub fn set_number(&mut self, number: impl Into<String>) {
        self.draft.number = number.into();
    }

    /// Update the search input
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        debug!("Search query: {:?}", self.query);
    }

    /// Validate the draft and create it
    ///
    /// A rejected draft never reaches the API; the reason is shown instead.
    pub async fn submit(&mut self) {
        let candidate =
            match DuplicateGuard::check(&self.draft.name, &self.draft.number, self.store.contacts()) {
                Ok(candidate) => candidate,
                Err(violation) => {
                    warn!("Submission rejected: {}", violation);
                    self.notifications.show_error(violation.notification_text());
                    self.emit_event(AppEvent::SubmissionRejected {
                        reason: violation.to_string(),
                    });
                    return;
                }
            };

        self.notifications.show(MSG_SAVING);

        match self.api.create(&candidate).await {
            Ok(created) => {
                info!("Created contact {} ({})", created.id, created.name);
                let id = created.id.clone();
                self.store.append(created);
                self.notifications.show(MSG_SAVED);
                self.draft.clear();
                self.emit_event(AppEvent::ContactCreated { id });
            }
            Err(e) => {
                warn!("Failed to create contact {}: {}", candidate.name, e);
                self.notifications.show_error(MSG_SAVE_FAILED);
                self.emit_event(AppEvent::CreateFailed {
                    error: e.to_string(),
                });
            }
        }
    }

    /// Ask for confirmation, then delete the contact
    ///
    /// Only listed contacts can be deleted: an unknown id is reported
    /// without prompting or sending anything. Declining sends nothing and
    /// changes nothing. A successful delete also clears the search query.
    pub async fn remove(&mut self, id: &ContactId) {
        if self.store.get(id).is_none() {
            warn!("Delete of unknown contact {}", id);
            self.notifications.show_error(MSG_DELETE_FAILED);
            self.emit_event(AppEvent::DeleteFailed {
                id: id.clone(),
                error: format!("no listed contact with id {}", id),
            });
            return;
        }

        if !self.confirm.confirm(DELETE_PROMPT).await {
            debug!("Delete of {} declined", id);
            self.emit_event(AppEvent::DeleteDeclined { id: id.clone() });
            return;
        }

        match self.api.delete_by_id(id).await {
            Ok(()) => {
                info!("Deleted contact {}", id);
                self.store.remove_by_id(id);
                self.notifications.show(MSG_DELETED);
                self.query.clear();
                self.emit_event(AppEvent::ContactDeleted { id: id.clone() });
            }
            Err(e) => {
                warn!("Failed to delete contact {}: {}", id, e);
                self.notifications.show_error(MSG_DELETE_FAILED);
                self.emit_event(AppEvent::DeleteFailed {
                    id: id.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    /// Drop the notification if its time is up
    ///
    /// # Returns
    ///
    /// `true` if the screen needs re-rendering
    pub fn expire_notification(&mut self) -> bool {
        self.notifications.expire()
    }

    /// All contacts in store order
    pub fn contacts(&self) -> &[Contact] {
        self.store.contacts()
    }

    /// Current input values
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Current search input
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Search view derived from the current store and query
    pub fn filter_view(&self) -> FilterView {
        SearchFilter::filter(&self.query, self.store.contacts())
    }

    /// Rows to render: the filtered view when a query is active
    pub fn visible_contacts(&self) -> Vec<Contact> {
        match self.filter_view() {
            FilterView::Inactive => self.store.contacts().to_vec(),
            FilterView::Active(rows) => rows,
        }
    }

    /// The live notification, if any
    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }

    /// The notification channel (for deadline-driven re-rendering)
    pub fn notifications(&self) -> &NotificationChannel {
        &self.notifications
    }

    /// Emit an app event
    fn emit_event(&self, event: AppEvent) {
        match self.event_tx.try_send(event) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("Event channel full, dropping event. Consider increasing event_channel_capacity.");
            }
            // Nobody is listening
            Err(mpsc::error::TrySendError::Closed(_)) => {}
        }
    }
}
