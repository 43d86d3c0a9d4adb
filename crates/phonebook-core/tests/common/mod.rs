//! Test doubles and common utilities for contract tests
//!
//! This module provides minimal test doubles that record how the app talks
//! to its collaborators without any network or terminal.

#![allow(dead_code)]

use phonebook_core::error::{Error, Result};
use phonebook_core::model::{Contact, ContactId, NewContact};
use phonebook_core::traits::{Confirm, ContactApi};
use phonebook_core::{AppEvent, PhonebookApp, PhonebookConfig};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::mpsc;

/// A mock ContactApi backed by a vector, with scripted failures
#[derive(Clone)]
pub struct MockContactApi {
    /// Server-side contacts
    contacts: Arc<Mutex<Vec<Contact>>>,
    /// Next id handed out by create()
    next_id: Arc<AtomicUsize>,
    /// Call counters
    list_call_count: Arc<AtomicUsize>,
    create_call_count: Arc<AtomicUsize>,
    delete_call_count: Arc<AtomicUsize>,
    /// Bodies received by create()
    created_bodies: Arc<Mutex<Vec<NewContact>>>,
    /// Ids received by delete_by_id()
    deleted_ids: Arc<Mutex<Vec<ContactId>>>,
    /// Failure switches
    fail_list: Arc<AtomicBool>,
    fail_create: Arc<AtomicBool>,
    fail_delete: Arc<AtomicBool>,
}

impl MockContactApi {
    /// Create an API with an empty server-side collection
    pub fn new() -> Self {
        Self::with_contacts(Vec::new())
    }

    /// Create an API seeded with contacts
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Arc::new(Mutex::new(contacts)),
            next_id: Arc::new(AtomicUsize::new(100)),
            list_call_count: Arc::new(AtomicUsize::new(0)),
            create_call_count: Arc::new(AtomicUsize::new(0)),
            delete_call_count: Arc::new(AtomicUsize::new(0)),
            created_bodies: Arc::new(Mutex::new(Vec::new())),
            deleted_ids: Arc::new(Mutex::new(Vec::new())),
            fail_list: Arc::new(AtomicBool::new(false)),
            fail_create: Arc::new(AtomicBool::new(false)),
            fail_delete: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn list_call_count(&self) -> usize {
        self.list_call_count.load(Ordering::SeqCst)
    }

    pub fn create_call_count(&self) -> usize {
        self.create_call_count.load(Ordering::SeqCst)
    }

    pub fn delete_call_count(&self) -> usize {
        self.delete_call_count.load(Ordering::SeqCst)
    }

    /// Bodies sent to create(), in order
    pub fn created_bodies(&self) -> Vec<NewContact> {
        self.created_bodies.lock().unwrap().clone()
    }

    /// Ids sent to delete_by_id(), in order
    pub fn deleted_ids(&self) -> Vec<ContactId> {
        self.deleted_ids.lock().unwrap().clone()
    }

    /// Server-side contacts
    pub fn server_contacts(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Add a contact behind the app's back (another session)
    pub fn insert_remote(&self, contact: Contact) {
        self.contacts.lock().unwrap().push(contact);
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl ContactApi for MockContactApi {
    async fn list_all(&self) -> Result<Vec<Contact>> {
        self.list_call_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Error::remote("GET failed: connection refused"));
        }
        Ok(self.server_contacts())
    }

    async fn create(&self, contact: &NewContact) -> Result<Contact> {
        self.create_call_count.fetch_add(1, Ordering::SeqCst);
        self.created_bodies.lock().unwrap().push(contact.clone());
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Error::remote("POST failed: 500 Internal Server Error"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = contact.clone().with_id(id.to_string().as_str());
        self.contacts.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<()> {
        self.delete_call_count.fetch_add(1, Ordering::SeqCst);
        self.deleted_ids.lock().unwrap().push(id.clone());
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Error::remote("DELETE failed: 404 Not Found"));
        }
        self.contacts.lock().unwrap().retain(|c| &c.id != id);
        Ok(())
    }

    fn api_name(&self) -> &'static str {
        "mock"
    }
}

/// A Confirm that answers with a fixed value and counts prompts
#[derive(Clone)]
pub struct ScriptedConfirm {
    answer: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConfirm {
    pub fn yes() -> Self {
        Self::answering(true)
    }

    pub fn no() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Prompts shown so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.answer
    }
}

/// Build an app around the given doubles with default config
pub fn app_with(
    api: &MockContactApi,
    confirm: &ScriptedConfirm,
) -> (PhonebookApp, mpsc::Receiver<AppEvent>) {
    PhonebookApp::new(
        Box::new(api.clone()),
        Box::new(confirm.clone()),
        &PhonebookConfig::new(),
    )
    .expect("app construction succeeds")
}

/// Build an app and run the initial load
pub async fn loaded_app(
    api: &MockContactApi,
    confirm: &ScriptedConfirm,
) -> (PhonebookApp, mpsc::Receiver<AppEvent>) {
    let (mut app, mut events) = app_with(api, confirm);
    app.load().await;
    assert!(
        matches!(events.try_recv(), Ok(AppEvent::ContactsLoaded { .. })),
        "initial load should succeed"
    );
    (app, events)
}

/// Collect every event emitted so far
pub fn drain(events: &mut mpsc::Receiver<AppEvent>) -> Vec<AppEvent> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    drained
}

/// Contacts used by most scenarios
pub fn ann_and_bob() -> Vec<Contact> {
    vec![
        Contact::new("1", "Ann", "123"),
        Contact::new("2", "Bob", "456"),
    ]
}

/// Names in the order given
pub fn names(contacts: &[Contact]) -> Vec<String> {
    contacts.iter().map(|c| c.name.clone()).collect()
}
