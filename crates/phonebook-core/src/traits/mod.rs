//! Core traits for the phonebook client
//!
//! This module defines the abstract interfaces the application state talks to.
//!
//! - [`ContactApi`]: List, create and delete contacts on the remote store
//! - [`Confirm`]: Ask the user before destructive actions

pub mod contact_api;
pub mod confirm;

pub use contact_api::ContactApi;
pub use confirm::{AlwaysConfirm, Confirm, DELETE_PROMPT};
