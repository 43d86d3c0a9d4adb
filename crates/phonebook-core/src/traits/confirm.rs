// # Confirmation Trait
//
// Interactive yes/no question asked before destructive actions.
// The front end decides how to ask; the core only needs the answer.

use async_trait::async_trait;

/// Prompt shown before a contact is deleted
pub const DELETE_PROMPT: &str = "Do you want to delete contact?";

/// Asks the user to confirm an action
#[async_trait]
pub trait Confirm: Send + Sync {
    /// Ask the question and wait for the answer
    ///
    /// Anything other than an explicit yes counts as a refusal.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything without asking
///
/// Useful for scripted sessions where deletes are intended.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

#[async_trait]
impl Confirm for AlwaysConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
