//! Plain-text rendering of the application state

use phonebook_core::{FilterView, NotificationKind, PhonebookApp};
use std::fmt::Write;

/// Render the notification line, search status and contact rows
pub fn render(app: &PhonebookApp) -> String {
    let mut out = String::new();

    if let Some(notification) = app.notification() {
        let marker = match notification.kind {
            NotificationKind::Info => "*",
            NotificationKind::Error => "!",
        };
        let _ = writeln!(out, "{} {}", marker, notification.text);
    }

    let view = app.filter_view();
    if view.is_active() {
        let _ = writeln!(out, "Search: {:?}", app.query());
    }

    let rows = view.rows(app.contacts());
    if rows.is_empty() {
        let empty = match &view {
            FilterView::Active(_) => "(no matches)",
            FilterView::Inactive => "(no contacts)",
        };
        let _ = writeln!(out, "  {}", empty);
    } else {
        let id_width = rows.iter().map(|c| c.id.as_str().len()).max().unwrap_or(0);
        let name_width = rows.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
        for contact in rows {
            let _ = writeln!(
                out,
                "  {:<id_width$}  {:<name_width$}  {}",
                contact.id.as_str(),
                contact.name,
                contact.number,
            );
        }
    }

    let draft = app.draft();
    if !draft.name.is_empty() || !draft.number.is_empty() {
        let _ = writeln!(out, "Draft: name={:?} number={:?}", draft.name, draft.number);
    }

    out
}
