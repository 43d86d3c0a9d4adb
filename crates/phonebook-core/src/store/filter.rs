//! Search filter
//!
//! Derives the rows to render from the contact list and the search query.
//! A blank query means "no filter" and is kept distinct from a filter that
//! matched nothing.

use crate::model::Contact;

/// Result of applying a search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterView {
    /// No active filter; render the full list
    Inactive,
    /// Active filter; render exactly these rows, even when empty
    Active(Vec<Contact>),
}

impl FilterView {
    /// Whether a query is active
    pub fn is_active(&self) -> bool {
        matches!(self, FilterView::Active(_))
    }

    /// Rows to render, falling back to `all` when inactive
    pub fn rows<'a>(&'a self, all: &'a [Contact]) -> &'a [Contact] {
        match self {
            FilterView::Inactive => all,
            FilterView::Active(matches) => matches,
        }
    }
}

/// Case-insensitive substring filter on contact names
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchFilter;

impl SearchFilter {
    /// Whether the query activates the filter
    pub fn is_active(query: &str) -> bool {
        !query.trim().is_empty()
    }

    /// Filter `contacts` by `query`, preserving order
    pub fn filter(query: &str, contacts: &[Contact]) -> FilterView {
        if !Self::is_active(query) {
            return FilterView::Inactive;
        }

        let needle = query.to_lowercase();
        FilterView::Active(
            contacts
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        )
    }
}
