//! Shared search-session state, provided through Dioxus context.

use dioxus::prelude::*;

use portico_core::{FilterSet, QueryParams};

/// The search session: current term, active filters, pagination cursor.
///
/// Provided once at the app root and consumed by every widget; the widgets
/// own no state of their own. All mutation flows through the setters here,
/// and the session lives exactly as long as the providing component.
#[derive(Clone, Copy)]
pub struct SearchContext {
    pub term: Signal<String>,
    pub filters: Signal<FilterSet>,
    pub page_cursor: Signal<String>,
}

impl SearchContext {
    /// Provide a fresh session to the component tree below the caller.
    pub fn provide() -> Self {
        use_context_provider(|| SearchContext {
            term: Signal::new(String::new()),
            filters: Signal::new(FilterSet::new()),
            page_cursor: Signal::new(String::new()),
        })
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term.set(term.into());
    }

    pub fn set_page_cursor(&mut self, cursor: impl Into<String>) {
        self.page_cursor.set(cursor.into());
    }

    /// Apply `update` to the latest filter mapping.
    ///
    /// The next mapping is always derived from the signal's current value at
    /// call time. Handlers must not capture a `FilterSet` across an event
    /// boundary — same-tick updates to sibling keys would be lost.
    pub fn update_filters(&mut self, update: impl FnOnce(&FilterSet) -> FilterSet) {
        let next = {
            let current = self.filters.read();
            update(&current)
        };
        self.filters.set(next);
    }
}

/// Mirror of the addressable query string, the shareable location.
///
/// The search bar writes the `query` parameter into it, debounced; nothing
/// in this app reads it back into the widgets.
#[derive(Clone, Copy)]
pub struct UrlState {
    params: Signal<QueryParams>,
}

impl UrlState {
    pub fn provide() -> Self {
        use_context_provider(|| UrlState {
            params: Signal::new(QueryParams::new()),
        })
    }

    pub fn set_param(&mut self, name: &str, value: &str) {
        tracing::debug!(name, value, "query-string write");
        self.params.write().set(name, value);
    }

    /// The current shareable location, e.g. `/search?query=tracing`.
    pub fn href(&self) -> String {
        let encoded = self.params.read().encode();
        if encoded.is_empty() {
            "/search".to_owned()
        } else {
            format!("/search?{encoded}")
        }
    }
}
