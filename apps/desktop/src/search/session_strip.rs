//! Session strip showing active filters and the mirrored location.

use dioxus::prelude::*;

use crate::state::{SearchContext, UrlState};

#[component]
pub fn SessionStrip() -> Element {
    let ctx = use_context::<SearchContext>();
    let url = use_context::<UrlState>();

    let term = ctx.term.read();
    let filters = ctx.filters.read();

    if term.is_empty() && filters.is_empty() {
        return rsx! {
            div { class: "session-strip hidden" }
        };
    }

    let count = filters.len();
    let active = filters.names().collect::<Vec<_>>().join(", ");
    let href = url.href();

    rsx! {
        div { class: "session-strip",
            span { class: "session-filters", "{count} filters: {active}" }
            span { class: "session-sep", "\u{00B7}" }
            span { class: "session-url", "{href}" }
        }
    }
}
