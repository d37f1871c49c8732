//! Search bar component with debounced query-string sync.

use std::time::Duration;

use dioxus::prelude::*;

use portico_core::DebounceGate;

use crate::state::{SearchContext, UrlState};

/// Query-string parameter the search term is mirrored into.
pub const QUERY_PARAM: &str = "query";

/// Quiet window before the term is persisted.
const SYNC_DEBOUNCE: Duration = Duration::from_millis(200);

#[component]
pub fn SearchBar() -> Element {
    let mut ctx = use_context::<SearchContext>();
    let mut url = use_context::<UrlState>();
    let mut gate = use_signal(DebounceGate::new);

    // Every term change re-arms the gate; a timer that wakes holding a stale
    // token drops its write. At most one query-string write per quiet window.
    let mut schedule_sync = move |term: String| {
        let token = gate.write().arm();
        spawn(async move {
            tokio::time::sleep(SYNC_DEBOUNCE).await;
            if gate.peek().is_current(token) {
                url.set_param(QUERY_PARAM, &term);
            }
        });
    };

    let term = ctx.term.read().clone();
    let has_term = !term.is_empty();

    rsx! {
        form {
            class: if has_term { "search-bar has-term" } else { "search-bar" },
            onsubmit: move |e: Event<FormData>| {
                e.prevent_default();
                let value = e
                    .get_first("term")
                    .map(|v| match v {
                        FormValue::Text(s) => s,
                        FormValue::File(_) => String::new(),
                    })
                    .unwrap_or_default();
                ctx.set_term(value.clone());
                schedule_sync(value);
            },

            // Search affordance, intentionally inert
            button {
                class: "search-icon",
                r#type: "submit",
                disabled: true,
                aria_label: "search",
                svg {
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    circle { cx: "11", cy: "11", r: "8" }
                    line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
                }
            }

            input {
                class: "search-input",
                r#type: "text",
                name: "term",
                placeholder: "Search in Portico",
                value: "{term}",
                autofocus: true,
                aria_label: "search portico",
                oninput: move |e: Event<FormData>| {
                    let value = e.value();
                    ctx.set_term(value.clone());
                    schedule_sync(value);
                },
            }

            // Clear resets term and pagination synchronously; re-arming the
            // gate drops any pending write of the stale term, and the empty
            // term is persisted after its own quiet window.
            button {
                class: "search-clear",
                r#type: "button",
                aria_label: "clear search",
                onclick: move |_| {
                    ctx.set_term("");
                    ctx.set_page_cursor("");
                    schedule_sync(String::new());
                },
                "\u{00D7}"
            }
        }
    }
}
