//! Search panel — search bar, filter rail, and session strip.

mod filters;
mod search_input;
mod session_strip;

use dioxus::prelude::*;

pub use filters::{FilterKind, SearchFilter};
pub use search_input::SearchBar;
use session_strip::SessionStrip;

/// Entity kinds the portal indexes.
const KIND_VALUES: &[&str] = &["component", "api", "documentation", "template"];

/// Lifecycle stages of a catalog entry.
const LIFECYCLE_VALUES: &[&str] = &["experimental", "production", "deprecated"];

/// Search panel spanning the full width of the content area.
#[component]
pub fn SearchPanel() -> Element {
    rsx! {
        div { class: "search-panel",
            SearchBar {}
            div { class: "filter-rail",
                SearchFilter {
                    kind: FilterKind::Checkbox,
                    name: "lifecycle",
                    values: LIFECYCLE_VALUES.iter().map(ToString::to_string).collect::<Vec<_>>(),
                    default_value: "production",
                }
                SearchFilter {
                    kind: FilterKind::Select,
                    name: "kind",
                    values: KIND_VALUES.iter().map(ToString::to_string).collect::<Vec<_>>(),
                }
            }
            SessionStrip {}
        }
    }
}
