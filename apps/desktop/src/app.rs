//! Root application component — portal search shell.

use dioxus::prelude::*;

use crate::search::SearchPanel;
use crate::state::{SearchContext, UrlState};

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    // Session state lives exactly as long as this component.
    SearchContext::provide();
    UrlState::provide();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        div { class: "app-shell",

            // Titlebar (drag region)
            div { class: "titlebar",
                span { class: "titlebar-title", "Portico" }
            }

            // Main content area
            div { class: "content-area",
                SearchPanel {}
            }

            StatusBar {}
        }
    }
}

/// Status bar at the bottom of the app, showing the shareable location.
#[component]
fn StatusBar() -> Element {
    let url = use_context::<UrlState>();
    let href = url.href();

    rsx! {
        div { class: "statusbar",
            span { class: "statusbar-host", "portico.local" }
            span { class: "statusbar-sep", "|" }
            span { class: "statusbar-url", "{href}" }
        }
    }
}
