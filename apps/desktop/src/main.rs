//! Portico Desktop — Dioxus-powered developer-portal search.

use dioxus::prelude::*;

mod app;
mod search;
mod state;

use app::App;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portico_core=info".parse().unwrap())
                .add_directive("portico_desktop=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Portico")
                            .with_inner_size(LogicalSize::new(1100.0, 720.0))
                            .with_min_inner_size(LogicalSize::new(640.0, 420.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
