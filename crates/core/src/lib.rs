//! Core library for Portico — search-session state shared by the portal's
//! search widgets: active filter criteria, debounce tokens for the
//! query-string mirror, and query-string encoding.
//!
//! This crate is UI-free. The desktop app binds these types to Dioxus
//! signals; everything behavioral lives here so it is testable without a
//! UI runtime.

pub mod debounce;
pub mod filters;
pub mod query_string;

pub use debounce::{DebounceGate, DebounceToken};
pub use filters::{split_default, FilterSet, FilterValue};
pub use query_string::QueryParams;
