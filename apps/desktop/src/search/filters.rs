//! Filter widgets over the shared filter mapping.
//!
//! Two variants of one component: a checkbox group holding a sequence entry
//! and a select dropdown holding a scalar entry. Each instance owns exactly
//! one filter name and never touches sibling keys.

use dioxus::prelude::*;

use portico_core::{split_default, FilterValue};

use crate::state::SearchContext;

/// Which control family a `SearchFilter` renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Checkbox,
    Select,
}

/// One named filter over the shared mapping. The kind fixes the shape of the
/// entry (sequence vs scalar) for the lifetime of the name. An empty
/// `default_value` means no default.
#[derive(Props, Clone, PartialEq)]
pub struct SearchFilterProps {
    pub kind: FilterKind,
    pub name: String,
    #[props(default)]
    pub values: Vec<String>,
    #[props(default)]
    pub default_value: String,
}

#[component]
pub fn SearchFilter(props: SearchFilterProps) -> Element {
    let SearchFilterProps { kind, name, values, default_value } = props;
    match kind {
        FilterKind::Checkbox => rsx! {
            CheckboxFilter { name, values, default_value }
        },
        FilterKind::Select => rsx! {
            SelectFilter { name, values, default_value }
        },
    }
}

#[component]
fn CheckboxFilter(
    name: String,
    values: Vec<String>,
    #[props(default)] default_value: String,
) -> Element {
    let mut ctx = use_context::<SearchContext>();

    // Seed the entry once per distinct default value. Overwrites whatever is
    // there; defaults never read prior state.
    {
        let name = name.clone();
        use_effect(use_reactive!(|(default_value,)| {
            if !default_value.is_empty() {
                let seeded = FilterValue::many(split_default(&default_value));
                ctx.update_filters(|filters| filters.overwritten(&name, seeded));
            }
        }));
    }

    let filters = ctx.filters.read();

    rsx! {
        fieldset { class: "filter-group",
            legend { class: "filter-label", "{name}" }
            for value in values.iter() {
                label {
                    key: "{value}",
                    class: "filter-option",
                    input {
                        r#type: "checkbox",
                        name: "{value}",
                        value: "{value}",
                        checked: filters.contains(&name, value),
                        onchange: {
                            let name = name.clone();
                            let value = value.clone();
                            move |_| {
                                ctx.update_filters(|filters| filters.toggled(&name, &value));
                            }
                        },
                    }
                    span { class: "filter-option-label", "{value}" }
                }
            }
        }
    }
}

#[component]
fn SelectFilter(
    name: String,
    values: Vec<String>,
    #[props(default)] default_value: String,
) -> Element {
    let mut ctx = use_context::<SearchContext>();

    {
        let name = name.clone();
        use_effect(use_reactive!(|(default_value,)| {
            if !default_value.is_empty() {
                let seeded = FilterValue::one(default_value);
                ctx.update_filters(|filters| filters.overwritten(&name, seeded));
            }
        }));
    }

    let filters = ctx.filters.read();
    let selection = filters.selection(&name).to_owned();

    rsx! {
        div { class: "filter-group",
            label { class: "filter-label", r#for: "filter-{name}", "{name}" }
            select {
                class: "filter-select",
                id: "filter-{name}",
                onchange: {
                    let name = name.clone();
                    move |e: Event<FormData>| {
                        // The empty selection means "All": the key is removed
                        // entirely, not left as an empty string.
                        ctx.update_filters(|filters| filters.with_selection(&name, &e.value()));
                    }
                },
                option { value: "", selected: selection.is_empty(), "All" }
                for value in values.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == selection,
                        "{value}"
                    }
                }
            }
        }
    }
}
