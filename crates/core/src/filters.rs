//! Filter criteria applied to a search session.
//!
//! A filter is a named entry whose value is either a single scalar (select
//! filters) or an ordered sequence of unique members (checkbox filters). The
//! mapping is owned by the search context; each widget instance owns exactly
//! one named entry. Every update operation here builds a new `FilterSet`
//! from the current one, so callers always re-derive from the latest context
//! value rather than mutating a captured copy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Filter values
// ---------------------------------------------------------------------------

/// Value of one named filter entry.
///
/// Serialized untagged, so a scalar entry is a bare string and a sequence
/// entry is a string array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    One(String),
    Many(Vec<String>),
}

impl FilterValue {
    pub fn one(value: impl Into<String>) -> Self {
        FilterValue::One(value.into())
    }

    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Many(values.into_iter().map(Into::into).collect())
    }
}

/// Split a checkbox default string on commas, exactly as written: no
/// trimming, no empty-segment filtering. `"a,c"` seeds two checked members.
pub fn split_default(raw: &str) -> Vec<String> {
    raw.split(',').map(ToOwned::to_owned).collect()
}

// ---------------------------------------------------------------------------
// Filter set
// ---------------------------------------------------------------------------

/// Active filter criteria for a search session, keyed by filter name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    entries: BTreeMap<String, FilterValue>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.entries.get(name)
    }

    /// Names of the active entries, in stable order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Checked state for a checkbox value: true iff the entry exists and
    /// contains `value`. An absent entry is a valid initial state.
    pub fn contains(&self, name: &str, value: &str) -> bool {
        match self.entries.get(name) {
            Some(FilterValue::Many(members)) => members.iter().any(|m| m == value),
            Some(FilterValue::One(scalar)) => scalar == value,
            None => false,
        }
    }

    /// Displayed selection for a select filter: the scalar if present, else
    /// empty (meaning "All"). A sequence under a select-owned name renders
    /// as "All" rather than guessing a member.
    pub fn selection(&self, name: &str) -> &str {
        match self.entries.get(name) {
            Some(FilterValue::One(scalar)) => scalar,
            _ => "",
        }
    }

    /// Checkbox toggle for `value` under `name`.
    ///
    /// Absent entry → one-element sequence. Non-member → appended last.
    /// Member → first occurrence removed; an emptied sequence keeps its key.
    /// An empty `value` is a no-op.
    pub fn toggled(&self, name: &str, value: &str) -> FilterSet {
        if value.is_empty() {
            return self.clone();
        }

        let mut entries = self.entries.clone();
        match entries.get_mut(name) {
            None => {
                entries.insert(name.to_owned(), FilterValue::many([value]));
            }
            Some(FilterValue::Many(members)) => {
                if let Some(pos) = members.iter().position(|m| m == value) {
                    members.remove(pos);
                } else {
                    members.push(value.to_owned());
                }
            }
            Some(slot @ FilterValue::One(_)) => {
                // A scalar under a checkbox-owned name violates the shape
                // invariant; reset it to a fresh sequence.
                tracing::warn!(name, "scalar value under checkbox filter; resetting");
                *slot = FilterValue::many([value]);
            }
        }
        FilterSet { entries }
    }

    /// Select write for `value` under `name`: the empty selection removes
    /// the entry entirely, anything else overwrites the scalar.
    pub fn with_selection(&self, name: &str, value: &str) -> FilterSet {
        let mut entries = self.entries.clone();
        if value.is_empty() {
            entries.remove(name);
        } else {
            entries.insert(name.to_owned(), FilterValue::one(value));
        }
        FilterSet { entries }
    }

    /// Unconditional entry replacement, used when a widget applies its
    /// default value. Never reads prior state.
    pub fn overwritten(&self, name: &str, value: FilterValue) -> FilterSet {
        let mut entries = self.entries.clone();
        entries.insert(name.to_owned(), value);
        FilterSet { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(name: &str, raw_default: &str) -> FilterSet {
        FilterSet::new().overwritten(name, FilterValue::many(split_default(raw_default)))
    }

    #[test]
    fn default_split_is_exact() {
        assert_eq!(split_default("a,c"), vec!["a", "c"]);
        assert_eq!(split_default("a, c"), vec!["a", " c"], "no trimming");
        assert_eq!(split_default("a,,c"), vec!["a", "", "c"], "no empty filtering");
    }

    #[test]
    fn checkbox_toggle_appends_then_removes_first_occurrence() {
        let filters = seeded("lang", "a,c");
        assert_eq!(filters.get("lang"), Some(&FilterValue::many(["a", "c"])));

        let filters = filters.toggled("lang", "b");
        assert_eq!(filters.get("lang"), Some(&FilterValue::many(["a", "c", "b"])));

        let filters = filters.toggled("lang", "a");
        assert_eq!(filters.get("lang"), Some(&FilterValue::many(["c", "b"])));
    }

    #[test]
    fn checkbox_toggle_creates_entry_when_absent() {
        let filters = FilterSet::new().toggled("lang", "rust");
        assert!(filters.contains("lang", "rust"));
        assert_eq!(filters.get("lang"), Some(&FilterValue::many(["rust"])));
    }

    #[test]
    fn checkbox_double_toggle_restores_prior_membership() {
        let before = seeded("lang", "a,c");
        let after = before.toggled("lang", "b").toggled("lang", "b");
        assert_eq!(after, before, "toggling twice must round-trip the entry");
    }

    #[test]
    fn checkbox_toggle_empty_value_is_noop() {
        let before = seeded("lang", "a");
        let after = before.toggled("lang", "");
        assert_eq!(after, before);
    }

    #[test]
    fn unchecking_last_member_keeps_the_key() {
        let filters = FilterSet::new().toggled("lang", "rust").toggled("lang", "rust");
        assert_eq!(filters.get("lang"), Some(&FilterValue::Many(Vec::new())));
        assert!(!filters.contains("lang", "rust"));
    }

    #[test]
    fn checkbox_toggle_repairs_scalar_entry() {
        let filters = FilterSet::new()
            .overwritten("lang", FilterValue::one("rust"))
            .toggled("lang", "go");
        assert_eq!(filters.get("lang"), Some(&FilterValue::many(["go"])));
    }

    #[test]
    fn select_default_mounts_as_scalar() {
        let filters = FilterSet::new().overwritten("env", FilterValue::one("prod"));
        assert_eq!(filters.selection("env"), "prod");
        assert_eq!(filters.get("env"), Some(&FilterValue::one("prod")));
    }

    #[test]
    fn empty_selection_removes_the_key_entirely() {
        let filters = FilterSet::new()
            .overwritten("env", FilterValue::one("prod"))
            .with_selection("env", "");
        assert_eq!(filters.get("env"), None, "key must be absent, not empty");
        assert!(filters.is_empty());
    }

    #[test]
    fn new_selection_overwrites_never_accumulates() {
        let filters = FilterSet::new()
            .overwritten("env", FilterValue::one("prod"))
            .with_selection("env", "staging");
        assert_eq!(filters.get("env"), Some(&FilterValue::one("staging")));
        assert_eq!(filters.len(), 1);
    }

    #[test]
    fn widgets_touch_only_their_own_key() {
        let filters = seeded("lang", "a,c").with_selection("env", "prod");
        let filters = filters.toggled("lang", "b");
        assert_eq!(filters.selection("env"), "prod");
        assert_eq!(filters.names().collect::<Vec<_>>(), vec!["env", "lang"]);
    }

    #[test]
    fn untagged_wire_shape_is_scalar_or_array() {
        let filters = seeded("lang", "a,c").with_selection("env", "prod");
        let json = serde_json::to_string(&filters).expect("filters serialize");
        assert_eq!(json, r#"{"env":"prod","lang":["a","c"]}"#);

        let back: FilterSet = serde_json::from_str(&json).expect("filters deserialize");
        assert_eq!(back, filters);
    }
}
