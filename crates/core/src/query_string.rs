//! Query-string state for the addressable, shareable location.
//!
//! The search widgets only ever write the `query` parameter; rendering the
//! encoded form is for the shell's status line and for sharing.

use std::collections::BTreeMap;

/// Ordered name→value parameters with percent-encoded serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Set a parameter. An empty value removes the pair, keeping the
    /// shareable form clean.
    pub fn set(&mut self, name: &str, value: &str) {
        if value.is_empty() {
            self.params.remove(name);
        } else {
            self.params.insert(name.to_owned(), value.to_owned());
        }
    }

    /// `name=value&name2=value2` with percent-encoded names and values, in
    /// stable order.
    pub fn encode(&self) -> String {
        self.params
            .iter()
            .map(|(name, value)| {
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_single_pair_with_escaping() {
        let mut params = QueryParams::new();
        params.set("query", "observability dashboards");
        assert_eq!(params.encode(), "query=observability%20dashboards");
    }

    #[test]
    fn overwrites_keep_one_pair_per_name() {
        let mut params = QueryParams::new();
        params.set("query", "first");
        params.set("query", "last");
        assert_eq!(params.get("query"), Some("last"));
        assert_eq!(params.encode(), "query=last");
    }

    #[test]
    fn empty_value_removes_the_pair() {
        let mut params = QueryParams::new();
        params.set("query", "term");
        params.set("query", "");
        assert_eq!(params.get("query"), None);
        assert!(params.is_empty());
        assert_eq!(params.encode(), "");
    }

    #[test]
    fn encoding_order_is_stable() {
        let mut params = QueryParams::new();
        params.set("query", "a");
        params.set("cursor", "p2");
        assert_eq!(params.encode(), "cursor=p2&query=a");
    }
}
