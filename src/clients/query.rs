//! Query parameters for outbound catalog calls.
//!
//! [`QueryParams`] is an ordered mapping from parameter name to an optional
//! scalar value. Absent values are kept in the mapping (so callers can pass
//! field arguments straight through) but never reach the query string.
//! Identifier lists are joined with commas before transmission.
//!
//! # Example
//!
//! ```rust
//! use spotify_graphql::clients::QueryParams;
//!
//! let params = QueryParams::new()
//!     .ids(&["a", "b"])
//!     .param("market", Some("SE"))
//!     .param("limit", None::<i32>);
//!
//! assert_eq!(params.to_query_string(), "ids=a%2Cb&market=SE");
//! ```

use std::fmt::Display;

/// Ordered query parameters with optional values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, Option<String>)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter. `None` values are recorded but never serialized.
    #[must_use]
    pub fn param<V: Display>(mut self, name: impl Into<String>, value: Option<V>) -> Self {
        self.entries
            .push((name.into(), value.map(|value| value.to_string())));
        self
    }

    /// Appends a list-valued parameter joined with commas, in input order.
    #[must_use]
    pub fn list<S: AsRef<str>>(self, name: impl Into<String>, values: &[S]) -> Self {
        let joined = join_ids(values);
        self.param(name, Some(joined))
    }

    /// Appends the `ids` parameter joined with commas, in input order.
    #[must_use]
    pub fn ids<S: AsRef<str>>(self, ids: &[S]) -> Self {
        self.list("ids", ids)
    }

    /// Returns the parameters that carry a value, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name.as_str(), value)))
    }

    /// Returns the value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.present()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Serializes the present parameters, percent-encoded, in insertion order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.present()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Appends the serialized parameters to `path`, omitting `?` when empty.
    #[must_use]
    pub fn apply_to(&self, path: &str) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

/// Joins identifiers with commas, preserving their order.
#[must_use]
pub fn join_ids<S: AsRef<str>>(ids: &[S]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_are_omitted() {
        let params = QueryParams::new()
            .param("market", None::<String>)
            .param("limit", Some(10))
            .param("offset", None::<i32>)
            .param("locale", Some("sv_SE"));

        assert_eq!(params.to_query_string(), "limit=10&locale=sv_SE");
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let params = QueryParams::new()
            .param("z", Some("1"))
            .param("a", Some("2"))
            .param("m", Some("3"));

        assert_eq!(params.to_query_string(), "z=1&a=2&m=3");
    }

    #[test]
    fn test_ids_are_comma_joined_in_order() {
        let params = QueryParams::new().ids(&["t3", "t1", "t2"]);
        assert_eq!(params.get("ids"), Some("t3,t1,t2"));
    }

    #[test]
    fn test_join_ids_of_single_id_has_no_comma() {
        assert_eq!(join_ids(&["only"]), "only");
        assert_eq!(join_ids::<&str>(&[]), "");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        let params = QueryParams::new().param("q", Some("daft punk"));
        assert_eq!(params.to_query_string(), "q=daft%20punk");
    }

    #[test]
    fn test_apply_to_omits_question_mark_without_params() {
        let empty = QueryParams::new().param("market", None::<String>);
        assert_eq!(empty.apply_to("/albums/1"), "/albums/1");

        let params = QueryParams::new().param("market", Some("US"));
        assert_eq!(params.apply_to("/albums/1"), "/albums/1?market=US");
    }
}
