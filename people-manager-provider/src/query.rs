//! OData resource path builder
//!
//! Produces relative paths such as
//! `people?$select=UserName,FirstName&$top=10&$skip=0`.
//! Path segments (`('key')`, `/$count`) attach to the resource; everything
//! else becomes a `$`-prefixed query option, in the order the builder
//! methods were called.

use crate::types::PaginationParams;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ODataQuery {
    path: String,
    options: Vec<String>,
}

impl ODataQuery {
    pub fn new(segment: impl Into<String>) -> Self {
        Self {
            path: segment.into(),
            options: Vec::new(),
        }
    }

    /// Address a single entity: `people('russellwhyte')`
    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        self.path.push_str(&format!("('{}')", string_literal(key)));
        self
    }

    /// Ask for the raw count: `people/$count`
    #[must_use]
    pub fn with_count(mut self) -> Self {
        self.path.push_str("/$count");
        self
    }

    #[must_use]
    pub fn with_select(mut self, properties: &[&str]) -> Self {
        let select = properties.join(",");
        self.options.push(format!("$select={select}"));
        self
    }

    #[must_use]
    pub fn with_pagination(mut self, params: &PaginationParams) -> Self {
        self.options.push(format!("$top={}", params.page_size));
        self.options.push(format!("$skip={}", params.skip()));
        self
    }

    /// `contains(P, 'term')` for every property, joined with `or`
    #[must_use]
    pub fn with_filter_contains(mut self, term: &str, properties: &[&str]) -> Self {
        let literal = string_literal(term);
        let clauses: Vec<String> = properties
            .iter()
            .map(|property| format!("contains({property},'{literal}')"))
            .collect();
        let filter = clauses.join(" or ");
        self.options.push(format!("$filter={filter}"));
        self
    }

    pub fn build(&self) -> String {
        if self.options.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.options.join("&"))
        }
    }
}

impl std::fmt::Display for ODataQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

/// Escape a value for use inside an OData single-quoted string literal.
///
/// Quotes are doubled per the OData ABNF, then the value is percent-encoded
/// so it cannot break out of the query string.
fn string_literal(value: &str) -> String {
    urlencoding::encode(&value.replace('\'', "''")).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_segment() {
        assert_eq!(ODataQuery::new("people").build(), "people");
    }

    #[test]
    fn pagination_adds_top_and_skip() {
        let query = ODataQuery::new("people").with_pagination(&PaginationParams::new(2, 10));
        assert_eq!(query.build(), "people?$top=10&$skip=10");
    }

    #[test]
    fn first_page_has_no_offset() {
        let query = ODataQuery::new("people").with_pagination(&PaginationParams::new(1, 20));
        assert_eq!(query.build(), "people?$top=20&$skip=0");
    }

    #[test]
    fn select_then_pagination_keeps_call_order() {
        let query = ODataQuery::new("people")
            .with_select(&["UserName", "FirstName", "LastName"])
            .with_pagination(&PaginationParams::new(3, 5));
        assert_eq!(
            query.build(),
            "people?$select=UserName,FirstName,LastName&$top=5&$skip=10"
        );
    }

    #[test]
    fn count_segment() {
        assert_eq!(
            ODataQuery::new("people").with_count().build(),
            "people/$count"
        );
    }

    #[test]
    fn key_segment() {
        assert_eq!(
            ODataQuery::new("people").with_key("russellwhyte").build(),
            "people('russellwhyte')"
        );
    }

    #[test]
    fn key_with_quote_is_escaped() {
        assert_eq!(
            ODataQuery::new("people").with_key("o'neil").build(),
            "people('o%27%27neil')"
        );
    }

    #[test]
    fn filter_joins_properties_with_or() {
        let query =
            ODataQuery::new("people").with_filter_contains("doe", &["UserName", "FirstName"]);
        assert_eq!(
            query.build(),
            "people?$filter=contains(UserName,'doe') or contains(FirstName,'doe')"
        );
    }

    #[test]
    fn filter_term_is_percent_encoded() {
        let query = ODataQuery::new("people").with_filter_contains("a&b", &["UserName"]);
        assert_eq!(query.build(), "people?$filter=contains(UserName,'a%26b')");
    }
}
