//! List query parameters.

use std::collections::BTreeMap;

/// Filter values keyed by field name.
///
/// Values are kept as typed by the operator. Empty values are kept in the
/// map (so the filter bar can show them) but never reach the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(BTreeMap<String, String>);

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Pairs with a non-blank value, in field order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.trim()))
            .filter(|(_, v)| !v.is_empty())
    }

    /// Parse filter-bar input: whitespace-separated `field=value` pairs.
    /// A value with spaces is written in double quotes, `name="Ivan Petrov"`.
    ///
    /// Tokens without `=` or with an empty field name are ignored.
    pub fn parse(input: &str) -> Self {
        let mut filters = Self::new();
        for token in split_tokens(input) {
            if let Some((field, value)) = token.split_once('=') {
                if !field.is_empty() {
                    filters.set(field, value);
                }
            }
        }
        filters
    }

    /// Inverse of [`Filters::parse`] for the active pairs.
    pub fn to_input(&self) -> String {
        self.active()
            .map(|(k, v)| {
                if v.contains(char::is_whitespace) {
                    format!("{}=\"{}\"", k, v)
                } else {
                    format!("{}={}", k, v)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split on whitespace outside double quotes. Quotes are dropped; an
/// unclosed quote runs to the end of the input.
fn split_tokens(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in input.chars() {
        match c {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Page, size and filters of one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub size: u32,
    pub filters: Filters,
}

impl ListQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            filters: Filters::new(),
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec![format!("page={}", self.page), format!("size={}", self.size)];
        for (field, value) in self.filters.active() {
            parts.push(format!(
                "{}={}",
                urlencoding::encode(field),
                urlencoding::encode(value)
            ));
        }
        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_skips_empty_filters() {
        let query = ListQuery::new(2, 50).with_filters(
            Filters::new()
                .with("manufacture_id", "7")
                .with("model_id", "")
                .with("series_id", "   "),
        );
        assert_eq!(query.to_query_string(), "page=2&size=50&manufacture_id=7");
    }

    #[test]
    fn test_query_string_encodes_values() {
        let query =
            ListQuery::new(1, 10).with_filters(Filters::new().with("username", "ivan petrov&co"));
        assert_eq!(
            query.to_query_string(),
            "page=1&size=10&username=ivan%20petrov%26co"
        );
    }

    #[test]
    fn test_parse_filter_bar_input() {
        let filters = Filters::parse("user_id=5  tariff_id=2 junk =x successfully=");
        assert_eq!(filters.get("user_id"), Some("5"));
        assert_eq!(filters.get("tariff_id"), Some("2"));
        assert_eq!(filters.get("successfully"), Some(""));
        assert_eq!(filters.active().count(), 2);
        assert_eq!(filters.to_input(), "tariff_id=2 user_id=5");
    }

    #[test]
    fn test_quoted_values_keep_spaces() {
        let filters = Filters::parse(r#"first_name="Ivan Petrov" user_id=5 username="ivan  p"#);
        assert_eq!(filters.get("first_name"), Some("Ivan Petrov"));
        assert_eq!(filters.get("user_id"), Some("5"));
        assert_eq!(filters.get("username"), Some("ivan  p"));

        let input = filters.to_input();
        assert_eq!(input, r#"first_name="Ivan Petrov" user_id=5 username="ivan  p""#);
        assert_eq!(Filters::parse(&input), filters);

        let query = ListQuery::new(1, 10).with_filters(filters);
        assert!(query.to_query_string().contains("first_name=Ivan%20Petrov"));
    }

    #[test]
    fn test_blank_filters_are_empty() {
        assert!(Filters::new().with("key", " ").is_empty());
        assert!(!Filters::new().with("key", "site").is_empty());
    }
}
