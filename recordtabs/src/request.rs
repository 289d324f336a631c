//! Request parameters visible to record tabs

use indexmap::IndexMap;
use tracing::trace;

/// Parameters of the HTTP request a tab is rendered for
pub trait Request {
    /// Form (POST body) parameter
    fn post(&self, name: &str) -> Option<&str>;

    /// Query string parameter
    fn query(&self, name: &str) -> Option<&str>;

    /// Parameter from the form, falling back to the query string
    fn param(&self, name: &str) -> Option<&str> {
        self.post(name).or_else(|| self.query(name))
    }
}

/// In-memory request parameters
///
/// ```rust
/// use recordtabs::{Request, RequestParams};
///
/// let request = RequestParams::from_encoded("hierarchy=coll-1&page=2", "hierarchy=coll-2");
/// assert_eq!(request.query("page"), Some("2"));
/// assert_eq!(request.param("hierarchy"), Some("coll-2"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    post: IndexMap<String, String>,
    query: IndexMap<String, String>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `application/x-www-form-urlencoded` query string and form body
    ///
    /// A leading `?` on the query string is ignored. Repeated names keep the
    /// last value.
    pub fn from_encoded(query: &str, post: &str) -> Self {
        let params = Self {
            query: parse_encoded(query.strip_prefix('?').unwrap_or(query)),
            post: parse_encoded(post),
        };
        trace!(
            "Parsed request with {} query and {} post parameters",
            params.query.len(),
            params.post.len()
        );
        params
    }

    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn with_post(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.post.insert(name.into(), value.into());
        self
    }
}

impl Request for RequestParams {
    fn post(&self, name: &str) -> Option<&str> {
        self.post.get(name).map(String::as_str)
    }

    fn query(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

fn parse_encoded(input: &str) -> IndexMap<String, String> {
    url::form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_preferred_over_query() {
        let request = RequestParams::new()
            .with_query("hierarchy", "from-query")
            .with_post("hierarchy", "from-post");
        assert_eq!(request.param("hierarchy"), Some("from-post"));
    }

    #[test]
    fn test_query_used_without_post() {
        let request = RequestParams::new().with_query("hierarchy", "from-query");
        assert_eq!(request.param("hierarchy"), Some("from-query"));
        assert_eq!(request.param("missing"), None);
    }

    #[test]
    fn test_empty_post_value_still_wins() {
        let request = RequestParams::from_encoded("hierarchy=q", "hierarchy=");
        assert_eq!(request.param("hierarchy"), Some(""));
    }

    #[test]
    fn test_from_encoded_decodes() {
        let request = RequestParams::from_encoded("?hierarchy=coll%2F1&x=a+b", "");
        assert_eq!(request.query("hierarchy"), Some("coll/1"));
        assert_eq!(request.query("x"), Some("a b"));
        assert_eq!(request.post("hierarchy"), None);
    }

    #[test]
    fn test_repeated_names_keep_last() {
        let request = RequestParams::from_encoded("hierarchy=a&hierarchy=b", "");
        assert_eq!(request.query("hierarchy"), Some("b"));
    }
}
