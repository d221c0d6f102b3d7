//! Endpoint descriptors and request building.
//!
//! An [`Endpoint`] describes one REST call declaratively: the HTTP verb, a
//! path template with `{placeholder}` segments, the argument keys sent as
//! query parameters, and the argument keys sent in the JSON body.

use std::fmt;

use serde_json::{Map, Value};

use super::error::ApiError;

/// HTTP verb used by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

impl Verb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this verb carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }
}

impl From<Verb> for reqwest::Method {
    fn from(verb: Verb) -> Self {
        match verb {
            Verb::Get => reqwest::Method::GET,
            Verb::Post => reqwest::Method::POST,
            Verb::Patch => reqwest::Method::PATCH,
            Verb::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declarative description of a single REST endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub verb: Verb,
    /// Path relative to the base URL, e.g. `issues/{issue_id}/messages`.
    pub path: &'static str,
    pub query: &'static [&'static str],
    pub body: &'static [&'static str],
}

impl Endpoint {
    const fn new(verb: Verb, path: &'static str) -> Self {
        Self {
            verb,
            path,
            query: &[],
            body: &[],
        }
    }

    pub const fn get(path: &'static str) -> Self {
        Self::new(Verb::Get, path)
    }

    pub const fn post(path: &'static str) -> Self {
        Self::new(Verb::Post, path)
    }

    pub const fn patch(path: &'static str) -> Self {
        Self::new(Verb::Patch, path)
    }

    pub const fn delete(path: &'static str) -> Self {
        Self::new(Verb::Delete, path)
    }

    /// Set the argument keys forwarded as query parameters.
    pub const fn with_query(self, query: &'static [&'static str]) -> Self {
        Self {
            verb: self.verb,
            path: self.path,
            query,
            body: self.body,
        }
    }

    /// Set the argument keys forwarded in the JSON body.
    pub const fn with_body(self, body: &'static [&'static str]) -> Self {
        Self {
            verb: self.verb,
            path: self.path,
            query: self.query,
            body,
        }
    }

    /// Names of the `{placeholder}` segments in the path template.
    pub fn path_params(&self) -> impl Iterator<Item = &'static str> {
        self.path.split('/').filter_map(placeholder)
    }

    /// Build a concrete request from an argument bag.
    ///
    /// Path placeholders must be present; query and body keys are copied only
    /// when present and non-null. Keys not named by the endpoint are ignored.
    pub fn build(&self, args: &Map<String, Value>) -> Result<ApiRequest, ApiError> {
        let segments = self
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|segment| match placeholder(segment) {
                Some(name) => path_value(name, args.get(name)),
                None => Ok(segment.to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let query = self
            .query
            .iter()
            .filter_map(|key| present(args, key).map(|v| (key.to_string(), query_value(v))))
            .collect();

        let body = self.verb.has_body().then(|| {
            let fields = self
                .body
                .iter()
                .filter_map(|key| present(args, key).map(|v| (key.to_string(), v.clone())))
                .collect::<Map<_, _>>();
            Value::Object(fields)
        });

        Ok(ApiRequest {
            verb: self.verb,
            segments,
            query,
            body,
        })
    }
}

/// A fully resolved request, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub verb: Verb,
    /// Decoded path segments; the client percent-encodes them.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Path relative to the base URL, for logging.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Encoded query string, or `None` when there are no query parameters.
    pub fn query_string(&self) -> Result<Option<String>, ApiError> {
        if self.query.is_empty() {
            return Ok(None);
        }
        serde_urlencoded::to_string(&self.query)
            .map(Some)
            .map_err(|e| ApiError::invalid_argument("query", e.to_string()))
    }
}

fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

fn present<'a>(args: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    args.get(key).filter(|v| !v.is_null())
}

fn path_value(name: &str, value: Option<&Value>) -> Result<String, ApiError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(ApiError::invalid_argument(name, "must not be empty")),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(v.to_string()),
        Some(_) => Err(ApiError::invalid_argument(
            name,
            "expected a string or number",
        )),
        None => Err(ApiError::invalid_argument(name, "missing path parameter")),
    }
}

fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test arguments must be an object"),
        }
    }

    #[test]
    fn test_path_params() {
        let endpoint = Endpoint::post("knowledge-bases/{knowledge_base_id}/articles");
        let params: Vec<_> = endpoint.path_params().collect();
        assert_eq!(params, vec!["knowledge_base_id"]);
    }

    #[test]
    fn test_build_substitutes_path_and_filters_body() {
        let endpoint = Endpoint::post("knowledge-bases/{knowledge_base_id}/articles")
            .with_body(&["title", "content"]);
        let request = endpoint
            .build(&args(json!({
                "knowledge_base_id": "kb 1",
                "title": "Setup",
                "content": "Steps",
                "unrelated": true
            })))
            .unwrap();

        assert_eq!(request.verb, Verb::Post);
        assert_eq!(request.segments, vec!["knowledge-bases", "kb 1", "articles"]);
        assert_eq!(request.path(), "/knowledge-bases/kb 1/articles");
        assert_eq!(request.body, Some(json!({ "title": "Setup", "content": "Steps" })));
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_build_query_skips_absent_and_null() {
        let endpoint = Endpoint::get("issues").with_query(&["assignee", "status", "limit"]);
        let request = endpoint
            .build(&args(json!({ "status": "open", "assignee": null, "limit": 5 })))
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("status".to_string(), "open".to_string()),
                ("limit".to_string(), "5".to_string()),
            ]
        );
        assert_eq!(request.body, None);
        assert_eq!(
            request.query_string().unwrap().as_deref(),
            Some("status=open&limit=5")
        );
    }

    #[test]
    fn test_build_encodes_object_query_as_json() {
        let endpoint = Endpoint::get("issues/search").with_query(&["query", "filters"]);
        let request = endpoint
            .build(&args(json!({ "query": "login", "filters": { "state": "new" } })))
            .unwrap();

        assert_eq!(request.query[1].1, r#"{"state":"new"}"#);
    }

    #[test]
    fn test_build_body_bearing_request_without_fields_sends_empty_object() {
        let endpoint = Endpoint::patch("issues/{issue_id}").with_body(&["title"]);
        let request = endpoint.build(&args(json!({ "issue_id": 7 }))).unwrap();

        assert_eq!(request.segments, vec!["issues", "7"]);
        assert_eq!(request.body, Some(json!({})));
    }

    #[test]
    fn test_delete_has_no_body() {
        let endpoint = Endpoint::delete("webhooks/{webhook_id}");
        let request = endpoint.build(&args(json!({ "webhook_id": "wh_1" }))).unwrap();
        assert_eq!(request.verb, Verb::Delete);
        assert_eq!(request.body, None);
    }

    #[test]
    fn test_build_rejects_bad_path_values() {
        let endpoint = Endpoint::get("teams/{team_id}");

        let missing = endpoint.build(&Map::new()).unwrap_err();
        assert!(missing.to_string().contains("team_id"));

        let object = endpoint.build(&args(json!({ "team_id": { "id": 1 } }))).unwrap_err();
        assert!(matches!(object, ApiError::InvalidArgument { .. }));

        let empty = endpoint.build(&args(json!({ "team_id": "" }))).unwrap_err();
        assert!(empty.to_string().contains("must not be empty"));
    }
}
