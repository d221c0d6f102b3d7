//! Operation descriptors.
//!
//! An [`Operation`] is one tool exposed to MCP clients. It carries the
//! tool's advertised metadata, the parameter list (from which both the input
//! schema and the required-argument check are derived), the remote
//! [`Endpoint`] it maps to, and how a successful result is rendered.

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Map, Value, json};

use super::error::ToolError;
use crate::domains::pylon::Endpoint;

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
    StringArray,
}

impl ParamKind {
    fn schema(&self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Number => json!({ "type": "number" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Object => json!({ "type": "object" }),
            Self::Array => json!({ "type": "array" }),
            Self::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
        }
    }
}

/// A single declared tool parameter.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    pub required: bool,
}

impl Param {
    pub const fn required(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
        }
    }
}

/// How a successful remote result is turned into tool output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Pretty-printed JSON of the response body.
    Json,
    /// A fixed confirmation message; the response body is discarded.
    Confirmation(&'static str),
}

impl Reply {
    pub fn render(&self, value: &Value) -> Result<String, ToolError> {
        match self {
            Self::Json => serde_json::to_string_pretty(value)
                .map_err(|e| ToolError::internal(format!("Failed to format response: {e}"))),
            Self::Confirmation(message) => Ok(message.to_string()),
        }
    }
}

/// A tool exposed to MCP clients and the remote call behind it.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [Param],
    pub endpoint: Endpoint,
    pub reply: Reply,
}

impl Operation {
    pub const fn new(name: &'static str, description: &'static str, endpoint: Endpoint) -> Self {
        Self {
            name,
            description,
            params: &[],
            endpoint,
            reply: Reply::Json,
        }
    }

    pub const fn with_params(self, params: &'static [Param]) -> Self {
        Self {
            name: self.name,
            description: self.description,
            params,
            endpoint: self.endpoint,
            reply: self.reply,
        }
    }

    pub const fn with_confirmation(self, message: &'static str) -> Self {
        Self {
            name: self.name,
            description: self.description,
            params: self.params,
            endpoint: self.endpoint,
            reply: Reply::Confirmation(message),
        }
    }

    /// Names of the required parameters, in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|p| p.required).map(|p| p.name)
    }

    /// Check that every required argument is present and non-null.
    ///
    /// Only presence is checked; values are not type-checked. A JSON `null`
    /// counts as missing: null fields are left out of the request body, so a
    /// required one would silently vanish, and a null path parameter would
    /// only fail later as an unusable path value.
    pub fn check_required(&self, args: &Map<String, Value>) -> Result<(), ToolError> {
        let missing: Vec<String> = self
            .required()
            .filter(|name| args.get(*name).is_none_or(Value::is_null))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ToolError::MissingArguments(missing))
        }
    }

    /// JSON Schema object describing the tool input.
    pub fn input_schema(&self) -> JsonObject {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| {
                let mut schema = p.kind.schema();
                schema["description"] = Value::from(p.description);
                (p.name.to_string(), schema)
            })
            .collect();

        let mut schema = Map::new();
        schema.insert("type".into(), Value::from("object"));
        schema.insert("properties".into(), Value::Object(properties));

        let required: Vec<Value> = self.required().map(Value::from).collect();
        if !required.is_empty() {
            schema.insert("required".into(), Value::Array(required));
        }

        schema
    }

    /// Create a Tool model for this operation (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNOOZE: Operation = Operation::new(
        "snooze_issue",
        "Snooze an issue until a specified time",
        Endpoint::post("issues/{issue_id}/snooze").with_body(&["until"]),
    )
    .with_params(&[
        Param::required("issue_id", ParamKind::String, "Issue ID"),
        Param::required("until", ParamKind::String, "Snooze until date/time (ISO format)"),
        Param::optional("note", ParamKind::String, "Internal note"),
    ])
    .with_confirmation("Issue snoozed successfully");

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test arguments must be an object"),
        }
    }

    #[test]
    fn test_input_schema() {
        let schema = Value::Object(SNOOZE.input_schema());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["until"]["type"], "string");
        assert_eq!(
            schema["properties"]["until"]["description"],
            "Snooze until date/time (ISO format)"
        );
        assert_eq!(schema["required"], json!(["issue_id", "until"]));
    }

    #[test]
    fn test_schema_omits_empty_required() {
        let op = Operation::new("get_me", "Get current user", Endpoint::get("me"));
        assert!(!op.input_schema().contains_key("required"));
    }

    #[test]
    fn test_string_array_schema() {
        assert_eq!(
            ParamKind::StringArray.schema(),
            json!({ "type": "array", "items": { "type": "string" } })
        );
    }

    #[test]
    fn test_check_required_reports_all_missing() {
        let err = SNOOZE.check_required(&Map::new()).unwrap_err();
        match err {
            ToolError::MissingArguments(missing) => assert_eq!(missing, vec!["issue_id", "until"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_required_treats_null_as_missing() {
        let err = SNOOZE
            .check_required(&args(json!({ "issue_id": "1", "until": null })))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required argument(s): until");
    }

    #[test]
    fn test_check_required_ignores_types_and_optionals() {
        assert!(
            SNOOZE
                .check_required(&args(json!({ "issue_id": 12, "until": false })))
                .is_ok()
        );
    }

    #[test]
    fn test_reply_render() {
        let value = json!({ "id": "42" });
        assert_eq!(Reply::Json.render(&value).unwrap(), "{\n  \"id\": \"42\"\n}");
        assert_eq!(SNOOZE.reply.render(&value).unwrap(), "Issue snoozed successfully");
    }

    #[test]
    fn test_to_tool() {
        let tool = SNOOZE.to_tool();
        assert_eq!(tool.name, "snooze_issue");
        assert_eq!(
            tool.description.as_deref(),
            Some("Snooze an issue until a specified time")
        );
        assert!(tool.input_schema.contains_key("properties"));
    }
}
