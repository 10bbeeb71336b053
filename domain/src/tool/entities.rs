//! Tool domain entities

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Definition of a function the model may call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique name of the function (e.g., "getBookingDetails")
    pub name: String,
    /// Human-readable description shown to the model
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolParameter {
    pub name: String,
    pub description: String,
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number", "integer", "boolean")
    pub param_type: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// The set of functions offered to the model, ordered by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolSpec {
    tools: BTreeMap<String, ToolDefinition>,
}

impl ToolSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, tool: ToolDefinition) -> Self {
        self.tools.insert(tool.name.clone(), tool);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &ToolDefinition> {
        self.tools.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tools.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Keep only the named functions. Unknown names are skipped.
    pub fn subset<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> ToolSpec {
        names
            .into_iter()
            .filter_map(|name| self.tools.get(name))
            .fold(ToolSpec::new(), |spec, tool| spec.register(tool.clone()))
    }
}

/// Raised when the model's function-call arguments cannot be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolCallParseError {
    #[error("Invalid JSON arguments for '{name}': {reason}")]
    InvalidJson { name: String, reason: String },

    #[error("Arguments for '{name}' must be a JSON object")]
    NotAnObject { name: String },
}

/// A call to a function with arguments, as requested by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Backend-assigned call id, echoed back with the result
    pub id: String,
    /// Name of the function to call
    pub name: String,
    /// Arguments passed to the function
    pub arguments: HashMap<String, serde_json::Value>,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments: HashMap::new(),
        }
    }

    /// Build a call from the raw JSON argument text streamed by the backend.
    ///
    /// Empty text means no arguments. Anything other than a JSON object is rejected.
    pub fn from_raw(
        id: impl Into<String>,
        name: impl Into<String>,
        raw_arguments: &str,
    ) -> Result<Self, ToolCallParseError> {
        let name = name.into();
        let mut call = Self::new(id, name.clone());
        if raw_arguments.trim().is_empty() {
            return Ok(call);
        }
        let value: serde_json::Value = serde_json::from_str(raw_arguments).map_err(|e| {
            ToolCallParseError::InvalidJson {
                name: name.clone(),
                reason: e.to_string(),
            }
        })?;
        match value {
            serde_json::Value::Object(map) => {
                call.arguments = map.into_iter().collect();
                Ok(call)
            }
            _ => Err(ToolCallParseError::NotAnObject { name }),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Arguments re-encoded as a JSON object string
    pub fn arguments_json(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .arguments
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::Value::Object(map).to_string()
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument or return an error message
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_definition() {
        let tool = ToolDefinition::new("getBookingDetails", "Get booking details")
            .with_parameter(ToolParameter::new("bookingNumber", "Booking number", true));

        assert_eq!(tool.name, "getBookingDetails");
        assert_eq!(tool.parameters.len(), 1);
        assert_eq!(tool.parameters[0].param_type, "string");
    }

    #[test]
    fn test_tool_spec_subset() {
        let spec = ToolSpec::new()
            .register(ToolDefinition::new("a", "A"))
            .register(ToolDefinition::new("b", "B"));

        let subset = spec.subset(["b", "missing"]);
        assert_eq!(subset.len(), 1);
        assert!(subset.contains("b"));
        assert!(!subset.contains("a"));
        assert_eq!(spec.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_from_raw_object() {
        let call = ToolCall::from_raw(
            "call_1",
            "getBookingDetails",
            r#"{"bookingNumber":"551","firstName":"John"}"#,
        )
        .unwrap();
        assert_eq!(call.id, "call_1");
        assert_eq!(call.get_string("bookingNumber"), Some("551"));
        assert_eq!(call.get_string("firstName"), Some("John"));
    }

    #[test]
    fn test_from_raw_empty_means_no_arguments() {
        let call = ToolCall::from_raw("call_1", "f", "  ").unwrap();
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn test_from_raw_rejects_non_object() {
        assert!(matches!(
            ToolCall::from_raw("c", "f", "[1,2]"),
            Err(ToolCallParseError::NotAnObject { .. })
        ));
        assert!(matches!(
            ToolCall::from_raw("c", "f", "{not json"),
            Err(ToolCallParseError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_require_string() {
        let call = ToolCall::new("c", "f").with_arg("bookingNumber", "101");
        assert_eq!(call.require_string("bookingNumber"), Ok("101"));
        assert!(call.require_string("lastName").is_err());
    }

    #[test]
    fn test_arguments_json_round_trip() {
        let call = ToolCall::new("c", "f").with_arg("x", 1);
        let again = ToolCall::from_raw("c", "f", &call.arguments_json()).unwrap();
        assert_eq!(again, call);
    }
}
