//! JSON Schema tool converter.
//!
//! Produces the `tools` array entries of a chat-completion request from
//! [`ToolDefinition`]s.

use serde_json::{Map, Value, json};
use support_domain::ToolDefinition;

/// Converts tool definitions to OpenAI function tool schemas.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"`
/// - `"number"` → `"number"`
/// - `"integer"` → `"integer"`
/// - `"boolean"` → `"boolean"`
/// - anything else → `"string"`
pub struct JsonSchemaToolConverter;

impl JsonSchemaToolConverter {
    pub fn tool_to_schema(tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            let schema_type = match param.param_type.as_str() {
                "number" => "number",
                "integer" => "integer",
                "boolean" => "boolean",
                _ => "string",
            };

            properties.insert(
                param.name.clone(),
                json!({
                    "type": schema_type,
                    "description": param.description,
                }),
            );

            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "type": "function",
            "function": {
                "name": tool.name,
                "description": tool.description,
                "parameters": {
                    "type": "object",
                    "properties": properties,
                    "required": required,
                }
            }
        })
    }

    /// Schemas for every tool, sorted by name.
    pub fn tools_schema(tools: &[ToolDefinition]) -> Vec<Value> {
        let mut sorted: Vec<&ToolDefinition> = tools.iter().collect();
        sorted.sort_by_key(|t| &t.name);
        sorted.into_iter().map(Self::tool_to_schema).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use support_domain::ToolParameter;

    #[test]
    fn test_tool_to_schema() {
        let tool = ToolDefinition::new("getBookingDetails", "Get booking details")
            .with_parameter(ToolParameter::new("bookingNumber", "Booking number", true))
            .with_parameter(
                ToolParameter::new("passengers", "Passenger count", false).with_type("integer"),
            );

        let schema = JsonSchemaToolConverter::tool_to_schema(&tool);

        assert_eq!(schema["type"], "function");
        assert_eq!(schema["function"]["name"], "getBookingDetails");
        let params = &schema["function"]["parameters"];
        assert_eq!(params["type"], "object");
        assert_eq!(params["properties"]["bookingNumber"]["type"], "string");
        assert_eq!(params["properties"]["passengers"]["type"], "integer");

        let required = params["required"].as_array().unwrap();
        assert_eq!(required.len(), 1);
        assert_eq!(required[0], "bookingNumber");
    }

    #[test]
    fn test_tools_schema_sorted() {
        let tools = vec![
            ToolDefinition::new("zeta", "Z"),
            ToolDefinition::new("alpha", "A"),
        ];
        let schemas = JsonSchemaToolConverter::tools_schema(&tools);
        assert_eq!(schemas[0]["function"]["name"], "alpha");
        assert_eq!(schemas[1]["function"]["name"], "zeta");
        assert!(JsonSchemaToolConverter::tools_schema(&[]).is_empty());
    }
}
