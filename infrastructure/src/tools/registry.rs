//! Function Registry
//!
//! The [`FunctionRegistry`] holds the functions the model may call and
//! implements [`ToolExecutorPort`]. Calls are routed by function name.
//!
//! # Usage
//!
//! ```ignore
//! use support_infrastructure::tools::{BookingDetailsFunction, FunctionRegistry};
//!
//! let registry = FunctionRegistry::new()
//!     .register(BookingDetailsFunction::new(directory));
//!
//! assert!(registry.has_tool("getBookingDetails"));
//! let result = registry.execute(&call).await;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use support_application::ToolExecutorPort;
use support_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolSpec},
    value_objects::{ToolError, ToolResult},
};

/// A function the model can call by name.
#[async_trait]
pub trait Function: Send + Sync {
    /// Name, description and parameters advertised to the model.
    fn definition(&self) -> ToolDefinition;

    /// Run the function. Failures are reported in the result, never panicked.
    async fn call(&self, call: &ToolCall) -> ToolResult;
}

/// Registry of callable functions
///
/// Registering a second function with the same name replaces the first.
pub struct FunctionRegistry {
    functions: HashMap<String, Arc<dyn Function>>,
    tool_spec: ToolSpec,
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            tool_spec: ToolSpec::new(),
        }
    }

    /// Register a function
    pub fn register<F: Function + 'static>(self, function: F) -> Self {
        self.register_arc(Arc::new(function))
    }

    /// Register a function (Arc version)
    pub fn register_arc(mut self, function: Arc<dyn Function>) -> Self {
        let definition = function.definition();
        tracing::debug!(function = %definition.name, "Registered function");
        self.functions.insert(definition.name.clone(), function);
        self.tool_spec = self.tool_spec.register(definition);
        self
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for FunctionRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        match self.functions.get(&call.name) {
            Some(function) => function.call(call).await,
            None => ToolResult::failure(
                &call.name,
                ToolError::not_found(format!("Function not found: {}", call.name)),
            ),
        }
    }
}
