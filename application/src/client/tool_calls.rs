//! Reassembly of streamed function calls

use std::collections::BTreeMap;
use support_domain::{ToolCall, ToolCallParseError};

#[derive(Debug, Default)]
struct PartialCall {
    id: Option<String>,
    name: String,
    arguments: String,
}

/// Collects `ToolCallDelta` fragments of one backend turn, keyed by call index.
#[derive(Debug, Default)]
pub(crate) struct ToolCallAccumulator {
    calls: BTreeMap<usize, PartialCall>,
}

impl ToolCallAccumulator {
    pub(crate) fn push(
        &mut self,
        index: usize,
        id: Option<String>,
        name: Option<String>,
        arguments_delta: Option<String>,
    ) {
        let call = self.calls.entry(index).or_default();
        if let Some(id) = id {
            call.id = Some(id);
        }
        if let Some(name) = name {
            call.name.push_str(&name);
        }
        if let Some(delta) = arguments_delta {
            call.arguments.push_str(&delta);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Parse every accumulated call, in index order.
    pub(crate) fn finish(self) -> Result<Vec<ToolCall>, ToolCallParseError> {
        self.calls
            .into_iter()
            .map(|(index, call)| {
                let id = call.id.unwrap_or_else(|| format!("call_{}", index));
                ToolCall::from_raw(id, call.name, &call.arguments)
            })
            .collect()
    }
}
