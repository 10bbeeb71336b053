//! Chat client: builder, request execution and the reply stream.
//!
//! A request renders the system template, runs the advisor pipeline, then
//! streams backend turns. When a turn ends with function calls, the calls
//! run concurrently, their results are appended to the prompt and the
//! backend is asked again, up to [`ChatParams::max_tool_rounds`](crate::config::ChatParams)
//! rounds.

mod builder;
mod chat_client;
mod error;
mod response_stream;
mod tool_calls;

pub use builder::ChatClientBuilder;
pub use chat_client::{ChatClient, ChatRequestSpec};
pub use error::{ChatClientError, ChatError};
pub use response_stream::ChatResponseStream;
