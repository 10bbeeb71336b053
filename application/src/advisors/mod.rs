//! Advisors wrap every chat request.
//!
//! ```text
//! DraftRequest ──▶ MemoryAdvisor ──▶ RememberedRequest
//!              ──▶ QuestionAnswerAdvisor ──▶ GroundedRequest
//!              ──▶ LoggingAdvisor (observes)
//! ```
//!
//! On the way back, once the reply stream finished without error, the
//! memory advisor stores the reply and the logging advisor records it.

pub mod logging;
pub mod memory;
pub mod pipeline;
pub mod request;
pub mod retrieval;

pub use logging::LoggingAdvisor;
pub use memory::MemoryAdvisor;
pub use pipeline::AdvisorPipeline;
pub use request::{
    AdvisorParams, CHAT_MEMORY_CONVERSATION_ID_KEY, CHAT_MEMORY_RETRIEVE_SIZE_KEY,
    DEFAULT_CHAT_MEMORY_CONVERSATION_ID, DraftRequest, GroundedRequest, RememberedRequest,
};
pub use retrieval::QuestionAnswerAdvisor;
