//! Model backend providers
//!
//! Only OpenAI-compatible endpoints are supported; any server speaking the
//! chat-completions and embeddings protocol can be used via `model.base_url`.

pub mod openai;
