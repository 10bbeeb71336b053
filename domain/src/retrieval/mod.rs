//! Knowledge retrieval domain

pub mod entities;

pub use entities::{Document, RetrievedContext, SearchRequest};
