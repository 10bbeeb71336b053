//! Similarity search over embedded knowledge chunks

mod simple;

pub use simple::SimpleVectorStore;
