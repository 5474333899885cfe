//! All summarization engine functionality

pub mod client;
pub mod prompt_builder;

// Re-export main types for convenience
pub use client::{InferenceClient, Summarizer, estimate_tokens};
pub use prompt_builder::{BriefPayload, assemble};
