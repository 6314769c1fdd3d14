//! AI-backed extractor implementations.

pub mod openai;
pub mod prompts;

pub use openai::OpenAIExtractor;
