//! Core trait abstractions.

pub mod extractor;

pub use extractor::EmailExtractor;
