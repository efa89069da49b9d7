//! Gemini structured-output client for RoomLens.
//!
//! Wraps the `generateContent` REST endpoint with a response schema that
//! forces the model to emit a [`RoomAnalysis`]-shaped JSON document
//! (closed enums for room type, scenario names, and ratings). Conformance
//! is the provider's job; this crate performs no retries of its own.

pub mod api;
pub mod schema;

pub use api::{GeminiClient, GeminiConfig, GeminiError};
