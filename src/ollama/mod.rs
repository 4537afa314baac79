//! Generate endpoint integration
//!
//! [`OllamaClient`] sends prompts to the configured generate endpoint;
//! [`FragmentAccumulator`] decodes the NDJSON reply stream into the final
//! output text.

mod client;
mod ndjson;

pub use client::OllamaClient;
pub use ndjson::FragmentAccumulator;
