//! Parlor - minimal browser chat for a locally hosted model endpoint
//!
//! This library serves a single-page chat widget, forwards each submitted
//! message to an Ollama-style `/api/generate` endpoint, accumulates the
//! newline-delimited JSON stream into one reply, and keeps the ordered
//! (input, output) transcript in process memory.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod history;
pub mod middleware;
pub mod ollama;
pub mod telemetry;
