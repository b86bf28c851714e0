//! API client for the Generative Language service.

mod client;
mod types;

pub use client::GeminiClient;
