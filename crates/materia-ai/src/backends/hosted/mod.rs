//! Hosted inference API client.
//!
//! Sends `{"inputs", "parameters": {"max_length"}}` to a model endpoint
//! and reads `[{"generated_text"}]` back. A bearer token is attached when
//! one is configured.

mod api;
mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::HostedClient;
pub use config::HostedConfig;
