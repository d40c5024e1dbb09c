//! Local model server client.
//!
//! Blocking completions go to `/api/generate` with `stream: false`.
//! Streaming completions go to `/api/chat` with `stream: true` and arrive
//! as newline-delimited JSON carrying `message.content` fragments.

mod api;
mod client;
mod config;


pub use client::LocalClient;
pub use config::LocalConfig;
