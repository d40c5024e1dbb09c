//! Inference backend clients.
//!
//! - `hosted`: hosted inference API (`{inputs, parameters}` JSON, bearer token)
//! - `local`: local model server (`/api/generate` and streaming `/api/chat`)

pub mod hosted;
pub mod local;
mod transport;

pub use hosted::{HostedClient, HostedConfig};
pub use local::{LocalClient, LocalConfig};
pub use transport::HttpOptions;
