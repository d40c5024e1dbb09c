//! Reading the TOML config file, and writing the default one.

mod loader;
mod template;


pub use loader::{default_config_path, load_default, load_from_path, write_default_config};
