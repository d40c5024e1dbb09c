//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Materia Configuration
# Only override what you want to change -- missing fields use defaults.

[backend]
# kind = "hosted"        # hosted, local, local-stream

[backend.hosted]
# endpoint = "https://api-inference.huggingface.co/models/microsoft/Phi-3-mini-4k-instruct"
# max_length = 100       # 1-4096
# The bearer token is read from this environment variable, never from this file.
# token_env = "HF_API_TOKEN"

[backend.local]
# endpoint = "http://localhost:11434"
# model = "llama3"
# format = "json"

[retry]
# max_attempts = 3       # 1-10
# delay_ms = 2000        # 0-60000, defaults to the backend's own delay
# backoff = "fixed"      # fixed, exponential

[http]
# connect_timeout_secs = 10   # 1-120
# request_timeout_secs = 120  # unset = no timeout

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
