//! Configuration management for the coin-change CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. It provides a centralized way to
//! manage application configuration: the service base URL, the optional
//! request timeout, and the data directory holding the `.env` file and the
//! denomination selection cache.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Command-line flags (highest priority, resolved per invocation)
//! 2. Environment variables
//! 3. `.env` file in the local data directory
//! 4. Application defaults

use std::{env, path::PathBuf, time::Duration};

use dotenv;

/// Default base URL of the coin-change service when neither the `--api-url`
/// flag nor `CHANGE_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Loads environment variables from a `.env` file in the data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `changecli/.env` in the platform-specific local data directory
/// (or from `CHANGE_DATA_DIR` when set). A missing `.env` file is not an
/// error: every configuration value has a default.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/changecli/.env`
/// - macOS: `~/Library/Application Support/changecli/.env`
/// - Windows: `%LOCALAPPDATA%/changecli/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> crate::Res<()> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(".env");
    if path.is_file() {
        dotenv::from_path(&path)?;
    }
    Ok(())
}

/// Returns the directory holding the `.env` file and the selection cache.
///
/// Honors the `CHANGE_DATA_DIR` environment variable when set, otherwise
/// resolves to `changecli/` under the platform-specific local data directory.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = env::var("CHANGE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("changecli");
    path
}

/// Returns the configured base URL of the coin-change service.
///
/// Reads the `CHANGE_API_URL` environment variable, falling back to
/// [`DEFAULT_API_URL`]. The value is the scheme-and-authority part only;
/// the client appends `/api/v1/coin-change/...` paths to it.
///
/// # Example
///
/// ```
/// let url = api_url(); // e.g., "http://localhost:8080"
/// ```
pub fn api_url() -> String {
    env::var("CHANGE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Resolves the base URL for one invocation.
///
/// A `--api-url` flag wins over the environment; supplying a different base
/// URL this way makes the invocation probe that base fresh, with no status
/// carried over from any earlier probe.
pub fn resolve_api_url(flag: Option<String>) -> String {
    flag.unwrap_or_else(api_url)
}

/// Returns the optional request timeout for service calls.
///
/// Reads `CHANGE_API_TIMEOUT_SECS`. When unset or unparsable, requests run
/// to completion without a client-side deadline.
pub fn request_timeout() -> Option<Duration> {
    env::var("CHANGE_API_TIMEOUT_SECS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_secs)
}
