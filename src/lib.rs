//! Coin Change CLI Library
//!
//! This library provides the client side of a remote coin-change calculation
//! service: a health probe, a validated calculate request, a persisted
//! denomination selection, and table rendering of the returned breakdown.
//! The coin-change computation itself lives in the external service; this
//! crate only speaks its HTTP contract.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - The client-visible error taxonomy
//! - `management` - Persistence of the denomination selection
//! - `service` - Coin-change service HTTP client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Monetary parsing and formatting helpers
//!
//! # Example
//!
//! ```
//! use changecli::{config, service};
//!
//! #[tokio::main]
//! async fn main() -> changecli::Res<()> {
//!     config::load_env().await?;
//!     let state = service::probe(&config::api_url()).await;
//!     println!("{}", state);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod service;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for glue code that mixes
/// error sources, using a boxed dynamic error trait object with Send + Sync
/// bounds for async contexts. Contract-level failures use the structured
/// [`error::ChangeError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("3 of 12 denominations selected.");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Total coins: {}", total);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Every error is terminal for the
/// current attempt; there is no automatic retry.
///
/// # Example
///
/// ```
/// error!("Cannot load environment. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// potential issues that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Selection cache not found, starting empty");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
