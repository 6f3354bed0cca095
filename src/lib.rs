//! Track Share Service Library
//!
//! This library turns a track title and artist into a shareable Spotify link.
//! It authenticates against the Spotify accounts service with the
//! client-credentials grant, caches the resulting token in memory, searches the
//! catalog and falls back to a search-page link when nothing matches.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for `/`, `/health` and `/api/search`
//! - `cli` - Command implementations for the binary
//! - `config` - Configuration from environment variables and `.env` files
//! - `error` - Error type and its HTTP mapping
//! - `management` - In-memory token cache
//! - `server` - Router, self-hosted listener and host-invoked handler
//! - `spotify` - Spotify Web API client calls
//! - `types` - Data structures for tokens, queries and API payloads
//! - `utils` - Query and URL helpers
//!
//! # Example
//!
//! ```
//! use trackshare::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> trackshare::error::Result<()> {
//!     config::load_env().await?;
//!     server::start_api_server(config::Config::from_env()?).await
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

// Status lines for the CLI commands. The service itself logs through `tracing`.

/// `[o] message` in blue, on stdout.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// `[✓] message` in green, on stdout. Used for the resolved link.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// `[!] message` in red on stderr, then exits with status 1.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// `[!] message` in yellow, on stderr.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
