//! # API Module
//!
//! HTTP endpoints of the track share service.
//!
//! ## Endpoints
//!
//! - [`root`] - `GET /`, plain-text liveness message.
//! - [`health`] - `GET /health`, JSON status with the crate version.
//! - [`search`] - `GET /api/search?title=..&artist=..`, returns `{ "url": .. }`
//!   with the first matching track's share link, or a search-page link when
//!   nothing matches.
//!
//! ## Errors
//!
//! Handlers return [`crate::error::Result`]. Missing parameters become a 400
//! with a specific message; every other failure becomes a 500 with a generic
//! message while the cause is logged.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use trackshare::{config::Config, server};
//!
//! let app = server::router(server::AppState::new(Config::from_env()?)?);
//! ```

mod health;
mod search;

pub use health::{LIVENESS_MESSAGE, health, root};
pub use search::{MISSING_PARAMS_MESSAGE, find_share_url, search};
