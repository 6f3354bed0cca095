//! # CLI Module
//!
//! Command implementations behind the `trackshare` binary.
//!
//! - [`serve`] - Runs the HTTP service. When `APP_ENV=production` no listener
//!   is started, because an external host drives the router through
//!   [`crate::server::HostedHandler`].
//! - [`search`] - One-off lookup from the terminal, printing the same URL the
//!   `/api/search` endpoint would return.
//!
//! Both take a fully loaded [`crate::config::Config`]; loading the
//! environment and initialising logging happens in `main`.

mod search;
mod serve;

pub use search::search;
pub use serve::serve;
