//! # Spotify Integration Module
//!
//! Thin client for the two Spotify Web API calls the service needs.
//!
//! ## Core Modules
//!
//! - [`auth`] - Client-credentials grant against the accounts service. The
//!   application authenticates as itself; no user is involved and no refresh
//!   token is issued, so an expired token is simply requested again.
//! - [`search`] - Track search against the catalog API with `limit=1`.
//!
//! ## Error Types
//!
//! Both modules return [`crate::error::Error`]: token failures as
//! `TokenAcquisition`, catalog failures as `UpstreamSearch`. Neither retries.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - `grant_type=client_credentials`
//! - `GET /v1/search` - `type=track`, `limit=1`

pub mod auth;
pub mod search;
