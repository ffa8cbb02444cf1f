//! # Uplink Gateway Library
//!
//! REST gateway in front of a satellite-connectivity partner API.
//! Authenticates with static API-key credentials, keeps a single cached
//! bearer token fresh in the background, and re-exposes the upstream
//! resource hierarchies as simplified JSON.
//!
//! Modules:
//! - `config` — YAML configuration and validation
//! - `auth` — access token value object, fetcher, cache and refresh loop
//! - `upstream` — shared outbound HTTP client and response envelope
//! - `organizations`, `datapools`, `servicelines` — resource verticals
//! - `server` — axum router and application state

pub mod auth;
pub mod config;
pub mod datapools;
pub mod error;
pub mod helpers;
pub mod observability;
pub mod organizations;
pub mod server;
pub mod servicelines;
pub mod tests;
pub mod upstream;
pub mod utils;
