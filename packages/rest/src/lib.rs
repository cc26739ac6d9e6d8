//! # resthub-rest
//!
//! Named REST clients over `reqwest`.
//!
//! This crate provides the client layer of resthub: a [`RestClient`] wraps a
//! blocking HTTP client together with an optional base URL and the mutable
//! [`RequestDefaults`] that are merged into every request it sends.
//!
//! Clients are usually constructed through a [`ClientConfig`], the builder
//! that endpoint configuration callbacks receive:
//!
//! ```ignore
//! use resthub_rest::{ClientConfig, RestClient};
//!
//! let client = RestClient::from_config(
//!     "api",
//!     ClientConfig::new()
//!         .with_base_url("https://api.example.com")
//!         .with_default_header("Authorization", "Bearer token"),
//! )?;
//!
//! // GET https://api.example.com/users/123 with the default header
//! let user: Option<User> = client.find_one("users", "123")?;
//! ```
//!
//! All protocol behavior — connection handling, TLS, redirects — is
//! delegated to `reqwest`. This crate only resolves URLs, merges defaults,
//! and converts responses.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export main types
pub use client::RestClient;
pub use config::ClientConfig;
pub use error::Error;
pub use types::{ApiResponse, RequestDefaults};
