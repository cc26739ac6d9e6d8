//! # resthub-registry
//!
//! A registry of named REST endpoints.
//!
//! Applications configure endpoints once during startup — fluently, through
//! a declarative descriptor, or via a [`RegistrySetup`] — and fetch a
//! configured client by name afterwards:
//!
//! ```ignore
//! use resthub_registry::EndpointRegistry;
//!
//! let mut registry = EndpointRegistry::new();
//! registry
//!     .register_endpoint("api", "https://api.example.com", None)?
//!     .register_endpoint("auth", "https://auth.example.com", None)?
//!     .set_default_endpoint("api");
//!
//! let api = registry.default_endpoint().unwrap();
//! let user: Option<User> = api.find_one("users", "123")?;
//! ```
//!
//! The same shape as a JSON document, applied in one call:
//!
//! ```ignore
//! use resthub_registry::{EndpointRegistry, RegistryDescriptor};
//!
//! let descriptor = RegistryDescriptor::from_json(r#"{
//!     "defaultBaseUrl": "https://api.example.com",
//!     "defaultEndpoint": "api",
//!     "endpoints": [
//!         {"name": "api"},
//!         {"name": "auth", "endpoint": "https://auth.example.com"}
//!     ]
//! }"#)?;
//!
//! let mut registry = EndpointRegistry::new();
//! registry.configure(descriptor)?;
//! ```
//!
//! The registry owns its clients; lookups hand out references. All HTTP
//! behavior lives in the `resthub-rest` client layer.

pub mod descriptor;
pub mod error;
pub mod registry;
pub mod setup;

// Re-export main types
pub use descriptor::{EndpointDescriptor, EndpointTarget, RegistryDescriptor};
pub use error::Error;
pub use registry::EndpointRegistry;
pub use setup::RegistrySetup;

// Client-layer types that appear in this crate's API
pub use resthub_rest::{ApiResponse, ClientConfig, RequestDefaults, RestClient};
