//! Declarative endpoint configuration.
//!
//! A [`RegistryDescriptor`] describes a whole registry in one value and is
//! applied with [`EndpointRegistry::configure`](crate::EndpointRegistry::configure).
//! Descriptors deserialize from JSON documents like:
//!
//! ```json
//! {
//!     "defaultBaseUrl": "https://api.example.com",
//!     "defaultEndpoint": "api",
//!     "endpoints": [
//!         {"name": "api"},
//!         {"name": "auth", "endpoint": "https://auth.example.com", "default": true},
//!         {"name": "search", "config": {"headers": {"X-Api-Key": "secret"}}}
//!     ]
//! }
//! ```
//!
//! Field names follow the camelCase wire shape above. An `endpoint` string
//! becomes [`EndpointTarget::BaseUrl`]; a missing or null `endpoint` becomes
//! [`EndpointTarget::Unconfigured`]. The [`EndpointTarget::Configure`]
//! variant carries a closure and is therefore programmatic-only.

use std::fmt;

use serde::{Deserialize, Deserializer};

use resthub_rest::{ClientConfig, RequestDefaults};

use crate::error::Error;

/// A configuration callback: receives a builder pre-seeded with the
/// endpoint's defaults, returns the finished configuration.
pub type ConfigureFn = Box<dyn FnOnce(ClientConfig) -> ClientConfig>;

/// Where an endpoint points.
///
/// The registry resolves this when registering:
/// - `Unconfigured` falls back to the registry's default base URL if one is
///   set, otherwise the client is built without a base URL.
/// - `BaseUrl` configures the client's base URL directly.
/// - `Configure` hands full control to a callback.
#[derive(Default)]
pub enum EndpointTarget {
    #[default]
    Unconfigured,
    BaseUrl(String),
    Configure(ConfigureFn),
}

impl EndpointTarget {
    /// Wrap a configuration callback.
    pub fn configure<F>(f: F) -> Self
    where
        F: FnOnce(ClientConfig) -> ClientConfig + 'static,
    {
        EndpointTarget::Configure(Box::new(f))
    }
}

impl fmt::Debug for EndpointTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointTarget::Unconfigured => write!(f, "Unconfigured"),
            EndpointTarget::BaseUrl(url) => f.debug_tuple("BaseUrl").field(url).finish(),
            EndpointTarget::Configure(_) => write!(f, "Configure(..)"),
        }
    }
}

impl From<&str> for EndpointTarget {
    fn from(url: &str) -> Self {
        EndpointTarget::BaseUrl(url.to_string())
    }
}

impl From<String> for EndpointTarget {
    fn from(url: String) -> Self {
        EndpointTarget::BaseUrl(url)
    }
}

impl<'de> Deserialize<'de> for EndpointTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let url = Option::<String>::deserialize(deserializer)?;
        Ok(match url {
            Some(url) => EndpointTarget::BaseUrl(url),
            None => EndpointTarget::Unconfigured,
        })
    }
}

/// One endpoint entry in a [`RegistryDescriptor`].
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// The name the endpoint is registered under.
    pub name: String,

    /// Where the endpoint points.
    #[serde(default)]
    pub endpoint: EndpointTarget,

    /// Request defaults stored on the endpoint.
    #[serde(default)]
    pub config: Option<RequestDefaults>,

    /// Mark this endpoint as the registry default.
    #[serde(default)]
    pub default: bool,
}

impl EndpointDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint = EndpointTarget::BaseUrl(url.into());
        self
    }

    pub fn with_target(mut self, target: EndpointTarget) -> Self {
        self.endpoint = target;
        self
    }

    pub fn with_config(mut self, config: RequestDefaults) -> Self {
        self.config = Some(config);
        self
    }

    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }
}

/// A whole-registry configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistryDescriptor {
    /// Base URL for endpoints listed without an explicit target.
    #[serde(default)]
    pub default_base_url: Option<String>,

    /// Name of the default endpoint; applied last, wins over per-entry
    /// `default` flags.
    #[serde(default)]
    pub default_endpoint: Option<String>,

    /// Endpoints to register, in order.
    #[serde(default)]
    pub endpoints: Vec<EndpointDescriptor>,
}

impl RegistryDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a descriptor from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(|e| Error::Descriptor {
            message: e.to_string(),
        })
    }

    pub fn with_default_base_url(mut self, url: impl Into<String>) -> Self {
        self.default_base_url = Some(url.into());
        self
    }

    pub fn with_default_endpoint(mut self, name: impl Into<String>) -> Self {
        self.default_endpoint = Some(name.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: EndpointDescriptor) -> Self {
        self.endpoints.push(endpoint);
        self
    }
}
