//! The endpoint registry.
//!
//! An [`EndpointRegistry`] maps endpoint names to configured
//! [`RestClient`]s and tracks two pieces of fallback state: the default
//! endpoint (returned by [`EndpointRegistry::default_endpoint`]) and the
//! default base URL (applied to endpoints registered afterwards without an
//! explicit target).
//!
//! The registry is meant to be populated once during application startup
//! and read afterwards; registration and lookup are plain map operations.

use std::collections::BTreeMap;

use resthub_rest::{ClientConfig, RequestDefaults, RestClient};

use crate::descriptor::{EndpointTarget, RegistryDescriptor};
use crate::error::Error;

/// A registry of named REST endpoints.
///
/// # Example
///
/// ```ignore
/// use resthub_registry::EndpointRegistry;
///
/// let mut registry = EndpointRegistry::new();
/// registry
///     .register_endpoint("api", "https://api.example.com", None)?
///     .register_endpoint("auth", "https://auth.example.com", None)?
///     .set_default_endpoint("api");
///
/// let api = registry.default_endpoint().unwrap();
/// let user: Option<User> = api.find_one("users", "123")?;
/// ```
#[derive(Default)]
pub struct EndpointRegistry {
    endpoints: BTreeMap<String, RestClient>,
    default_endpoint: Option<String>,
    default_base_url: Option<String>,
}

impl EndpointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new endpoint, replacing any existing entry with the
    /// same name.
    ///
    /// The target resolves in order:
    /// 1. `Configure(f)`: `f` receives a [`ClientConfig`] pre-seeded with
    ///    `defaults`; the returned configuration builds the client and its
    ///    defaults become the endpoint's stored defaults.
    /// 2. `Unconfigured` with no registry default base URL: the client has
    ///    no base URL (only absolute request paths will work).
    /// 3. `Unconfigured` with a registry default base URL: the client is
    ///    based at the registry default.
    /// 4. `BaseUrl(url)`: the client is based at `url`.
    ///
    /// `defaults`, when given, are stored verbatim on the endpoint (or, on
    /// the callback path, seed the builder).
    pub fn register_endpoint(
        &mut self,
        name: &str,
        target: impl Into<EndpointTarget>,
        defaults: Option<RequestDefaults>,
    ) -> Result<&mut Self, Error> {
        let mut entry_defaults = defaults.unwrap_or_default();

        let mut client = match target.into() {
            EndpointTarget::Configure(configure) => {
                let config = configure(ClientConfig::new().with_defaults(entry_defaults.clone()));
                // transfer merged defaults from the builder back to the entry
                entry_defaults = config.defaults().clone();
                RestClient::from_config(name, config)?
            }
            EndpointTarget::Unconfigured => match self.default_base_url.as_deref() {
                None => RestClient::new(name),
                Some(base_url) => {
                    RestClient::from_config(name, ClientConfig::new().with_base_url(base_url))?
                }
            },
            EndpointTarget::BaseUrl(url) => {
                RestClient::from_config(name, ClientConfig::new().with_base_url(url))?
            }
        };

        client.defaults = entry_defaults;

        log::debug!(
            "registered endpoint '{}' (base URL: {})",
            name,
            client
                .base_url()
                .map(|url| url.as_str())
                .unwrap_or("<none>")
        );

        self.endpoints.insert(name.to_string(), client);

        Ok(self)
    }

    /// Look up an endpoint by name.
    pub fn get_endpoint(&self, name: &str) -> Option<&RestClient> {
        self.endpoints.get(name)
    }

    /// Look up an endpoint by name, mutably (e.g. to adjust its defaults).
    pub fn get_endpoint_mut(&mut self, name: &str) -> Option<&mut RestClient> {
        self.endpoints.get_mut(name)
    }

    /// The current default endpoint's client.
    ///
    /// Returns `None` when no default was set, or when the default names an
    /// endpoint that was never registered.
    pub fn default_endpoint(&self) -> Option<&RestClient> {
        self.default_endpoint
            .as_deref()
            .and_then(|name| self.endpoints.get(name))
    }

    /// Check whether an endpoint has been registered.
    pub fn endpoint_exists(&self, name: &str) -> bool {
        self.endpoints.contains_key(name)
    }

    /// Set the default endpoint by name.
    ///
    /// Setting a name that was never registered is not an error; the
    /// default simply resolves to `None` until an endpoint with that name
    /// appears.
    pub fn set_default_endpoint(&mut self, name: &str) -> &mut Self {
        log::debug!("default endpoint set to '{}'", name);
        self.default_endpoint = Some(name.to_string());
        self
    }

    /// Set the base URL applied to endpoints registered from now on
    /// without an explicit target. Existing endpoints are unaffected.
    pub fn set_default_base_url(&mut self, base_url: &str) -> &mut Self {
        log::debug!("default base URL set to '{}'", base_url);
        self.default_base_url = Some(base_url.to_string());
        self
    }

    /// Names of all registered endpoints.
    pub fn endpoint_names(&self) -> Vec<&str> {
        self.endpoints.keys().map(String::as_str).collect()
    }

    /// Number of registered endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Apply a whole-registry descriptor.
    ///
    /// The default base URL is applied first so that listed endpoints pick
    /// it up. Endpoints register in list order; an entry with
    /// `default: true` becomes the default immediately, so the last such
    /// entry wins. A top-level `defaultEndpoint` is applied after the list
    /// and wins over the per-entry flags.
    pub fn configure(&mut self, descriptor: RegistryDescriptor) -> Result<&mut Self, Error> {
        if let Some(base_url) = descriptor.default_base_url {
            self.set_default_base_url(&base_url);
        }

        for endpoint in descriptor.endpoints {
            self.register_endpoint(&endpoint.name, endpoint.endpoint, endpoint.config)?;

            if endpoint.default {
                self.set_default_endpoint(&endpoint.name);
            }
        }

        if let Some(name) = descriptor.default_endpoint {
            self.set_default_endpoint(&name);
        }

        Ok(self)
    }
}
