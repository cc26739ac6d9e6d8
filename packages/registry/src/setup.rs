//! Application bootstrap for the registry.
//!
//! A [`RegistrySetup`] carries an options-provider callback that receives
//! the registry once, at install time. [`RegistrySetup::customize`] returns
//! a new setup bound to a different provider, so a library can expose a
//! pre-built setup that applications reconfigure without shared mutable
//! state.

use crate::error::Error;
use crate::registry::EndpointRegistry;

type OptionsProvider = Box<dyn Fn(&mut EndpointRegistry) -> Result<(), Error>>;

/// A reusable recipe for constructing a configured [`EndpointRegistry`].
///
/// # Example
///
/// ```ignore
/// use resthub_registry::RegistrySetup;
///
/// let setup = RegistrySetup::new().customize(|registry| {
///     registry
///         .register_endpoint("api", "https://api.example.com", None)?
///         .set_default_endpoint("api");
///     Ok(())
/// });
///
/// let registry = setup.install()?;
/// ```
pub struct RegistrySetup {
    provider: OptionsProvider,
}

impl RegistrySetup {
    /// A setup bound to a no-op provider: `install` yields an empty
    /// registry.
    pub fn new() -> Self {
        Self {
            provider: Box::new(|_| Ok(())),
        }
    }

    /// Return a new setup bound to `provider`. The receiver is unchanged.
    pub fn customize<F>(&self, provider: F) -> Self
    where
        F: Fn(&mut EndpointRegistry) -> Result<(), Error> + 'static,
    {
        Self {
            provider: Box::new(provider),
        }
    }

    /// Construct a registry and invoke the provider once with it.
    pub fn install(&self) -> Result<EndpointRegistry, Error> {
        let mut registry = EndpointRegistry::new();
        (self.provider)(&mut registry)?;
        Ok(registry)
    }
}

impl Default for RegistrySetup {
    fn default() -> Self {
        Self::new()
    }
}
