use super::provider::Provider;
use super::{ConnectOptions, JudgeName};
use crate::error::SpiderError;
use once_cell::sync::{Lazy, OnceCell};
use simple_log::log::{info, warn};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub type Constructor =
    Arc<dyn Fn(&ConnectOptions) -> anyhow::Result<Box<dyn Provider>> + Send + Sync>;

/// Maps each supported judge to the constructor of its adapter.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    constructors: HashMap<JudgeName, Constructor>,
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("registered", &self.registered())
            .finish()
    }
}

impl AdapterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the constructor used for `name`.
    pub fn register<F>(&mut self, name: JudgeName, constructor: F) -> &mut Self
    where
        F: Fn(&ConnectOptions) -> anyhow::Result<Box<dyn Provider>> + Send + Sync + 'static,
    {
        self.constructors.insert(name, Arc::new(constructor));
        self
    }

    pub fn is_registered(&self, name: JudgeName) -> bool {
        self.constructors.contains_key(&name)
    }

    /// Registered judges in listing order.
    pub fn registered(&self) -> Vec<JudgeName> {
        JudgeName::ALL
            .into_iter()
            .filter(|name| self.is_registered(*name))
            .collect()
    }

    /// Builds the adapter for `name`, or `None` when the name is unknown, has
    /// no constructor, or its constructor fails. Each case is logged.
    pub fn build(&self, name: &str, options: &ConnectOptions) -> Option<Box<dyn Provider>> {
        let judge = match name.parse::<JudgeName>() {
            Ok(judge) => judge,
            Err(e) => {
                warn!("{}", e);
                return None;
            }
        };

        let Some(constructor) = self.constructors.get(&judge) else {
            warn!("{}", SpiderError::NotRegistered(judge.to_string()));
            return None;
        };

        match constructor(options) {
            Ok(provider) => {
                info!("adapter for {} ready", judge);
                Some(provider)
            }
            Err(e) => {
                warn!("failed to build adapter for {}: {:#}", judge, e);
                None
            }
        }
    }
}

static GLOBAL_REGISTRY: OnceCell<AdapterRegistry> = OnceCell::new();
static EMPTY_REGISTRY: Lazy<AdapterRegistry> = Lazy::new(AdapterRegistry::new);

/// Installs the process-wide registry used by [`crate::Core::new`]. Only the
/// first call takes effect.
pub fn install(registry: AdapterRegistry) -> Result<(), SpiderError> {
    GLOBAL_REGISTRY
        .set(registry)
        .map_err(|_| SpiderError::RegistryAlreadyInstalled)
}

pub fn global() -> &'static AdapterRegistry {
    GLOBAL_REGISTRY.get().unwrap_or(&*EMPTY_REGISTRY)
}
