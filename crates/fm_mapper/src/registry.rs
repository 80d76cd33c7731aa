//! Per-type-pair storage of [`MappingConfig`]s.

use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock};

use fm_utils::hash::hashbrown::hash_map::Entry;
use fm_utils::hash::{FixedHashState, HashMap};

use crate::{MappingConfig, TypePair};

/// Stores at most one [`MappingConfig`] per [`TypePair`].
///
/// Registration is idempotent per pair: the first config stays, and later
/// ones for the same pair are discarded whole, never merged.
///
/// Reads take a shared lock and writes an exclusive one, so a registry can be
/// shared between threads. A poisoned lock is recovered, since no operation
/// leaves the map half-updated.
///
/// # Examples
///
/// ```
/// use fm_mapper::{ConfigRegistry, MappingConfig, TypePair};
///
/// let registry = ConfigRegistry::new();
/// let pair = TypePair::of::<u8, u16>();
///
/// assert!(registry.register(pair, MappingConfig::new().ignore("a")));
/// assert!(!registry.register(pair, MappingConfig::new().ignore("b")));
///
/// let config = registry.lookup(&pair).unwrap();
/// assert!(config.get("a").is_some());
/// assert!(config.get("b").is_none());
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug)]
pub struct ConfigRegistry {
    configs: RwLock<HashMap<TypePair, Arc<MappingConfig>>>,
}

impl ConfigRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            configs: RwLock::new(HashMap::with_hasher(FixedHashState)),
        }
    }

    /// Stores `config` for `pair` unless the pair already has one.
    ///
    /// Returns `true` if `config` was stored.
    pub fn register(&self, pair: TypePair, config: MappingConfig) -> bool {
        let mut configs = self.configs.write().unwrap_or_else(PoisonError::into_inner);

        match configs.entry(pair) {
            Entry::Occupied(_) => {
                log::debug!("mapping config for `{pair}` already registered, new one discarded");
                false
            }
            Entry::Vacant(entry) => {
                log::debug!("registered mapping config for `{pair}`: {} overrides", config.len());
                entry.insert(Arc::new(config));
                true
            }
        }
    }

    /// Returns the config registered for `pair`.
    pub fn lookup(&self, pair: &TypePair) -> Option<Arc<MappingConfig>> {
        self.configs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(pair)
            .cloned()
    }

    pub fn contains(&self, pair: &TypePair) -> bool {
        self.configs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(pair)
    }

    /// Returns the number of registered type pairs.
    pub fn len(&self) -> usize {
        self.configs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConfigRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
