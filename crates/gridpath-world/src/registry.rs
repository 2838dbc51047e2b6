//! World storage keyed by id.
//!
//! Path queries only need [`WorldStore::get`]: a lookup that returns the
//! world or nothing. [`MemoryRegistry`] is an in-process store where every
//! entry expires a fixed time after insertion.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use gridpath_core::Coord;
use gridpath_paths::PathResult;

use crate::config::RegistryConfig;
use crate::error::QueryError;
use crate::world::{World, WorldId};

/// A store of generated worlds.
pub trait WorldStore {
    /// Register `world` and return a shared handle to it.
    fn insert(&self, world: World) -> Arc<World>;

    /// Look up a live world.
    fn get(&self, id: WorldId) -> Option<Arc<World>>;

    /// Resolve `id`, validate both endpoints and run a path query.
    fn find_path(&self, id: WorldId, start: Coord, end: Coord) -> Result<PathResult, QueryError> {
        let world = self.get(id).ok_or(QueryError::NotFound(id))?;
        world.check_endpoint(start)?;
        world.check_endpoint(end)?;
        Ok(world.shortest_path(start, end)?)
    }
}

struct Entry {
    world: Arc<World>,
    expires_at: Instant,
}

/// In-memory world registry with absolute expiry.
///
/// Worlds are shared as `Arc<World>`, so a handle obtained before expiry
/// stays usable after the entry is evicted.
pub struct MemoryRegistry {
    config: RegistryConfig,
    entries: RwLock<HashMap<WorldId, Entry>>,
}

impl Default for MemoryRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl MemoryRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Insert `world` as of `now`. Expired entries are purged first.
    pub fn insert_at(&self, world: World, now: Instant) -> Arc<World> {
        let world = Arc::new(world);
        let id = world.id();
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        let evicted = before - entries.len();
        if evicted > 0 {
            log::debug!("evicted {evicted} expired worlds");
        }
        entries.insert(
            id,
            Entry {
                world: Arc::clone(&world),
                expires_at: now + self.config.ttl,
            },
        );
        log::info!("registered world {id} ({} live)", entries.len());
        world
    }

    /// Look up `id` as of `now`. Expired entries are treated as missing.
    pub fn get_at(&self, id: WorldId, now: Instant) -> Option<Arc<World>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&id)
            .filter(|e| e.expires_at > now)
            .map(|e| Arc::clone(&e.world))
    }

    /// Remove every entry that has expired as of `now`, returning how many
    /// were removed.
    pub fn purge_expired_at(&self, now: Instant) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        before - entries.len()
    }

    /// Number of stored entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WorldStore for MemoryRegistry {
    fn insert(&self, world: World) -> Arc<World> {
        self.insert_at(world, Instant::now())
    }

    fn get(&self, id: WorldId) -> Option<Arc<World>> {
        self.get_at(id, Instant::now())
    }
}
