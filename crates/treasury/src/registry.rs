//! Registry of streaming pools, one per reward-token / participant-set pair

use crate::errors::TreasuryError;
use crate::reward_pool::RewardPool;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::info;

/// Opaque 32-byte reward-token identifier assigned by the collaborator
pub type PoolId = [u8; 32];

/// Holds every live pool and serializes writer access to each.
///
/// Pools are created once and live for the system's lifetime; the lock
/// enforces the one-state-changing-call-at-a-time model per registry.
#[derive(Debug, Default)]
pub struct PoolRegistry {
    pools: RwLock<HashMap<PoolId, RewardPool>>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new pool with the given epoch width.
    pub fn create_pool(&self, id: PoolId, duration: u64) -> Result<(), TreasuryError> {
        let pool = RewardPool::new(duration)?;
        let mut pools = self.pools.write();
        if pools.contains_key(&id) {
            return Err(TreasuryError::DuplicatePool);
        }
        pools.insert(id, pool);
        info!(target: "treasury", pool = ?id, duration, "Reward pool created");
        Ok(())
    }

    /// Run a read-only closure against a pool's consistent snapshot.
    pub fn with_pool<R>(
        &self,
        id: &PoolId,
        f: impl FnOnce(&RewardPool) -> R,
    ) -> Result<R, TreasuryError> {
        let pools = self.pools.read();
        let pool = pools.get(id).ok_or(TreasuryError::UnknownPool)?;
        Ok(f(pool))
    }

    /// Run a state-mutating closure against a pool under the writer lock.
    pub fn with_pool_mut<R>(
        &self,
        id: &PoolId,
        f: impl FnOnce(&mut RewardPool) -> Result<R, TreasuryError>,
    ) -> Result<R, TreasuryError> {
        let mut pools = self.pools.write();
        let pool = pools.get_mut(id).ok_or(TreasuryError::UnknownPool)?;
        f(pool)
    }

    /// Identifiers of every registered pool
    pub fn pool_ids(&self) -> Vec<PoolId> {
        self.pools.read().keys().copied().collect()
    }
}
