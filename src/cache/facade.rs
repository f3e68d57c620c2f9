//! Two-tier cache facade: local, then distributed, then miss, with backfill
//! on a distributed hit and write-through on put.
//!
//! Kept orthogonal to both tiers: the facade sequences the two tiers rather
//! than the local tier wrapping the distributed one, so each stays
//! independently testable.

use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::cluster::{ClusterMembership, ClusterTransport};

use super::{DistributedCacheTier, LocalCacheTier};

pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// Single object kind's two-tier cache.
pub struct TwoTierCache<V> {
    local: LocalCacheTier<V>,
    distributed: DistributedCacheTier<V>,
}

impl<V: Clone + Serialize + DeserializeOwned + Send + Sync + 'static> TwoTierCache<V> {
    pub fn new(
        kind: &'static str,
        local_ttl: Duration,
        local_max_entries: u64,
        distributed_read_timeout: Duration,
        distributed_write_timeout: Duration,
        transport: Arc<dyn ClusterTransport>,
        membership: Arc<ClusterMembership>,
    ) -> Self {
        Self {
            local: LocalCacheTier::new(local_ttl, local_max_entries),
            distributed: DistributedCacheTier::new(
                kind,
                transport,
                membership,
                distributed_read_timeout,
                distributed_write_timeout,
            ),
        }
    }

    /// local.get → on miss, distributed.get → on hit, backfill local.
    pub async fn get(&self, id: i64) -> Option<V> {
        if let Some(value) = self.local.get(id) {
            log::debug!("local cache hit for id {id}");
            return Some(value);
        }
        match self.distributed.get(id).await {
            Some(value) => {
                log::debug!("distributed cache hit for id {id}, backfilling local tier");
                self.local.put(id, value.clone());
                Some(value)
            }
            None => None,
        }
    }

    /// distributed.put then local.put. Both are attempted unconditionally;
    /// a distributed failure does not block the local write, so the calling
    /// node observes its own write on its next read.
    pub async fn put(&self, id: i64, value: V) {
        if !self.distributed.put(id, &value).await {
            log::warn!("distributed cache put failed for id {id}; local tier still updated");
        }
        self.local.put(id, value);
    }

    /// get-then-put; `AlreadyExists` if either tier already observes `id`.
    /// Not globally atomic across the cluster, which is acceptable because
    /// creates are authoritative at the Preprocessor and this cache merely
    /// mirrors them.
    pub async fn create(&self, id: i64, value: V) -> CreateOutcome {
        if self.get(id).await.is_some() {
            return CreateOutcome::AlreadyExists;
        }
        self.put(id, value).await;
        CreateOutcome::Created
    }

    /// Local tier only; the distributed tier has no TTL and no delete.
    pub fn clean_expired(&self) {
        self.local.clean_expired();
    }

    /// Targeted single-id local invalidation, used by delete-driven
    /// invalidation.
    pub fn invalidate_local(&self, id: i64) {
        self.local.invalidate(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{ClusterConfig, InProcessFabric};

    fn cache() -> TwoTierCache<String> {
        let membership = ClusterMembership::new(ClusterConfig {
            hostname: "127.0.0.1".into(),
            port: 7380,
            seed_nodes: vec![],
        });
        TwoTierCache::new(
            "reaction",
            Duration::from_secs(60),
            1000,
            Duration::from_millis(500),
            Duration::from_millis(500),
            InProcessFabric::new(),
            membership,
        )
    }

    #[tokio::test]
    async fn put_then_get_is_served_from_local() {
        let cache = cache();
        cache.put(1, "a".to_string()).await;
        assert_eq!(cache.get(1).await, Some("a".to_string()));
    }

    #[tokio::test]
    async fn create_rejects_existing_id() {
        let cache = cache();
        assert!(matches!(cache.create(1, "a".to_string()).await, CreateOutcome::Created));
        assert!(matches!(cache.create(1, "b".to_string()).await, CreateOutcome::AlreadyExists));
        assert_eq!(cache.get(1).await, Some("a".to_string()));
    }

    #[tokio::test]
    async fn distributed_hit_backfills_local_tier() {
        let membership = ClusterMembership::new(ClusterConfig {
            hostname: "127.0.0.1".into(),
            port: 7380,
            seed_nodes: vec![],
        });
        let fabric = InProcessFabric::new();
        let writer = TwoTierCache::<String>::new(
            "reaction",
            Duration::from_secs(60),
            1000,
            Duration::from_millis(500),
            Duration::from_millis(500),
            fabric.clone(),
            membership.clone(),
        );
        writer.put(9, "shared".to_string()).await;

        let reader = TwoTierCache::<String>::new(
            "reaction",
            Duration::from_secs(60),
            1000,
            Duration::from_millis(500),
            Duration::from_millis(500),
            fabric,
            membership,
        );
        assert_eq!(reader.get(9).await, Some("shared".to_string()));
    }
}
