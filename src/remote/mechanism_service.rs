//! `MechanismService`: same shape as `ReactionService` over the Mechanism
//! resource family.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::TwoTierCache;
use crate::cluster::{ClusterMembership, ClusterTransport};
use crate::domain::{Follow, Mechanism, MechanismContext, MechanismDetails, MechanismId};

use super::client::RemoteTransport;
use super::{RemoteClient, RemoteResult};

pub struct MechanismService<T: RemoteTransport> {
    client: RemoteClient<T>,
    details_cache: TwoTierCache<MechanismDetails>,
}

impl<T: RemoteTransport> MechanismService<T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        transport: T,
        base_uri: impl Into<String>,
        local_ttl: Duration,
        local_max_entries: u64,
        distributed_read_timeout: Duration,
        distributed_write_timeout: Duration,
        cluster_transport: Arc<dyn ClusterTransport>,
        membership: Arc<ClusterMembership>,
    ) -> Self {
        Self {
            client: RemoteClient::new(transport, base_uri, "mechanism"),
            details_cache: TwoTierCache::new(
                "mechanismDetails",
                local_ttl,
                local_max_entries,
                distributed_read_timeout,
                distributed_write_timeout,
                cluster_transport,
                membership,
            ),
        }
    }

    /// Serves from the cache on a hit; on a miss, fetches from the
    /// Preprocessor, decodes, populates the cache, and returns.
    pub async fn get(&self, id: MechanismId) -> RemoteResult<MechanismDetails> {
        if let Some(cached) = self.details_cache.get(id).await {
            log::debug!("mechanism {id} served from cache");
            return Ok(cached);
        }
        let details: MechanismDetails = self.client.get_json(id).await?;
        self.details_cache.put(id, details.clone()).await;
        Ok(details)
    }

    /// POSTs the mechanism, then writes the created details through to the
    /// cache so an immediate `get` is served without a second Preprocessor
    /// call.
    pub async fn create(&self, mechanism: &Mechanism) -> RemoteResult<Mechanism> {
        let created: Mechanism = self.client.post_json(mechanism).await?;
        log::info!("created mechanism {}", created.mechanism_id);
        let details = MechanismDetails {
            mechanism_context: MechanismContext {
                mechanism: created.clone(),
                follow: Follow { description: String::new() },
            },
            stage_interactants: Vec::new(),
        };
        self.details_cache.put(created.mechanism_id, details).await;
        Ok(created)
    }

    /// DELETEs the mechanism, then invalidates its cached details (targeted,
    /// not a wholesale sweep).
    pub async fn delete(&self, id: MechanismId) -> RemoteResult<bool> {
        let deleted = self.client.delete(id).await?;
        if deleted {
            self.details_cache.invalidate_local(id);
        }
        Ok(deleted)
    }
}
