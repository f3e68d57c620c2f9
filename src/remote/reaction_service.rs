//! `ReactionService`: cache-first GET, passthrough POST with write-through,
//! passthrough DELETE with targeted local invalidation.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::TwoTierCache;
use crate::cluster::{ClusterMembership, ClusterTransport};
use crate::domain::{Reaction, ReactionDetails, ReactionId};

use super::client::RemoteTransport;
use super::{RemoteClient, RemoteResult};

pub struct ReactionService<T: RemoteTransport> {
    client: RemoteClient<T>,
    details_cache: TwoTierCache<ReactionDetails>,
}

impl<T: RemoteTransport> ReactionService<T> {
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
            client: RemoteClient::new(transport, base_uri, "reaction"),
            details_cache: TwoTierCache::new(
                "reactionDetails",
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
    pub async fn get(&self, id: ReactionId) -> RemoteResult<ReactionDetails> {
        if let Some(cached) = self.details_cache.get(id).await {
            log::debug!("reaction {id} served from cache");
            return Ok(cached);
        }
        let details: ReactionDetails = self.client.get_json(id).await?;
        self.details_cache.put(id, details.clone()).await;
        Ok(details)
    }

    /// POSTs the reaction, then writes the created details through to the
    /// cache so an immediate `get` is served without a second Preprocessor
    /// call.
    pub async fn create(&self, reaction: &Reaction) -> RemoteResult<Reaction> {
        let created: Reaction = self.client.post_json(reaction).await?;
        log::info!("created reaction {}", created.reaction_id);
        let details = ReactionDetails {
            reaction: created.clone(),
            inbound_reagents: Vec::new(),
            outbound_products: Vec::new(),
            conditions: Vec::new(),
        };
        self.details_cache.put(created.reaction_id, details).await;
        Ok(created)
    }

    /// DELETEs the reaction, then invalidates its cached details (targeted,
    /// not a wholesale sweep).
    pub async fn delete(&self, id: ReactionId) -> RemoteResult<bool> {
        let deleted = self.client.delete(id).await?;
        if deleted {
            self.details_cache.invalidate_local(id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::{ClusterConfig, InProcessFabric};
    use crate::remote::client::RawResponse;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc as StdArc;

    struct MockTransport {
        get_response: Mutex<Option<RawResponse>>,
        post_response: Mutex<Option<RawResponse>>,
        calls: StdArc<Mutex<u32>>,
    }

    #[async_trait]
    impl RemoteTransport for MockTransport {
        async fn get(&self, _url: &str) -> Result<RawResponse, reqwest::Error> {
            *self.calls.lock() += 1;
            let resp = self.get_response.lock().take().expect("single-shot mock");
            Ok(resp)
        }

        async fn post(&self, _url: &str, _body: Vec<u8>) -> Result<RawResponse, reqwest::Error> {
            Ok(self.post_response.lock().take().expect("single-shot mock"))
        }

        async fn delete(&self, _url: &str) -> Result<RawResponse, reqwest::Error> {
            unreachable!("not exercised by these tests")
        }
    }

    fn details_json(id: i64) -> Vec<u8> {
        serde_json::json!({
            "reaction": {"reactionId": id, "reactionName": "R"},
            "inboundReagents": [],
            "outboundProducts": [],
            "conditions": []
        })
        .to_string()
        .into_bytes()
    }

    fn service(transport: MockTransport) -> ReactionService<MockTransport> {
        let membership = ClusterMembership::new(ClusterConfig {
            hostname: "127.0.0.1".into(),
            port: 7380,
            seed_nodes: vec![],
        });
        ReactionService::new(
            transport,
            "http://preprocessor.invalid",
            Duration::from_secs(60),
            1000,
            Duration::from_millis(500),
            Duration::from_millis(500),
            InProcessFabric::new(),
            membership,
        )
    }

    #[tokio::test]
    async fn second_get_is_served_from_cache_without_a_second_call() {
        let calls = StdArc::new(Mutex::new(0));
        let transport = MockTransport {
            get_response: Mutex::new(Some(RawResponse { status: 200, body: details_json(42) })),
            post_response: Mutex::new(None),
            calls: calls.clone(),
        };
        let service = service(transport);

        let first = service.get(42).await.unwrap();
        assert_eq!(first.reaction.reaction_id, 42);

        let second = service.get(42).await.unwrap();
        assert_eq!(second.reaction.reaction_id, 42);
        assert_eq!(*calls.lock(), 1);
    }

    #[tokio::test]
    async fn get_after_create_is_served_from_cache_with_zero_fetches() {
        let calls = StdArc::new(Mutex::new(0));
        let transport = MockTransport {
            get_response: Mutex::new(None),
            post_response: Mutex::new(Some(RawResponse {
                status: 200,
                body: serde_json::json!({"reactionId": 7, "reactionName": "R7"}).to_string().into_bytes(),
            })),
            calls: calls.clone(),
        };
        let service = service(transport);

        let created = service.create(&Reaction { reaction_id: 7, reaction_name: "R7".into() }).await.unwrap();
        assert_eq!(created.reaction_id, 7);

        let fetched = service.get(7).await.unwrap();
        assert_eq!(fetched.reaction.reaction_id, 7);
        assert_eq!(*calls.lock(), 0);
    }

    #[tokio::test]
    async fn get_surfaces_not_found_on_404() {
        let calls = StdArc::new(Mutex::new(0));
        let transport = MockTransport {
            get_response: Mutex::new(Some(RawResponse { status: 404, body: vec![] })),
            post_response: Mutex::new(None),
            calls,
        };
        let service = service(transport);
        let err = service.get(1).await.unwrap_err();
        assert!(matches!(err, crate::remote::RemoteError::NotFound { id: 1, .. }));
    }
}
