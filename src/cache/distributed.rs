//! Cluster-replicated last-write-wins cache tier.
//!
//! Grounded on the `CacheBackend` async_trait shape from the inference
//! gateway's `distributed_cache.rs` reference implementation, wired to the
//! teacher's cluster transport concept instead of a real network client.
//! The object store is generic over `V`, serialized to bytes at the
//! `ClusterTransport` boundary so one fabric instance backs every cached
//! object kind.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::cluster::{ClusterMembership, ClusterTransport, Versioned};

/// One object kind's view onto the distributed tier. `kind` disambiguates
/// keys sharing the transport's fabric (e.g. `"reaction"` vs
/// `"reactionDetails"`).
pub struct DistributedCacheTier<V> {
    kind: &'static str,
    transport: Arc<dyn ClusterTransport>,
    membership: Arc<ClusterMembership>,
    read_timeout: Duration,
    write_timeout: Duration,
    _marker: PhantomData<V>,
}

impl<V: Serialize + DeserializeOwned + Send + Sync + 'static> DistributedCacheTier<V> {
    pub fn new(
        kind: &'static str,
        transport: Arc<dyn ClusterTransport>,
        membership: Arc<ClusterMembership>,
        read_timeout: Duration,
        write_timeout: Duration,
    ) -> Self {
        Self { kind, transport, membership, read_timeout, write_timeout, _marker: PhantomData }
    }

    /// Reads at "all reachable replicas" consistency (approximated by the
    /// transport's own fetch), bounded by `read_timeout`. A timeout is
    /// reported as absent with a warning, never as an error.
    pub async fn get(&self, id: i64) -> Option<V> {
        let fetch = self.transport.fetch(self.kind, id);
        let outcome = match tokio::time::timeout(self.read_timeout, fetch).await {
            Ok(Ok(found)) => found,
            Ok(Err(err)) => {
                log::warn!("distributed cache fetch error for {}/{id}: {err}", self.kind);
                return None;
            }
            Err(_) => {
                log::warn!("distributed cache read timed out for {}/{id}", self.kind);
                return None;
            }
        };
        let versioned = outcome?;
        match serde_json::from_slice::<V>(&versioned.value) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("distributed cache payload for {}/{id} failed to decode: {err}", self.kind);
                None
            }
        }
    }

    /// Writes at "all reachable replicas" consistency, tagged with this
    /// node's identity and logical clock so concurrent puts resolve
    /// deterministically. Returns `true` once the replicator has
    /// acknowledged the write; this does not guarantee all replicas have
    /// applied it yet.
    pub async fn put(&self, id: i64, value: &V) -> bool {
        let bytes = match serde_json::to_vec(value) {
            Ok(bytes) => bytes,
            Err(err) => {
                log::warn!("distributed cache payload for {}/{id} failed to encode: {err}", self.kind);
                return false;
            }
        };
        let versioned = Versioned {
            value: bytes,
            node_id: self.membership.node_id(),
            clock: self.membership.next_clock(),
        };
        let write = self.transport.replicate(self.kind, id, versioned);
        match tokio::time::timeout(self.write_timeout, write).await {
            Ok(Ok(())) => true,
            Ok(Err(err)) => {
                log::warn!("distributed cache write failed for {}/{id}: {err}", self.kind);
                false
            }
            Err(_) => {
                log::warn!("distributed cache write timed out for {}/{id}", self.kind);
                false
            }
        }
    }
}
