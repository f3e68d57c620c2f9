//! Cluster membership and node identity backing the distributed cache tier:
//! per-node owner identity plus a logical clock per key, replicated over a
//! pluggable transport.
//!
//! Grounded on the teacher's `enterprise/cluster/membership.rs` and
//! `enterprise/cluster/config.rs`, simplified: no Raft log, no leader
//! election, no quorum for writes.

pub mod transport;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

pub use transport::{ClusterTransport, InProcessFabric};

pub type NodeId = String;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("cluster join timed out contacting seed nodes")]
    JoinTimeout,
}

#[derive(Debug, Clone)]
pub struct ClusterConfig {
    pub hostname: String,
    pub port: u16,
    pub seed_nodes: Vec<String>,
}

impl ClusterConfig {
    pub fn node_id(&self) -> NodeId {
        format!("{}:{}", self.hostname, self.port)
    }
}

/// A monotonically increasing per-node logical clock used to order
/// concurrent writes to the same key across the cluster. Values are tagged
/// with the local node's identity so that conflicting concurrent puts
/// resolve deterministically.
#[derive(Debug, Default)]
pub struct LogicalClock(AtomicU64);

impl LogicalClock {
    pub fn tick(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// A value tagged with the write that produced it, for last-write-wins
/// comparison. Ties on `clock` break on `node_id` so the order is total.
#[derive(Debug, Clone)]
pub struct Versioned<V> {
    pub value: V,
    pub node_id: NodeId,
    pub clock: u64,
}

impl<V> Versioned<V> {
    /// True if `self` should win over `other` under last-write-wins.
    pub fn wins_over(&self, other: &Versioned<V>) -> bool {
        (self.clock, &self.node_id) > (other.clock, &other.node_id)
    }
}

/// Membership view of the cluster this node belongs to. Seed nodes are
/// dialed at join time; failures to reach any of them are logged but not
/// fatal. Startup does not require every seed to be reachable.
pub struct ClusterMembership {
    config: ClusterConfig,
    clock: LogicalClock,
    members: RwLock<Vec<NodeId>>,
}

impl ClusterMembership {
    pub fn new(config: ClusterConfig) -> Arc<Self> {
        let self_id = config.node_id();
        Arc::new(Self {
            config,
            clock: LogicalClock::default(),
            members: RwLock::new(vec![self_id]),
        })
    }

    pub fn node_id(&self) -> NodeId {
        self.config.node_id()
    }

    pub fn next_clock(&self) -> u64 {
        self.clock.tick()
    }

    /// Joins the configured seed nodes. In-process fabric joins are
    /// infallible; a real gossip transport would dial each seed here.
    pub fn join(&self) {
        let mut members = self.members.write();
        for seed in &self.config.seed_nodes {
            if !members.contains(seed) {
                members.push(seed.clone());
            }
        }
        log::info!(
            "node {} joined cluster with {} known member(s)",
            self.node_id(),
            members.len()
        );
    }

    pub fn leave(&self) {
        log::info!("node {} leaving cluster", self.node_id());
    }

    pub fn members(&self) -> Vec<NodeId> {
        self.members.read().clone()
    }
}
