//! Two-tier cache: per-node TTL'd local tier in front of a cluster-replicated
//! last-write-wins distributed tier.
//!
//! The local tier is not a write-through wrapper around the distributed one.
//! The facade in `facade` sequences two orthogonal tiers so each stays
//! independently testable, and the local tier can be swapped out in tests
//! without touching the distributed one.

pub mod distributed;
pub mod facade;
pub mod local;

pub use distributed::DistributedCacheTier;
pub use facade::{CreateOutcome, TwoTierCache};
pub use local::LocalCacheTier;
