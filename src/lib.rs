//! ChemistFlow: a middle-tier cache and compute fan-out service fronting
//! a chemistry Preprocessor and a thermodynamics Engine.
//!
//! ## Architecture
//!
//! - `domain`: opaque value types shared across the system (Reaction,
//!   Mechanism, Molecule, SystemState, ...).
//! - `cache`: two-tier cache (local TTL'd tier + cluster-replicated
//!   last-write-wins tier).
//! - `cluster`: membership and the pluggable transport backing the
//!   distributed cache tier.
//! - `remote`: cache-first Reaction/Mechanism proxy services over the
//!   Preprocessor backend.
//! - `compute`: the Engine fan-out (`ReaktoroService`).
//! - `api`: the thin HTTP surface.
//! - `config`: environment-driven configuration loading.

pub mod api;
pub mod cache;
pub mod cluster;
pub mod compute;
pub mod config;
pub mod domain;
pub mod remote;

/// Crate version, for the health check response.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
