//! Compute fan-out: one reaction query expands into N parallel Engine
//! calls.

pub mod reaktoro;

use thiserror::Error;

pub use reaktoro::ReaktoroService;

/// Per-slot compute error.
#[derive(Debug, Error, Clone)]
pub enum ComputeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("Failed to compute SystemProps")]
    EngineError,
}
