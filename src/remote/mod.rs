//! Remote resource proxy: cache-first GET, passthrough POST/DELETE against
//! the Preprocessor backend.

pub mod client;
pub mod mechanism_service;
pub mod reaction_service;

use thiserror::Error;

pub use client::RemoteClient;
pub use mechanism_service::MechanismService;
pub use reaction_service::ReactionService;

/// Error taxonomy shared by both resource families.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },
    #[error("failed to create {resource}: {detail}")]
    CreationError { resource: &'static str, detail: String },
    #[error("failed to delete {resource} {id}: {detail}")]
    DeletionError { resource: &'static str, id: i64, detail: String },
    #[error("failed to decode {resource} response: {source}")]
    DecodingError { resource: &'static str, #[source] source: serde_json::Error },
    #[error("{resource} request failed with status {status}: {reason}")]
    HttpError { resource: &'static str, status: u16, reason: String },
    #[error("{resource} request transport failure: {source}")]
    NetworkError { resource: &'static str, #[source] source: reqwest::Error },
}

pub type RemoteResult<T> = Result<T, RemoteError>;
