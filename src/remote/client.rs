//! Shared HTTP client construction and the transport seam used to mock the
//! Preprocessor/Engine in tests. A client is built once at startup and
//! reused; constructing one per request is forbidden.
//!
//! Grounded on the teacher's `integrations/github.rs` `reqwest::Client`
//! usage and `integrations/mod.rs` `IntegrationError`, generalized into a
//! small `RemoteTransport` trait so `ReactionService`/`MechanismService`
//! can be exercised against an in-process double instead of a live socket.

use std::time::Duration;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use super::{RemoteError, RemoteResult};

pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Transport seam: everything above this trait is pure protocol logic,
/// everything below it is "make an HTTP call". `ReqwestTransport` is the
/// production implementation; tests substitute an in-memory double.
#[async_trait]
pub trait RemoteTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, reqwest::Error>;
    async fn post(&self, url: &str, body: Vec<u8>) -> Result<RawResponse, reqwest::Error>;
    async fn delete(&self, url: &str) -> Result<RawResponse, reqwest::Error>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds the process-wide shared client. Connection pooling is
    /// configured once here and reused by every `RemoteClient` constructed
    /// over it.
    pub fn new(
        connect_timeout: Duration,
        request_timeout: Duration,
        pool_max_idle_per_host: usize,
        pool_idle_timeout: Duration,
    ) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .pool_max_idle_per_host(pool_max_idle_per_host)
            .pool_idle_timeout(pool_idle_timeout)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl RemoteTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, reqwest::Error> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }

    async fn post(&self, url: &str, body: Vec<u8>) -> Result<RawResponse, reqwest::Error> {
        let resp = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }

    async fn delete(&self, url: &str) -> Result<RawResponse, reqwest::Error> {
        let resp = self.client.delete(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}

/// One resource family's (Reaction or Mechanism) view onto a base URI,
/// generic over the transport so production code and tests share the same
/// protocol-handling logic (status mapping, decoding, error taxonomy).
///
/// Retries are deliberately not implemented here: `*.retries` is accepted
/// as configuration but never consumed, matching the observed source.
pub struct RemoteClient<T: RemoteTransport> {
    transport: T,
    base_uri: String,
    resource: &'static str,
}

impl<T: RemoteTransport> RemoteClient<T> {
    pub fn new(transport: T, base_uri: impl Into<String>, resource: &'static str) -> Self {
        Self { transport, base_uri: base_uri.into(), resource }
    }

    fn url(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => format!("{}/{}", self.base_uri.trim_end_matches('/'), id),
            None => self.base_uri.clone(),
        }
    }

    pub async fn get_json<V: DeserializeOwned>(&self, id: i64) -> RemoteResult<V> {
        let resp = self.transport.get(&self.url(Some(id))).await.map_err(|source| {
            RemoteError::NetworkError { resource: self.resource, source }
        })?;
        self.decode_get_response(id, resp)
    }

    fn decode_get_response<V: DeserializeOwned>(&self, id: i64, resp: RawResponse) -> RemoteResult<V> {
        match resp.status {
            200..=299 => serde_json::from_slice(&resp.body).map_err(|source| RemoteError::DecodingError {
                resource: self.resource,
                source,
            }),
            404 => Err(RemoteError::NotFound { resource: self.resource, id }),
            status => Err(RemoteError::HttpError {
                resource: self.resource,
                status,
                reason: String::from_utf8_lossy(&resp.body).into_owned(),
            }),
        }
    }

    pub async fn post_json<B: Serialize + Sync, V: DeserializeOwned>(&self, body: &B) -> RemoteResult<V> {
        let payload = serde_json::to_vec(body).map_err(|source| RemoteError::DecodingError {
            resource: self.resource,
            source,
        })?;
        let resp = self
            .transport
            .post(&self.url(None), payload)
            .await
            .map_err(|source| RemoteError::NetworkError { resource: self.resource, source })?;
        match resp.status {
            200..=299 => serde_json::from_slice(&resp.body).map_err(|source| RemoteError::DecodingError {
                resource: self.resource,
                source,
            }),
            status => Err(RemoteError::CreationError {
                resource: self.resource,
                detail: format!("status {status}: {}", String::from_utf8_lossy(&resp.body)),
            }),
        }
    }

    pub async fn delete(&self, id: i64) -> RemoteResult<bool> {
        let resp = self
            .transport
            .delete(&self.url(Some(id)))
            .await
            .map_err(|source| RemoteError::NetworkError { resource: self.resource, source })?;
        match resp.status {
            204 => Ok(true),
            status => Err(RemoteError::DeletionError {
                resource: self.resource,
                id,
                detail: format!("status {status}: {}", String::from_utf8_lossy(&resp.body)),
            }),
        }
    }
}
