//! `AppConfig`: environment-variable configuration loading, grounded on the
//! teacher's `SaasConfig::from_env`.

use std::env;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingRequired(&'static str),
    #[error("environment variable {name} has an invalid value {value:?}: {reason}")]
    InvalidValue { name: &'static str, value: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct RemoteClientConfig {
    pub base_uri: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub retries: u32,
}

#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub max_idle_per_host: usize,
    pub max_idle_time: Duration,
}

#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub local_ttl: Duration,
    pub local_max_entries: u64,
    pub distributed_read_timeout: Duration,
    pub distributed_write_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ClusterSettings {
    pub hostname: String,
    pub port: u16,
    pub seed_nodes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http_host: String,
    pub http_port: u16,
    pub preprocessor: RemoteClientConfig,
    pub engine: RemoteClientConfig,
    pub pool: PoolConfig,
    pub cache: CacheConfig,
    pub cluster: ClusterSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            http_host: env_or("HTTP_HOST", "0.0.0.0"),
            http_port: env_parsed_or("HTTP_PORT", 8080)?,
            preprocessor: RemoteClientConfig {
                base_uri: env_required("PREPROCESSOR_BASE_URI")?,
                connect_timeout: Duration::from_millis(env_parsed_or("PREPROCESSOR_CONNECT_TIMEOUT_MS", 2000)?),
                request_timeout: Duration::from_millis(env_parsed_or("PREPROCESSOR_REQUEST_TIMEOUT_MS", 10_000)?),
                retries: env_parsed_or("PREPROCESSOR_RETRIES", 3)?,
            },
            engine: RemoteClientConfig {
                base_uri: env_required("ENGINE_BASE_URI")?,
                connect_timeout: Duration::from_millis(env_parsed_or("ENGINE_CONNECT_TIMEOUT_MS", 2000)?),
                request_timeout: Duration::from_millis(env_parsed_or("ENGINE_REQUEST_TIMEOUT_MS", 30_000)?),
                retries: env_parsed_or("ENGINE_RETRIES", 3)?,
            },
            pool: PoolConfig {
                max_idle_per_host: env_parsed_or("HTTP_POOL_MAX_CONNECTIONS", 100)?,
                max_idle_time: Duration::from_secs(env_parsed_or("HTTP_POOL_MAX_IDLE_SECS", 90)?),
            },
            cache: CacheConfig {
                local_ttl: Duration::from_secs(env_parsed_or("CACHE_LOCAL_TTL_SECS", 300)?),
                local_max_entries: env_parsed_or("CACHE_LOCAL_MAX_ENTRIES", 1000)?,
                distributed_read_timeout: Duration::from_millis(env_parsed_or(
                    "CACHE_DISTRIBUTED_READ_TIMEOUT_MS",
                    500,
                )?),
                distributed_write_timeout: Duration::from_millis(env_parsed_or(
                    "CACHE_DISTRIBUTED_WRITE_TIMEOUT_MS",
                    500,
                )?),
            },
            cluster: ClusterSettings {
                hostname: env_or("CLUSTER_HOSTNAME", "127.0.0.1"),
                port: env_parsed_or("CLUSTER_PORT", 7380)?,
                seed_nodes: env::var("CLUSTER_SEED_NODES")
                    .ok()
                    .map(|v| v.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingRequired(name))
}

fn env_parsed_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => value.parse().map_err(|err: T::Err| ConfigError::InvalidValue {
            name,
            value,
            reason: err.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
