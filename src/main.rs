//! ChemistFlow entry point: config load, cluster join, HTTP client
//! construction, Axum router, then `axum::serve` with graceful shutdown.
//! Grounded on the teacher's `main.rs`/`SaasApp::run`.

use std::panic;
use std::sync::Arc;
use std::time::Duration;

use chemistflow::api::{build_router, AppState};
use chemistflow::cluster::{ClusterConfig, ClusterMembership, InProcessFabric};
use chemistflow::compute::ReaktoroService;
use chemistflow::config::AppConfig;
use chemistflow::remote::client::ReqwestTransport;
use chemistflow::remote::{MechanismService, ReactionService};

const SHUTDOWN_DRAIN: Duration = Duration::from_secs(5);

fn main() -> anyhow::Result<()> {
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("ChemistFlow fatal error:");
        eprintln!("{panic_info}");
        if let Some(location) = panic_info.location() {
            eprintln!("Location: {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("ChemistFlow {} starting", chemistflow::VERSION);

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run());

    match &result {
        Ok(()) => log::info!("ChemistFlow shutdown complete"),
        Err(err) => log::error!("bootstrap failed: {err}"),
    }
    result
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    log::info!("loaded configuration, binding to {}", config.server_address());

    let membership = ClusterMembership::new(ClusterConfig {
        hostname: config.cluster.hostname.clone(),
        port: config.cluster.port,
        seed_nodes: config.cluster.seed_nodes.clone(),
    });
    membership.join();

    let cluster_transport = InProcessFabric::new();

    let preprocessor_transport = ReqwestTransport::new(
        config.preprocessor.connect_timeout,
        config.preprocessor.request_timeout,
        config.pool.max_idle_per_host,
        config.pool.max_idle_time,
    )?;
    let mechanism_transport = ReqwestTransport::new(
        config.preprocessor.connect_timeout,
        config.preprocessor.request_timeout,
        config.pool.max_idle_per_host,
        config.pool.max_idle_time,
    )?;
    let engine_transport = ReqwestTransport::new(
        config.engine.connect_timeout,
        config.engine.request_timeout,
        config.pool.max_idle_per_host,
        config.pool.max_idle_time,
    )?;

    log::info!(
        "preprocessor client configured for {} (retries configured but unused: {})",
        config.preprocessor.base_uri,
        config.preprocessor.retries
    );

    let reaction_service = Arc::new(ReactionService::new(
        preprocessor_transport,
        format!("{}/reaction", config.preprocessor.base_uri),
        config.cache.local_ttl,
        config.cache.local_max_entries,
        config.cache.distributed_read_timeout,
        config.cache.distributed_write_timeout,
        cluster_transport.clone(),
        membership.clone(),
    ));

    let mechanism_service = Arc::new(MechanismService::new(
        mechanism_transport,
        format!("{}/mechanism", config.preprocessor.base_uri),
        config.cache.local_ttl,
        config.cache.local_max_entries,
        config.cache.distributed_read_timeout,
        config.cache.distributed_write_timeout,
        cluster_transport,
        membership.clone(),
    ));

    let reaktoro_service = Arc::new(ReaktoroService::new(
        reaction_service.clone(),
        engine_transport,
        format!("{}/reaction", config.engine.base_uri),
    ));

    let state = Arc::new(AppState { reaction_service, mechanism_service, reaktoro_service });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.server_address()).await?;
    log::info!("ChemistFlow listening on {}", config.server_address());

    let drain_watchdog = Arc::new(tokio::sync::Notify::new());
    tokio::spawn({
        let drain_watchdog = drain_watchdog.clone();
        async move {
            drain_watchdog.notified().await;
            tokio::time::sleep(SHUTDOWN_DRAIN).await;
            log::warn!("drain period ({SHUTDOWN_DRAIN:?}) elapsed; requests still in flight proceed at hyper's discretion");
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            drain_watchdog.notify_one();
        })
        .await?;

    membership.leave();

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("received SIGINT, shutting down"),
        _ = terminate => log::info!("received SIGTERM, shutting down"),
    }
}
