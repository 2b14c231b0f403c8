//! Static host for the Trunk bundle.
//!
//! Everything under `DIST_DIR` is served as-is; any other path gets
//! `index.html` so deep links still boot the app.

use std::{
    io,
    net::{AddrParseError, IpAddr, SocketAddr},
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    http::{HeaderName, HeaderValue, Request},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND_HOST: &str = "0.0.0.0";
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: &str = "info";
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid bind host `{host}`: {source}")]
    Address {
        host: String,
        #[source]
        source: AddrParseError,
    },
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[source] io::Error),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_host: parse_non_empty_string(&lookup, "BIND_HOST").unwrap_or(defaults.bind_host),
            port: parse_u16_with_bounds(&lookup, "PORT", DEFAULT_PORT, PORT_BOUNDS),
            dist_dir: parse_non_empty_string(&lookup, "DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dist_dir),
            log_level: parse_non_empty_string(&lookup, "LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .bind_host
            .parse()
            .map_err(|source| ServerError::Address {
                host: self.bind_host.clone(),
                source,
            })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_u16_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u16,
    bounds: (u16, u16),
) -> u16 {
    lookup(name)
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

/// Used only when the caller did not send its own `x-request-id`.
#[derive(Clone, Copy, Default)]
struct CounterRequestId;

impl MakeRequestId for CounterRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&generate_request_id())
            .ok()
            .map(RequestId::new)
    }
}

pub fn router(config: &ServerConfig) -> Router {
    let index = ServeFile::new(config.dist_dir.join("index.html"));
    let static_service = ServeDir::new(&config.dist_dir).fallback(index);
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .fallback_service(static_service)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, CounterRequestId))
}

pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let address = config.socket_addr()?;
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| ServerError::Bind { address, source })?;

    if !config.dist_dir.join("index.html").is_file() {
        warn!(
            dist_dir = %config.dist_dir.display(),
            "index.html not found; run `trunk build --release` first"
        );
    }
    info!(%address, dist_dir = %config.dist_dir.display(), "serving portfolio");

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(error) => {
            warn!(%error, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
