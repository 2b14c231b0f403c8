#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    use pk_portfolio::server::{self, ServerConfig};

    let config = ServerConfig::from_env();
    server::init_tracing(&config.log_level);

    if let Err(error) = server::run(config).await {
        tracing::error!(%error, "portfolio server exited");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    pk_portfolio::frontend::run();
}
