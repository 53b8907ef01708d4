use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use grove_engine::api::{self, AppState, GameCtx};
use grove_engine::config::{load_config, GroveConfig};
use grove_engine::engine::GroveEngine;
use grove_engine::wallet::WalletBook;

#[derive(Parser, Debug)]
#[command(name = "grove-engine", about = "Dev-mode node for the grove prize-pool game")]
struct Args {
    /// Path to grove.toml (defaults apply when omitted)
    #[arg(long)]
    config: Option<String>,
    /// Override the configured listen address
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // init tracing from env GROVE_LOG or RUST_LOG
    let filter = std::env::var("GROVE_LOG")
        .unwrap_or_else(|_| std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?,
        None => GroveConfig::default(),
    };
    if let Some(listen) = args.listen {
        cfg.listen = listen;
    }
    cfg.validate()?;

    let mut engine = GroveEngine::with_default_rng();
    if cfg.seed_demo_state {
        engine.reset_demo_state();
    }
    let wallets = WalletBook::with_dev_wallets(cfg.dev_wallet_balance_mist);
    let state = AppState::new(GameCtx {
        engine,
        wallets,
        faucet_amount: cfg.faucet_amount_mist,
    });

    let addr: SocketAddr = cfg.listen.parse()?;
    info!("grove dev node listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, api::router(state)).await?;
    Ok(())
}
