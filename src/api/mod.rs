//! Local HTTP API the browser front-end talks to in dev mode.
//!
//! Thin by design: every handler takes one lock, calls the engine, and wraps
//! the result in an `{"ok": ...}` envelope. The single mutex over engine +
//! wallets is the serialization boundary the engine assumes — a watering's
//! wallet debit and round mutation happen under one critical section.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::engine::GroveEngine;
use crate::tiers::WaterTier;
use crate::wallet::WalletBook;

/// Everything the handlers mutate, behind one lock.
pub struct GameCtx {
    pub engine: GroveEngine,
    pub wallets: WalletBook,
    pub faucet_amount: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub game: Arc<Mutex<GameCtx>>,
}

impl AppState {
    pub fn new(ctx: GameCtx) -> Self {
        Self {
            game: Arc::new(Mutex::new(ctx)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/state", get(get_state))
        .route("/water", post(water))
        .route("/balance/:address", get(get_balance))
        .route("/faucet", post(faucet))
        .route("/payout", get(get_payout))
        .route("/round/new", post(new_round))
        .route("/reset", post(reset))
        // Dev-only surface; the front-end runs on a different local port.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "ok": true }))
}

async fn get_state(State(st): State<AppState>) -> Json<serde_json::Value> {
    let game = st.game.lock();
    Json(json!({ "ok": true, "state": game.engine.snapshot() }))
}

#[derive(Deserialize)]
struct WaterReq {
    address: String,
    tier: String,
}

async fn water(State(st): State<AppState>, Json(req): Json<WaterReq>) -> Json<serde_json::Value> {
    if req.address.is_empty() {
        return Json(json!({ "ok": false, "error": "address must not be empty" }));
    }
    let tier = match WaterTier::lookup(&req.tier) {
        Ok(t) => t,
        Err(e) => return Json(json!({ "ok": false, "error": e.to_string() })),
    };

    let mut game = st.game.lock();
    let GameCtx {
        engine, wallets, ..
    } = &mut *game;
    match engine.water(wallets, &req.address, tier) {
        Ok(out) => Json(json!({
            "ok": true,
            "progress": out.progress_gained,
            "complete": out.round_complete,
            "state": engine.snapshot(),
        })),
        Err(e) => Json(json!({ "ok": false, "error": e.to_string() })),
    }
}

async fn get_balance(
    State(st): State<AppState>,
    Path(address): Path<String>,
) -> Json<serde_json::Value> {
    let game = st.game.lock();
    Json(json!({
        "ok": true,
        "address": address,
        "balance": game.wallets.balance(&address),
    }))
}

#[derive(Deserialize)]
struct FaucetReq {
    address: String,
    amount: Option<u64>,
}

async fn faucet(State(st): State<AppState>, Json(req): Json<FaucetReq>) -> Json<serde_json::Value> {
    if req.address.is_empty() {
        return Json(json!({ "ok": false, "error": "address must not be empty" }));
    }
    let mut game = st.game.lock();
    let amount = req.amount.unwrap_or(game.faucet_amount);
    game.wallets.credit(&req.address, amount);
    Json(json!({
        "ok": true,
        "address": req.address,
        "granted": amount,
        "balance": game.wallets.balance(&req.address),
    }))
}

async fn get_payout(State(st): State<AppState>) -> Json<serde_json::Value> {
    let game = st.game.lock();
    match game.engine.prize_split() {
        Some(split) => Json(json!({ "ok": true, "payout": split })),
        None => Json(json!({ "ok": false, "error": "round is still active" })),
    }
}

async fn new_round(State(st): State<AppState>) -> Json<serde_json::Value> {
    let mut game = st.game.lock();
    game.engine.start_new_round();
    Json(json!({ "ok": true, "state": game.engine.snapshot() }))
}

async fn reset(State(st): State<AppState>) -> Json<serde_json::Value> {
    let mut game = st.game.lock();
    game.engine.reset_demo_state();
    Json(json!({ "ok": true, "state": game.engine.snapshot() }))
}
