//! Dev-mode round economy engine for the grove prize-pool game.
//!
//! An in-memory stand-in for the on-chain tree game: players water a communal
//! tree at one of three tiers, the tier cost feeds a prize pool, progress
//! advances through four growth phases, and the round ends when overall
//! progress meets a hidden randomized threshold (97-103%). Pure state
//! machine, no I/O; the `api` module is the thin HTTP seam the front-end
//! consumes.

pub mod api;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod payout;
pub mod progress;
pub mod rng;
pub mod tiers;
pub mod wallet;

pub use engine::{GroveEngine, RoundSnapshot, RoundState, WaterOutcome};
pub use error::GameError;
pub use ledger::{ContributionLedger, TopSpot};
pub use payout::{compute_prize_split, PrizeSplit};
pub use rng::{RandomSource, ScriptedRandom, StdRandom};
pub use tiers::{TierSpec, WaterTier, TIER_TABLE};
pub use wallet::WalletBook;
