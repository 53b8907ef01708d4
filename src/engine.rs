//! Round state machine: the heart of the dev-mode simulator.
//!
//! One `GroveEngine` owns one round at a time. Every watering is processed
//! synchronously and atomically: the wallet debit, pool credit, ledger
//! update, progress roll, and completion check either all happen or none do.

use serde::Serialize;
use tracing::{debug, info};

use crate::constants::{
    CARRYOVER_PCT, DEMO_CONTRIBUTORS, DEMO_PHASE, DEMO_PHASE_PROGRESS, DEMO_PRIZE_POOL,
    DEMO_WATERINGS,
};
use crate::error::GameError;
use crate::ledger::{ContributionLedger, TopSpot};
use crate::payout::{compute_prize_split, PrizeSplit};
use crate::progress::{overall_progress, phase_name, PHASE_COUNT};
use crate::rng::{RandomSource, StdRandom};
use crate::tiers::WaterTier;
use crate::wallet::WalletBook;

/// Mutable state of one prize-pool round.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Growth phase 1..=4 (Seedling, Growing, Maturing, Final Stretch).
    pub phase: u32,
    /// Percentage within the current phase. Uncapped in phase 4.
    pub phase_progress: u32,
    /// Pool in MIST. Only grows within a round.
    pub prize_pool: u64,
    /// Round counter, never reset.
    pub round: u64,
    /// Count of watering events this round.
    pub total_waterings: u64,
    /// Address of the most recent waterer, empty at round start.
    pub last_waterer: String,
    pub ledger: ContributionLedger,
    /// Hidden target on the overall-progress scale, drawn per round.
    pub completion_threshold: u32,
    pub is_complete: bool,
    pub winner: String,
    pub winner_contribution: u64,
}

impl RoundState {
    /// A pristine round: phase 1, empty ledger, pool seeded with `prize_pool`.
    pub fn fresh(round: u64, prize_pool: u64, completion_threshold: u32) -> Self {
        Self {
            phase: 1,
            phase_progress: 0,
            prize_pool,
            round,
            total_waterings: 0,
            last_waterer: String::new(),
            ledger: ContributionLedger::new(),
            completion_threshold,
            is_complete: false,
            winner: String::new(),
            winner_contribution: 0,
        }
    }

    pub fn overall_progress(&self) -> f64 {
        overall_progress(self.phase, self.phase_progress)
    }
}

/// Read-only projection of the round for callers/display. Field names track
/// the front-end's mock game state.
#[derive(Debug, Clone, Serialize)]
pub struct RoundSnapshot {
    pub phase: u32,
    pub phase_name: &'static str,
    pub phase_progress: u32,
    pub overall_progress: f64,
    pub prize_pool: u64,
    pub round: u64,
    pub total_waterings: u64,
    pub unique_players: usize,
    pub last_waterer: String,
    pub top1: TopSpot,
    pub top2: TopSpot,
    pub top3: TopSpot,
    pub total_contributions: u64,
    pub completion_threshold: u32,
    pub is_complete: bool,
    pub winner: String,
    pub winner_contribution: u64,
}

/// Result of one accepted watering.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WaterOutcome {
    pub progress_gained: u32,
    pub round_complete: bool,
}

/// The round economy engine. Owns the current round and the random source;
/// the wallet book is passed in per call so the debit shares the watering's
/// transaction boundary.
pub struct GroveEngine {
    state: RoundState,
    rng: Box<dyn RandomSource>,
}

impl GroveEngine {
    pub fn new(mut rng: Box<dyn RandomSource>) -> Self {
        let threshold = rng.completion_threshold();
        debug!("[ROUND] round 1 threshold drawn: {}", threshold);
        Self {
            state: RoundState::fresh(1, 0, threshold),
            rng,
        }
    }

    pub fn with_default_rng() -> Self {
        Self::new(Box::new(StdRandom::new()))
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let s = &self.state;
        RoundSnapshot {
            phase: s.phase,
            phase_name: phase_name(s.phase),
            phase_progress: s.phase_progress,
            overall_progress: s.overall_progress(),
            prize_pool: s.prize_pool,
            round: s.round,
            total_waterings: s.total_waterings,
            unique_players: s.ledger.unique_players(),
            last_waterer: s.last_waterer.clone(),
            top1: s.ledger.top1().clone(),
            top2: s.ledger.top2().clone(),
            top3: s.ledger.top3().clone(),
            total_contributions: s.ledger.total(),
            completion_threshold: s.completion_threshold,
            is_complete: s.is_complete,
            winner: s.winner.clone(),
            winner_contribution: s.winner_contribution,
        }
    }

    /// Apply one watering from `address` at `tier`.
    ///
    /// Validation (tier unlock, wallet balance, round still active) happens
    /// before any mutation. On success the tier cost moves from the wallet
    /// into the pool, the ledger and progress advance, and the round either
    /// completes (if overall progress meets the hidden threshold) or rolls
    /// into the next phase on overflow. Completion takes priority over the
    /// phase rollover, and phase 4 never rolls over at all.
    pub fn water(
        &mut self,
        wallets: &mut WalletBook,
        address: &str,
        tier: WaterTier,
    ) -> Result<WaterOutcome, GameError> {
        if self.state.is_complete {
            return Err(GameError::RoundComplete {
                round: self.state.round,
            });
        }
        let spec = tier.spec();
        if spec.unlock_phase > self.state.phase {
            return Err(GameError::PhaseLocked {
                tier: tier.as_str(),
                unlock_phase: spec.unlock_phase,
                phase: self.state.phase,
            });
        }
        // Fail closed: the debit is the last fallible step.
        wallets.debit(address, spec.cost)?;

        let gained = self.rng.progress_gain(spec.progress_min, spec.progress_max);

        let s = &mut self.state;
        s.prize_pool += spec.cost;
        s.total_waterings += 1;
        s.last_waterer = address.to_string();
        s.ledger.apply(address, spec.cost);
        s.phase_progress += gained;

        let overall = s.overall_progress();
        let mut round_complete = false;
        if overall >= s.completion_threshold as f64 {
            s.is_complete = true;
            s.winner = address.to_string();
            s.winner_contribution = s.ledger.amount_of(address);
            round_complete = true;
            info!(
                "[ROUND] round {} complete at {:.1}% (threshold {}) — winner {} with {} MIST of {} total",
                s.round, overall, s.completion_threshold, s.winner, s.winner_contribution,
                s.ledger.total()
            );
        } else if s.phase_progress >= 100 && s.phase < PHASE_COUNT {
            s.phase_progress -= 100;
            s.phase += 1;
            info!(
                "[ROUND] round {} entered phase {} ({}) at {:.1}% overall",
                s.round,
                s.phase,
                phase_name(s.phase),
                s.overall_progress()
            );
        }

        debug!(
            "[WATER] {} {} +{}% -> phase {} @ {}% (overall {:.1}%)",
            address,
            tier.as_str(),
            gained,
            s.phase,
            s.phase_progress,
            s.overall_progress()
        );

        Ok(WaterOutcome {
            progress_gained: gained,
            round_complete,
        })
    }

    /// Retire the current round and seed the next: 20% pool carryover,
    /// round counter +1, everything else back to zero, fresh threshold.
    pub fn start_new_round(&mut self) {
        let carryover = self.state.prize_pool * CARRYOVER_PCT / 100;
        let round = self.state.round + 1;
        let threshold = self.rng.completion_threshold();
        info!(
            "[ROUND] starting round {} seeded with {} MIST carried over from round {}",
            round, carryover, self.state.round
        );
        self.state = RoundState::fresh(round, carryover, threshold);
    }

    /// Seed the illustrative mid-round demo snapshot the front-end uses:
    /// phase 2 at 50%, a 125 SUI pool, and three pre-seeded contributors.
    pub fn reset_demo_state(&mut self) {
        let threshold = self.rng.completion_threshold();
        let mut state = RoundState::fresh(1, DEMO_PRIZE_POOL, threshold);
        state.phase = DEMO_PHASE;
        state.phase_progress = DEMO_PHASE_PROGRESS;
        state.total_waterings = DEMO_WATERINGS;
        for (address, amount) in DEMO_CONTRIBUTORS {
            state.ledger.apply(address, amount);
        }
        state.last_waterer = DEMO_CONTRIBUTORS[0].0.to_string();
        info!("[ROUND] demo state seeded (round 1, phase {}, {} MIST pool)", DEMO_PHASE, DEMO_PRIZE_POOL);
        self.state = state;
    }

    /// Prize split of the finished round; `None` while the round is active.
    pub fn prize_split(&self) -> Option<PrizeSplit> {
        if self.state.is_complete {
            Some(compute_prize_split(&self.state))
        } else {
            None
        }
    }
}
