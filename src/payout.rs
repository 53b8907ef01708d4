//! Prize split for a completed round.
//!
//! Each figure is an independent integer floor of a percentage of the total
//! pool, so the six figures can undershoot the pool by a few MIST of rounding.
//! That slack is deliberate and never reconciled.

use serde::Serialize;

use crate::constants::{
    CARRYOVER_PCT, DEV_MARKETING_PCT, RANDOM_PLAYER_PCT, TOP_CONTRIBUTOR_PCT, TREASURY_PCT,
    WINNER_GUARANTEED_PCT, WINNER_WEIGHTED_PCT,
};
use crate::engine::RoundState;

/// Payout breakdown of a finished round, in MIST.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrizeSplit {
    /// 25% guaranteed plus up to 15% weighted by the winner's contribution
    /// share. Never exceeds 40% of the pool; a low-contribution winner gets
    /// close to the guaranteed 25% only.
    pub final_waterer_prize: u64,
    pub top_contributor_prize: u64,
    pub random_player_prize: u64,
    pub next_round_seed: u64,
    pub treasury: u64,
    pub dev_marketing: u64,
}

/// Compute the fixed-percentage split of `state`'s pool.
pub fn compute_prize_split(state: &RoundState) -> PrizeSplit {
    let pool = state.prize_pool;
    let guaranteed = pool * WINNER_GUARANTEED_PCT / 100;
    let weighted_budget = pool * WINNER_WEIGHTED_PCT / 100;

    let total = state.ledger.total();
    // Guard: an empty ledger (nobody contributed) yields ratio 0, not a panic.
    let contribution_ratio = if total == 0 {
        0.0
    } else {
        state.winner_contribution as f64 / total as f64
    };
    let weighted_bonus = (weighted_budget as f64 * contribution_ratio).floor() as u64;

    PrizeSplit {
        final_waterer_prize: guaranteed + weighted_bonus,
        top_contributor_prize: pool * TOP_CONTRIBUTOR_PCT / 100,
        random_player_prize: pool * RANDOM_PLAYER_PCT / 100,
        next_round_seed: pool * CARRYOVER_PCT / 100,
        treasury: pool * TREASURY_PCT / 100,
        dev_marketing: pool * DEV_MARKETING_PCT / 100,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed_round(pool: u64, winner_contribution: u64, total: u64) -> RoundState {
        let mut state = RoundState::fresh(1, pool, 100);
        if total > 0 {
            state.ledger.apply("winner", winner_contribution);
            if total > winner_contribution {
                state.ledger.apply("rest", total - winner_contribution);
            }
        }
        state.is_complete = true;
        state.winner = "winner".into();
        state.winner_contribution = winner_contribution;
        state
    }

    #[test]
    fn test_half_share_winner() {
        // 1 SUI pool, winner contributed exactly half of the total:
        // 25% guaranteed + 50% of the 15% weighted budget.
        let state = completed_round(1_000_000_000, 500, 1_000);
        let split = compute_prize_split(&state);
        assert_eq!(split.final_waterer_prize, 250_000_000 + 75_000_000);
        assert_eq!(split.top_contributor_prize, 150_000_000);
        assert_eq!(split.random_player_prize, 50_000_000);
        assert_eq!(split.next_round_seed, 200_000_000);
        assert_eq!(split.treasury, 100_000_000);
        assert_eq!(split.dev_marketing, 100_000_000);
    }

    #[test]
    fn test_sole_contributor_caps_at_forty_pct() {
        let state = completed_round(1_000_000_000, 1_000, 1_000);
        let split = compute_prize_split(&state);
        assert_eq!(split.final_waterer_prize, 400_000_000);
    }

    #[test]
    fn test_zero_total_contributions_guard() {
        let state = completed_round(1_000_000_000, 0, 0);
        let split = compute_prize_split(&state);
        // Ratio guard: winner gets the guaranteed cut only.
        assert_eq!(split.final_waterer_prize, 250_000_000);
    }

    #[test]
    fn test_rounding_never_overshoots_pool() {
        for pool in [1u64, 7, 99, 1_003, 123_456_789] {
            let state = completed_round(pool, 3, 7);
            let s = compute_prize_split(&state);
            let sum = s.final_waterer_prize
                + s.top_contributor_prize
                + s.random_player_prize
                + s.next_round_seed
                + s.treasury
                + s.dev_marketing;
            assert!(sum <= pool, "split overshoots pool {}", pool);
        }
    }
}
