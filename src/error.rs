use thiserror::Error;

/// Validation failures surfaced by the engine. All are detected before any
/// state mutation: a failed call leaves the round, ledger, and wallet book
/// exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown water tier '{0}'")]
    InvalidTier(String),

    #[error("{tier} watering unlocks in phase {unlock_phase} (tree is in phase {phase})")]
    PhaseLocked {
        tier: &'static str,
        unlock_phase: u32,
        phase: u32,
    },

    #[error("insufficient balance: need {need} MIST, have {have}")]
    InsufficientBalance { need: u64, have: u64 },

    #[error("round {round} is already complete; start a new round first")]
    RoundComplete { round: u64 },
}
