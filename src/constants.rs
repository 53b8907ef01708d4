//! Economy constants for the grove dev-mode simulator.
//!
//! All currency amounts are in MIST, the smallest SUI unit (1 SUI = 10^9
//! MIST). Integer math throughout; floats appear only in progress/ratio
//! calculations and are floored straight back to MIST.

/// Smallest currency unit per whole SUI.
pub const MIST_PER_SUI: u64 = 1_000_000_000;

// ---- tier economics ----

/// Drip: 0.05 SUI, +1..2% phase progress, available from phase 1.
pub const DRIP_COST: u64 = 50_000_000;
/// Splash: 0.25 SUI, +3..5% phase progress, unlocks in phase 2.
pub const SPLASH_COST: u64 = 250_000_000;
/// Flood: 1 SUI, +6..10% phase progress, unlocks in phase 3.
pub const FLOOD_COST: u64 = 1_000_000_000;

// ---- phase bands ----

/// Where each phase starts on the whole-round 0-100(+) scale.
pub const PHASE_STARTS: [f64; 4] = [0.0, 30.0, 60.0, 80.0];
/// How much of the whole-round scale each phase covers.
pub const PHASE_SIZES: [f64; 4] = [30.0, 30.0, 20.0, 20.0];

// ---- completion threshold ----

/// The hidden completion threshold is drawn uniformly from this inclusive
/// range once per round. Values above 100 are why overall progress is
/// open-ended past nominal 100%.
pub const THRESHOLD_MIN: u32 = 97;
pub const THRESHOLD_MAX: u32 = 103;

// ---- prize split (percent of the total pool, floored independently) ----

pub const WINNER_GUARANTEED_PCT: u64 = 25;
pub const WINNER_WEIGHTED_PCT: u64 = 15;
pub const TOP_CONTRIBUTOR_PCT: u64 = 15;
pub const RANDOM_PLAYER_PCT: u64 = 5;
/// Share of the final pool that seeds the next round.
pub const CARRYOVER_PCT: u64 = 20;
pub const TREASURY_PCT: u64 = 10;
pub const DEV_MARKETING_PCT: u64 = 10;

// ---- dev wallets / faucet ----

/// Default faucet grant: 1,000 SUI.
pub const FAUCET_DEFAULT_MIST: u64 = 1_000 * MIST_PER_SUI;
/// Starting balance for the well-known dev wallets: 10,000,000 SUI.
pub const DEV_WALLET_BALANCE_MIST: u64 = 10_000_000 * MIST_PER_SUI;

pub const DEV_WALLET_1: &str =
    "0xdev1111111111111111111111111111111111111111111111111111111111111111";
pub const DEV_WALLET_2: &str =
    "0xdev2222222222222222222222222222222222222222222222222222222222222222";
pub const DEV_WALLET_3: &str =
    "0xdev3333333333333333333333333333333333333333333333333333333333333333";
pub const DEV_WALLET_4: &str =
    "0xdev4444444444444444444444444444444444444444444444444444444444444444";
pub const DEV_WALLET_5: &str =
    "0xdev5555555555555555555555555555555555555555555555555555555555555555";
pub const DEV_WALLET_6: &str =
    "0xdev6666666666666666666666666666666666666666666666666666666666666666";

pub const DEV_WALLETS: [&str; 6] = [
    DEV_WALLET_1,
    DEV_WALLET_2,
    DEV_WALLET_3,
    DEV_WALLET_4,
    DEV_WALLET_5,
    DEV_WALLET_6,
];

// ---- demo snapshot (illustrative mid-round state for the front-end) ----

pub const DEMO_PHASE: u32 = 2;
pub const DEMO_PHASE_PROGRESS: u32 = 50;
pub const DEMO_PRIZE_POOL: u64 = 125 * MIST_PER_SUI;
pub const DEMO_WATERINGS: u64 = 47;
/// Pre-seeded contributors for the demo snapshot, largest first.
pub const DEMO_CONTRIBUTORS: [(&str, u64); 3] = [
    (DEV_WALLET_1, 15 * MIST_PER_SUI),
    (DEV_WALLET_2, 12 * MIST_PER_SUI),
    (DEV_WALLET_3, 8 * MIST_PER_SUI),
];
