//! Watering tiers: the three fixed contribution options.

use serde::{Deserialize, Serialize};

use crate::constants::{DRIP_COST, FLOOD_COST, SPLASH_COST};
use crate::error::GameError;

/// Contribution tier id, as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterTier {
    Drip,
    Splash,
    Flood,
}

/// Static spec for one tier: cost, progress gain range, and the earliest
/// phase it can be used in.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierSpec {
    pub tier: WaterTier,
    pub cost: u64,
    pub progress_min: u32,
    pub progress_max: u32,
    pub unlock_phase: u32,
}

/// The full tier table. Configuration constants, never computed.
pub const TIER_TABLE: [TierSpec; 3] = [
    TierSpec {
        tier: WaterTier::Drip,
        cost: DRIP_COST,
        progress_min: 1,
        progress_max: 2,
        unlock_phase: 1,
    },
    TierSpec {
        tier: WaterTier::Splash,
        cost: SPLASH_COST,
        progress_min: 3,
        progress_max: 5,
        unlock_phase: 2,
    },
    TierSpec {
        tier: WaterTier::Flood,
        cost: FLOOD_COST,
        progress_min: 6,
        progress_max: 10,
        unlock_phase: 3,
    },
];

impl WaterTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterTier::Drip => "drip",
            WaterTier::Splash => "splash",
            WaterTier::Flood => "flood",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "drip" => Some(WaterTier::Drip),
            "splash" => Some(WaterTier::Splash),
            "flood" => Some(WaterTier::Flood),
            _ => None,
        }
    }

    /// Resolve a wire-level tier id, failing on anything outside the closed set.
    pub fn lookup(id: &str) -> Result<Self, GameError> {
        Self::from_str(id).ok_or_else(|| GameError::InvalidTier(id.to_string()))
    }

    pub fn spec(&self) -> &'static TierSpec {
        match self {
            WaterTier::Drip => &TIER_TABLE[0],
            WaterTier::Splash => &TIER_TABLE[1],
            WaterTier::Flood => &TIER_TABLE[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_tiers() {
        assert_eq!(WaterTier::lookup("drip").unwrap(), WaterTier::Drip);
        assert_eq!(WaterTier::lookup("SPLASH").unwrap(), WaterTier::Splash);
        assert_eq!(WaterTier::lookup("Flood").unwrap(), WaterTier::Flood);
    }

    #[test]
    fn test_lookup_unknown_tier_fails() {
        let err = WaterTier::lookup("monsoon").unwrap_err();
        assert_eq!(err, GameError::InvalidTier("monsoon".into()));
    }

    #[test]
    fn test_table_shape() {
        for spec in &TIER_TABLE {
            assert!(spec.progress_min <= spec.progress_max);
            assert!(spec.cost > 0);
            assert!((1..=3).contains(&spec.unlock_phase));
            assert_eq!(spec.tier.spec().cost, spec.cost);
        }
        // Costs and unlock phases strictly increase with tier.
        assert!(TIER_TABLE[0].cost < TIER_TABLE[1].cost);
        assert!(TIER_TABLE[1].cost < TIER_TABLE[2].cost);
    }
}
