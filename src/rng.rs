//! Injectable randomness for the engine.
//!
//! The simulator only needs display-quality pseudorandomness, but the draws
//! must be swappable so tests can feed deterministic sequences.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::{THRESHOLD_MAX, THRESHOLD_MIN};

/// Source of the engine's random draws.
pub trait RandomSource: Send {
    /// Draw the hidden completion threshold for a new round,
    /// uniform over 97..=103.
    fn completion_threshold(&mut self) -> u32;

    /// Draw a progress gain, uniform over `min..=max` inclusive.
    fn progress_gain(&mut self, min: u32, max: u32) -> u32;
}

/// Default source backed by `StdRng`.
pub struct StdRandom(StdRng);

impl StdRandom {
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible runs (demo recordings, soak tests).
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn completion_threshold(&mut self) -> u32 {
        self.0.gen_range(THRESHOLD_MIN..=THRESHOLD_MAX)
    }

    fn progress_gain(&mut self, min: u32, max: u32) -> u32 {
        self.0.gen_range(min..=max)
    }
}

/// Fully scripted source for tests: a fixed threshold and either a queued
/// gain sequence or a constant gain. Scripted gains are returned as-is
/// (no clamping to the tier range); when a queue runs dry the source falls
/// back to the constant gain, or to `min`.
pub struct ScriptedRandom {
    threshold: u32,
    gains: VecDeque<u32>,
    fixed_gain: Option<u32>,
}

impl ScriptedRandom {
    /// Every progress draw returns `gain`.
    pub fn fixed(threshold: u32, gain: u32) -> Self {
        Self {
            threshold,
            gains: VecDeque::new(),
            fixed_gain: Some(gain),
        }
    }

    /// Progress draws consume `gains` front to back.
    pub fn sequence(threshold: u32, gains: &[u32]) -> Self {
        Self {
            threshold,
            gains: gains.iter().copied().collect(),
            fixed_gain: None,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn completion_threshold(&mut self) -> u32 {
        self.threshold
    }

    fn progress_gain(&mut self, min: u32, _max: u32) -> u32 {
        self.gains
            .pop_front()
            .or(self.fixed_gain)
            .unwrap_or(min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_range_and_spread() {
        let mut rng = StdRandom::seeded(7);
        let mut counts = [0u32; 7];
        for _ in 0..10_000 {
            let t = rng.completion_threshold();
            assert!((THRESHOLD_MIN..=THRESHOLD_MAX).contains(&t));
            counts[(t - THRESHOLD_MIN) as usize] += 1;
        }
        // ~1428 expected per bucket; loose bounds to keep the test stable.
        for (i, c) in counts.iter().enumerate() {
            assert!(
                (1200..=1700).contains(c),
                "threshold {} drawn {} times, outside uniform bounds",
                THRESHOLD_MIN + i as u32,
                c
            );
        }
    }

    #[test]
    fn test_progress_gain_inclusive_bounds() {
        let mut rng = StdRandom::seeded(42);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..1_000 {
            let g = rng.progress_gain(6, 10);
            assert!((6..=10).contains(&g));
            saw_min |= g == 6;
            saw_max |= g == 10;
        }
        assert!(saw_min && saw_max, "inclusive endpoints never drawn");
    }

    #[test]
    fn test_scripted_sequence_then_fallback() {
        let mut rng = ScriptedRandom::sequence(100, &[9, 3]);
        assert_eq!(rng.completion_threshold(), 100);
        assert_eq!(rng.progress_gain(1, 2), 9);
        assert_eq!(rng.progress_gain(1, 2), 3);
        // Queue exhausted, falls back to min.
        assert_eq!(rng.progress_gain(1, 2), 1);
    }
}
