//! Phase math: mapping (phase, within-phase %) onto the whole-round scale.
//!
//! The four growth phases cover fixed bands of overall progress:
//! phase 1 `[0,30)`, phase 2 `[30,60)`, phase 3 `[60,80)`, phase 4
//! `[80,100+)`. Phase 4 is open-ended upward: within-phase progress is never
//! capped, and the completion threshold can be drawn up to 103.

use crate::constants::{PHASE_SIZES, PHASE_STARTS};

/// Number of growth phases. Phase 4 never rolls over.
pub const PHASE_COUNT: u32 = 4;

/// Display name for a phase. Anything past 4 is clamped to the last band.
pub fn phase_name(phase: u32) -> &'static str {
    match phase {
        0 | 1 => "Seedling",
        2 => "Growing",
        3 => "Maturing",
        _ => "Final Stretch",
    }
}

/// Overall progress on the 0-100(+) scale:
/// `band_start + (phase_progress / 100) * band_size`.
pub fn overall_progress(phase: u32, phase_progress: u32) -> f64 {
    let idx = (phase.saturating_sub(1)).min(PHASE_COUNT - 1) as usize;
    PHASE_STARTS[idx] + (phase_progress as f64 / 100.0) * PHASE_SIZES[idx]
}
