//! Heuristic thresholds and sampling defaults
//!
//! The scoring rules are fixed; they are compile-time constants rather than
//! configuration so every outfit is judged by the same rule set.

/// Harmony heuristic thresholds and point deductions
pub mod harmony {
    /// Starting score before any penalty
    pub const BASE_SCORE: i32 = 100;

    /// Hue spread below this (degrees) reads as muddy / too similar
    pub const MUDDY_HUE_SPREAD: f64 = 15.0;
    pub const MUDDY_PENALTY: i32 = 30;

    /// Hue spread above this (degrees) reads as harsh contrast
    pub const HARSH_HUE_SPREAD: f64 = 200.0;
    pub const HARSH_PENALTY: i32 = 20;

    /// Average saturation above this is an overly saturated palette
    pub const MAX_AVERAGE_SATURATION: f64 = 0.85;
    pub const SATURATION_PENALTY: i32 = 15;

    /// Value spread below this lacks brightness contrast
    pub const MIN_VALUE_SPREAD: f64 = 0.15;
    pub const BRIGHTNESS_PENALTY: i32 = 10;

    pub const MIN_SCORE: i32 = 0;
    pub const MAX_SCORE: i32 = 100;
}

/// Verdict tier lower bounds (inclusive)
pub mod verdict {
    pub const WORKS_WELL_MIN: u8 = 75;
    pub const BORDERLINE_MIN: u8 = 50;
}

/// Image sampling parameters
pub mod sampling {
    /// Images are resampled onto a square grid of this size before averaging
    pub const DEFAULT_GRID_SIZE: u32 = 100;

    /// Largest grid accepted from configuration
    pub const MAX_GRID_SIZE: u32 = 4096;
}

/// Number of garment slots in an outfit
pub const SLOT_COUNT: usize = 3;
