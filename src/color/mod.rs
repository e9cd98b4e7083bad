//! Color conversion and harmony scoring
//!
//! This module holds the pure core: turning averaged RGB samples into HSV
//! and scoring three HSV colors against the outfit heuristic.

pub mod conversion;
pub mod harmony;

pub use conversion::{ColorConverter, HsvColor, RgbSample};
pub use harmony::{HarmonyReport, HarmonyScorer, Penalty, Verdict};
