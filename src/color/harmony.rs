//! Outfit harmony scoring
//!
//! Scores three garment colors with a fixed heuristic:
//! - hue spread that is too narrow (muddy) or too wide (harsh contrast)
//! - an overly saturated palette
//! - too little brightness contrast
//!
//! Each rule deducts a fixed number of points from a base of 100. Rules are
//! independent, so the order they are checked in does not change the score.
//!
//! Hue spread is the linear difference between the largest and smallest hue,
//! not the distance around the hue wheel: 350° and 10° count as 340° apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::color::HsvColor;
use crate::constants::{harmony, verdict, SLOT_COUNT};

/// One rule that fired against an outfit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Penalty {
    /// Hues are too close together
    Muddy,
    /// Hues span too much of the wheel
    HarshContrast,
    /// Average saturation is too high
    OverSaturated,
    /// Brightness barely varies between garments
    FlatBrightness,
}

impl Penalty {
    /// Points deducted when this rule fires
    pub fn points(&self) -> i32 {
        match self {
            Penalty::Muddy => harmony::MUDDY_PENALTY,
            Penalty::HarshContrast => harmony::HARSH_PENALTY,
            Penalty::OverSaturated => harmony::SATURATION_PENALTY,
            Penalty::FlatBrightness => harmony::BRIGHTNESS_PENALTY,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Penalty::Muddy => "colors are too similar",
            Penalty::HarshContrast => "hues clash with too much contrast",
            Penalty::OverSaturated => "palette is overly saturated",
            Penalty::FlatBrightness => "not enough light/dark contrast",
        }
    }
}

/// Qualitative reading of a harmony score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    WorksWellTogether,
    BorderlineMatch,
    LikelyClashes,
}

impl Verdict {
    /// Map a score to its verdict tier; lower bounds are inclusive
    pub fn from_score(score: u8) -> Self {
        if score >= verdict::WORKS_WELL_MIN {
            Verdict::WorksWellTogether
        } else if score >= verdict::BORDERLINE_MIN {
            Verdict::BorderlineMatch
        } else {
            Verdict::LikelyClashes
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::WorksWellTogether => "works well together",
            Verdict::BorderlineMatch => "borderline match",
            Verdict::LikelyClashes => "likely clashes",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full scoring breakdown for one outfit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarmonyReport {
    /// Final score in [0, 100]
    pub score: u8,
    pub verdict: Verdict,
    /// max(h) - min(h) in degrees
    pub hue_spread: f64,
    pub average_saturation: f64,
    /// max(v) - min(v)
    pub value_spread: f64,
    /// Rules that fired, in evaluation order
    pub penalties: Vec<Penalty>,
}

/// Heuristic scorer for exactly three garment colors
#[derive(Debug, Clone, Copy, Default)]
pub struct HarmonyScorer;

impl HarmonyScorer {
    pub fn new() -> Self {
        Self
    }

    /// Score three colors and explain which rules fired
    pub fn evaluate(&self, colors: &[HsvColor; SLOT_COUNT]) -> HarmonyReport {
        let hue_spread = spread(colors.iter().map(|c| c.h));
        let value_spread = spread(colors.iter().map(|c| c.v));
        let average_saturation =
            colors.iter().map(|c| c.s).sum::<f64>() / SLOT_COUNT as f64;

        let mut penalties = Vec::new();

        if hue_spread < harmony::MUDDY_HUE_SPREAD {
            penalties.push(Penalty::Muddy);
        } else if hue_spread > harmony::HARSH_HUE_SPREAD {
            penalties.push(Penalty::HarshContrast);
        }

        if average_saturation > harmony::MAX_AVERAGE_SATURATION {
            penalties.push(Penalty::OverSaturated);
        }

        if value_spread < harmony::MIN_VALUE_SPREAD {
            penalties.push(Penalty::FlatBrightness);
        }

        let raw = harmony::BASE_SCORE - penalties.iter().map(Penalty::points).sum::<i32>();
        let score = raw.clamp(harmony::MIN_SCORE, harmony::MAX_SCORE) as u8;
        let verdict = Verdict::from_score(score);

        debug!(
            score,
            hue_spread,
            average_saturation,
            value_spread,
            penalties = ?penalties,
            "scored outfit"
        );

        HarmonyReport {
            score,
            verdict,
            hue_spread,
            average_saturation,
            value_spread,
            penalties,
        }
    }

    /// Score three colors, clamped to [0, 100]
    pub fn score(&self, colors: &[HsvColor; SLOT_COUNT]) -> u8 {
        self.evaluate(colors).score
    }
}

/// Linear spread of a non-empty sequence
fn spread(values: impl Iterator<Item = f64>) -> f64 {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
        (lo.min(x), hi.max(x))
    });
    max - min
}
