//! # Outfit Harmony
//!
//! A Rust crate for judging whether three garments match from their photos.
//!
//! This library scores an outfit by:
//! - Averaging each garment photo down to one RGB sample
//! - Converting each sample to hue/saturation/value
//! - Applying a fixed heuristic to the three colors for a score in [0, 100]
//! - Mapping the score to a verdict
//!
//! ## Example
//!
//! ```rust,no_run
//! use outfit_harmony::{analyze_outfit, HarmonyConfig};
//! use std::path::Path;
//!
//! let result = analyze_outfit(
//!     [Path::new("top.jpg"), Path::new("bottom.jpg"), Path::new("shoes.jpg")],
//!     &HarmonyConfig::default(),
//! )?;
//! println!("Score: {}/100, {}", result.report.score, result.report.verdict);
//! # Ok::<(), outfit_harmony::HarmonyError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod logging;
pub mod outfit;

pub use color::{
    ColorConverter, HarmonyReport, HarmonyScorer, HsvColor, Penalty, RgbSample, Verdict,
};
pub use config::{HarmonyConfig, ResizeFilter, SamplingConfig};
pub use constants::SLOT_COUNT;
pub use error::{HarmonyError, Result};
pub use outfit::{Outfit, UploadTicket};

/// Color measured for one garment slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentColor {
    /// Averaged RGB sample (channels 0-255)
    pub rgb: RgbSample,
    /// HSV representation used for scoring
    pub hsv: HsvColor,
    /// Hexadecimal representation for display
    pub hex: String,
}

impl GarmentColor {
    pub fn from_sample(rgb: RgbSample) -> Self {
        Self {
            hsv: ColorConverter::new().sample_to_hsv(rgb),
            hex: rgb.to_hex(),
            rgb,
        }
    }
}

/// Complete analysis of a three-garment outfit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitResult {
    /// Per-slot colors in input order
    pub garments: Vec<GarmentColor>,
    /// Score, verdict and the rules that fired
    pub report: HarmonyReport,
}

/// Analyze an outfit from three garment photos
///
/// This is the main entry point. Each photo is averaged to one color and the
/// three colors are scored together.
///
/// # Errors
///
/// Returns `HarmonyError` if any photo cannot be loaded or decoded, or if
/// the sampling configuration is invalid. No score is produced unless all
/// three photos were sampled.
pub fn analyze_outfit(paths: [&Path; SLOT_COUNT], config: &HarmonyConfig) -> Result<OutfitResult> {
    let samples = paths
        .iter()
        .map(|path| image_loader::sample_file(path, &config.sampling))
        .collect::<Result<Vec<_>>>()?;

    analyze_samples(&samples)
}

/// Analyze an outfit from three `#RRGGBB` colors
///
/// # Errors
///
/// Returns `InvalidParameter` for any malformed hex string.
pub fn analyze_hex(colors: [&str; SLOT_COUNT]) -> Result<OutfitResult> {
    let converter = ColorConverter::new();
    let samples = colors
        .iter()
        .map(|hex| converter.hex_to_rgb(hex))
        .collect::<Result<Vec<_>>>()?;

    analyze_samples(&samples)
}

/// Run averaged samples through the outfit state and score them
fn analyze_samples(samples: &[RgbSample]) -> Result<OutfitResult> {
    let garments: Vec<GarmentColor> = samples
        .iter()
        .copied()
        .map(GarmentColor::from_sample)
        .collect();

    let mut outfit = Outfit::new();
    for (slot, garment) in garments.iter().enumerate() {
        outfit = outfit.fill(slot, garment.hsv)?;
    }

    if !outfit.is_complete() {
        return Err(HarmonyError::ProcessingError(format!(
            "Outfit incomplete: {} of {} slots filled",
            outfit.filled_count(),
            SLOT_COUNT
        )));
    }

    let outfit = outfit.analyze();
    let report = outfit
        .report()
        .cloned()
        .ok_or_else(|| HarmonyError::ProcessingError("Analysis produced no report".to_string()))?;

    Ok(OutfitResult { garments, report })
}
