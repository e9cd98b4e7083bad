//! Configuration for the image sampling step.
//!
//! The harmony rules themselves are fixed (see [`crate::constants::harmony`]);
//! only how a garment photo is reduced to one average color can be tuned.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use outfit_harmony::HarmonyConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = HarmonyConfig::from_json_file(Path::new("harmony.json"))?;
//!
//! // Or use defaults
//! let config = HarmonyConfig::default();
//! # Ok::<(), outfit_harmony::HarmonyError>(())
//! ```

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::sampling;
use crate::{HarmonyError, Result};

/// Complete configuration for outfit analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HarmonyConfig {
    /// Image sampling configuration
    #[serde(default)]
    pub sampling: SamplingConfig,
}

/// How a garment photo is averaged down to one color.
///
/// The photo is stretched onto a `grid_size` × `grid_size` grid (aspect ratio
/// is not preserved) and every grid cell contributes equally to the average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Side length of the square sampling grid in pixels
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,

    /// Resampling filter used when stretching onto the grid
    #[serde(default)]
    pub filter: ResizeFilter,
}

/// Serializable mirror of [`image::imageops::FilterType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

fn default_grid_size() -> u32 {
    sampling::DEFAULT_GRID_SIZE
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            grid_size: sampling::DEFAULT_GRID_SIZE,
            filter: ResizeFilter::default(),
        }
    }
}

impl SamplingConfig {
    /// Reject grid sizes the sampler cannot use
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 || self.grid_size > sampling::MAX_GRID_SIZE {
            return Err(HarmonyError::invalid_parameter(
                "sampling.grid_size",
                self.grid_size,
            ));
        }
        Ok(())
    }
}

impl HarmonyConfig {
    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            HarmonyError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            HarmonyError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.sampling.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| HarmonyError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            HarmonyError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canvas_sampling() {
        let config = HarmonyConfig::default();
        assert_eq!(config.sampling.grid_size, 100);
        assert_eq!(config.sampling.filter, ResizeFilter::Triangle);
        assert!(config.sampling.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: HarmonyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HarmonyConfig::default());

        let config: HarmonyConfig =
            serde_json::from_str(r#"{"sampling": {"filter": "lanczos3"}}"#).unwrap();
        assert_eq!(config.sampling.grid_size, 100);
        assert_eq!(config.sampling.filter, ResizeFilter::Lanczos3);
    }

    #[test]
    fn test_zero_grid_rejected() {
        let sampling = SamplingConfig {
            grid_size: 0,
            ..SamplingConfig::default()
        };
        assert!(matches!(
            sampling.validate(),
            Err(HarmonyError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harmony.json");

        let config = HarmonyConfig {
            sampling: SamplingConfig {
                grid_size: 32,
                filter: ResizeFilter::Nearest,
            },
        };
        config.to_json_file(&path).unwrap();

        let loaded = HarmonyConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = HarmonyConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, HarmonyError::ConfigError { .. }));
    }
}
