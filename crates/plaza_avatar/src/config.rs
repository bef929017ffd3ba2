//! Engine configuration.
//!
//! Loaded once at startup, either from defaults or from a TOML document:
//!
//! ```toml
//! voxel_size = 0.1
//! neutral_gray = "#808080"
//! default_phase_multiplier = 0.7
//! effect_seed = 42
//! decal_font_path = "assets/fonts/PlazaSans.ttf"
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{Rgb, NEUTRAL_GRAY};
use crate::error::{AvatarError, AvatarResult};

/// Tunables shared by every build in one session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// World-space edge length of one voxel.
    pub voxel_size: f32,
    /// Fallback for unresolvable color keys.
    pub neutral_gray: String,
    /// Phase step between tracked skin materials when a skin sets none.
    pub default_phase_multiplier: f32,
    /// Seed for every randomized particle layout.
    pub effect_seed: u64,
    /// Amplitude of the emissive wobble on animated skins.
    pub emissive_wobble: f32,
    /// Texture pixels per font pixel for text decals.
    pub decal_pixel_scale: u32,
    /// TrueType/OpenType font for text decals, tried before system fonts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decal_font_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            voxel_size: 0.1,
            neutral_gray: NEUTRAL_GRAY.to_hex(),
            default_phase_multiplier: 0.7,
            effect_seed: 0x5EED_CAFE,
            emissive_wobble: 0.15,
            decal_pixel_scale: 4,
            decal_font_path: None,
        }
    }
}

impl EngineConfig {
    /// Parses and validates a TOML document. Missing keys keep defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value is out of range.
    pub fn from_toml_str(source: &str) -> AvatarResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`AvatarError::InvalidConfig`] or [`AvatarError::InvalidColor`].
    pub fn validate(&self) -> AvatarResult<()> {
        if !(self.voxel_size.is_finite() && self.voxel_size > 0.0) {
            return Err(AvatarError::InvalidConfig(format!(
                "voxel_size must be positive, got {}",
                self.voxel_size
            )));
        }
        if !self.default_phase_multiplier.is_finite() {
            return Err(AvatarError::InvalidConfig(
                "default_phase_multiplier must be finite".to_string(),
            ));
        }
        if !(self.emissive_wobble.is_finite() && self.emissive_wobble >= 0.0) {
            return Err(AvatarError::InvalidConfig(
                "emissive_wobble must be a non-negative number".to_string(),
            ));
        }
        if self.decal_pixel_scale == 0 || self.decal_pixel_scale > 32 {
            return Err(AvatarError::InvalidConfig(format!(
                "decal_pixel_scale must be in 1..=32, got {}",
                self.decal_pixel_scale
            )));
        }
        if Rgb::parse_hex(&self.neutral_gray).is_none() {
            return Err(AvatarError::InvalidColor {
                context: "neutral_gray".to_string(),
                value: self.neutral_gray.clone(),
            });
        }
        Ok(())
    }

    /// The resolved fallback color.
    #[must_use]
    pub fn fallback_color(&self) -> Rgb {
        Rgb::parse_hex(&self.neutral_gray).unwrap_or(NEUTRAL_GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fallback_color(), NEUTRAL_GRAY);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str("voxel_size = 0.25\neffect_seed = 7\n").unwrap();
        assert_eq!(config.voxel_size, 0.25);
        assert_eq!(config.effect_seed, 7);
        assert_eq!(config.default_phase_multiplier, 0.7);
        assert_eq!(config.decal_font_path, None);

        let config = EngineConfig::from_toml_str("decal_font_path = \"fonts/plaza.ttf\"\n").unwrap();
        assert_eq!(config.decal_font_path.as_deref(), Some("fonts/plaza.ttf"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            EngineConfig::from_toml_str("voxel_size = -1.0"),
            Err(AvatarError::InvalidConfig(_))
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("neutral_gray = \"grey\""),
            Err(AvatarError::InvalidColor { .. })
        ));
        assert!(matches!(
            EngineConfig::from_toml_str("voxel_size = ["),
            Err(AvatarError::Toml(_))
        ));
    }
}
