//! Animated skins - declarative color cycling.
//!
//! A skin is pure config: a list of keyframe colors, a speed and a phase
//! policy. [`skin_color_at`] is the whole runtime math and has no hidden
//! state, so it is testable without a renderer.
//!
//! ## Phase policy
//!
//! - `use_phase_offsets = false`: every tracked material gets phase 0 and the
//!   whole character washes through the colors in unison.
//! - `use_phase_offsets = true`: material `i` (in registration order) gets
//!   phase `i × phase_multiplier` (0.7 when unset), so the colors ripple
//!   across parts.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::color::{Rgb, NEUTRAL_GRAY};
use crate::error::{AvatarError, AvatarResult};
use crate::material::{Material, UniqueMaterialId};

/// Phase step used when a skin enables offsets without a multiplier.
pub const DEFAULT_PHASE_MULTIPLIER: f32 = 0.7;

/// Color-cycling configuration for one skin id.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedSkinConfig {
    /// Skin id as used in descriptors.
    pub id: String,
    /// Keyframe colors, cycled in order.
    pub colors: Vec<Rgb>,
    /// Keyframes per second.
    pub speed: f32,
    /// Base emission intensity.
    pub emissive_strength: f32,
    /// Adds a twinkling star field to the body.
    pub has_stars: bool,
    /// Whether tracked materials get staggered phases.
    pub use_phase_offsets: bool,
    /// Phase step between tracked materials.
    pub phase_multiplier: Option<f32>,
}

impl AnimatedSkinConfig {
    /// First keyframe; the color parts are built with.
    #[must_use]
    pub fn base_color(&self) -> Rgb {
        self.colors.first().copied().unwrap_or(NEUTRAL_GRAY)
    }

    /// Phase for the material registered at `index`.
    #[must_use]
    pub fn phase_for(&self, index: usize, default_multiplier: f32) -> f32 {
        if self.use_phase_offsets {
            index as f32 * self.phase_multiplier.unwrap_or(default_multiplier)
        } else {
            0.0
        }
    }

    /// Displayed color at `time` for a material with `phase`.
    #[must_use]
    pub fn color_at(&self, time: f32, phase: f32) -> Rgb {
        skin_color_at(&self.colors, self.speed, phase, time)
    }

    fn validate(&self) -> AvatarResult<()> {
        if self.colors.is_empty() {
            return Err(AvatarError::EmptySkinPalette(self.id.clone()));
        }
        let multiplier_ok = self.phase_multiplier.map_or(true, f32::is_finite);
        if !self.speed.is_finite() || !self.emissive_strength.is_finite() || !multiplier_ok {
            return Err(AvatarError::InvalidSkinSpeed(self.id.clone()));
        }
        Ok(())
    }
}

/// Interpolated keyframe color.
///
/// `u = |t·s + p| mod N`, `i = floor(u) mod N`, `j = (i + 1) mod N`,
/// `blend = u − floor(u)`, result = `lerp(colors[i], colors[j], blend)`.
/// Empty keyframe lists yield neutral gray; non-finite input is read as 0.
#[must_use]
pub fn skin_color_at(colors: &[Rgb], speed: f32, phase: f32, time: f32) -> Rgb {
    let n = colors.len();
    if n == 0 {
        return NEUTRAL_GRAY;
    }
    let raw = (time * speed + phase).abs();
    let u = if raw.is_finite() { raw % n as f32 } else { 0.0 };
    let floor = u.floor();
    let i = (floor as usize) % n;
    let j = (i + 1) % n;
    colors[i].lerp(colors[j], u - floor)
}

/// Emission intensity: base plus a small sinusoidal wobble.
#[must_use]
pub fn emissive_intensity_at(base: f32, wobble: f32, time: f32, phase: f32) -> f32 {
    let value = base + (time * 2.0 + phase).sin() * wobble;
    if value.is_finite() {
        value.max(0.0)
    } else {
        base
    }
}

/// A unique material whose color follows a skin.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedMaterial {
    /// Current material state.
    pub material: Material,
    /// Fixed phase assigned at registration.
    pub phase: f32,
}

/// Build-time registration of animated-skin materials for one character.
#[derive(Debug, Clone)]
pub struct SkinTrack {
    config: AnimatedSkinConfig,
    target: Rgb,
    default_multiplier: f32,
    materials: Vec<TrackedMaterial>,
}

impl SkinTrack {
    /// Tracks buckets whose resolved color equals the skin's base color.
    #[must_use]
    pub fn new(config: AnimatedSkinConfig, default_multiplier: f32) -> Self {
        let target = config.base_color();
        Self {
            config,
            target,
            default_multiplier,
            materials: Vec::new(),
        }
    }

    /// Color buckets must match to be tracked.
    #[must_use]
    pub fn target(&self) -> Rgb {
        self.target
    }

    /// The skin being tracked.
    #[must_use]
    pub fn config(&self) -> &AnimatedSkinConfig {
        &self.config
    }

    /// Allocates a fresh unique material and assigns its phase.
    pub fn register(&mut self) -> UniqueMaterialId {
        let index = self.materials.len();
        let phase = self.config.phase_for(index, self.default_multiplier);
        self.materials.push(TrackedMaterial {
            material: Material::glowing(self.target, self.config.emissive_strength),
            phase,
        });
        UniqueMaterialId(index as u32)
    }

    /// Registered materials in registration order.
    #[must_use]
    pub fn materials(&self) -> &[TrackedMaterial] {
        &self.materials
    }

    /// Material by id.
    #[must_use]
    pub fn get(&self, id: UniqueMaterialId) -> Option<&TrackedMaterial> {
        self.materials.get(id.0 as usize)
    }

    /// Recolors every tracked material for `time`.
    pub fn update(&mut self, time: f32, wobble: f32) {
        for tracked in &mut self.materials {
            let color = self.config.color_at(time, tracked.phase);
            let intensity = emissive_intensity_at(self.config.emissive_strength, wobble, time, tracked.phase);
            tracked.material.set_glow(color, intensity);
        }
    }
}

#[derive(Debug, Deserialize)]
struct SkinFile {
    #[serde(default)]
    skin: Vec<SkinSpec>,
}

#[derive(Debug, Deserialize)]
struct SkinSpec {
    id: String,
    colors: Vec<String>,
    speed: f32,
    #[serde(default = "default_emissive")]
    emissive_strength: f32,
    #[serde(default)]
    has_stars: bool,
    #[serde(default = "default_true")]
    use_phase_offsets: bool,
    #[serde(default)]
    phase_multiplier: Option<f32>,
}

fn default_emissive() -> f32 {
    0.4
}

fn default_true() -> bool {
    true
}

struct BuiltinSkin {
    id: &'static str,
    colors: &'static [&'static str],
    speed: f32,
    emissive_strength: f32,
    has_stars: bool,
    use_phase_offsets: bool,
    phase_multiplier: Option<f32>,
}

const BUILTIN_SKINS: &[BuiltinSkin] = &[
    BuiltinSkin {
        id: "rainbow",
        colors: &["#FF0000", "#FF7F00", "#FFFF00", "#00FF00", "#0000FF", "#8B00FF"],
        speed: 0.8,
        emissive_strength: 0.3,
        has_stars: false,
        use_phase_offsets: false,
        phase_multiplier: None,
    },
    BuiltinSkin {
        id: "galaxy",
        colors: &["#1A0033", "#3D1A78", "#6A0DAD", "#241E4E"],
        speed: 0.25,
        emissive_strength: 0.5,
        has_stars: true,
        use_phase_offsets: true,
        phase_multiplier: None,
    },
    BuiltinSkin {
        id: "lava",
        colors: &["#FF4500", "#FF8C00", "#B22222"],
        speed: 0.6,
        emissive_strength: 0.8,
        has_stars: false,
        use_phase_offsets: true,
        phase_multiplier: Some(1.2),
    },
    BuiltinSkin {
        id: "aurora",
        colors: &["#00FFAA", "#00BFFF", "#7B68EE", "#00FA9A"],
        speed: 0.4,
        emissive_strength: 0.6,
        has_stars: true,
        use_phase_offsets: true,
        phase_multiplier: Some(0.5),
    },
    BuiltinSkin {
        id: "neon",
        colors: &["#FF00FF", "#00FFFF"],
        speed: 1.5,
        emissive_strength: 1.0,
        has_stars: false,
        use_phase_offsets: false,
        phase_multiplier: None,
    },
    BuiltinSkin {
        id: "sunset",
        colors: &["#FF5E62", "#FF9966", "#FFC371"],
        speed: 0.3,
        emissive_strength: 0.2,
        has_stars: false,
        use_phase_offsets: true,
        phase_multiplier: Some(0.9),
    },
];

/// All animated skins known to the session.
#[derive(Debug, Clone, Default)]
pub struct SkinRegistry {
    skins: BTreeMap<String, AnimatedSkinConfig>,
}

impl SkinRegistry {
    /// The built-in skin set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for spec in BUILTIN_SKINS {
            let config = AnimatedSkinConfig {
                id: spec.id.to_string(),
                colors: spec.colors.iter().filter_map(|c| Rgb::parse_hex(c)).collect(),
                speed: spec.speed,
                emissive_strength: spec.emissive_strength,
                has_stars: spec.has_stars,
                use_phase_offsets: spec.use_phase_offsets,
                phase_multiplier: spec.phase_multiplier,
            };
            registry.skins.insert(config.id.clone(), config);
        }
        registry
    }

    /// Parses additional skins from TOML and layers them over `self`.
    ///
    /// ```toml
    /// [[skin]]
    /// id = "mint"
    /// colors = ["#98FF98", "#3EB489"]
    /// speed = 0.5
    /// use_phase_offsets = false
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, bad hex, empty color lists,
    /// non-finite speeds or an id repeated within the document.
    pub fn extend_from_toml_str(&mut self, source: &str) -> AvatarResult<()> {
        let file: SkinFile = toml::from_str(source)?;
        let mut seen = std::collections::BTreeSet::new();
        for spec in file.skin {
            if !seen.insert(spec.id.clone()) {
                return Err(AvatarError::DuplicateId { table: "skin", id: spec.id });
            }
            let mut colors = Vec::with_capacity(spec.colors.len());
            for literal in &spec.colors {
                let color = Rgb::parse_hex(literal).ok_or_else(|| AvatarError::InvalidColor {
                    context: format!("skin {:?}", spec.id),
                    value: literal.clone(),
                })?;
                colors.push(color);
            }
            let config = AnimatedSkinConfig {
                id: spec.id,
                colors,
                speed: spec.speed,
                emissive_strength: spec.emissive_strength,
                has_stars: spec.has_stars,
                use_phase_offsets: spec.use_phase_offsets,
                phase_multiplier: spec.phase_multiplier,
            };
            config.validate()?;
            self.skins.insert(config.id.clone(), config);
        }
        Ok(())
    }

    /// Built-in skins plus the ones in `source`.
    ///
    /// # Errors
    ///
    /// See [`SkinRegistry::extend_from_toml_str`].
    pub fn from_toml_str(source: &str) -> AvatarResult<Self> {
        let mut registry = Self::builtin();
        registry.extend_from_toml_str(source)?;
        Ok(registry)
    }

    /// Checks every registered skin.
    ///
    /// # Errors
    ///
    /// Returns the first invalid skin's error.
    pub fn validate(&self) -> AvatarResult<()> {
        for (id, config) in &self.skins {
            if config.colors.is_empty() {
                return Err(AvatarError::EmptySkinPalette(id.clone()));
            }
            config.validate()?;
        }
        for spec in BUILTIN_SKINS {
            for literal in spec.colors {
                if Rgb::parse_hex(literal).is_none() {
                    return Err(AvatarError::InvalidColor {
                        context: format!("skin {:?}", spec.id),
                        value: (*literal).to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Config for `id`, if it is an animated skin.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AnimatedSkinConfig> {
        self.skins.get(id)
    }

    /// Registered ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.skins.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(0xFF, 0, 0);
    const GREEN: Rgb = Rgb::new(0, 0xFF, 0);

    #[test]
    fn test_interpolation_keyframes() {
        let colors = [RED, GREEN];
        assert_eq!(skin_color_at(&colors, 1.0, 0.0, 0.0), RED);
        assert_eq!(skin_color_at(&colors, 1.0, 0.0, 0.5), RED.lerp(GREEN, 0.5));
        // position = t * speed mod N, so keyframe 1 (green) lands at t = 1
        assert_eq!(skin_color_at(&colors, 1.0, 0.0, 1.0), GREEN);
        // one full cycle is N / speed seconds
        assert_eq!(skin_color_at(&colors, 1.0, 0.0, 2.0), RED);
    }

    #[test]
    fn test_interpolation_uses_absolute_value() {
        let colors = [RED, GREEN];
        assert_eq!(
            skin_color_at(&colors, 1.0, 0.0, -0.25),
            skin_color_at(&colors, 1.0, 0.0, 0.25)
        );
    }

    #[test]
    fn test_interpolation_degenerate_inputs() {
        assert_eq!(skin_color_at(&[], 1.0, 0.0, 3.0), NEUTRAL_GRAY);
        assert_eq!(skin_color_at(&[RED, GREEN], 1.0, 0.0, f32::NAN), RED);
        assert_eq!(skin_color_at(&[GREEN], 5.0, 0.3, 12.7), GREEN);
    }

    #[test]
    fn test_phase_policy() {
        let mut config = SkinRegistry::builtin().get("rainbow").unwrap().clone();
        assert!(!config.use_phase_offsets);
        assert_eq!(config.phase_for(5, DEFAULT_PHASE_MULTIPLIER), 0.0);

        config.use_phase_offsets = true;
        config.phase_multiplier = Some(1.2);
        assert!((config.phase_for(3, DEFAULT_PHASE_MULTIPLIER) - 3.6).abs() < 1e-6);

        config.phase_multiplier = None;
        assert!((config.phase_for(2, DEFAULT_PHASE_MULTIPLIER) - 1.4).abs() < 1e-6);
    }

    #[test]
    fn test_track_registration_order() {
        let config = SkinRegistry::builtin().get("lava").unwrap().clone();
        let mut track = SkinTrack::new(config, DEFAULT_PHASE_MULTIPLIER);
        let ids: Vec<_> = (0..3).map(|_| track.register()).collect();
        assert_eq!(ids, vec![UniqueMaterialId(0), UniqueMaterialId(1), UniqueMaterialId(2)]);
        let phases: Vec<f32> = track.materials().iter().map(|m| m.phase).collect();
        assert!((phases[2] - 2.4).abs() < 1e-6);
    }

    #[test]
    fn test_track_update_recolors() {
        let config = SkinRegistry::builtin().get("neon").unwrap().clone();
        let mut track = SkinTrack::new(config, DEFAULT_PHASE_MULTIPLIER);
        track.register();
        let before = track.materials()[0].material.color();
        track.update(0.5, 0.15);
        let after = &track.materials()[0];
        assert_ne!(after.material.color(), before);
        assert_eq!(after.material.color(), track.config().color_at(0.5, 0.0));
        assert!(after.material.intensity() >= 0.0);
    }

    #[test]
    fn test_emissive_wobble_bounds() {
        for i in 0..100 {
            let v = emissive_intensity_at(0.5, 0.15, i as f32 * 0.37, 1.0);
            assert!((0.35..=0.65).contains(&v));
        }
    }

    #[test]
    fn test_builtin_registry_valid() {
        let registry = SkinRegistry::builtin();
        assert!(registry.validate().is_ok());
        assert!(registry.get("rainbow").is_some());
        assert!(registry.get("galaxy").unwrap().has_stars);
    }

    #[test]
    fn test_toml_extension() {
        let registry = SkinRegistry::from_toml_str(
            r##"
            [[skin]]
            id = "mint"
            colors = ["#98FF98", "#3EB489"]
            speed = 0.5
            use_phase_offsets = false
            "##,
        )
        .unwrap();
        let mint = registry.get("mint").unwrap();
        assert_eq!(mint.colors.len(), 2);
        assert!(!mint.use_phase_offsets);
        assert!(registry.get("rainbow").is_some());
    }

    #[test]
    fn test_toml_rejects_bad_skins() {
        let bad_color = "[[skin]]\nid = \"x\"\ncolors = [\"nope\"]\nspeed = 1.0\n";
        assert!(matches!(
            SkinRegistry::from_toml_str(bad_color),
            Err(AvatarError::InvalidColor { .. })
        ));
        let empty = "[[skin]]\nid = \"x\"\ncolors = []\nspeed = 1.0\n";
        assert!(matches!(
            SkinRegistry::from_toml_str(empty),
            Err(AvatarError::EmptySkinPalette(_))
        ));
        let dup = "[[skin]]\nid = \"x\"\ncolors = [\"#000000\"]\nspeed = 1.0\n\n[[skin]]\nid = \"x\"\ncolors = [\"#000000\"]\nspeed = 1.0\n";
        assert!(matches!(
            SkinRegistry::from_toml_str(dup),
            Err(AvatarError::DuplicateId { .. })
        ));
    }
}
