//! Static cosmetic and mount catalog.
//!
//! Every table is `'static` data. [`Catalog::validate`] runs once at startup
//! and is the only place catalog mistakes can surface; lookups afterwards
//! never fail and degrade to category defaults.

mod cosmetics;
mod mounts;

use std::collections::BTreeSet;

use tracing::warn;

use crate::color::Rgb;
use crate::decal::TextDecalSpec;
use crate::effects::{EffectSpec, Motion};
use crate::error::{AvatarError, AvatarResult};
use crate::voxel::{shape_keys, Palette, Shape};

/// Id that selects nothing for optional categories.
pub const NONE_ID: &str = "none";

/// Skin id used when the descriptor's skin is unknown.
pub const DEFAULT_SKIN: &str = "blue";

/// Plain (non-animated) skin colors.
pub const SKIN_COLORS: &[(&str, &str)] = &[
    ("blue", "#1E90FF"),
    ("black", "#222222"),
    ("red", "#E53935"),
    ("green", "#43A047"),
    ("pink", "#FF8FB1"),
    ("purple", "#8E44AD"),
    ("orange", "#FB8C00"),
    ("yellow", "#FDD835"),
    ("white", "#F5F5F5"),
    ("brown", "#8D6E63"),
    ("gray", "#9E9E9E"),
    ("gold", "#FFC107"),
    ("teal", "#009688"),
];

/// Cosmetic category a rig may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Worn on top of the head.
    Hat,
    /// Face, eye level.
    Eyes,
    /// Face, mouth level.
    Mouth,
    /// Worn on or held by the body.
    BodyItem,
}

impl Category {
    /// All categories in build order.
    pub const ALL: [Self; 4] = [Self::Hat, Self::Eyes, Self::Mouth, Self::BodyItem];

    /// Id used when a selection is unknown. `None` means "nothing".
    #[must_use]
    pub const fn default_id(self) -> Option<&'static str> {
        match self {
            Self::Eyes => Some("normal"),
            Self::Mouth => Some("beak"),
            Self::Hat | Self::BodyItem => None,
        }
    }

    /// Node name of the attached part.
    #[must_use]
    pub const fn part_name(self) -> &'static str {
        match self {
            Self::Hat => "hat",
            Self::Eyes => "eyes",
            Self::Mouth => "mouth",
            Self::BodyItem => "body_item",
        }
    }

    const fn table_name(self) -> &'static str {
        match self {
            Self::Hat => "hats",
            Self::Eyes => "eyes",
            Self::Mouth => "mouths",
            Self::BodyItem => "body_items",
        }
    }
}

/// An articulated piece with its own pivot and motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubPart {
    /// Part name.
    pub name: &'static str,
    /// Geometry, local to the owning entry.
    pub shapes: &'static [Shape],
    /// Joint position in the owner's voxel grid.
    pub pivot: [f32; 3],
    /// Spin or flap; `None` for static pieces.
    pub motion: Option<Motion>,
}

/// A particle field mounted at an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectAttachment {
    /// Field declaration.
    pub spec: EffectSpec,
    /// Offset in the owner's voxel grid.
    pub offset: [f32; 3],
}

/// A point light mounted at an offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightSpec {
    /// Color literal.
    pub color: &'static str,
    /// Intensity.
    pub intensity: f32,
    /// Range in world units.
    pub range: f32,
    /// Offset in the owner's voxel grid.
    pub offset: [f32; 3],
}

/// One hat, eyes, mouth or body item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmeticEntry {
    /// Selection id.
    pub id: &'static str,
    /// Geometry around the category anchor.
    pub shapes: &'static [Shape],
    /// Entry-local color keys.
    pub palette: &'static [(&'static str, &'static str)],
    /// Swaps the rig to its hidden-body variant.
    pub hide_body: bool,
    /// Parented under the rig's held limb instead of the body.
    pub held: bool,
    /// Printed text.
    pub text_decal: Option<TextDecalSpec>,
    /// Particle fields.
    pub effects: &'static [EffectAttachment],
    /// Articulated pieces.
    pub sub_parts: &'static [SubPart],
    /// Glow.
    pub light: Option<LightSpec>,
}

impl CosmeticEntry {
    /// A plain voxel cosmetic.
    #[must_use]
    pub const fn plain(
        id: &'static str,
        shapes: &'static [Shape],
        palette: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            id,
            shapes,
            palette,
            hide_body: false,
            held: false,
            text_decal: None,
            effects: &[],
            sub_parts: &[],
            light: None,
        }
    }

    /// Entry-local palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::from_pairs(self.palette)
    }
}

/// One mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountEntry {
    /// Selection id.
    pub id: &'static str,
    /// Static hull geometry.
    pub hull: &'static [Shape],
    /// Mount-local color keys.
    pub palette: &'static [(&'static str, &'static str)],
    /// Articulated pieces (oars, wheels, wings).
    pub sub_parts: &'static [SubPart],
    /// Trails and other fields.
    pub effects: &'static [EffectAttachment],
    /// Glow.
    pub light: Option<LightSpec>,
    /// Placement under the rider, in the species' voxel grid.
    pub offset: [f32; 3],
    /// Uniform scale of the whole mount.
    pub scale: f32,
}

impl MountEntry {
    /// Mount-local palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::from_pairs(self.palette)
    }
}

/// All static cosmetic tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    hats: &'static [CosmeticEntry],
    eyes: &'static [CosmeticEntry],
    mouths: &'static [CosmeticEntry],
    body_items: &'static [CosmeticEntry],
    mounts: &'static [MountEntry],
    skin_colors: &'static [(&'static str, &'static str)],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The shipped tables.
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            hats: cosmetics::HATS,
            eyes: cosmetics::EYES,
            mouths: cosmetics::MOUTHS,
            body_items: cosmetics::BODY_ITEMS,
            mounts: mounts::MOUNTS,
            skin_colors: SKIN_COLORS,
        }
    }

    const fn table(&self, category: Category) -> &'static [CosmeticEntry] {
        match category {
            Category::Hat => self.hats,
            Category::Eyes => self.eyes,
            Category::Mouth => self.mouths,
            Category::BodyItem => self.body_items,
        }
    }

    /// Exact lookup.
    #[must_use]
    pub fn get(&self, category: Category, id: &str) -> Option<&'static CosmeticEntry> {
        self.table(category).iter().find(|e| e.id == id)
    }

    /// Lookup with category fallback.
    ///
    /// `"none"` and the empty string select nothing for hats and body items.
    /// Unknown ids fall back to the category default.
    #[must_use]
    pub fn resolve(&self, category: Category, id: &str) -> Option<&'static CosmeticEntry> {
        if let Some(entry) = self.get(category, id) {
            return Some(entry);
        }
        if !(id.is_empty() || id == NONE_ID) {
            warn!(?category, id, "unknown cosmetic id, using category default");
        }
        category.default_id().and_then(|d| self.get(category, d))
    }

    /// Mount lookup; unknown ids select no mount.
    #[must_use]
    pub fn mount(&self, id: &str) -> Option<&'static MountEntry> {
        let found = self.mounts.iter().find(|m| m.id == id);
        if found.is_none() && !(id.is_empty() || id == NONE_ID) {
            warn!(id, "unknown mount id, riding on foot");
        }
        found
    }

    /// Plain skin color, if `id` names one.
    #[must_use]
    pub fn skin_color(&self, id: &str) -> Option<Rgb> {
        self.skin_colors
            .iter()
            .find(|(k, _)| *k == id)
            .and_then(|(_, v)| Rgb::parse_hex(v))
    }

    /// Ids in one category table.
    pub fn ids(&self, category: Category) -> impl Iterator<Item = &'static str> {
        self.table(category).iter().map(|e| e.id)
    }

    /// Mount ids.
    pub fn mount_ids(&self) -> impl Iterator<Item = &'static str> {
        self.mounts.iter().map(|m| m.id)
    }

    /// Checks the static tables: unique ids, parseable literals, every
    /// palette key resolvable, defaults present.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> AvatarResult<()> {
        for category in Category::ALL {
            let table = self.table(category);
            unique_ids(category.table_name(), table.iter().map(|e| e.id))?;
            if let Some(default) = category.default_id() {
                if self.get(category, default).is_none() {
                    return Err(AvatarError::InvalidConfig(format!(
                        "{} is missing its default entry {default:?}",
                        category.table_name()
                    )));
                }
            }
            for entry in table {
                let context = format!("{}/{}", category.table_name(), entry.id);
                check_palette(&context, entry.palette)?;
                check_shapes(&context, entry.shapes, &entry.palette())?;
                for sub in entry.sub_parts {
                    check_shapes(&context, sub.shapes, &entry.palette())?;
                }
                check_effects(&context, entry.effects)?;
                if let Some(light) = &entry.light {
                    check_literal(&context, light.color)?;
                }
                if let Some(decal) = &entry.text_decal {
                    check_literal(&context, decal.color)?;
                    if let Some(bg) = decal.background {
                        check_literal(&context, bg)?;
                    }
                }
            }
        }

        unique_ids("mounts", self.mounts.iter().map(|m| m.id))?;
        for mount in self.mounts {
            let context = format!("mounts/{}", mount.id);
            check_palette(&context, mount.palette)?;
            check_shapes(&context, mount.hull, &mount.palette())?;
            for sub in mount.sub_parts {
                check_shapes(&context, sub.shapes, &mount.palette())?;
            }
            check_effects(&context, mount.effects)?;
            if let Some(light) = &mount.light {
                check_literal(&context, light.color)?;
            }
            if !(mount.scale.is_finite() && mount.scale > 0.0) {
                return Err(AvatarError::InvalidConfig(format!("{context}: scale must be positive")));
            }
        }

        unique_ids("skin_colors", self.skin_colors.iter().map(|(k, _)| *k))?;
        check_palette("skin_colors", self.skin_colors)?;
        if self.skin_color(DEFAULT_SKIN).is_none() {
            return Err(AvatarError::InvalidConfig(format!(
                "skin_colors is missing the default {DEFAULT_SKIN:?}"
            )));
        }
        Ok(())
    }
}

fn unique_ids<'a>(table: &'static str, ids: impl Iterator<Item = &'a str>) -> AvatarResult<()> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AvatarError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_literal(context: &str, literal: &str) -> AvatarResult<()> {
    if Rgb::parse_hex(literal).is_none() {
        return Err(AvatarError::InvalidColor {
            context: context.to_string(),
            value: literal.to_string(),
        });
    }
    Ok(())
}

fn check_palette(context: &str, pairs: &[(&str, &str)]) -> AvatarResult<()> {
    pairs.iter().try_for_each(|(_, v)| check_literal(context, v))
}

/// Keys may be entry palette keys, rig palette keys (`main`, `belly`) or
/// literals; only malformed literals are rejected here.
fn check_shapes(context: &str, shapes: &[Shape], palette: &Palette) -> AvatarResult<()> {
    for key in shape_keys(shapes) {
        let looks_literal = key.starts_with('#') || key.starts_with("0x");
        if looks_literal && palette.get(key).is_none() {
            check_literal(context, key)?;
        }
    }
    Ok(())
}

fn check_effects(context: &str, effects: &[EffectAttachment]) -> AvatarResult<()> {
    for effect in effects {
        for literal in effect.spec.colors() {
            check_literal(context, literal)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_validates() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_defaults() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.resolve(Category::Eyes, "doesNotExist").map(|e| e.id), Some("normal"));
        assert_eq!(catalog.resolve(Category::Mouth, "").map(|e| e.id), Some("beak"));
        assert!(catalog.resolve(Category::Hat, "none").is_none());
        assert!(catalog.resolve(Category::BodyItem, "doesNotExist").is_none());
        assert!(catalog.mount("none").is_none());
    }

    #[test]
    fn test_skin_colors() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.skin_color("blue"), Some(Rgb::new(0x1E, 0x90, 0xFF)));
        assert_eq!(catalog.skin_color("rainbow"), None);
    }

    #[test]
    fn test_declared_behaviors_present() {
        let catalog = Catalog::builtin();
        assert!(catalog.get(Category::BodyItem, "ghost_sheet").unwrap().hide_body);
        assert!(catalog.get(Category::BodyItem, "sword").unwrap().held);
        assert!(catalog.get(Category::BodyItem, "shirt").unwrap().text_decal.is_some());
        assert!(!catalog.get(Category::Hat, "propeller").unwrap().sub_parts.is_empty());
        assert!(!catalog.mount("dragon").unwrap().effects.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = unique_ids("hats", ["a", "b", "a"].into_iter()).unwrap_err();
        assert_eq!(
            err,
            AvatarError::DuplicateId {
                table: "hats",
                id: "a".to_string()
            }
        );
    }
}
