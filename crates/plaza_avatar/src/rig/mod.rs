//! Species rigs.
//!
//! A rig is one body plan: part generators, pivots, cosmetic offsets, the
//! set of cosmetic categories it accepts and its final scale. Species are a
//! closed enum and every rig is a `'static` [`RigDescriptor`], so the
//! assembler has a single code path for all of them.

mod bipeds;
mod creatures;

use std::fmt;

use tracing::warn;

use crate::catalog::Category;
use crate::math::Vec3;
use crate::voxel::{build_shapes, Shape, VoxelBounds, VoxelUnit};

/// Every supported body plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Species {
    /// Standard biped; the fallback for unknown ids.
    #[default]
    Penguin,
    /// Biped with wings and a bill.
    Duck,
    /// Quadruped with a mane.
    Horse,
    /// Quadruped with floppy ears.
    Dog,
    /// Quadruped with pointed ears.
    Cat,
    /// Heavy biped.
    Bear,
    /// Biped with tall ears.
    Bunny,
    /// Quadruped with a bushy tail.
    Fox,
    /// Swimmer; no body items.
    Shark,
    /// Crawler with a shell; no body items, fixed colors.
    Snail,
    /// Squat biped with a permanent lily-pad hat.
    Frog,
    /// Tall humanoid.
    Human,
    /// Biped colored from two free hex inputs.
    Freestyle,
}

impl Species {
    /// All species in table order.
    pub const ALL: [Self; 13] = [
        Self::Penguin,
        Self::Duck,
        Self::Horse,
        Self::Dog,
        Self::Cat,
        Self::Bear,
        Self::Bunny,
        Self::Fox,
        Self::Shark,
        Self::Snail,
        Self::Frog,
        Self::Human,
        Self::Freestyle,
    ];

    /// Descriptor id.
    #[must_use]
    pub const fn id(self) -> &'static str {
        self.rig().id
    }

    /// Parses a descriptor id. Unknown ids fall back to the penguin.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        let lowered = id.trim().to_ascii_lowercase();
        if lowered == "marcus" {
            return Self::Human;
        }
        Self::ALL
            .into_iter()
            .find(|s| s.id() == lowered)
            .unwrap_or_else(|| {
                warn!(id, "unknown species, using the standard biped");
                Self::default()
            })
    }

    /// The rig for this species.
    #[must_use]
    pub const fn rig(self) -> &'static RigDescriptor {
        match self {
            Self::Penguin => &bipeds::PENGUIN,
            Self::Duck => &bipeds::DUCK,
            Self::Bear => &bipeds::BEAR,
            Self::Bunny => &bipeds::BUNNY,
            Self::Frog => &bipeds::FROG,
            Self::Human => &bipeds::HUMAN,
            Self::Freestyle => &bipeds::FREESTYLE,
            Self::Horse => &creatures::HORSE,
            Self::Dog => &creatures::DOG,
            Self::Cat => &creatures::CAT,
            Self::Fox => &creatures::FOX,
            Self::Shark => &creatures::SHARK,
            Self::Snail => &creatures::SNAIL,
        }
    }

    /// The rig to build given whether the body item hides the body.
    #[must_use]
    pub const fn rig_for(self, hide_body: bool) -> &'static RigDescriptor {
        let rig = self.rig();
        match (hide_body, rig.hidden_variant) {
            (true, Some(hidden)) => hidden,
            _ => rig,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// How a part's pivot is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PivotRule {
    /// Fixed joint position in the rig grid.
    Fixed([f32; 3]),
    /// Top center of the part's bounds (hanging limbs).
    BoundsTop,
    /// Bottom center of the part's bounds (torsos, heads).
    BoundsBottom,
}

impl PivotRule {
    /// Resolves the pivot for `voxels`.
    #[must_use]
    pub fn resolve(self, voxels: &[VoxelUnit]) -> Vec3 {
        match self {
            Self::Fixed(p) => Vec3::from_array(p),
            Self::BoundsTop | Self::BoundsBottom => {
                let Some(bounds) = VoxelBounds::of(voxels) else {
                    return Vec3::ZERO;
                };
                let [cx, _, cz] = bounds.center();
                let y = if matches!(self, Self::BoundsTop) { bounds.max[1] } else { bounds.min[1] };
                Vec3::new(cx, y as f32, cz)
            }
        }
    }
}

/// One named part of a rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartSpec {
    /// Stable part name.
    pub name: &'static str,
    /// Geometry in the rig grid.
    pub shapes: &'static [Shape],
    /// Pivot policy.
    pub pivot: PivotRule,
}

impl PartSpec {
    /// Expands the geometry.
    #[must_use]
    pub fn voxels(&self) -> Vec<VoxelUnit> {
        build_shapes(self.shapes)
    }
}

/// Where the rig's palette comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource {
    /// `main` follows the selected skin.
    SkinTinted,
    /// The rig palette is used as is.
    Fixed,
    /// Dual-tone palette from the freestyle primary/secondary inputs.
    Freestyle,
}

/// Anchors for each cosmetic category, in the rig grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosmeticOffsets {
    /// Top center of the head.
    pub hat: [f32; 3],
    /// Eye line, front of the face.
    pub eyes: [f32; 3],
    /// Mouth, front of the face.
    pub mouth: [f32; 3],
    /// Bottom center of the body.
    pub body_item: [f32; 3],
    /// Held item grip, relative to the held limb's pivot.
    pub held: [f32; 3],
}

impl CosmeticOffsets {
    /// Anchor for `category`.
    #[must_use]
    pub const fn anchor(&self, category: Category) -> [f32; 3] {
        match category {
            Category::Hat => self.hat,
            Category::Eyes => self.eyes,
            Category::Mouth => self.mouth,
            Category::BodyItem => self.body_item,
        }
    }
}

/// Data table describing one body plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigDescriptor {
    /// Species id.
    pub id: &'static str,
    /// Parts in build order; order fixes skin phase registration.
    pub parts: &'static [PartSpec],
    /// Rig palette (`main` is overridden for skin-tinted rigs).
    pub palette: &'static [(&'static str, &'static str)],
    /// Palette policy.
    pub palette_source: PaletteSource,
    /// Cosmetic anchors.
    pub offsets: CosmeticOffsets,
    /// Accepted categories.
    pub supports: &'static [Category],
    /// Hat always worn; hat selection is ignored.
    pub baked_hat: Option<&'static str>,
    /// Part that carries held items.
    pub held_limb: Option<&'static str>,
    /// Rig used when a body item hides the body.
    pub hidden_variant: Option<&'static RigDescriptor>,
    /// Final uniform scale.
    pub scale: f32,
    /// Final vertical lift in voxel units.
    pub lift: f32,
}

impl RigDescriptor {
    /// Whether `category` may be attached.
    #[must_use]
    pub fn supports(&self, category: Category) -> bool {
        self.supports.contains(&category)
    }

    /// Part spec by name.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&PartSpec> {
        self.parts.iter().find(|p| p.name == name)
    }
}

/// Every category.
pub(crate) const ALL_CATEGORIES: &[Category] = &[Category::Hat, Category::Eyes, Category::Mouth, Category::BodyItem];

/// Everything except body items.
pub(crate) const NO_BODY_ITEMS: &[Category] = &[Category::Hat, Category::Eyes, Category::Mouth];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rig_has_head_and_body() {
        for species in Species::ALL {
            for hide in [false, true] {
                let rig = species.rig_for(hide);
                assert_eq!(rig.parts.iter().filter(|p| p.name == "head").count(), 1, "{species}");
                let bodies = rig.parts.iter().filter(|p| p.name == "body" || p.name == "body_hidden").count();
                assert_eq!(bodies, 1, "{species}");
            }
        }
    }

    #[test]
    fn test_part_names_unique() {
        for species in Species::ALL {
            let rig = species.rig();
            let mut names: Vec<_> = rig.parts.iter().map(|p| p.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), rig.parts.len(), "{species}");
        }
    }

    #[test]
    fn test_species_ids_roundtrip() {
        for species in Species::ALL {
            assert_eq!(Species::from_id(species.id()), species);
        }
        assert_eq!(Species::from_id("Marcus"), Species::Human);
        assert_eq!(Species::from_id("dragonfly"), Species::Penguin);
    }

    #[test]
    fn test_category_rules() {
        assert!(!Species::Shark.rig().supports(Category::BodyItem));
        assert!(!Species::Snail.rig().supports(Category::BodyItem));
        assert_eq!(Species::Frog.rig().baked_hat, Some("lilypad_hat"));
        assert_eq!(Species::Freestyle.rig().palette_source, PaletteSource::Freestyle);
        assert!(Species::Penguin.rig().hidden_variant.is_some());
    }

    #[test]
    fn test_held_limb_exists() {
        for species in Species::ALL {
            let rig = species.rig();
            if let Some(limb) = rig.held_limb {
                assert!(rig.part(limb).is_some(), "{species}");
            }
        }
    }

    #[test]
    fn test_bounds_pivots() {
        let voxels = [VoxelUnit::new(-1, 2, 0, "main"), VoxelUnit::new(1, 6, 0, "main")];
        assert_eq!(PivotRule::BoundsTop.resolve(&voxels), Vec3::new(0.0, 6.0, 0.0));
        assert_eq!(PivotRule::BoundsBottom.resolve(&voxels), Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(PivotRule::BoundsTop.resolve(&[]), Vec3::ZERO);
    }
}
