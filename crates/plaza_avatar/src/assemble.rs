//! Species assembly.
//!
//! [`Assembler::build`] is the one entry point that turns a
//! [`CharacterDescriptor`] into an [`AssembledCharacter`]. Builds are
//! synchronous, never fail and are idempotent: the same descriptor and the
//! same config always yield the same tree.
//!
//! Resulting hierarchy:
//!
//! ```text
//! character            (wrapper)
//! ├── species          (rig scale + lift)
//! │   ├── body, head, limbs ...
//! │   │   └── held item (under the held limb)
//! │   └── hat, eyes, mouth, body_item
//! └── mount            (optional sibling)
//! ```

use ab_glyph::FontArc;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::attach::{attach_cosmetic, attach_mount, BuildContext};
use crate::catalog::{Catalog, Category, CosmeticEntry, EffectAttachment, DEFAULT_SKIN, NONE_ID};
use crate::compositor::{build_part, place_part, CompositorSettings};
use crate::config::EngineConfig;
use crate::decal::load_decal_font;
use crate::effects::{EffectHandle, EffectKind, EffectSpec};
use crate::error::AvatarResult;
use crate::material::{MaterialCache, SharedMaterialCache};
use crate::math::{Transform, Vec3};
use crate::rig::{PaletteSource, RigDescriptor, Species};
use crate::scene::{NodeId, NodeKind, PartGroup, SceneGraph};
use crate::skin::{SkinRegistry, SkinTrack};
use crate::voxel::{Palette, VoxelBounds};

/// Name of the wrapper node.
pub const WRAPPER_NODE: &str = "character";
/// Name of the species root node.
pub const SPECIES_NODE: &str = "species";

const STAR_COLORS: &[&str] = &["#FFFFFF", "#FFF9C4", "#B3E5FC"];
const STAR_COUNT: u32 = 24;
const STAR_SPEED: f32 = 2.5;

// =============================================================================
// DESCRIPTOR
// =============================================================================

/// Flat customization record for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterDescriptor {
    /// Species id.
    pub species: String,
    /// Plain skin color id or animated skin id.
    pub skin: String,
    /// Hat id, `"none"` for no hat.
    pub hat: String,
    /// Eyes id.
    pub eyes: String,
    /// Mouth id.
    pub mouth: String,
    /// Body item id, `"none"` for nothing.
    pub body_item: String,
    /// Mount id, `"none"` to stand.
    pub mount: String,
    /// Freestyle primary color.
    pub primary: Option<String>,
    /// Freestyle secondary color.
    pub secondary: Option<String>,
}

impl Default for CharacterDescriptor {
    fn default() -> Self {
        Self {
            species: Species::Penguin.id().to_string(),
            skin: DEFAULT_SKIN.to_string(),
            hat: NONE_ID.to_string(),
            eyes: "normal".to_string(),
            mouth: "beak".to_string(),
            body_item: NONE_ID.to_string(),
            mount: NONE_ID.to_string(),
            primary: None,
            secondary: None,
        }
    }
}

impl CharacterDescriptor {
    /// Selected id for a cosmetic category.
    #[must_use]
    pub fn selection(&self, category: Category) -> &str {
        match category {
            Category::Hat => &self.hat,
            Category::Eyes => &self.eyes,
            Category::Mouth => &self.mouth,
            Category::BodyItem => &self.body_item,
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

/// Draw-call accounting for one character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Part groups.
    pub parts: usize,
    /// Instanced batches (one draw call each).
    pub batches: usize,
    /// Voxel instances.
    pub instances: usize,
    /// Particle fields.
    pub fields: usize,
    /// Particles across all fields.
    pub particles: usize,
    /// Text decals.
    pub decals: usize,
    /// Point lights.
    pub lights: usize,
}

/// A fully built character.
#[derive(Debug, Clone)]
pub struct AssembledCharacter {
    /// Scene arena.
    pub scene: SceneGraph,
    /// Top-level node.
    pub wrapper: NodeId,
    /// Species root under the wrapper.
    pub species_root: NodeId,
    /// Mount root, a sibling of the species root.
    pub mount_root: Option<NodeId>,
    /// Species actually built.
    pub species: Species,
    /// Animated skin materials, if the skin is animated.
    pub skin: Option<SkinTrack>,
    /// Every animatable node.
    pub effects: Vec<EffectHandle>,
    /// Seed for per-frame respawns.
    pub effect_seed: u64,
    /// Emissive wobble amplitude for the skin driver.
    pub emissive_wobble: f32,
}

impl AssembledCharacter {
    /// Node of the first part named `name`.
    #[must_use]
    pub fn part_node(&self, name: &str) -> Option<NodeId> {
        self.scene
            .parts_under(self.wrapper)
            .find(|(_, part)| part.name == name)
            .map(|(id, _)| id)
    }

    /// First part named `name`.
    #[must_use]
    pub fn part(&self, name: &str) -> Option<&PartGroup> {
        self.scene
            .parts_under(self.wrapper)
            .find(|(_, part)| part.name == name)
            .map(|(_, part)| part)
    }

    /// Names of every part, depth first.
    #[must_use]
    pub fn part_names(&self) -> Vec<&str> {
        self.scene
            .parts_under(self.wrapper)
            .map(|(_, part)| part.name.as_str())
            .collect()
    }

    /// Handles of one kind.
    pub fn effects_of(&self, kind: EffectKind) -> impl Iterator<Item = &EffectHandle> + '_ {
        self.effects.iter().filter(move |h| h.kind == kind)
    }

    /// Counts what a renderer would draw.
    #[must_use]
    pub fn draw_stats(&self) -> DrawStats {
        let mut stats = DrawStats::default();
        for id in self.scene.descendants(self.wrapper) {
            let Some(node) = self.scene.node(id) else { continue };
            match &node.kind {
                NodeKind::Group => {}
                NodeKind::Part(part) => {
                    stats.parts += 1;
                    stats.batches += part.batches.len();
                    stats.instances += part.instance_count();
                }
                NodeKind::Decal(_) => stats.decals += 1,
                NodeKind::Effect(field) => {
                    stats.fields += 1;
                    stats.particles += field.len();
                }
                NodeKind::Light(_) => stats.lights += 1,
            }
        }
        stats
    }
}

// =============================================================================
// ASSEMBLER
// =============================================================================

/// Builds characters from descriptors.
#[derive(Debug, Clone)]
pub struct Assembler {
    config: EngineConfig,
    catalog: Catalog,
    skins: SkinRegistry,
    decal_font: Option<FontArc>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Assembler {
    /// Creates an assembler over explicit tables and loads the decal font.
    #[must_use]
    pub fn new(config: EngineConfig, catalog: Catalog, skins: SkinRegistry) -> Self {
        let decal_font = load_decal_font(config.decal_font_path.as_deref());
        Self {
            config,
            catalog,
            skins,
            decal_font,
        }
    }

    /// Replaces the decal font, e.g. with one embedded by the host.
    #[must_use]
    pub fn with_decal_font(mut self, font: FontArc) -> Self {
        self.decal_font = Some(font);
        self
    }

    /// Font used for text decals, if any was found.
    #[must_use]
    pub fn decal_font(&self) -> Option<&FontArc> {
        self.decal_font.as_ref()
    }

    /// Shipped catalog and skins under `config`.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(config, Catalog::builtin(), SkinRegistry::builtin())
    }

    /// Startup check over config, catalog and skins.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> AvatarResult<()> {
        self.config.validate()?;
        self.catalog.validate()?;
        self.skins.validate()
    }

    /// Engine config.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cosmetic catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Animated skins.
    #[must_use]
    pub fn skins(&self) -> &SkinRegistry {
        &self.skins
    }

    /// Builds against a session-wide shared cache.
    #[must_use]
    pub fn build_shared(&self, descriptor: &CharacterDescriptor, materials: &SharedMaterialCache) -> AssembledCharacter {
        materials.with(|cache| self.build(descriptor, cache))
    }

    /// Builds one character. Unknown ids and bad colors degrade to defaults.
    #[must_use]
    pub fn build(&self, descriptor: &CharacterDescriptor, materials: &mut MaterialCache) -> AssembledCharacter {
        let species = Species::from_id(&descriptor.species);
        let base_rig = species.rig();

        let body_item = if base_rig.supports(Category::BodyItem) {
            self.catalog.resolve(Category::BodyItem, &descriptor.body_item)
        } else {
            if descriptor.body_item != NONE_ID && !descriptor.body_item.is_empty() {
                debug!(%species, item = %descriptor.body_item, "species takes no body items");
            }
            None
        };
        let rig = species.rig_for(body_item.is_some_and(|e| e.hide_body));

        let (palette, mut skin) = self.rig_palette(rig, descriptor);
        debug!(%species, rig = rig.id, skin = %descriptor.skin, animated = skin.is_some(), "assembling character");

        let settings = CompositorSettings {
            voxel_size: self.config.voxel_size,
            fallback: self.config.fallback_color(),
        };
        let mut graph = SceneGraph::new();
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.effect_seed);
        let mut effects = Vec::new();

        let wrapper = graph.add_group(None, WRAPPER_NODE, Transform::IDENTITY);
        let species_transform =
            Transform::from_translation(Vec3::new(0.0, rig.lift * settings.voxel_size, 0.0)).with_uniform_scale(rig.scale);
        let species_root = graph.add_group(Some(wrapper), SPECIES_NODE, species_transform);

        let mut ctx = BuildContext {
            graph: &mut graph,
            materials,
            rng: &mut rng,
            effects: &mut effects,
            settings,
            decal_pixel_scale: self.config.decal_pixel_scale,
            decal_font: self.decal_font.as_ref(),
        };

        // Rig parts in table order; the order fixes skin phase registration.
        let mut body_node = None;
        for spec in rig.parts {
            let voxels = spec.voxels();
            let pivot = spec.pivot.resolve(&voxels);
            let part = build_part(
                spec.name,
                &voxels,
                &palette,
                Some(pivot),
                &mut *ctx.materials,
                skin.as_mut(),
                &ctx.settings,
            );
            let node = place_part(&mut *ctx.graph, species_root, part, Vec3::ZERO, settings.voxel_size);
            if spec.name == "body" || spec.name == "body_hidden" {
                body_node = Some((node, pivot, VoxelBounds::of(&voxels)));
            }
        }

        if let (Some(track), Some((node, pivot, Some(bounds)))) = (&skin, body_node) {
            if track.config().has_stars {
                let stars = [star_field(bounds, pivot, settings.voxel_size)];
                ctx.add_effects(node, &stars);
            }
        }

        for category in Category::ALL {
            let entry = match category {
                Category::BodyItem => body_item,
                Category::Hat => self.hat_for(rig, descriptor),
                _ => self.catalog.resolve(category, descriptor.selection(category)),
            };
            let Some(entry) = entry else { continue };
            if !rig.supports(category) && rig.baked_hat != Some(entry.id) {
                continue;
            }
            self.attach_entry(&mut ctx, rig, species_root, category, entry, &palette);
        }

        let mount_root = self
            .catalog
            .mount(&descriptor.mount)
            .map(|entry| attach_mount(&mut ctx, wrapper, entry));

        debug!(%species, effects = effects.len(), nodes = graph.len(), "character assembled");

        AssembledCharacter {
            scene: graph,
            wrapper,
            species_root,
            mount_root,
            species,
            skin,
            effects,
            effect_seed: self.config.effect_seed,
            emissive_wobble: self.config.emissive_wobble,
        }
    }

    /// Resolves the rig palette and, for animated skins, the skin track.
    fn rig_palette(&self, rig: &RigDescriptor, descriptor: &CharacterDescriptor) -> (Palette, Option<SkinTrack>) {
        let base = Palette::from_pairs(rig.palette);
        match rig.palette_source {
            PaletteSource::Fixed => (base, None),
            PaletteSource::Freestyle => {
                let tones = Palette::freestyle(descriptor.primary.as_deref(), descriptor.secondary.as_deref());
                (base.merged(&tones), None)
            }
            PaletteSource::SkinTinted => {
                let mut palette = base;
                if let Some(config) = self.skins.get(&descriptor.skin) {
                    palette.set("main", &config.base_color().to_hex());
                    let track = SkinTrack::new(config.clone(), self.config.default_phase_multiplier);
                    return (palette, Some(track));
                }
                let color = self.catalog.skin_color(&descriptor.skin).unwrap_or_else(|| {
                    warn!(skin = %descriptor.skin, "unknown skin, using the default color");
                    self.catalog.skin_color(DEFAULT_SKIN).unwrap_or(self.config.fallback_color())
                });
                palette.set("main", &color.to_hex());
                (palette, None)
            }
        }
    }

    /// Baked hats replace the selection.
    fn hat_for(&self, rig: &RigDescriptor, descriptor: &CharacterDescriptor) -> Option<&'static CosmeticEntry> {
        match rig.baked_hat {
            Some(id) => self.catalog.get(Category::Hat, id),
            None => self.catalog.resolve(Category::Hat, &descriptor.hat),
        }
    }

    fn attach_entry(
        &self,
        ctx: &mut BuildContext<'_>,
        rig: &RigDescriptor,
        species_root: NodeId,
        category: Category,
        entry: &CosmeticEntry,
        palette: &Palette,
    ) {
        let limb = rig
            .held_limb
            .filter(|_| entry.held)
            .and_then(|name| ctx.graph.find_named(species_root, name));
        match limb {
            Some(limb) => {
                attach_cosmetic(ctx, limb, category, entry, rig.offsets.held, palette);
            }
            None => {
                attach_cosmetic(ctx, species_root, category, entry, rig.offsets.anchor(category), palette);
            }
        }
    }
}

/// Star field filling the body's bounds, centered on the body.
fn star_field(bounds: VoxelBounds, pivot: Vec3, voxel_size: f32) -> EffectAttachment {
    let [cx, cy, cz] = bounds.center();
    let half = |axis: usize| (bounds.max[axis] - bounds.min[axis] + 1) as f32 * 0.5 * voxel_size;
    EffectAttachment {
        spec: EffectSpec::Twinkle {
            count: STAR_COUNT,
            extent: [half(0), half(1), half(2)],
            speed: STAR_SPEED,
            colors: STAR_COLORS,
        },
        offset: [cx - pivot.x, cy - pivot.y, cz - pivot.z],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(descriptor: &CharacterDescriptor) -> AssembledCharacter {
        Assembler::default().build(descriptor, &mut MaterialCache::new())
    }

    #[test]
    fn test_default_descriptor_is_plain_penguin() {
        let character = build(&CharacterDescriptor::default());
        assert_eq!(character.species, Species::Penguin);
        assert!(character.skin.is_none());
        assert!(character.mount_root.is_none());
        assert_eq!(character.scene.node(character.wrapper).unwrap().name, WRAPPER_NODE);
    }

    #[test]
    fn test_skin_colors_main_key() {
        let descriptor = CharacterDescriptor {
            skin: "red".to_string(),
            ..CharacterDescriptor::default()
        };
        let character = build(&descriptor);
        let body = character.part("body").unwrap();
        assert!(body.colors().contains(&crate::color::Rgb::new(0xE5, 0x39, 0x35)));
    }

    #[test]
    fn test_unknown_skin_uses_default_color() {
        let descriptor = CharacterDescriptor {
            skin: "plaid".to_string(),
            ..CharacterDescriptor::default()
        };
        let character = build(&descriptor);
        let body = character.part("body").unwrap();
        assert!(body.colors().contains(&crate::color::Rgb::new(0x1E, 0x90, 0xFF)));
    }

    #[test]
    fn test_galaxy_adds_stars_to_body() {
        let descriptor = CharacterDescriptor {
            skin: "galaxy".to_string(),
            ..CharacterDescriptor::default()
        };
        let character = build(&descriptor);
        let twinkles: Vec<_> = character.effects_of(EffectKind::Twinkle).collect();
        assert_eq!(twinkles.len(), 1);
        let parent = character.scene.node(twinkles[0].node).unwrap().parent.unwrap();
        assert_eq!(character.scene.node(parent).unwrap().name, "body");
    }

    #[test]
    fn test_held_item_parented_to_limb() {
        let descriptor = CharacterDescriptor {
            body_item: "sword".to_string(),
            ..CharacterDescriptor::default()
        };
        let character = build(&descriptor);
        let item = character.part_node("body_item").unwrap();
        let parent = character.scene.node(item).unwrap().parent.unwrap();
        assert_eq!(character.scene.node(parent).unwrap().name, "flipper_r");
    }

    #[test]
    fn test_lift_and_scale_on_species_root() {
        let descriptor = CharacterDescriptor {
            species: "shark".to_string(),
            ..CharacterDescriptor::default()
        };
        let character = build(&descriptor);
        let root = character.scene.node(character.species_root).unwrap();
        let rig = Species::Shark.rig();
        assert!((root.transform.translation.y - rig.lift * 0.1).abs() < 1e-6);
        assert!((root.transform.scale.x - rig.scale).abs() < 1e-6);
    }

    #[test]
    fn test_draw_stats_count_batches() {
        let character = build(&CharacterDescriptor::default());
        let stats = character.draw_stats();
        assert_eq!(stats.parts, 8);
        assert!(stats.batches >= stats.parts);
        assert!(stats.instances > stats.batches);
        assert_eq!(stats.fields, 0);
    }

    #[test]
    fn test_descriptor_toml() {
        let descriptor: CharacterDescriptor = toml::from_str("species = \"duck\"\nhat = \"crown\"").unwrap();
        assert_eq!(descriptor.species, "duck");
        assert_eq!(descriptor.eyes, "normal");
        assert_eq!(descriptor.selection(Category::Hat), "crown");
    }
}
