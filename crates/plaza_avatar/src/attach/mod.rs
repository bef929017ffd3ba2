//! Cosmetic and mount attachment.
//!
//! Attachment turns catalog entries into scene nodes: the entry's voxels go
//! through the compositor, then articulated sub-parts, particle fields,
//! lights and decals are hung beneath. Every animatable node is reported as
//! an [`EffectHandle`] on the build context.

mod cosmetics;
mod mount;

pub use cosmetics::attach_cosmetic;
pub use mount::{attach_mount, MOUNT_HULL};

use ab_glyph::FontArc;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{EffectAttachment, LightSpec, SubPart};
use crate::color::Rgb;
use crate::compositor::{build_part, place_part, CompositorSettings};
use crate::effects::EffectHandle;
use crate::material::MaterialCache;
use crate::math::{Transform, Vec3};
use crate::scene::{NodeId, NodeKind, PointLight, SceneGraph};
use crate::voxel::{build_shapes, Palette};

/// Mutable state threaded through one character build.
pub struct BuildContext<'a> {
    /// Scene under construction.
    pub graph: &'a mut SceneGraph,
    /// Shared material cache.
    pub materials: &'a mut MaterialCache,
    /// Seeded source for particle layouts.
    pub rng: &'a mut ChaCha8Rng,
    /// Handles collected so far.
    pub effects: &'a mut Vec<EffectHandle>,
    /// Compositor parameters.
    pub settings: CompositorSettings,
    /// Texture pixels per font pixel.
    pub decal_pixel_scale: u32,
    /// Font for text decals; `None` leaves them blank.
    pub decal_font: Option<&'a FontArc>,
}

impl BuildContext<'_> {
    /// World size of one voxel.
    #[inline]
    #[must_use]
    pub fn voxel_size(&self) -> f32 {
        self.settings.voxel_size
    }

    /// Translation for an offset in voxel units.
    #[must_use]
    pub fn at(&self, offset: [f32; 3]) -> Transform {
        Transform::from_translation(Vec3::from_array(offset) * self.voxel_size())
    }

    /// Builds articulated pieces under `parent` and registers their motion.
    pub fn add_sub_parts(&mut self, parent: NodeId, sub_parts: &[SubPart], palette: &Palette) {
        let size = self.voxel_size();
        for sub in sub_parts {
            let voxels = build_shapes(sub.shapes);
            let part = build_part(
                sub.name,
                &voxels,
                palette,
                Some(Vec3::from_array(sub.pivot)),
                &mut *self.materials,
                None,
                &self.settings,
            );
            let node = place_part(&mut *self.graph, parent, part, Vec3::ZERO, size);
            if let Some(motion) = sub.motion {
                self.graph.set_motion(node, motion);
                self.effects.push(EffectHandle {
                    node,
                    kind: motion.kind(),
                });
            }
        }
    }

    /// Instantiates particle fields under `parent`.
    pub fn add_effects(&mut self, parent: NodeId, effects: &[EffectAttachment]) {
        for attachment in effects {
            let field = attachment.spec.instantiate(&mut *self.rng, self.settings.fallback);
            let kind = field.kind();
            let transform = self.at(attachment.offset);
            let node = self.graph.add(Some(parent), "effect", transform, NodeKind::Effect(field));
            self.effects.push(EffectHandle { node, kind });
        }
    }

    /// Adds a point light under `parent`.
    pub fn add_light(&mut self, parent: NodeId, light: &LightSpec) -> NodeId {
        let transform = self.at(light.offset);
        let color = Rgb::parse_hex(light.color).unwrap_or(self.settings.fallback);
        self.graph.add(
            Some(parent),
            "light",
            transform,
            NodeKind::Light(PointLight {
                color,
                intensity: light.intensity,
                range: light.range,
            }),
        )
    }
}
