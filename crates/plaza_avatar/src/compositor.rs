//! Part compositor.
//!
//! Turns one voxel list into a color-batched [`PartGroup`]: voxels are
//! bucketed by resolved literal color (bucket order = first appearance), and
//! each bucket becomes one instanced batch. This is what keeps the draw-call
//! count proportional to the number of distinct colors instead of voxels.

use tracing::trace;

use crate::color::Rgb;
use crate::material::{MaterialCache, MaterialRef};
use crate::math::{Transform, Vec3};
use crate::scene::{ColorBatch, InstanceData, NodeId, NodeKind, PartGroup, SceneGraph};
use crate::skin::SkinTrack;
use crate::voxel::{Palette, VoxelUnit};

/// Per-session compositor parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositorSettings {
    /// World edge length of one voxel.
    pub voxel_size: f32,
    /// Color for unresolvable keys.
    pub fallback: Rgb,
}

/// Builds a color-batched part.
///
/// Instance positions are `(voxel − pivot) × voxel_size`. When `skin` is
/// given, every bucket whose color equals the skin's target gets a fresh
/// unique material registered on the track; all other buckets share a
/// color-keyed material from `materials`.
pub fn build_part(
    name: &str,
    voxels: &[VoxelUnit],
    palette: &Palette,
    pivot: Option<Vec3>,
    materials: &mut MaterialCache,
    mut skin: Option<&mut SkinTrack>,
    settings: &CompositorSettings,
) -> PartGroup {
    let pivot = pivot.unwrap_or(Vec3::ZERO);
    let size = settings.voxel_size;

    let mut buckets: Vec<(Rgb, Vec<InstanceData>)> = Vec::new();
    for v in voxels {
        let color = palette.resolve(v.color_key, settings.fallback);
        let position = [
            (v.x as f32 - pivot.x) * size,
            (v.y as f32 - pivot.y) * size,
            (v.z as f32 - pivot.z) * size,
        ];
        let instance = InstanceData::new(position, size, v.vertical_scale.unwrap_or(1.0));
        match buckets.iter_mut().find(|(c, _)| *c == color) {
            Some((_, list)) => list.push(instance),
            None => buckets.push((color, vec![instance])),
        }
    }

    let batches: Vec<ColorBatch> = buckets
        .into_iter()
        .map(|(color, instances)| {
            let material = match skin.as_deref_mut() {
                Some(track) if track.target() == color => MaterialRef::Unique(track.register()),
                _ => MaterialRef::Shared(materials.get_or_insert(color)),
            };
            ColorBatch {
                color,
                material,
                instances,
            }
        })
        .collect();

    trace!(part = name, batches = batches.len(), voxels = voxels.len(), "built part");

    PartGroup {
        name: name.to_string(),
        pivot,
        batches,
    }
}

/// Adds `part` under `parent`, placed at its pivot plus `offset` (voxel units).
pub fn place_part(
    graph: &mut SceneGraph,
    parent: NodeId,
    part: PartGroup,
    offset: Vec3,
    voxel_size: f32,
) -> NodeId {
    let name = part.name.clone();
    let translation = (part.pivot + offset) * voxel_size;
    graph.add(Some(parent), &name, Transform::from_translation(translation), NodeKind::Part(part))
}
