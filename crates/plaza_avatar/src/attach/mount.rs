//! Mount attachment.

use tracing::debug;

use super::BuildContext;
use crate::catalog::MountEntry;
use crate::compositor::{build_part, place_part};
use crate::math::Vec3;
use crate::scene::NodeId;
use crate::voxel::build_shapes;

/// Part name of a mount's hull.
pub const MOUNT_HULL: &str = "mount_hull";

/// Builds `entry` as a `mount` group under `wrapper`.
///
/// The mount is a sibling of the species root; nothing under the species
/// root is touched.
pub fn attach_mount(ctx: &mut BuildContext<'_>, wrapper: NodeId, entry: &MountEntry) -> NodeId {
    let transform = ctx.at(entry.offset).with_uniform_scale(entry.scale);
    let root = ctx.graph.add_group(Some(wrapper), "mount", transform);
    let palette = entry.palette();

    let hull = build_part(
        MOUNT_HULL,
        &build_shapes(entry.hull),
        &palette,
        None,
        &mut *ctx.materials,
        None,
        &ctx.settings,
    );
    let size = ctx.voxel_size();
    place_part(&mut *ctx.graph, root, hull, Vec3::ZERO, size);

    let before = ctx.effects.len();
    ctx.add_sub_parts(root, entry.sub_parts, &palette);
    ctx.add_effects(root, entry.effects);
    if let Some(light) = &entry.light {
        ctx.add_light(root, light);
    }

    debug!(mount = entry.id, effects = ctx.effects.len() - before, "attached mount");
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::color::NEUTRAL_GRAY;
    use crate::compositor::CompositorSettings;
    use crate::effects::{EffectHandle, EffectKind};
    use crate::material::MaterialCache;
    use crate::math::Transform;
    use crate::scene::SceneGraph;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn attach(id: &str) -> (SceneGraph, NodeId, Vec<EffectHandle>) {
        let mut graph = SceneGraph::new();
        let mut materials = MaterialCache::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut effects = Vec::new();
        let wrapper = graph.add_group(None, "character", Transform::IDENTITY);
        let entry = Catalog::builtin().mount(id).unwrap();
        let node = {
            let mut ctx = BuildContext {
                graph: &mut graph,
                materials: &mut materials,
                rng: &mut rng,
                effects: &mut effects,
                settings: CompositorSettings {
                    voxel_size: 0.1,
                    fallback: NEUTRAL_GRAY,
                },
                decal_pixel_scale: 2,
                decal_font: None,
            };
            attach_mount(&mut ctx, wrapper, entry)
        };
        (graph, node, effects)
    }

    #[test]
    fn test_skateboard_wheels_spin_trucks_static() {
        let (graph, root, effects) = attach("skateboard");
        assert_eq!(effects.iter().filter(|h| h.kind == EffectKind::Spinner).count(), 4);
        let truck = graph.find_named(root, "truck_front").unwrap();
        assert!(graph.node(truck).unwrap().motion.is_none());
        assert!(graph.find_named(root, MOUNT_HULL).is_some());
    }

    #[test]
    fn test_boat_oars_flap_in_opposition() {
        let (graph, _, effects) = attach("boat");
        let flappers: Vec<_> = effects.iter().filter(|h| h.kind == EffectKind::Flapper).collect();
        assert_eq!(flappers.len(), 2);
        let names: Vec<_> = flappers.iter().map(|h| graph.node(h.node).unwrap().name.as_str()).collect();
        assert_eq!(names, ["oar_l", "oar_r"]);
    }

    #[test]
    fn test_dragon_scaled_with_trail() {
        let (graph, root, effects) = attach("dragon");
        let node = graph.node(root).unwrap();
        assert_eq!(node.name, "mount");
        assert!((node.transform.scale.x - 1.2).abs() < 1e-6);
        assert_eq!(effects.iter().filter(|h| h.kind == EffectKind::Trail).count(), 1);
    }
}
