//! Hat, eyes, mouth and body item attachment.

use tracing::debug;

use super::BuildContext;
use crate::catalog::{Category, CosmeticEntry};
use crate::color::Rgb;
use crate::compositor::{build_part, place_part};
use crate::decal::rasterize;
use crate::math::Vec3;
use crate::scene::{NodeId, NodeKind};
use crate::voxel::{build_shapes, Palette};

/// Attaches one cosmetic under `parent` at `anchor` (voxel units in the
/// parent's grid). Returns the cosmetic's root node.
///
/// Entry colors layer over `base_palette`, so a cosmetic may use rig keys
/// such as `main`.
pub fn attach_cosmetic(
    ctx: &mut BuildContext<'_>,
    parent: NodeId,
    category: Category,
    entry: &CosmeticEntry,
    anchor: [f32; 3],
    base_palette: &Palette,
) -> NodeId {
    let palette = base_palette.merged(&entry.palette());
    let name = category.part_name();

    let voxels = build_shapes(entry.shapes);
    let root = if voxels.is_empty() {
        let transform = ctx.at(anchor);
        ctx.graph.add_group(Some(parent), name, transform)
    } else {
        let part = build_part(name, &voxels, &palette, None, &mut *ctx.materials, None, &ctx.settings);
        let size = ctx.voxel_size();
        place_part(&mut *ctx.graph, parent, part, Vec3::from_array(anchor), size)
    };

    ctx.add_sub_parts(root, entry.sub_parts, &palette);
    ctx.add_effects(root, entry.effects);
    if let Some(light) = &entry.light {
        ctx.add_light(root, light);
    }
    if let Some(spec) = &entry.text_decal {
        let ink = Rgb::parse_hex(spec.color).unwrap_or(ctx.settings.fallback);
        let background = spec.background.and_then(Rgb::parse_hex);
        let decal = rasterize(
            spec.text,
            ctx.decal_font,
            ink,
            background,
            ctx.decal_pixel_scale,
            spec.width * ctx.voxel_size(),
        );
        let transform = ctx.at(spec.offset);
        ctx.graph.add(Some(root), "decal", transform, NodeKind::Decal(decal));
    }

    debug!(?category, id = entry.id, "attached cosmetic");
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

    use crate::decal::load_decal_font;

    fn attach(category: Category, id: &str) -> (SceneGraph, NodeId, Vec<EffectHandle>) {
        let mut graph = SceneGraph::new();
        let mut materials = MaterialCache::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut effects = Vec::new();
        let font = load_decal_font(None);
        let root = graph.add_group(None, "root", Transform::IDENTITY);
        let entry = Catalog::builtin().get(category, id).unwrap();
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
                decal_font: font.as_ref(),
            };
            attach_cosmetic(&mut ctx, root, category, entry, [0.0, 10.0, 0.0], &Palette::new())
        };
        (graph, node, effects)
    }

    #[test]
    fn test_plain_cosmetic_has_no_effects() {
        let (graph, node, effects) = attach(Category::Eyes, "normal");
        assert!(effects.is_empty());
        assert_eq!(graph.node(node).unwrap().name, "eyes");
        assert!((graph.node(node).unwrap().transform.translation.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_propeller_registers_spinner() {
        let (graph, _, effects) = attach(Category::Hat, "propeller");
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].kind, EffectKind::Spinner);
        assert_eq!(graph.node(effects[0].node).unwrap().name, "propeller");
    }

    #[test]
    fn test_fire_crown_has_stream_and_light() {
        let (graph, node, effects) = attach(Category::Hat, "fire_crown");
        assert_eq!(effects.iter().filter(|h| h.kind == EffectKind::Stream).count(), 1);
        let has_light = graph
            .descendants(node)
            .into_iter()
            .any(|id| matches!(graph.node(id).unwrap().kind, NodeKind::Light(_)));
        assert!(has_light);
    }

    #[test]
    fn test_shirt_carries_decal() {
        let (graph, node, _) = attach(Category::BodyItem, "shirt");
        let decal = graph.descendants(node).into_iter().find_map(|id| match &graph.node(id)?.kind {
            NodeKind::Decal(d) => Some(d.clone()),
            _ => None,
        });
        let decal = decal.unwrap();
        assert_eq!(decal.text, "PLAZA");
        assert!(decal.double_sided);
        // white ink on a transparent background
        assert!(decal.rgba.chunks_exact(4).any(|px| px == [0xFF, 0xFF, 0xFF, 0xFF]));
    }

    #[test]
    fn test_geometry_free_entry_gets_group() {
        let (graph, node, effects) = attach(Category::BodyItem, "lightning");
        assert!(matches!(graph.node(node).unwrap().kind, NodeKind::Group));
        assert!(effects.iter().any(|h| h.kind == EffectKind::Burst));
        assert!(effects.iter().any(|h| h.kind == EffectKind::Flapper));
    }
}
