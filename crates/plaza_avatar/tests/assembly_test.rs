//! # Assembly Integration Tests
//!
//! End-to-end builds through the public API: part sets, skins, mounts,
//! per-species category rules and idempotence.

use std::collections::BTreeSet;

use plaza_avatar::effects::EffectKind;
use plaza_avatar::scene::NodeKind;
use plaza_avatar::{
    load_decal_font, rasterize, Assembler, AssembledCharacter, Catalog, Category, CharacterDescriptor, MaterialCache,
    MaterialRef, Rgb, SharedMaterialCache, Species,
};

fn build(descriptor: &CharacterDescriptor) -> AssembledCharacter {
    Assembler::default().build(descriptor, &mut MaterialCache::new())
}

fn with(species: &str) -> CharacterDescriptor {
    CharacterDescriptor {
        species: species.to_string(),
        ..CharacterDescriptor::default()
    }
}

/// Penguin / blue / no hat / normal eyes / beak / nothing / no mount.
#[test]
fn test_plain_penguin_end_to_end() {
    let character = build(&CharacterDescriptor::default());

    let names: BTreeSet<&str> = character.part_names().into_iter().collect();
    let expected: BTreeSet<&str> = ["body", "head", "flipper_l", "flipper_r", "foot_l", "foot_r", "eyes", "mouth"]
        .into_iter()
        .collect();
    assert_eq!(names, expected);
    assert!(character.effects.is_empty());
    assert!(character.skin.is_none());
}

#[test]
fn test_rainbow_skin_tracks_materials_without_phase() {
    let descriptor = CharacterDescriptor {
        skin: "rainbow".to_string(),
        ..CharacterDescriptor::default()
    };
    let character = build(&descriptor);
    let skin = character.skin.as_ref().expect("rainbow is animated");

    assert!(!skin.materials().is_empty());
    assert!(skin.materials().iter().all(|m| m.phase == 0.0));

    let body = character.part("body").unwrap();
    assert!(body.batches.iter().any(|b| matches!(b.material, MaterialRef::Unique(_))));
}

#[test]
fn test_lava_skin_phases_step_by_multiplier() {
    let descriptor = CharacterDescriptor {
        skin: "lava".to_string(),
        ..CharacterDescriptor::default()
    };
    let character = build(&descriptor);
    let skin = character.skin.as_ref().unwrap();
    for (i, tracked) in skin.materials().iter().enumerate() {
        assert!((tracked.phase - i as f32 * 1.2).abs() < 1e-5);
    }
}

#[test]
fn test_mount_does_not_change_species_root() {
    for mount in Catalog::builtin().mount_ids() {
        let on_foot = build(&CharacterDescriptor::default());
        let riding = build(&CharacterDescriptor {
            mount: mount.to_string(),
            ..CharacterDescriptor::default()
        });

        assert!(riding.mount_root.is_some(), "{mount}");
        let mount_parent = riding.scene.node(riding.mount_root.unwrap()).unwrap().parent;
        assert_eq!(mount_parent, Some(riding.wrapper), "{mount}");
        assert_eq!(
            on_foot.scene.summarize(on_foot.species_root),
            riding.scene.summarize(riding.species_root),
            "{mount}"
        );
    }
}

#[test]
fn test_identical_descriptors_build_identical_trees() {
    let descriptor = CharacterDescriptor {
        species: "duck".to_string(),
        skin: "galaxy".to_string(),
        hat: "wizard".to_string(),
        eyes: "star_eyes".to_string(),
        body_item: "aura".to_string(),
        mount: "dragon".to_string(),
        ..CharacterDescriptor::default()
    };
    let a = build(&descriptor);
    let b = build(&descriptor);

    assert_eq!(a.part_names(), b.part_names());
    assert_eq!(a.scene, b.scene);
    assert_eq!(a.effects, b.effects);
}

#[test]
fn test_every_catalog_entry_and_skin_builds() {
    let assembler = Assembler::default();
    let mut materials = MaterialCache::new();

    for category in Category::ALL {
        let ids: Vec<_> = assembler.catalog().ids(category).collect();
        assert!(!ids.is_empty(), "{category:?}");
        for id in ids {
            let mut descriptor = CharacterDescriptor::default();
            let slot = match category {
                Category::Hat => &mut descriptor.hat,
                Category::Eyes => &mut descriptor.eyes,
                Category::Mouth => &mut descriptor.mouth,
                Category::BodyItem => &mut descriptor.body_item,
            };
            *slot = id.to_string();
            let character = assembler.build(&descriptor, &mut materials);
            assert!(character.part("head").is_some(), "{category:?} {id}");
        }
    }

    let skins: Vec<String> = assembler.skins().ids().map(str::to_string).collect();
    assert!(skins.iter().any(|s| s == "rainbow"));
    for skin in skins {
        let character = assembler.build(
            &CharacterDescriptor {
                skin: skin.clone(),
                ..CharacterDescriptor::default()
            },
            &mut materials,
        );
        assert!(character.skin.is_some(), "{skin}");
    }
}

#[test]
fn test_every_rig_builds_head_and_body() {
    for species in Species::ALL {
        let character = build(&with(species.id()));
        assert_eq!(character.species, species);
        let names = character.part_names();
        assert_eq!(names.iter().filter(|n| **n == "head").count(), 1, "{species}");
        assert_eq!(names.iter().filter(|n| **n == "body").count(), 1, "{species}");
    }
}

#[test]
fn test_hiding_body_item_swaps_rig() {
    let descriptor = CharacterDescriptor {
        body_item: "ghost_sheet".to_string(),
        ..CharacterDescriptor::default()
    };
    let character = build(&descriptor);
    let names = character.part_names();
    assert!(names.contains(&"body_hidden"));
    assert!(!names.contains(&"body"));
    assert!(names.contains(&"body_item"));
}

#[test]
fn test_shark_and_snail_reject_body_items() {
    for species in ["shark", "snail"] {
        let descriptor = CharacterDescriptor {
            body_item: "scarf".to_string(),
            ..with(species)
        };
        let character = build(&descriptor);
        assert!(!character.part_names().contains(&"body_item"), "{species}");
    }
}

#[test]
fn test_frog_always_wears_lilypad() {
    let descriptor = CharacterDescriptor {
        hat: "top_hat".to_string(),
        ..with("frog")
    };
    let character = build(&descriptor);
    let hats: Vec<_> = character.part_names().into_iter().filter(|n| *n == "hat").collect();
    assert_eq!(hats.len(), 1);

    let plain = build(&with("frog"));
    assert_eq!(
        character.scene.summarize(character.species_root),
        plain.scene.summarize(plain.species_root)
    );
}

#[test]
fn test_unknown_ids_fall_back() {
    let descriptor = CharacterDescriptor {
        species: "dragonfly".to_string(),
        skin: "plaid".to_string(),
        hat: "doesNotExist".to_string(),
        eyes: "doesNotExist".to_string(),
        mouth: "doesNotExist".to_string(),
        body_item: "doesNotExist".to_string(),
        mount: "doesNotExist".to_string(),
        ..CharacterDescriptor::default()
    };
    let character = build(&descriptor);
    let plain = build(&CharacterDescriptor::default());
    assert_eq!(character.species, Species::Penguin);
    assert_eq!(character.scene, plain.scene);
}

#[test]
fn test_freestyle_uses_inputs() {
    let descriptor = CharacterDescriptor {
        primary: Some("#FF0000".to_string()),
        secondary: Some("not a color".to_string()),
        ..with("freestyle")
    };
    let character = build(&descriptor);
    let body = character.part("body").unwrap();
    assert!(body.colors().contains(&Rgb::new(0xFF, 0, 0)));
}

#[test]
fn test_decal_and_light_nodes() {
    let descriptor = CharacterDescriptor {
        hat: "fire_crown".to_string(),
        body_item: "heart_shirt".to_string(),
        ..CharacterDescriptor::default()
    };
    let character = build(&descriptor);
    let stats = character.draw_stats();
    assert_eq!(stats.decals, 1);
    assert_eq!(stats.lights, 1);
    assert_eq!(character.effects_of(EffectKind::Stream).count(), 1);

    let decal = character
        .scene
        .descendants(character.wrapper)
        .into_iter()
        .find_map(|id| match &character.scene.node(id)?.kind {
            NodeKind::Decal(d) => Some(d.clone()),
            _ => None,
        })
        .unwrap();
    assert!(decal.double_sided);
    assert_eq!(decal.rgba.len(), (decal.width * decal.height * 4) as usize);
}

#[test]
fn test_decal_draws_configured_text_with_injected_font() {
    let descriptor = CharacterDescriptor {
        body_item: "heart_shirt".to_string(),
        ..CharacterDescriptor::default()
    };
    let decal_of = |character: &AssembledCharacter| {
        character
            .scene
            .descendants(character.wrapper)
            .into_iter()
            .find_map(|id| match &character.scene.node(id)?.kind {
                NodeKind::Decal(d) => Some(d.clone()),
                _ => None,
            })
            .unwrap()
    };

    let font = load_decal_font(None).expect("a system TrueType font such as DejaVu Sans");
    let assembler = Assembler::default().with_decal_font(font);
    assert!(assembler.decal_font().is_some());
    let decal = decal_of(&assembler.build(&descriptor, &mut MaterialCache::new()));
    assert_eq!(decal.text, "I ♥ PLAZA");
    // pink ink shows up on the white card
    assert!(decal.rgba.chunks_exact(4).any(|px| px == [0xE9, 0x1E, 0x63, 0xFF]));

    let blank = rasterize(&decal.text, None, Rgb::new(0xE9, 0x1E, 0x63), Some(Rgb::WHITE), 4, 1.0);
    assert!(blank.rgba.chunks_exact(4).all(|px| px == [0xFF, 0xFF, 0xFF, 0xFF]));
}

#[test]
fn test_shared_cache_reuses_materials() {
    let assembler = Assembler::default();
    let shared = SharedMaterialCache::new();
    let _ = assembler.build_shared(&CharacterDescriptor::default(), &shared);
    let after_first = shared.len();
    let _ = assembler.build_shared(&CharacterDescriptor::default(), &shared);
    assert!(after_first > 0);
    assert_eq!(shared.len(), after_first);
}

#[test]
fn test_startup_validation_passes() {
    Assembler::default().validate().unwrap();
}
