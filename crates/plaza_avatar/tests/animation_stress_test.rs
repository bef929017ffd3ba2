//! # Animation Stress Test
//!
//! 100,000 ticks with irregular, monotonically increasing time over a small
//! crew that together carries every effect kind. Nothing may go NaN, no
//! burst may report negative life and no field may change size.
//!
//! Run with: cargo test --release --test animation_stress_test

use plaza_avatar::effects::{EffectField, EffectKind};
use plaza_avatar::scene::NodeKind;
use plaza_avatar::{animate, AssembledCharacter, AnimationCache, Assembler, CharacterDescriptor, MaterialCache};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const TICKS: usize = 100_000;
const CHECK_EVERY: usize = 997;

const ALL_KINDS: [EffectKind; 7] = [
    EffectKind::Spinner,
    EffectKind::Flapper,
    EffectKind::Orbit,
    EffectKind::Stream,
    EffectKind::Burst,
    EffectKind::Twinkle,
    EffectKind::Trail,
];

fn loaded_character() -> AssembledCharacter {
    let descriptor = CharacterDescriptor {
        skin: "galaxy".to_string(),
        hat: "wizard".to_string(),
        eyes: "fire_eyes".to_string(),
        body_item: "aura".to_string(),
        mount: "dragon".to_string(),
        ..CharacterDescriptor::default()
    };
    Assembler::default().build(&descriptor, &mut MaterialCache::new())
}

fn spinning_character() -> AssembledCharacter {
    let descriptor = CharacterDescriptor {
        species: "dog".to_string(),
        skin: "lava".to_string(),
        hat: "propeller".to_string(),
        eyes: "star_eyes".to_string(),
        body_item: "lightning".to_string(),
        mount: "skateboard".to_string(),
        ..CharacterDescriptor::default()
    };
    Assembler::default().build(&descriptor, &mut MaterialCache::new())
}

fn field_sizes(character: &AssembledCharacter) -> Vec<usize> {
    character
        .effects
        .iter()
        .filter_map(|h| match &character.scene.node(h.node)?.kind {
            NodeKind::Effect(field) => Some(field.len()),
            _ => None,
        })
        .collect()
}

fn check_invariants(character: &AssembledCharacter, expected_sizes: &[usize], tick: usize) {
    assert_eq!(field_sizes(character), expected_sizes, "particle count changed at tick {tick}");

    for handle in &character.effects {
        let node = character.scene.node(handle.node).unwrap();
        let rotation = node.transform.rotation;
        assert!(rotation.is_finite(), "non-finite rotation at tick {tick}");

        let NodeKind::Effect(field) = &node.kind else { continue };
        for sprite in field.sprites() {
            assert!(
                sprite.position_size.iter().chain(&sprite.color_opacity).all(|v| v.is_finite()),
                "NaN sprite at tick {tick}"
            );
            assert!((0.0..=1.0).contains(&sprite.color_opacity[3]));
        }
        if let EffectField::Burst(burst) = field {
            for p in &burst.particles {
                assert!(p.life >= 0.0 && p.life < 1.0, "life {} at tick {tick}", p.life);
            }
        }
    }

    if let Some(skin) = &character.skin {
        for tracked in skin.materials() {
            assert!(tracked.material.intensity().is_finite());
            assert!(tracked.material.intensity() >= 0.0);
        }
    }
}

#[test]
fn test_stress_100k_ticks() {
    let mut crew: Vec<(AssembledCharacter, AnimationCache, Vec<usize>)> = [loaded_character(), spinning_character()]
        .into_iter()
        .map(|character| {
            let cache = AnimationCache::build(&character);
            let sizes = field_sizes(&character);
            (character, cache, sizes)
        })
        .collect();
    for kind in ALL_KINDS {
        assert!(
            crew.iter().any(|(_, cache, _)| !cache.nodes(kind).is_empty()),
            "{kind:?} missing"
        );
    }
    assert!(!crew[1].1.nodes(EffectKind::Spinner).is_empty());

    let mut rng = ChaCha8Rng::seed_from_u64(0xA11CE);
    let mut time = 0.0f32;
    for tick in 0..TICKS {
        // Mostly 60 Hz with occasional hitches and zero-length frames.
        let delta = match rng.gen_range(0..100) {
            0 => rng.gen_range(0.25..2.0),
            1 => 0.0,
            _ => rng.gen_range(0.008..0.034),
        };
        time += delta;
        for (character, cache, sizes) in &mut crew {
            animate(cache, character, time, delta);
            if tick % CHECK_EVERY == 0 {
                check_invariants(character, sizes, tick);
            }
        }
    }
    for (character, _, sizes) in &crew {
        check_invariants(character, sizes, TICKS);
    }
}

#[test]
fn test_pathological_deltas_are_harmless() {
    let mut character = loaded_character();
    let mut cache = AnimationCache::build(&character);
    let sizes = field_sizes(&character);

    for (i, delta) in [f32::NAN, f32::INFINITY, -1.0, f32::NEG_INFINITY, 1e30, 0.0].into_iter().enumerate() {
        animate(&mut cache, &mut character, i as f32, delta);
        check_invariants(&character, &sizes, i);
    }
    animate(&mut cache, &mut character, f32::NAN, 0.016);
    check_invariants(&character, &sizes, usize::MAX);
}
