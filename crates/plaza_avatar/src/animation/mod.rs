//! Animation cache and per-frame animator.
//!
//! [`AnimationCache::build`] runs once after assembly and sorts the
//! character's effect handles by kind. [`animate`] then touches only those
//! nodes plus the tracked skin materials; the scene tree is never walked.
//!
//! ```text
//! descriptor ──build──▶ AssembledCharacter ──once──▶ AnimationCache
//!                                    ▲                     │
//!                                    └──── animate(t, dt) ◀┘  every tick
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::assemble::AssembledCharacter;
use crate::effects::EffectKind;
use crate::scene::{NodeId, NodeKind, SceneGraph};

/// Typed node lists for one character.
#[derive(Debug, Clone)]
pub struct AnimationCache {
    spinners: Vec<NodeId>,
    flappers: Vec<NodeId>,
    orbits: Vec<NodeId>,
    streams: Vec<NodeId>,
    bursts: Vec<NodeId>,
    twinkles: Vec<NodeId>,
    trails: Vec<NodeId>,
    skin_materials: usize,
    rng: ChaCha8Rng,
}

impl AnimationCache {
    /// Single pass over the character's effect handles.
    #[must_use]
    pub fn build(character: &AssembledCharacter) -> Self {
        let mut cache = Self {
            spinners: Vec::new(),
            flappers: Vec::new(),
            orbits: Vec::new(),
            streams: Vec::new(),
            bursts: Vec::new(),
            twinkles: Vec::new(),
            trails: Vec::new(),
            skin_materials: character.skin.as_ref().map_or(0, |s| s.materials().len()),
            rng: ChaCha8Rng::seed_from_u64(character.effect_seed),
        };
        for handle in &character.effects {
            cache.list_mut(handle.kind).push(handle.node);
        }
        debug!(
            species = %character.species,
            nodes = cache.node_count(),
            skin_materials = cache.skin_materials,
            "animation cache built"
        );
        cache
    }

    fn list_mut(&mut self, kind: EffectKind) -> &mut Vec<NodeId> {
        match kind {
            EffectKind::Spinner => &mut self.spinners,
            EffectKind::Flapper => &mut self.flappers,
            EffectKind::Orbit => &mut self.orbits,
            EffectKind::Stream => &mut self.streams,
            EffectKind::Burst => &mut self.bursts,
            EffectKind::Twinkle => &mut self.twinkles,
            EffectKind::Trail => &mut self.trails,
        }
    }

    /// Cached nodes of one kind.
    #[must_use]
    pub fn nodes(&self, kind: EffectKind) -> &[NodeId] {
        match kind {
            EffectKind::Spinner => &self.spinners,
            EffectKind::Flapper => &self.flappers,
            EffectKind::Orbit => &self.orbits,
            EffectKind::Stream => &self.streams,
            EffectKind::Burst => &self.bursts,
            EffectKind::Twinkle => &self.twinkles,
            EffectKind::Trail => &self.trails,
        }
    }

    /// Total cached nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.spinners.len()
            + self.flappers.len()
            + self.orbits.len()
            + self.streams.len()
            + self.bursts.len()
            + self.twinkles.len()
            + self.trails.len()
    }

    /// Tracked skin materials at build time.
    #[must_use]
    pub fn skin_materials(&self) -> usize {
        self.skin_materials
    }

    /// True when [`animate`] has nothing to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.node_count() == 0 && self.skin_materials == 0
    }
}

/// Advances every cached effect to `time`.
///
/// Negative or non-finite `delta` counts as zero; non-finite `time` as zero.
pub fn animate(cache: &mut AnimationCache, character: &mut AssembledCharacter, time: f32, delta: f32) {
    if cache.is_empty() {
        return;
    }
    let time = if time.is_finite() { time } else { 0.0 };
    let delta = if delta.is_finite() && delta > 0.0 { delta } else { 0.0 };

    let scene = &mut character.scene;
    for &id in cache.spinners.iter().chain(&cache.flappers) {
        apply_motion(scene, id, time, delta);
    }

    let fields = cache
        .orbits
        .iter()
        .chain(&cache.streams)
        .chain(&cache.bursts)
        .chain(&cache.twinkles)
        .chain(&cache.trails);
    for &id in fields {
        let Some(node) = scene.node_mut(id) else { continue };
        if let NodeKind::Effect(field) = &mut node.kind {
            if let Some(yaw) = field.step(time, delta, &mut cache.rng) {
                node.transform.rotation.y = yaw;
            }
        }
    }

    if let Some(skin) = character.skin.as_mut() {
        skin.update(time, character.emissive_wobble);
    }
}

fn apply_motion(scene: &mut SceneGraph, id: NodeId, time: f32, delta: f32) {
    let Some(node) = scene.node_mut(id) else { return };
    if let Some(motion) = node.motion {
        motion.apply(&mut node.transform.rotation, time, delta);
    }
}
