//! Secondary effects: particle fields and rigid part motion.
//!
//! Everything here is CPU-side state that the animator advances each tick.
//! A field's randomized initial layout is drawn once at build time from a
//! seeded `ChaCha8Rng`; afterwards its motion depends only on that stored
//! state, time and delta (bursts additionally re-draw a particle when it
//! expires).
//!
//! Discovery is by handle, never by name: attachment code returns an
//! [`EffectHandle`] for every node it makes animatable.

mod fields;
mod spec;

pub use fields::{
    BurstField, BurstParticle, OrbitElement, OrbitField, Star, StreamField, StreamParticle, TrailField,
    TrailPoint, TwinkleField,
};
pub use spec::EffectSpec;

use bytemuck::{Pod, Zeroable};
use rand::Rng;

use crate::color::Rgb;
use crate::math::{Axis, Vec3};
use crate::scene::NodeId;

/// Rigid motion of an articulated node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Continuous rotation: `angle += delta × speed`.
    Spin {
        /// Rotation axis.
        axis: Axis,
        /// Radians per second.
        speed: f32,
    },
    /// Oscillation: `angle = sin(time × frequency + phase) × amplitude`.
    Flap {
        /// Rotation axis.
        axis: Axis,
        /// Angular frequency.
        frequency: f32,
        /// Peak angle in radians.
        amplitude: f32,
        /// Phase offset, lets left/right pairs mirror.
        phase: f32,
    },
}

impl Motion {
    /// Applies this motion to an Euler rotation.
    pub fn apply(&self, rotation: &mut Vec3, time: f32, delta: f32) {
        match *self {
            Self::Spin { axis, speed } => {
                let angle = (rotation.axis(axis) + delta * speed).rem_euclid(std::f32::consts::TAU);
                rotation.set_axis(axis, if angle.is_finite() { angle } else { 0.0 });
            }
            Self::Flap {
                axis,
                frequency,
                amplitude,
                phase,
            } => {
                let angle = (time * frequency + phase).sin() * amplitude;
                rotation.set_axis(axis, if angle.is_finite() { angle } else { 0.0 });
            }
        }
    }

    /// The handle kind for this motion.
    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::Spin { .. } => EffectKind::Spinner,
            Self::Flap { .. } => EffectKind::Flapper,
        }
    }
}

/// Typed tag of an animatable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Rigid continuous spin.
    Spinner,
    /// Rigid oscillation.
    Flapper,
    /// Ring of bobbing elements.
    Orbit,
    /// Looping linear stream.
    Stream,
    /// Expiring, respawning particles.
    Burst,
    /// Fixed stars with pulsing opacity.
    Twinkle,
    /// Fixed-size point trail.
    Trail,
}

/// Build-time record of one animatable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle {
    /// Node to animate.
    pub node: NodeId,
    /// What kind of animation it takes.
    pub kind: EffectKind,
}

/// Per-particle GPU sprite.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    /// Local position (xyz) + sprite size (w).
    pub position_size: [f32; 4],
    /// Linear color (rgb) + opacity (a).
    pub color_opacity: [f32; 4],
}

impl ParticleInstance {
    fn new(position: Vec3, size: f32, color: Rgb, opacity: f32) -> Self {
        let [r, g, b] = color.to_linear_array();
        Self {
            position_size: [position.x, position.y, position.z, size],
            color_opacity: [r, g, b, opacity],
        }
    }
}

/// A particle field carried by an effect node.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectField {
    /// See [`OrbitField`].
    Orbit(OrbitField),
    /// See [`StreamField`].
    Stream(StreamField),
    /// See [`BurstField`].
    Burst(BurstField),
    /// See [`TwinkleField`].
    Twinkle(TwinkleField),
    /// See [`TrailField`].
    Trail(TrailField),
}

impl EffectField {
    /// Handle tag for this field.
    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::Orbit(_) => EffectKind::Orbit,
            Self::Stream(_) => EffectKind::Stream,
            Self::Burst(_) => EffectKind::Burst,
            Self::Twinkle(_) => EffectKind::Twinkle,
            Self::Trail(_) => EffectKind::Trail,
        }
    }

    /// Particle count. Fixed for the lifetime of the field.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Orbit(f) => f.elements.len(),
            Self::Stream(f) => f.particles.len(),
            Self::Burst(f) => f.particles.len(),
            Self::Twinkle(f) => f.stars.len(),
            Self::Trail(f) => f.points.len(),
        }
    }

    /// True for a field with no particles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advances the field. Returns the ring yaw for orbit fields.
    pub fn step<R: Rng>(&mut self, time: f32, delta: f32, rng: &mut R) -> Option<f32> {
        match self {
            Self::Orbit(f) => return Some(f.step(time)),
            Self::Stream(f) => f.step(delta),
            Self::Burst(f) => f.step(delta, rng),
            Self::Twinkle(f) => f.step(time),
            Self::Trail(f) => f.step(time),
        }
        None
    }

    /// Sprites for upload, one per particle.
    #[must_use]
    pub fn sprites(&self) -> Vec<ParticleInstance> {
        match self {
            Self::Orbit(f) => f
                .elements
                .iter()
                .map(|e| ParticleInstance::new(e.position, f.size, e.color, 1.0))
                .collect(),
            Self::Stream(f) => f
                .particles
                .iter()
                .map(|p| ParticleInstance::new(p.position, f.size, p.color, 1.0))
                .collect(),
            Self::Burst(f) => f
                .particles
                .iter()
                .map(|p| ParticleInstance::new(p.position, f.size * p.scale, p.color, p.opacity))
                .collect(),
            Self::Twinkle(f) => f
                .stars
                .iter()
                .map(|s| ParticleInstance::new(s.position, f.size, s.color, s.opacity))
                .collect(),
            Self::Trail(f) => f
                .points
                .iter()
                .map(|p| ParticleInstance::new(p.position, f.size, p.color, 1.0))
                .collect(),
        }
    }
}
