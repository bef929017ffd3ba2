//! Static effect declarations used by catalog entries.

use std::f32::consts::TAU;

use rand::Rng;

use super::fields::{
    apply_life, BurstField, OrbitElement, OrbitField, Star, StreamField, StreamParticle, TrailField, TrailPoint, TwinkleField,
};
use super::{EffectField, EffectKind};
use crate::color::Rgb;
use crate::math::Vec3;

/// Declarative description of a particle field.
///
/// Positions are in world units relative to the effect node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectSpec {
    /// Elements evenly spaced on a ring.
    Orbit {
        /// Element count.
        count: u32,
        /// Ring radius.
        radius: f32,
        /// Resting height.
        base_height: f32,
        /// Bob height.
        amplitude: f32,
        /// Bob angular frequency.
        frequency: f32,
        /// Ring yaw speed.
        ring_speed: f32,
        /// Element colors, cycled.
        colors: &'static [&'static str],
    },
    /// Looping stream along one direction.
    Stream {
        /// Particle count.
        count: u32,
        /// Origin jitter radius.
        spread: f32,
        /// Travel direction.
        direction: [f32; 3],
        /// Units per second.
        speed: f32,
        /// Reset distance.
        max_distance: f32,
        /// Colors, picked at random.
        colors: &'static [&'static str],
    },
    /// Respawning burst.
    Burst {
        /// Particle count.
        count: u32,
        /// Outward speed.
        speed: f32,
        /// Minimum life rate.
        rate_min: f32,
        /// Maximum life rate.
        rate_max: f32,
        /// Colors, picked at random.
        colors: &'static [&'static str],
    },
    /// Stationary twinkling points in a box.
    Twinkle {
        /// Star count.
        count: u32,
        /// Half extents of the box.
        extent: [f32; 3],
        /// Pulse speed.
        speed: f32,
        /// Colors, picked at random.
        colors: &'static [&'static str],
    },
    /// Fixed-size trail.
    Trail {
        /// Point count.
        count: u32,
        /// Origin jitter radius.
        spread: f32,
        /// Travel direction.
        direction: [f32; 3],
        /// Travel length per cycle.
        length: f32,
        /// Cycles per second.
        speed: f32,
        /// Colors, picked at random.
        colors: &'static [&'static str],
    },
}

const SPRITE_SIZE: f32 = 0.05;

impl EffectSpec {
    /// Handle tag of the field this spec builds.
    #[must_use]
    pub const fn kind(&self) -> EffectKind {
        match self {
            Self::Orbit { .. } => EffectKind::Orbit,
            Self::Stream { .. } => EffectKind::Stream,
            Self::Burst { .. } => EffectKind::Burst,
            Self::Twinkle { .. } => EffectKind::Twinkle,
            Self::Trail { .. } => EffectKind::Trail,
        }
    }

    /// Every color literal this effect names.
    #[must_use]
    pub const fn colors(&self) -> &'static [&'static str] {
        match self {
            Self::Orbit { colors, .. }
            | Self::Stream { colors, .. }
            | Self::Burst { colors, .. }
            | Self::Twinkle { colors, .. }
            | Self::Trail { colors, .. } => colors,
        }
    }

    /// Draws the randomized initial layout.
    pub fn instantiate<R: Rng>(&self, rng: &mut R, fallback: Rgb) -> EffectField {
        let palette: Vec<Rgb> = self
            .colors()
            .iter()
            .map(|c| Rgb::parse_hex(c).unwrap_or(fallback))
            .collect();
        let pick = |rng: &mut R| {
            if palette.is_empty() {
                fallback
            } else {
                palette[rng.gen_range(0..palette.len())]
            }
        };

        match *self {
            Self::Orbit {
                count,
                radius,
                base_height,
                amplitude,
                frequency,
                ring_speed,
                ..
            } => {
                let elements = (0..count)
                    .map(|i| {
                        let angle = i as f32 / count.max(1) as f32 * TAU;
                        let color = palette
                            .get(i as usize % palette.len().max(1))
                            .copied()
                            .unwrap_or(fallback);
                        OrbitElement {
                            angle,
                            radius,
                            base_height,
                            phase: rng.gen_range(0.0..TAU),
                            color,
                            position: Vec3::new(angle.cos() * radius, base_height, angle.sin() * radius),
                        }
                    })
                    .collect();
                EffectField::Orbit(OrbitField {
                    ring_speed,
                    frequency,
                    amplitude,
                    size: SPRITE_SIZE * 1.5,
                    elements,
                })
            }
            Self::Stream {
                count,
                spread,
                direction,
                speed,
                max_distance,
                ..
            } => {
                let velocity = Vec3::from_array(direction) * speed;
                let particles = (0..count)
                    .map(|_| {
                        let origin = jitter(rng, spread);
                        let head_start = rng.gen_range(0.0..1.0f32) * max_distance / speed.max(f32::EPSILON);
                        let position = origin + velocity * head_start;
                        StreamParticle {
                            origin,
                            velocity,
                            position: if position.distance(origin) < max_distance { position } else { origin },
                            color: pick(rng),
                        }
                    })
                    .collect();
                EffectField::Stream(StreamField {
                    max_distance,
                    size: SPRITE_SIZE,
                    particles,
                })
            }
            Self::Burst {
                count,
                speed,
                rate_min,
                rate_max,
                ..
            } => {
                let mut field = BurstField {
                    speed,
                    rate_range: (rate_min, rate_max),
                    colors: palette.clone(),
                    size: SPRITE_SIZE,
                    particles: Vec::with_capacity(count as usize),
                };
                for _ in 0..count {
                    let mut p = field.spawn(rng, Vec3::ZERO);
                    // stagger so the first wave does not expire together
                    p.life = rng.gen_range(0.0..1.0);
                    apply_life(&mut p);
                    field.particles.push(p);
                }
                EffectField::Burst(field)
            }
            Self::Twinkle { count, extent, speed, .. } => {
                let stars = (0..count)
                    .map(|_| Star {
                        position: Vec3::new(
                            rng.gen_range(-1.0..=1.0f32) * extent[0],
                            rng.gen_range(-1.0..=1.0f32) * extent[1],
                            rng.gen_range(-1.0..=1.0f32) * extent[2],
                        ),
                        phase: rng.gen_range(0.0..TAU),
                        color: pick(rng),
                        opacity: 1.0,
                    })
                    .collect();
                EffectField::Twinkle(TwinkleField {
                    speed,
                    size: SPRITE_SIZE * 0.6,
                    stars,
                })
            }
            Self::Trail {
                count,
                spread,
                direction,
                length,
                speed,
                ..
            } => {
                let velocity = Vec3::from_array(direction);
                let points = (0..count)
                    .map(|_| {
                        let origin = jitter(rng, spread);
                        let seed = rng.gen_range(0.0..1.0f32);
                        TrailPoint {
                            origin,
                            velocity,
                            seed,
                            color: pick(rng),
                            position: origin + velocity * (seed * length),
                        }
                    })
                    .collect();
                EffectField::Trail(TrailField {
                    speed,
                    length,
                    size: SPRITE_SIZE,
                    points,
                })
            }
        }
    }
}

fn jitter<R: Rng>(rng: &mut R, spread: f32) -> Vec3 {
    if spread <= 0.0 {
        return Vec3::ZERO;
    }
    Vec3::new(
        rng.gen_range(-spread..=spread),
        rng.gen_range(-spread..=spread),
        rng.gen_range(-spread..=spread),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const TRAIL: EffectSpec = EffectSpec::Trail {
        count: 24,
        spread: 0.05,
        direction: [0.0, 0.0, -1.0],
        length: 0.6,
        speed: 1.5,
        colors: &["#FF4500", "#FFD700"],
    };

    #[test]
    fn test_instantiate_is_deterministic_per_seed() {
        let a = TRAIL.instantiate(&mut ChaCha8Rng::seed_from_u64(9), Rgb::WHITE);
        let b = TRAIL.instantiate(&mut ChaCha8Rng::seed_from_u64(9), Rgb::WHITE);
        let c = TRAIL.instantiate(&mut ChaCha8Rng::seed_from_u64(10), Rgb::WHITE);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 24);
        assert_eq!(a.kind(), EffectKind::Trail);
    }

    #[test]
    fn test_orbit_cycles_colors() {
        let spec = EffectSpec::Orbit {
            count: 4,
            radius: 1.0,
            base_height: 0.0,
            amplitude: 0.1,
            frequency: 1.0,
            ring_speed: 1.0,
            colors: &["#FF0000", "#0000FF"],
        };
        let EffectField::Orbit(field) = spec.instantiate(&mut ChaCha8Rng::seed_from_u64(1), Rgb::WHITE) else {
            panic!("expected orbit");
        };
        assert_eq!(field.elements[0].color, Rgb::new(0xFF, 0, 0));
        assert_eq!(field.elements[1].color, Rgb::new(0, 0, 0xFF));
        assert_eq!(field.elements[2].color, Rgb::new(0xFF, 0, 0));
    }

    #[test]
    fn test_burst_starts_staggered() {
        let spec = EffectSpec::Burst {
            count: 16,
            speed: 0.8,
            rate_min: 0.5,
            rate_max: 1.5,
            colors: &["#FFFF00"],
        };
        let EffectField::Burst(field) = spec.instantiate(&mut ChaCha8Rng::seed_from_u64(3), Rgb::WHITE) else {
            panic!("expected burst");
        };
        assert!(field.particles.iter().all(|p| (0.0..1.0).contains(&p.life)));
        assert!(field.particles.iter().any(|p| p.life > 0.0));
    }
}
