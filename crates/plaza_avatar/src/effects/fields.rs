//! Particle field state and per-tick update rules.

use std::f32::consts::TAU;

use rand::Rng;

use crate::color::Rgb;
use crate::math::Vec3;

// =============================================================================
// ORBIT
// =============================================================================

/// One element riding an orbit ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitElement {
    /// Fixed angle around the ring.
    pub angle: f32,
    /// Distance from the ring axis.
    pub radius: f32,
    /// Resting height.
    pub base_height: f32,
    /// Bob phase.
    pub phase: f32,
    /// Element color.
    pub color: Rgb,
    /// Current local position (ring space).
    pub position: Vec3,
}

/// A ring of elements that yaws as a whole while each element bobs.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitField {
    /// Ring yaw speed in radians per second.
    pub ring_speed: f32,
    /// Bob angular frequency.
    pub frequency: f32,
    /// Bob height.
    pub amplitude: f32,
    /// Sprite size.
    pub size: f32,
    /// Elements.
    pub elements: Vec<OrbitElement>,
}

impl OrbitField {
    /// Updates element heights; returns the ring yaw for the node.
    pub fn step(&mut self, time: f32) -> f32 {
        for e in &mut self.elements {
            let bob = (time * self.frequency + e.phase).sin() * self.amplitude;
            let height = e.base_height + if bob.is_finite() { bob } else { 0.0 };
            e.position = Vec3::new(e.angle.cos() * e.radius, height, e.angle.sin() * e.radius);
        }
        let yaw = (time * self.ring_speed).rem_euclid(TAU);
        if yaw.is_finite() {
            yaw
        } else {
            0.0
        }
    }
}

// =============================================================================
// STREAM
// =============================================================================

/// One looping stream particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamParticle {
    /// Reset position.
    pub origin: Vec3,
    /// Units per second.
    pub velocity: Vec3,
    /// Current position.
    pub position: Vec3,
    /// Particle color.
    pub color: Rgb,
}

/// Particles that travel from their origin and snap back past a distance.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamField {
    /// Distance at which a particle resets.
    pub max_distance: f32,
    /// Sprite size.
    pub size: f32,
    /// Particles.
    pub particles: Vec<StreamParticle>,
}

impl StreamField {
    /// Integrates positions by `delta`.
    pub fn step(&mut self, delta: f32) {
        for p in &mut self.particles {
            p.position += p.velocity * delta;
            if !p.position.is_finite() || p.position.distance(p.origin) >= self.max_distance {
                p.position = p.origin;
            }
        }
    }
}

// =============================================================================
// BURST
// =============================================================================

/// One expiring burst particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstParticle {
    /// Spawn point.
    pub origin: Vec3,
    /// Units per second.
    pub velocity: Vec3,
    /// Current position.
    pub position: Vec3,
    /// Normalized age in `[0, 1)`.
    pub life: f32,
    /// Life gained per second.
    pub rate: f32,
    /// `1 − life`.
    pub opacity: f32,
    /// Shrinks with age.
    pub scale: f32,
    /// Particle color.
    pub color: Rgb,
}

/// Particles that age out and respawn with fresh random state.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstField {
    /// Outward speed.
    pub speed: f32,
    /// Life rate range.
    pub rate_range: (f32, f32),
    /// Spawn colors.
    pub colors: Vec<Rgb>,
    /// Sprite size at birth.
    pub size: f32,
    /// Particles.
    pub particles: Vec<BurstParticle>,
}

impl BurstField {
    /// Draws a fresh particle at the origin.
    pub fn spawn<R: Rng>(&self, rng: &mut R, origin: Vec3) -> BurstParticle {
        let yaw = rng.gen_range(0.0..TAU);
        let pitch = rng.gen_range(-0.3..1.2f32);
        let direction = Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos());
        let (lo, hi) = self.rate_range;
        let rate = if hi > lo { rng.gen_range(lo..hi) } else { lo };
        let color = if self.colors.is_empty() {
            Rgb::WHITE
        } else {
            self.colors[rng.gen_range(0..self.colors.len())]
        };
        let mut particle = BurstParticle {
            origin,
            velocity: direction * self.speed,
            position: origin,
            life: 0.0,
            rate: rate.max(0.0),
            opacity: 1.0,
            scale: 1.0,
            color,
        };
        apply_life(&mut particle);
        particle
    }

    /// Ages particles and respawns the expired ones.
    pub fn step<R: Rng>(&mut self, delta: f32, rng: &mut R) {
        for i in 0..self.particles.len() {
            let mut p = self.particles[i];
            p.life += delta * p.rate;
            p.position += p.velocity * delta;
            if p.life >= 1.0 || !p.life.is_finite() || !p.position.is_finite() {
                p = self.spawn(rng, p.origin);
            }
            apply_life(&mut p);
            self.particles[i] = p;
        }
    }
}

pub(super) fn apply_life(p: &mut BurstParticle) {
    p.opacity = (1.0 - p.life).clamp(0.0, 1.0);
    p.scale = 1.0 - 0.5 * p.life.clamp(0.0, 1.0);
}

// =============================================================================
// TWINKLE
// =============================================================================

/// One fixed star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Fixed position.
    pub position: Vec3,
    /// Pulse phase.
    pub phase: f32,
    /// Star color.
    pub color: Rgb,
    /// Current opacity.
    pub opacity: f32,
}

/// Stationary points whose opacity pulses.
#[derive(Debug, Clone, PartialEq)]
pub struct TwinkleField {
    /// Pulse speed.
    pub speed: f32,
    /// Sprite size.
    pub size: f32,
    /// Stars.
    pub stars: Vec<Star>,
}

impl TwinkleField {
    /// Sets every star's opacity from time.
    pub fn step(&mut self, time: f32) {
        for s in &mut self.stars {
            let o = 0.5 + 0.5 * (time * self.speed + s.phase).sin();
            s.opacity = if o.is_finite() { o } else { 1.0 };
        }
    }
}

// =============================================================================
// TRAIL
// =============================================================================

/// One trail point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    /// Emission point.
    pub origin: Vec3,
    /// Unit direction of travel.
    pub velocity: Vec3,
    /// Cycle offset in `[0, 1)`.
    pub seed: f32,
    /// Point color.
    pub color: Rgb,
    /// Current position.
    pub position: Vec3,
}

/// Fixed-size set of points sliding along their direction and wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailField {
    /// Cycles per second.
    pub speed: f32,
    /// Travel length per cycle.
    pub length: f32,
    /// Sprite size.
    pub size: f32,
    /// Points.
    pub points: Vec<TrailPoint>,
}

impl TrailField {
    /// `position = origin + velocity · frac(time · speed + seed) · length`.
    pub fn step(&mut self, time: f32) {
        for p in &mut self.points {
            let cycle = time * self.speed + p.seed;
            let frac = if cycle.is_finite() { cycle - cycle.floor() } else { 0.0 };
            p.position = p.origin + p.velocity * (frac * self.length);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn burst(count: usize) -> BurstField {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut field = BurstField {
            speed: 1.0,
            rate_range: (0.5, 2.0),
            colors: vec![Rgb::WHITE],
            size: 0.05,
            particles: Vec::new(),
        };
        for _ in 0..count {
            let p = field.spawn(&mut rng, Vec3::ZERO);
            field.particles.push(p);
        }
        field
    }

    #[test]
    fn test_burst_respawns_without_growth() {
        let mut field = burst(8);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..500 {
            field.step(0.1, &mut rng);
        }
        assert_eq!(field.particles.len(), 8);
        for p in &field.particles {
            assert!((0.0..1.0).contains(&p.life));
            assert!((0.0..=1.0).contains(&p.opacity));
        }
    }

    #[test]
    fn test_stream_resets_to_origin() {
        let origin = Vec3::new(0.0, 1.0, 0.0);
        let mut field = StreamField {
            max_distance: 1.0,
            size: 0.05,
            particles: vec![StreamParticle {
                origin,
                velocity: Vec3::new(0.0, 1.0, 0.0),
                position: origin,
                color: Rgb::WHITE,
            }],
        };
        field.step(0.6);
        assert!((field.particles[0].position.y - 1.6).abs() < 1e-6);
        field.step(0.6);
        assert_eq!(field.particles[0].position, origin);
    }

    #[test]
    fn test_trail_wraps_along_direction() {
        let mut field = TrailField {
            speed: 1.0,
            length: 2.0,
            size: 0.05,
            points: vec![TrailPoint {
                origin: Vec3::ZERO,
                velocity: Vec3::new(0.0, 0.0, -1.0),
                seed: 0.25,
                color: Rgb::WHITE,
                position: Vec3::ZERO,
            }],
        };
        field.step(0.0);
        assert!((field.points[0].position.z + 0.5).abs() < 1e-6);
        field.step(1.0);
        assert!((field.points[0].position.z + 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_twinkle_opacity_in_range() {
        let mut field = TwinkleField {
            speed: 3.0,
            size: 0.05,
            stars: vec![Star {
                position: Vec3::ZERO,
                phase: 0.0,
                color: Rgb::WHITE,
                opacity: 0.0,
            }],
        };
        field.step(0.0);
        assert!((field.stars[0].opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_bobs_around_base() {
        let mut field = OrbitField {
            ring_speed: 1.0,
            frequency: 2.0,
            amplitude: 0.1,
            size: 0.05,
            elements: vec![OrbitElement {
                angle: 0.0,
                radius: 1.0,
                base_height: 0.5,
                phase: 0.0,
                color: Rgb::WHITE,
                position: Vec3::ZERO,
            }],
        };
        let yaw = field.step(0.5);
        assert!((yaw - 0.5).abs() < 1e-6);
        let e = field.elements[0];
        assert!((e.position.x - 1.0).abs() < 1e-6);
        assert!((e.position.y - 0.5).abs() <= 0.1 + 1e-6);
    }
}
