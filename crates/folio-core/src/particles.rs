//! Pointer-reactive particle field.
//!
//! Each frame the field applies pointer repulsion, integrates and damps
//! velocity, adds a small Brownian kick, clamps speed and wraps positions
//! around the canvas. Rendering reads [`ParticleField::particles`] and
//! [`ParticleField::links`]; the composited opacity of the canvas layer is a
//! separate scroll signal and never feeds back into the simulation.

use crate::constants::*;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub max_particles: usize,
    pub area_per_particle: f32,
    pub repulsion_radius: f32,
    pub repulsion_strength: f32,
    pub damping: f32,
    pub jitter: f32,
    pub max_speed: f32,
    pub link_distance: f32,
    pub link_max_opacity: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_particles: PARTICLE_MAX_COUNT,
            area_per_particle: PARTICLE_AREA_PER_PARTICLE,
            repulsion_radius: REPULSION_RADIUS,
            repulsion_strength: REPULSION_STRENGTH,
            damping: VELOCITY_DAMPING,
            jitter: BROWNIAN_JITTER,
            max_speed: MAX_PARTICLE_SPEED,
            link_distance: LINK_DISTANCE,
            link_max_opacity: LINK_MAX_OPACITY,
        }
    }
}

/// A line between two nearby particles, by index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    size: Vec2,
    pointer: Option<Vec2>,
    params: FieldParams,
    rng: StdRng,
}

/// Number of particles for a canvas of the given size.
pub fn particle_count_for(width: f32, height: f32, params: &FieldParams) -> usize {
    if width <= 0.0 || height <= 0.0 {
        return 0;
    }
    let by_area = ((width * height) / params.area_per_particle).floor() as usize;
    by_area.min(params.max_particles)
}

impl ParticleField {
    pub fn new(width: f32, height: f32, params: FieldParams, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            size: Vec2::new(width, height),
            pointer: None,
            params,
            rng: StdRng::seed_from_u64(seed),
        };
        field.populate();
        field
    }

    /// Field with caller-placed particles; used to stage specific scenes.
    pub fn with_particles(
        width: f32,
        height: f32,
        params: FieldParams,
        seed: u64,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            particles,
            size: Vec2::new(width, height),
            pointer: None,
            params,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn populate(&mut self) {
        let n = particle_count_for(self.size.x, self.size.y, &self.params);
        let half_speed = PARTICLE_INITIAL_SPEED * 0.5;
        self.particles.clear();
        self.particles.reserve(n);
        for _ in 0..n {
            let pos = Vec2::new(
                self.rng.gen::<f32>() * self.size.x,
                self.rng.gen::<f32>() * self.size.y,
            );
            let vel = Vec2::new(
                self.rng.gen_range(-half_speed..half_speed),
                self.rng.gen_range(-half_speed..half_speed),
            );
            self.particles.push(Particle {
                pos,
                vel,
                radius: PARTICLE_RADIUS_MIN + self.rng.gen::<f32>() * PARTICLE_RADIUS_SPAN,
                opacity: PARTICLE_OPACITY_MIN + self.rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
            });
        }
    }

    /// Particles have no identity across resizes; the whole set is regenerated.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.populate();
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn step(&mut self) {
        let p = self.params;
        let half_jitter = p.jitter * 0.5;
        let (w, h) = (self.size.x, self.size.y);
        for particle in &mut self.particles {
            if let Some(pointer) = self.pointer {
                let d = particle.pos - pointer;
                let dist = d.length();
                if dist < p.repulsion_radius && dist > 0.0 {
                    let force = (p.repulsion_radius - dist) / p.repulsion_radius;
                    particle.vel += (d / dist) * force * p.repulsion_strength;
                }
            }

            particle.pos += particle.vel;
            particle.vel *= p.damping;

            if half_jitter > 0.0 {
                particle.vel.x += self.rng.gen_range(-half_jitter..half_jitter);
                particle.vel.y += self.rng.gen_range(-half_jitter..half_jitter);
            }

            let speed = particle.vel.length();
            if speed > p.max_speed {
                particle.vel *= p.max_speed / speed;
            }

            // toroidal wrap
            if particle.pos.x < 0.0 {
                particle.pos.x = w;
            } else if particle.pos.x > w {
                particle.pos.x = 0.0;
            }
            if particle.pos.y < 0.0 {
                particle.pos.y = h;
            } else if particle.pos.y > h {
                particle.pos.y = 0.0;
            }
        }
    }

    /// Every pair closer than the link distance, with opacity falling off
    /// linearly to zero at that distance.
    pub fn links(&self) -> Vec<Link> {
        let max_d = self.params.link_distance;
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let d = a.pos.distance(b.pos);
                if d < max_d {
                    out.push(Link {
                        a: i,
                        b: j,
                        opacity: self.params.link_max_opacity * (1.0 - d / max_d),
                    });
                }
            }
        }
        out
    }
}
