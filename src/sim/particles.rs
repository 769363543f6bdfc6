//! Particles and the bounded particle pool
//!
//! Particles are purely visual. Their size and color are derived from age
//! every time they are read, so the only mutable state is position and age.

use glam::Vec2;

use crate::{Rgb, Rgba, lerp_rgb, with_alpha};

/// Draw shape of a particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleShape {
    Square,
    Triangle,
    Circle,
}

/// A single visual particle with a color fade and size ramp
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color_start: Rgb,
    pub color_end: Rgb,
    pub size_start: f32,
    pub size_end: f32,
    /// Seconds; a non-positive lifetime makes the particle dead on creation
    pub lifetime: f32,
    pub age: f32,
    pub shape: ParticleShape,
}

impl Particle {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pos: Vec2,
        vel: Vec2,
        color_start: Rgb,
        color_end: Rgb,
        size_start: f32,
        size_end: f32,
        lifetime: f32,
        shape: ParticleShape,
    ) -> Self {
        Self {
            pos,
            vel,
            color_start,
            color_end,
            size_start,
            size_end,
            lifetime,
            age: 0.0,
            shape,
        }
    }

    /// 0.0 at birth, 1.0 at death
    pub fn progress(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 1.0;
        }
        (self.age / self.lifetime).clamp(0.0, 1.0)
    }

    pub fn is_dead(&self) -> bool {
        self.age >= self.lifetime
    }

    /// Current size, interpolated from start to end
    pub fn size(&self) -> f32 {
        self.size_start + (self.size_end - self.size_start) * self.progress()
    }

    /// Current RGBA color; alpha fades from 255 to 0 over the lifetime
    pub fn color(&self) -> Rgba {
        let t = self.progress();
        let rgb = lerp_rgb(self.color_start, self.color_end, t);
        with_alpha(rgb, (255.0 * (1.0 - t)) as u8)
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.age += dt;
    }
}

/// Owns every live particle, capped at `max_particles`
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            max_particles,
        }
    }

    /// Add a batch, dropping the oldest particles if the pool overflows.
    /// Particles that are already dead never enter the pool.
    pub fn add(&mut self, batch: impl IntoIterator<Item = Particle>) {
        self.particles
            .extend(batch.into_iter().filter(|p| !p.is_dead()));
        if self.particles.len() > self.max_particles {
            let excess = self.particles.len() - self.max_particles;
            self.particles.drain(..excess);
        }
    }

    /// Advance all particles and remove the dead ones
    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.update(dt);
        }
        self.particles.retain(|p| !p.is_dead());
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
