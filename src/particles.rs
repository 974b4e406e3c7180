//! 2D bouncing dots behind the page.

use crate::config::FxConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
}

/// Advance one axis and reflect off `[0, max]`.
///
/// A coordinate that crossed an edge during this step is mirrored back inside;
/// one that was already outside (the canvas shrank) only has its velocity
/// pointed inward.
fn reflect(pos: &mut f64, vel: &mut f64, max: f64) {
    let prev = *pos;
    *pos += *vel;
    if *pos < 0.0 {
        *vel = vel.abs();
        if prev >= 0.0 {
            *pos = (-*pos).min(max);
        }
    } else if *pos > max {
        *vel = -vel.abs();
        if prev <= max {
            *pos = (2.0 * max - *pos).max(0.0);
        }
    }
}

impl Particle {
    pub fn spawn(width: f64, height: f64, cfg: &FxConfig, rng: &mut impl FnMut() -> f64) -> Self {
        let span = cfg.particle_max_radius - cfg.particle_min_radius;
        Self {
            x: rng() * width,
            y: rng() * height,
            radius: cfg.particle_min_radius + rng() * span,
            vx: (rng() * 2.0 - 1.0) * cfg.particle_speed,
            vy: (rng() * 2.0 - 1.0) * cfg.particle_speed,
        }
    }

    pub fn step(&mut self, width: f64, height: f64) {
        reflect(&mut self.x, &mut self.vx, width);
        reflect(&mut self.y, &mut self.vy, height);
    }
}

/// Fixed-size particle set plus the canvas bounds it bounces inside.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(width: f64, height: f64, cfg: &FxConfig, rng: &mut impl FnMut() -> f64) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(cfg.particle_count),
            width,
            height,
        };
        field.reinit(cfg, rng);
        field
    }

    /// Rebuild the whole set inside the current bounds.
    pub fn reinit(&mut self, cfg: &FxConfig, rng: &mut impl FnMut() -> f64) {
        self.particles.clear();
        for _ in 0..cfg.particle_count {
            self.particles
                .push(Particle::spawn(self.width, self.height, cfg, rng));
        }
    }

    pub fn tick(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.step(w, h);
        }
    }

    /// New canvas bounds; positions are left where they are.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(v: f64) -> impl FnMut() -> f64 {
        move || v
    }

    #[test]
    fn spawn_ranges() {
        let cfg = FxConfig::default();
        let low = Particle::spawn(800.0, 600.0, &cfg, &mut constant(0.0));
        assert_eq!((low.x, low.y, low.radius), (0.0, 0.0, 1.0));
        assert_eq!((low.vx, low.vy), (-0.25, -0.25));

        let mid = Particle::spawn(800.0, 600.0, &cfg, &mut constant(0.5));
        assert_eq!((mid.x, mid.y, mid.radius), (400.0, 300.0, 2.0));
        assert_eq!((mid.vx, mid.vy), (0.0, 0.0));
    }

    #[test]
    fn field_has_fixed_count() {
        let cfg = FxConfig::default();
        let mut field = ParticleField::new(640.0, 480.0, &cfg, &mut constant(0.3));
        assert_eq!(field.particles().len(), 100);
        for _ in 0..50 {
            field.tick();
        }
        field.reinit(&cfg, &mut constant(0.7));
        assert_eq!(field.particles().len(), 100);
    }

    #[test]
    fn crossing_an_edge_mirrors_back() {
        let mut p = Particle { x: 0.1, y: 99.9, radius: 1.0, vx: -0.25, vy: 0.25 };
        p.step(100.0, 100.0);
        assert!((p.x - 0.15).abs() < 1e-12);
        assert!(p.vx > 0.0);
        assert!((p.y - 99.85).abs() < 1e-12);
        assert!(p.vy < 0.0);
    }

    #[test]
    fn outside_after_shrink_walks_back() {
        let mut field = ParticleField {
            particles: vec![Particle { x: 500.0, y: 10.0, radius: 1.0, vx: 0.2, vy: 0.0 }],
            width: 800.0,
            height: 600.0,
        };
        field.resize(400.0, 600.0);
        field.tick();
        let p = field.particles()[0];
        assert!(p.vx < 0.0);
        assert!(p.x > 400.0, "not snapped into the new bounds");
        for _ in 0..1000 {
            field.tick();
        }
        assert!(field.particles()[0].x <= 400.0);
    }
}
