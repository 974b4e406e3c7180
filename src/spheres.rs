//! Drifting, spinning wireframe spheres.

use glam::{Mat4, Vec2, Vec3};

use crate::config::FxConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Euler angles around x and y, in radians.
    pub rotation: Vec2,
}

impl Sphere {
    pub fn spawn(cfg: &FxConfig, rng: &mut impl FnMut() -> f64) -> Self {
        let mut unit = || (rng() as f32 - 0.5) * 2.0;
        let position = Vec3::new(unit(), unit(), unit()) * cfg.sphere_bound;
        let velocity = Vec3::new(unit(), unit(), unit()) * cfg.sphere_speed;
        Self {
            position,
            velocity,
            rotation: Vec2::ZERO,
        }
    }

    /// One frame: drift, spin, then flip any axis that is past `bound`.
    ///
    /// The flip ignores the direction of travel, so a sphere can overshoot the
    /// bound by one frame of velocity.
    pub fn step(&mut self, spin: f32, bound: f32) {
        self.position += self.velocity;
        self.rotation += Vec2::splat(spin);
        for axis in 0..3 {
            if self.position[axis].abs() > bound {
                self.velocity[axis] = -self.velocity[axis];
            }
        }
    }

    /// Model matrix: translate, then rotate x, then y.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
    }
}

#[derive(Debug, Clone)]
pub struct SphereField {
    spheres: Vec<Sphere>,
    spin: f32,
    bound: f32,
}

impl SphereField {
    pub fn new(cfg: &FxConfig, rng: &mut impl FnMut() -> f64) -> Self {
        let spheres = (0..cfg.sphere_count)
            .map(|_| Sphere::spawn(cfg, rng))
            .collect();
        Self {
            spheres,
            spin: cfg.sphere_spin,
            bound: cfg.sphere_bound,
        }
    }

    pub fn tick(&mut self) {
        let (spin, bound) = (self.spin, self.bound);
        for s in &mut self.spheres {
            s.step(spin, bound);
        }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn bound(&self) -> f32 {
        self.bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_stays_in_cube() {
        let cfg = FxConfig::default();
        let mut seq = [0.0, 0.5, 0.999, 0.25, 0.75, 0.0].into_iter().cycle();
        let s = Sphere::spawn(&cfg, &mut || seq.next().unwrap());
        assert_eq!(s.position.x, -4.0);
        assert_eq!(s.position.y, 0.0);
        assert!(s.position.z < 4.0 && s.position.z > 3.99);
        assert!((s.velocity.x - -0.005).abs() < 1e-7);
        assert!((s.velocity.y - 0.005).abs() < 1e-7);
        assert!((s.velocity.z - -0.01).abs() < 1e-7);
    }

    #[test]
    fn flips_past_bound() {
        let mut s = Sphere {
            position: Vec3::new(3.995, 0.0, -3.995),
            velocity: Vec3::new(0.01, 0.01, -0.01),
            rotation: Vec2::ZERO,
        };
        s.step(0.01, 4.0);
        assert_eq!(s.velocity, Vec3::new(-0.01, 0.01, 0.01));
        assert!((s.rotation.x - 0.01).abs() < 1e-7);
        assert!((s.rotation.y - 0.01).abs() < 1e-7);
        s.step(0.01, 4.0);
        assert!(s.position.x.abs() <= 4.0);
        assert!(s.position.z.abs() <= 4.0);
    }

    #[test]
    fn count_is_fixed() {
        let cfg = FxConfig::default();
        let mut field = SphereField::new(&cfg, &mut || 0.9);
        for _ in 0..100 {
            field.tick();
        }
        assert_eq!(field.spheres().len(), 10);
    }

    #[test]
    fn model_matrix_translates() {
        let s = Sphere {
            position: Vec3::new(1.0, 2.0, 3.0),
            velocity: Vec3::ZERO,
            rotation: Vec2::ZERO,
        };
        let p = s.model_matrix().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }
}
