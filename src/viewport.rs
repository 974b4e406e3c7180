//! Viewport sizing and the fixed perspective camera.

use glam::{Mat4, Vec3};

use crate::config::FxConfig;

/// CSS-pixel size of the window plus its device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            device_pixel_ratio: if device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 },
        }
    }

    /// Width over height; 1 when the height is zero.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            (self.width / self.height) as f32
        } else {
            1.0
        }
    }

    /// Canvas size at one backing pixel per CSS pixel.
    pub fn css_size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    /// Canvas size scaled by the device pixel ratio.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.device_pixel_ratio).floor() as u32,
            (self.height * self.device_pixel_ratio).floor() as u32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub eye: Vec3,
}

impl PerspectiveCamera {
    pub fn new(cfg: &FxConfig, aspect: f32) -> Self {
        Self {
            fov_y_deg: cfg.camera_fov_deg,
            aspect,
            near: cfg.camera_near,
            far: cfg.camera_far,
            eye: Vec3::new(0.0, 0.0, cfg.camera_z),
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Looks down -z from `eye`.
    pub fn view_projection(&self) -> Mat4 {
        let proj = Mat4::perspective_rh_gl(
            self.fov_y_deg.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
        proj * Mat4::from_translation(-self.eye)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_handles_zero_height() {
        assert_eq!(Viewport::new(800.0, 0.0, 1.0).aspect(), 1.0);
        assert!((Viewport::new(1920.0, 1080.0, 1.0).aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn backing_scales_with_dpr() {
        let vp = Viewport::new(1280.0, 720.0, 1.5);
        assert_eq!(vp.css_size(), (1280, 720));
        assert_eq!(vp.backing_size(), (1920, 1080));
        assert_eq!(Viewport::new(10.0, 10.0, 0.0).device_pixel_ratio, 1.0);
    }

    #[test]
    fn origin_projects_to_center() {
        let cam = PerspectiveCamera::new(&FxConfig::default(), 16.0 / 9.0);
        let p = cam.view_projection().project_point3(Vec3::ZERO);
        assert!(p.x.abs() < 1e-6 && p.y.abs() < 1e-6);
        assert!(p.z > -1.0 && p.z < 1.0);
    }

    #[test]
    fn wider_aspect_squeezes_x() {
        let mut cam = PerspectiveCamera::new(&FxConfig::default(), 1.0);
        let square = cam.view_projection().project_point3(Vec3::X);
        cam.set_aspect(2.0);
        let wide = cam.view_projection().project_point3(Vec3::X);
        assert!((wide.x - square.x / 2.0).abs() < 1e-5);
        assert!((wide.y - square.y).abs() < 1e-6);
    }
}
