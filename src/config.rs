//! Tunables for every effect on the page.
//!
//! Nothing here is read from the page; the defaults are the page's look.

use crate::typewriter::TypeLine;

/// Element ids, selectors and class names the effects poke.
pub mod dom {
    pub const PARTICLE_CANVAS: &str = "particle-bg";
    pub const SPHERE_CANVAS: &str = "three-canvas";
    pub const INTRO: &str = "intro";
    pub const CONTACT: &str = "contact";
    pub const AVATAR: &str = ".avata";
    pub const NAV_LINKS: &str = "nav li a";
    pub const NAV_ITEMS: &str = "nav li";
    pub const SECTIONS: &str = ".cv-section";
    pub const SKILL_BARS: &str = ".skill-bar";
    pub const SKILL_WIDTH_ATTR: &str = "data-width";

    pub const VISIBLE: &str = "visible";
    pub const ACTIVE: &str = "active";
}

/// Intro lines, typed in order.
pub static INTRO_LINES: [TypeLine; 3] = [
    TypeLine {
        target: "hello",
        text: "XIN CHÀO, TÊN TỚ LÀ ",
        char_delay_ms: 40,
        next_delay_ms: 250,
    },
    TypeLine {
        target: "name",
        text: "KHẢ NHƯ",
        char_delay_ms: 70,
        next_delay_ms: 350,
    },
    TypeLine {
        target: "job",
        text: "Front-end Developer",
        char_delay_ms: 45,
        next_delay_ms: 400,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct FxConfig {
    pub particle_count: usize,
    pub particle_color: &'static str,
    pub particle_min_radius: f64,
    pub particle_max_radius: f64,
    /// Velocity components are drawn from `[-particle_speed, particle_speed)`.
    pub particle_speed: f64,

    pub sphere_count: usize,
    pub sphere_radius: f32,
    pub sphere_segments: u16,
    /// 0xRRGGBB
    pub sphere_color: u32,
    pub sphere_speed: f32,
    pub sphere_spin: f32,
    /// Soft bound on every axis, also the half-width of the spawn cube.
    pub sphere_bound: f32,

    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_z: f32,

    pub intro_delay_ms: u32,
    pub typing_start_delay_ms: u32,
    pub contact_delay_ms: u32,

    pub section_threshold: f64,
    pub skill_threshold: f64,
    pub skill_fill_delay_ms: u32,

    pub avatar_keyframes: [&'static str; 3],
    pub avatar_duration_ms: f64,
    pub avatar_easing: &'static str,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            particle_color: "rgba(248, 113, 113, 0.5)",
            particle_min_radius: 1.0,
            particle_max_radius: 3.0,
            particle_speed: 0.25,

            sphere_count: 10,
            sphere_radius: 0.3,
            sphere_segments: 32,
            sphere_color: 0xf87171,
            sphere_speed: 0.01,
            sphere_spin: 0.01,
            sphere_bound: 4.0,

            camera_fov_deg: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            camera_z: 5.0,

            intro_delay_ms: 200,
            typing_start_delay_ms: 700,
            contact_delay_ms: 200,

            section_threshold: 0.2,
            skill_threshold: 0.5,
            skill_fill_delay_ms: 100,

            avatar_keyframes: [
                "scale(1.07) rotate(-2deg)",
                "scale(1.11) rotate(6deg)",
                "scale(1.07) rotate(-2deg)",
            ],
            avatar_duration_ms: 400.0,
            avatar_easing: "cubic-bezier(.4,2,.3,1)",
        }
    }
}

impl FxConfig {
    /// Sphere color as linear RGBA floats for the line shader.
    pub fn sphere_rgba(&self) -> [f32; 4] {
        let c = self.sphere_color;
        [
            ((c >> 16) & 0xff) as f32 / 255.0,
            ((c >> 8) & 0xff) as f32 / 255.0,
            (c & 0xff) as f32 / 255.0,
            1.0,
        ]
    }
}
