use portfolio_fx::config::{FxConfig, INTRO_LINES};
use portfolio_fx::particles::ParticleField;
use portfolio_fx::spheres::SphereField;
use portfolio_fx::typewriter::{Action, Typewriter};
use portfolio_fx::viewport::{PerspectiveCamera, Viewport};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[test]
fn particles_stay_on_canvas() {
    let cfg = FxConfig::default();
    for (seed, (w, h)) in [(1, (1920.0, 1080.0)), (7, (320.0, 640.0)), (42, (3.0, 2.0))] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut field = ParticleField::new(w, h, &cfg, &mut || rng.gen::<f64>());
        for _ in 0..20_000 {
            field.tick();
            for p in field.particles() {
                assert!((0.0..=w).contains(&p.x), "x={} outside [0,{w}]", p.x);
                assert!((0.0..=h).contains(&p.y), "y={} outside [0,{h}]", p.y);
            }
        }
        assert_eq!(field.particles().len(), cfg.particle_count);
    }
}

#[test]
fn particle_spawn_ranges() {
    let cfg = FxConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let field = ParticleField::new(800.0, 600.0, &cfg, &mut || rng.gen::<f64>());
    for p in field.particles() {
        assert!((1.0..3.0).contains(&p.radius));
        assert!((-0.25..0.25).contains(&p.vx));
        assert!((-0.25..0.25).contains(&p.vy));
    }
}

#[test]
fn spheres_respect_soft_bound() {
    let cfg = FxConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut field = SphereField::new(&cfg, &mut || rng.gen::<f64>());
    for _ in 0..50_000 {
        field.tick();
        for s in field.spheres() {
            let slack = s.velocity.abs();
            for axis in 0..3 {
                assert!(
                    s.position[axis].abs() <= field.bound() + slack[axis] + 1e-4,
                    "axis {axis} at {}",
                    s.position[axis]
                );
            }
        }
    }
}

#[test]
fn intro_types_every_line_in_order() {
    let mut tw = Typewriter::new(&INTRO_LINES);
    let mut completed = Vec::new();
    let mut frames = 0;
    while let Some(action) = tw.advance() {
        match action {
            Action::Type { target, text, .. } => {
                // never type into a line that has not started yet
                assert_eq!(target, INTRO_LINES[completed.len()].target);
                assert!(text.trim_end_matches('|').chars().count() < INTRO_LINES[completed.len()].text.chars().count());
                frames += 1;
            }
            Action::Complete { target, text, .. } => {
                assert_eq!(text, INTRO_LINES[completed.len()].text);
                completed.push(target);
            }
            Action::Finish => break,
        }
    }
    assert_eq!(completed, ["hello", "name", "job"]);
    assert_eq!(frames, 20 + 7 + 19);
    assert!(tw.is_done());
}

#[test]
fn resize_updates_camera_aspect() {
    let cfg = FxConfig::default();
    let mut cam = PerspectiveCamera::new(&cfg, Viewport::new(1024.0, 768.0, 1.0).aspect());
    for (w, h) in [(1920.0, 1080.0), (1920.0, 1080.0), (390.0, 844.0)] {
        let vp = Viewport::new(w, h, 2.0);
        cam.set_aspect(vp.aspect());
        assert_eq!(cam.aspect, (w / h) as f32);
        assert_eq!(vp.backing_size(), ((w * 2.0) as u32, (h * 2.0) as u32));
    }
}
