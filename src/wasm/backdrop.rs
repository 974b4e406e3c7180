//! Particle field painted on a full-window 2D canvas.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use super::{frame, resize};
use crate::config::{dom, FxConfig};
use crate::particles::ParticleField;
use crate::viewport::Viewport;

pub struct Backdrop {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    field: ParticleField,
    color: &'static str,
}

impl Backdrop {
    pub fn new(canvas: HtmlCanvasElement, cfg: &FxConfig, vp: Viewport) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context not supported")?
            .dyn_into()?;

        let (w, h) = vp.css_size();
        canvas.set_width(w);
        canvas.set_height(h);
        let field = ParticleField::new(w as f64, h as f64, cfg, &mut js_sys::Math::random);

        Ok(Self {
            canvas,
            ctx,
            field,
            color: cfg.particle_color,
        })
    }

    /// Match the canvas to the window. Particles keep their positions.
    pub fn resize(&mut self, vp: Viewport) {
        let (w, h) = vp.css_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.field.resize(w as f64, h as f64);
    }

    /// Clear, advance every particle, repaint.
    pub fn frame(&mut self) -> Result<(), JsValue> {
        let (w, h) = self.field.bounds();
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.field.tick();

        self.ctx.set_fill_style_str(self.color);
        for p in self.field.particles() {
            self.ctx.begin_path();
            self.ctx.arc(p.x, p.y, p.radius, 0.0, TAU)?;
            self.ctx.fill();
        }
        Ok(())
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }
}

/// Build the backdrop on `canvas`, follow window resizes and animate forever.
pub fn start(canvas: HtmlCanvasElement, cfg: &FxConfig) -> Result<Rc<RefCell<Backdrop>>, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let backdrop = Rc::new(RefCell::new(Backdrop::new(canvas, cfg, resize::current(&window)?)?));

    let on_resize = backdrop.clone();
    resize::on_resize(move |vp| on_resize.borrow_mut().resize(vp))?;

    let animated = backdrop.clone();
    let mut reported = false;
    frame::every_frame(move || {
        if let Err(e) = animated.borrow_mut().frame() {
            if !reported {
                log::warn!("particle frame failed: {e:?}");
                reported = true;
            }
        }
    })?;

    log::info!("particle field: {} particles", backdrop.borrow().field.particles().len());
    Ok(backdrop)
}

pub fn start_on(document: &Document, cfg: &FxConfig) -> Result<Rc<RefCell<Backdrop>>, JsValue> {
    let canvas = document
        .get_element_by_id(dom::PARTICLE_CANVAS)
        .ok_or("particle canvas not found")?
        .dyn_into::<HtmlCanvasElement>()?;
    start(canvas, cfg)
}
