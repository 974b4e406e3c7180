//! Wireframe spheres drawn with WebGL2 line lists.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use super::{frame, resize};
use crate::config::{dom, FxConfig};
use crate::mesh::wire_sphere;
use crate::spheres::SphereField;
use crate::viewport::{PerspectiveCamera, Viewport};

const VERTEX_SHADER: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
uniform mat4 u_mvp;
void main() {
    gl_Position = u_mvp * vec4(a_position, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
uniform vec4 u_color;
out vec4 outColor;
void main() {
    outColor = u_color;
}
"#;

pub struct SphereScene {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    index_count: i32,
    u_mvp: WebGlUniformLocation,
    u_color: WebGlUniformLocation,
    color: [f32; 4],
    field: SphereField,
    camera: PerspectiveCamera,
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("cannot create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let msg = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(msg.into())
    }
}

fn link(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, JsValue> {
    let program = gl.create_program().ok_or("cannot create program")?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);
    if gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let msg = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(msg.into())
    }
}

impl SphereScene {
    pub fn new(canvas: HtmlCanvasElement, cfg: &FxConfig, vp: Viewport) -> Result<Self, JsValue> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        let vs = compile(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link(&gl, &vs, &fs)?;
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let mesh = wire_sphere(cfg.sphere_radius, cfg.sphere_segments);
        let vao = gl.create_vertex_array().ok_or("cannot create vertex array")?;
        gl.bind_vertex_array(Some(&vao));

        let vertices = gl.create_buffer().ok_or("cannot create vertex buffer")?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&vertices));
        gl.buffer_data_with_array_buffer_view(
            GL::ARRAY_BUFFER,
            &js_sys::Float32Array::from(mesh.positions.as_slice()),
            GL::STATIC_DRAW,
        );
        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, GL::FLOAT, false, 0, 0);

        let indices = gl.create_buffer().ok_or("cannot create index buffer")?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&indices));
        gl.buffer_data_with_array_buffer_view(
            GL::ELEMENT_ARRAY_BUFFER,
            &js_sys::Uint16Array::from(mesh.indices.as_slice()),
            GL::STATIC_DRAW,
        );
        gl.bind_vertex_array(None);

        let u_mvp = gl
            .get_uniform_location(&program, "u_mvp")
            .ok_or("u_mvp missing")?;
        let u_color = gl
            .get_uniform_location(&program, "u_color")
            .ok_or("u_color missing")?;

        gl.enable(GL::DEPTH_TEST);
        // transparent so the particle canvas shows through
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        let mut scene = Self {
            gl,
            canvas,
            program,
            vao,
            index_count: mesh.indices.len() as i32,
            u_mvp,
            u_color,
            color: cfg.sphere_rgba(),
            field: SphereField::new(cfg, &mut js_sys::Math::random),
            camera: PerspectiveCamera::new(cfg, vp.aspect()),
        };
        scene.resize(vp)?;
        Ok(scene)
    }

    /// New aspect for the camera, new backing size for the canvas.
    pub fn resize(&mut self, vp: Viewport) -> Result<(), JsValue> {
        self.camera.set_aspect(vp.aspect());

        let (bw, bh) = vp.backing_size();
        self.canvas.set_width(bw);
        self.canvas.set_height(bh);
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", vp.width))?;
        style.set_property("height", &format!("{}px", vp.height))?;
        self.gl.viewport(0, 0, bw as i32, bh as i32);
        Ok(())
    }

    pub fn frame(&mut self) {
        self.field.tick();

        let gl = &self.gl;
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.use_program(Some(&self.program));
        gl.bind_vertex_array(Some(&self.vao));
        gl.uniform4fv_with_f32_array(Some(&self.u_color), &self.color);

        let view_proj = self.camera.view_projection();
        for sphere in self.field.spheres() {
            let mvp = view_proj * sphere.model_matrix();
            gl.uniform_matrix4fv_with_f32_array(Some(&self.u_mvp), false, &mvp.to_cols_array());
            gl.draw_elements_with_i32(GL::LINES, self.index_count, GL::UNSIGNED_SHORT, 0);
        }
        gl.bind_vertex_array(None);
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

/// Build the sphere scene on `canvas`, follow window resizes and render forever.
pub fn start(canvas: HtmlCanvasElement, cfg: &FxConfig) -> Result<Rc<RefCell<SphereScene>>, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let scene = Rc::new(RefCell::new(SphereScene::new(canvas, cfg, resize::current(&window)?)?));

    let on_resize = scene.clone();
    resize::on_resize(move |vp| {
        if let Err(e) = on_resize.borrow_mut().resize(vp) {
            log::warn!("sphere canvas resize failed: {e:?}");
        }
    })?;

    let animated = scene.clone();
    frame::every_frame(move || animated.borrow_mut().frame())?;

    log::info!("sphere field: {} spheres", scene.borrow().field.spheres().len());
    Ok(scene)
}

pub fn start_on(document: &Document, cfg: &FxConfig) -> Result<Rc<RefCell<SphereScene>>, JsValue> {
    let canvas = document
        .get_element_by_id(dom::SPHERE_CANVAS)
        .ok_or("sphere canvas not found")?
        .dyn_into::<HtmlCanvasElement>()?;
    start(canvas, cfg)
}
