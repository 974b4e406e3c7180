use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Window};

use crate::viewport::Viewport;

pub fn current(window: &Window) -> Result<Viewport, JsValue> {
    let w = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let h = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    Ok(Viewport::new(w, h, window.device_pixel_ratio()))
}

/// Hand the fresh viewport to `handler` on every window resize.
pub fn on_resize(mut handler: impl FnMut(Viewport) + 'static) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let win = window.clone();
    let resize_closure = Closure::wrap(Box::new(move || match current(&win) {
        Ok(vp) => handler(vp),
        Err(e) => log::warn!("resize ignored: {e:?}"),
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();
    Ok(())
}
