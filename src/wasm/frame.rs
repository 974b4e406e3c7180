use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Call `tick` once per display frame for as long as the page lives.
pub fn every_frame(mut tick: impl FnMut() + 'static) -> Result<(), JsValue> {
    // The slot holds the frame closure so that it can re-request itself;
    // `Option` lets us build the closure first and store it afterwards.
    let f: FrameSlot = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        tick();

        // schedule next
        if let Err(e) = request(&f) {
            log::warn!("animation loop stopped: {e:?}");
        }
    }) as Box<dyn FnMut()>));

    request(&g)
}

fn request(slot: &FrameSlot) -> Result<(), JsValue> {
    let slot = slot.borrow();
    let callback = slot.as_ref().ok_or("frame callback missing")?;
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

/// Run `f` once after `ms` milliseconds. The timer cannot be cancelled.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(ms, f).forget();
}
