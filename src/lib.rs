//! Background effects and intro animations for a single portfolio page.
//!
//! The effect state and its per-frame updates live in plain modules so they
//! can be exercised on the host; the `wasm` module wires them to the page.

pub mod config;
pub mod mesh;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod spheres;
pub mod typewriter;
pub mod viewport;

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element};

    use crate::config::FxConfig;

    pub mod backdrop;
    pub mod frame;
    pub mod interact;
    pub mod intro;
    pub mod observe;
    pub mod render;
    pub mod resize;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        if document.ready_state() == "loading" {
            let doc = document.clone();
            let ready = Closure::once(move || boot(&doc));
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                ready.as_ref().unchecked_ref(),
            )?;
            ready.forget();
        } else {
            boot(&document);
        }
        Ok(())
    }

    /// Start every effect. One missing collaborator only skips its own effect.
    fn boot(document: &Document) {
        let cfg = FxConfig::default();

        report("particle field", backdrop::start_on(document, &cfg).map(drop));
        report("sphere field", render::start_on(document, &cfg).map(drop));
        report("intro", intro::start(document, &cfg));
        report("avatar", interact::bind_avatar(document, &cfg));
        report("navigation", interact::bind_nav(document).map(drop));
        report("section reveal", observe::watch_sections(document, &cfg).map(drop));
        report("skill bars", observe::watch_skill_bars(document, &cfg).map(drop));
    }

    /// Every element matching `selector`, in document order.
    pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
        let list = document.query_selector_all(selector)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn report(effect: &str, result: Result<(), JsValue>) {
        match result {
            Ok(()) => log::info!("{effect}: started"),
            Err(e) => log::warn!("{effect}: skipped ({e:?})"),
        }
    }
}
