//! Intro reveal and the typewriter driver.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::Document;

use super::frame::after;
use crate::config::{dom, FxConfig, INTRO_LINES};
use crate::typewriter::{Action, Typewriter};

type Shared = Rc<RefCell<Typewriter<'static>>>;

fn set_visible(document: &Document, id: &str, visible: bool) -> Result<(), JsValue> {
    if let Some(el) = document.get_element_by_id(id) {
        el.class_list().toggle_with_force(dom::VISIBLE, visible)?;
    }
    Ok(())
}

/// Hide the intro lines and contact block, then schedule the intro fade-in
/// and the typing sequence.
pub fn start(document: &Document, cfg: &FxConfig) -> Result<(), JsValue> {
    for line in INTRO_LINES.iter() {
        set_visible(document, line.target, false)?;
    }
    set_visible(document, dom::CONTACT, false)?;

    let doc = document.clone();
    after(cfg.intro_delay_ms, move || {
        if let Err(e) = set_visible(&doc, dom::INTRO, true) {
            log::warn!("intro reveal failed: {e:?}");
        }
    });

    let tw: Shared = Rc::new(RefCell::new(Typewriter::new(&INTRO_LINES)));
    let doc = document.clone();
    let contact_delay = cfg.contact_delay_ms;
    after(cfg.typing_start_delay_ms, move || step(doc, tw, contact_delay));
    Ok(())
}

/// Render one step and schedule the next. Missing elements are skipped but
/// the sequence keeps its timing.
fn step(document: Document, tw: Shared, contact_delay_ms: u32) {
    let Some(action) = tw.borrow_mut().advance() else {
        return;
    };
    if let Err(e) = apply(&document, &tw, action, contact_delay_ms) {
        log::warn!("typewriter stalled: {e:?}");
    }
}

fn apply(document: &Document, tw: &Shared, action: Action, contact_delay_ms: u32) -> Result<(), JsValue> {
    let wait_ms = match action {
        Action::Type { target, text, fresh, wait_ms } => {
            if let Some(el) = document.get_element_by_id(target) {
                if fresh {
                    el.class_list().remove_1(dom::VISIBLE)?;
                }
                el.set_text_content(Some(&text));
            }
            wait_ms
        }
        Action::Complete { target, text, wait_ms } => {
            if let Some(el) = document.get_element_by_id(target) {
                el.set_text_content(Some(text));
                el.class_list().add_1(dom::VISIBLE)?;
            }
            log::debug!("typed #{target}");
            wait_ms
        }
        Action::Finish => {
            let doc = document.clone();
            after(contact_delay_ms, move || {
                if let Err(e) = set_visible(&doc, dom::CONTACT, true) {
                    log::warn!("contact reveal failed: {e:?}");
                }
            });
            return Ok(());
        }
    };

    let doc = document.clone();
    let tw = tw.clone();
    after(wait_ms, move || step(doc, tw, contact_delay_ms));
    Ok(())
}
