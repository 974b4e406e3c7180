//! Click handlers: the avatar wobble and in-page navigation.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions};

use super::select_all;
use crate::config::{dom, FxConfig};
use crate::nav::{active_states, fragment_target};

fn avatar_keyframes(cfg: &FxConfig) -> Result<Array, JsValue> {
    let frames = Array::new();
    for transform in cfg.avatar_keyframes {
        let frame = Object::new();
        Reflect::set(&frame, &"transform".into(), &transform.into())?;
        frames.push(&frame);
    }
    Ok(frames)
}

fn avatar_timing(cfg: &FxConfig) -> Result<Object, JsValue> {
    let timing = Object::new();
    Reflect::set(&timing, &"duration".into(), &cfg.avatar_duration_ms.into())?;
    Reflect::set(&timing, &"easing".into(), &cfg.avatar_easing.into())?;
    Ok(timing)
}

/// `element.animate(keyframes, timing)`; every call starts a new animation.
pub fn play(element: &Element, keyframes: &JsValue, timing: &JsValue) -> Result<(), JsValue> {
    let animate: Function = Reflect::get(element, &"animate".into())?.dyn_into()?;
    animate.call2(element, keyframes, timing)?;
    Ok(())
}

pub fn bind_avatar(document: &Document, cfg: &FxConfig) -> Result<(), JsValue> {
    let avatar = document
        .query_selector(dom::AVATAR)?
        .ok_or("avatar not found")?;
    let keyframes: JsValue = avatar_keyframes(cfg)?.into();
    let timing: JsValue = avatar_timing(cfg)?.into();

    let target = avatar.clone();
    let click = Closure::wrap(Box::new(move || {
        if let Err(e) = play(&target, &keyframes, &timing) {
            log::warn!("avatar animation failed: {e:?}");
        }
    }) as Box<dyn FnMut()>);
    avatar.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
    click.forget();
    Ok(())
}

/// Hook every nav link; returns how many were bound.
pub fn bind_nav(document: &Document) -> Result<usize, JsValue> {
    let links = select_all(document, dom::NAV_LINKS)?;
    for link in &links {
        let doc = document.clone();
        let target = link.clone();
        let click = Closure::wrap(Box::new(move |e: Event| {
            e.prevent_default();
            if let Err(err) = follow(&doc, &target) {
                log::warn!("nav click failed: {err:?}");
            }
        }) as Box<dyn FnMut(Event)>);
        link.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }
    Ok(links.len())
}

/// Smooth-scroll to the link's fragment target, if it exists, and make the
/// link's parent the only active nav item.
pub fn follow(document: &Document, link: &Element) -> Result<(), JsValue> {
    let href = link.get_attribute("href").unwrap_or_default();
    if let Some(section) = fragment_target(&href).and_then(|id| document.get_element_by_id(id)) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
    log::debug!("nav: {href}");

    let items = select_all(document, dom::NAV_ITEMS)?;
    let parent = link.parent_element();
    let clicked = items
        .iter()
        .position(|item| Some(item) == parent.as_ref())
        .unwrap_or(usize::MAX);
    for (item, active) in items.iter().zip(active_states(items.len(), clicked)) {
        item.class_list().toggle_with_force(dom::ACTIVE, active)?;
    }
    if clicked == usize::MAX {
        if let Some(parent) = parent {
            parent.class_list().add_1(dom::ACTIVE)?;
        }
    }
    Ok(())
}
