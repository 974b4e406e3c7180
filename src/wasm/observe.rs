//! Scroll-triggered one-shot reveals.

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::frame::after;
use super::select_all;
use crate::config::{dom, FxConfig};
use crate::reveal::{skill_fill, RevealLatch};

/// Watch `elements` and call `on_reveal` for each at most once, the first time
/// it crosses `threshold`. Revealed elements are unobserved.
pub fn observe_once(
    elements: Vec<Element>,
    threshold: f64,
    mut on_reveal: impl FnMut(&Element) -> Result<(), JsValue> + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let mut latch = RevealLatch::new(threshold);
    for _ in &elements {
        latch.track();
    }

    let tracked = elements.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let target = entry.target();
            let Some(index) = tracked.iter().position(|el| *el == target) else {
                continue;
            };
            let fraction = if entry.is_intersecting() {
                entry.intersection_ratio()
            } else {
                0.0
            };
            if latch.offer(index, fraction) {
                observer.unobserve(&target);
                if let Err(e) = on_reveal(&target) {
                    log::warn!("reveal failed: {e:?}");
                }
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in &elements {
        observer.observe(el);
    }
    Ok(observer)
}

pub fn reveal_section(section: &Element) -> Result<(), JsValue> {
    section.class_list().add_1(dom::VISIBLE)?;
    log::debug!("section revealed: {}", section.id());
    Ok(())
}

/// Snap the bar to 0% and, after the fill delay, to its `data-width`; the
/// page's CSS transition does the animating.
pub fn fill_skill_bar(bar: &HtmlElement, delay_ms: u32) -> Result<(), JsValue> {
    // No usable data-width: keep whatever width the stylesheet gives the bar
    // rather than snapping it to 0% and clearing it.
    let Some(plan) = skill_fill(bar.get_attribute(dom::SKILL_WIDTH_ATTR).as_deref(), delay_ms) else {
        return Ok(());
    };
    bar.style().set_property("width", plan.start)?;

    let bar = bar.clone();
    after(plan.delay_ms, move || {
        if let Err(e) = bar.style().set_property("width", &plan.target) {
            log::warn!("skill bar fill failed: {e:?}");
        }
    });
    Ok(())
}

pub fn watch_sections(document: &Document, cfg: &FxConfig) -> Result<IntersectionObserver, JsValue> {
    let sections = select_all(document, dom::SECTIONS)?;
    log::info!("watching {} sections", sections.len());
    observe_once(sections, cfg.section_threshold, reveal_section)
}

pub fn watch_skill_bars(document: &Document, cfg: &FxConfig) -> Result<IntersectionObserver, JsValue> {
    let bars = select_all(document, dom::SKILL_BARS)?;
    log::info!("watching {} skill bars", bars.len());
    let delay_ms = cfg.skill_fill_delay_ms;
    observe_once(bars, cfg.skill_threshold, move |el| {
        fill_skill_bar(el.dyn_ref::<HtmlElement>().ok_or("skill bar is not an HTML element")?, delay_ms)
    })
}
