use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::error::{Error, Result};

pub const REVEAL_TARGETS: &str =
    ".hero-title, .hero-subtitle, .hero-actions, .section-title, .section-desc, .card";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Fades page elements in the first time they scroll into view. Each
/// element is unobserved after it is revealed, so it only animates once.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        move |_| {
            let watcher = match observe_targets() {
                Ok(watcher) => Some(watcher),
                Err(e) => {
                    warn!("Reveal-on-scroll disabled: {}", e);
                    None
                }
            };
            move || {
                if let Some((observer, _callback)) = watcher {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}

fn observe_targets() -> Result<(IntersectionObserver, ObserverCallback)> {
    let document = window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)?;

    let callback: ObserverCallback = Closure::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                let target = entry.target();
                let _ = target.class_list().add_1("visible");
                observer.unobserve(&target);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin("0px");
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let targets = document.query_selector_all(REVEAL_TARGETS)?;
    for i in 0..targets.length() {
        if let Some(el) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            el.class_list().add_1("fade-in")?;
            observer.observe(&el);
        }
    }
    debug!("Watching {} elements for reveal", targets.length());
    Ok((observer, callback))
}
