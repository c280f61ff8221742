use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::PARALLAX_AMPLITUDE;
use crate::i18n::tr;
use crate::prefs::PrefsContext;

/// Translation in pixels for a pointer at `(client_x, client_y)` in a
/// `width` by `height` viewport. The centre maps to zero, the edges to
/// the full amplitude.
pub fn parallax_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (client_x / width - 0.5) * 2.0;
    let y = (client_y / height - 0.5) * 2.0;
    (x * PARALLAX_AMPLITUDE, y * PARALLAX_AMPLITUDE)
}

pub fn translate(dx: f64, dy: f64) -> String {
    format!("translate({}px, {}px)", dx, dy)
}

/// Latest pointer position waiting for the next animation frame. Only one
/// frame is ever requested at a time; newer positions overwrite older ones.
#[derive(Default)]
struct FrameSlot {
    pending: Option<(f64, f64)>,
    scheduled: bool,
}

fn viewport() -> (f64, f64) {
    let Some(win) = window() else { return (0.0, 0.0) };
    let width = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn apply_effect(section: &NodeRef, content: &NodeRef, client_x: f64, client_y: f64) {
    let (width, height) = viewport();
    let (dx, dy) = parallax_offset(client_x, client_y, width, height);
    if let Some(content) = content.cast::<HtmlElement>() {
        let _ = content.style().set_property("transform", &translate(dx, dy));
    }
    if let Some(section) = section.cast::<HtmlElement>() {
        let style = section.style();
        let _ = style.set_property("--mouse-x", &format!("{}px", client_x));
        let _ = style.set_property("--mouse-y", &format!("{}px", client_y));
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_book: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let prefs = use_context::<PrefsContext>();
    let lang = prefs.map(|p| p.lang).unwrap_or_default();
    let section_ref = use_node_ref();
    let content_ref = use_node_ref();
    let slot = use_mut_ref(FrameSlot::default);

    let schedule = {
        let section_ref = section_ref.clone();
        let content_ref = content_ref.clone();
        let slot = slot.clone();
        Rc::new(move |client_x: f64, client_y: f64| {
            let mut current = slot.borrow_mut();
            current.pending = Some((client_x, client_y));
            if current.scheduled {
                return;
            }
            let Some(win) = window() else { return };
            current.scheduled = true;
            let (section_ref, content_ref, slot) = (section_ref.clone(), content_ref.clone(), slot.clone());
            let frame = Closure::once_into_js(move || {
                let pending = {
                    let mut current = slot.borrow_mut();
                    current.scheduled = false;
                    current.pending.take()
                };
                if let Some((x, y)) = pending {
                    apply_effect(&section_ref, &content_ref, x, y);
                }
            });
            if win.request_animation_frame(frame.unchecked_ref()).is_err() {
                current.scheduled = false;
            }
        })
    };

    let onmousemove = {
        let schedule = schedule.clone();
        Callback::from(move |e: MouseEvent| schedule(e.client_x() as f64, e.client_y() as f64))
    };

    let ontouchmove = {
        let schedule = schedule.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().item(0) {
                schedule(touch.client_x() as f64, touch.client_y() as f64);
            }
        })
    };

    let reset = {
        let content_ref = content_ref.clone();
        let slot = slot.clone();
        Rc::new(move || {
            slot.borrow_mut().pending = None;
            if let Some(content) = content_ref.cast::<HtmlElement>() {
                let _ = content.style().set_property("transform", &translate(0.0, 0.0));
            }
        })
    };
    let onmouseleave = {
        let reset = reset.clone();
        Callback::from(move |_: MouseEvent| reset())
    };
    let ontouchend = Callback::from(move |_: TouchEvent| reset());

    let on_cta = {
        let on_book = props.on_book.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Opening booking modal from hero");
            on_book.emit(());
        })
    };

    html! {
        <header class="hero" ref={section_ref} {onmousemove} {ontouchmove} {onmouseleave} {ontouchend}>
            <div class="hero-background"></div>
            <div class="hero-content" ref={content_ref}>
                <h1 class="hero-title" data-i18n="hero.title">{ tr(lang, "hero.title") }</h1>
                <p class="hero-subtitle" data-i18n="hero.subtitle">{ tr(lang, "hero.subtitle") }</p>
                <div class="hero-actions">
                    <a href="#contact" class="btn btn-primary btn-lg" data-i18n="hero.cta" onclick={on_cta}>
                        { tr(lang, "hero.cta") }
                    </a>
                    <a href="#tech" class="btn btn-secondary btn-lg" data-i18n="hero.explore">
                        { tr(lang, "hero.explore") }
                    </a>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_still() {
        assert_eq!(parallax_offset(500.0, 400.0, 1000.0, 800.0), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_full_amplitude() {
        assert_eq!(parallax_offset(0.0, 0.0, 1000.0, 800.0), (-20.0, -20.0));
        assert_eq!(parallax_offset(1000.0, 800.0, 1000.0, 800.0), (20.0, 20.0));
        assert_eq!(parallax_offset(750.0, 200.0, 1000.0, 800.0), (10.0, -10.0));
    }

    #[test]
    fn zero_viewport_does_not_divide() {
        assert_eq!(parallax_offset(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn translate_css() {
        assert_eq!(translate(0.0, 0.0), "translate(0px, 0px)");
        assert_eq!(translate(-2.5, 10.0), "translate(-2.5px, 10px)");
    }
}
