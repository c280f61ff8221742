use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{window, HtmlElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{OVERLAY_REMOVE_DELAY, TOAST_AUTO_DISMISS, TOAST_SHOW_DELAY};
use crate::lifecycle::{Overlay, Phase, Transition};
use crate::referrer::{escape_html, resolve_source};

fn page_context() -> (String, String) {
    let Some(win) = window() else { return (String::new(), String::new()) };
    let referrer = win.document().map(|d| d.referrer()).unwrap_or_default();
    let host = win.location().hostname().unwrap_or_default();
    (referrer, host)
}

/// Greets visitors arriving from another site. Resolved once per page load.
#[function_component(WelcomeToast)]
pub fn welcome_toast() -> Html {
    let ref_param = use_search_param("ref".to_string());
    let original_url = use_search_param("original_url".to_string());
    let source = use_state(move || {
        let (referrer, host) = page_context();
        let source = resolve_source(ref_param.as_deref(), original_url.as_deref(), &referrer, &host);
        if let Some(source) = &source {
            info!("Welcome toast for visitor from {}", source);
        }
        source
    });
    let overlay = use_reducer(Overlay::default);
    let greeting_ref = use_node_ref();

    {
        let overlay = overlay.clone();
        let greeting_ref = greeting_ref.clone();
        let has_source = source.is_some();
        let source = (*source).clone();
        use_effect_with_deps(
            move |_| {
                let timers = has_source.then(|| {
                    if let (Some(p), Some(source)) = (greeting_ref.cast::<HtmlElement>(), source) {
                        p.set_inner_html(&format!(
                            "Welcome visitor from <strong>{}</strong>!",
                            escape_html(&source)
                        ));
                    }
                    let show = {
                        let overlay = overlay.clone();
                        Timeout::new(TOAST_SHOW_DELAY, move || overlay.dispatch(Transition::Show))
                    };
                    let dismiss = Timeout::new(TOAST_AUTO_DISMISS, move || {
                        overlay.dispatch(Transition::Dismiss)
                    });
                    (show, dismiss)
                });
                move || drop(timers)
            },
            (),
        );
    }

    {
        let phase = overlay.phase;
        let overlay = overlay.clone();
        use_effect_with_deps(
            move |phase| {
                let removal = (*phase == Phase::Leaving).then(|| {
                    Timeout::new(OVERLAY_REMOVE_DELAY, move || overlay.dispatch(Transition::Remove))
                });
                move || drop(removal)
            },
            phase,
        );
    }

    if source.is_none() || !overlay.phase.is_attached() {
        return html! {};
    }

    let on_close = {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| overlay.dispatch(Transition::Dismiss))
    };

    html! {
        <div class={classes!("welcome-toast", overlay.phase.is_visible().then_some("visible"))}>
            <span class="toast-icon">{"👋"}</span>
            <div class="toast-content">
                <p ref={greeting_ref}></p>
                <span class="toast-sub">{"If they don't want you. I'm right here 4U."}</span>
            </div>
            <button class="toast-close" onclick={on_close}>{"×"}</button>
        </div>
    }
}
