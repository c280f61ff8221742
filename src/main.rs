use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

mod chat;
mod config;
mod error;
mod i18n;
mod lifecycle;
mod prefs;
mod referrer;
mod sponsors;
mod storage;
mod team;
mod components {
    pub mod booking_modal;
    pub mod chat_widget;
    pub mod contact_form;
    pub mod cookie_banner;
    pub mod hero;
    pub mod nav;
    pub mod reveal;
    pub mod scroll_to_top;
    pub mod sponsors;
    pub mod team;
    pub mod welcome_toast;
}
mod pages {
    pub mod landing;
}

use error::{Error, Result};
use pages::landing::Landing;
use prefs::{Prefs, PrefsContext};

/// Mirrors the preferences onto the document: `data-theme` and `lang` on
/// the root element, and the font family on the body.
fn apply_prefs(prefs: &Prefs) -> Result<()> {
    let document = window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)?;
    let root = document
        .document_element()
        .ok_or_else(|| Error::MissingElement("html".to_string()))?;
    root.set_attribute("data-theme", prefs.theme.as_str())?;
    root.set_attribute("lang", prefs.lang.html_lang())?;
    if let Some(body) = document.body() {
        body.style().set_property("font-family", prefs.lang.font_family())?;
    }
    Ok(())
}

#[function_component]
fn App() -> Html {
    let prefs = use_reducer(Prefs::load);

    {
        let current = (*prefs).clone();
        use_effect_with_deps(
            move |prefs| {
                if let Err(e) = apply_prefs(prefs) {
                    warn!("Could not apply preferences: {}", e);
                }
                || ()
            },
            current,
        );
    }

    html! {
        <ContextProvider<PrefsContext> context={prefs}>
            <Landing />
        </ContextProvider<PrefsContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
