use yew::prelude::*;

use crate::i18n::tr;
use crate::prefs::{toggle, PrefsAction, PrefsContext};

const LINKS: [(&str, &str); 5] = [
    ("#sponsors", "nav.partners"),
    ("#works", "nav.work"),
    ("#tech", "nav.tech"),
    ("#team", "nav.team"),
    ("#contact", "nav.contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let prefs = use_context::<PrefsContext>();
    let Some(prefs) = prefs else {
        return html! {};
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    // Desktop and mobile buttons dispatch to the same store, so their
    // glyphs and labels can never drift apart.
    let toggle_theme = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| toggle(&prefs, PrefsAction::ToggleTheme))
    };
    let toggle_lang = {
        let prefs = prefs.clone();
        Callback::from(move |_: MouseEvent| toggle(&prefs, PrefsAction::ToggleLang))
    };

    let lang = prefs.lang;
    let links = LINKS.iter().map(|(href, key)| {
        html! {
            <a href={*href} class="nav-link" data-i18n={*key} onclick={close_menu.clone()}>
                { tr(lang, key) }
            </a>
        }
    });

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">{"Nisay Tech"}</a>
                <div class="nav-links">
                    { for links.clone() }
                    <button id="theme-toggle" class="icon-btn" aria-label="Toggle theme" onclick={toggle_theme.clone()}>
                        { prefs.theme.glyph() }
                    </button>
                    <button id="lang-toggle" class="icon-btn" aria-label="Switch language" onclick={toggle_lang.clone()}>
                        { lang.toggle_label() }
                    </button>
                </div>
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then_some("mobile-menu-open"))}>
                { for links }
                <div class="mobile-toggles">
                    <button id="theme-toggle-mobile" class="icon-btn" aria-label="Toggle theme" onclick={toggle_theme}>
                        { prefs.theme.glyph() }
                    </button>
                    <button id="lang-toggle-mobile" class="icon-btn" aria-label="Switch language" onclick={toggle_lang}>
                        { lang.toggle_label() }
                    </button>
                </div>
            </div>
        </nav>
    }
}
