use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::i18n::tr;
use crate::prefs::PrefsContext;
use crate::sponsors::{toggle_label, visible_brands};

#[function_component(SponsorGrid)]
pub fn sponsor_grid() -> Html {
    let lang = use_context::<PrefsContext>().map(|p| p.lang).unwrap_or_default();
    let showing_all = use_state(|| false);
    let section_ref = use_node_ref();

    let on_toggle = {
        let showing_all = showing_all.clone();
        let section_ref = section_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let expand = !*showing_all;
            showing_all.set(expand);
            if !expand {
                if let Some(section) = section_ref.cast::<Element>() {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    section.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        })
    };

    html! {
        <section id="sponsors" class="sponsors" ref={section_ref}>
            <h2 class="section-title" data-i18n="section.sponsors">{ tr(lang, "section.sponsors") }</h2>
            <div id="sponsors-grid" class="sponsors-grid">
                { for visible_brands(*showing_all).iter().map(|brand| html! {
                    <div class="sponsor" key={*brand}>{ *brand }</div>
                }) }
            </div>
            <button id="show-more-sponsors" class="btn btn-secondary" onclick={on_toggle}>
                { toggle_label(*showing_all) }
            </button>
        </section>
    }
}
