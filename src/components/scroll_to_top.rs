use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SCROLL_TOP_THRESHOLD;

pub fn is_shown(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let (_, scroll_y) = use_window_scroll();

    let onclick = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button
            id="scroll-to-top"
            class={classes!("scroll-to-top", is_shown(scroll_y).then_some("visible"))}
            aria-label="Scroll to top"
            {onclick}
        >
            {"↑"}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_only_past_threshold() {
        assert!(!is_shown(0.0));
        assert!(!is_shown(300.0));
        assert!(is_shown(300.5));
        assert!(!is_shown(120.0));
    }
}
