use gloo_timers::callback::Timeout;
use log::{info, warn};
use yew::prelude::*;

use crate::config::{BANNER_SHOW_DELAY, CONSENT_COOKIE_DAYS, CONSENT_KEY, OVERLAY_REMOVE_DELAY};
use crate::error::Result;
use crate::lifecycle::{Overlay, Phase, Transition};
use crate::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Declined,
}

impl Consent {
    pub fn as_str(self) -> &'static str {
        match self {
            Consent::Accepted => "accepted",
            Consent::Declined => "declined",
        }
    }
}

/// Where a consent decision is remembered.
pub trait ConsentStore {
    fn local(&self) -> Option<String>;
    fn cookie(&self) -> Option<String>;
    fn set_local(&mut self, value: &str) -> Result<()>;
    fn set_cookie(&mut self, value: &str) -> Result<()>;
}

pub struct BrowserConsentStore;

impl ConsentStore for BrowserConsentStore {
    fn local(&self) -> Option<String> {
        storage::get_item(CONSENT_KEY).filter(|value| !value.is_empty())
    }

    fn cookie(&self) -> Option<String> {
        storage::get_cookie(CONSENT_KEY)
    }

    fn set_local(&mut self, value: &str) -> Result<()> {
        storage::set_item(CONSENT_KEY, value)
    }

    fn set_cookie(&mut self, value: &str) -> Result<()> {
        storage::set_cookie(CONSENT_KEY, value, CONSENT_COOKIE_DAYS)
    }
}

/// The prompt is only shown while neither store knows the answer.
pub fn needs_prompt(store: &impl ConsentStore) -> bool {
    store.local().is_none() && store.cookie().is_none()
}

/// Accepting is mirrored into a year-long cookie; declining stays local.
pub fn record_consent(store: &mut impl ConsentStore, consent: Consent) -> Result<()> {
    store.set_local(consent.as_str())?;
    if consent == Consent::Accepted {
        store.set_cookie(consent.as_str())?;
    }
    Ok(())
}

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let prompt = use_state(|| needs_prompt(&BrowserConsentStore));
    let overlay = use_reducer(Overlay::default);

    {
        let overlay = overlay.clone();
        let prompt = *prompt;
        use_effect_with_deps(
            move |_| {
                let show = prompt.then(|| {
                    Timeout::new(BANNER_SHOW_DELAY, move || overlay.dispatch(Transition::Show))
                });
                move || drop(show)
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

    if !*prompt || !overlay.phase.is_attached() {
        return html! {};
    }

    let choose = |consent: Consent| {
        let overlay = overlay.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = record_consent(&mut BrowserConsentStore, consent) {
                warn!("Could not store cookie consent: {}", e);
            }
            info!("Cookie consent {}", consent.as_str());
            overlay.dispatch(Transition::Dismiss);
        })
    };

    html! {
        <div class={classes!("cookie-banner", overlay.phase.is_visible().then_some("visible"))}>
            <div class="cookie-content">
                <p>
                    {"We use cookies to improve your experience. By using our site, you agree to our "}
                    <a href="terms.html">{"Terms"}</a>
                    {" and "}
                    <a href="privacy.html">{"Privacy Policy"}</a>
                    {"."}
                </p>
            </div>
            <div class="cookie-actions">
                <button class="btn btn-secondary btn-sm" id="cookie-decline" onclick={choose(Consent::Declined)}>
                    {"Decline"}
                </button>
                <button class="btn btn-primary btn-sm" id="cookie-accept" onclick={choose(Consent::Accepted)}>
                    {"Accept"}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        local: Option<String>,
        cookie: Option<String>,
    }

    impl ConsentStore for MemoryStore {
        fn local(&self) -> Option<String> {
            self.local.clone()
        }

        fn cookie(&self) -> Option<String> {
            self.cookie.clone()
        }

        fn set_local(&mut self, value: &str) -> Result<()> {
            self.local = Some(value.to_string());
            Ok(())
        }

        fn set_cookie(&mut self, value: &str) -> Result<()> {
            self.cookie = Some(value.to_string());
            Ok(())
        }
    }

    #[test]
    fn first_visit_prompts() {
        assert!(needs_prompt(&MemoryStore::default()));
    }

    #[test]
    fn accept_writes_both_stores() {
        let mut store = MemoryStore::default();
        record_consent(&mut store, Consent::Accepted).unwrap();
        assert_eq!(store.local.as_deref(), Some("accepted"));
        assert_eq!(store.cookie.as_deref(), Some("accepted"));
        assert!(!needs_prompt(&store));
    }

    #[test]
    fn decline_sets_no_cookie() {
        let mut store = MemoryStore::default();
        record_consent(&mut store, Consent::Declined).unwrap();
        assert_eq!(store.local.as_deref(), Some("declined"));
        assert_eq!(store.cookie, None);
        assert!(!needs_prompt(&store));
    }

    #[test]
    fn cookie_alone_suppresses_prompt() {
        let store = MemoryStore {
            local: None,
            cookie: Some("accepted".to_string()),
        };
        assert!(!needs_prompt(&store));
    }
}
