//! Persisted visitor preferences shared through a Yew context, so the
//! desktop and mobile toggles render from one source of truth.

use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;

use crate::config;
use crate::storage;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePref {
    Light,
    #[default]
    Dark,
}

impl ThemePref {
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => ThemePref::Light,
            _ => ThemePref::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePref::Light => "light",
            ThemePref::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePref::Light => ThemePref::Dark,
            ThemePref::Dark => ThemePref::Light,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            ThemePref::Light => "☀️",
            ThemePref::Dark => "🌙",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LangPref {
    #[default]
    En,
    Kh,
}

impl LangPref {
    pub fn parse(value: &str) -> Self {
        match value {
            "kh" => LangPref::Kh,
            _ => LangPref::En,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LangPref::En => "en",
            LangPref::Kh => "kh",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            LangPref::En => LangPref::Kh,
            LangPref::Kh => LangPref::En,
        }
    }

    /// Label on the toggle: the language you would switch to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            LangPref::En => "KH",
            LangPref::Kh => "EN",
        }
    }

    pub fn html_lang(self) -> &'static str {
        match self {
            LangPref::En => "en",
            LangPref::Kh => "km",
        }
    }

    pub fn font_family(self) -> &'static str {
        match self {
            LangPref::En => "'Inter', sans-serif",
            LangPref::Kh => "'Kantumruy Pro', sans-serif",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Prefs {
    pub theme: ThemePref,
    pub lang: LangPref,
}

pub enum PrefsAction {
    ToggleTheme,
    ToggleLang,
}

impl Prefs {
    pub fn from_stored(theme: Option<&str>, lang: Option<&str>) -> Self {
        Self {
            theme: theme.map(ThemePref::parse).unwrap_or_default(),
            lang: lang.map(LangPref::parse).unwrap_or_default(),
        }
    }

    pub fn load() -> Self {
        let theme = storage::get_item(config::THEME_KEY);
        let lang = storage::get_item(config::LANG_KEY);
        Self::from_stored(theme.as_deref(), lang.as_deref())
    }
}

impl PrefsAction {
    /// Storage key and value this action leaves behind when applied to
    /// `current`.
    pub fn stored_entry(&self, current: &Prefs) -> (&'static str, &'static str) {
        match self {
            PrefsAction::ToggleTheme => (config::THEME_KEY, current.theme.toggled().as_str()),
            PrefsAction::ToggleLang => (config::LANG_KEY, current.lang.toggled().as_str()),
        }
    }
}

/// Applies a toggle and persists only the preference it changed. Nothing is
/// written until the visitor actually clicks a toggle.
pub fn toggle(prefs: &PrefsContext, action: PrefsAction) {
    let (key, value) = action.stored_entry(prefs);
    if let Err(e) = storage::set_item(key, value) {
        warn!("Could not persist {}: {}", key, e);
    }
    prefs.dispatch(action);
}

impl Reducible for Prefs {
    type Action = PrefsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            PrefsAction::ToggleTheme => Prefs {
                theme: self.theme.toggled(),
                ..(*self).clone()
            },
            PrefsAction::ToggleLang => Prefs {
                lang: self.lang.toggled(),
                ..(*self).clone()
            },
        };
        info!("Preferences now theme={} lang={}", next.theme.as_str(), next.lang.as_str());
        Rc::new(next)
    }
}

pub type PrefsContext = UseReducerHandle<Prefs>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark_english() {
        let prefs = Prefs::from_stored(None, None);
        assert_eq!(prefs.theme, ThemePref::Dark);
        assert_eq!(prefs.lang, LangPref::En);
    }

    #[test]
    fn unknown_values_fall_back() {
        let prefs = Prefs::from_stored(Some("sepia"), Some("fr"));
        assert_eq!(prefs, Prefs::default());
    }

    #[test]
    fn toggles_store_only_what_changed() {
        let prefs = Prefs::from_stored(None, None);
        assert_eq!(PrefsAction::ToggleTheme.stored_entry(&prefs), ("theme", "light"));
        assert_eq!(PrefsAction::ToggleLang.stored_entry(&prefs), ("lang", "kh"));
        let kh = Prefs::from_stored(Some("light"), Some("kh"));
        assert_eq!(PrefsAction::ToggleTheme.stored_entry(&kh), ("theme", "dark"));
        assert_eq!(PrefsAction::ToggleLang.stored_entry(&kh), ("lang", "en"));
    }

    #[test]
    fn theme_toggle_twice_is_identity() {
        let start = Rc::new(Prefs::from_stored(Some("light"), None));
        let once = start.clone().reduce(PrefsAction::ToggleTheme);
        assert_eq!(once.theme, ThemePref::Dark);
        assert_eq!(once.theme.glyph(), "🌙");
        let twice = once.reduce(PrefsAction::ToggleTheme);
        assert_eq!(*twice, *start);
        assert_eq!(twice.theme.glyph(), "☀️");
    }

    #[test]
    fn lang_toggle_keeps_theme() {
        let start = Rc::new(Prefs::from_stored(Some("light"), Some("en")));
        let kh = start.reduce(PrefsAction::ToggleLang);
        assert_eq!(kh.lang, LangPref::Kh);
        assert_eq!(kh.theme, ThemePref::Light);
        assert_eq!(kh.lang.toggle_label(), "EN");
        assert_eq!(kh.lang.html_lang(), "km");
        assert_eq!(kh.lang.font_family(), "'Kantumruy Pro', sans-serif");
        let en = kh.reduce(PrefsAction::ToggleLang);
        assert_eq!(en.lang.as_str(), "en");
        assert_eq!(en.lang.toggle_label(), "KH");
    }
}
