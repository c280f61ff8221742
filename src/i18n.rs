use std::collections::HashMap;

use log::error;
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::prefs::LangPref;

const RAW_TRANSLATIONS: &str = include_str!("../assets/translations.json");

#[derive(Debug, Default, Deserialize)]
pub struct Translations {
    #[serde(default)]
    en: HashMap<String, String>,
    #[serde(default)]
    kh: HashMap<String, String>,
}

impl Translations {
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|e| {
            error!("Translation table is malformed: {}", e);
            Translations::default()
        })
    }

    pub fn get(&self, lang: LangPref, key: &str) -> Option<&str> {
        let table = match lang {
            LangPref::En => &self.en,
            LangPref::Kh => &self.kh,
        };
        table.get(key).map(String::as_str)
    }
}

static TRANSLATIONS: Lazy<Translations> = Lazy::new(|| Translations::parse(RAW_TRANSLATIONS));

/// Text for a `data-i18n` element. A key missing from the active language
/// keeps the English markup text; unknown keys render as themselves.
pub fn tr(lang: LangPref, key: &str) -> String {
    TRANSLATIONS
        .get(lang, key)
        .or_else(|| TRANSLATIONS.get(LangPref::En, key))
        .unwrap_or(key)
        .to_string()
}
