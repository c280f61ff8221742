//! Local storage and document cookie access.
//!
//! Every helper here degrades quietly: a missing window or a storage
//! exception surfaces as an `Error` for the caller to log, never a panic.

use chrono::{DateTime, Duration, Utc};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument, Storage};

use crate::error::{Error, Result};

fn local_storage() -> Result<Storage> {
    window()
        .ok_or(Error::NoWindow)?
        .local_storage()?
        .ok_or(Error::NoStorage)
}

pub fn get_item(key: &str) -> Option<String> {
    local_storage()
        .ok()
        .and_then(|storage| storage.get_item(key).ok())
        .flatten()
}

pub fn set_item(key: &str, value: &str) -> Result<()> {
    local_storage()?.set_item(key, value)?;
    Ok(())
}

fn html_document() -> Result<HtmlDocument> {
    window()
        .ok_or(Error::NoWindow)?
        .document()
        .ok_or(Error::NoDocument)?
        .dyn_into::<HtmlDocument>()
        .map_err(|_| Error::NoDocument)
}

pub fn get_cookie(name: &str) -> Option<String> {
    let jar = html_document().ok()?.cookie().ok()?;
    find_cookie(&jar, name).map(str::to_owned)
}

pub fn set_cookie(name: &str, value: &str, days: i64) -> Result<()> {
    let line = cookie_line(name, value, days, Utc::now());
    html_document()?.set_cookie(&line)?;
    Ok(())
}

/// Looks `name` up in a `document.cookie` style string. An empty value
/// counts as unset.
pub fn find_cookie<'a>(jar: &'a str, name: &str) -> Option<&'a str> {
    jar.split(';')
        .map(|pair| pair.trim_start_matches(' '))
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .filter(|value| !value.is_empty())
}

/// Builds the assignment written to `document.cookie`. Expiry is rendered
/// the way `Date.prototype.toUTCString` does.
pub fn cookie_line(name: &str, value: &str, days: i64, now: DateTime<Utc>) -> String {
    let expires = now + Duration::days(days);
    format!(
        "{}={}; expires={}; path=/; SameSite=Lax",
        name,
        value,
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cookie_line_expires_a_year_out() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 5).unwrap();
        assert_eq!(
            cookie_line("cookieConsent", "accepted", 365, now),
            "cookieConsent=accepted; expires=Sun, 17 Oct 2027 09:30:05 GMT; path=/; SameSite=Lax"
        );
    }

    #[test]
    fn finds_cookie_among_others() {
        let jar = "theme=dark; cookieConsent=accepted; other=1";
        assert_eq!(find_cookie(jar, "cookieConsent"), Some("accepted"));
        assert_eq!(find_cookie(jar, "theme"), Some("dark"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(find_cookie("", "cookieConsent"), None);
        assert_eq!(find_cookie("cookieConsentX=1", "cookieConsent"), None);
        assert_eq!(find_cookie("xcookieConsent=1", "cookieConsent"), None);
    }

    #[test]
    fn empty_cookie_value_is_unset() {
        assert_eq!(find_cookie("cookieConsent=", "cookieConsent"), None);
        assert_eq!(find_cookie("theme=dark; cookieConsent=", "cookieConsent"), None);
    }
}
