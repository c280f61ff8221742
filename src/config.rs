use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const MAILTO_RECIPIENT: &str = "hello@nisaytech.pp.ua";

// Local storage keys. `CONSENT_KEY` doubles as the cookie name.
pub const THEME_KEY: &str = "theme";
pub const LANG_KEY: &str = "lang";
pub const CONSENT_KEY: &str = "cookieConsent";
pub const CONSENT_COOKIE_DAYS: i64 = 365;

// Timer delays in milliseconds
pub const TOAST_SHOW_DELAY: u32 = 500;
pub const TOAST_AUTO_DISMISS: u32 = 8_000;
pub const OVERLAY_REMOVE_DELAY: u32 = 300;
pub const BANNER_SHOW_DELAY: u32 = 1_000;
pub const CHAT_WELCOME_DELAY: u32 = 500;
pub const CHAT_REPLY_DELAY: u32 = 1_000;

pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const PARALLAX_AMPLITUDE: f64 = 20.0;

pub const SPONSOR_PREVIEW: usize = 20;
pub const TEAM_SIZE: usize = 15;
