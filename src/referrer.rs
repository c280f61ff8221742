//! Works out where a visitor came from, for the welcome toast.

use log::warn;
use url::Url;

/// Resolution order: `?ref=`, then the hostname inside `?original_url=`,
/// then an external `document.referrer`. Empty parameters count as absent.
pub fn resolve_source(
    ref_param: Option<&str>,
    original_url: Option<&str>,
    referrer: &str,
    current_host: &str,
) -> Option<String> {
    if let Some(source) = ref_param.filter(|s| !s.is_empty()) {
        return Some(source.to_string());
    }
    if let Some(raw) = original_url.filter(|s| !s.is_empty()) {
        return host_of_original_url(raw).filter(|host| !host.is_empty());
    }
    if !referrer.is_empty() {
        return external_referrer_host(referrer, current_host);
    }
    None
}

fn host_of_original_url(raw: &str) -> Option<String> {
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    let with_scheme = if has_http_scheme(&decoded) {
        decoded
    } else {
        format!("https://{}", decoded)
    };
    match Url::parse(&with_scheme) {
        Ok(url) => Some(url.host_str().unwrap_or_default().to_string()),
        Err(_) => Some(raw.to_string()),
    }
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn external_referrer_host(referrer: &str, current_host: &str) -> Option<String> {
    match Url::parse(referrer) {
        Ok(url) => url
            .host_str()
            .filter(|host| *host != current_host)
            .map(str::to_string),
        Err(_) => {
            warn!("Invalid referrer: {}", referrer);
            None
        }
    }
}

/// Escapes text for interpolation into markup, matching what a
/// `textContent` to `innerHTML` round-trip produces.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_param_used_verbatim() {
        assert_eq!(
            resolve_source(Some("i9t5.com"), Some("other.com"), "https://x.org/", "self.example"),
            Some("i9t5.com".to_string())
        );
    }

    #[test]
    fn original_url_reduced_to_hostname() {
        assert_eq!(
            resolve_source(None, Some("i9t5.com%2Ffoo%2Fbar"), "", "self.example"),
            Some("i9t5.com".to_string())
        );
        assert_eq!(
            resolve_source(None, Some("HTTP://Blog.Example.org/post"), "", "self.example"),
            Some("blog.example.org".to_string())
        );
    }

    #[test]
    fn unparsable_original_url_falls_back_to_raw() {
        assert_eq!(
            resolve_source(None, Some("bad host[x"), "", "self.example"),
            Some("bad host[x".to_string())
        );
    }

    #[test]
    fn same_site_referrer_shows_nothing() {
        assert_eq!(resolve_source(None, None, "https://self.example/x", "self.example"), None);
    }

    #[test]
    fn external_referrer_hostname() {
        assert_eq!(
            resolve_source(None, None, "https://news.ycombinator.com/item?id=1", "self.example"),
            Some("news.ycombinator.com".to_string())
        );
    }

    #[test]
    fn invalid_referrer_and_empty_params() {
        assert_eq!(resolve_source(Some(""), Some(""), "not a url", "self.example"), None);
        assert_eq!(resolve_source(None, None, "", "self.example"), None);
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<img src=x onerror=alert(1)>&co"),
            "&lt;img src=x onerror=alert(1)&gt;&amp;co"
        );
        assert_eq!(escape_html("i9t5.com"), "i9t5.com");
        assert_eq!(escape_html("\"quoted\" 'single'"), "\"quoted\" 'single'");
    }
}
