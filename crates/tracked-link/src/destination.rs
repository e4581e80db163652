//! Destination classification: external URIs vs. routes handled by the router.

use regex::Regex;
use std::sync::OnceLock;

/// Anything that starts with a URI scheme, e.g. `https:`, `mailto:`, `git+ssh:`.
fn scheme_regex() -> &'static Regex {
    static SCHEME: OnceLock<Regex> = OnceLock::new();
    SCHEME.get_or_init(|| Regex::new(r"^[a-z+.-]+:").expect("Invalid scheme regex"))
}

fn web_scheme_regex() -> &'static Regex {
    static WEB_SCHEME: OnceLock<Regex> = OnceLock::new();
    WEB_SCHEME.get_or_init(|| Regex::new(r"^https?:").expect("Invalid web scheme regex"))
}

/// True if `to` leaves the application, i.e. carries an explicit URI scheme.
/// Everything else, including the empty string, is an internal route.
pub fn is_external(to: &str) -> bool {
    scheme_regex().is_match(to)
}

/// True for external destinations a browser can navigate to (`http`/`https`).
/// Only these are opened in a new browsing context.
pub fn opens_new_window(to: &str) -> bool {
    is_external(to) && web_scheme_regex().is_match(to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_are_external() {
        assert!(is_external("https://example.com"));
        assert!(is_external("http://example.com/path?q=1"));
        assert!(is_external("mailto:a@b.com"));
        assert!(is_external("git+ssh://host/repo.git"));
        assert!(is_external("x-custom.app:open"));
    }

    #[test]
    fn routes_are_internal() {
        assert!(!is_external("/docs/intro"));
        assert!(!is_external("docs/intro"));
        assert!(!is_external("#section"));
        assert!(!is_external("?page=2"));
        assert!(!is_external(""));
    }

    #[test]
    fn scheme_must_lead_and_be_lowercase() {
        assert!(!is_external("HTTPS://example.com"));
        assert!(!is_external(":no-scheme"));
        assert!(!is_external("/redirect?to=https://example.com"));
        assert!(!is_external("ftp2:host"));
    }

    #[test]
    fn only_web_schemes_open_new_window() {
        assert!(opens_new_window("https://example.com"));
        assert!(opens_new_window("http://example.com"));
        assert!(!opens_new_window("mailto:a@b.com"));
        assert!(!opens_new_window("tel:+15555550100"));
        assert!(!opens_new_window("/docs/intro"));
    }

    #[test]
    fn scheme_prefix_is_not_enough() {
        // `httpx:` is external but not a browser navigation
        assert!(is_external("httpx://example.com"));
        assert!(!opens_new_window("httpx://example.com"));
    }
}
