// Link launching and locale href construction

use std::time::{SystemTime, UNIX_EPOCH};

use crate::utils::error::{Result, StartuiError};

/// Cache-busting query value in [1, 100). Non-cryptographic; it only has
/// to vary between activations.
pub fn cache_buster() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    1 + nanos % 99
}

/// Href for a locale switch, carrying the flag and a cache buster.
pub fn locale_href(code: &str) -> String {
    format!("/?lang={}&random={}", code, cache_buster())
}

/// Extract the `lang` query value from an internal href.
pub fn lang_from_href(href: &str) -> Option<&str> {
    let query = href.split_once('?')?.1;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("lang="))
}

/// Hand an external URL to the default browser. The spawned process is
/// detached from the terminal session, so nothing leaks back into the UI.
pub fn open_external(url: &str) -> Result<()> {
    open::that_detached(url)
        .map_err(|err| StartuiError::Config(format!("failed to open '{}': {}", url, err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_buster_range() {
        for _ in 0..200 {
            let value = cache_buster();
            assert!((1..100).contains(&value));
        }
    }

    #[test]
    fn test_locale_href() {
        let href = locale_href("zh");
        assert!(href.starts_with("/?lang=zh&random="));
        assert_eq!(lang_from_href(&href), Some("zh"));
    }

    #[test]
    fn test_lang_from_href() {
        assert_eq!(lang_from_href("/?lang=en&random=42"), Some("en"));
        assert_eq!(lang_from_href("/?random=42&lang=zh"), Some("zh"));
        assert_eq!(lang_from_href("/"), None);
        assert_eq!(lang_from_href("/?random=42"), None);
    }
}
