//! Console settings kept in `localStorage`.
//!
//! Only two values are stored: where the admin API lives and how chatty the
//! browser log is. The bearer token has its own key, see
//! [`crate::api_client::TOKEN_KEY`].

use std::cell::RefCell;

use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

const KEY_API_URL: &str = "rentadmin_api_url";
const KEY_LOG_LEVEL: &str = "rentadmin_log_level";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/api/v1";

#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Absolute base URL without a trailing slash
    pub api_base_url: String,
    pub log_level: Level,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            log_level: Level::Info,
        }
    }
}

pub fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// Accepts an `http(s)://` URL and drops trailing slashes.
pub fn normalize_base_url(raw: &str) -> Result<String, String> {
    let url = raw.trim().trim_end_matches('/');
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(|| "API URL must start with http:// or https://".to_string())?;
    if rest.is_empty() || rest.starts_with('/') {
        return Err("API URL needs a host".to_string());
    }
    Ok(url.to_string())
}

impl AppSettings {
    /// Builds settings from stored values. Unreadable values keep their
    /// defaults; a console served from localhost logs at debug level unless
    /// told otherwise.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>, local_host: bool) -> Self {
        let mut settings = Self::default();
        if local_host {
            settings.log_level = Level::Debug;
        }

        if let Some(url) = get(KEY_API_URL) {
            match normalize_base_url(&url) {
                Ok(url) => settings.api_base_url = url,
                Err(e) => log::warn!("Ignoring stored API URL {:?}: {}", url, e),
            }
        }
        if let Some(level) = get(KEY_LOG_LEVEL).as_deref().and_then(parse_level) {
            settings.log_level = level;
        }
        settings
    }

    /// Reads the browser's `localStorage`.
    pub fn load() -> Self {
        let Some(window) = window() else {
            return Self::default();
        };
        let local_host = window
            .location()
            .hostname()
            .map(|host| host == "localhost" || host == "127.0.0.1")
            .unwrap_or(false);
        let storage = window.local_storage().ok().flatten();

        Self::from_lookup(
            |key| storage.as_ref().and_then(|s| s.get_item(key).ok().flatten()),
            local_host,
        )
    }

    pub fn save(&self) -> Result<(), JsValue> {
        let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) else {
            return Err(JsValue::from_str("localStorage is not available"));
        };
        storage.set_item(KEY_API_URL, &self.api_base_url)?;
        storage.set_item(KEY_LOG_LEVEL, &self.log_level.as_str().to_ascii_lowercase())?;
        Ok(())
    }
}

thread_local! {
    static CURRENT: RefCell<AppSettings> = RefCell::new(AppSettings::load());
}

pub fn current() -> AppSettings {
    CURRENT.with(|s| s.borrow().clone())
}

/// Swaps the in-memory settings. New API clients pick them up; existing
/// ones keep their base URL until the page reloads.
pub fn replace(settings: AppSettings) {
    CURRENT.with(|s| *s.borrow_mut() = settings);
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn stored(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_storage() {
        let settings = AppSettings::from_lookup(stored(&[]), false);
        assert_eq!(settings, AppSettings::default());
        assert_eq!(AppSettings::from_lookup(stored(&[]), true).log_level, Level::Debug);
    }

    #[test]
    fn test_stored_values_win() {
        let settings = AppSettings::from_lookup(
            stored(&[
                ("rentadmin_api_url", "https://admin.example.com/api/v2/"),
                ("rentadmin_log_level", "WARN"),
            ]),
            true,
        );
        assert_eq!(settings.api_base_url, "https://admin.example.com/api/v2");
        assert_eq!(settings.log_level, Level::Warn);
    }

    #[test]
    fn test_bad_stored_url_keeps_default() {
        let settings = AppSettings::from_lookup(stored(&[("rentadmin_api_url", "ftp://x")]), false);
        assert_eq!(settings.api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" http://localhost:3000/ ").unwrap(), "http://localhost:3000");
        assert!(normalize_base_url("localhost:3000").is_err());
        assert!(normalize_base_url("https://").is_err());
        assert_eq!(parse_level("verbose"), None);
    }
}
