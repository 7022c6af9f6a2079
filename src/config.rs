//! Runtime Configuration
//!
//! Optional settings supplied by the host page as
//! `window.__PROJECT_BOARD_CONFIG__ = { log_level: "debug", rules: {...} }`.

use serde::Deserialize;
use wasm_bindgen::JsValue;

use project_store::FormRules;

/// Global the host page may set before the app starts
const CONFIG_GLOBAL: &str = "__PROJECT_BOARD_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub log_level: String,
    pub rules: FormRules,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            rules: FormRules::default(),
        }
    }
}

impl BoardConfig {
    #[cfg(test)]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the config global, falling back to defaults.
    /// Returns the warning to log once logging is up.
    pub fn load() -> (Self, Option<String>) {
        let Some(window) = web_sys::window() else {
            return (Self::default(), None);
        };
        let value = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(v) if !v.is_undefined() && !v.is_null() => v,
            _ => return (Self::default(), None),
        };
        match serde_wasm_bindgen::from_value::<BoardConfig>(value) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(format!("Ignoring malformed {}: {}", CONFIG_GLOBAL, e)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(BoardConfig::from_json("{}").unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = BoardConfig::from_json(
            r#"{"log_level": "debug", "rules": {"max_people": 12}}"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.rules.max_people, Some(12));
        assert_eq!(config.rules.title_min_length, 5);
    }

    #[test]
    fn test_malformed_config() {
        assert!(BoardConfig::from_json(r#"{"rules": {"min_people": "many"}}"#).is_err());
    }
}
