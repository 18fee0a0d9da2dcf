//! UI Configuration
//!
//! Endpoints, DOM ids and CSS classes the handlers rely on.
//! Pages may override any field through a global `networkUiConfig` object.

use leptos::logging;
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Name of the optional page-level override object on `window`
pub const CONFIG_GLOBAL: &str = "networkUiConfig";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    // Endpoints
    pub follow_url: String,
    pub like_url_prefix: String,
    pub edit_url_prefix: String,

    // Security token
    pub csrf_cookie: String,
    pub csrf_header: String,

    // DOM contract
    pub like_selector: String,
    pub like_label_selector: String,
    pub edit_selector: String,
    pub follow_id: String,
    pub followers_count_id: String,
    pub username_id: String,
    pub profile_name_id: String,
    pub message_id: String,
    pub profile_title: String,

    // Classes
    pub counter_pulse_class: String,
    pub message_pulse_class: String,
    pub message_error_class: String,

    // Assets
    pub like_icon: String,
    pub unlike_icon: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            follow_url: "/follow".to_string(),
            like_url_prefix: "/like_post/".to_string(),
            edit_url_prefix: "/edit_post/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            like_selector: ".like".to_string(),
            like_label_selector: ".like-label".to_string(),
            edit_selector: ".editPost".to_string(),
            follow_id: "follow".to_string(),
            followers_count_id: "followersCount".to_string(),
            username_id: "username".to_string(),
            profile_name_id: "profile-name".to_string(),
            message_id: "post-message".to_string(),
            profile_title: "Profile".to_string(),
            counter_pulse_class: "color-anim".to_string(),
            message_pulse_class: "message-anim".to_string(),
            message_error_class: "message-error".to_string(),
            like_icon: "static/network/like.svg".to_string(),
            unlike_icon: "static/network/dislike.svg".to_string(),
        }
    }
}

impl UiConfig {
    pub fn like_url(&self, post_id: &str) -> String {
        format!("{}{}", self.like_url_prefix, post_id)
    }

    pub fn edit_url(&self, post_id: &str) -> String {
        format!("{}{}", self.edit_url_prefix, post_id)
    }

    /// Load the config, applying the page override when present
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(value) if !value.is_undefined() && !value.is_null() => Self::from_js(value),
            _ => Self::default(),
        }
    }

    fn from_js(value: JsValue) -> Self {
        serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
            logging::warn!("[CONFIG] Ignoring invalid {}: {}", CONFIG_GLOBAL, e);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = UiConfig::default();
        assert_eq!(config.like_url("7"), "/like_post/7");
        assert_eq!(config.edit_url("7"), "/edit_post/7");
        assert_eq!(config.follow_url, "/follow");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: UiConfig =
            serde_json::from_str(r#"{"likeUrlPrefix": "/api/like/", "csrfCookie": "token"}"#)
                .unwrap();
        assert_eq!(config.like_url("3"), "/api/like/3");
        assert_eq!(config.csrf_cookie, "token");
        assert_eq!(config.csrf_header, "X-CSRFToken");
        assert_eq!(config.unlike_icon, "static/network/dislike.svg");
    }
}
