//! Cookie Reader
//!
//! Reads the CSRF token from `document.cookie`.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlDocument};

use crate::error::{Error, Result};

/// Security token sent in the CSRF header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Find `name` in a raw `a=1; b=2` cookie string and return its decoded value
pub fn read_cookie(raw: &str, name: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    raw.split(';')
        .map(str::trim)
        .find_map(|cookie| {
            cookie
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .map(|value| percent_decode_str(value).decode_utf8_lossy().into_owned())
}

/// Read the token fresh from the document's cookie store
pub fn csrf_token(document: &Document, name: &str) -> Result<CsrfToken> {
    let raw = document
        .dyn_ref::<HtmlDocument>()
        .and_then(|doc| doc.cookie().ok())
        .unwrap_or_default();
    read_cookie(&raw, name)
        .map(CsrfToken)
        .ok_or(Error::MissingToken)
}
