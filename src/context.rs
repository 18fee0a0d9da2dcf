//! Application Context
//!
//! Shared state handed to every handler, built once at startup.

use std::rc::Rc;

use leptos::logging;
use web_sys::{Document, Element, HtmlElement};

use crate::api::Backend;
use crate::config::UiConfig;
use crate::dom;
use crate::error::{Error, Result};
use crate::handlers::editor::{EditState, EditorSessions};
use crate::models::PostId;
use crate::notification::{Notice, Notifier};

pub struct UiContext {
    pub document: Document,
    pub config: UiConfig,
    pub backend: Rc<dyn Backend>,
    pub notifier: Notifier,
    /// Open inline-edit forms, keyed by post
    pub(crate) editor: EditorSessions,
}

impl UiContext {
    pub fn new(document: Document, config: UiConfig, backend: Rc<dyn Backend>) -> Self {
        let slot = dom::html_by_id(&document, &config.message_id).ok();
        let notifier = Notifier::new(slot, &config);
        Self {
            document,
            config,
            backend,
            notifier,
            editor: EditorSessions::default(),
        }
    }

    pub fn element(&self, id: &str) -> Result<Element> {
        dom::by_id(&self.document, id)
    }

    pub fn html_element(&self, id: &str) -> Result<HtmlElement> {
        dom::html_by_id(&self.document, id)
    }

    /// Edit state of `post`, if its form is open
    pub fn edit_state(&self, post: &PostId) -> Option<EditState> {
        self.editor.state(post)
    }

    /// Log a handler failure and surface it in the message slot
    pub fn report(&self, error: &Error) {
        logging::error!("[UI] {} ({:?})", error, error.kind());
        self.notifier.show(&Notice::failure(error));
    }
}
