//! Notification Presenter
//!
//! Single message slot that pulses a short sentence and clears itself
//! when the animation ends.

use std::cell::Cell;
use std::rc::Rc;

use leptos::logging;
use web_sys::HtmlElement;

use crate::config::UiConfig;
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Outcome word for a post, e.g. "edited"
    Status(String),
    /// A request failed; holds the user-facing reason
    Failure(&'static str),
}

impl Notice {
    pub fn status(word: impl Into<String>) -> Self {
        Notice::Status(word.into())
    }

    pub fn failure(error: &Error) -> Self {
        Notice::Failure(error.reason())
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::Failure(_))
    }

    pub fn text(&self) -> String {
        match self {
            Notice::Status(word) => format!("The post was {word} successfully."),
            Notice::Failure(reason) => format!("Could not complete the request: {reason}."),
        }
    }
}

pub struct Notifier {
    slot: Option<HtmlElement>,
    pulse_class: String,
    error_class: String,
    /// Bumped on every `show`; only the newest message may clear the slot
    generation: Rc<Cell<u64>>,
}

impl Notifier {
    pub fn new(slot: Option<HtmlElement>, config: &UiConfig) -> Self {
        Self {
            slot,
            pulse_class: config.message_pulse_class.clone(),
            error_class: config.message_error_class.clone(),
            generation: Rc::new(Cell::new(0)),
        }
    }

    pub fn show(&self, notice: &Notice) {
        let text = notice.text();
        let Some(slot) = &self.slot else {
            logging::log!("[NOTICE] {}", text);
            return;
        };

        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        slot.set_text_content(Some(&text));
        let _ = slot
            .class_list()
            .toggle_with_force(&self.error_class, notice.is_failure());

        let target = slot.clone();
        let current = self.generation.clone();
        let error_class = self.error_class.clone();
        dom_anim::pulse_with(slot, &self.pulse_class, move || {
            if current.get() == generation {
                target.set_text_content(Some(""));
                let _ = target.class_list().remove_1(&error_class);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        let text = Notice::status("edited").text();
        assert_eq!(text, "The post was edited successfully.");
        assert!(text.contains("edited"));
    }

    #[test]
    fn test_failure_text() {
        let notice = Notice::failure(&Error::Rejected { status: 500 });
        assert!(notice.is_failure());
        assert_eq!(
            notice.text(),
            "Could not complete the request: the server rejected it."
        );
    }

    #[test]
    fn test_missing_token_reason() {
        let notice = Notice::failure(&Error::MissingToken);
        assert!(notice.text().contains("not signed in"));
    }
}
