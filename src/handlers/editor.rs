//! Inline Editor
//!
//! Swaps a post's content for a textarea form and saves the edit.
//!
//! Per post: `Viewing -> Editing -> Saving -> Viewing`. A failed save puts
//! back the content shown before editing.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlFormElement, HtmlTextAreaElement};

use crate::context::UiContext;
use crate::dom;
use crate::error::Result;
use crate::models::PostId;
use crate::notification::Notice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Viewing { content: String },
    Editing { original: String },
    Saving { original: String, draft: String },
}

impl EditState {
    pub fn begin(content: String) -> Self {
        EditState::Editing { original: content }
    }

    /// `None` unless the form is open and idle
    pub fn submit(&self, draft: String) -> Option<Self> {
        match self {
            EditState::Editing { original } => Some(EditState::Saving {
                original: original.clone(),
                draft,
            }),
            _ => None,
        }
    }

    /// Back to viewing; the draft is kept only if the save went through
    pub fn finish(&self, saved: bool) -> Self {
        let content = match self {
            EditState::Saving { draft, .. } if saved => draft,
            EditState::Saving { original, .. } | EditState::Editing { original } => original,
            EditState::Viewing { content } => content,
        };
        EditState::Viewing {
            content: content.clone(),
        }
    }

    /// Text the (hidden) content node holds in this state
    pub fn content(&self) -> &str {
        match self {
            EditState::Viewing { content } => content,
            EditState::Editing { original } => original,
            EditState::Saving { draft, .. } => draft,
        }
    }
}

struct OpenForm {
    serial: u64,
    state: EditState,
    form: HtmlFormElement,
    _on_submit: Closure<dyn FnMut(Event)>,
}

/// One open form per post; reopening replaces the previous session
#[derive(Default)]
pub(crate) struct EditorSessions {
    open: RefCell<HashMap<PostId, OpenForm>>,
    next_serial: Cell<u64>,
}

impl EditorSessions {
    fn next_serial(&self) -> u64 {
        let serial = self.next_serial.get() + 1;
        self.next_serial.set(serial);
        serial
    }

    pub(crate) fn state(&self, post: &PostId) -> Option<EditState> {
        self.open.borrow().get(post).map(|s| s.state.clone())
    }
}

fn build_form(document: &Document, content: &str) -> Result<(HtmlFormElement, HtmlTextAreaElement)> {
    let form: HtmlFormElement = dom::create(document, "form")?;
    form.set_attribute("action", "#")?;
    form.set_attribute("method", "put")?;

    let textarea: HtmlTextAreaElement = dom::create(document, "textarea")?;
    textarea.set_class_name("form-control");
    textarea.set_value(content);

    let save: Element = dom::create(document, "input")?;
    save.set_class_name("btn");
    save.set_attribute("type", "submit")?;
    save.set_attribute("value", "Save")?;

    form.append_child(&textarea)?;
    form.append_child(&save)?;
    Ok((form, textarea))
}

/// Open the edit form for the post owning `control`
pub fn begin_edit(ctx: &Rc<UiContext>, control: &Element) -> Result<PostId> {
    let post = dom::post_id_for(control)?;
    // The content node holds an unconfirmed draft until the save answers.
    if let Some(EditState::Saving { .. }) = ctx.editor.state(&post) {
        logging::warn!("[EDIT] Post {} is being saved, not reopening", post);
        return Ok(post);
    }
    let content = ctx.html_element(&post.content_id())?;
    let container = ctx.element(&post.form_id())?;

    let original = content.text_content().unwrap_or_default();
    dom::set_display(&content, "none")?;
    container.set_inner_html("");

    let (form, textarea) = build_form(&ctx.document, &original)?;
    let serial = ctx.editor.next_serial();
    let on_submit = {
        let ctx = ctx.clone();
        let post = post.clone();
        Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            ev.prevent_default();
            submit_edit(ctx.clone(), post.clone(), serial, textarea.value());
        })
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    container.append_child(&form)?;

    ctx.editor.open.borrow_mut().insert(
        post.clone(),
        OpenForm {
            serial,
            state: EditState::begin(original),
            form,
            _on_submit: on_submit,
        },
    );
    Ok(post)
}

fn submit_edit(ctx: Rc<UiContext>, post: PostId, serial: u64, draft: String) {
    let content = match ctx.html_element(&post.content_id()) {
        Ok(content) => content,
        Err(e) => {
            ctx.report(&e);
            return;
        }
    };
    {
        let mut open = ctx.editor.open.borrow_mut();
        let Some(session) = open.get_mut(&post).filter(|s| s.serial == serial) else {
            return;
        };
        let Some(saving) = session.state.submit(draft.clone()) else {
            logging::warn!("[EDIT] Post {} is already being saved", post);
            return;
        };
        session.state = saving;
    }

    content.set_text_content(Some(&draft));

    spawn_local(async move {
        let result = ctx.backend.edit_post(&post, &draft).await;
        if let Err(e) = finish_edit(&ctx, &post, serial, result) {
            ctx.report(&e);
        }
    });
}

fn finish_edit(
    ctx: &UiContext,
    post: &PostId,
    serial: u64,
    result: Result<serde_json::Value>,
) -> Result<()> {
    let session = {
        let mut open = ctx.editor.open.borrow_mut();
        let current = open.get(post).map(|s| s.serial) == Some(serial);
        if current {
            open.remove(post)
        } else {
            None
        }
    };
    let Some(session) = session else {
        // The form was reopened while this save was in flight.
        logging::warn!("[EDIT] Dropping stale save response for post {}", post);
        return result.map(|_| ());
    };

    let content = ctx.html_element(&post.content_id())?;
    let viewing = session.state.finish(result.is_ok());
    content.set_text_content(Some(viewing.content()));
    session.form.remove();
    dom::set_display(&content, "block")?;

    let ack = result?;
    logging::log!("[EDIT] Post {}: {}", post, ack);
    ctx.notifier.show(&Notice::status("edited"));
    Ok(())
}

/// Click entry point
pub fn on_click(ctx: Rc<UiContext>, control: Element) {
    if let Err(e) = begin_edit(&ctx, &control) {
        ctx.report(&e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_keeps_draft() {
        let editing = EditState::begin("old".to_string());
        let saving = editing.submit("hello".to_string()).unwrap();
        assert_eq!(saving.content(), "hello");
        assert_eq!(
            saving.finish(true),
            EditState::Viewing {
                content: "hello".to_string()
            }
        );
    }

    #[test]
    fn test_failed_save_restores_original() {
        let saving = EditState::begin("old".to_string())
            .submit("hello".to_string())
            .unwrap();
        assert_eq!(saving.finish(false).content(), "old");
    }

    #[test]
    fn test_no_second_submit_while_saving() {
        let saving = EditState::begin("old".to_string())
            .submit("a".to_string())
            .unwrap();
        assert!(saving.submit("b".to_string()).is_none());
        assert!(EditState::Viewing { content: "x".to_string() }
            .submit("b".to_string())
            .is_none());
    }

    #[test]
    fn test_editing_shows_original() {
        let editing = EditState::begin("old".to_string());
        assert_eq!(editing.content(), "old");
        assert_eq!(editing.finish(true).content(), "old");
    }
}
