//! Bootstrap
//!
//! Builds the UI context once the page is ready and wires the handlers
//! to the controls present at that moment.

use std::rc::Rc;

use leptos::logging;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::api::HttpBackend;
use crate::config::UiConfig;
use crate::context::UiContext;
use crate::dom;
use crate::error::Result;
use crate::handlers::{editor, follow, like};

/// What `attach` wired up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attached {
    pub likes: usize,
    pub edits: usize,
    pub follow: bool,
}

/// Add a click listener that lives as long as the page
fn on_click<F>(target: &Element, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Whether the page is someone else's profile
pub fn is_foreign_profile(ctx: &UiContext) -> bool {
    let username = dom::text_of(&ctx.document, &ctx.config.username_id);
    let profile_name = dom::text_of(&ctx.document, &ctx.config.profile_name_id);
    follow::follow_enabled(
        &ctx.document.title(),
        &ctx.config.profile_title,
        username.as_deref(),
        profile_name.as_deref(),
    )
}

/// Attach every handler to the matching controls in the current DOM.
/// Controls added later are not wired.
pub fn attach(ctx: &Rc<UiContext>) -> Result<Attached> {
    let mut attached = Attached::default();

    for control in dom::query_all(&ctx.document, &ctx.config.like_selector)? {
        let ctx = ctx.clone();
        let target = control.clone();
        on_click(&control, move |_| like::on_click(ctx.clone(), target.clone()))?;
        attached.likes += 1;
    }

    for control in dom::query_all(&ctx.document, &ctx.config.edit_selector)? {
        let ctx = ctx.clone();
        let target = control.clone();
        on_click(&control, move |ev: Event| {
            ev.prevent_default();
            editor::on_click(ctx.clone(), target.clone());
        })?;
        attached.edits += 1;
    }

    if is_foreign_profile(ctx) {
        if let Some(button) = ctx.document.get_element_by_id(&ctx.config.follow_id) {
            let ctx = ctx.clone();
            let target = button.clone();
            on_click(&button, move |_| follow::on_click(ctx.clone(), target.clone()))?;
            attached.follow = true;
        }
    }

    Ok(attached)
}

/// Build the context for the live page and attach the handlers
pub fn run() -> Result<Attached> {
    let document = dom::document()?;
    let config = UiConfig::load();
    let backend = Rc::new(HttpBackend::new(config.clone()));
    let ctx = Rc::new(UiContext::new(document, config, backend));
    attach(&ctx)
}

fn launch() {
    match run() {
        Ok(attached) => logging::log!(
            "[BOOT] {} like, {} edit controls, follow: {}",
            attached.likes,
            attached.edits,
            attached.follow
        ),
        Err(e) => logging::error!("[BOOT] {}", e),
    }
}

/// Entry point: run now if the DOM is parsed, otherwise on `DOMContentLoaded`
pub fn start() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(document) => document,
        Err(e) => {
            logging::error!("[BOOT] {}", e);
            return;
        }
    };

    if document.ready_state() == "loading" {
        let cb = Closure::once_into_js(move |_ev: Event| launch());
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref()) {
            logging::error!("[BOOT] {:?}", e);
        }
    } else {
        launch();
    }
}
