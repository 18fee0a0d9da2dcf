//! Like Handler
//!
//! Toggles a post's like on the server and mirrors the answer on the page.

use std::rc::Rc;

use leptos::logging;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::UiConfig;
use crate::context::UiContext;
use crate::dom;
use crate::error::Result;
use crate::models::{LikeResponse, LikeStatus};

/// Prefix of the like counter text
pub const HEART: &str = "❤️";

/// How one like control looks after a server response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeView {
    pub counter_text: String,
    pub icon_src: String,
    pub icon_alt: &'static str,
    pub label: &'static str,
}

impl LikeView {
    pub fn from_response(response: &LikeResponse, config: &UiConfig) -> Self {
        let counter_text = format!("{HEART}{}", response.likes_count);
        match response.message {
            LikeStatus::Liked => Self {
                counter_text,
                icon_src: config.unlike_icon.clone(),
                icon_alt: "Unlike",
                label: "Unlike",
            },
            LikeStatus::Unliked => Self {
                counter_text,
                icon_src: config.like_icon.clone(),
                icon_alt: "Like",
                label: "Like",
            },
        }
    }
}

/// Label next to the control: a `.like-label` sibling, else the parent's third child
fn label_for(control: &Element, config: &UiConfig) -> Option<Element> {
    let parent = control.parent_element()?;
    parent
        .query_selector(&config.like_label_selector)
        .ok()
        .flatten()
        .or_else(|| parent.children().item(2))
}

fn render(ctx: &UiContext, control: &Element, counter: &Element, view: &LikeView) -> Result<()> {
    counter.set_text_content(Some(&view.counter_text));
    dom_anim::pulse(counter, &ctx.config.counter_pulse_class);

    control.set_attribute("src", &view.icon_src)?;
    control.set_attribute("alt", view.icon_alt)?;
    if let Some(label) = label_for(control, &ctx.config) {
        label.set_text_content(Some(view.label));
    }
    Ok(())
}

/// Send one like toggle for the post owning `control` and render the answer.
///
/// Overlapping calls are not serialized: whichever response is rendered
/// last decides what the page shows.
pub async fn toggle_like(ctx: &UiContext, control: &Element) -> Result<LikeView> {
    let post = dom::post_id_for(control)?;
    let counter = ctx.element(&post.like_id())?;

    let response = ctx.backend.like_post(&post).await?;
    logging::log!("Post {} {} successfully.", post, response.message.as_str());

    let view = LikeView::from_response(&response, &ctx.config);
    render(ctx, control, &counter, &view)?;
    Ok(view)
}

/// Click entry point
pub fn on_click(ctx: Rc<UiContext>, control: Element) {
    spawn_local(async move {
        if let Err(e) = toggle_like(&ctx, &control).await {
            ctx.report(&e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(message: LikeStatus, likes_count: u32) -> LikeResponse {
        LikeResponse { message, likes_count }
    }

    #[test]
    fn test_liked_view() {
        let view = LikeView::from_response(&response(LikeStatus::Liked, 5), &UiConfig::default());
        assert_eq!(view.counter_text, "❤️5");
        assert_eq!(view.icon_alt, "Unlike");
        assert_eq!(view.icon_src, "static/network/dislike.svg");
        assert_eq!(view.label, "Unlike");
    }

    #[test]
    fn test_unliked_view() {
        let view = LikeView::from_response(&response(LikeStatus::Unliked, 4), &UiConfig::default());
        assert_eq!(view.counter_text, "❤️4");
        assert_eq!(view.icon_alt, "Like");
        assert_eq!(view.icon_src, "static/network/like.svg");
        assert_eq!(view.label, "Like");
    }

    #[test]
    fn test_final_view_depends_on_arrival_order() {
        let config = UiConfig::default();
        // Two clicks in flight: the first toggled on, the second toggled off.
        let first = response(LikeStatus::Liked, 5);
        let second = response(LikeStatus::Unliked, 4);

        let in_order = [&first, &second]
            .iter()
            .map(|r| LikeView::from_response(r, &config))
            .last()
            .unwrap();
        let reversed = [&second, &first]
            .iter()
            .map(|r| LikeView::from_response(r, &config))
            .last()
            .unwrap();

        assert_eq!(in_order.counter_text, "❤️4");
        assert_eq!(reversed.counter_text, "❤️5");
        assert_ne!(in_order, reversed);
    }
}
