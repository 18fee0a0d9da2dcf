//! Follow Handler
//!
//! Follow/unfollow button on another user's profile page.

use std::rc::Rc;

use leptos::logging;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::context::UiContext;
use crate::error::{Error, Result};
use crate::models::{FollowRequest, FollowStatus};

/// Button label and follower count after a server response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowView {
    pub label: &'static str,
    pub followers: i64,
}

impl FollowView {
    pub fn after(status: FollowStatus, followers: i64) -> Self {
        match status {
            FollowStatus::Following => Self {
                label: "Unfollow",
                followers: followers.saturating_add(1),
            },
            FollowStatus::NotFollowing => Self {
                label: "Follow",
                followers: followers.saturating_sub(1),
            },
        }
    }
}

/// Read a counter like `parseInt` does; text without leading digits counts as 0
pub fn parse_count(text: &str) -> i64 {
    let text = text.trim();
    let (sign, rest) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

/// The follow button is wired only on a profile page of someone else
pub fn follow_enabled(
    title: &str,
    profile_title: &str,
    username: Option<&str>,
    profile_name: Option<&str>,
) -> bool {
    if title.trim() != profile_title {
        return false;
    }
    match (username, profile_name) {
        (Some(username), Some(profile_name)) => username != profile_name,
        _ => false,
    }
}

/// Send the button's current label as the follow command and render the answer
pub async fn toggle_follow(ctx: &UiContext, button: &Element) -> Result<FollowView> {
    let counter = ctx.element(&ctx.config.followers_count_id)?;
    let followers = parse_count(&counter.text_content().unwrap_or_default());

    let request = FollowRequest {
        follow: button.text_content().unwrap_or_default().trim().to_string(),
        user_to_follow: button
            .get_attribute("value")
            .ok_or_else(|| Error::missing(format!("#{}[value]", ctx.config.follow_id)))?,
    };

    let response = ctx.backend.follow(&request).await?;
    logging::log!("{} successfully.", response.message);

    let view = FollowView::after(response.status(), followers);
    button.set_text_content(Some(view.label));
    counter.set_text_content(Some(&view.followers.to_string()));
    dom_anim::pulse(&counter, &ctx.config.counter_pulse_class);
    Ok(view)
}

/// Click entry point
pub fn on_click(ctx: Rc<UiContext>, button: Element) {
    spawn_local(async move {
        if let Err(e) = toggle_follow(&ctx, &button).await {
            ctx.report(&e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_following_increments() {
        let view = FollowView::after(FollowStatus::from_message("Following"), parse_count("10"));
        assert_eq!(view.followers, 11);
        assert_eq!(view.label, "Unfollow");
    }

    #[test]
    fn test_anything_else_decrements() {
        for message in ["Unfollowed", "Unfollowing", ""] {
            let view = FollowView::after(FollowStatus::from_message(message), parse_count("10"));
            assert_eq!(view.followers, 9);
            assert_eq!(view.label, "Follow");
        }
    }

    #[test]
    fn test_counter_saturates_at_bounds() {
        let top = FollowView::after(FollowStatus::Following, parse_count("9223372036854775807"));
        assert_eq!(top.followers, i64::MAX);
        let bottom = FollowView::after(FollowStatus::NotFollowing, i64::MIN);
        assert_eq!(bottom.followers, i64::MIN);
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("10"), 10);
        assert_eq!(parse_count(" 7\n"), 7);
        assert_eq!(parse_count("12 followers"), 12);
        assert_eq!(parse_count("-3"), -3);
        assert_eq!(parse_count("n/a"), 0);
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn test_follow_gating() {
        assert!(follow_enabled("Profile", "Profile", Some("alice"), Some("bob")));
        assert!(!follow_enabled("Profile", "Profile", Some("alice"), Some("alice")));
        assert!(!follow_enabled("All Posts", "Profile", Some("alice"), Some("bob")));
        assert!(!follow_enabled("Profile", "Profile", None, Some("bob")));
    }
}
