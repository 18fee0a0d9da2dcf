//! Wire Models
//!
//! Request and response bodies of the post and follow endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier shared by a post's content, like-counter and form nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostId(String);

impl PostId {
    /// Returns `None` for blank ids
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn content_id(&self) -> String {
        format!("content-{}", self.0)
    }

    pub fn form_id(&self) -> String {
        format!("form-{}", self.0)
    }

    pub fn like_id(&self) -> String {
        format!("like-{}", self.0)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Like state reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeStatus {
    Liked,
    Unliked,
}

impl LikeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LikeStatus::Liked => "liked",
            LikeStatus::Unliked => "unliked",
        }
    }
}

/// Response of `POST /like_post/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub message: LikeStatus,
    #[serde(rename = "likesCount")]
    pub likes_count: u32,
}

/// Body of `POST /follow`
///
/// `follow` carries the button label as shown ("Follow" / "Unfollow").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowRequest {
    pub follow: String,
    pub user_to_follow: String,
}

/// Response of `POST /follow`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowResponse {
    pub message: String,
}

/// Follow state derived from a `FollowResponse`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowStatus {
    Following,
    NotFollowing,
}

impl FollowStatus {
    /// Only the literal "Following" means following; anything else means not
    pub fn from_message(message: &str) -> Self {
        if message == "Following" {
            FollowStatus::Following
        } else {
            FollowStatus::NotFollowing
        }
    }
}

impl FollowResponse {
    pub fn status(&self) -> FollowStatus {
        FollowStatus::from_message(&self.message)
    }
}

/// Body of `PUT /edit_post/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRequest<'a> {
    pub content: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_response_parses_server_shape() {
        let resp: LikeResponse =
            serde_json::from_str(r#"{"message": "liked", "likesCount": 5}"#).unwrap();
        assert_eq!(resp.message, LikeStatus::Liked);
        assert_eq!(resp.likes_count, 5);
    }

    #[test]
    fn test_like_response_rejects_unknown_message() {
        let resp = serde_json::from_str::<LikeResponse>(
            r#"{"message": "You should use request method POST"}"#,
        );
        assert!(resp.is_err());
    }

    #[test]
    fn test_follow_status_is_binary() {
        assert_eq!(FollowStatus::from_message("Following"), FollowStatus::Following);
        assert_eq!(FollowStatus::from_message("Unfollowing"), FollowStatus::NotFollowing);
        assert_eq!(FollowStatus::from_message("Unfollowed"), FollowStatus::NotFollowing);
        assert_eq!(FollowStatus::from_message("following"), FollowStatus::NotFollowing);
    }

    #[test]
    fn test_follow_request_field_names() {
        let body = FollowRequest {
            follow: "Follow".to_string(),
            user_to_follow: "12".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"follow":"Follow","user_to_follow":"12"}"#
        );
    }

    #[test]
    fn test_post_id_fragments() {
        let id = PostId::parse(" 42 ").unwrap();
        assert_eq!(id.content_id(), "content-42");
        assert_eq!(id.form_id(), "form-42");
        assert_eq!(id.like_id(), "like-42");
        assert!(PostId::parse("   ").is_none());
    }
}
