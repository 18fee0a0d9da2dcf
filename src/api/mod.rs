//! Backend Bindings
//!
//! Typed wrappers around the like, follow and edit endpoints.

mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{FollowRequest, FollowResponse, LikeResponse, PostId};

pub use http::HttpBackend;

/// Server endpoints the handlers depend on
///
/// Every call resolves to exactly one typed result or one classified error.
#[async_trait(?Send)]
pub trait Backend {
    /// Toggle the like of the signed-in user on `post`
    async fn like_post(&self, post: &PostId) -> Result<LikeResponse>;

    /// Send a follow or unfollow command for a profile
    async fn follow(&self, request: &FollowRequest) -> Result<FollowResponse>;

    /// Replace the content of `post`, returning the server's acknowledgement
    async fn edit_post(&self, post: &PostId, content: &str) -> Result<serde_json::Value>;
}
