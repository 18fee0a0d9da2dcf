//! HTTP Backend
//!
//! `fetch`-based implementation of [`Backend`](super::Backend).

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging;
use serde::de::DeserializeOwned;
use web_sys::RequestMode;

use super::Backend;
use crate::config::UiConfig;
use crate::cookie::{csrf_token, CsrfToken};
use crate::dom;
use crate::error::{Error, Result};
use crate::models::{EditRequest, FollowRequest, FollowResponse, LikeResponse, PostId};

/// Same-origin JSON client; reads the CSRF token again for every request
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: UiConfig,
}

impl HttpBackend {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }

    fn token(&self) -> Result<CsrfToken> {
        csrf_token(&dom::document()?, &self.config.csrf_cookie)
    }

    /// Attach the CSRF header and same-origin mode
    fn prepare(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.token()?;
        Ok(builder
            .header(&self.config.csrf_header, token.as_str())
            .mode(RequestMode::SameOrigin))
    }
}

/// Non-2xx statuses are rejections
fn rejection(status: u16) -> Option<Error> {
    if (200..300).contains(&status) {
        None
    } else {
        Some(Error::Rejected { status })
    }
}

async fn send(request: Request) -> Result<Response> {
    let url = request.url();
    let response = request
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;
    if let Some(rejected) = rejection(response.status()) {
        logging::warn!("[API] {} answered {}", url, response.status());
        return Err(rejected);
    }
    Ok(response)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| Error::Malformed(e.to_string()))
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn like_post(&self, post: &PostId) -> Result<LikeResponse> {
        let url = self.config.like_url(post.as_str());
        let request = self
            .prepare(Request::post(&url))?
            .build()
            .map_err(|e| Error::Dom(e.to_string()))?;
        read_json(send(request).await?).await
    }

    async fn follow(&self, body: &FollowRequest) -> Result<FollowResponse> {
        let request = self
            .prepare(Request::post(&self.config.follow_url))?
            .json(body)
            .map_err(|e| Error::Dom(e.to_string()))?;
        read_json(send(request).await?).await
    }

    async fn edit_post(&self, post: &PostId, content: &str) -> Result<serde_json::Value> {
        let url = self.config.edit_url(post.as_str());
        let request = self
            .prepare(Request::put(&url))?
            .json(&EditRequest { content })
            .map_err(|e| Error::Dom(e.to_string()))?;
        read_json(send(request).await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_pass() {
        assert!(rejection(200).is_none());
        assert!(rejection(204).is_none());
    }

    #[test]
    fn test_other_statuses_are_rejected() {
        for status in [301, 403, 404, 500] {
            assert!(matches!(rejection(status), Some(Error::Rejected { status: s }) if s == status));
        }
    }
}
