//! Network UI
//!
//! Page interactions for the network social app: liking posts,
//! following profiles and editing posts in place.

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod context;
pub mod cookie;
pub mod dom;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notification;

pub use bootstrap::start;
pub use context::UiContext;
pub use error::{Error, Result};
