//! Event Handlers
//!
//! One module per page interaction.

pub mod editor;
pub mod follow;
pub mod like;
