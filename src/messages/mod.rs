//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI, App, and Animation layers.

pub mod ui_events;
pub mod animation;
pub mod render;

pub use ui_events::UiEvent;
pub use animation::AnimationFrame;
pub use render::RenderState;
