//! # notymn TUI
//!
//! A personal portfolio rendered in the terminal.
//!
//! ## Features
//! - Landing page with a typewriter cycling through phrases
//! - About page with biography and project cards
//! - Contact page with static links
//! - Content overridable from a YAML or JSON profile
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Animation Layer (Tokio timers)

pub mod constants;
pub mod error;
pub mod models;
pub mod storage;
pub mod ui;
pub mod typing;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use error::{Error, Result};
pub use models::{ContactLink, Profile, Project};
pub use typing::{TypingAnimation, TypingMachine, WordList};
pub use messages::{AnimationFrame, RenderState, UiEvent};
pub use app::{AppActor, AppState};
