//! App layer - central state management and command processing
//!
//! The App actor receives UI events and animation frames, updates state,
//! mounts/unmounts the landing page animation, and emits render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::AppState;
pub use actor::AppActor;
