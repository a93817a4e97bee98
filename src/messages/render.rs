//! Render state - data structure sent from App layer to UI for rendering

use std::sync::Arc;

use crate::messages::ui_events::{LandingButton, Page};
use crate::models::Profile;
use crate::typing::Phase;

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub page: Page,

    // Static content, shared rather than copied per frame
    pub profile: Arc<Profile>,

    // Landing
    pub typed_text: String,
    pub typing_phase: Phase,
    pub focused_button: LandingButton,

    // Details
    pub selected_project: usize,
    pub details_scroll: u16,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            page: Page::Landing,
            profile: Arc::new(Profile::default()),
            typed_text: String::new(),
            typing_phase: Phase::Typing,
            focused_button: LandingButton::DiscoverMore,
            selected_project: 0,
            details_scroll: 0,
            show_help: false,
        }
    }
}
