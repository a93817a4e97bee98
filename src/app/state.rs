//! App state - pure data structure with no I/O logic

use std::sync::Arc;

use ratatui::layout::Rect;

use crate::messages::ui_events::{LandingButton, Page};
use crate::messages::{AnimationFrame, RenderState};
use crate::models::Profile;
use crate::typing::Phase;

/// Main application state - pure data, no I/O
pub struct AppState {
    // Navigation
    pub page: Page,

    // Content
    pub profile: Arc<Profile>,

    // Landing page
    pub focused_button: LandingButton,
    pub typed_text: String,
    pub typing_phase: Phase,
    /// Generation of the mounted animation, if the landing page is live
    pub animation_generation: Option<u64>,

    // Details page
    pub selected_project: usize,
    pub details_scroll: u16,

    /// Last known terminal size, bounds the details scroll
    pub viewport: Rect,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

impl AppState {
    pub fn new(profile: Profile) -> Self {
        AppState {
            page: Page::Landing,
            profile: Arc::new(profile),
            focused_button: LandingButton::DiscoverMore,
            typed_text: String::new(),
            typing_phase: Phase::Typing,
            animation_generation: None,
            selected_project: 0,
            details_scroll: 0,
            viewport: Rect::new(0, 0, 80, 24),
            show_help: false,
        }
    }

    /// A fresh animation was mounted
    pub fn begin_animation(&mut self, generation: u64) {
        self.animation_generation = Some(generation);
        self.typed_text.clear();
        self.typing_phase = Phase::Typing;
    }

    /// The animation was unmounted; its text is discarded
    pub fn end_animation(&mut self) {
        self.animation_generation = None;
        self.typed_text.clear();
    }

    /// Apply a frame from the live animation. Returns false for stale frames.
    pub fn apply_frame(&mut self, frame: AnimationFrame) -> bool {
        if self.animation_generation != Some(frame.generation) {
            tracing::trace!(generation = frame.generation, "Dropping stale animation frame");
            return false;
        }
        self.typed_text = frame.text;
        self.typing_phase = frame.phase;
        true
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            page: self.page,
            profile: Arc::clone(&self.profile),
            typed_text: self.typed_text.clone(),
            typing_phase: self.typing_phase,
            focused_button: self.focused_button,
            selected_project: self.selected_project,
            details_scroll: self.details_scroll,
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(generation: u64, text: &str) -> AnimationFrame {
        AnimationFrame {
            generation,
            text: text.to_string(),
            word_index: 0,
            phase: Phase::Typing,
        }
    }

    #[test]
    fn test_frames_from_live_animation_applied() {
        let mut state = AppState::default();
        state.begin_animation(4);
        assert!(state.apply_frame(frame(4, "a F")));
        assert_eq!(state.to_render_state().typed_text, "a F");
    }

    #[test]
    fn test_stale_frames_ignored() {
        let mut state = AppState::default();
        state.begin_animation(2);
        assert!(!state.apply_frame(frame(1, "old")));
        assert_eq!(state.typed_text, "");

        state.end_animation();
        assert!(!state.apply_frame(frame(2, "late")));
        assert_eq!(state.typed_text, "");
    }
}
