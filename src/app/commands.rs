//! Command handlers - business logic for processing UI events

use ratatui::layout::Rect;

use crate::app::AppState;
use crate::messages::ui_events::Page;
use crate::ui::details_max_scroll;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn navigate(&mut self, page: Page) {
        if self.page == page {
            return;
        }
        if page == Page::Details {
            self.details_scroll = 0;
        }
        tracing::debug!(from = ?self.page, to = ?page, "Navigate");
        self.page = page;
    }

    pub fn go_back(&mut self) {
        self.navigate(Page::Landing);
    }

    pub fn focus_next(&mut self) {
        self.focused_button = self.focused_button.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused_button = self.focused_button.prev();
    }

    /// Press the focused button of the current page
    pub fn activate(&mut self) {
        match self.page {
            Page::Landing => self.navigate(self.focused_button.target()),
            Page::Details | Page::Contact => self.go_back(),
        }
    }

    // ========================
    // Details page
    // ========================

    pub fn next_project(&mut self) {
        let count = self.profile.projects.len();
        if count > 0 && self.selected_project + 1 < count {
            self.selected_project += 1;
        }
    }

    pub fn prev_project(&mut self) {
        self.selected_project = self.selected_project.saturating_sub(1);
    }

    pub fn scroll_up(&mut self) {
        self.details_scroll = self.details_scroll.saturating_sub(3);
    }

    pub fn scroll_down(&mut self) {
        self.details_scroll = self.details_scroll.saturating_add(3).min(self.max_details_scroll());
    }

    pub fn max_details_scroll(&self) -> u16 {
        details_max_scroll(&self.profile, self.viewport)
    }

    /// The terminal was resized; keeps the details scroll in range
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Rect::new(0, 0, width, height);
        self.details_scroll = self.details_scroll.min(self.max_details_scroll());
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn is_landing(&self) -> bool {
        self.page == Page::Landing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Profile, Project};

    #[test]
    fn test_activate_follows_focus() {
        let mut state = AppState::default();
        state.activate();
        assert_eq!(state.page, Page::Details);

        state.activate();
        assert_eq!(state.page, Page::Landing);

        state.focus_next();
        state.activate();
        assert_eq!(state.page, Page::Contact);
    }

    #[test]
    fn test_go_back_returns_to_landing() {
        let mut state = AppState::default();
        for page in [Page::Details, Page::Contact] {
            state.navigate(page);
            assert_eq!(state.page, page);
            state.go_back();
            assert!(state.is_landing());
        }
    }

    #[test]
    fn test_project_selection_clamped() {
        let mut state = AppState::default();
        state.navigate(Page::Details);
        state.prev_project();
        assert_eq!(state.selected_project, 0);
        for _ in 0..10 {
            state.next_project();
        }
        assert_eq!(state.selected_project, state.profile.projects.len() - 1);
    }

    #[test]
    fn test_entering_details_resets_scroll() {
        let mut state = AppState::default();
        state.navigate(Page::Details);
        state.scroll_down();
        assert_eq!(state.details_scroll, 3);
        state.go_back();
        state.navigate(Page::Details);
        assert_eq!(state.details_scroll, 0);
        state.scroll_up();
        assert_eq!(state.details_scroll, 0);
    }

    fn long_profile() -> Profile {
        let projects = (0..20)
            .map(|i| Project::new(format!("Project {i}"), "Side project", "https://example.com"))
            .collect();
        Profile {
            projects,
            ..Profile::default()
        }
    }

    #[test]
    fn test_scroll_down_stops_at_content_end() {
        let mut state = AppState::new(long_profile());
        state.resize(80, 24);
        state.navigate(Page::Details);
        let max = state.max_details_scroll();
        assert!(max > 0);

        for _ in 0..1000 {
            state.scroll_down();
        }
        assert_eq!(state.details_scroll, max);

        // one step up is visible immediately
        state.scroll_up();
        assert_eq!(state.details_scroll, max - 3);
    }

    #[test]
    fn test_scroll_stays_put_when_content_fits() {
        let mut state = AppState::default();
        state.resize(200, 500);
        state.navigate(Page::Details);
        state.scroll_down();
        assert_eq!(state.details_scroll, 0);
    }

    #[test]
    fn test_resize_clamps_scroll() {
        let mut state = AppState::new(long_profile());
        state.resize(80, 24);
        state.navigate(Page::Details);
        for _ in 0..100 {
            state.scroll_down();
        }
        assert!(state.details_scroll > 0);

        state.resize(80, 500);
        assert_eq!(state.details_scroll, 0);
    }

    #[test]
    fn test_help_toggle() {
        let mut state = AppState::default();
        state.toggle_help();
        assert!(state.show_help);
        state.close_help();
        assert!(!state.show_help);
    }
}
