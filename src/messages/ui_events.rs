//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The three views of the portfolio; exactly one is shown at a time
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Page {
    #[default]
    Landing,
    Details,
    Contact,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Details => "About",
            Page::Contact => "Contact",
        }
    }
}

/// Buttons on the landing page
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LandingButton {
    #[default]
    DiscoverMore,
    ContactMe,
}

impl LandingButton {
    pub fn next(&self) -> LandingButton {
        match self {
            LandingButton::DiscoverMore => LandingButton::ContactMe,
            LandingButton::ContactMe => LandingButton::DiscoverMore,
        }
    }

    pub fn prev(&self) -> LandingButton {
        // two buttons, so prev and next coincide
        self.next()
    }

    pub fn label(&self) -> &'static str {
        match self {
            LandingButton::DiscoverMore => "Discover More →",
            LandingButton::ContactMe => "Contact Me",
        }
    }

    /// Page the button leads to
    pub fn target(&self) -> Page {
        match self {
            LandingButton::DiscoverMore => Page::Details,
            LandingButton::ContactMe => Page::Contact,
        }
    }
}

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // Navigation
    Navigate(Page),
    GoBack,
    FocusNext,
    FocusPrev,
    Activate,

    // Details page
    NextProject,
    PrevProject,
    ScrollUp,
    ScrollDown,
    /// Terminal resized to (width, height)
    Resize(u16, u16),

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, page: Page, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // Any key closes the help popup
    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        _ => {}
    }

    match page {
        Page::Landing => handle_landing_keys(key),
        Page::Details => handle_details_keys(key),
        Page::Contact => handle_contact_keys(key),
    }
}

/// Handle keys for the landing page
fn handle_landing_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Tab | KeyCode::Right => Some(UiEvent::FocusNext),
        KeyCode::BackTab | KeyCode::Left => Some(UiEvent::FocusPrev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiEvent::Activate),
        KeyCode::Char('d') => Some(UiEvent::Navigate(Page::Details)),
        KeyCode::Char('c') => Some(UiEvent::Navigate(Page::Contact)),
        _ => None,
    }
}

/// Handle keys for the details page
fn handle_details_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Enter => Some(UiEvent::GoBack),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::PrevProject),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NextProject),
        KeyCode::PageUp => Some(UiEvent::ScrollUp),
        KeyCode::PageDown => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

/// Handle keys for the contact page
fn handle_contact_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') | KeyCode::Enter => Some(UiEvent::GoBack),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_landing_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Tab), Page::Landing, false), Some(UiEvent::FocusNext));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), Page::Landing, false), Some(UiEvent::Activate));
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('c')), Page::Landing, false),
            Some(UiEvent::Navigate(Page::Contact))
        );
    }

    #[test]
    fn test_back_from_subpages() {
        for page in [Page::Details, Page::Contact] {
            assert_eq!(key_to_ui_event(press(KeyCode::Esc), page, false), Some(UiEvent::GoBack));
            assert_eq!(key_to_ui_event(press(KeyCode::Enter), page, false), Some(UiEvent::GoBack));
        }
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), Page::Landing, false), None);
    }

    #[test]
    fn test_help_swallows_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), Page::Landing, true), Some(UiEvent::CloseHelp));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('?')), Page::Details, false), Some(UiEvent::ToggleHelp));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, Page::Contact, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, Page::Landing, false), None);
    }

    #[test]
    fn test_landing_button_targets() {
        assert_eq!(LandingButton::DiscoverMore.target(), Page::Details);
        assert_eq!(LandingButton::ContactMe.target(), Page::Contact);
        assert_eq!(LandingButton::DiscoverMore.next(), LandingButton::ContactMe);
    }
}
