//! App actor - message loop processing UI events and animation frames

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::error::Result;
use crate::messages::ui_events::Page;
use crate::messages::{AnimationFrame, RenderState, UiEvent};
use crate::models::Profile;
use crate::typing::{AnimationActor, AnimationHandle, Jitter, RandomJitter, Timing, WordList};

type JitterFactory = Box<dyn Fn() -> Box<dyn Jitter + Send> + Send>;

/// App actor that processes UI events and owns the landing page animation
pub struct AppActor {
    state: AppState,
    words: WordList,
    timing: Timing,
    make_jitter: JitterFactory,
    animation: Option<AnimationHandle>,
    next_generation: u64,
    frame_tx: mpsc::UnboundedSender<AnimationFrame>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    /// Fails if the profile has no phrases to animate
    pub fn new(
        profile: Profile,
        frame_tx: mpsc::UnboundedSender<AnimationFrame>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Result<Self> {
        let words = profile.word_list()?;
        let timing = profile.timing;

        Ok(AppActor {
            state: AppState::new(profile),
            words,
            timing,
            make_jitter: Box::new(|| Box::new(RandomJitter::new()) as Box<dyn Jitter + Send>),
            animation: None,
            next_generation: 0,
            frame_tx,
            render_tx,
        })
    }

    /// Replace the jitter source used for every new animation mount
    pub fn with_jitter<F, J>(mut self, make: F) -> Self
    where
        F: Fn() -> J + Send + 'static,
        J: Jitter + Send + 'static,
    {
        self.make_jitter = Box::new(move || Box::new(make()) as Box<dyn Jitter + Send>);
        self
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut frame_rx: mpsc::UnboundedReceiver<AnimationFrame>,
    ) {
        if self.state.is_landing() {
            self.mount_animation();
        }

        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(frame) = frame_rx.recv() => {
                    if self.state.apply_frame(frame) {
                        let _ = self.render_tx.send(self.state.to_render_state());
                    }
                }
                else => break,
            }
        }

        self.unmount_animation();
        tracing::info!("App actor stopped");
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        let before = self.state.page;

        match event {
            // Navigation
            UiEvent::Navigate(page) => self.state.navigate(page),
            UiEvent::GoBack => self.state.go_back(),
            UiEvent::FocusNext => self.state.focus_next(),
            UiEvent::FocusPrev => self.state.focus_prev(),
            UiEvent::Activate => self.state.activate(),

            // Details page
            UiEvent::NextProject => self.state.next_project(),
            UiEvent::PrevProject => self.state.prev_project(),
            UiEvent::ScrollUp => self.state.scroll_up(),
            UiEvent::ScrollDown => self.state.scroll_down(),
            UiEvent::Resize(width, height) => self.state.resize(width, height),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        self.sync_animation(before);
        false
    }

    /// Mount the animation when the landing page appears, unmount when it goes away
    fn sync_animation(&mut self, before: Page) {
        match (before == Page::Landing, self.state.is_landing()) {
            (false, true) => self.mount_animation(),
            (true, false) => self.unmount_animation(),
            _ => {}
        }
    }

    fn mount_animation(&mut self) {
        self.unmount_animation();

        let generation = self.next_generation;
        self.next_generation += 1;
        self.state.begin_animation(generation);

        let actor = AnimationActor::new(
            self.words.clone(),
            self.timing,
            (self.make_jitter)(),
            generation,
            self.frame_tx.clone(),
        );
        self.animation = Some(actor.spawn());
        tracing::info!(generation, "Typing animation mounted");
    }

    fn unmount_animation(&mut self) {
        if let Some(mut handle) = self.animation.take() {
            handle.cancel();
            tracing::info!(generation = handle.generation(), "Typing animation unmounted");
        }
        self.state.end_animation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typing::NoJitter;
    use std::time::Duration;

    fn actor() -> (
        AppActor,
        mpsc::UnboundedReceiver<AnimationFrame>,
        mpsc::UnboundedReceiver<RenderState>,
    ) {
        let (frame_tx, frame_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let actor = AppActor::new(Profile::default(), frame_tx, render_tx)
            .unwrap()
            .with_jitter(|| NoJitter);
        (actor, frame_rx, render_rx)
    }

    #[test]
    fn test_empty_profile_rejected() {
        let (frame_tx, _frame_rx) = mpsc::unbounded_channel();
        let (render_tx, _render_rx) = mpsc::unbounded_channel();
        let profile = Profile {
            phrases: Vec::new(),
            ..Profile::default()
        };
        assert!(AppActor::new(profile, frame_tx, render_tx).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_landing_unmounts_animation() {
        let (mut actor, mut frame_rx, _render_rx) = actor();
        actor.mount_animation();

        let first = frame_rx.recv().await.unwrap();
        assert_eq!(first.generation, 0);
        assert!(actor.state.apply_frame(first));

        assert!(!actor.handle_ui_event(UiEvent::Navigate(Page::Details)));
        assert!(actor.animation.is_none());
        assert_eq!(actor.state.animation_generation, None);

        // the cancelled animation stays silent
        let silent = tokio::time::timeout(Duration::from_secs(10), frame_rx.recv()).await;
        assert!(silent.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_returning_to_landing_remounts_fresh() {
        let (mut actor, mut frame_rx, _render_rx) = actor();
        actor.mount_animation();
        for _ in 0..3 {
            let frame = frame_rx.recv().await.unwrap();
            actor.state.apply_frame(frame);
        }
        assert_eq!(actor.state.typed_text, "a ");

        actor.handle_ui_event(UiEvent::Navigate(Page::Contact));
        actor.handle_ui_event(UiEvent::GoBack);

        assert_eq!(actor.state.animation_generation, Some(1));
        let frame = frame_rx.recv().await.unwrap();
        assert_eq!(frame.generation, 1);
        assert_eq!(frame.text, "");
        assert_eq!(frame.word_index, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_within_subpages_keeps_unmounted() {
        let (mut actor, _frame_rx, _render_rx) = actor();
        actor.mount_animation();
        actor.handle_ui_event(UiEvent::Navigate(Page::Details));
        actor.handle_ui_event(UiEvent::Navigate(Page::Contact));
        assert!(actor.animation.is_none());
        assert_eq!(actor.next_generation, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_streams_typed_text_and_quits() {
        let (actor, frame_rx, mut render_rx) = actor();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(actor.run(ui_rx, frame_rx));

        let initial = render_rx.recv().await.unwrap();
        assert_eq!(initial.page, Page::Landing);

        let mut typed = String::new();
        while typed != "a Fr" {
            typed = render_rx.recv().await.unwrap().typed_text;
        }

        ui_tx.send(UiEvent::Activate).unwrap();
        let mut state = render_rx.recv().await.unwrap();
        while state.page != Page::Details {
            state = render_rx.recv().await.unwrap();
        }
        assert_eq!(state.typed_text, "");

        ui_tx.send(UiEvent::Quit).unwrap();
        task.await.unwrap();
    }
}
