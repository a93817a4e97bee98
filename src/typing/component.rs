//! Mountable typing animation driven by an external [`Scheduler`]

use crate::typing::machine::{AnimationState, Phase, Transition, TypingMachine, WordList};
use crate::typing::scheduler::{Scheduler, TickId};
use crate::typing::timing::{Jitter, Timing};

/// A typing animation with a mount/unmount lifecycle.
///
/// While mounted exactly one tick is pending. Each fired tick applies one
/// transition and schedules the next. Unmounting cancels the pending tick,
/// after which nothing mutates the state until the next mount.
#[derive(Debug)]
pub struct TypingAnimation<J> {
    machine: TypingMachine,
    timing: Timing,
    jitter: J,
    pending: Option<TickId>,
}

impl<J: Jitter> TypingAnimation<J> {
    pub fn new(words: WordList, timing: Timing, jitter: J) -> Self {
        TypingAnimation {
            machine: TypingMachine::new(words),
            timing,
            jitter,
            pending: None,
        }
    }

    /// Seed the initial state and schedule the first tick
    pub fn mount<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.unmount(scheduler);
        self.machine.reset();
        self.schedule_next(scheduler);
    }

    /// Handle a fired tick. Ticks other than the pending one are ignored.
    pub fn on_tick<S: Scheduler>(&mut self, scheduler: &mut S, id: TickId) -> Option<Transition> {
        if self.pending != Some(id) {
            return None;
        }
        self.pending = None;
        let transition = self.machine.tick();
        self.schedule_next(scheduler);
        Some(transition)
    }

    /// Cancel the pending tick. Safe to call any number of times.
    pub fn unmount<S: Scheduler>(&mut self, scheduler: &mut S) -> bool {
        match self.pending.take() {
            Some(id) => scheduler.cancel(id),
            None => false,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_tick(&self) -> Option<TickId> {
        self.pending
    }

    /// Current render output
    pub fn text(&self) -> &str {
        self.machine.text()
    }

    pub fn state(&self) -> &AnimationState {
        self.machine.state()
    }

    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    fn schedule_next<S: Scheduler>(&mut self, scheduler: &mut S) {
        let delay = self.machine.next_delay(&self.timing, &mut self.jitter);
        self.pending = Some(scheduler.schedule(delay));
    }
}
