//! Animation actor - drives one typing animation on Tokio timers

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::messages::AnimationFrame;
use crate::typing::component::TypingAnimation;
use crate::typing::machine::WordList;
use crate::typing::scheduler::TokioScheduler;
use crate::typing::timing::{Jitter, Timing};

/// Animation actor that mounts a [`TypingAnimation`] on Tokio timers and streams frames
pub struct AnimationActor<J> {
    animation: TypingAnimation<J>,
    scheduler: TokioScheduler,
    generation: u64,
    frame_tx: mpsc::UnboundedSender<AnimationFrame>,
}

impl<J: Jitter + Send + 'static> AnimationActor<J> {
    pub fn new(
        words: WordList,
        timing: Timing,
        jitter: J,
        generation: u64,
        frame_tx: mpsc::UnboundedSender<AnimationFrame>,
    ) -> Self {
        AnimationActor {
            animation: TypingAnimation::new(words, timing, jitter),
            scheduler: TokioScheduler::new(),
            generation,
            frame_tx,
        }
    }

    /// Spawn the actor on the current runtime
    pub fn spawn(self) -> AnimationHandle {
        let generation = self.generation;
        let (cancel_tx, cancel_rx) = oneshot::channel();
        let task = tokio::spawn(self.run(cancel_rx));
        AnimationHandle {
            generation,
            cancel_tx: Some(cancel_tx),
            task,
        }
    }

    /// Run the tick loop until cancelled or the frame receiver goes away
    pub async fn run(mut self, mut cancel_rx: oneshot::Receiver<()>) {
        self.animation.mount(&mut self.scheduler);
        tracing::debug!(generation = self.generation, "Animation mounted");

        if !self.emit() {
            self.animation.unmount(&mut self.scheduler);
            return;
        }

        loop {
            tokio::select! {
                biased;

                _ = &mut cancel_rx => {
                    self.animation.unmount(&mut self.scheduler);
                    tracing::debug!(generation = self.generation, "Animation unmounted");
                    break;
                }

                id = self.scheduler.fired() => {
                    let transition = self.animation.on_tick(&mut self.scheduler, id);
                    tracing::trace!(generation = self.generation, ?transition, "Animation tick");
                    if !self.emit() {
                        self.animation.unmount(&mut self.scheduler);
                        break;
                    }
                }
            }
        }
    }

    fn emit(&self) -> bool {
        let frame = AnimationFrame {
            generation: self.generation,
            text: self.animation.text().to_string(),
            word_index: self.animation.state().word_index,
            phase: self.animation.phase(),
        };
        self.frame_tx.send(frame).is_ok()
    }
}

/// Owner side of a running animation. Dropping it cancels the animation.
#[derive(Debug)]
pub struct AnimationHandle {
    generation: u64,
    cancel_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl AnimationHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop the animation. Calling this again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(cancel_tx) = self.cancel_tx.take() {
            let _ = cancel_tx.send(());
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_tx.is_none()
    }

    /// Whether the task has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
