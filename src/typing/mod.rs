//! Typewriter animation - cycles through phrases keystroke by keystroke
//!
//! The core is a pure state machine ([`TypingMachine`]) that applies one
//! transition per tick. Delays between ticks come from [`Timing`] plus an
//! injectable [`Jitter`] source. Two drivers sit on top:
//! - [`TypingAnimation`] - mount/tick/unmount against any [`Scheduler`]
//! - [`AnimationActor`] - a Tokio task mounting a [`TypingAnimation`] on a
//!   [`TokioScheduler`] and streaming frames to the App layer

pub mod machine;
pub mod timing;
pub mod scheduler;
pub mod component;
pub mod actor;

pub use machine::{AnimationState, Mode, Phase, Transition, TypingMachine, WordList};
pub use timing::{FixedJitter, Jitter, NoJitter, RandomJitter, Timing};
pub use scheduler::{ManualScheduler, Scheduler, TickId, TokioScheduler};
pub use component::TypingAnimation;
pub use actor::{AnimationActor, AnimationHandle};
