//! Animation frames - messages from a running typing animation to the App layer

use crate::typing::Phase;

/// Snapshot of a typing animation after mount or after a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Which mount produced this frame; stale generations are dropped
    pub generation: u64,
    pub text: String,
    pub word_index: usize,
    pub phase: Phase,
}
