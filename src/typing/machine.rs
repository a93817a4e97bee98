//! Typing state machine - pure data, no timers

use std::time::Duration;

use crate::error::{Error, Result};
use crate::typing::timing::{Jitter, Timing};

/// Ordered, non-empty list of phrases to cycle through
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordList(Vec<String>);

impl WordList {
    /// Build a word list, rejecting an empty one
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(WordList(words))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no phrases
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Phrase at `index`, wrapping around the list
    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Direction the animation is currently moving in
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    #[default]
    Typing,
    Deleting,
}

/// Observable phase, with the pause after a completed phrase made explicit
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    /// Displayed text is a strict prefix of the phrase
    #[default]
    Typing,
    /// Full phrase shown; the switch to deleting is pending
    Holding,
    /// Removing characters, or about to advance to the next phrase
    Deleting,
}

/// Mutable runtime state of one animation
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AnimationState {
    pub word_index: usize,
    pub displayed: String,
    pub mode: Mode,
}

/// What a single tick did
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    /// One character appended
    Typed(char),
    /// Full phrase reached; switched to deleting
    Held,
    /// One character removed
    Deleted(char),
    /// Text emptied; switched to typing the phrase at `word_index`
    Advanced { word_index: usize },
}

/// Typing/deleting state machine over a [`WordList`]
#[derive(Clone, Debug)]
pub struct TypingMachine {
    words: WordList,
    state: AnimationState,
}

impl TypingMachine {
    pub fn new(words: WordList) -> Self {
        TypingMachine {
            words,
            state: AnimationState::default(),
        }
    }

    /// Return to the initial state: first phrase, empty text, typing
    pub fn reset(&mut self) {
        self.state = AnimationState::default();
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn text(&self) -> &str {
        &self.state.displayed
    }

    pub fn word_index(&self) -> usize {
        self.state.word_index
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    /// Phrase currently being typed or deleted
    pub fn current_word(&self) -> &str {
        self.words.get(self.state.word_index)
    }

    pub fn phase(&self) -> Phase {
        match self.state.mode {
            Mode::Typing if self.state.displayed.len() == self.current_word().len() => Phase::Holding,
            Mode::Typing => Phase::Typing,
            Mode::Deleting => Phase::Deleting,
        }
    }

    /// Apply exactly one transition
    pub fn tick(&mut self) -> Transition {
        match self.state.mode {
            Mode::Typing => {
                // displayed is a prefix of the word, so its byte length is a char boundary
                let word = self.words.get(self.state.word_index);
                match word[self.state.displayed.len()..].chars().next() {
                    Some(c) => {
                        self.state.displayed.push(c);
                        Transition::Typed(c)
                    }
                    None => {
                        self.state.mode = Mode::Deleting;
                        Transition::Held
                    }
                }
            }
            Mode::Deleting => match self.state.displayed.pop() {
                Some(c) => Transition::Deleted(c),
                None => {
                    self.state.mode = Mode::Typing;
                    self.state.word_index = (self.state.word_index + 1) % self.words.len();
                    Transition::Advanced {
                        word_index: self.state.word_index,
                    }
                }
            },
        }
    }

    /// Delay before the next tick should fire, given the current state
    pub fn next_delay<J: Jitter + ?Sized>(&self, timing: &Timing, jitter: &mut J) -> Duration {
        match self.phase() {
            Phase::Holding => timing.hold(),
            Phase::Typing => timing.typing() + jitter.jitter(timing.jitter_max()),
            Phase::Deleting => timing.deleting() + jitter.jitter(timing.jitter_max()),
        }
    }
}
