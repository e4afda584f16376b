//! Reveal animation data structures.

use std::time::Duration;

/// One line of the reveal sequence: literal text plus its per-character delay.
///
/// Lines are provided wholesale by the caller and are immutable once the
/// animation begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealLine {
    /// Literal text content.
    pub text: String,
    /// Delay between successive character reveals of this line.
    pub delay: Duration,
}

impl RevealLine {
    /// Creates a line from text and a per-character delay.
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
        }
    }

    /// Number of characters (Unicode scalars, not bytes) in this line.
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }
}

/// Phase of the reveal state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Nothing displayed yet; a lone cursor blinks.
    Idle,
    /// The current line has more characters to reveal.
    RevealingChar,
    /// The current line is complete; pausing before the next line.
    LinePause,
    /// Every line is fully revealed. Terminal; no further scheduling.
    Done,
}
