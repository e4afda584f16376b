//! Typewriter reveal animation.
//!
//! Renders an ordered sequence of text lines progressively, one character at
//! a time, producing a terminal-like typing effect. The state machine
//! ([`RevealAnimator`]) is purely synchronous and fully testable without
//! timers; [`play`] drives it on the tokio clock with explicit cancellation.

mod animator;
mod play;
mod script;
mod types;

// Re-export public API
pub use animator::RevealAnimator;
pub use play::{play, RevealSink, TerminalSink};
pub use script::{console_script, name_banner};
pub use types::{RevealLine, RevealPhase};
