//! Async driver for the reveal state machine.
//!
//! The machine itself never touches the clock; this driver sleeps the delay
//! the machine asks for, advances it by one step, and repaints. Teardown is
//! a [`CancellationToken`]: once cancelled, no further step fires and the
//! sink is never touched again. There is no closure holding stale state.

use std::io::{self, Write};

use tokio_util::sync::CancellationToken;

use crate::reveal::animator::RevealAnimator;

/// A display surface the driver repaints after every transition.
pub trait RevealSink {
    /// Replaces the displayed content with `frame`.
    fn render(&mut self, frame: &[String]);
}

/// Terminal sink: repaints the frame in place using ANSI cursor movement.
#[derive(Debug, Default)]
pub struct TerminalSink {
    drawn_rows: usize,
}

impl TerminalSink {
    /// Creates a sink that has drawn nothing yet.
    pub fn new() -> Self {
        Self::default()
    }
}

impl RevealSink for TerminalSink {
    fn render(&mut self, frame: &[String]) {
        let mut out = String::new();
        // rewind over what we drew last time, clearing each row
        for _ in 0..self.drawn_rows {
            out.push_str("\x1b[1A\x1b[2K");
        }
        for line in frame {
            out.push_str(line);
            out.push('\n');
        }
        self.drawn_rows = frame.len();
        let mut stdout = io::stdout();
        // a vanished terminal is not worth surfacing mid-animation
        let _ = stdout.write_all(out.as_bytes());
        let _ = stdout.flush();
    }
}

/// Plays the animation to completion or cancellation.
///
/// Renders the initial frame, then loops: wait the machine's next delay,
/// step, repaint. At most one sleep is pending at any time. If `cancel`
/// fires while waiting, the pending transition is abandoned and the sink is
/// left exactly as last rendered. A token that has already fired means the
/// surface is retired: nothing is rendered at all.
pub async fn play<S: RevealSink>(
    animator: &mut RevealAnimator,
    sink: &mut S,
    cancel: &CancellationToken,
) {
    if cancel.is_cancelled() {
        return;
    }
    sink.render(&animator.frame());
    while let Some(delay) = animator.next_delay() {
        tokio::select! {
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(delay) => {}
        }
        animator.step();
        sink.render(&animator.frame());
    }
}
