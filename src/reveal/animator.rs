//! The reveal state machine.

use std::time::Duration;

use crate::config::CURSOR_GLYPH;
use crate::reveal::types::{RevealLine, RevealPhase};

/// An explicit finite-state machine over `(line index, char index)`.
///
/// Each [`step`](RevealAnimator::step) performs exactly one transition:
/// either one more character of the current line is revealed, or (after the
/// line pause) the cursor advances to the next line. The machine does no
/// scheduling itself; [`next_delay`](RevealAnimator::next_delay) tells the
/// driver how long to wait before the next step, so at most one timer is
/// ever pending.
///
/// Invariants: the line index is within bounds or one past the last line
/// (terminal state); the char index never exceeds the current line's length.
#[derive(Debug)]
pub struct RevealAnimator {
    lines: Vec<RevealLine>,
    line_idx: usize,
    char_idx: usize,
    revealed: Vec<String>,
    line_pause: Duration,
}

impl RevealAnimator {
    /// Creates an animator in `Idle` over the given lines.
    pub fn new(lines: Vec<RevealLine>, line_pause: Duration) -> Self {
        Self {
            lines,
            line_idx: 0,
            char_idx: 0,
            revealed: Vec::new(),
            line_pause,
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> RevealPhase {
        let Some(line) = self.lines.get(self.line_idx) else {
            return RevealPhase::Done;
        };
        if self.char_idx >= line.len_chars() {
            RevealPhase::LinePause
        } else if self.line_idx == 0 && self.char_idx == 0 {
            RevealPhase::Idle
        } else {
            RevealPhase::RevealingChar
        }
    }

    /// How long the driver should wait before the next [`step`](Self::step).
    ///
    /// `None` once the machine is `Done`; nothing left to schedule.
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase() {
            RevealPhase::Done => None,
            RevealPhase::LinePause => Some(self.line_pause),
            RevealPhase::Idle | RevealPhase::RevealingChar => {
                Some(self.lines[self.line_idx].delay)
            }
        }
    }

    /// Performs one transition and returns the resulting phase.
    ///
    /// In `Done` this is a no-op.
    pub fn step(&mut self) -> RevealPhase {
        let Some(line) = self.lines.get(self.line_idx) else {
            return RevealPhase::Done;
        };
        if self.char_idx < line.len_chars() {
            // character reveal
            let shown: String = line.text.chars().take(self.char_idx + 1).collect();
            if self.revealed.len() == self.line_idx {
                self.revealed.push(shown);
            } else {
                self.revealed[self.line_idx] = shown;
            }
            self.char_idx += 1;
        } else {
            // line advance
            if self.revealed.len() == self.line_idx {
                // zero-length line still occupies a display row
                self.revealed.push(String::new());
            }
            self.line_idx += 1;
            self.char_idx = 0;
        }
        self.phase()
    }

    /// Runs the machine to `Done` without any delays.
    pub fn finish(&mut self) {
        while self.phase() != RevealPhase::Done {
            self.step();
        }
    }

    /// Resets to `Idle` over a fresh sequence of lines.
    pub fn restart(&mut self, lines: Vec<RevealLine>) {
        self.lines = lines;
        self.line_idx = 0;
        self.char_idx = 0;
        self.revealed.clear();
    }

    /// The lines revealed so far (the current line possibly partial).
    pub fn revealed_lines(&self) -> &[String] {
        &self.revealed
    }

    /// The display frame at this instant.
    ///
    /// Every line before the current one is fully shown; the current line is
    /// shown up to the char index with the cursor glyph appended while it is
    /// still incomplete; later lines are absent. In `Idle` (and at the start
    /// of every line) a lone cursor occupies its own row.
    pub fn frame(&self) -> Vec<String> {
        let mut out = self.revealed.clone();
        if let Some(line) = self.lines.get(self.line_idx) {
            if self.char_idx == 0 {
                out.push(CURSOR_GLYPH.to_string());
            } else if self.char_idx < line.len_chars() {
                out[self.line_idx].push(CURSOR_GLYPH);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str, millis: u64) -> RevealLine {
        RevealLine::new(text, Duration::from_millis(millis))
    }

    #[test]
    fn test_single_line_sequence() {
        let mut anim = RevealAnimator::new(vec![line("AB", 10)], Duration::from_millis(500));

        assert_eq!(anim.phase(), RevealPhase::Idle);
        assert!(anim.revealed_lines().is_empty());
        assert_eq!(anim.frame(), vec!["▋"]);
        assert_eq!(anim.next_delay(), Some(Duration::from_millis(10)));

        assert_eq!(anim.step(), RevealPhase::RevealingChar);
        assert_eq!(anim.revealed_lines(), ["A"]);
        assert_eq!(anim.frame(), vec!["A▋"]);

        assert_eq!(anim.step(), RevealPhase::LinePause);
        assert_eq!(anim.revealed_lines(), ["AB"]);
        // cursor shown only while the line is incomplete
        assert_eq!(anim.frame(), vec!["AB"]);
        assert_eq!(anim.next_delay(), Some(Duration::from_millis(500)));

        assert_eq!(anim.step(), RevealPhase::Done);
        assert_eq!(anim.next_delay(), None);
        assert_eq!(anim.frame(), vec!["AB"]);
    }

    #[test]
    fn test_multi_line_advance_and_lone_cursor() {
        let mut anim = RevealAnimator::new(vec![line("A", 10), line("B", 20)], Duration::ZERO);

        anim.step(); // "A"
        anim.step(); // advance to line 1
        assert_eq!(anim.phase(), RevealPhase::RevealingChar);
        // new line starts with a lone cursor on its own row
        assert_eq!(anim.frame(), vec!["A", "▋"]);
        assert_eq!(anim.next_delay(), Some(Duration::from_millis(20)));

        anim.step(); // "B"
        anim.step(); // advance past line 1
        assert_eq!(anim.phase(), RevealPhase::Done);
        assert_eq!(anim.revealed_lines(), ["A", "B"]);
    }

    #[test]
    fn test_empty_line_occupies_a_row() {
        let mut anim = RevealAnimator::new(vec![line("", 10), line("X", 10)], Duration::ZERO);
        assert_eq!(anim.phase(), RevealPhase::LinePause);
        anim.step(); // advance past the empty line
        anim.step(); // "X"
        anim.finish();
        assert_eq!(anim.revealed_lines(), ["", "X"]);
    }

    #[test]
    fn test_empty_sequence_is_done() {
        let mut anim = RevealAnimator::new(Vec::new(), Duration::ZERO);
        assert_eq!(anim.phase(), RevealPhase::Done);
        assert_eq!(anim.next_delay(), None);
        assert_eq!(anim.step(), RevealPhase::Done);
        assert!(anim.frame().is_empty());
    }

    #[test]
    fn test_unicode_reveals_by_scalar() {
        let mut anim = RevealAnimator::new(vec![line("né", 10)], Duration::ZERO);
        anim.step();
        assert_eq!(anim.revealed_lines(), ["n"]);
        anim.step();
        assert_eq!(anim.revealed_lines(), ["né"]);
        assert_eq!(anim.phase(), RevealPhase::LinePause);
    }

    #[test]
    fn test_restart_reproduces_sequence() {
        let mut anim = RevealAnimator::new(vec![line("AB", 10)], Duration::from_millis(500));
        anim.finish();
        assert_eq!(anim.phase(), RevealPhase::Done);

        anim.restart(vec![line("CD", 10)]);
        assert_eq!(anim.phase(), RevealPhase::Idle);
        assert!(anim.revealed_lines().is_empty());
        anim.step();
        assert_eq!(anim.revealed_lines(), ["C"]);
        anim.step();
        assert_eq!(anim.revealed_lines(), ["CD"]);
        anim.step();
        assert_eq!(anim.phase(), RevealPhase::Done);
    }

    #[test]
    fn test_finish_reveals_everything() {
        let mut anim = RevealAnimator::new(
            vec![line("abc", 10), line("def", 20), line("g", 30)],
            Duration::from_millis(500),
        );
        anim.finish();
        assert_eq!(anim.revealed_lines(), ["abc", "def", "g"]);
        assert_eq!(anim.frame(), vec!["abc", "def", "g"]);
    }
}
