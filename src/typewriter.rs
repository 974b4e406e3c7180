//! Character-by-character intro text.
//!
//! [`Typewriter`] only decides what to show next and how long to wait; the
//! browser side owns the timers and the DOM writes.

pub const CURSOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeLine {
    /// Id of the element receiving the text.
    pub target: &'static str,
    pub text: &'static str,
    pub char_delay_ms: u32,
    /// Pause after the line is complete, before the next one starts.
    pub next_delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Typing { line: usize, shown: usize },
    LineDone { line: usize },
    AllDone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show a prefix of the line, possibly followed by the cursor glyph.
    Type {
        target: &'static str,
        text: String,
        /// First frame of a line; the element should drop its visible state.
        fresh: bool,
        wait_ms: u32,
    },
    /// Show the full line without cursor and mark the element visible.
    Complete {
        target: &'static str,
        text: &'static str,
        wait_ms: u32,
    },
    /// Every line is done.
    Finish,
}

#[derive(Debug, Clone)]
pub struct Typewriter<'a> {
    lines: &'a [TypeLine],
    phase: Phase,
}

impl<'a> Typewriter<'a> {
    pub fn new(lines: &'a [TypeLine]) -> Self {
        Self { lines, phase: Phase::Idle }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::AllDone
    }

    /// Move the sequence forward by one render step.
    ///
    /// Returns `None` once [`Action::Finish`] has been handed out.
    pub fn advance(&mut self) -> Option<Action> {
        match self.phase {
            Phase::Idle => self.start_line(0),
            Phase::Typing { line, shown } => Some(self.type_step(line, shown)),
            Phase::LineDone { line } => self.start_line(line + 1),
            Phase::AllDone => None,
        }
    }

    fn start_line(&mut self, line: usize) -> Option<Action> {
        if line >= self.lines.len() {
            self.phase = Phase::AllDone;
            return Some(Action::Finish);
        }
        Some(self.type_step(line, 0))
    }

    fn type_step(&mut self, line: usize, shown: usize) -> Action {
        let l = &self.lines[line];
        let len = l.text.chars().count();
        if shown >= len {
            self.phase = Phase::LineDone { line };
            return Action::Complete {
                target: l.target,
                text: l.text,
                wait_ms: l.next_delay_ms,
            };
        }

        let cursor = shown % 2 == 1;
        let mut text: String = l.text.chars().take(shown).collect();
        if cursor {
            text.push(CURSOR);
        }
        self.phase = Phase::Typing { line, shown: shown + 1 };
        Action::Type {
            target: l.target,
            text,
            fresh: shown == 0,
            wait_ms: l.char_delay_ms,
        }
    }
}
