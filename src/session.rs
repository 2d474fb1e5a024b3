use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::{
    input::InputBuffer,
    matching::{self, Highlight, Tone},
    passage::Passage,
    score::Score,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SessionState {
    NotStarted,
    Running,
    Finished,
}

/// A keystroke as the session understands it, independent of the terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Space,
    Backspace,
    Cancel,
}

/// What a single event did to the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Ignored,
    Edited,
    Advanced,
    Finished(Score),
    Cancelled,
    Dismissed,
}

/// One typing run over a single passage.
#[derive(Debug, Clone)]
pub struct Session {
    passage: Passage,
    input: InputBuffer,
    state: SessionState,
    started_at: Option<Instant>,
    elapsed: Option<Duration>,
}

impl Session {
    pub fn new(text: &str) -> Self {
        Self {
            passage: Passage::new(text),
            input: InputBuffer::new(),
            state: SessionState::NotStarted,
            started_at: None,
            elapsed: None,
        }
    }

    pub fn passage(&self) -> &Passage {
        &self.passage
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.elapsed
    }

    pub fn start(&mut self) -> Transition {
        self.start_at(Instant::now())
    }

    /// Starts the clock. A passage with no words finishes immediately.
    pub fn start_at(&mut self, now: Instant) -> Transition {
        if self.state != SessionState::NotStarted {
            return Transition::Ignored;
        }
        self.started_at = Some(now);
        self.set_state(SessionState::Running);

        if self.is_complete() {
            return self.finish(now);
        }
        Transition::Edited
    }

    pub fn handle_key(&mut self, key: KeyInput) -> Transition {
        self.handle_key_at(key, Instant::now())
    }

    pub fn handle_key_at(&mut self, key: KeyInput, now: Instant) -> Transition {
        match self.state {
            SessionState::NotStarted => Transition::Ignored,
            SessionState::Finished => Transition::Dismissed,
            SessionState::Running => self.handle_running_key(key, now),
        }
    }

    fn handle_running_key(&mut self, key: KeyInput, now: Instant) -> Transition {
        let transition = match key {
            KeyInput::Cancel => {
                info!(word = self.passage.current_index(), "session cancelled");
                self.cancel();
                return Transition::Cancelled;
            }
            KeyInput::Char(c) => {
                self.input.push(c);
                Transition::Edited
            }
            KeyInput::Backspace => {
                self.input.backspace();
                Transition::Edited
            }
            KeyInput::Space if matching::is_exact_match(&self.passage, &self.input) => {
                self.passage.advance();
                debug!(
                    index = self.passage.current_index(),
                    next = self.passage.current_word(),
                    "advanced"
                );
                self.input.clear();
                Transition::Advanced
            }
            KeyInput::Space => {
                self.input.push(' ');
                Transition::Edited
            }
        };

        if self.is_complete() {
            return self.finish(now);
        }
        transition
    }

    fn finish(&mut self, now: Instant) -> Transition {
        let elapsed = self
            .started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        self.elapsed = Some(elapsed);
        self.set_state(SessionState::Finished);

        let score = Score::new(self.passage.char_count(), elapsed);
        info!(elapsed_secs = elapsed.as_secs_f64(), wpm = score.wpm, "session finished");
        Transition::Finished(score)
    }

    fn cancel(&mut self) {
        self.passage = Passage::new(self.passage.raw_text());
        self.input.clear();
        self.started_at = None;
        self.elapsed = None;
        self.set_state(SessionState::NotStarted);
    }

    fn set_state(&mut self, state: SessionState) {
        debug!(from = %self.state, to = %state, "state change");
        self.state = state;
    }

    pub fn is_complete(&self) -> bool {
        matching::is_session_complete(&self.passage, &self.input)
    }

    pub fn is_prefix_match(&self) -> bool {
        matching::is_prefix_match(&self.passage, &self.input)
    }

    /// Final score, available once the session has finished.
    pub fn score(&self) -> Option<Score> {
        match (self.state, self.elapsed) {
            (SessionState::Finished, Some(elapsed)) => {
                Some(Score::new(self.passage.char_count(), elapsed))
            }
            _ => None,
        }
    }

    pub fn live_tone(&self) -> Tone {
        matching::tone(&self.passage, &self.input)
    }

    /// How the word at `index` should be drawn.
    pub fn word_highlight(&self, index: usize) -> Highlight {
        if index == self.passage.current_index() {
            Highlight::new(self.live_tone(), true)
        } else {
            Highlight::PLAIN
        }
    }
}
