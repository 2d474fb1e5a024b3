use std::sync::mpsc::Receiver;

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, error};

use crate::{
    error::{Error, Result},
    score::Score,
    session::{KeyInput, Session, Transition},
};

/// Unified event type consumed by the app runner
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyraceEvent {
    Key(KeyEvent),
    Resize,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource {
    /// Block until the next event arrives. There is no timeout.
    fn next_event(&mut self) -> Result<KeyraceEvent>;
}

/// Production event source reading straight from crossterm on the calling thread
#[derive(Debug, Default)]
pub struct CrosstermEventSource;

impl EventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<KeyraceEvent> {
        loop {
            match event::read()? {
                CtEvent::Key(key) => return Ok(KeyraceEvent::Key(key)),
                CtEvent::Resize(_, _) => return Ok(KeyraceEvent::Resize),
                _ => {}
            }
        }
    }
}

/// Test event source fed through a channel
pub struct TestEventSource {
    rx: Receiver<KeyraceEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<KeyraceEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn next_event(&mut self) -> Result<KeyraceEvent> {
        self.rx.recv().map_err(|_| Error::EventSourceClosed)
    }
}

/// Translates a terminal key into a session key. Anything but a plain key press gives `None`.
pub fn key_input(key: &KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Esc => Some(KeyInput::Cancel),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyInput::Cancel)
        }
        KeyCode::Char(_) if chord => None,
        KeyCode::Char(' ') => Some(KeyInput::Space),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Char(c) if !c.is_control() => Some(KeyInput::Char(c)),
        _ => None,
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Completed(Score),
    Cancelled,
}

/// Drives a session one event at a time on the calling thread
pub struct Runner<E: EventSource> {
    event_source: E,
}

impl<E: EventSource> Runner<E> {
    pub fn new(event_source: E) -> Self {
        Self { event_source }
    }

    /// Blocks until the next event
    pub fn step(&mut self) -> Result<KeyraceEvent> {
        self.event_source.next_event().inspect_err(|err| {
            error!(%err, "event source failed");
        })
    }

    /// Starts `session` and feeds it events until it finishes or is cancelled.
    /// `draw` runs once after start and once after every event.
    pub fn run_session<F>(&mut self, session: &mut Session, mut draw: F) -> Result<Outcome>
    where
        F: FnMut(&Session) -> Result<()>,
    {
        if let Transition::Finished(score) = session.start() {
            return Ok(Outcome::Completed(score));
        }
        draw(session)?;

        loop {
            let key = match self.step()? {
                KeyraceEvent::Resize => None,
                KeyraceEvent::Key(key) => key_input(&key),
            };

            if let Some(key) = key {
                debug!(?key, "key");
                match session.handle_key(key) {
                    Transition::Finished(score) => return Ok(Outcome::Completed(score)),
                    Transition::Cancelled => return Ok(Outcome::Cancelled),
                    _ => {}
                }
            }
            draw(session)?;
        }
    }

    /// Keeps the results screen up until any key press. Resizes only redraw.
    pub fn await_dismissal<F>(&mut self, mut draw: F) -> Result<()>
    where
        F: FnMut() -> Result<()>,
    {
        draw()?;
        loop {
            match self.step()? {
                KeyraceEvent::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
                _ => draw()?,
            }
        }
    }
}
