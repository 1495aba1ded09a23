//! Typing/deleting phrase rotation, kept free of browser calls so the timing
//! rules can be driven by a fake clock in tests.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhraseListError {
    #[error("phrase list must contain at least one phrase")]
    Empty,
}

/// Ordered, non-empty list of phrases. Order defines the cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Rc<[String]>,
}

impl PhraseList {
    pub fn new<I, S>(phrases: I) -> Result<Self, PhraseListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(PhraseListError::Empty);
        }
        Ok(Self {
            phrases: phrases.into(),
        })
    }

    fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.phrases[index % self.phrases.len()]
    }

    /// Length in chars, which is the unit `visible` counts in.
    fn char_len(&self, index: usize) -> usize {
        self.get(index).chars().count()
    }
}

/// Durations in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timings {
    pub typing_ms: u32,
    pub deleting_ms: u32,
    pub pause_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            typing_ms: 120,
            deleting_ms: 60,
            pause_ms: 2_000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Typing,
    Deleting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CyclerState {
    pub index: usize,
    pub visible: usize,
    pub mode: Mode,
}

/// The single pending step of a cycler: wait `delay_ms`, then become `next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    pub delay_ms: u32,
    pub next: CyclerState,
}

impl CyclerState {
    pub fn start() -> Self {
        Self {
            index: 0,
            visible: 0,
            mode: Mode::Typing,
        }
    }

    pub fn next_tick(&self, phrases: &PhraseList, timings: &Timings) -> Tick {
        let full = phrases.char_len(self.index);

        let (delay_ms, next) = match self.mode {
            Mode::Typing if self.visible < full => (
                timings.typing_ms,
                Self {
                    visible: self.visible + 1,
                    ..*self
                },
            ),
            Mode::Typing => (
                timings.pause_ms,
                Self {
                    visible: full,
                    mode: Mode::Deleting,
                    ..*self
                },
            ),
            Mode::Deleting if self.visible > 0 => (
                timings.deleting_ms,
                Self {
                    visible: self.visible.min(full).saturating_sub(1),
                    ..*self
                },
            ),
            Mode::Deleting => (0, *self),
        };

        Tick {
            delay_ms,
            next: next.wrap(phrases),
        }
    }

    /// An emptied phrase moves straight on to typing the next one.
    fn wrap(self, phrases: &PhraseList) -> Self {
        if self.mode == Mode::Deleting && self.visible == 0 {
            Self {
                index: (self.index + 1) % phrases.len(),
                visible: 0,
                mode: Mode::Typing,
            }
        } else {
            self
        }
    }

    pub fn visible_text<'a>(&self, phrases: &'a PhraseList) -> &'a str {
        let phrase = phrases.get(self.index);
        match phrase.char_indices().nth(self.visible) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }
}

/// Something that can run a callback later. Dropping the returned handle must
/// cancel the callback if it has not fired yet.
pub trait TimerBackend {
    type Handle;

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct GlooTimers;

impl TimerBackend for GlooTimers {
    type Handle = Timeout;

    fn after(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Schedules the one tick that follows `state`. The caller owns the handle and
/// drops it whenever the state it was armed for is no longer current.
pub fn arm<B, F>(
    backend: &B,
    state: CyclerState,
    phrases: &PhraseList,
    timings: &Timings,
    on_fire: F,
) -> B::Handle
where
    B: TimerBackend,
    F: FnOnce(CyclerState) + 'static,
{
    let tick = state.next_tick(phrases, timings);
    backend.after(tick.delay_ms, Box::new(move || on_fire(tick.next)))
}
