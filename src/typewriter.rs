use std::time::Duration;

use thiserror::Error;

pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const DELETE_DELAY: Duration = Duration::from_millis(75);
pub const HOLD_DELAY: Duration = Duration::from_millis(2000);

/// Period of the scheduler driving [`Typewriter::advance`]. Divides every delay above.
pub const TICK: Duration = Duration::from_millis(25);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one title")]
    NoTitles,
    #[error("typewriter delays must be non-zero")]
    ZeroDelay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            type_delay: TYPE_DELAY,
            delete_delay: DELETE_DELAY,
            hold: HOLD_DELAY,
        }
    }
}

/// Types out each title one character at a time, holds it, erases it, then moves on
/// to the next title (wrapping).
#[derive(Debug, Clone)]
pub struct Typewriter {
    titles: Vec<String>,
    cycle: usize,
    // displayed prefix, counted in chars
    shown: usize,
    phase: Phase,
    timing: Timing,
    // time left before the next step
    wait: Duration,
}

impl Typewriter {
    pub fn new(titles: Vec<String>) -> Result<Self, TypewriterError> {
        Self::with_timing(titles, Timing::default())
    }

    pub fn with_timing(titles: Vec<String>, timing: Timing) -> Result<Self, TypewriterError> {
        if titles.is_empty() {
            return Err(TypewriterError::NoTitles);
        }
        if [timing.type_delay, timing.delete_delay, timing.hold]
            .iter()
            .any(Duration::is_zero)
        {
            return Err(TypewriterError::ZeroDelay);
        }
        Ok(Self {
            titles,
            cycle: 0,
            shown: 0,
            phase: Phase::Typing,
            timing,
            wait: timing.type_delay,
        })
    }

    pub fn text(&self) -> &str {
        let title = self.current_title();
        match title.char_indices().nth(self.shown) {
            Some((end, _)) => &title[..end],
            None => title,
        }
    }

    pub fn current_title(&self) -> &str {
        &self.titles[self.cycle]
    }

    pub fn cycle_index(&self) -> usize {
        self.cycle
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    fn title_len(&self) -> usize {
        self.current_title().chars().count()
    }

    /// Performs one transition and returns how long to wait before the next one.
    pub fn step(&mut self) -> Duration {
        let delay = match self.phase {
            Phase::Typing => {
                if self.shown < self.title_len() {
                    self.shown += 1;
                }
                if self.shown >= self.title_len() {
                    self.phase = Phase::Pausing;
                    self.timing.hold
                } else {
                    self.timing.type_delay
                }
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                self.timing.delete_delay
            }
            Phase::Deleting => self.erase(),
        };
        self.wait = delay;
        delay
    }

    fn erase(&mut self) -> Duration {
        self.shown = self.shown.saturating_sub(1);
        if self.shown == 0 {
            self.phase = Phase::Typing;
            self.cycle = (self.cycle + 1) % self.titles.len();
            self.timing.type_delay
        } else {
            self.timing.delete_delay
        }
    }

    /// Feeds elapsed scheduler time in; runs every step that came due.
    /// Returns true when the displayed text changed.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let before = (self.cycle, self.shown);
        let mut budget = elapsed;
        while budget >= self.wait {
            budget -= self.wait;
            self.step();
        }
        self.wait -= budget;
        before != (self.cycle, self.shown)
    }
}
