// Navigation transition coordinator.
//
// A navigation is the coordinated visual-effect-then-route-change sequence
// between two sections. The guard admits at most one at a time, the bus
// broadcasts its lifecycle, and the sequencer orders the steps on
// deadline-based cooperative timers ticked from the UI loop.

pub mod bus;
pub mod guard;
pub mod sequencer;

use crate::style;
use std::time::{Duration, Instant};

/// Where a navigation request came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSource {
    Button,
    MapClick,
    Keyboard,
    History,
}

/// Transition class. The visual duration is fixed per class, never per
/// call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    FullPage,
    Panel,
}

impl TransitionKind {
    pub fn visual_duration(&self) -> Duration {
        match self {
            Self::FullPage => Duration::from_millis(style::FULL_TRANSITION_MS),
            Self::Panel => Duration::from_millis(style::PANEL_TRANSITION_MS),
        }
    }
}

/// A single navigation request. Created when the navigation is asked for,
/// consumed once by the sequencer, never mutated afterwards.
#[derive(Clone, Copy, Debug)]
pub struct NavRequest {
    pub target: usize,
    pub from: usize,
    pub source: NavSource,
    pub kind: TransitionKind,
    pub requested_at: Instant,
}

impl NavRequest {
    pub fn new(target: usize, from: usize, source: NavSource, kind: TransitionKind, now: Instant) -> Self {
        Self { target, from, source, kind, requested_at: now }
    }

    /// Slide direction hint for the overlay (left-vs-right).
    pub fn moving_forward(&self) -> bool {
        self.target >= self.from
    }
}
