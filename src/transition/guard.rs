// Debounced navigation guard - the single admission-control point for
// transitions. Owns the phase; everything else only queries it or hears
// about it on the bus.

use crate::transition::NavRequest;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Starting,
    InFlight,
    Completing,
}

pub struct NavGuard {
    phase: TransitionPhase,
    queued: Option<NavRequest>,
}

impl NavGuard {
    pub fn new() -> Self {
        Self { phase: TransitionPhase::Idle, queued: None }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == TransitionPhase::Idle
    }

    /// Atomically claim the guard. Returns true and moves `Idle ->
    /// Starting` only when idle; otherwise false with no state change.
    /// A false return is the expected outcome of concurrent requests,
    /// not an error.
    pub fn try_begin(&mut self) -> bool {
        if self.phase == TransitionPhase::Idle {
            self.phase = TransitionPhase::Starting;
            true
        } else {
            false
        }
    }

    /// The visual effect has begun: `Starting -> InFlight`.
    pub fn mark_in_flight(&mut self) {
        if self.phase == TransitionPhase::Starting {
            self.phase = TransitionPhase::InFlight;
        }
    }

    /// The route change has happened; the trailing cooldown is running:
    /// `InFlight -> Completing`.
    pub fn begin_completing(&mut self) {
        if self.phase == TransitionPhase::InFlight {
            self.phase = TransitionPhase::Completing;
        }
    }

    /// Release the guard from any state. Idempotent: completing an idle
    /// guard is a no-op. Returns the queued follow-up request, if one was
    /// retained, for the caller to replay.
    pub fn complete(&mut self) -> Option<NavRequest> {
        self.phase = TransitionPhase::Idle;
        self.queued.take()
    }

    /// Retain a rejected request for replay after `complete()`. Only the
    /// most recent queued request survives (last-write-wins).
    pub fn enqueue(&mut self, request: NavRequest) {
        self.queued = Some(request);
    }

    pub fn has_queued(&self) -> bool {
        self.queued.is_some()
    }
}

impl Default for NavGuard {
    fn default() -> Self {
        Self::new()
    }
}
