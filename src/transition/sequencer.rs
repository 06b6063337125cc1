// Transition sequencer - the state machine that orders a navigation:
// signal start, play the visual, perform the route change, signal
// completion, release the guard. Timers are plain deadlines checked from
// `tick`, which the UI loop calls every frame while anything is pending.

use crate::router::Router;
use crate::section::SectionMap;
use crate::style;
use crate::transition::bus::{SignalBus, TransitionEvent};
use crate::transition::guard::{NavGuard, TransitionPhase};
use crate::transition::NavRequest;
use std::time::{Duration, Instant};

/// What a caller wants done with a request the guard rejects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdmissionPolicy {
    /// Silently discard the request.
    Drop,
    /// Retain it (last-write-wins) and replay it after the in-flight
    /// transition completes.
    Queue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Started,
    Rejected,
    Queued,
    NoOp,
}

#[derive(Clone, Copy)]
enum Step {
    Idle,
    Requested(NavRequest),
    VisualPlaying { request: NavRequest, deadline: Instant },
    Navigating { request: NavRequest, deadline: Instant },
}

pub struct Sequencer {
    step: Step,
    guard: NavGuard,
    bus: SignalBus,
}

impl Sequencer {
    pub fn new(bus: SignalBus) -> Self {
        Self { step: Step::Idle, guard: NavGuard::new(), bus }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.step, Step::Idle) && self.guard.is_idle()
    }

    pub fn guard_phase(&self) -> TransitionPhase {
        self.guard.phase()
    }

    /// Earliest pending deadline, used to schedule the next repaint.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.step {
            Step::VisualPlaying { deadline, .. } | Step::Navigating { deadline, .. } => Some(deadline),
            _ => None,
        }
    }

    /// Ask for a navigation. Navigating to the already-active section is
    /// a defined no-op: zero events, guard untouched. A request that
    /// loses admission is dropped or queued per `policy`; the caller
    /// treats anything but `Started` as "nothing visible happened yet".
    pub fn request(
        &mut self,
        sections: &SectionMap,
        router: &dyn Router,
        request: NavRequest,
        policy: AdmissionPolicy,
        now: Instant,
    ) -> NavOutcome {
        let active = sections.resolve(router.current_path());
        if sections.clamp(request.target) == active {
            return NavOutcome::NoOp;
        }

        if !self.guard.try_begin() {
            return match policy {
                AdmissionPolicy::Queue => {
                    self.guard.enqueue(request);
                    NavOutcome::Queued
                }
                AdmissionPolicy::Drop => NavOutcome::Rejected,
            };
        }

        self.step = Step::Requested(request);
        self.publish_start(sections, now);
        NavOutcome::Started
    }

    /// `Requested -> VisualPlaying`: announce the transition and arm the
    /// visual timer.
    fn publish_start(&mut self, sections: &SectionMap, now: Instant) {
        if let Step::Requested(request) = self.step {
            let target_path = sections.get(request.target).path.to_string();
            self.bus.publish(&TransitionEvent::Start { target_path, request });
            self.guard.mark_in_flight();
            self.step = Step::VisualPlaying {
                request,
                deadline: now + request.kind.visual_duration(),
            };
        }
    }

    /// Advance any due deadline. Returns the request whose transition
    /// finished on this call, once, at the moment the guard is released.
    pub fn tick(
        &mut self,
        now: Instant,
        sections: &SectionMap,
        router: &mut dyn Router,
    ) -> Option<NavRequest> {
        match self.step {
            Step::VisualPlaying { request, deadline } if now >= deadline => {
                // The visual has covered the screen; commit the route.
                // A failing router gets no retry - the transition still
                // runs to completion so future navigations stay possible.
                let path = sections.get(request.target).path;
                if let Err(err) = router.change_route(path, &request) {
                    log::warn!("route change to {} failed: {}", path, err);
                }
                self.guard.begin_completing();
                self.step = Step::Navigating {
                    request,
                    deadline: now + Duration::from_millis(style::GUARD_COOLDOWN_MS),
                };
                None
            }
            Step::Navigating { request, deadline } if now >= deadline => {
                log::debug!(
                    "transition to ordinal {} complete in {:?}",
                    request.target,
                    now.saturating_duration_since(request.requested_at)
                );
                self.bus.publish(&TransitionEvent::Complete);
                let replay = self.guard.complete();
                self.step = Step::Idle;

                if let Some(mut queued) = replay {
                    queued.from = sections.resolve(router.current_path());
                    // A replay that lost its point (target became active)
                    // short-circuits inside request()
                    self.request(sections, router, queued, AdmissionPolicy::Drop, now);
                }
                Some(request)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::bus::EventKind;
    use crate::transition::{NavSource, TransitionKind};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct TestRouter {
        path: String,
        changes: Vec<String>,
        fail: bool,
    }

    impl TestRouter {
        fn new(path: &str) -> Self {
            Self { path: path.to_string(), changes: Vec::new(), fail: false }
        }
    }

    impl Router for TestRouter {
        fn current_path(&self) -> &str {
            &self.path
        }

        fn change_route(&mut self, path: &str, _request: &NavRequest) -> Result<(), String> {
            if self.fail {
                return Err("router exploded".to_string());
            }
            self.path = path.to_string();
            self.changes.push(path.to_string());
            Ok(())
        }
    }

    fn record_events(bus: &SignalBus) -> Rc<RefCell<Vec<EventKind>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        for kind in [EventKind::TransitionStart, EventKind::TransitionComplete] {
            let log = Rc::clone(&log);
            bus.subscribe(kind, move |event| log.borrow_mut().push(event.kind()));
        }
        log
    }

    fn request(target: usize, kind: TransitionKind, now: Instant) -> NavRequest {
        NavRequest::new(target, 0, NavSource::Button, kind, now)
    }

    fn full_ms() -> u64 {
        style::FULL_TRANSITION_MS + style::GUARD_COOLDOWN_MS
    }

    #[test]
    fn test_full_lifecycle() {
        let bus = SignalBus::new();
        let events = record_events(&bus);
        let sections = SectionMap::new();
        let mut router = TestRouter::new("/");
        let mut seq = Sequencer::new(bus);
        let t0 = Instant::now();

        let outcome = seq.request(&sections, &router, request(1, TransitionKind::FullPage, t0), AdmissionPolicy::Drop, t0);
        assert_eq!(outcome, NavOutcome::Started);
        assert_eq!(*events.borrow(), vec![EventKind::TransitionStart]);
        assert_eq!(seq.guard_phase(), TransitionPhase::InFlight);

        // Nothing moves before the visual deadline
        assert!(seq.tick(t0 + Duration::from_millis(100), &sections, &mut router).is_none());
        assert!(router.changes.is_empty());

        // Visual elapsed: route commits, guard enters Completing
        assert!(seq
            .tick(t0 + Duration::from_millis(style::FULL_TRANSITION_MS), &sections, &mut router)
            .is_none());
        assert_eq!(router.changes, vec!["/about"]);
        assert_eq!(seq.guard_phase(), TransitionPhase::Completing);
        assert_eq!(*events.borrow(), vec![EventKind::TransitionStart]);

        // Cooldown elapsed: complete publishes and the guard releases
        let done = seq.tick(t0 + Duration::from_millis(full_ms()), &sections, &mut router);
        assert_eq!(done.map(|r| r.target), Some(1));
        assert!(seq.is_idle());
        assert_eq!(seq.guard_phase(), TransitionPhase::Idle);
        assert_eq!(
            *events.borrow(),
            vec![EventKind::TransitionStart, EventKind::TransitionComplete]
        );
    }

    #[test]
    fn test_rapid_requests_admit_exactly_one() {
        let bus = SignalBus::new();
        let events = record_events(&bus);
        let sections = SectionMap::new();
        let mut router = TestRouter::new("/");
        let mut seq = Sequencer::new(bus);
        let t0 = Instant::now();

        // Two clicks on the same target 10ms apart
        let first = seq.request(&sections, &router, request(1, TransitionKind::FullPage, t0), AdmissionPolicy::Drop, t0);
        let second = seq.request(
            &sections,
            &router,
            request(1, TransitionKind::FullPage, t0 + Duration::from_millis(10)),
            AdmissionPolicy::Drop,
            t0 + Duration::from_millis(10),
        );

        assert_eq!(first, NavOutcome::Started);
        assert_eq!(second, NavOutcome::Rejected);
        // Exactly one start event despite two requests
        assert_eq!(*events.borrow(), vec![EventKind::TransitionStart]);

        seq.tick(t0 + Duration::from_millis(style::FULL_TRANSITION_MS), &sections, &mut router);
        seq.tick(t0 + Duration::from_millis(full_ms()), &sections, &mut router);
        assert_eq!(router.changes.len(), 1);
    }

    #[test]
    fn test_navigating_to_active_section_is_noop() {
        let bus = SignalBus::new();
        let events = record_events(&bus);
        let sections = SectionMap::new();
        let router = TestRouter::new("/about");
        let mut seq = Sequencer::new(bus);
        let t0 = Instant::now();

        let outcome = seq.request(&sections, &router, request(1, TransitionKind::FullPage, t0), AdmissionPolicy::Drop, t0);
        assert_eq!(outcome, NavOutcome::NoOp);
        assert!(events.borrow().is_empty());
        assert_eq!(seq.guard_phase(), TransitionPhase::Idle);
        assert!(seq.is_idle());
    }

    #[test]
    fn test_queued_request_replays_after_completion() {
        let bus = SignalBus::new();
        let events = record_events(&bus);
        let sections = SectionMap::new();
        let mut router = TestRouter::new("/");
        let mut seq = Sequencer::new(bus);
        let t0 = Instant::now();

        seq.request(&sections, &router, request(1, TransitionKind::FullPage, t0), AdmissionPolicy::Drop, t0);
        // Two queued follow-ups: only the last survives
        let q1 = seq.request(&sections, &router, request(2, TransitionKind::FullPage, t0), AdmissionPolicy::Queue, t0);
        let q2 = seq.request(&sections, &router, request(3, TransitionKind::FullPage, t0), AdmissionPolicy::Queue, t0);
        assert_eq!(q1, NavOutcome::Queued);
        assert_eq!(q2, NavOutcome::Queued);

        seq.tick(t0 + Duration::from_millis(style::FULL_TRANSITION_MS), &sections, &mut router);
        let done = seq.tick(t0 + Duration::from_millis(full_ms()), &sections, &mut router);
        assert_eq!(done.map(|r| r.target), Some(1));

        // The replay began a new transition toward /projects
        assert_eq!(seq.guard_phase(), TransitionPhase::InFlight);
        assert_eq!(
            *events.borrow(),
            vec![
                EventKind::TransitionStart,
                EventKind::TransitionComplete,
                EventKind::TransitionStart,
            ]
        );

        let base = full_ms();
        seq.tick(t0 + Duration::from_millis(base + style::FULL_TRANSITION_MS), &sections, &mut router);
        seq.tick(t0 + Duration::from_millis(base + full_ms()), &sections, &mut router);
        assert_eq!(router.changes, vec!["/about", "/projects"]);
        assert!(seq.is_idle());
    }

    #[test]
    fn test_router_failure_still_releases_guard() {
        let bus = SignalBus::new();
        let events = record_events(&bus);
        let sections = SectionMap::new();
        let mut router = TestRouter::new("/");
        router.fail = true;
        let mut seq = Sequencer::new(bus);
        let t0 = Instant::now();

        seq.request(&sections, &router, request(2, TransitionKind::FullPage, t0), AdmissionPolicy::Drop, t0);
        seq.tick(t0 + Duration::from_millis(style::FULL_TRANSITION_MS), &sections, &mut router);
        let done = seq.tick(t0 + Duration::from_millis(full_ms()), &sections, &mut router);

        // The route never changed, but the system is available again
        assert!(router.changes.is_empty());
        assert_eq!(done.map(|r| r.target), Some(2));
        assert_eq!(seq.guard_phase(), TransitionPhase::Idle);
        assert_eq!(
            *events.borrow(),
            vec![EventKind::TransitionStart, EventKind::TransitionComplete]
        );
    }

    #[test]
    fn test_panel_transitions_use_short_timer() {
        let bus = SignalBus::new();
        let sections = SectionMap::new();
        let mut router = TestRouter::new("/");
        let mut seq = Sequencer::new(bus);
        let t0 = Instant::now();

        seq.request(&sections, &router, request(4, TransitionKind::Panel, t0), AdmissionPolicy::Drop, t0);

        // Short class: not yet at 199ms, committed at 200ms
        seq.tick(t0 + Duration::from_millis(style::PANEL_TRANSITION_MS - 1), &sections, &mut router);
        assert!(router.changes.is_empty());
        seq.tick(t0 + Duration::from_millis(style::PANEL_TRANSITION_MS), &sections, &mut router);
        assert_eq!(router.changes, vec!["/contact"]);
    }

    #[test]
    fn test_next_deadline_tracks_pending_timer() {
        let bus = SignalBus::new();
        let sections = SectionMap::new();
        let router = TestRouter::new("/");
        let mut seq = Sequencer::new(bus);
        let t0 = Instant::now();

        assert!(seq.next_deadline().is_none());
        seq.request(&sections, &router, request(1, TransitionKind::FullPage, t0), AdmissionPolicy::Drop, t0);
        assert_eq!(
            seq.next_deadline(),
            Some(t0 + Duration::from_millis(style::FULL_TRANSITION_MS))
        );
    }
}
