use crate::config::Config;
use crate::router::RouteState;
use crate::section::SectionMap;
use crate::state::{BootPhase, FxState, GamepadState, Progress, UiState};
use crate::style;
use crate::style::theme::AppTheme;
use crate::transition::bus::{EventKind, SignalBus, TransitionEvent};
use crate::transition::sequencer::{AdmissionPolicy, NavOutcome, Sequencer};
use crate::transition::{NavRequest, NavSource, TransitionKind};
use eframe::egui;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A navigation intent raised by a view during rendering, applied after
/// all panels have drawn.
pub(crate) type PendingNav = RefCell<Option<(usize, NavSource)>>;

pub struct Retrofolio {
    pub(crate) config: Config,
    pub(crate) theme: AppTheme,
    applied_theme: Option<AppTheme>,

    // Navigation core
    pub(crate) sections: SectionMap,
    pub(crate) route: RouteState,
    pub(crate) bus: SignalBus,
    pub(crate) sequencer: Sequencer,

    // Interaction state
    pub(crate) gamepad: GamepadState,
    pub(crate) ui: UiState,

    // Shared with bus observers
    pub(crate) fx: Rc<RefCell<FxState>>,
    pub(crate) progress: Rc<RefCell<Progress>>,
}

impl Retrofolio {
    pub fn new(initial_path: &str) -> Self {
        let config = Config::load();
        let theme = AppTheme::from_mode(&config.theme.mode);

        let sections = SectionMap::new();
        // Unknown launch paths land on home rather than failing
        let start_ordinal = sections.resolve(initial_path);
        let route = RouteState::new(sections.get(start_ordinal).path);

        let bus = SignalBus::new();
        let fx = Rc::new(RefCell::new(FxState::default()));
        let progress = Rc::new(RefCell::new(Progress::load()));

        // Visual overlay collaborator: it only ever reacts to the bus
        let fx_start = Rc::clone(&fx);
        bus.subscribe(EventKind::TransitionStart, move |event| {
            if let TransitionEvent::Start { request, .. } = event {
                fx_start
                    .borrow_mut()
                    .begin(request.kind, request.moving_forward(), Instant::now());
            }
        });
        let fx_complete = Rc::clone(&fx);
        bus.subscribe(EventKind::TransitionComplete, move |_| {
            fx_complete.borrow_mut().finish();
        });

        // Progression collaborator: first arrival at a section awards XP
        let progress_start = Rc::clone(&progress);
        bus.subscribe(EventKind::TransitionStart, move |event| {
            if let TransitionEvent::Start { target_path, .. } = event {
                progress_start.borrow_mut().note_departure(target_path);
            }
        });
        let progress_complete = Rc::clone(&progress);
        bus.subscribe(EventKind::TransitionComplete, move |_| {
            let mut progress = progress_complete.borrow_mut();
            if progress.arrive() {
                if let Err(err) = progress.save() {
                    log::warn!("failed to write save file: {}", err);
                }
            }
        });

        bus.subscribe(EventKind::TransitionStart, |event| {
            if let TransitionEvent::Start { target_path, request } = event {
                log::debug!("transition start -> {} ({:?})", target_path, request.source);
            }
        });

        let sequencer = Sequencer::new(bus.clone());
        let gamepad = GamepadState::new(start_ordinal);
        let mut ui = UiState::new(Instant::now(), Duration::from_millis(style::BOOT_LOADING_MS));

        // Launching straight into a section skips the title screen
        if start_ordinal != 0 {
            ui.boot = BootPhase::Running;
        }

        Self {
            config,
            theme,
            applied_theme: None,
            sections,
            route,
            bus,
            sequencer,
            gamepad,
            ui,
            fx,
            progress,
        }
    }

    pub(crate) fn active_section(&self) -> usize {
        self.sections.resolve(self.route.current_path())
    }

    pub(crate) fn start_game(&mut self) {
        self.ui.boot = BootPhase::Running;
        self.gamepad = GamepadState::new(self.active_section());
        self.ui.set_info("GAME START");
    }

    pub(crate) fn exit_to_title(&mut self) {
        self.gamepad.close_menu();
        self.ui.boot = BootPhase::Title;
    }

    /// Every navigation in the app funnels through here. Transitions
    /// requested while the menu overlay covers the screen use the
    /// lightweight panel class; everything else gets the full wipe.
    pub(crate) fn request_navigation(
        &mut self,
        target: usize,
        source: NavSource,
        policy: AdmissionPolicy,
        now: Instant,
    ) {
        let kind = if self.gamepad.menu_open {
            TransitionKind::Panel
        } else {
            TransitionKind::FullPage
        };
        let request = NavRequest::new(
            self.sections.clamp(target),
            self.active_section(),
            source,
            kind,
            now,
        );

        match self.sequencer.request(&self.sections, &self.route, request, policy, now) {
            NavOutcome::Rejected => log::debug!(
                "navigation to ordinal {} rejected (guard {:?})",
                target,
                self.sequencer.guard_phase()
            ),
            NavOutcome::Queued => {
                log::debug!("navigation to ordinal {} queued behind in-flight transition", target)
            }
            _ => {}
        }
    }

    pub(crate) fn navigate_history(&mut self, back: bool, now: Instant) {
        let target = if back {
            self.route.back_path().map(|path| self.sections.resolve(path))
        } else {
            self.route.forward_path().map(|path| self.sections.resolve(path))
        };
        if let Some(target) = target {
            self.request_navigation(target, NavSource::History, AdmissionPolicy::Drop, now);
        }
    }

    fn apply_appearance(&mut self, ctx: &egui::Context) {
        if self.applied_theme != Some(self.theme) {
            self.theme.apply(ctx);
            ctx.set_zoom_factor(self.config.display.font_scale.clamp(0.5, 2.0));
            self.applied_theme = Some(self.theme);
        }
    }
}

impl eframe::App for Retrofolio {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.apply_appearance(ctx);
        self.ui.clear_expired_messages(style::MESSAGE_TIMEOUT_SECS);

        match self.ui.boot {
            BootPhase::Loading { .. } => {
                self.ui.tick_boot(now);
                self.render_loading_screen(ctx, now);
                ctx.request_repaint_after(Duration::from_millis(style::REPAINT_TICK_MS));
                return;
            }
            BootPhase::Title => {
                if ctx.input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space)) {
                    self.start_game();
                }
                self.render_title_screen(ctx);
                ctx.request_repaint_after(Duration::from_millis(style::REPAINT_TICK_MS));
                return;
            }
            BootPhase::Running => {}
        }

        self.handle_input(ctx, now);

        // Drive any pending transition deadline; the menu closes when the
        // section change it asked for lands
        if self.sequencer.tick(now, &self.sections, &mut self.route).is_some() {
            self.gamepad.close_menu();
        }

        let pending_nav: PendingNav = RefCell::new(None);

        self.render_top_bar(ctx, &pending_nav);
        self.render_footer(ctx);
        self.render_active_screen(ctx, &pending_nav);
        if self.gamepad.menu_open {
            self.render_menu_overlay(ctx, &pending_nav);
        }
        self.render_transition_overlay(ctx, now);
        if self.config.display.crt_effects {
            self.render_scanlines(ctx);
        }

        // Apply deferred navigation intents from clicks
        if let Some((target, source)) = pending_nav.into_inner() {
            self.request_navigation(target, source, AdmissionPolicy::Drop, now);
        }

        // Keep frames coming while a timer or animation is live
        if !self.sequencer.is_idle() || self.fx.borrow().overlay.is_some() {
            ctx.request_repaint_after(Duration::from_millis(style::REPAINT_TICK_MS));
        }
    }
}
