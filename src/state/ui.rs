// UI state - boot flow and transient status messages.

use std::time::{Duration, Instant};

/// Where the app is in its boot flow. The keyboard navigation adapter is
/// live only in `Running`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootPhase {
    Loading { since: Instant, until: Instant },
    Title,
    Running,
}

pub struct UiState {
    pub boot: BootPhase,
    pub info_message: Option<(String, Instant)>,
    pub error_message: Option<(String, Instant)>,
}

impl UiState {
    pub fn new(now: Instant, loading: Duration) -> Self {
        Self {
            boot: BootPhase::Loading { since: now, until: now + loading },
            info_message: None,
            error_message: None,
        }
    }

    pub fn game_started(&self) -> bool {
        self.boot == BootPhase::Running
    }

    /// Loading screen progress in `[0, 1]`.
    pub fn boot_progress(&self, now: Instant) -> f32 {
        match self.boot {
            BootPhase::Loading { since, until } => {
                let total = until.saturating_duration_since(since).as_secs_f32();
                if total <= 0.0 {
                    return 1.0;
                }
                (now.saturating_duration_since(since).as_secs_f32() / total).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }

    /// Advance `Loading -> Title` once the boot timer elapses.
    pub fn tick_boot(&mut self, now: Instant) {
        if let BootPhase::Loading { until, .. } = self.boot {
            if now >= until {
                self.boot = BootPhase::Title;
            }
        }
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.info_message = Some((message.into(), Instant::now()));
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some((message.into(), Instant::now()));
        self.info_message = None;
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, at)) = &self.info_message {
            if at.elapsed().as_secs() >= timeout_secs {
                self.info_message = None;
            }
        }
        if let Some((_, at)) = &self.error_message {
            if at.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_walks_loading_to_title() {
        let t0 = Instant::now();
        let mut ui = UiState::new(t0, Duration::from_millis(2500));
        assert!(!ui.game_started());

        ui.tick_boot(t0 + Duration::from_millis(100));
        assert!(matches!(ui.boot, BootPhase::Loading { .. }));

        ui.tick_boot(t0 + Duration::from_millis(2500));
        assert_eq!(ui.boot, BootPhase::Title);
        assert!(!ui.game_started());
    }

    #[test]
    fn test_boot_progress_clamps() {
        let t0 = Instant::now();
        let ui = UiState::new(t0, Duration::from_millis(1000));
        assert_eq!(ui.boot_progress(t0), 0.0);
        assert!((ui.boot_progress(t0 + Duration::from_millis(500)) - 0.5).abs() < 0.01);
        assert_eq!(ui.boot_progress(t0 + Duration::from_millis(5000)), 1.0);
    }
}
