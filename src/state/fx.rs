// Visual-effect state driven by the transition bus. Observers write it,
// the overlay and screen views read it. It has no say in sequencing.

use crate::transition::TransitionKind;
use std::time::Instant;

#[derive(Clone, Copy, Debug)]
pub struct OverlayFx {
    pub started_at: Instant,
    pub kind: TransitionKind,
    /// Slide direction hint; true when moving to a later section.
    pub forward: bool,
}

#[derive(Default)]
pub struct FxState {
    pub overlay: Option<OverlayFx>,
    pub scroll_to_top: bool,
}

impl FxState {
    /// Wipe progress in `[0, 1]` over the visual duration.
    pub fn overlay_progress(&self, now: Instant) -> Option<f32> {
        self.overlay.map(|fx| {
            let total = fx.kind.visual_duration().as_secs_f32();
            (now.saturating_duration_since(fx.started_at).as_secs_f32() / total).clamp(0.0, 1.0)
        })
    }

    pub fn begin(&mut self, kind: TransitionKind, forward: bool, now: Instant) {
        self.overlay = Some(OverlayFx { started_at: now, kind, forward });
    }

    /// Clear the overlay; full-page arrivals also reset the content
    /// scroll position.
    pub fn finish(&mut self) {
        if let Some(fx) = self.overlay.take() {
            if fx.kind == TransitionKind::FullPage {
                self.scroll_to_top = true;
            }
        }
    }

    /// One-shot consumption by the screen view.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_full_page_finish_requests_scroll_reset() {
        let mut fx = FxState::default();
        fx.begin(TransitionKind::FullPage, true, Instant::now());
        fx.finish();
        assert!(fx.take_scroll_reset());
        // One-shot: consumed on read
        assert!(!fx.take_scroll_reset());
    }

    #[test]
    fn test_panel_finish_keeps_scroll() {
        let mut fx = FxState::default();
        fx.begin(TransitionKind::Panel, false, Instant::now());
        fx.finish();
        assert!(!fx.take_scroll_reset());
    }

    #[test]
    fn test_overlay_progress_clamps() {
        let mut fx = FxState::default();
        let t0 = Instant::now();
        fx.begin(TransitionKind::Panel, true, t0);

        let at_half = t0 + TransitionKind::Panel.visual_duration() / 2;
        let progress = fx.overlay_progress(at_half).unwrap();
        assert!((progress - 0.5).abs() < 0.05);

        let late = t0 + Duration::from_secs(10);
        assert_eq!(fx.overlay_progress(late), Some(1.0));
    }
}
