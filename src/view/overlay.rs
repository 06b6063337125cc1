// Screen-covering transition wipe plus the CRT scanline decoration. Both
// are pure observers of state; neither can delay the sequencer.

use crate::app::Retrofolio;
use eframe::egui;
use std::time::Instant;

impl Retrofolio {
    pub(crate) fn render_transition_overlay(&mut self, ctx: &egui::Context, now: Instant) {
        let (progress, forward) = {
            let fx = self.fx.borrow();
            match (fx.overlay_progress(now), fx.overlay) {
                (Some(progress), Some(overlay)) => (progress, overlay.forward),
                _ => return,
            }
        };

        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("transition_wipe"),
        ));
        let screen = ctx.screen_rect();

        // Two-phase wipe: cover the screen during the first half, then
        // reveal the new section during the second. Direction follows the
        // section ordering so the slide reads left-to-right going forward.
        let rect = if progress < 0.5 {
            let covered = screen.width() * (progress * 2.0);
            if forward {
                egui::Rect::from_min_max(screen.min, egui::pos2(screen.min.x + covered, screen.max.y))
            } else {
                egui::Rect::from_min_max(egui::pos2(screen.max.x - covered, screen.min.y), screen.max)
            }
        } else {
            let remaining = screen.width() * ((1.0 - progress) * 2.0);
            if forward {
                egui::Rect::from_min_max(egui::pos2(screen.max.x - remaining, screen.min.y), screen.max)
            } else {
                egui::Rect::from_min_max(screen.min, egui::pos2(screen.min.x + remaining, screen.max.y))
            }
        };
        painter.rect_filled(rect, 0.0, self.theme.bg());

        // Pulsing pixel in the middle of the wipe
        let pulse = (progress * std::f32::consts::PI).sin();
        let size = 6.0 + pulse * 26.0;
        painter.rect_filled(
            egui::Rect::from_center_size(screen.center(), egui::vec2(size, size)),
            0.0,
            self.theme.primary(),
        );
    }

    pub(crate) fn render_scanlines(&mut self, ctx: &egui::Context) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("crt_scanlines"),
        ));
        let screen = ctx.screen_rect();
        let mut y = screen.min.y;
        while y < screen.max.y {
            painter.rect_filled(
                egui::Rect::from_min_size(egui::pos2(screen.min.x, y), egui::vec2(screen.width(), 1.0)),
                0.0,
                egui::Color32::from_black_alpha(18),
            );
            y += 4.0;
        }
    }
}
