// Layout and timing constants for Retrofolio

use eframe::egui;

// --- Transition timing ---
// Contract constants for the navigation sequencer; fixed per transition
// class, never per call site.
pub const FULL_TRANSITION_MS: u64 = 800;
pub const PANEL_TRANSITION_MS: u64 = 200;
pub const GUARD_COOLDOWN_MS: u64 = 120;

// --- Boot timing ---
pub const BOOT_LOADING_MS: u64 = 2500;

// --- UI timing ---
pub const MESSAGE_TIMEOUT_SECS: u64 = 5;
pub const REPAINT_TICK_MS: u64 = 33;

// --- Progression ---
pub const XP_PER_SECTION: u64 = 25;
pub const XP_PER_LEVEL: u64 = 100;

// --- Sizing ---
pub const HUD_BAR_HEIGHT: f32 = 36.0;
pub const FOOTER_HEIGHT: f32 = 64.0;
pub const MAP_PIP_SIZE: f32 = 12.0;
pub const STAT_BAR_WIDTH: f32 = 80.0;
pub const STAT_BAR_HEIGHT: f32 = 10.0;
pub const MENU_WIDTH: f32 = 280.0;
pub const MENU_ROW_HEIGHT: f32 = 32.0;

pub mod theme;

// --- Helper functions ---

/// Paint a chunky segmented stat bar (HP/MP/XP style) into `rect`.
pub fn stat_bar(painter: &egui::Painter, rect: egui::Rect, fraction: f32, fill: egui::Color32) {
    let fraction = fraction.clamp(0.0, 1.0);
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(25));
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(70)),
        egui::StrokeKind::Outside,
    );

    // Fill in discrete segments for the pixel look
    let segments = 10usize;
    let lit = (fraction * segments as f32).round() as usize;
    let seg_w = rect.width() / segments as f32;
    for i in 0..lit {
        let seg = egui::Rect::from_min_size(
            egui::pos2(rect.min.x + i as f32 * seg_w + 1.0, rect.min.y + 1.0),
            egui::vec2(seg_w - 2.0, rect.height() - 2.0),
        );
        painter.rect_filled(seg, 0.0, fill);
    }
}

/// Render a label that truncates overflowing text with an ellipsis.
pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}
