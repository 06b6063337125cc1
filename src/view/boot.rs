// Loading and title screens. The navigation adapter is dead until the
// player presses start.

use crate::app::Retrofolio;
use crate::state::BootPhase;
use crate::style;
use eframe::egui;
use std::time::Instant;

impl Retrofolio {
    pub(crate) fn render_loading_screen(&mut self, ctx: &egui::Context, now: Instant) {
        let progress = self.ui.boot_progress(now);
        let blink_on = match self.ui.boot {
            BootPhase::Loading { since, .. } => {
                (now.saturating_duration_since(since).as_millis() / 600) % 2 == 0
            }
            _ => true,
        };
        let primary = self.theme.primary();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.32);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("LOADING GAME...")
                        .size(32.0)
                        .strong()
                        .color(primary),
                );
                ui.add_space(40.0);

                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(220.0, 16.0),
                    egui::Sense::hover(),
                );
                style::stat_bar(ui.painter(), rect, progress, primary);

                ui.add_space(24.0);
                if blink_on {
                    ui.label(
                        egui::RichText::new("INITIALIZING PORTFOLIO SYSTEM...")
                            .size(13.0)
                            .color(self.theme.secondary()),
                    );
                }
            });
        });
    }

    pub(crate) fn render_title_screen(&mut self, ctx: &egui::Context) {
        let mut start_clicked = false;
        let primary = self.theme.primary();
        let pulse = (ctx.input(|i| i.time) as f32 * 2.0).sin().abs();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.28);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("PORTFOLIO.EXE")
                        .size(52.0)
                        .strong()
                        .color(primary),
                );
                ui.add_space(48.0);

                let button = egui::Button::new(
                    egui::RichText::new("PRESS START").size(22.0).color(primary),
                )
                .min_size(egui::vec2(220.0, 52.0))
                .stroke(egui::Stroke::new(2.0 + pulse * 2.0, primary));
                if ui.add(button).clicked() {
                    start_clicked = true;
                }

                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new("or press [ENTER]")
                        .size(12.0)
                        .color(self.theme.secondary()),
                );
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(24.0);
                ui.label(
                    egui::RichText::new(format!(
                        "\u{00a9} {} {}",
                        chrono::Local::now().format("%Y"),
                        crate::content::PROFILE.name
                    ))
                    .size(11.0)
                    .color(self.theme.secondary()),
                );
            });
        });

        if start_clicked {
            self.start_game();
        }
    }
}
