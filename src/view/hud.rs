// HUD chrome: the top bar with the mini-map, and the stats footer.

use crate::app::{PendingNav, Retrofolio};
use crate::style;
use crate::transition::NavSource;
use eframe::egui;

impl Retrofolio {
    pub(crate) fn render_top_bar(&mut self, ctx: &egui::Context, pending_nav: &PendingNav) {
        let active = self.active_section();
        let primary = self.theme.primary();
        let secondary = self.theme.secondary();
        let panel = self.theme.panel();

        egui::TopBottomPanel::top("hud_top")
            .exact_height(style::HUD_BAR_HEIGHT)
            .frame(egui::Frame::new().fill(panel).inner_margin(egui::Margin::symmetric(10, 6)))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(egui::RichText::new("PORTFOLIO.EXE").strong().color(primary));
                    ui.add_space(16.0);

                    // Mini-map: one pip per section, in order. Clicking a
                    // pip is a navigation request like any other.
                    for (idx, section) in self.sections.iter() {
                        let (rect, response) = ui.allocate_exact_size(
                            egui::vec2(style::MAP_PIP_SIZE, style::MAP_PIP_SIZE),
                            egui::Sense::click(),
                        );
                        let fill = if idx == active {
                            primary
                        } else if response.hovered() {
                            secondary
                        } else {
                            egui::Color32::from_gray(60)
                        };
                        ui.painter().rect_filled(rect.shrink(1.0), 0.0, fill);
                        let response = response.on_hover_text(section.label);
                        if response.clicked() {
                            *pending_nav.borrow_mut() = Some((idx, NavSource::MapClick));
                        }
                        ui.add_space(4.0);
                    }

                    ui.add_space(12.0);
                    style::truncated_label(
                        ui,
                        egui::RichText::new(self.route.current_path())
                            .size(12.0)
                            .color(secondary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if self.gamepad.menu_open { "CLOSE" } else { "MENU" };
                        if ui.button(egui::RichText::new(label).size(12.0)).clicked() {
                            self.gamepad.toggle_menu(active);
                        }
                    });
                });
            });
    }

    pub(crate) fn render_footer(&mut self, ctx: &egui::Context) {
        let primary = self.theme.primary();
        let secondary = self.theme.secondary();
        let panel = self.theme.panel();
        let (xp_fraction, level) = {
            let progress = self.progress.borrow();
            (progress.xp_fraction(), progress.level())
        };

        egui::TopBottomPanel::bottom("hud_footer")
            .exact_height(style::FOOTER_HEIGHT)
            .frame(egui::Frame::new().fill(panel).inner_margin(egui::Margin::symmetric(10, 6)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for (name, fraction, color) in [
                        ("HP", 0.85, egui::Color32::from_rgb(80, 200, 90)),
                        ("MP", 0.60, egui::Color32::from_rgb(80, 130, 230)),
                        ("XP", xp_fraction, egui::Color32::from_rgb(230, 190, 60)),
                    ] {
                        ui.label(egui::RichText::new(format!("{}:", name)).size(11.0).color(secondary));
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(style::STAT_BAR_WIDTH, style::STAT_BAR_HEIGHT),
                            egui::Sense::hover(),
                        );
                        style::stat_bar(ui.painter(), rect, fraction, color);
                        ui.add_space(10.0);
                    }

                    ui.label(egui::RichText::new(format!("LV {}", level)).size(11.0).color(primary));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if let Some((message, _)) = &self.ui.error_message {
                            ui.label(egui::RichText::new(message).size(11.0).color(self.theme.accent()));
                        } else if let Some((message, _)) = &self.ui.info_message {
                            ui.label(egui::RichText::new(message).size(11.0).color(primary));
                        }
                    });
                });

                if self.config.display.show_hints {
                    ui.horizontal(|ui| {
                        for hint in [
                            "[ESC] Menu",
                            "[\u{2191}][\u{2193}] Navigate",
                            "[ENTER] Select",
                            "[ALT+\u{2190}/\u{2192}] History",
                        ] {
                            ui.label(egui::RichText::new(hint).size(10.0).color(secondary));
                            ui.add_space(10.0);
                        }

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                egui::RichText::new(format!(
                                    "\u{00a9} {} {}",
                                    chrono::Local::now().format("%Y"),
                                    crate::content::PROFILE.name
                                ))
                                .size(10.0)
                                .color(secondary),
                            );
                        });
                    });
                }
            });
    }
}
