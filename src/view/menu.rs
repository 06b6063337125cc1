// The Escape-toggled game menu overlay. Pointer hover moves the gamepad
// highlight; click confirms like the keyboard does.

use crate::app::{PendingNav, Retrofolio};
use crate::style;
use crate::transition::NavSource;
use eframe::egui;

impl Retrofolio {
    pub(crate) fn render_menu_overlay(&mut self, ctx: &egui::Context, pending_nav: &PendingNav) {
        // Dim everything behind the menu and swallow stray clicks. Created
        // before the window so it stacks below it.
        egui::Area::new(egui::Id::new("menu_dim"))
            .order(egui::Order::Middle)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let rect = ui.ctx().screen_rect();
                ui.painter()
                    .rect_filled(rect, 0.0, egui::Color32::from_black_alpha(170));
                ui.allocate_rect(rect, egui::Sense::click());
            });

        let primary = self.theme.primary();
        let secondary = self.theme.secondary();
        let accent = self.theme.accent();
        let mut exit_clicked = false;

        egui::Window::new("GAME MENU")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 110.0])
            .fixed_size([style::MENU_WIDTH, 0.0])
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(self.theme.panel())
                    .stroke(egui::Stroke::new(2.0, secondary)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new("GAME MENU").strong().color(primary));
                });
                ui.separator();

                for (idx, section) in self.sections.iter() {
                    let highlighted = self.gamepad.position == idx;
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(ui.available_width(), style::MENU_ROW_HEIGHT),
                        egui::Sense::click(),
                    );

                    if highlighted {
                        ui.painter()
                            .rect_filled(rect, 0.0, primary.gamma_multiply(0.18));
                    }

                    let text_color = if highlighted { primary } else { self.theme.text() };
                    ui.painter().text(
                        egui::pos2(rect.min.x + 10.0, rect.center().y),
                        egui::Align2::LEFT_CENTER,
                        format!("{}  {}", section.icon, section.label),
                        egui::FontId::proportional(14.0),
                        text_color,
                    );
                    if highlighted {
                        ui.painter().text(
                            egui::pos2(rect.max.x - 12.0, rect.center().y),
                            egui::Align2::RIGHT_CENTER,
                            ">",
                            egui::FontId::proportional(14.0),
                            primary,
                        );
                    }

                    if response.hovered() {
                        self.gamepad.hover(&self.sections, idx);
                    }
                    if response.clicked() {
                        *pending_nav.borrow_mut() = Some((idx, NavSource::Button));
                    }
                }

                ui.separator();
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(ui.available_width(), style::MENU_ROW_HEIGHT),
                    egui::Sense::click(),
                );
                ui.painter().text(
                    egui::pos2(rect.min.x + 10.0, rect.center().y),
                    egui::Align2::LEFT_CENTER,
                    "EXIT GAME",
                    egui::FontId::proportional(14.0),
                    if response.hovered() { accent } else { self.theme.text() },
                );
                if response.clicked() {
                    exit_clicked = true;
                }

                ui.separator();
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("PRESS [ESC] TO CLOSE")
                            .size(10.0)
                            .color(secondary),
                    );
                });
            });

        if exit_clicked {
            self.exit_to_title();
        }
    }
}
