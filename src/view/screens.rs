// Section screens. Content comes from `content`; the active ordinal
// comes from the committed route, never from the gamepad highlight.

use crate::app::{PendingNav, Retrofolio};
use crate::content;
use crate::style;
use crate::transition::NavSource;
use eframe::egui;

impl Retrofolio {
    pub(crate) fn render_active_screen(&mut self, ctx: &egui::Context, pending_nav: &PendingNav) {
        let active = self.active_section();
        // Arriving at a new full-page section resets the viewport scroll
        let reset_scroll = self.fx.borrow_mut().take_scroll_reset();

        egui::CentralPanel::default().show(ctx, |ui| {
            let section = self.sections.get(active);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(section.label)
                        .size(20.0)
                        .strong()
                        .color(self.theme.primary()),
                );
                ui.label(
                    egui::RichText::new(section.path)
                        .size(11.0)
                        .color(self.theme.secondary()),
                );
            });
            ui.separator();

            // Per-section scroll memory; full-page arrivals reset it above
            let mut area = egui::ScrollArea::vertical()
                .id_salt(section.id)
                .auto_shrink([false, false]);
            if reset_scroll {
                area = area.vertical_scroll_offset(0.0);
            }
            area.show(ui, |ui| match active {
                0 => self.render_hero(ui, pending_nav),
                1 => self.render_about(ui),
                2 => self.render_skills(ui),
                3 => self.render_projects(ui),
                _ => self.render_contact(ui),
            });
        });
    }

    fn render_hero(&mut self, ui: &mut egui::Ui, pending_nav: &PendingNav) {
        let primary = self.theme.primary();
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(content::PROFILE.name)
                    .size(42.0)
                    .strong()
                    .color(primary),
            );
            ui.label(
                egui::RichText::new(content::PROFILE.class)
                    .size(16.0)
                    .color(self.theme.secondary()),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("LEVEL {} \u{2022} {}", self.progress.borrow().level(), content::PROFILE.guild))
                    .size(12.0),
            );
            ui.add_space(32.0);

            if ui
                .add(
                    egui::Button::new(egui::RichText::new("START QUEST \u{25b6}").size(16.0).color(primary))
                        .min_size(egui::vec2(200.0, 44.0))
                        .stroke(egui::Stroke::new(2.0, primary)),
                )
                .clicked()
            {
                *pending_nav.borrow_mut() = Some((1, NavSource::Button));
            }
        });
    }

    fn render_about(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        for line in content::PROFILE.bio {
            ui.label(*line);
        }
        ui.add_space(20.0);
        ui.label(egui::RichText::new("BASE STATS").strong().color(self.theme.primary()));
        ui.add_space(6.0);

        egui::Grid::new("stats_grid")
            .num_columns(2)
            .spacing([16.0, 8.0])
            .show(ui, |ui| {
                for stat in content::STATS {
                    ui.label(egui::RichText::new(stat.name).size(13.0));
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(style::STAT_BAR_WIDTH * 1.5, style::STAT_BAR_HEIGHT),
                        egui::Sense::hover(),
                    );
                    style::stat_bar(
                        ui.painter(),
                        rect,
                        stat.value as f32 / 10.0,
                        self.theme.primary(),
                    );
                    ui.end_row();
                }
            });
    }

    fn render_skills(&mut self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        ui.add_space(12.0);
        TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.label(egui::RichText::new("ITEM").strong());
                });
                header.col(|ui| {
                    ui.label(egui::RichText::new("SLOT").strong());
                });
                header.col(|ui| {
                    ui.label(egui::RichText::new("POWER").strong());
                });
            })
            .body(|body| {
                body.rows(26.0, content::SKILLS.len(), |mut row| {
                    let skill = &content::SKILLS[row.index()];
                    row.col(|ui| {
                        ui.label(skill.name);
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(skill.category)
                                .size(12.0)
                                .color(self.theme.secondary()),
                        );
                    });
                    row.col(|ui| {
                        let (rect, _) = ui.allocate_exact_size(
                            egui::vec2(style::STAT_BAR_WIDTH * 1.5, style::STAT_BAR_HEIGHT),
                            egui::Sense::hover(),
                        );
                        style::stat_bar(
                            ui.painter(),
                            rect,
                            skill.level as f32 / 10.0,
                            self.theme.primary(),
                        );
                    });
                });
            });
    }

    fn render_projects(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        for project in content::PROJECTS {
            let status_color = match project.status {
                content::QuestStatus::Complete => self.theme.primary(),
                content::QuestStatus::Active => self.theme.accent(),
                content::QuestStatus::SideQuest => self.theme.secondary(),
            };

            egui::Frame::group(ui.style())
                .stroke(egui::Stroke::new(1.0, self.theme.secondary()))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(project.title).strong().size(15.0));
                        ui.label(
                            egui::RichText::new(project.status.label())
                                .size(11.0)
                                .color(status_color),
                        );
                    });
                    ui.label(project.summary);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(project.stack)
                                .size(11.0)
                                .color(self.theme.secondary()),
                        );
                        if let Some(url) = project.url {
                            if ui.small_button("OPEN QUEST LOG").clicked() {
                                if let Err(err) = open::that(url) {
                                    self.ui.set_error(format!("Could not open link: {}", err));
                                }
                            }
                        }
                    });
                });
            ui.add_space(8.0);
        }
    }

    fn render_contact(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        for link in content::LINKS {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(link.label).size(13.0));
                if ui.link(egui::RichText::new(link.value).color(self.theme.primary())).clicked() {
                    if let Err(err) = open::that(link.url) {
                        self.ui.set_error(format!("Could not open link: {}", err));
                    }
                }
            });
        }

        ui.add_space(24.0);
        ui.label(egui::RichText::new("OPTIONS").strong().color(self.theme.primary()));
        ui.add_space(6.0);

        let mut changed = false;
        if ui
            .checkbox(&mut self.config.display.crt_effects, "CRT scanlines")
            .changed()
        {
            changed = true;
        }
        if ui
            .checkbox(&mut self.config.display.show_hints, "Controller hints")
            .changed()
        {
            changed = true;
        }
        ui.horizontal(|ui| {
            ui.label("Theme:");
            if ui.button(self.theme.mode_str().to_uppercase()).clicked() {
                self.theme = self.theme.toggle();
                self.config.theme.mode = self.theme.mode_str().to_string();
                changed = true;
            }
        });

        if changed {
            self.persist_config();
        }
    }

    fn persist_config(&mut self) {
        match self.config.save() {
            Ok(()) => self.ui.set_info("SETTINGS SAVED"),
            Err(err) => self.ui.set_error(format!("Could not save settings: {}", err)),
        }
    }
}
