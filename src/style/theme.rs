// Retro CRT palette. Dark is green-phosphor, light is the amber variant.

use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppTheme {
    Dark,
    Light,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::Dark
    }
}

impl AppTheme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn mode_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Screen background.
    pub fn bg(&self) -> egui::Color32 {
        match self {
            Self::Dark => egui::Color32::from_rgb(10, 15, 30),
            Self::Light => egui::Color32::from_rgb(240, 234, 214),
        }
    }

    /// Panel / HUD chrome background.
    pub fn panel(&self) -> egui::Color32 {
        match self {
            Self::Dark => egui::Color32::from_rgb(16, 24, 44),
            Self::Light => egui::Color32::from_rgb(226, 218, 192),
        }
    }

    /// Primary accent - the phosphor glow.
    pub fn primary(&self) -> egui::Color32 {
        match self {
            Self::Dark => egui::Color32::from_rgb(0, 255, 170),
            Self::Light => egui::Color32::from_rgb(170, 95, 0),
        }
    }

    /// Secondary accent for borders and inactive chrome.
    pub fn secondary(&self) -> egui::Color32 {
        match self {
            Self::Dark => egui::Color32::from_rgb(58, 90, 140),
            Self::Light => egui::Color32::from_rgb(120, 104, 70),
        }
    }

    /// Warning / damage accent.
    pub fn accent(&self) -> egui::Color32 {
        match self {
            Self::Dark => egui::Color32::from_rgb(255, 47, 109),
            Self::Light => egui::Color32::from_rgb(180, 30, 60),
        }
    }

    pub fn text(&self) -> egui::Color32 {
        match self {
            Self::Dark => egui::Color32::from_rgb(200, 214, 229),
            Self::Light => egui::Color32::from_rgb(40, 36, 24),
        }
    }

    /// Install this theme into the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = match self {
            Self::Dark => egui::Visuals::dark(),
            Self::Light => egui::Visuals::light(),
        };
        visuals.panel_fill = self.bg();
        visuals.window_fill = self.panel();
        visuals.override_text_color = Some(self.text());
        visuals.selection.bg_fill = self.primary().gamma_multiply(0.25);
        visuals.widgets.hovered.bg_fill = self.panel();
        visuals.widgets.active.bg_fill = self.primary().gamma_multiply(0.4);
        ctx.set_visuals(visuals);
    }
}
