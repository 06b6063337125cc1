pub mod boot;
pub mod hud;
pub mod menu;
pub mod overlay;
pub mod screens;
