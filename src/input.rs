// Input handling for Retrofolio
// Translates keys into navigation commands, game-HUD style.

use crate::app::Retrofolio;
use crate::transition::sequencer::AdmissionPolicy;
use crate::transition::NavSource;
use eframe::egui;
use std::time::Instant;

/// What a key press asks the app to do. Movement only shifts the gamepad
/// highlight; Confirm is the only command that navigates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveDown,
    MoveUp,
    Confirm,
    ToggleMenu,
    HistoryBack,
    HistoryForward,
}

/// Pure key-to-command mapping. The caller gates on the title-screen
/// flag; while the game has not started no command applies at all.
pub fn map_key(key: egui::Key, modifiers: egui::Modifiers) -> Option<Command> {
    // History chords first so plain arrows don't shadow them
    if modifiers.alt {
        return match key {
            egui::Key::ArrowLeft => Some(Command::HistoryBack),
            egui::Key::ArrowRight => Some(Command::HistoryForward),
            _ => None,
        };
    }

    match key {
        egui::Key::ArrowDown => Some(Command::MoveDown),
        egui::Key::ArrowUp => Some(Command::MoveUp),
        egui::Key::Enter | egui::Key::Space => Some(Command::Confirm),
        egui::Key::Escape => Some(Command::ToggleMenu),
        _ => None,
    }
}

const NAV_KEYS: &[egui::Key] = &[
    egui::Key::ArrowDown,
    egui::Key::ArrowUp,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::Enter,
    egui::Key::Space,
    egui::Key::Escape,
];

impl Retrofolio {
    pub fn handle_input(&mut self, ctx: &egui::Context, now: Instant) {
        // The adapter is disabled on the loading and title screens
        if !self.ui.game_started() {
            return;
        }

        let pressed: Vec<Command> = ctx.input(|i| {
            NAV_KEYS
                .iter()
                .filter(|key| i.key_pressed(**key))
                .filter_map(|key| map_key(*key, i.modifiers))
                .collect()
        });

        for command in pressed {
            self.apply_command(command, now);
        }
    }

    pub fn apply_command(&mut self, command: Command, now: Instant) {
        match command {
            Command::MoveDown => self.gamepad.move_down(&self.sections),
            Command::MoveUp => self.gamepad.move_up(&self.sections),
            Command::Confirm => {
                // Keyboard confirms queue: a press during a transition
                // still lands once the transition completes
                self.request_navigation(
                    self.gamepad.position,
                    NavSource::Keyboard,
                    AdmissionPolicy::Queue,
                    now,
                );
            }
            Command::ToggleMenu => {
                let active = self.active_section();
                self.gamepad.toggle_menu(active);
            }
            Command::HistoryBack => self.navigate_history(true, now),
            Command::HistoryForward => self.navigate_history(false, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::bus::EventKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_map_key_basics() {
        let none = egui::Modifiers::NONE;
        assert_eq!(map_key(egui::Key::ArrowDown, none), Some(Command::MoveDown));
        assert_eq!(map_key(egui::Key::ArrowUp, none), Some(Command::MoveUp));
        assert_eq!(map_key(egui::Key::Enter, none), Some(Command::Confirm));
        assert_eq!(map_key(egui::Key::Space, none), Some(Command::Confirm));
        assert_eq!(map_key(egui::Key::Escape, none), Some(Command::ToggleMenu));
        assert_eq!(map_key(egui::Key::A, none), None);
    }

    #[test]
    fn test_alt_arrows_are_history() {
        let alt = egui::Modifiers::ALT;
        assert_eq!(map_key(egui::Key::ArrowLeft, alt), Some(Command::HistoryBack));
        assert_eq!(map_key(egui::Key::ArrowRight, alt), Some(Command::HistoryForward));
        // Alt swallows the vertical arrows rather than moving the highlight
        assert_eq!(map_key(egui::Key::ArrowDown, alt), None);
    }

    #[test]
    fn test_three_downs_then_confirm_issues_one_request() {
        let mut app = Retrofolio::new("/");
        app.start_game();
        let starts = Rc::new(RefCell::new(Vec::new()));
        let starts_clone = Rc::clone(&starts);
        app.bus.subscribe(EventKind::TransitionStart, move |event| {
            if let crate::transition::bus::TransitionEvent::Start { target_path, .. } = event {
                starts_clone.borrow_mut().push(target_path.clone());
            }
        });

        let now = Instant::now();
        app.apply_command(Command::MoveDown, now);
        app.apply_command(Command::MoveDown, now);
        app.apply_command(Command::MoveDown, now);
        assert_eq!(app.gamepad.position, 3);
        // Highlight moves never navigate
        assert!(starts.borrow().is_empty());

        app.apply_command(Command::Confirm, now);
        assert_eq!(*starts.borrow(), vec!["/projects".to_string()]);
    }

    #[test]
    fn test_menu_toggle_never_touches_the_sequencer() {
        let mut app = Retrofolio::new("/");
        app.start_game();
        let now = Instant::now();

        app.apply_command(Command::ToggleMenu, now);
        assert!(app.gamepad.menu_open);
        assert!(app.sequencer.is_idle());

        app.apply_command(Command::ToggleMenu, now);
        assert!(!app.gamepad.menu_open);
    }
}
