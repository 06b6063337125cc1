pub mod fx;
pub mod gamepad;
pub mod progress;
pub mod ui;

pub use fx::FxState;
pub use gamepad::GamepadState;
pub use progress::Progress;
pub use ui::{BootPhase, UiState};
