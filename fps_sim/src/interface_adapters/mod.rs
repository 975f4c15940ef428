// Interface adapters: HUD model, settings popup and scripted input.

pub mod hud;
pub mod input;
pub mod settings;

pub use hud::{Hud, HudState};
pub use input::ScriptedInput;
pub use settings::SettingsPopup;
