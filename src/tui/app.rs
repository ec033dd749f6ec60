mod menu;
mod state;

pub use menu::SeedMode;
pub use state::{AppState, AutoplayStrategy, InputAction, Scene};
