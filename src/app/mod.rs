//! Application state management and coordination for the dotdeck shell.

mod app_state;
mod application_coordinator;
mod settings_coordinator;
pub mod workspace;

pub use app_state::AppState;
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
