pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings, SettingsError};
pub use router::{HttpSettings, create_router};
pub use state::AppState;
