mod config;
mod local_storage;

pub use config::{ApplicationSettings, GuestCartSettings, Settings, get_config_settings};
pub use local_storage::JsonFileStorage;
