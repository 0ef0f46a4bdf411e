mod settings;

pub use settings::{Settings, SettingsError, SettingsResult, DEFAULT_LOG_FILTER};
