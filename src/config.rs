//! Configuration and settings management
//!
//! Loads settings from environment variables and defines menu constants.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Application settings loaded from environment variables
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Telegram Bot API token
    pub telegram_token: String,

    /// Path to the vocabulary workbook read once at startup
    #[serde(default = "default_vocabulary_path")]
    pub vocabulary_path: String,

    /// Directory holding the numbered audio track files
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,

    /// Path to the downloadable course book
    #[serde(default = "default_book_path")]
    pub book_path: String,
}

fn default_vocabulary_path() -> String {
    "vocabulary.xlsx".to_string()
}

fn default_audio_dir() -> String {
    "audio".to_string()
}

fn default_book_path() -> String {
    "book.pdf".to_string()
}

impl Settings {
    /// Create new settings by loading from environment and files
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vocabot::config::Settings;
    ///
    /// let settings = Settings::new().expect("Failed to load configuration");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if loading fails.
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(File::with_name("config/default").required(false))
            // Add in the current environment file
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Add in a local configuration file
            // This file shouldn't be checked into git
            .add_source(File::with_name("config/local").required(false))
            // Add in settings from the environment (with a prefix of APP)
            .add_source(Environment::with_prefix("APP").separator("__"))
            // Also add settings from environment variables directly (without prefix)
            // Note: Environment::default() auto-converts UPPER_SNAKE_CASE to snake_case
            // ignore_empty treats empty env vars as unset
            .add_source(Environment::default().ignore_empty(true))
            .build()?;

        s.try_deserialize()
    }
}

/// Number of audio tracks offered by the audio menu
pub const TRACK_COUNT: u8 = 49;

/// Number of lesson sheets loaded from the vocabulary workbook
pub const VOCAB_SHEET_COUNT: u8 = 5;

/// Number of lesson buttons on the main menu
pub const MENU_LESSON_COUNT: u8 = 6;

/// Pause between acknowledging an audio request and uploading the file
pub const AUDIO_SEND_DELAY_SECS: u64 = 2;
