//! Configuration management for the habt application.
//!
//! Settings live in a JSON file in the platform data directory (see
//! [`DataStorage`]). Every section is optional so a missing file, or a file
//! written by an older version, still loads. `Config::init` runs the
//! interactive setup wizard used by the `init` command.

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Tracker behavior settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrackerConfig {
    /// Category used when none is given at creation and as the target when a
    /// deleted category's trackers are reassigned.
    pub default_category: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            default_category: "General".to_string(),
        }
    }
}

/// Table rendering settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Whether tracker emoji are shown in list output.
    pub emoji: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { emoji: true }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker: Option<TrackerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The effective default category name.
    pub fn default_category(&self) -> String {
        self.tracker.clone().unwrap_or_default().default_category
    }

    /// Whether emoji are shown in tables.
    pub fn show_emoji(&self) -> bool {
        self.display.clone().unwrap_or_default().emoji
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the configurable modules as a multi-select and prompts for
    /// each selected one, pre-filling current values as defaults. Returns the
    /// updated configuration for the caller to save.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = [Message::ConfigModuleTracker.to_string(), Message::ConfigModuleDisplay.to_string()];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match selection {
                0 => {
                    let default = config.tracker.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTracker);
                    config.tracker = Some(TrackerConfig {
                        default_category: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultCategory.to_string())
                            .default(default.default_category)
                            .interact_text()?,
                    });
                }
                1 => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        emoji: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowEmoji.to_string())
                            .default(default.emoji)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
