// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::event::DEFAULT_MAX_COMMENT_LEN;

/// The name of the agenda application.
pub const APP_NAME: &str = "agenda";

/// File name of the default backing agenda file.
pub const AGENDA_FILE_NAME: &str = "agenda.txt";

/// Configuration for the agenda core.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Config {
    /// Agenda file read and written back by one-shot commands.
    #[serde(default)]
    pub agenda_path: Option<PathBuf>,

    /// Maximum number of characters kept from a comment.
    #[serde(default = "default_max_comment_len")]
    pub max_comment_len: usize,

    /// Re-run the date and time validators on records read from a file.
    ///
    /// Off by default: loaded records only need to be well formed.
    #[serde(default)]
    pub validate_on_load: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agenda_path: None,
            max_comment_len: DEFAULT_MAX_COMMENT_LEN,
            validate_on_load: false,
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        match &self.agenda_path {
            Some(a) => {
                self.agenda_path = Some(
                    expand_path(a).map_err(|e| format!("Failed to expand agenda path: {e}"))?,
                )
            }

            None => match get_data_dir() {
                Ok(a) => self.agenda_path = Some(a.join(APP_NAME).join(AGENDA_FILE_NAME)),
                Err(e) => tracing::warn!("Failed to get data directory: {e}"),
            },
        };

        if self.max_comment_len == 0 {
            tracing::warn!("max_comment_len is 0, every comment will be dropped");
        }

        Ok(())
    }
}

fn default_max_comment_len() -> usize {
    DEFAULT_MAX_COMMENT_LEN
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn get_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or_else(|| "User-specific data directory not found".into())
}
