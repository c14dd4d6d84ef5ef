//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::convert::DEFAULT_API_URL;
use crate::model::ModeSet;

/// Errors that can occur while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory; pass --log-file")]
    NoDataDir,
}

/// Which set of input modes the form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormVariant {
    /// JSON, example and image input.
    #[default]
    Image,
    /// JSON, URL and example input.
    Url,
}

impl FormVariant {
    pub fn modes(self) -> ModeSet {
        match self {
            FormVariant::Image => ModeSet::image_form(),
            FormVariant::Url => ModeSet::url_form(),
        }
    }
}

/// Turn a menu (typed JSON, an example, a URL or an image) into a menu record.
#[derive(Parser, Debug, Clone)]
#[command(name = "menugen", version, about)]
pub struct Config {
    /// Base URL of the menu conversion service
    #[arg(long, env = "MENUGEN_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API key sent in the `app` header
    #[arg(long, env = "MENUGEN_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,

    /// Which input modes the form offers
    #[arg(long, env = "MENUGEN_FORM", value_enum, default_value_t = FormVariant::Image)]
    pub form: FormVariant,

    /// Where to write the log (default: <data dir>/menugen/menugen.log)
    #[arg(long, env = "MENUGEN_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Returns the log file path, falling back to the XDG data directory.
    pub fn log_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Ok(data_dir.join("menugen").join("menugen.log"))
    }
}
