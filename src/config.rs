use crate::api::{ApiClient, ApiError, DEFAULT_API_BASE, Style};
use crate::inventory::DEFAULT_HOST;
use std::path::PathBuf;

/// Runtime settings shared by the interactive and one-shot modes.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    /// Where generated inventories are saved.
    pub output_dir: PathBuf,
    /// Initial form values.
    pub host: String,
    pub style: Style,
    pub ignore: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            output_dir: default_output_dir(),
            host: DEFAULT_HOST.to_string(),
            style: Style::default(),
            ignore: String::new(),
        }
    }
}

impl Config {
    pub fn api_client(&self) -> Result<ApiClient, ApiError> {
        ApiClient::new(self.api_base.clone())
    }
}

/// The user's download directory, falling back to the working directory.
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
