use serde::Deserialize;

use crate::error::ShellResult;
use crate::types::ThemeMode;

/// Static settings for the console shell, read once at startup.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub brand_title: String,
    pub login_path: String,
    /// Shown in the top bar when nobody is signed in.
    pub guest_name: String,
    pub toast_duration_ms: u32,
    /// Theme selected when the console starts.
    pub default_theme: ThemeMode,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand_title: "O365 管理系统".to_string(),
            login_path: "/login".to_string(),
            guest_name: "Guest".to_string(),
            toast_duration_ms: 3000,
            default_theme: ThemeMode::System,
        }
    }
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> ShellResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse `raw`, falling back to the defaults if it is malformed.
    pub fn load_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Falling back to default shell config: {}", e);
                Self::default()
            }
        }
    }
}
