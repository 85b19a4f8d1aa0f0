use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the dashboard pages and their assets live on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageSettings {
    /// directory holding `home.html`, `dashboard1.html` and the other page templates
    #[serde(default = "templates_dir_default")]
    pub templates_dir: PathBuf,
    /// directory served under `/static`
    #[serde(default = "static_dir_default")]
    pub static_dir: PathBuf,
}

impl PageSettings {
    pub fn is_default(&self) -> bool {
        self == &PageSettings::default()
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        PageSettings {
            templates_dir: templates_dir_default(),
            static_dir: static_dir_default(),
        }
    }
}

fn templates_dir_default() -> PathBuf {
    PathBuf::from("templates")
}

fn static_dir_default() -> PathBuf {
    PathBuf::from("static")
}
