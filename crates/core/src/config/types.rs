use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::entry::EntrySpec;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: BTreeMap<String, Profile>,
    /// Named add-to-note presets shared by all profiles
    #[serde(default)]
    pub entries: BTreeMap<String, EntrySpec>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Folders to ignore when resolving notes (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
    /// Folder-path conventions, e.g. `projects = "03-Projects"`.
    /// Relative values are resolved against vault_root.
    #[serde(default)]
    pub folders: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    /// Excluded folders resolved to absolute paths.
    pub excluded_folders: Vec<PathBuf>,
    /// Folder conventions resolved to absolute paths.
    pub folders: BTreeMap<String, PathBuf>,
    pub entries: BTreeMap<String, EntrySpec>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Look up a folder convention by name.
    pub fn folder(&self, name: &str) -> Option<&PathBuf> {
        self.folders.get(name)
    }

    /// Look up an entry preset by name.
    pub fn entry(&self, name: &str) -> Option<&EntrySpec> {
        self.entries.get(name)
    }
}
