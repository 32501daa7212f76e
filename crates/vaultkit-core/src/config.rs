use serde::{Deserialize, Serialize};

/// Settings for a vault maintenance run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Top-level folders to scan, relative to the vault root. Folders
    /// that do not exist are skipped.
    #[serde(default = "default_folders")]
    pub folders: Vec<String>,
    /// File extension of note files, without the leading dot.
    #[serde(default = "default_extension")]
    pub note_extension: String,
}

fn default_folders() -> Vec<String> {
    ["Business", "News", "Other", "Personal", "Tech"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_extension() -> String {
    "md".to_string()
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            folders: default_folders(),
            note_extension: default_extension(),
        }
    }
}

impl VaultConfig {
    /// Load config from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}
