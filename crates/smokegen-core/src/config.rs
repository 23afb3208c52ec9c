use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Project configuration loaded from `.smokegen.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SmokegenConfig {
    /// Schema file read by `smokegen generate`.
    pub input: String,
    /// Directory the generated spec files are written to.
    pub output: String,
}

impl Default for SmokegenConfig {
    fn default() -> Self {
        Self {
            input: "schema.yml".to_string(),
            output: "tests/api/generated".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".smokegen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<SmokegenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: SmokegenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}
