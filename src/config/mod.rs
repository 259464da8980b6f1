pub mod model;

#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::constants::REQUIRED_DATABASE_FIELDS;

// Re-export main types
pub use self::model::DatabaseConfig;

impl DatabaseConfig {
    /// Loads the `database` section from a JSON config file. Relative paths
    /// are resolved against the executable's directory, not the caller's
    /// working directory, so the tool finds its config no matter where it is
    /// launched from.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let full_path = resolve_config_path(path.as_ref())?;

        if !full_path.exists() {
            anyhow::bail!(
                "Configuration file '{}' does not exist.",
                full_path.display()
            );
        }

        let content = fs::read_to_string(&full_path)
            .await
            .with_context(|| format!("Failed to read '{}'", full_path.display()))?;

        let root: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse '{}' as JSON", full_path.display()))?;

        let section = root.get("database").ok_or_else(|| {
            anyhow::anyhow!("Configuration file is missing the 'database' section.")
        })?;

        for field in REQUIRED_DATABASE_FIELDS {
            if section.get(field).is_none() {
                anyhow::bail!("'database' section is missing required field: '{}'", field);
            }
        }

        let config: DatabaseConfig = serde_json::from_value(section.clone())
            .with_context(|| format!("Invalid 'database' section in '{}'", full_path.display()))?;

        Ok(config)
    }
}

/// Absolute paths pass through untouched; relative paths are joined onto the
/// directory containing the running executable.
pub fn resolve_config_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let exe_dir = exe
        .parent()
        .context("Executable path has no parent directory")?;

    Ok(exe_dir.join(path))
}
