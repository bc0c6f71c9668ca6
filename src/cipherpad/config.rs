use crate::driver::DEFAULT_COMMANDS_FILE;
use crate::error::{CipherpadError, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const PROJECT_CONFIG_DIR: &str = ".cipherpad";
pub const CONFIG_DIR_ENV: &str = "CIPHERPAD_CONFIG_DIR";

/// Configuration for cipherpad, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CipherpadConfig {
    /// Commands file read when none is given on the command line
    #[serde(default = "default_commands_file")]
    pub commands_file: String,

    /// Colored output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_commands_file() -> String {
    DEFAULT_COMMANDS_FILE.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for CipherpadConfig {
    fn default() -> Self {
        Self {
            commands_file: default_commands_file(),
            color: default_color(),
        }
    }
}

impl CipherpadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            CipherpadError::Config(format!("cannot read {}: {}", config_path.display(), e))
        })?;
        let config: CipherpadConfig =
            serde_json::from_str(&content).map_err(CipherpadError::Serialization)?;
        Ok(config)
    }

    pub fn commands_path(&self) -> PathBuf {
        PathBuf::from(&self.commands_file)
    }
}

/// Where to look for `config.json`.
///
/// `$CIPHERPAD_CONFIG_DIR` wins, then `./.cipherpad` when it exists, then the
/// platform config directory. `None` when none of these can be determined.
pub fn resolve_config_dir(cwd: &Path) -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }

    let project = cwd.join(PROJECT_CONFIG_DIR);
    if project.is_dir() {
        return Some(project);
    }

    ProjectDirs::from("com", "cipherpad", "cipherpad").map(|dirs| dirs.config_dir().to_path_buf())
}
