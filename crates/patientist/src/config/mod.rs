//! Configuration loading and merging.
//!
//! Config is loaded from two sources with the local one taking precedence:
//! 1. User-level: `~/.config/patientist/config.toml`
//! 2. Local: `<cwd>/.patientist/config.toml`
//!
//! Covers where the data file lives, the default log level and the prompt
//! text. Missing, empty or malformed files are treated as absent.


use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_STORAGE_PATH: &str = "data/patientist.toml";
const DEFAULT_LOG_LEVEL: &str = "warn";
const DEFAULT_PROMPT: &str = "> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage: StorageConfig,
    pub log: LogConfig,
    pub prompt: PromptConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Data file location; relative paths are resolved against the root the
    /// config was loaded for.
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    storage: Option<RawStorage>,
    log: Option<RawLog>,
    prompt: Option<RawPrompt>,
}

#[derive(Debug, Default, Deserialize)]
struct RawStorage {
    #[serde(alias = "file")]
    path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLog {
    level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPrompt {
    text: Option<String>,
}

fn read_toml(path: &Path) -> Option<RawConfig> {
    let contents = fs::read_to_string(path).ok()?;
    if contents.trim().is_empty() {
        return None;
    }
    match toml::from_str::<RawConfig>(&contents) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!("ignoring malformed config {}: {err}", path.display());
            None
        }
    }
}

fn merge_config(root: &Path, user: Option<RawConfig>, local: Option<RawConfig>) -> Config {
    let local_storage = local.as_ref().and_then(|c| c.storage.as_ref());
    let user_storage = user.as_ref().and_then(|c| c.storage.as_ref());
    let storage_path = local_storage
        .and_then(|s| s.path.clone())
        .or_else(|| user_storage.and_then(|s| s.path.clone()))
        .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string());

    let local_log = local.as_ref().and_then(|c| c.log.as_ref());
    let user_log = user.as_ref().and_then(|c| c.log.as_ref());
    let level = local_log
        .and_then(|l| l.level.clone())
        .or_else(|| user_log.and_then(|l| l.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

    let local_prompt = local.as_ref().and_then(|c| c.prompt.as_ref());
    let user_prompt = user.as_ref().and_then(|c| c.prompt.as_ref());
    let text = local_prompt
        .and_then(|p| p.text.clone())
        .or_else(|| user_prompt.and_then(|p| p.text.clone()))
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    Config {
        storage: StorageConfig {
            path: root.join(storage_path),
        },
        log: LogConfig { level },
        prompt: PromptConfig { text },
    }
}

fn config_path_from_dir(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

pub fn user_config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(config_path_from_dir(&home.join(".config").join("patientist")))
}

pub fn local_config_path(root: &Path) -> PathBuf {
    config_path_from_dir(&root.join(".patientist"))
}

pub fn load_config(root: &Path) -> Config {
    let local_config = read_toml(&local_config_path(root));
    let user_config = user_config_path().and_then(|path| read_toml(&path));

    merge_config(root, user_config, local_config)
}
