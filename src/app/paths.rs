// SPDX-License-Identifier: MPL-2.0
//! Application directories.
//!
//! # Resolution Order
//!
//! 1. **Explicit override**: parameter of the `_with_override()` functions
//! 2. **CLI arguments** (`--config-dir`), set once via [`init_cli_overrides`]
//! 3. **Environment variables** (`DICEBENCH_CONFIG_DIR`, `DICEBENCH_DATA_DIR`)
//! 4. **Platform default** from the `dirs` crate, with the app name appended
//!
//! The data directory only hosts the default media folder; nothing is
//! written there by the application.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "DiceBench";

/// Folder of the data directory holding the clips.
const MEDIA_DIR_NAME: &str = "media";

pub const ENV_DATA_DIR: &str = "DICEBENCH_DATA_DIR";
pub const ENV_CONFIG_DIR: &str = "DICEBENCH_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("CLI path overrides already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Directory holding `settings.toml`.
///
/// - Linux: `~/.config/DiceBench/`
/// - macOS: `~/Library/Application Support/DiceBench/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\DiceBench\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }
    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }
    if let Some(path) = env_dir(ENV_DATA_DIR) {
        return Some(path);
    }
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Media folder used when neither the CLI nor the config names one.
pub fn default_media_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|mut path| {
        path.push(MEDIA_DIR_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below touch process-wide environment variables.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);
        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.is_absolute());
        }
    }

    #[test]
    fn override_takes_precedence() {
        let override_path = PathBuf::from("/custom/config");
        assert_eq!(
            get_app_config_dir_with_override(Some(override_path.clone())),
            Some(override_path)
        );
    }

    #[test]
    fn env_var_overrides_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/tmp/dicebench-data");
        assert_eq!(
            get_app_data_dir(),
            Some(PathBuf::from("/tmp/dicebench-data"))
        );
        assert_eq!(
            default_media_dir(),
            Some(PathBuf::from("/tmp/dicebench-data/media"))
        );
        std::env::remove_var(ENV_DATA_DIR);
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");
        if let Some(path) = get_app_config_dir_with_override(None) {
            assert_ne!(path, PathBuf::new());
        }
        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
