use std::path::{Path, PathBuf};

/// Config file looked up in the current working directory
pub const LOCAL_CONFIG_FILE: &str = ".bug-tracker.toml";

/// Load config file content from CWD first, then the global config directory
///
/// Searches for:
/// 1. `.bug-tracker.toml` in the current working directory
/// 2. `config.toml` in the platform config directory
///
/// Returns the path and content of the first file found.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    let candidates = std::iter::once(PathBuf::from(LOCAL_CONFIG_FILE)).chain(crate::app_config_path());

    for path in candidates {
        if let Some(content) = read_config(&path) {
            return Some((path, content));
        }
    }

    None
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}
