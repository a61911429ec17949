//! API key loading.
//!
//! The environment variable wins; otherwise an `api_keys.env` file is
//! searched in the home directory, then in the working directory. The file
//! is a plain `key=value` list; only the `openrouter_api_key=` line matters.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{OpenRouterError, OpenRouterResult};

/// Environment variable checked first.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Name of the fallback key file.
pub const KEY_FILE_NAME: &str = "api_keys.env";

const KEY_LINE_PREFIX: &str = "openrouter_api_key=";

/// Load the OpenRouter API key from the environment or a local key file.
pub fn load_api_key() -> OpenRouterResult<String> {
    if let Ok(key) = env::var(API_KEY_ENV) {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }

    for path in key_file_candidates() {
        if path.exists() {
            return key_from_file(&path);
        }
    }

    Err(OpenRouterError::KeyFileNotFound)
}

/// Candidate key file locations, in precedence order.
fn key_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(KEY_FILE_NAME));
    }
    if let Ok(cwd) = env::current_dir() {
        candidates.push(cwd.join(KEY_FILE_NAME));
    }
    candidates
}

fn key_from_file(path: &Path) -> OpenRouterResult<String> {
    let contents = std::fs::read_to_string(path)?;
    parse_key(&contents).ok_or_else(|| OpenRouterError::KeyMissing {
        path: path.display().to_string(),
    })
}

/// Extract the key from file contents; first matching line wins.
fn parse_key(contents: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| line.strip_prefix(KEY_LINE_PREFIX))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(ToString::to_string)
}
