use std::path::Path;

use anyhow::{Context, Result};

/// Environment variable holding the GitHub personal access token
pub const ENV_TOKEN_VAR: &str = "GITHUB_API_TOKEN";

/// Default env file, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Load variables from an env file into the process environment.
///
/// Variables already present in the environment are left untouched.
/// Returns `Ok(false)` when the file does not exist.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_env_file(path: &Path) -> Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "loaded env file");
            Ok(true)
        }
        Err(e) if e.not_found() => {
            tracing::debug!(path = %path.display(), "no env file");
            Ok(false)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to load env file {}", path.display())),
    }
}

/// Check for a GitHub token in the GITHUB_API_TOKEN environment variable.
/// Returns Some(token) if the env var is set and non-empty, None otherwise.
pub fn get_token_from_env() -> Option<String> {
    normalize_token(std::env::var(ENV_TOKEN_VAR).ok())
}

fn normalize_token(raw: Option<String>) -> Option<String> {
    raw.map(|val| val.trim().to_string())
        .filter(|token| !token.is_empty())
}
