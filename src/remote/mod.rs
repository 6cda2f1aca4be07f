//! Resolve the GitHub repository behind the local `origin` remote.

mod error;
mod slug;

pub use error::RemoteError;
pub use slug::{parse_remote_url, RepoSlug};

use std::path::Path;

use git2::Repository;

/// Remote consulted for the repository URL
pub const REMOTE_NAME: &str = "origin";

/// Resolve the owner/repository pair for the repository at `path`.
///
/// The repository must live exactly at `path`; parent directories are not
/// searched. Only the first URL configured for `origin` is considered.
pub fn resolve(path: &Path) -> Result<RepoSlug, RemoteError> {
    let repo = Repository::open(path).map_err(|error| {
        if error.code() == git2::ErrorCode::NotFound {
            RemoteError::NotARepository {
                path: path.display().to_string(),
            }
        } else {
            RemoteError::from(error)
        }
    })?;

    let url = first_remote_url(&repo, REMOTE_NAME)?;
    tracing::debug!(remote = REMOTE_NAME, url = %url, "read remote URL");

    parse_remote_url(&url)
}

/// Read the first value of `remote.<name>.url`.
///
/// libgit2's remote lookup reports the last configured value, so the
/// multivar is read directly.
fn first_remote_url(repo: &Repository, name: &str) -> Result<String, RemoteError> {
    repo.find_remote(name).map_err(|error| {
        if error.code() == git2::ErrorCode::NotFound {
            RemoteError::RemoteNotFound {
                name: name.to_string(),
            }
        } else {
            RemoteError::from(error)
        }
    })?;

    let no_url = || RemoteError::NoUrl {
        name: name.to_string(),
    };

    let config = repo.config()?;
    let key = format!("remote.{}.url", name);
    let mut entries = match config.multivar(&key, None) {
        Ok(entries) => entries,
        Err(error) if error.code() == git2::ErrorCode::NotFound => return Err(no_url()),
        Err(error) => return Err(error.into()),
    };

    let first = match entries.next() {
        Some(entry) => entry?.value().map(str::to_string),
        None => None,
    };

    first.filter(|url| !url.is_empty()).ok_or_else(no_url)
}
