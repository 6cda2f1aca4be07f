use std::fmt;

use super::error::RemoteError;

const GITHUB_HTTPS_PREFIX: &str = "https://github.com/";
const GITHUB_SSH_PREFIX: &str = "git@github.com:";

/// Owner and repository name of a GitHub repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parse a GitHub remote URL into its owner/repository pair.
///
/// Accepted forms:
/// - `https://github.com/owner/repo(.git)`
/// - `git@github.com:owner/repo(.git)`
///
/// # Errors
/// `UnsupportedHost` when neither prefix matches, `Malformed` when the
/// remaining path is not exactly two non-empty segments.
pub fn parse_remote_url(url: &str) -> Result<RepoSlug, RemoteError> {
    let path = url
        .strip_prefix(GITHUB_HTTPS_PREFIX)
        .or_else(|| url.strip_prefix(GITHUB_SSH_PREFIX))
        .ok_or_else(|| RemoteError::UnsupportedHost {
            url: url.to_string(),
        })?;

    let path = path.strip_suffix(".git").unwrap_or(path);

    let malformed = || RemoteError::Malformed {
        url: url.to_string(),
    };

    let mut segments = path.split('/');
    let owner = segments.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    let name = segments.next().filter(|s| !s.is_empty()).ok_or_else(malformed)?;
    if segments.next().is_some() {
        return Err(malformed());
    }

    Ok(RepoSlug::new(owner, name))
}
