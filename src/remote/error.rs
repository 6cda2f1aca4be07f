use thiserror::Error;

/// Errors raised while resolving the GitHub repository behind `origin`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("no Git repository at {path}")]
    NotARepository { path: String },

    #[error("remote '{name}' not found")]
    RemoteNotFound { name: String },

    #[error("remote '{name}' has no configured URL")]
    NoUrl { name: String },

    #[error("remote URL is not a github.com HTTPS or SSH URL: {url}")]
    UnsupportedHost { url: String },

    /// The URL had a GitHub prefix but did not name exactly `owner/repo`.
    #[error("remote URL does not point at an owner/repository pair: {url}")]
    Malformed { url: String },

    #[error("git error: {message}")]
    Git { message: String },
}

impl From<git2::Error> for RemoteError {
    fn from(error: git2::Error) -> Self {
        Self::Git {
            message: error.message().to_string(),
        }
    }
}
