use anyhow::{Context, Result};
use octocrab::Octocrab;

/// Create a GitHub client, authenticated when a personal access token is given
///
/// Without a token the client is anonymous and subject to the
/// unauthenticated rate limit.
pub fn create_client(token: Option<&str>) -> Result<Octocrab> {
    let builder = Octocrab::builder();
    let builder = match token {
        Some(token) => builder.personal_token(token.to_string()),
        None => builder,
    };
    builder.build().context("Failed to create GitHub client")
}
