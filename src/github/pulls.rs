use anyhow::{anyhow, Result};
use octocrab::Octocrab;

use crate::github::types::PullRequest;
use crate::remote::RepoSlug;

/// List the pull requests of a repository
///
/// Only the first page is fetched, with the API's default state, sort and
/// page size. Pull requests beyond that page are not returned.
pub async fn list_pull_requests(client: &Octocrab, slug: &RepoSlug) -> Result<Vec<PullRequest>> {
    let page = client
        .pulls(&slug.owner, &slug.name)
        .list()
        .send()
        .await
        .map_err(|e| describe_error(slug, &e))?;

    tracing::debug!(
        repo = %slug,
        count = page.items.len(),
        has_next = page.next.is_some(),
        "listed pull requests"
    );

    Ok(page.items.into_iter().map(PullRequest::from).collect())
}

/// Turn an octocrab error into a message a user can act on
fn describe_error(slug: &RepoSlug, e: &octocrab::Error) -> anyhow::Error {
    match e {
        octocrab::Error::GitHub { source, .. } => {
            classify(slug, source.status_code.as_u16(), &source.message)
        }
        _ => anyhow!("GitHub API error: {}", e),
    }
}

fn classify(slug: &RepoSlug, status: u16, message: &str) -> anyhow::Error {
    match status {
        404 => anyhow!(
            "Repository {} not found or no access. Private repositories need GITHUB_API_TOKEN.",
            slug
        ),
        401 => anyhow!("Authentication failed. GITHUB_API_TOKEN may be invalid or expired."),
        429 => rate_limited(),
        403 if message.to_lowercase().contains("rate limit") => rate_limited(),
        403 => anyhow!("Access to {} was denied: {}", slug, message),
        _ => anyhow!("GitHub API error ({}): {}", status, message),
    }
}

fn rate_limited() -> anyhow::Error {
    anyhow!("GitHub API rate limit exceeded. Set GITHUB_API_TOKEN or wait a few minutes.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug() -> RepoSlug {
        RepoSlug::new("acme", "widgets")
    }

    #[test]
    fn test_classify_not_found() {
        let err = classify(&slug(), 404, "Not Found");
        assert!(err.to_string().contains("acme/widgets not found"));
    }

    #[test]
    fn test_classify_bad_credentials() {
        let err = classify(&slug(), 401, "Bad credentials");
        assert!(err.to_string().starts_with("Authentication failed"));
    }

    #[test]
    fn test_classify_rate_limit() {
        let primary = classify(&slug(), 403, "API rate limit exceeded for 203.0.113.7.");
        assert!(primary.to_string().contains("rate limit exceeded"));

        let secondary = classify(&slug(), 429, "Too Many Requests");
        assert!(secondary.to_string().contains("rate limit exceeded"));
    }

    #[test]
    fn test_classify_forbidden_is_not_rate_limit() {
        let err = classify(&slug(), 403, "Resource not accessible by integration");
        let msg = err.to_string();
        assert!(msg.contains("denied"));
        assert!(msg.contains("Resource not accessible by integration"));
        assert!(!msg.contains("rate limit"));
    }

    #[test]
    fn test_classify_other_status_keeps_message() {
        // A title that merely mentions 404 must not change the category
        let err = classify(&slug(), 500, "upstream 404 while rendering");
        assert_eq!(
            err.to_string(),
            "GitHub API error (500): upstream 404 while rendering"
        );
    }
}
