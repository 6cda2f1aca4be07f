use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub author: String,      // empty when the submitter is unknown
    pub labels: Vec<String>, // API order
    pub created_at: Option<DateTime<Utc>>,
    pub url: String,         // HTML URL for browser, may be empty
}

impl From<octocrab::models::pulls::PullRequest> for PullRequest {
    fn from(pr: octocrab::models::pulls::PullRequest) -> Self {
        Self {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            author: pr.user.map(|user| user.login).unwrap_or_default(),
            labels: pr
                .labels
                .unwrap_or_default()
                .into_iter()
                .map(|label| label.name)
                .collect(),
            created_at: pr.created_at,
            url: pr.html_url.map(|url| url.to_string()).unwrap_or_default(),
        }
    }
}
