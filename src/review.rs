//! Projection of pull requests into table rows

use chrono::{DateTime, Utc};

use crate::github::PullRequest;

/// Weekday, month, day, 24-hour time, zone, year: `Tue Mar 5 09:07 UTC 2024`
const DATE_FORMAT: &str = "%a %b %-d %H:%M %Z %Y";

/// A pull request together with the cells it renders as
///
/// Rows own their record, so the row under the cursor always refers to the
/// pull request it displays.
#[derive(Debug, Clone, PartialEq)]
pub struct PullRequestRow {
    pub pr: PullRequest,
    pub summary: String,
    pub author: String,
    pub labels: String,
    pub created: String,
}

impl PullRequestRow {
    pub fn new(pr: PullRequest) -> Self {
        Self {
            summary: pr.title.clone(),
            author: pr.author.clone(),
            labels: format_labels(&pr.labels),
            created: pr.created_at.map(format_created).unwrap_or_default(),
            pr,
        }
    }

    /// Cells in column order: summary, author, labels, date
    pub fn cells(&self) -> [&str; 4] {
        [
            self.summary.as_str(),
            self.author.as_str(),
            self.labels.as_str(),
            self.created.as_str(),
        ]
    }

    /// URL to hand to the browser, if it is a web URL
    pub fn open_url(&self) -> Option<&str> {
        is_openable(&self.pr.url).then_some(self.pr.url.as_str())
    }
}

/// Build one row per pull request, keeping the input order
pub fn project(prs: Vec<PullRequest>) -> Vec<PullRequestRow> {
    prs.into_iter().map(PullRequestRow::new).collect()
}

pub fn format_labels(labels: &[String]) -> String {
    labels.join(", ")
}

pub fn format_created(created_at: DateTime<Utc>) -> String {
    created_at.format(DATE_FORMAT).to_string()
}

/// Only http(s) URLs are handed to the browser
pub fn is_openable(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
