pub mod client;
pub mod pulls;
pub mod types;

pub use client::create_client;
pub use pulls::list_pull_requests;
pub use types::PullRequest;
