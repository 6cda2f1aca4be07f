//! List the pull requests of the GitHub repository behind the current
//! directory's `origin` remote in an interactive terminal table.

pub mod browser;
pub mod config;
pub mod credentials;
pub mod github;
pub mod remote;
pub mod review;
pub mod stderr_buffer;
pub mod tui;
