//! GitHub client for benchbot
//!
//! Creates pull-request comments through the issues API (on GitHub a PR
//! comment is an issue comment). This is the production implementation of
//! the pipeline's `CommentPublisher` seam.

pub mod client;
pub mod error;

pub use client::{GithubClient, GithubConfig};
pub use error::GithubError;
