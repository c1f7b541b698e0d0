//! tidy-feed: HTTP client for the remote todo feed and the list view's read path

pub mod client;
pub mod error;
pub mod view;

pub use client::{DEFAULT_BASE_URL, FeedClient, TodoFeed};
pub use error::FetchError;
pub use view::{FeedState, RemoteTodoView};
