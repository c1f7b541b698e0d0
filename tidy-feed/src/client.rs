use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use std::future::Future;
use tidy_core::{RemoteTodo, first_page};

use crate::error::FetchError;

/// Public sample API the list page reads from.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Source of read-only remote todos.
pub trait TodoFeed {
    /// Fetch at most `limit` records, in feed order.
    fn fetch(&self, limit: usize) -> impl Future<Output = Result<Vec<RemoteTodo>, FetchError>> + Send;
}

/// The feed answers either with a bare array or with a paging envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum FeedBody {
    List(Vec<RemoteTodo>),
    Page { todos: Vec<RemoteTodo> },
}

impl FeedBody {
    fn into_records(self) -> Vec<RemoteTodo> {
        match self {
            FeedBody::List(v) | FeedBody::Page { todos: v } => v,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .user_agent(concat!("tidy/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }
}

impl TodoFeed for FeedClient {
    async fn fetch(&self, limit: usize) -> Result<Vec<RemoteTodo>, FetchError> {
        // The sample API treats limit=0 as "everything".
        if limit == 0 {
            return Ok(Vec::new());
        }

        let url = self.todos_url();
        tracing::debug!(%url, limit, "fetching remote todos");

        let resp = self
            .http
            .get(&url)
            .query(&[("limit", limit)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let body: FeedBody = serde_json::from_str(&text)?;

        Ok(first_page(body.into_records(), limit))
    }
}
