//! RemoteTodoView — the read path behind the API list page.

use tidy_core::{FeedSummary, FeedTable, RemoteTodo, first_page, summarize};

use crate::client::TodoFeed;
use crate::error::FetchError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedState {
    #[default]
    NotLoaded,
    /// May be empty; that is still a completed load.
    Loaded(Vec<RemoteTodo>),
    Failed(String),
}

#[derive(Debug)]
pub struct RemoteTodoView<F> {
    feed: F,
    state: FeedState,
}

impl<F: TodoFeed> RemoteTodoView<F> {
    pub fn new(feed: F) -> Self {
        Self {
            feed,
            state: FeedState::NotLoaded,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn feed(&self) -> &F {
        &self.feed
    }

    /// Fetch one page and replace the current state with the outcome.
    pub async fn load(&mut self, page_size: usize) -> Result<FeedSummary, FetchError> {
        match self.feed.fetch(page_size).await {
            Ok(records) => {
                let records = first_page(records, page_size);
                let summary = summarize(&records);
                tracing::info!(
                    shown = summary.shown,
                    completed = summary.completed,
                    "loaded remote todos"
                );
                self.state = FeedState::Loaded(records);
                Ok(summary)
            }
            Err(e) => {
                tracing::warn!(error = %e, "remote todo load failed");
                self.state = FeedState::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub fn records(&self) -> Option<&[RemoteTodo]> {
        match &self.state {
            FeedState::Loaded(records) => Some(records),
            _ => None,
        }
    }

    pub fn summary(&self) -> Option<FeedSummary> {
        self.records().map(summarize)
    }

    pub fn table(&self) -> FeedTable {
        match &self.state {
            FeedState::NotLoaded => FeedTable::Loading,
            FeedState::Failed(message) => FeedTable::Failed {
                message: message.clone(),
            },
            FeedState::Loaded(records) => FeedTable::from_records(records),
        }
    }
}
