//! Read-only todos from the public sample feed.

use serde::{Deserialize, Serialize};

use crate::todo::Status;

/// Page size the list view asks the feed for.
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteTodo {
    pub id: u64,
    pub todo: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
    pub completed: bool,
}

impl RemoteTodo {
    pub fn status(&self) -> Status {
        Status::from_completed(self.completed)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedSummary {
    pub shown: usize,
    pub completed: usize,
    pub pending: usize,
}

pub fn summarize(records: &[RemoteTodo]) -> FeedSummary {
    let completed = records.iter().filter(|r| r.completed).count();
    FeedSummary {
        shown: records.len(),
        completed,
        pending: records.len() - completed,
    }
}

/// Keep the first `page_size` records, in feed order.
pub fn first_page(mut records: Vec<RemoteTodo>, page_size: usize) -> Vec<RemoteTodo> {
    records.truncate(page_size);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(id: u64, completed: bool) -> RemoteTodo {
        RemoteTodo {
            id,
            todo: format!("Task {id}"),
            user_id: 5,
            completed,
        }
    }

    #[test]
    fn summarize_counts_completed_flags() {
        let records: Vec<_> = [false, true, true, false]
            .into_iter()
            .enumerate()
            .map(|(i, c)| remote(i as u64 + 1, c))
            .collect();

        assert_eq!(
            summarize(&records),
            FeedSummary { shown: 4, completed: 2, pending: 2 }
        );
        assert_eq!(summarize(&[]), FeedSummary::default());
    }

    #[test]
    fn first_page_slices_in_order() {
        let records: Vec<_> = (1..=30).map(|i| remote(i, false)).collect();
        let page = first_page(records, DEFAULT_PAGE_SIZE);
        assert_eq!(page.len(), 20);
        assert_eq!(page[0].id, 1);
        assert_eq!(page[19].id, 20);
    }

    #[test]
    fn parses_wire_shape() {
        let json = r#"{"id":1,"todo":"Complete project","userId":5,"completed":false}"#;
        let r: RemoteTodo = serde_json::from_str(json).unwrap();
        assert_eq!(r.todo, "Complete project");
        assert_eq!(r.user_id, 5);
        assert_eq!(r.status(), Status::Pending);
    }
}
