//! tidy-core: todo store, remote todo model and view models for the tidy pages

pub mod error;
pub mod pages;
pub mod remote;
pub mod store;
pub mod todo;
pub mod view;

pub use error::{TodoError, VALIDATION_MESSAGE};
pub use pages::{BACK_LABEL, Page};
pub use remote::{DEFAULT_PAGE_SIZE, FeedSummary, RemoteTodo, first_page, summarize};
pub use store::{TodoCounts, TodoStore};
pub use todo::{DEFAULT_DESCRIPTION, NewTodo, Priority, Status, Todo};
pub use view::{EMPTY_MESSAGE, FeedRow, FeedTable, Renderer, TodoRow, TodoTable, summary_line};
