//! "View Todo List (API)" page.

use anyhow::{Context, Result};
use std::io::Write;
use tidy_core::{Page, Renderer};
use tidy_feed::{RemoteTodoView, TodoFeed};

use crate::render::{TextRenderer, render_page_header};

/// Load one page and print it. The table (or failure state) is always
/// written before a load error is returned.
pub async fn run<F: TodoFeed, W: Write>(
    view: &mut RemoteTodoView<F>,
    page_size: usize,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if !json {
        writeln!(out, "{}", render_page_header(Page::TodoList))?;
    }

    let loaded = view.load(page_size).await;

    if json {
        if let Some(records) = view.records() {
            let s = serde_json::to_string_pretty(records).context("serialize todos")?;
            writeln!(out, "{s}")?;
        }
    } else {
        write!(out, "{}", TextRenderer.render_feed(&view.table(), view.summary()))?;
    }

    loaded.context("could not load todos")?;
    Ok(())
}
