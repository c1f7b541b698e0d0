//! Plain-text tables for the terminal.

use tidy_core::view::{DELETE_LABEL, FEED_HEADERS, TODO_HEADERS, TOGGLE_LABEL};
use tidy_core::{BACK_LABEL, FeedSummary, FeedTable, Page, Renderer, TodoTable, summary_line};

#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    type Output = String;

    fn render_todos(&self, table: &TodoTable) -> String {
        match table {
            TodoTable::Empty { message } => format!("{message}\n"),
            TodoTable::Rows(rows) => {
                let actions = format!("[{TOGGLE_LABEL}] [{DELETE_LABEL}]");
                let body: Vec<Vec<String>> = rows
                    .iter()
                    .map(|r| {
                        vec![
                            r.id.to_string(),
                            r.title.clone(),
                            r.description.clone(),
                            r.priority.to_string(),
                            r.status.to_string(),
                            actions.clone(),
                        ]
                    })
                    .collect();
                grid(&TODO_HEADERS, &body)
            }
        }
    }

    fn render_feed(&self, table: &FeedTable, summary: Option<FeedSummary>) -> String {
        let mut out = match table {
            FeedTable::Loading => "Loading todos...\n".to_string(),
            FeedTable::Failed { message } => format!("Failed to load todos: {message}\n"),
            FeedTable::Empty => "No todos found.\n".to_string(),
            FeedTable::Rows(rows) => {
                let body: Vec<Vec<String>> = rows.iter().map(|r| r.cells().to_vec()).collect();
                grid(&FEED_HEADERS, &body)
            }
        };
        if let Some(s) = summary {
            out.push('\n');
            out.push_str(&summary_line(s));
            out.push('\n');
        }
        out
    }
}

pub fn render_page_header(page: Page) -> String {
    let mut s = format!("# {}\n", page.heading());
    if page.back().is_some() {
        s.push_str(&format!("({BACK_LABEL}: `back`)\n"));
    }
    s
}

pub fn render_dashboard() -> String {
    let mut s = render_page_header(Page::Dashboard);
    s.push_str("Pick a page:\n\n");
    for (label, page) in Page::dashboard_links() {
        let cmd = match page {
            Page::TodoList => "tidy list",
            Page::TodoManager => "tidy manage",
            Page::Dashboard => "tidy dashboard",
        };
        s.push_str(&format!("- {label}  ->  {cmd}  ({})\n", page.path()));
    }
    s
}

fn grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = grid_line(headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&format!("|-{}-|\n", rule.join("-|-")));
    for row in rows {
        out.push_str(&grid_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn grid_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(c, w)| format!("{c:<w$}", w = *w))
        .collect();
    format!("| {} |\n", padded.join(" | "))
}
