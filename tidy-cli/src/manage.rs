//! Interactive personal todo manager.
//!
//! The session owns its `TodoStore`; nothing persists once it ends.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tidy_core::view::ADD_LABEL;
use tidy_core::{NewTodo, Page, Priority, Renderer, TodoStore, TodoTable, VALIDATION_MESSAGE};

use crate::render::{TextRenderer, render_page_header};

const HELP: &str = "\
Commands:
  add [title]     add a todo (prompts for title, description, priority)
  toggle <id>     flip Pending/Completed
  delete <id>     remove a todo
  list            show the table
  count           show totals
  json            dump todos as JSON
  back | quit     return to the dashboard
  help            this text
";

pub struct Session<R, W> {
    input: R,
    out: W,
    store: TodoStore,
    renderer: TextRenderer,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            store: TodoStore::new(),
            renderer: TextRenderer,
        }
    }

    /// Run until `back`/`quit` or end of input; returns the final store.
    pub fn run(mut self) -> Result<TodoStore> {
        write!(self.out, "{}", render_page_header(Page::TodoManager))?;
        writeln!(self.out, "Type `help` for commands.\n")?;
        self.render()?;

        while let Some(line) = self.prompt("todo> ")? {
            let (cmd, rest) = match line.split_once(char::is_whitespace) {
                Some((c, r)) => (c, r.trim()),
                None => (line.as_str(), ""),
            };

            match cmd {
                "" => continue,
                "add" => {
                    self.add(rest)?;
                }
                "toggle" => {
                    if let Some(id) = self.parse_id(cmd, rest)? {
                        self.store.toggle_status(id);
                        self.render()?;
                    }
                }
                "delete" => {
                    if let Some(id) = self.parse_id(cmd, rest)? {
                        self.store.delete(id);
                        self.render()?;
                    }
                }
                "list" => self.render()?,
                "count" => {
                    let c = self.store.count();
                    writeln!(
                        self.out,
                        "{} total, {} completed, {} pending",
                        c.total, c.completed, c.pending
                    )?;
                }
                "json" => {
                    let json = serde_json::to_string_pretty(self.store.list())
                        .context("serialize todos")?;
                    writeln!(self.out, "{json}")?;
                }
                "help" => write!(self.out, "{HELP}")?,
                "back" | "quit" | "exit" => break,
                other => writeln!(self.out, "Unknown command: {other} (try `help`)")?,
            }
        }

        tracing::debug!(todos = self.store.len(), "manage session ended");
        Ok(self.store)
    }

    fn add(&mut self, inline_title: &str) -> Result<()> {
        let input = if inline_title.is_empty() {
            writeln!(self.out, "-- {ADD_LABEL} --")?;
            let title = self.prompt("Title: ")?.unwrap_or_default();
            let description = self.prompt("Description (optional): ")?.unwrap_or_default();
            let priority = self
                .prompt("Priority [Low/Medium/High] (Medium): ")?
                .unwrap_or_default();

            let priority = match priority.parse::<Priority>() {
                Ok(p) => p,
                Err(e) => {
                    writeln!(self.out, "{e}")?;
                    return Ok(());
                }
            };
            NewTodo::new(title)
                .with_description(description)
                .with_priority(priority)
        } else {
            NewTodo::new(inline_title)
        };

        match self.store.add(input) {
            Ok(todo) => {
                writeln!(self.out, "Added #{}: {}", todo.id, todo.title)?;
                self.render()
            }
            Err(e) if e.is_validation() => {
                writeln!(self.out, "{VALIDATION_MESSAGE}")?;
                Ok(())
            }
            Err(e) => {
                writeln!(self.out, "{e}")?;
                Ok(())
            }
        }
    }

    fn parse_id(&mut self, cmd: &str, rest: &str) -> Result<Option<u64>> {
        match rest.trim_start_matches('#').parse::<u64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                writeln!(self.out, "usage: {cmd} <id>")?;
                Ok(None)
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        let table = TodoTable::from_todos(self.store.list());
        write!(self.out, "{}", self.renderer.render_todos(&table))?;
        Ok(())
    }

    /// `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut s = String::new();
        let n = self.input.read_line(&mut s).context("read stdin")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(s.trim().to_string()))
    }
}
