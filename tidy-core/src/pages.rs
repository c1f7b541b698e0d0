//! Page surface: the three views, their paths, headings and navigation labels.

use std::fmt;

pub const BACK_LABEL: &str = "Back to Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    TodoList,
    TodoManager,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::TodoList, Page::TodoManager];

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard.html",
            Page::TodoList => "contents.html",
            Page::TodoManager => "todo.html",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::TodoList => "Todo List",
            Page::TodoManager => "Todo Manager",
        }
    }

    /// Label of the dashboard entry that opens this page.
    pub fn nav_label(self) -> Option<&'static str> {
        match self {
            Page::Dashboard => None,
            Page::TodoList => Some("View Todo List (API)"),
            Page::TodoManager => Some("Manage Personal Todos"),
        }
    }

    /// Where the back action leads; the dashboard has none.
    pub fn back(self) -> Option<Page> {
        match self {
            Page::Dashboard => None,
            Page::TodoList | Page::TodoManager => Some(Page::Dashboard),
        }
    }

    /// Pages reachable from the dashboard, in display order.
    pub fn dashboard_links() -> impl Iterator<Item = (&'static str, Page)> {
        Page::ALL
            .into_iter()
            .filter_map(|p| p.nav_label().map(|label| (label, p)))
    }

    /// Resolve a relative path. `index.html` and the empty path redirect to the dashboard.
    pub fn from_path(path: &str) -> Option<Page> {
        let name = path.trim().trim_start_matches("./").trim_start_matches('/');
        match name {
            "" | "index.html" => Some(Page::Dashboard),
            _ => Page::ALL.into_iter().find(|p| p.path() == name),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.heading())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_and_index_redirects() {
        for p in Page::ALL {
            assert_eq!(Page::from_path(p.path()), Some(p));
        }
        assert_eq!(Page::from_path("index.html"), Some(Page::Dashboard));
        assert_eq!(Page::from_path("/todo.html"), Some(Page::TodoManager));
        assert_eq!(Page::from_path("missing.html"), None);
    }

    #[test]
    fn every_page_returns_to_dashboard() {
        assert_eq!(Page::TodoList.back(), Some(Page::Dashboard));
        assert_eq!(Page::TodoManager.back(), Some(Page::Dashboard));
        assert_eq!(Page::Dashboard.back(), None);
    }

    #[test]
    fn dashboard_links_in_order() {
        let links: Vec<_> = Page::dashboard_links().collect();
        assert_eq!(
            links,
            vec![
                ("View Todo List (API)", Page::TodoList),
                ("Manage Personal Todos", Page::TodoManager),
            ]
        );
    }
}
