//! Route table of the public site.

use std::fmt;

/// Page rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => write!(f, "home"),
            Page::Login => write!(f, "login"),
        }
    }
}

pub const ROUTES: [(&str, Page); 2] = [("/", Page::Home), ("/login", Page::Login)];

/// Resolves `path` by exact match. A single trailing `/` is ignored.
pub fn resolve(path: &str) -> Option<Page> {
    let path = match path.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed,
        _ => path,
    };
    ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, page)| *page)
}
