//! The active screen and the payload it needs.

use std::fmt;

use crate::models::{BlogPost, SearchResult};

/// Top-level screen. Each variant carries only what it renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    SearchResults {
        /// Query as submitted, shown as the results heading
        query: String,
        results: Vec<SearchResult>,
        /// True until the simulated search delay has elapsed
        loading: bool,
    },
    BlogList,
    BlogPost { post: BlogPost },
}

/// Payload-free discriminant of [`View`], for logging and comparisons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Home,
    SearchResults,
    BlogList,
    BlogPost,
}

impl View {
    pub fn kind(&self) -> ViewKind {
        match self {
            View::Home => ViewKind::Home,
            View::SearchResults { .. } => ViewKind::SearchResults,
            View::BlogList => ViewKind::BlogList,
            View::BlogPost { .. } => ViewKind::BlogPost,
        }
    }

    /// Blog list or article; the nav highlights "Resources" for both
    pub fn is_blog(&self) -> bool {
        matches!(self, View::BlogList | View::BlogPost { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, View::SearchResults { loading: true, .. })
    }

    pub fn results(&self) -> &[SearchResult] {
        match self {
            View::SearchResults { results, .. } => results,
            _ => &[],
        }
    }

    pub fn active_post(&self) -> Option<&BlogPost> {
        match self {
            View::BlogPost { post } => Some(post),
            _ => None,
        }
    }
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::Home => "HOME",
            ViewKind::SearchResults => "SEARCH_RESULTS",
            ViewKind::BlogList => "BLOG_LIST",
            ViewKind::BlogPost => "BLOG_POST",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
