//! Static blog catalog.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Display format for post dates ("Dec 05, 2025")
const DATE_FORMAT: &str = "%b %d, %Y";

/// A catalog article. Never created or mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    /// Image reference (placeholder URL)
    pub image: String,
    pub date: NaiveDate,
    pub author: String,
    pub category: String,
}

impl BlogPost {
    pub fn display_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    /// Two-letter avatar initials for the byline
    pub fn author_initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|w| w.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// A "Student Life" sidebar tip shown next to an article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarTip {
    pub title: &'static str,
    pub read_time: &'static str,
    pub image: String,
}

static CATALOG: Lazy<Vec<BlogPost>> = Lazy::new(|| {
    vec![
        post(
            1,
            "How to Memorize Anything in 20 Minutes",
            "The 'Memory Palace' technique used by med students to pass anatomy exams without crying.",
            "https://placehold.co/800x400/4c1d95/fbbf24?text=Memory+Hacks",
            (2025, 12, 5),
            "Dr. Learning",
            "Techniques",
        ),
        post(
            2,
            "Stop Highlighting: It Doesn't Work",
            "Why 'Active Recall' is the only study method that actually puts information into your long-term memory.",
            "https://placehold.co/800x400/5b21b6/ffffff?text=Active+Recall",
            (2025, 12, 3),
            "Study Coach",
            "Science",
        ),
        post(
            3,
            "The Best Lo-Fi Playlists for Deep Work",
            "We analyzed 500 Spotify playlists to find the exact BPM that triggers flow state.",
            "https://placehold.co/800x400/312e81/fbbf24?text=Focus+Music",
            (2025, 12, 1),
            "Monk Team",
            "Focus",
        ),
    ]
});

fn post(
    id: u32,
    title: &str,
    excerpt: &str,
    image: &str,
    (y, m, d): (i32, u32, u32),
    author: &str,
    category: &str,
) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        image: image.to_string(),
        // Catalog dates are literals; an out-of-range one is a typo caught by tests.
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        author: author.to_string(),
        category: category.to_string(),
    }
}

/// The full catalog, newest first
pub fn catalog() -> &'static [BlogPost] {
    &CATALOG
}

/// Posts shown on the archive page.
///
/// The archive repeats the catalog to fill the grid.
pub fn archive() -> Vec<&'static BlogPost> {
    CATALOG.iter().chain(CATALOG.iter()).collect()
}

/// Sidebar tips shown next to an article
pub fn sidebar_tips() -> Vec<SidebarTip> {
    (1..=3)
        .map(|i| SidebarTip {
            title: "The Best Coffee for Late Nights",
            read_time: "2 min read",
            image: format!("https://placehold.co/100x100/4c1d95/fbbf24?text=Tip+{}", i),
        })
        .collect()
}
