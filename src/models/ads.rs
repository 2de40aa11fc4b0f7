//! Ad placeholder slots.
//!
//! Slots carry no creative; they render as dashed boxes labelled with
//! their placement.

/// Shape of an ad slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdFormat {
    #[default]
    Horizontal,
    /// Tall sidebar skyscraper
    Vertical,
    /// Leaderboard pinned to the bottom of the screen
    Sticky,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdUnit {
    pub format: AdFormat,
    pub label: &'static str,
}

impl AdUnit {
    pub const fn horizontal(label: &'static str) -> Self {
        Self {
            format: AdFormat::Horizontal,
            label,
        }
    }

    pub const fn vertical(label: &'static str) -> Self {
        Self {
            format: AdFormat::Vertical,
            label,
        }
    }

    /// Headline text inside the slot
    pub fn headline(&self) -> String {
        match self.format {
            AdFormat::Sticky => STICKY_HEADLINE.to_string(),
            _ => format!("SPONSORED ({})", self.label),
        }
    }

    /// Secondary line inside the slot
    pub fn caption(&self) -> &'static str {
        match self.format {
            AdFormat::Sticky => "Google AdSense 728x90",
            _ => "Secure Ad Slot",
        }
    }

    /// Rows the slot wants, borders included
    pub fn preferred_height(&self) -> u16 {
        match self.format {
            AdFormat::Horizontal => 4,
            AdFormat::Vertical => 10,
            AdFormat::Sticky => 4,
        }
    }
}

const STICKY_HEADLINE: &str = "CHEGG STUDY: 1 MONTH FREE TRIAL (CLICK HERE)";

/// Promo strip above the navigation bar
pub const TOP_BANNER: &str = "FINALS WEEK SALE: 50% OFF CHEGG STUDY";

pub const HOME_HERO: AdUnit = AdUnit::horizontal("Home Hero Banner");
pub const SEARCH_RESULTS_BOTTOM: AdUnit = AdUnit::horizontal("Search Results Bottom");
pub const IN_ARTICLE_TOP: AdUnit = AdUnit::horizontal("In-Article Top");
pub const IN_ARTICLE_MIDDLE: AdUnit = AdUnit::horizontal("In-Article Middle");
pub const SIDEBAR: AdUnit = AdUnit::vertical("Sidebar Ad");
pub const STICKY_FOOTER: AdUnit = AdUnit {
    format: AdFormat::Sticky,
    label: "Sponsor",
};
