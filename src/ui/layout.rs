//! Responsive layout helpers
//!
//! `LayoutContext` wraps the terminal size and answers the few layout
//! questions the screens ask: is the nav collapsed, how many card columns
//! fit, is there room for the sidebar and sticky ad.

/// Terminal size breakpoints
pub mod breakpoints {
    /// Below this the nav collapses into a menu (the "mobile" layout)
    pub const SM_WIDTH: u16 = 80;
    /// Below this article sidebars are hidden
    pub const MD_WIDTH: u16 = 120;
    /// Below this the sticky footer ad is hidden, leaving its rows to content
    pub const STICKY_AD_MIN_HEIGHT: u16 = 30;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Nav collapses into the toggleable menu
    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn show_sidebar(&self) -> bool {
        self.width >= breakpoints::MD_WIDTH
    }

    pub fn show_sticky_ad(&self) -> bool {
        self.height >= breakpoints::STICKY_AD_MIN_HEIGHT
    }

    /// Card grid columns: one on narrow terminals, three otherwise
    pub fn card_columns(&self) -> u16 {
        if self.is_narrow() {
            1
        } else {
            3
        }
    }

    /// Plan card columns: the cards carry paragraphs, so they only sit side
    /// by side when the sidebar breakpoint is reached
    pub fn plan_columns(&self) -> u16 {
        if self.show_sidebar() {
            3
        } else {
            1
        }
    }

    /// Percentage of the width, clamped to `[min, max]` and to the terminal
    pub fn bounded_width(&self, percentage: u16, min: u16, max: u16) -> u16 {
        let w = (self.width as u32 * percentage.min(100) as u32 / 100) as u16;
        w.clamp(min, max).min(self.width)
    }
}
