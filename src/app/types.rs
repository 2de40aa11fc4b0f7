//! Type definitions for UI focus and selection.

/// Which element on the Home screen receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchInput,
    /// "Study Hacks" post cards under the hero
    Posts,
}

/// Entries of the collapsed navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Resources,
    GetApp,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::Resources, MenuItem::GetApp];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Resources => "Resources",
            MenuItem::GetApp => "Get App",
        }
    }
}
