//! Color theme constants
//!
//! Night-study palette: deep indigo surfaces with amber accents.

use ratatui::style::Color;

// ============================================================================
// Surfaces
// ============================================================================

/// Page background
pub const COLOR_BG: Color = Color::Rgb(15, 10, 30);

/// Card and panel borders
pub const COLOR_BORDER: Color = Color::Rgb(55, 48, 163);

/// Dashed ad-slot borders
pub const COLOR_AD_BORDER: Color = Color::Rgb(67, 56, 202);

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(30, 27, 75);

// ============================================================================
// Text
// ============================================================================

/// Headings and emphasized text
pub const COLOR_HEADER: Color = Color::White;

/// Body copy
pub const COLOR_TEXT: Color = Color::Rgb(199, 210, 254);

/// Secondary text: bylines, captions, hints
pub const COLOR_DIM: Color = Color::Rgb(99, 102, 241);

/// Brand accent, selection and focus
pub const COLOR_ACCENT: Color = Color::Rgb(245, 158, 11);

// ============================================================================
// Plan badges
// ============================================================================

pub const COLOR_CRISIS: Color = Color::Rgb(248, 113, 113);
pub const COLOR_DEEP_DIVE: Color = Color::Rgb(251, 191, 36);
pub const COLOR_MINIMALIST: Color = Color::Rgb(192, 132, 252);

// ============================================================================
// Status
// ============================================================================

pub const COLOR_SUCCESS: Color = Color::Rgb(34, 197, 94);
pub const COLOR_ERROR: Color = Color::Red;
