//! Reusable UI Components
//!
//! - `DialogFrame` - Centered dialog overlay with rounded borders
//! - `StatusIndicator` - Spinner, success, and error lines

mod dialog_frame;
mod status_indicator;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use status_indicator::{get_spinner_char, render_status_indicator, StatusIndicatorType};
