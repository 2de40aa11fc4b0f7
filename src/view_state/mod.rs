//! View controller: the in-memory state machine behind every screen.
//!
//! The controller is synchronous and owns no timers. Operations that the
//! product simulates as slow (search, lead capture) return or expect a
//! request value; the [`App`](crate::app::App) schedules the delay and feeds
//! the completion back in.
//!
//! ```text
//!   HOME ──submit_search──▶ SEARCH_RESULTS ──reset──▶ HOME
//!     │
//!     └──open_blog──▶ BLOG_LIST ──open_post──▶ BLOG_POST
//!                        ▲                        │
//!                        └────────go_back─────────┘
//! ```
//!
//! Modal and menu visibility are independent of the active view.

mod controller;
mod view;

pub use controller::{SearchRequest, ViewController};
pub use view::{View, ViewKind};
