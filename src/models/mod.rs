pub mod ads;
pub mod blog;
mod lead;
mod search;

pub use ads::{AdFormat, AdUnit};
pub use blog::{archive, catalog, sidebar_tips, BlogPost, SidebarTip};
pub use lead::{validate_email, LeadCapture, LeadStep};
pub use search::{generate_mock_results, subject_word, PlanKind, SearchResult};
