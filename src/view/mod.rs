//! View Controller
//!
//! - `page.rs` - closed `PageId` set and `ViewController` (one visible page)
//! - `models.rs` - per-page view models handed to the rendering host

pub mod page;
pub mod models;

pub use models::{selection_summary, PageView};
pub use page::{PageId, StepId, ViewController};
