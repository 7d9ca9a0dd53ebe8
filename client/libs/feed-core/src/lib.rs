//! Feed composition core
//!
//! Shared post model and the tab filter + sort pipeline that derives the
//! exact render order of the community feed.

pub mod compose;
pub mod models;

pub use compose::{compose, FeedEntry, FeedTab, InvalidTabError};
pub use models::*;
