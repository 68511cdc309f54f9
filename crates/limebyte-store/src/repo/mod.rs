//! Repository layer
//!
//! Per-collection readers plus the declarative collection registry

mod registry;
mod tables;

pub use registry::{Collection, MergePolicy};
pub use tables::{load_links, load_posts, load_settings, load_subscribers, load_users};
