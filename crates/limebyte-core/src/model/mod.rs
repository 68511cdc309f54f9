//! Domain models for the blog collections

mod link;
mod post;
mod settings;
mod subscriber;
mod user;

pub use link::Link;
pub use post::Post;
pub use settings::{
    SiteSettings, DEFAULT_FOOTER_TEXT, DEFAULT_SITE_DESCRIPTION, DEFAULT_SITE_TITLE,
    SETTINGS_SINGLETON_ID,
};
pub use subscriber::Subscriber;
pub use user::{User, BOOTSTRAP_ADMIN_ID};
