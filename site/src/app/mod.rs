//! Application layer
//!
//! Page behaviour: the article feed loader plus the scroll and click
//! controllers, wired together by `Page`.

pub mod article_feed_loader;
pub mod back_to_top;
pub mod nav;
pub mod page;
pub mod scroll_reveal;
pub mod scroll_spy;
pub mod year;

pub use article_feed_loader::{render_outcome, ArticleFeedLoader, EMPTY_MESSAGE, FAILURE_MESSAGE};
pub use back_to_top::BackToTopController;
pub use nav::NavController;
pub use page::Page;
pub use scroll_reveal::{ObserverOptions, ScrollRevealController};
pub use scroll_spy::ScrollSpyController;
pub use year::inject_year;
