//! Visibility tracking for scrolling post lists
//!
//! List callbacks are turned into a complete snapshot of visible post keys
//! and broadcast on the event bus. Scroll offsets are sampled separately and
//! never hold back a visibility emission.

pub mod categories;
pub mod observer;
pub mod scroll;
pub mod visible;

pub use categories::{Category, CategorySection, categories_to_show};
pub use observer::ViewportObserver;
pub use scroll::ScrollSampler;
pub use visible::{ListItem, PostRef, ViewToken, VisibleItemSet, item_key};
