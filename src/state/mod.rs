/// State management module
///
/// This module handles all gallery state, including:
/// - The built-in image list (catalog.rs)
/// - Shared data structures (data.rs)
/// - Filtering and the derived visible list (gallery.rs)
/// - Row-spans for the masonry grid (spans.rs)
/// - The lightbox state machine (modal.rs) and its scroll lock (scroll.rs)

pub mod catalog;
pub mod data;
pub mod gallery;
pub mod modal;
pub mod scroll;
pub mod spans;
