use tracing::{debug, info};

use super::data::{Filter, ImageEntry};
use super::modal::{Modal, ModalEvent};
use super::scroll::ScrollGate;
use super::spans::{assign_spans, SpanMode};
use crate::error::{GalleryError, Result};

/// View state of the gallery page.
///
/// Owns the full image list and everything derived from it: the visible
/// list for the active filter, one row-span per visible image, and the
/// lightbox. The visible list and the spans are only recomputed when the
/// filter actually changes.
#[derive(Debug)]
pub struct GalleryState {
    catalog: Vec<ImageEntry>,
    filter: Filter,
    visible: Vec<ImageEntry>,
    spans: Vec<u16>,
    span_mode: SpanMode,
    modal: Modal,
    scroll: ScrollGate,
}

impl GalleryState {
    /// Start with the given images, unfiltered, modal closed
    pub fn new(catalog: Vec<ImageEntry>, span_mode: SpanMode) -> Self {
        let mut state = Self {
            catalog,
            filter: Filter::All,
            visible: Vec::new(),
            spans: Vec::new(),
            span_mode,
            modal: Modal::Closed,
            scroll: ScrollGate::new(),
        };
        state.refresh_visible();
        state
    }

    /// Every image, regardless of the filter
    pub fn catalog(&self) -> &[ImageEntry] {
        &self.catalog
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Images passing the active filter, in catalog order
    pub fn visible(&self) -> &[ImageEntry] {
        &self.visible
    }

    /// Row-spans, indexed like `visible()`
    pub fn spans(&self) -> &[u16] {
        &self.spans
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Whether page scrolling is currently suppressed
    pub fn scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }

    /// Index and entry shown in the lightbox, if open
    pub fn selected(&self) -> Option<(usize, &ImageEntry)> {
        let index = self.modal.index()?;
        self.visible.get(index).map(|entry| (index, entry))
    }

    /// Replace the active filter.
    ///
    /// Re-selecting the active filter changes nothing. Any other filter
    /// recomputes the visible list and the spans, and closes the lightbox
    /// since its index would point into the old list.
    pub fn set_filter(&mut self, filter: Filter) {
        if filter == self.filter {
            return;
        }

        if self.modal.is_open() {
            debug!("Filter changed while the lightbox was open, closing it");
            self.modal.close();
        }

        self.filter = filter;
        self.refresh_visible();
        info!(filter = %filter, visible = self.visible.len(), "Filter applied");
    }

    /// Open the lightbox on a visible image
    pub fn open(&mut self, index: usize) -> Result<()> {
        if index >= self.visible.len() {
            return Err(GalleryError::NoSuchImage {
                index,
                len: self.visible.len(),
            });
        }

        self.modal = Modal::open(index, &self.scroll);
        debug!(index, path = %self.visible[index].path, "Lightbox opened");
        Ok(())
    }

    pub fn close(&mut self) {
        self.modal.close();
    }

    pub fn next(&mut self) {
        self.modal.step(1, self.visible.len());
    }

    pub fn previous(&mut self) {
        self.modal.step(-1, self.visible.len());
    }

    /// Route a lightbox click to the matching transition
    pub fn handle_modal(&mut self, event: ModalEvent) {
        match event {
            ModalEvent::Backdrop | ModalEvent::CloseButton => self.close(),
            // Clicks inside the content never reach the backdrop
            ModalEvent::Content => {}
            ModalEvent::Previous => self.previous(),
            ModalEvent::Next => self.next(),
        }
    }

    fn refresh_visible(&mut self) {
        let filter = self.filter;
        self.visible = self
            .catalog
            .iter()
            .filter(|entry| filter.matches(entry))
            .cloned()
            .collect();
        self.spans = assign_spans(&self.visible, self.span_mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog;
    use crate::state::data::Category;
    use crate::state::spans::{MAX_SPAN, MIN_SPAN};

    const A: Category = Category::Samskruthi2k24;
    const B: Category = Category::Samskruthi2k23;

    fn small_gallery() -> GalleryState {
        GalleryState::new(
            vec![
                ImageEntry::new("a1.jpg", A),
                ImageEntry::new("a2.jpg", A),
                ImageEntry::new("b1.jpg", B),
            ],
            SpanMode::Random,
        )
    }

    #[test]
    fn test_starts_unfiltered_and_closed() {
        let state = GalleryState::new(catalog::builtin(), SpanMode::Random);
        assert_eq!(state.filter(), Filter::All);
        assert_eq!(state.visible().len(), 44);
        assert_eq!(state.spans().len(), 44);
        assert!(state.selected().is_none());
        assert!(!state.scroll_locked());
    }

    #[test]
    fn test_filter_keeps_only_category_in_order() {
        let images = catalog::builtin();
        let mut state = GalleryState::new(images.clone(), SpanMode::Random);

        for category in Category::ALL {
            state.set_filter(Filter::Only(category));
            let expected: Vec<ImageEntry> = images
                .iter()
                .filter(|i| i.category == category)
                .cloned()
                .collect();

            assert_eq!(state.visible(), expected.as_slice());
            assert_eq!(state.spans().len(), expected.len());
            assert!(state.spans().iter().all(|s| (MIN_SPAN..MAX_SPAN).contains(s)));
        }
    }

    #[test]
    fn test_empty_category_cannot_open() {
        let mut state = GalleryState::new(catalog::builtin(), SpanMode::Random);
        state.set_filter(Filter::Only(Category::Samskruthi2k22));

        assert!(state.visible().is_empty());
        assert!(matches!(
            state.open(0),
            Err(GalleryError::NoSuchImage { index: 0, len: 0 })
        ));
        assert!(!state.modal().is_open());
        assert!(!state.scroll_locked());
    }

    #[test]
    fn test_open_then_next_wraps() {
        let mut state = small_gallery();
        state.set_filter(Filter::Only(A));
        assert_eq!(state.visible().len(), 2);

        state.open(1).unwrap();
        state.next();
        assert_eq!(state.modal().index(), Some(0));
        assert_eq!(state.selected().map(|(_, e)| e.path.as_str()), Some("a1.jpg"));
    }

    #[test]
    fn test_navigation_stays_in_range() {
        let mut state = GalleryState::new(catalog::builtin(), SpanMode::Random);
        state.set_filter(Filter::Only(B));
        let len = state.visible().len();

        state.open(0).unwrap();
        for _ in 0..(3 * len) {
            state.previous();
            assert!(state.modal().index().unwrap() < len);
        }
        for _ in 0..len {
            state.next();
        }
        assert_eq!(state.modal().index(), Some(0));
    }

    #[test]
    fn test_open_and_close_leaves_visible_untouched() {
        let mut state = small_gallery();
        let before = state.visible().to_vec();
        let spans = state.spans().to_vec();

        state.open(2).unwrap();
        assert!(state.scroll_locked());
        state.close();

        assert!(!state.modal().is_open());
        assert!(!state.scroll_locked());
        assert_eq!(state.visible(), before.as_slice());
        assert_eq!(state.spans(), spans.as_slice());
    }

    #[test]
    fn test_content_click_does_not_close_backdrop_does() {
        let mut state = small_gallery();
        state.open(0).unwrap();

        state.handle_modal(ModalEvent::Content);
        assert_eq!(state.modal().index(), Some(0));

        state.handle_modal(ModalEvent::Backdrop);
        assert!(!state.modal().is_open());
    }

    #[test]
    fn test_out_of_range_open_is_rejected() {
        let mut state = small_gallery();
        assert!(state.open(3).is_err());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_filter_change_closes_modal() {
        let mut state = small_gallery();
        state.open(2).unwrap();

        state.set_filter(Filter::Only(A));
        assert!(!state.modal().is_open());
        assert!(!state.scroll_locked());
    }

    #[test]
    fn test_same_filter_is_noop() {
        let mut state = small_gallery();
        state.set_filter(Filter::Only(A));
        let spans = state.spans().to_vec();
        state.open(1).unwrap();

        state.set_filter(Filter::Only(A));
        assert_eq!(state.spans(), spans.as_slice());
        assert_eq!(state.modal().index(), Some(1));
    }

    #[test]
    fn test_stable_spans_survive_refilter() {
        let mut state = GalleryState::new(catalog::builtin(), SpanMode::Stable);
        let all_spans = state.spans().to_vec();

        state.set_filter(Filter::Only(B));
        state.set_filter(Filter::All);
        assert_eq!(state.spans(), all_spans.as_slice());
    }

    #[test]
    fn test_dropping_state_releases_scroll_lock() {
        let mut state = small_gallery();
        state.open(0).unwrap();
        let gate = state.scroll.clone();
        assert!(gate.is_locked());

        drop(state);
        assert!(!gate.is_locked());
    }
}
