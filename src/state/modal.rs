/// Lightbox state machine
///
/// Two states: `Closed` and `Open`. The open state owns the scroll lock,
/// so page scrolling comes back the moment the modal is left.
use super::scroll::{ScrollGate, ScrollLock};

/// Clicks the lightbox can receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Click on the dimmed backdrop around the content
    Backdrop,
    /// Click inside the content area (image, caption)
    Content,
    /// Explicit close control
    CloseButton,
    Previous,
    Next,
}

#[derive(Debug, Default)]
pub enum Modal {
    #[default]
    Closed,
    Open { index: usize, _scroll: ScrollLock },
}

impl Modal {
    /// Open at `index`, taking a scroll lock from `gate`.
    /// The caller checks that `index` is a valid visible index.
    pub fn open(index: usize, gate: &ScrollGate) -> Self {
        Modal::Open {
            index,
            _scroll: gate.acquire(),
        }
    }

    /// Selected index, if open
    pub fn index(&self) -> Option<usize> {
        match self {
            Modal::Closed => None,
            Modal::Open { index, .. } => Some(*index),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open { .. })
    }

    /// Close the modal, releasing its scroll lock
    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    /// Move forward or backward by `step`, wrapping modulo `len`.
    /// No-op while closed or when there is nothing to show.
    pub fn step(&mut self, step: isize, len: usize) {
        if let Modal::Open { index, .. } = self {
            if len > 0 {
                *index = wrap_index(*index, step, len);
            }
        }
    }
}

/// `(index + step) mod len` with negative results wrapped into range
pub fn wrap_index(index: usize, step: isize, len: usize) -> usize {
    debug_assert!(len > 0);
    (index as isize + step).rem_euclid(len as isize) as usize
}
