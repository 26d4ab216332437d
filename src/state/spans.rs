/// Row-span assignment for the masonry grid
///
/// Each visible image gets a span that drives its card height. By default
/// spans are redrawn at random every time the visible list changes; the
/// `stable` mode derives them from the image path instead so a card keeps
/// its height across re-filters.
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::data::ImageEntry;

/// Smallest span (inclusive)
pub const MIN_SPAN: u16 = 15;
/// Largest span (exclusive)
pub const MAX_SPAN: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanMode {
    /// Fresh random spans on every filter change
    #[default]
    Random,
    /// Spans seeded from a hash of the image path
    Stable,
}

/// Assign one span per image, indexed like `images`
pub fn assign_spans(images: &[ImageEntry], mode: SpanMode) -> Vec<u16> {
    match mode {
        SpanMode::Random => {
            let mut rng = rand::rng();
            images
                .iter()
                .map(|_| rng.random_range(MIN_SPAN..MAX_SPAN))
                .collect()
        }
        SpanMode::Stable => images.iter().map(stable_span).collect(),
    }
}

fn stable_span(image: &ImageEntry) -> u16 {
    let mut hasher = DefaultHasher::new();
    image.path.hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish()).random_range(MIN_SPAN..MAX_SPAN)
}
