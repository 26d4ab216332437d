/// Gallery page widgets
///
/// - `header` - title and tagline
/// - `filter_bar` - category buttons
/// - `grid` - masonry grid of cards
/// - `lightbox` - full-window viewer with previous/next/close
/// - `style` - glass look shared by all of the above
use std::collections::HashMap;
use std::path::PathBuf;

use crate::state::data::ImageEntry;
use crate::thumbnail::ThumbnailBatch;

pub mod filter_bar;
pub mod grid;
pub mod header;
pub mod lightbox;
pub mod style;

/// Where to load each image from
#[derive(Debug, Default)]
pub struct AssetSources {
    assets_root: PathBuf,
    thumbnails: HashMap<String, PathBuf>,
}

impl AssetSources {
    pub fn new(assets_root: PathBuf) -> Self {
        Self {
            assets_root,
            thumbnails: HashMap::new(),
        }
    }

    pub fn set_thumbnails(&mut self, batch: ThumbnailBatch) {
        self.thumbnails = batch.into_iter().collect();
    }

    /// Full-size asset, used by the lightbox
    pub fn original(&self, entry: &ImageEntry) -> PathBuf {
        entry.resolve(&self.assets_root)
    }

    /// Cached thumbnail if there is one, otherwise the full-size asset
    pub fn for_grid(&self, entry: &ImageEntry) -> PathBuf {
        self.thumbnails
            .get(&entry.path)
            .cloned()
            .unwrap_or_else(|| self.original(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;

    #[test]
    fn test_grid_falls_back_to_original() {
        let mut sources = AssetSources::new(PathBuf::from("/srv/assets"));
        let cached = ImageEntry::new("a.jpg", Category::Samskruthi2k24);
        let missing = ImageEntry::new("b.jpg", Category::Samskruthi2k24);

        sources.set_thumbnails(vec![("a.jpg".to_string(), PathBuf::from("/cache/1.jpg"))]);

        assert_eq!(sources.for_grid(&cached), PathBuf::from("/cache/1.jpg"));
        assert_eq!(sources.for_grid(&missing), PathBuf::from("/srv/assets/b.jpg"));
        assert_eq!(sources.original(&cached), PathBuf::from("/srv/assets/a.jpg"));
    }
}
