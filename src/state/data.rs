/// Shared data structures for the gallery state
///
/// These types describe the static image list and the category filter
/// that the grid and the lightbox are driven by.
use std::fmt;
use std::path::{Path, PathBuf};

/// Event edition an image belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Samskruthi2k24,
    Samskruthi2k23,
    Samskruthi2k22,
}

impl Category {
    /// Every category, in the order the filter buttons are shown
    pub const ALL: [Category; 3] = [
        Category::Samskruthi2k24,
        Category::Samskruthi2k23,
        Category::Samskruthi2k22,
    ];

    /// Stable identifier, used in logs
    pub fn id(&self) -> &'static str {
        match self {
            Category::Samskruthi2k24 => "samskruthi2k24",
            Category::Samskruthi2k23 => "samskruthi2k23",
            Category::Samskruthi2k22 => "samskruthi2k22",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Samskruthi2k24 => "Samskruthi 2K24",
            Category::Samskruthi2k23 => "Samskruthi 2K23",
            Category::Samskruthi2k22 => "Samskruthi 2K22",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Active grid filter
///
/// `All` is the synthetic "no filter" value. It is the initial filter but is
/// never offered as a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl Filter {
    /// Check whether an image passes this filter
    pub fn matches(&self, entry: &ImageEntry) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => entry.category == *category,
        }
    }
}

/// Represents a single image in the gallery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Asset path relative to the assets root (e.g., "Resources/2k24/1.jpg")
    pub path: String,
    /// Optional caption shown on hover and in the lightbox
    pub caption: Option<String>,
    pub category: Category,
}

impl ImageEntry {
    pub fn new(path: impl Into<String>, category: Category) -> Self {
        Self {
            path: path.into(),
            caption: None,
            category,
        }
    }

    /// Full path of the asset on disk
    pub fn resolve(&self, assets_root: &Path) -> PathBuf {
        assets_root.join(&self.path)
    }
}
