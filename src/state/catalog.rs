/// The built-in image list
///
/// Paths are relative to the configured assets root. The list is fixed at
/// compile time and its order is the order the grid shows images in.
use super::data::{Category, ImageEntry};

/// Number of photos from the 2024 edition (Resources/2k24/1.jpg ..)
const SAMSKRUTHI_2K24_COUNT: usize = 31;

/// Photos from the 2023 edition, grouped by event folder
const SAMSKRUTHI_2K23: [&str; 13] = [
    "Resources/Gallery/benny/2.jpg",
    "Resources/Gallery/benny/3.jpg",
    "Resources/Gallery/benny/4.jpg",
    "Resources/Gallery/dance/2.jpg",
    "Resources/Gallery/dance/1.jpg",
    "Resources/Gallery/dance/3.jpg",
    "Resources/Gallery/dance/4.jpg",
    "Resources/Gallery/dance/5.jpg",
    "Resources/Gallery/dance/6.jpg",
    "Resources/Gallery/Crowd/1.jpg",
    "Resources/Gallery/Crowd/2.jpg",
    "Resources/Gallery/Crowd/3.jpg",
    "Resources/Gallery/Crowd/4.jpg",
];

/// Build the gallery's image list
pub fn builtin() -> Vec<ImageEntry> {
    let edition_2k24 = (1..=SAMSKRUTHI_2K24_COUNT).map(|n| {
        ImageEntry::new(format!("Resources/2k24/{}.jpg", n), Category::Samskruthi2k24)
    });

    let edition_2k23 = SAMSKRUTHI_2K23
        .iter()
        .map(|path| ImageEntry::new(*path, Category::Samskruthi2k23));

    edition_2k24.chain(edition_2k23).collect()
}
