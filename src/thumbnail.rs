use image::{DynamicImage, ImageFormat};
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{GalleryError, Result};
use crate::state::data::ImageEntry;

/// Longest edge of generated thumbnails
const THUMBNAIL_SIZE: u32 = 600;

/// Asset path → cached thumbnail, for every image that has one
pub type ThumbnailBatch = Vec<(String, PathBuf)>;

/// Get the thumbnail cache directory
/// Returns ~/.cache/samskruthi-gallery/thumbnails on Linux
pub fn get_thumbnail_cache_dir() -> Result<PathBuf> {
    let mut path = dirs::cache_dir()
        .or_else(dirs::home_dir)
        .ok_or(GalleryError::NoCacheDir)?;

    path.push("samskruthi-gallery");
    path.push("thumbnails");

    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Expected thumbnail location for a source image (doesn't generate it).
/// The name covers the resolved path, size and mtime, so a different assets
/// root or a replaced photo never picks up a stale thumbnail.
pub fn get_thumbnail_path(cache_dir: &Path, source: &Path) -> Result<PathBuf> {
    let metadata = fs::metadata(source)?;

    let mut hasher = DefaultHasher::new();
    source.hash(&mut hasher);
    metadata.len().hash(&mut hasher);
    if let Ok(modified) = metadata.modified() {
        modified.hash(&mut hasher);
    }

    Ok(cache_dir.join(format!("{:016x}.jpg", hasher.finish())))
}

/// Downscale `source` to fit THUMBNAIL_SIZE and save it as JPEG at `dest`.
/// Images already small enough are re-encoded at their own size.
/// The encode goes to a `.part` file that is renamed onto `dest` once complete.
pub fn generate_thumbnail(source: &Path, dest: &Path) -> Result<()> {
    let thumbnail_error = |source_err| GalleryError::Thumbnail {
        path: source.to_path_buf(),
        source: source_err,
    };

    let img = image::open(source).map_err(thumbnail_error)?;

    let img = if img.width() > THUMBNAIL_SIZE || img.height() > THUMBNAIL_SIZE {
        img.thumbnail(THUMBNAIL_SIZE, THUMBNAIL_SIZE)
    } else {
        img
    };

    let partial = dest.with_extension("jpg.part");

    // JPEG has no alpha channel
    if let Err(err) =
        DynamicImage::ImageRgb8(img.to_rgb8()).save_with_format(&partial, ImageFormat::Jpeg)
    {
        let _ = fs::remove_file(&partial);
        return Err(thumbnail_error(err));
    }

    fs::rename(&partial, dest)?;
    Ok(())
}

/// Make sure every entry has a thumbnail, reusing the ones already cached.
/// Entries whose asset is missing or broken are left out of the batch.
pub fn ensure_thumbnails(
    entries: &[ImageEntry],
    assets_root: &Path,
    cache_dir: &Path,
) -> ThumbnailBatch {
    let mut batch = Vec::with_capacity(entries.len());
    let mut generated = 0;

    for entry in entries {
        let source = entry.resolve(assets_root);
        let dest = match get_thumbnail_path(cache_dir, &source) {
            Ok(dest) => dest,
            Err(err) => {
                debug!("Skipping thumbnail for {}: {}", source.display(), err);
                continue;
            }
        };

        if !dest.exists() {
            if let Err(err) = generate_thumbnail(&source, &dest) {
                debug!("Skipping thumbnail: {}", err);
                continue;
            }
            generated += 1;
        }

        batch.push((entry.path.clone(), dest));
    }

    info!(
        "📸 Thumbnails ready: {} cached, {} generated",
        batch.len() - generated,
        generated
    );
    batch
}

/// Async wrapper around `ensure_thumbnails`.
/// Runs on a blocking thread since decoding is CPU-bound.
pub async fn load_thumbnails(
    entries: Vec<ImageEntry>,
    assets_root: PathBuf,
    cache_dir: PathBuf,
) -> ThumbnailBatch {
    tokio::task::spawn_blocking(move || ensure_thumbnails(&entries, &assets_root, &cache_dir))
        .await
        .unwrap_or_else(|err| {
            debug!("Thumbnail task failed: {}", err);
            Vec::new()
        })
}
