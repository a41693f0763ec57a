// SPDX-License-Identifier: MPL-2.0
//! Gallery scanner: builds a slide deck from a directory of images.
//!
//! Supported raster formats are matched by extension and sorted
//! alphabetically by file name so the deck order is stable across
//! platforms. Unreadable entries are skipped rather than failing the scan.

use crate::carousel::{Slide, SlideDeck};
use crate::error::Result;
use std::path::{Path, PathBuf};

const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
        })
}

/// Scans `directory` for supported images and builds one slide per file.
///
/// Returns an error only when the directory itself cannot be read; an empty
/// directory yields an empty deck.
pub fn scan_gallery(directory: &Path) -> Result<SlideDeck> {
    let mut image_files: Vec<PathBuf> = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let Ok(entry) = entry else {
            continue;
        };
        let path = entry.path();
        if path.is_file() && is_supported_image(&path) {
            image_files.push(path);
        }
    }

    image_files.sort_by(|a, b| {
        let a_name = a.file_name().map(|n| n.to_string_lossy().to_lowercase());
        let b_name = b.file_name().map(|n| n.to_string_lossy().to_lowercase());
        a_name.cmp(&b_name)
    });

    let slides = image_files
        .into_iter()
        .map(|path| Slide::from_image(path.to_string_lossy().into_owned()))
        .collect();

    Ok(SlideDeck::from_slides(slides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn create_file(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"fake image data").expect("failed to write test file");
    }

    #[test]
    fn scan_finds_supported_images_sorted_by_name() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "b.png");
        create_file(temp_dir.path(), "a.jpg");
        create_file(temp_dir.path(), "notes.txt");
        create_file(temp_dir.path(), "C.GIF");

        let deck = scan_gallery(temp_dir.path()).expect("scan failed");
        assert_eq!(deck.len(), 3);

        let first = deck.get(0).unwrap().image.as_deref().unwrap();
        let last = deck.get(2).unwrap().image.as_deref().unwrap();
        assert!(first.ends_with("a.jpg"));
        assert!(last.ends_with("C.GIF"));
    }

    #[test]
    fn scan_of_empty_directory_yields_empty_deck() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let deck = scan_gallery(temp_dir.path()).expect("scan failed");
        assert!(deck.is_empty());
    }

    #[test]
    fn scan_of_missing_directory_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope");
        assert!(scan_gallery(&missing).is_err());
    }

    #[test]
    fn slides_carry_matching_thumb_sources() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_file(temp_dir.path(), "a.jpg");

        let deck = scan_gallery(temp_dir.path()).expect("scan failed");
        let slide = deck.get(0).unwrap();
        assert_eq!(slide.thumb_source(), slide.image.as_deref());
    }
}
