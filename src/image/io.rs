//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer as PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::GrayImageU8;
use image::{DynamicImage, GrayImage, ImageFormat};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Error loading image {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    GrayImageU8::from_raw(width, height, img.into_raw())
        .map_err(|e| format!("Error loading image {}: {e}", path.display()))
}

/// Save an 8-bit grayscale buffer as PNG, whatever the file extension.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image = GrayImage::from_raw(
        buffer.width() as u32,
        buffer.height() as u32,
        buffer.data().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| format!("Error writing image {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
