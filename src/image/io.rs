//! I/O helpers for depth frames, grayscale images and JSON.
//!
//! - `load_depth_image`: read a 16-bit grayscale PNG into an owned `Vec<u16>`.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::GrayImageU8;
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 16-bit depth buffer loaded from disk, for demo tooling.
#[derive(Clone, Debug)]
pub struct DepthImageU16 {
    width: usize,
    height: usize,
    data: Vec<u16>,
}

impl DepthImageU16 {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only [`DepthU16`](super::DepthU16) view.
    pub fn as_view(&self) -> super::DepthU16<'_> {
        super::DepthU16 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

/// Load a 16-bit grayscale PNG as a millimetre depth frame.
pub fn load_depth_image(path: &Path) -> Result<DepthImageU16, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma16();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(DepthImageU16 {
        width,
        height,
        data,
    })
}

/// Save a 16-bit depth buffer to a grayscale PNG.
pub fn save_depth_image(depth: &DepthImageU16, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Luma<u16>, Vec<u16>> =
        ImageBuffer::from_raw(depth.width as u32, depth.height as u32, depth.data.clone())
            .ok_or_else(|| "Failed to create depth buffer".to_string())?;
    DynamicImage::ImageLuma16(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (w, h) = (buffer.width() as u32, buffer.height() as u32);
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(w, h, buffer.clone().into_raw())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
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

/// Construct a [`DepthImageU16`] from raw millimetre values.
pub fn depth_from_raw(width: usize, height: usize, data: Vec<u16>) -> DepthImageU16 {
    assert_eq!(data.len(), width * height, "buffer size mismatch");
    DepthImageU16 {
        width,
        height,
        data,
    }
}
