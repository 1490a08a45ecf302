//! Dominant seed-colour extraction.
//!
//! The palette pipeline treats the seed as an opaque colour; this crate
//! produces it from an image by downscaling to a 128x128 thumbnail,
//! quantizing with the Celebi quantizer and ranking the clusters with the
//! Material scorer. Degenerate images (all-gray, fully transparent) fall
//! back to the scorer's default blue rather than failing.

use std::path::Path;

use material_colors::hct::Hct;
use material_colors::image::{FilterType, ImageReader};
use tracing::debug;

use tinct_model::{Result, TinctError, hex_rgb};

/// Extract the dominant seed colour from an image file.
///
/// # Errors
///
/// Returns [`TinctError::InputNotFound`] when the path does not exist and
/// [`TinctError::Upstream`] when the image cannot be decoded.
pub fn dominant_color(path: &Path) -> Result<Hct> {
    if !path.exists() {
        return Err(TinctError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut image =
        ImageReader::open(path).map_err(|error| TinctError::Upstream(error.to_string()))?;
    image.resize(128, 128, FilterType::Lanczos3);

    let seed = Hct::new(ImageReader::extract_color(&image));
    debug!(seed = %hex_rgb(seed), path = %path.display(), "extracted seed colour");
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Minimal uncompressed 24-bit BMP filled with one colour.
    fn solid_bmp(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
        let row_len = (width * 3).div_ceil(4) * 4;
        let pixel_bytes = row_len * height;
        let file_size = 54 + pixel_bytes;

        let mut data = Vec::with_capacity(file_size as usize);
        // File header.
        data.extend_from_slice(b"BM");
        data.extend_from_slice(&file_size.to_le_bytes());
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&54u32.to_le_bytes());
        // BITMAPINFOHEADER.
        data.extend_from_slice(&40u32.to_le_bytes());
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
        data.extend_from_slice(&1u16.to_le_bytes());
        data.extend_from_slice(&24u16.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&pixel_bytes.to_le_bytes());
        data.extend_from_slice(&2835u32.to_le_bytes());
        data.extend_from_slice(&2835u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        data.extend_from_slice(&0u32.to_le_bytes());
        // Pixel rows, bottom-up, BGR, padded to 4 bytes.
        for _ in 0..height {
            for _ in 0..width {
                data.extend_from_slice(&[rgb[2], rgb[1], rgb[0]]);
            }
            for _ in 0..(row_len - width * 3) {
                data.push(0);
            }
        }
        data
    }

    fn temp_file(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("tinct-extract-{}-{name}", std::process::id()));
        path
    }

    #[test]
    fn missing_path_is_input_not_found() {
        let error = dominant_color(Path::new("/nonexistent/wallpaper.png")).unwrap_err();
        assert!(matches!(error, TinctError::InputNotFound { .. }));
    }

    #[test]
    fn undecodable_file_is_upstream_error() {
        let path = temp_file("not-an-image.bmp");
        fs::write(&path, b"definitely not image data").unwrap();
        let error = dominant_color(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(error, TinctError::Upstream(_)));
    }

    #[test]
    fn solid_image_yields_its_colour() {
        let path = temp_file("solid-red.bmp");
        fs::write(&path, solid_bmp(8, 8, [0xD2, 0x0F, 0x39])).unwrap();
        let seed = dominant_color(&path).unwrap();
        fs::remove_file(&path).ok();

        let argb = material_colors::color::Argb::from(seed);
        // Quantization of a uniform image keeps the single cluster; allow
        // a little slack for the resize filter.
        assert!(argb.red > 0xC0, "red channel too low: {argb:?}");
        assert!(argb.green < 0x40, "green channel too high: {argb:?}");
        assert!(argb.blue < 0x70, "blue channel too high: {argb:?}");
    }
}
