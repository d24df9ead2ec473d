/// Decoded CPU-side images
///
/// Images are decoded with the `image` crate and normalized to 8-bit
/// channels. The pixel format follows the decoded channel count; gray+alpha
/// sources are expanded to RGBA.

use std::path::Path;

use image::DynamicImage;

use crate::engine_report;
use crate::error::{Error, Result};
use crate::graphics_device::PixelFormat;

const SOURCE: &str = "learngl::Image";

/// Decoding options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Flip rows so the first row is the bottom of the image (GL texture origin)
    pub flip_vertically: bool,
}

/// Row-major 8-bit pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    format: PixelFormat,
    pixels: Vec<u8>,
}

impl Image {
    /// Wrap raw pixels
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` when `pixels` does not hold exactly
    /// `width * height` pixels of `format`.
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * format.bytes_per_pixel() as usize;
        if pixels.len() != expected {
            return Err(engine_report!(SOURCE, Error::InvalidResource(format!(
                "{}x{} {:?} image needs {} bytes, got {}",
                width,
                height,
                format,
                expected,
                pixels.len()
            ))));
        }
        Ok(Self { width, height, format, pixels })
    }

    /// Decode a PNG/JPEG file
    ///
    /// # Errors
    ///
    /// `Error::Load` naming the path when the file is missing or undecodable.
    pub fn open(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|e| {
            engine_report!(SOURCE, Error::Load {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })?;
        Ok(Self::from_dynamic(decoded, options))
    }

    /// Decode an in-memory PNG/JPEG
    pub fn from_memory(bytes: &[u8], options: &LoadOptions) -> Result<Self> {
        let decoded = image::load_from_memory(bytes).map_err(|e| {
            engine_report!(SOURCE, Error::Load {
                path: "<memory>".into(),
                reason: e.to_string(),
            })
        })?;
        Ok(Self::from_dynamic(decoded, options))
    }

    fn from_dynamic(decoded: DynamicImage, options: &LoadOptions) -> Self {
        let (width, height) = (decoded.width(), decoded.height());
        let format = PixelFormat::from_channels(u32::from(decoded.color().channel_count()))
            .unwrap_or(PixelFormat::Rgba8);
        let pixels = match format {
            PixelFormat::R8 => decoded.into_luma8().into_raw(),
            PixelFormat::Rgb8 => decoded.into_rgb8().into_raw(),
            PixelFormat::Rgba8 => decoded.into_rgba8().into_raw(),
        };
        let mut image = Self { width, height, format, pixels };
        if options.flip_vertically {
            image.flip_vertically();
        }
        image
    }

    /// RGBA checkerboard of `cell`-pixel squares (magenta / black)
    ///
    /// Stand-in for textures that failed to load.
    pub fn checkerboard(width: u32, height: u32, cell: u32) -> Self {
        const ON: [u8; 4] = [255, 0, 255, 255];
        const OFF: [u8; 4] = [0, 0, 0, 255];

        let cell = cell.max(1);
        let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                let texel = if (x / cell + y / cell) % 2 == 0 { ON } else { OFF };
                pixels.extend_from_slice(&texel);
            }
        }
        Self { width, height, format: PixelFormat::Rgba8, pixels }
    }

    /// Reverse the row order in place
    pub fn flip_vertically(&mut self) {
        let row = self.row_len();
        if row == 0 {
            return;
        }
        let rows = self.height as usize;
        for top in 0..rows / 2 {
            let bottom = rows - 1 - top;
            let (upper, lower) = self.pixels.split_at_mut(bottom * row);
            upper[top * row..(top + 1) * row].swap_with_slice(&mut lower[..row]);
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel format
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Row-major pixel bytes, no row padding
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes of one pixel row
    pub fn row_len(&self) -> usize {
        self.width as usize * self.format.bytes_per_pixel() as usize
    }

    /// Bytes of pixel (x, y), None outside the image
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.format.bytes_per_pixel() as usize;
        let start = y as usize * self.row_len() + x as usize * bpp;
        Some(&self.pixels[start..start + bpp])
    }
}

#[cfg(test)]
#[path = "image_tests.rs"]
mod tests;
