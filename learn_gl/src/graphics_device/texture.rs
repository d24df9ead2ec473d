/// Texture formats, sampler parameters and the texture creation descriptor

/// Pixel layout of 8-bit texture data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// One channel (grayscale)
    R8,
    /// Three channels, no alpha
    Rgb8,
    /// Four channels with alpha
    Rgba8,
}

impl PixelFormat {
    /// Number of channels per pixel
    pub fn channels(&self) -> u32 {
        match self {
            PixelFormat::R8 => 1,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }

    /// Bytes per pixel (channels are one byte each)
    pub fn bytes_per_pixel(&self) -> u32 {
        self.channels()
    }

    /// Pick the format matching a decoded channel count
    ///
    /// Two-channel (gray + alpha) data has no direct counterpart and is
    /// rejected here; decoders expand it to RGBA.
    pub fn from_channels(channels: u32) -> Option<Self> {
        match channels {
            1 => Some(PixelFormat::R8),
            3 => Some(PixelFormat::Rgb8),
            4 => Some(PixelFormat::Rgba8),
            _ => None,
        }
    }
}

/// Texture coordinate wrapping outside [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Repeat the image
    Repeat,
    /// Repeat, mirroring every other tile
    MirroredRepeat,
    /// Clamp to the edge texel
    ClampToEdge,
    /// Clamp to the border color
    ClampToBorder,
}

/// Texel filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Nearest texel
    Nearest,
    /// Bilinear interpolation (trilinear when mipmapped)
    Linear,
}

/// Descriptor for creating a 2D texture
#[derive(Debug, Clone)]
pub struct TextureDesc<'a> {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Layout of `pixels`; also selects the upload format
    pub format: PixelFormat,
    /// Wrapping on both S and T axes
    pub wrap: WrapMode,
    /// Minification and magnification filter
    pub filter: FilterMode,
    /// Generate the full mipmap chain after upload
    pub mipmaps: bool,
    /// Row-major pixel data, `width * height * format.bytes_per_pixel()` bytes
    pub pixels: &'a [u8],
}

impl TextureDesc<'_> {
    /// Number of mip levels the texture will have
    pub fn mip_levels(&self) -> u32 {
        if self.mipmaps {
            32 - self.width.max(self.height).max(1).leading_zeros()
        } else {
            1
        }
    }

    /// Expected length of `pixels`
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.format.bytes_per_pixel() as usize
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
