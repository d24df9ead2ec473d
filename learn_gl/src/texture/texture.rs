/// Uploaded 2D textures

use std::path::Path;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, TextureId, TextureDesc, PixelFormat, WrapMode, FilterMode,
};
use crate::texture::{Image, LoadOptions};
use crate::{engine_debug, engine_err, engine_warn};

const SOURCE: &str = "learngl::Texture2D";

/// Sampler and mipmap parameters applied on upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureParams {
    /// Wrapping on both axes
    pub wrap: WrapMode,
    /// Minification/magnification filter
    pub filter: FilterMode,
    /// Generate mipmaps (min filter becomes the mipmapped variant)
    pub mipmaps: bool,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            wrap: WrapMode::Repeat,
            filter: FilterMode::Linear,
            mipmaps: true,
        }
    }
}

/// Properties of an uploaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Upload format
    pub format: PixelFormat,
    /// Wrapping
    pub wrap: WrapMode,
    /// Filtering
    pub filter: FilterMode,
    /// Mip levels, 1 without mipmaps
    pub mip_levels: u32,
}

/// 2D texture owned by its creator
///
/// The GPU texture is deleted on drop.
pub struct Texture2D {
    device: Rc<dyn GraphicsDevice>,
    id: Option<TextureId>,
    info: TextureInfo,
}

impl Texture2D {
    /// Upload a decoded image
    pub fn from_image(device: Rc<dyn GraphicsDevice>, image: &Image, params: &TextureParams) -> Result<Self> {
        let desc = TextureDesc {
            width: image.width(),
            height: image.height(),
            format: image.format(),
            wrap: params.wrap,
            filter: params.filter,
            mipmaps: params.mipmaps,
            pixels: image.pixels(),
        };
        let id = device.create_texture(&desc)?;
        let info = TextureInfo {
            width: desc.width,
            height: desc.height,
            format: desc.format,
            wrap: desc.wrap,
            filter: desc.filter,
            mip_levels: desc.mip_levels(),
        };

        engine_debug!(
            SOURCE,
            "Texture {} uploaded: {}x{} {:?}, {} mip level(s)",
            id,
            info.width,
            info.height,
            info.format,
            info.mip_levels
        );
        Ok(Self { device, id: Some(id), info })
    }

    /// Decode `path` and upload it with mipmaps
    ///
    /// # Errors
    ///
    /// `Error::Load` when the file cannot be decoded; the caller decides what
    /// to do (e.g. fall back to `Image::checkerboard`).
    pub fn load(device: Rc<dyn GraphicsDevice>, path: impl AsRef<Path>, wrap: WrapMode, filter: FilterMode) -> Result<Self> {
        let params = TextureParams { wrap, filter, mipmaps: true };
        Self::load_with_options(device, path, &LoadOptions::default(), &params)
    }

    /// Decode `path` with `options` and upload it with `params`
    pub fn load_with_options(
        device: Rc<dyn GraphicsDevice>,
        path: impl AsRef<Path>,
        options: &LoadOptions,
        params: &TextureParams,
    ) -> Result<Self> {
        let image = Image::open(path, options)?;
        Self::from_image(device, &image, params)
    }

    /// Bind to texture unit `unit` (GL_TEXTURE0 + unit)
    pub fn bind(&self, unit: u32) {
        match self.id {
            Some(id) => self.device.bind_texture(unit, Some(id)),
            None => engine_warn!(SOURCE, "bind() on a released texture ignored"),
        }
    }

    /// Read back level 0 in the upload format
    ///
    /// # Errors
    ///
    /// `Error::BackendError` when the device cannot read textures back.
    pub fn read_pixels(&self) -> Result<Vec<u8>> {
        let id = self
            .id
            .ok_or_else(|| Error::InvalidResource("texture has been released".to_string()))?;
        self.device
            .read_texture(id, self.info.format, self.info.width, self.info.height)
            .ok_or_else(|| engine_err!(SOURCE, "Texture readback is not supported by this device"))
    }

    /// Texture properties
    pub fn info(&self) -> &TextureInfo {
        &self.info
    }

    /// GPU handle
    pub fn id(&self) -> Option<TextureId> {
        self.id
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.device.delete_texture(id);
        }
    }
}

impl std::fmt::Debug for Texture2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture2D")
            .field("id", &self.id)
            .field("info", &self.info)
            .finish()
    }
}

#[cfg(test)]
#[path = "texture_tests.rs"]
mod tests;
