/// Texture module - image decoding and 2D texture upload

pub mod image;
pub mod texture;

pub use self::image::*;
pub use self::texture::*;
