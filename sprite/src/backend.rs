use super::draw::DrawCall;
use super::errors::Result;
use super::geometry::{BlendMode, Color};
use std::path::Path;

/// A freshly uploaded texture together with the size of the pixel buffer it was created from.
pub struct Upload<TextureT> {
    pub texture: TextureT,
    pub width: u32,
    pub height: u32,
}

/// A GPU-resident texture whose modulation can be changed after upload.
pub trait GpuTexture {
    fn set_color_mod(&mut self, red: u8, green: u8, blue: u8);
    fn set_blend_mode(&mut self, mode: BlendMode);
    fn set_alpha_mod(&mut self, alpha: u8);
}

/// Decodes image files and uploads them as textures.
pub trait ImageLoader {
    type Texture: GpuTexture;

    /// Pixels matching `color_key` become fully transparent.
    fn load_image(&self, path: &Path, color_key: Option<Color>) -> Result<Upload<Self::Texture>>;
}

/// A loader with a configured font, able to upload rendered lines of text.
pub trait TextLoader: ImageLoader {
    fn load_text(&self, text: &str, color: Color) -> Result<Upload<Self::Texture>>;
}

pub trait DrawTarget<TextureT> {
    fn draw_texture(&mut self, texture: &TextureT, call: &DrawCall) -> Result<()>;
}
