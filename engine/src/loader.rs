use super::texture::{sdl_color, SdlTexture};
use sdl2::image::LoadSurface;
use sdl2::render::TextureCreator;
use sdl2::surface::Surface;
use sdl2::ttf::Font;
use sprite::{Color, ErrorKind, ImageLoader, Result, TextLoader, Upload};
use std::fmt::Display;
use std::path::Path;

/// Decodes images with SDL_image and uploads them through a texture creator.
///
/// Works with any texture creator, so the same loader serves window renderers and software
/// renderers backed by a plain surface.
pub struct SdlLoader<'creator, ContextT> {
    creator: &'creator TextureCreator<ContextT>,
}

impl<'creator, ContextT> SdlLoader<'creator, ContextT> {
    pub fn new(creator: &'creator TextureCreator<ContextT>) -> Self {
        SdlLoader { creator }
    }

    /// Adds the text capability, rendering with `font`.
    pub fn with_font<'font>(
        self,
        font: &'font Font<'font, 'static>,
    ) -> SdlTextLoader<'creator, 'font, ContextT> {
        SdlTextLoader {
            images: self,
            font,
        }
    }

    fn upload<NeededByT: Display>(
        &self,
        surface: &Surface,
        needed_by: NeededByT,
    ) -> Result<Upload<SdlTexture<'creator>>> {
        let (width, height) = surface.size();
        let texture = self
            .creator
            .create_texture_from_surface(surface)
            .map_err(ErrorKind::upload(needed_by))?;
        Ok(Upload {
            texture: SdlTexture::new(texture),
            width,
            height,
        })
    }
}

impl<'creator, ContextT> ImageLoader for SdlLoader<'creator, ContextT> {
    type Texture = SdlTexture<'creator>;

    fn load_image(&self, path: &Path, color_key: Option<Color>) -> Result<Upload<Self::Texture>> {
        let mut surface = Surface::from_file(path).map_err(ErrorKind::decode(path))?;
        if let Some(color_key) = color_key {
            surface
                .set_color_key(true, sdl_color(color_key))
                .map_err(ErrorKind::decode(path))?;
        }
        self.upload(&surface, path.display())
    }
}

/// An `SdlLoader` which can also render text with SDL_ttf.
pub struct SdlTextLoader<'creator, 'font, ContextT> {
    images: SdlLoader<'creator, ContextT>,
    font: &'font Font<'font, 'static>,
}

impl<'creator, 'font, ContextT> ImageLoader for SdlTextLoader<'creator, 'font, ContextT> {
    type Texture = SdlTexture<'creator>;

    fn load_image(&self, path: &Path, color_key: Option<Color>) -> Result<Upload<Self::Texture>> {
        self.images.load_image(path, color_key)
    }
}

impl<'creator, 'font, ContextT> TextLoader for SdlTextLoader<'creator, 'font, ContextT> {
    fn load_text(&self, text: &str, color: Color) -> Result<Upload<Self::Texture>> {
        let surface = self
            .font
            .render(text)
            .solid(sdl_color(color))
            .map_err(ErrorKind::render_text(text))?;
        self.images.upload(&surface, format!("text {:?}", text))
    }
}
