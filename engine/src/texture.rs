use sdl2::pixels::Color as SdlColor;
use sdl2::rect::{Point as SdlPoint, Rect};
use sdl2::render::{BlendMode as SdlBlendMode, Texture};
use sprite::{BlendMode, Color, GpuTexture, Point, Region};

/// An SDL texture owned by a `TextureHandle`; destroyed when dropped.
pub struct SdlTexture<'creator>(Texture<'creator>);

impl<'creator> SdlTexture<'creator> {
    pub(crate) fn new(texture: Texture<'creator>) -> Self {
        SdlTexture(texture)
    }

    pub fn raw(&self) -> &Texture<'creator> {
        &self.0
    }
}

impl<'creator> GpuTexture for SdlTexture<'creator> {
    fn set_color_mod(&mut self, red: u8, green: u8, blue: u8) {
        self.0.set_color_mod(red, green, blue);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.0.set_blend_mode(sdl_blend_mode(mode));
    }

    fn set_alpha_mod(&mut self, alpha: u8) {
        self.0.set_alpha_mod(alpha);
    }
}

pub(crate) fn sdl_color(color: Color) -> SdlColor {
    SdlColor::RGBA(color.r, color.g, color.b, color.a)
}

pub(crate) fn sdl_rect(region: Region) -> Rect {
    Rect::new(region.x, region.y, region.width, region.height)
}

pub(crate) fn sdl_point(point: Point) -> SdlPoint {
    SdlPoint::new(point.x, point.y)
}

pub(crate) fn sdl_blend_mode(mode: BlendMode) -> SdlBlendMode {
    match mode {
        BlendMode::None => SdlBlendMode::None,
        BlendMode::Blend => SdlBlendMode::Blend,
        BlendMode::Add => SdlBlendMode::Add,
        BlendMode::Mod => SdlBlendMode::Mod,
    }
}
