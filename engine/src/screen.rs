use super::texture::{sdl_color, sdl_point, sdl_rect, SdlTexture};
use sdl2::render::{Canvas, RenderTarget, WindowCanvas};
use sprite::{Color, DrawCall, DrawTarget, ErrorKind, Result};

impl<'creator, TargetT: RenderTarget> DrawTarget<SdlTexture<'creator>> for Canvas<TargetT> {
    fn draw_texture(&mut self, texture: &SdlTexture<'creator>, call: &DrawCall) -> Result<()> {
        self.copy_ex(
            texture.raw(),
            call.source.map(sdl_rect),
            sdl_rect(call.destination),
            call.angle,
            call.pivot.map(sdl_point),
            call.flip.horizontal(),
            call.flip.vertical(),
        )
        .map_err(ErrorKind::draw)?;
        Ok(())
    }
}

/// The window's drawing surface for the duration of a frame loop.
pub struct Screen<'context> {
    canvas: &'context mut WindowCanvas,
    clear_color: Color,
}

impl<'context> Screen<'context> {
    pub(crate) fn new(canvas: &'context mut WindowCanvas, clear_color: Color) -> Self {
        Screen {
            canvas,
            clear_color,
        }
    }

    pub fn width(&self) -> u32 {
        self.size().0
    }

    pub fn height(&self) -> u32 {
        self.size().1
    }

    pub fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    pub fn clear(&mut self) {
        self.canvas.set_draw_color(sdl_color(self.clear_color));
        self.canvas.clear();
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}

impl<'context, 'creator> DrawTarget<SdlTexture<'creator>> for Screen<'context> {
    fn draw_texture(&mut self, texture: &SdlTexture<'creator>, call: &DrawCall) -> Result<()> {
        self.canvas.draw_texture(texture, call)
    }
}
