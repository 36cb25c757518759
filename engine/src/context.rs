use super::errors::{ErrorKind, Result};
use super::loader::SdlLoader;
use super::screen::Screen;
use super::window::WindowConfig;
use log::info;
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::render::{TextureCreator, WindowCanvas};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::WindowContext;
use sdl2::{EventPump, Sdl, VideoSubsystem};
use sprite::Color;
use std::path::Path;

/// Owns the SDL subsystems, the window and its renderer.
///
/// Everything is torn down when the context is dropped. Textures and fonts borrow from the
/// context through `Resources`, so they cannot outlive it.
pub struct Context {
    canvas: WindowCanvas,
    creator: TextureCreator<WindowContext>,
    events: EventPump,
    clear_color: Color,
    ttf: Sdl2TtfContext,
    _image: Sdl2ImageContext,
    _video: VideoSubsystem,
    _sdl: Sdl,
}

impl Context {
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let sdl = sdl2::init().map_err(ErrorKind::sdl("init"))?;
        let video = sdl.video().map_err(ErrorKind::sdl("video subsystem"))?;

        let window = video
            .window(&config.title, config.width, config.height)
            .position_centered()
            .build()
            .map_err(ErrorKind::create_window(config.width, config.height))?;

        let canvas = window.into_canvas().accelerated();
        let canvas = if config.vsync {
            canvas.present_vsync()
        } else {
            canvas
        };
        let canvas = canvas
            .build()
            .map_err(ErrorKind::create_window(config.width, config.height))?;

        let image = sdl2::image::init(InitFlag::PNG).map_err(ErrorKind::sdl("SDL_image"))?;
        info!("Initialised SDL2_image: {}", sdl2::image::get_linked_version());
        let ttf = sdl2::ttf::init().map_err(ErrorKind::sdl("SDL_ttf"))?;
        info!("Initialised SDL2_ttf: {}", sdl2::ttf::get_linked_version());

        let events = sdl.event_pump().map_err(ErrorKind::sdl("event pump"))?;
        let creator = canvas.texture_creator();
        info!(
            "Context set up with {}x{} window {:?}.",
            config.width, config.height, config.title
        );

        Ok(Context {
            canvas,
            creator,
            events,
            clear_color: config.clear_color,
            ttf,
            _image: image,
            _video: video,
            _sdl: sdl,
        })
    }

    /// Splits the context into what loads assets, what draws and what delivers events, so the
    /// three can be borrowed at once.
    pub fn split(&mut self) -> (Resources<'_>, Screen<'_>, &mut EventPump) {
        let clear_color = self.clear_color;
        (
            Resources {
                creator: &self.creator,
                ttf: &self.ttf,
            },
            Screen::new(&mut self.canvas, clear_color),
            &mut self.events,
        )
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        info!("Shutting down SDL context.");
    }
}

/// Borrowed access to texture and font creation.
#[derive(Copy, Clone)]
pub struct Resources<'context> {
    creator: &'context TextureCreator<WindowContext>,
    ttf: &'context Sdl2TtfContext,
}

impl<'context> Resources<'context> {
    pub fn loader(&self) -> SdlLoader<'context, WindowContext> {
        SdlLoader::new(self.creator)
    }

    pub fn load_font<PathT: AsRef<Path> + ?Sized>(
        &self,
        path: &PathT,
        point_size: u16,
    ) -> Result<Font<'context, 'static>> {
        let path = path.as_ref();
        let font = self
            .ttf
            .load_font(path, point_size)
            .map_err(ErrorKind::font(path.display().to_string()))?;
        info!("Loaded font {:?} at {}pt.", path, point_size);
        Ok(font)
    }
}
