mod context;
mod errors;
mod input;
mod loader;
mod screen;
mod texture;
mod window;

pub use self::context::{Context, Resources};
pub use self::errors::{Error, ErrorKind, Result};
pub use self::input::{Gesture, Input, Keycode};
pub use self::loader::{SdlLoader, SdlTextLoader};
pub use self::screen::Screen;
pub use self::texture::SdlTexture;
pub use self::window::WindowConfig;
pub use sdl2::ttf::Font;
pub use sdl2::EventPump;

/// A texture handle backed by an SDL texture borrowed from a `Context`.
pub type Texture<'context> = sprite::TextureHandle<SdlTexture<'context>>;
