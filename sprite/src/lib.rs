mod animation;
mod backend;
mod draw;
mod errors;
mod geometry;
mod handle;
mod sheet;

pub use self::animation::Animation;
pub use self::backend::{DrawTarget, GpuTexture, ImageLoader, TextLoader, Upload};
pub use self::draw::{DrawCall, DrawParams};
pub use self::errors::{Error, ErrorKind, Result};
pub use self::geometry::{BlendMode, Color, Flip, Point, Region, COLOR_KEY};
pub use self::handle::TextureHandle;
pub use self::sheet::SpriteSheet;
