mod modulation;
mod sprites;
mod text;
mod transform;

pub use self::modulation::Modulation;
pub use self::sprites::Sprites;
pub use self::text::TextLesson;
pub use self::transform::Transform;

use super::config::LessonConfig;
use engine::{Resources, Texture};
use log::warn;
use std::path::Path;

/// Loads an image, continuing with an empty texture if that fails.
fn load_image<'context>(resources: &Resources<'context>, path: &Path) -> Texture<'context> {
    let mut texture = Texture::new();
    if texture.load_from_image(&resources.loader(), path).is_err() {
        warn!("Continuing without image {:?}.", path);
    }
    texture
}

/// Renders the configured message with the configured font, continuing with an empty texture if
/// either fails.
fn load_text<'context>(resources: &Resources<'context>, config: &LessonConfig) -> Texture<'context> {
    let mut texture = Texture::new();
    let font = match resources.load_font(&config.font.path, config.font.point_size) {
        Ok(font) => font,
        Err(error) => {
            warn!("{}. Continuing without text.", error);
            return texture;
        }
    };
    let loader = resources.loader().with_font(&font);
    if texture
        .load_from_text(&loader, &config.text.message, config.text.color)
        .is_err()
    {
        warn!("Continuing without text.");
    }
    texture
}

/// Top-left corner which centres a `size` rectangle on the screen.
fn centered(screen_size: (u32, u32), size: (u32, u32)) -> (i32, i32) {
    (
        (screen_size.0 as i32 - size.0 as i32) / 2,
        (screen_size.1 as i32 - size.1 as i32) / 2,
    )
}

#[cfg(test)]
mod test {
    use super::centered;

    #[test]
    fn centering() {
        assert_eq!(centered((480, 640), (64, 64)), (208, 288));
        assert_eq!(centered((100, 100), (200, 50)), (-50, 25));
    }
}
