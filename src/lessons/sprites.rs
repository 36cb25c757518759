use super::{centered, load_image};
use crate::config::LessonConfig;
use crate::errors::Result;
use crate::lesson::Lesson;
use engine::{Input, Resources, Screen, Texture};
use log::info;
use sprite::{Animation, DrawParams, SpriteSheet};

/// A walk cycle: the sheet is cut into equal frames which are shown in turn, centred on screen.
pub struct Sprites<'context> {
    texture: Texture<'context>,
    sheet: SpriteSheet,
    animation: Animation,
}

impl<'context> Lesson<'context> for Sprites<'context> {
    fn debug_name() -> &'static str {
        "sprites"
    }

    fn create(resources: Resources<'context>, config: &LessonConfig) -> Result<Self> {
        let texture = load_image(&resources, &config.sprites.image);
        let sheet = if texture.is_loaded() {
            SpriteSheet::split_horizontally(texture.width(), texture.height(), config.sprites.frames)?
        } else {
            SpriteSheet::new(Vec::new())
        };
        info!("Sprite sheet has {} frames.", sheet.len());

        Ok(Sprites {
            texture,
            animation: Animation::new(sheet.len(), config.sprites.ticks_per_frame),
            sheet,
        })
    }

    fn update(&mut self, _input: &Input) {
        self.animation.advance();
    }

    fn render(&mut self, screen: &mut Screen) -> Result<()> {
        if let Some(region) = self.sheet.frame(self.animation.frame()) {
            let (x, y) = centered(screen.size(), region.size());
            self.texture
                .draw(screen, x, y, &DrawParams::new().region(region))?;
        }
        Ok(())
    }
}
