use super::{centered, load_text};
use crate::config::LessonConfig;
use crate::errors::Result;
use crate::lesson::Lesson;
use engine::{Input, Resources, Screen, Texture};
use sprite::DrawParams;

/// The configured message, rendered once and drawn centred.
pub struct TextLesson<'context> {
    text: Texture<'context>,
}

impl<'context> Lesson<'context> for TextLesson<'context> {
    fn debug_name() -> &'static str {
        "text"
    }

    fn create(resources: Resources<'context>, config: &LessonConfig) -> Result<Self> {
        Ok(TextLesson {
            text: load_text(&resources, config),
        })
    }

    fn update(&mut self, _input: &Input) {}

    fn render(&mut self, screen: &mut Screen) -> Result<()> {
        let (x, y) = centered(screen.size(), self.text.size());
        self.text.draw(screen, x, y, &DrawParams::new())?;
        Ok(())
    }
}
