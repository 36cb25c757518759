use super::{load_image, load_text};
use crate::config::LessonConfig;
use crate::errors::Result;
use crate::lesson::Lesson;
use engine::{Gesture, Input, Keycode, Resources, Screen, Texture};
use sprite::{BlendMode, DrawParams, Flip};

const ROTATION_STEP: f64 = 60.0;
const TEXT_POSITION: (i32, i32) = (100, 100);

pub struct Bindings {
    pub rotate_left: Gesture,
    pub rotate_right: Gesture,
    pub flip_horizontal: Gesture,
    pub flip_none: Gesture,
    pub flip_vertical: Gesture,
}

impl Default for Bindings {
    fn default() -> Self {
        Bindings {
            rotate_left: Gesture::KeyTrigger(Keycode::A),
            rotate_right: Gesture::KeyTrigger(Keycode::D),
            flip_horizontal: Gesture::KeyTrigger(Keycode::Q),
            flip_none: Gesture::KeyTrigger(Keycode::W),
            flip_vertical: Gesture::KeyTrigger(Keycode::E),
        }
    }
}

/// Rotation and mirroring applied to the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    pub angle: f64,
    pub flip: Flip,
}

impl Pose {
    pub fn update(&mut self, bindings: &Bindings, input: &Input) {
        if input.poll_gesture(&bindings.rotate_left) {
            self.angle -= ROTATION_STEP;
        }
        if input.poll_gesture(&bindings.rotate_right) {
            self.angle += ROTATION_STEP;
        }
        if input.poll_gesture(&bindings.flip_horizontal) {
            self.flip = Flip::Horizontal;
        }
        if input.poll_gesture(&bindings.flip_none) {
            self.flip = Flip::None;
        }
        if input.poll_gesture(&bindings.flip_vertical) {
            self.flip = Flip::Vertical;
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Pose {
            angle: 0.0,
            flip: Flip::None,
        }
    }
}

/// Draws the image rotated and mirrored under keyboard control, with a line of text on top.
pub struct Transform<'context> {
    image: Texture<'context>,
    text: Texture<'context>,
    bindings: Bindings,
    pose: Pose,
}

impl<'context> Lesson<'context> for Transform<'context> {
    fn debug_name() -> &'static str {
        "transform"
    }

    fn create(resources: Resources<'context>, config: &LessonConfig) -> Result<Self> {
        let mut image = load_image(&resources, &config.sprites.image);
        image.set_blend_mode(BlendMode::Blend);
        let text = load_text(&resources, config);
        Ok(Transform {
            image,
            text,
            bindings: Bindings::default(),
            pose: Pose::default(),
        })
    }

    fn update(&mut self, input: &Input) {
        self.pose.update(&self.bindings, input);
    }

    fn render(&mut self, screen: &mut Screen) -> Result<()> {
        let params = DrawParams::new()
            .rotated(self.pose.angle)
            .flipped(self.pose.flip);
        self.image.draw(screen, 0, 0, &params)?;
        let (x, y) = TEXT_POSITION;
        self.text.draw(screen, x, y, &DrawParams::new())?;
        Ok(())
    }
}
