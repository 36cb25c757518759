use super::load_image;
use crate::config::LessonConfig;
use crate::errors::Result;
use crate::lesson::Lesson;
use engine::{Gesture, Input, Keycode, Resources, Screen, Texture};
use sprite::{BlendMode, DrawParams};

const STEP: u8 = 32;

pub struct Bindings {
    pub more_red: Gesture,
    pub more_green: Gesture,
    pub more_blue: Gesture,
    pub less_red: Gesture,
    pub less_green: Gesture,
    pub less_blue: Gesture,
    pub more_alpha: Gesture,
    pub less_alpha: Gesture,
}

impl Default for Bindings {
    fn default() -> Self {
        Bindings {
            more_red: Gesture::KeyTrigger(Keycode::Q),
            more_green: Gesture::KeyTrigger(Keycode::W),
            more_blue: Gesture::KeyTrigger(Keycode::E),
            less_red: Gesture::KeyTrigger(Keycode::A),
            less_green: Gesture::KeyTrigger(Keycode::S),
            less_blue: Gesture::KeyTrigger(Keycode::D),
            more_alpha: Gesture::KeyTrigger(Keycode::R),
            less_alpha: Gesture::KeyTrigger(Keycode::F),
        }
    }
}

/// Colour and alpha modulation, each channel saturating at its bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tint {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Tint {
    pub fn update(&mut self, bindings: &Bindings, input: &Input) {
        adjust(&mut self.red, input, &bindings.more_red, &bindings.less_red);
        adjust(&mut self.green, input, &bindings.more_green, &bindings.less_green);
        adjust(&mut self.blue, input, &bindings.more_blue, &bindings.less_blue);
        adjust(&mut self.alpha, input, &bindings.more_alpha, &bindings.less_alpha);
    }
}

impl Default for Tint {
    fn default() -> Self {
        Tint {
            red: 0xff,
            green: 0xff,
            blue: 0xff,
            alpha: 0xff,
        }
    }
}

fn adjust(channel: &mut u8, input: &Input, more: &Gesture, less: &Gesture) {
    if input.poll_gesture(more) {
        *channel = channel.saturating_add(STEP);
    }
    if input.poll_gesture(less) {
        *channel = channel.saturating_sub(STEP);
    }
}

/// Draws the image through colour and alpha modulation under keyboard control.
pub struct Modulation<'context> {
    image: Texture<'context>,
    bindings: Bindings,
    tint: Tint,
}

impl<'context> Lesson<'context> for Modulation<'context> {
    fn debug_name() -> &'static str {
        "modulation"
    }

    fn create(resources: Resources<'context>, config: &LessonConfig) -> Result<Self> {
        let mut image = load_image(&resources, &config.sprites.image);
        image.set_blend_mode(BlendMode::Blend);
        Ok(Modulation {
            image,
            bindings: Bindings::default(),
            tint: Tint::default(),
        })
    }

    fn update(&mut self, input: &Input) {
        self.tint.update(&self.bindings, input);
    }

    fn render(&mut self, screen: &mut Screen) -> Result<()> {
        let Tint {
            red,
            green,
            blue,
            alpha,
        } = self.tint;
        self.image.set_color_mod(red, green, blue);
        self.image.set_alpha(alpha);
        self.image.draw(screen, 0, 0, &DrawParams::new())?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Bindings, Tint};
    use engine::{Input, Keycode};

    fn tint_after(start: Tint, keys: &[Keycode]) -> Tint {
        let mut input = Input::new();
        for &key in keys {
            input.press(key);
        }
        let mut tint = start;
        tint.update(&Bindings::default(), &input);
        tint
    }

    #[test]
    fn channels_saturate() {
        let full = Tint::default();
        assert_eq!(tint_after(full, &[Keycode::Q, Keycode::R]), full);

        let dimmed = tint_after(full, &[Keycode::A, Keycode::F]);
        assert_eq!(dimmed.red, 0xff - 32);
        assert_eq!(dimmed.alpha, 0xff - 32);
        assert_eq!((dimmed.green, dimmed.blue), (0xff, 0xff));

        let dark = Tint {
            red: 10,
            green: 10,
            blue: 10,
            alpha: 10,
        };
        let darker = tint_after(dark, &[Keycode::A, Keycode::S, Keycode::D, Keycode::F]);
        assert_eq!(
            darker,
            Tint {
                red: 0,
                green: 0,
                blue: 0,
                alpha: 0,
            }
        );
    }

    #[test]
    fn each_key_moves_one_channel() {
        let dark = Tint {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
        };
        assert_eq!(tint_after(dark, &[Keycode::W]).green, 32);
        assert_eq!(tint_after(dark, &[Keycode::W]).red, 0);
        assert_eq!(tint_after(dark, &[Keycode::E]).blue, 32);
        assert_eq!(tint_after(dark, &[Keycode::E]).alpha, 0);
    }
}
