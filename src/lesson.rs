use super::config::LessonConfig;
use super::errors::Result;
use engine::{Context, Gesture, Input, Keycode, Resources, Screen};
use log::info;

/// One demo program built on the shared texture handle.
pub trait Lesson<'context>: Sized {
    fn debug_name() -> &'static str;

    fn create(resources: Resources<'context>, config: &LessonConfig) -> Result<Self>;

    fn update(&mut self, input: &Input);

    fn render(&mut self, screen: &mut Screen) -> Result<()>;
}

/// Runs `LessonT` until the window is closed or Escape is pressed.
pub fn run<'context, LessonT>(context: &'context mut Context, config: &LessonConfig) -> Result<()>
where
    LessonT: Lesson<'context>,
{
    let (resources, mut screen, events) = context.split();
    let mut lesson = LessonT::create(resources, config)?;
    let quit = Gesture::AnyOf(vec![
        Gesture::QuitTrigger,
        Gesture::KeyTrigger(Keycode::Escape),
    ]);
    let mut input = Input::new();

    info!("Running lesson `{}`.", LessonT::debug_name());
    loop {
        input.update(events);
        if input.poll_gesture(&quit) {
            break;
        }
        lesson.update(&input);

        screen.clear();
        lesson.render(&mut screen)?;
        screen.present();
    }
    info!("Lesson `{}` ended.", LessonT::debug_name());
    Ok(())
}
