use sdl2::event::Event;
use sdl2::EventPump;

pub use sdl2::keyboard::Keycode;

pub enum Gesture {
    NoGesture,
    KeyTrigger(Keycode),
    AnyOf(Vec<Gesture>),
    QuitTrigger,
}

/// Discrete input gathered from the events of one loop iteration.
///
/// Each key press is recorded on its own; a gesture triggers only for the key it names.
#[derive(Default)]
pub struct Input {
    pressed: Vec<Keycode>,
    quit_requested: bool,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains all pending events, forgetting the previous iteration's input.
    pub fn update(&mut self, events: &mut EventPump) {
        self.reset();
        for event in events.poll_iter() {
            self.handle_event(&event);
        }
    }

    pub fn poll_gesture(&self, gesture: &Gesture) -> bool {
        match *gesture {
            Gesture::NoGesture => false,
            Gesture::KeyTrigger(keycode) => self.pressed.contains(&keycode),
            Gesture::AnyOf(ref gestures) => gestures.iter().any(|gesture| self.poll_gesture(gesture)),
            Gesture::QuitTrigger => self.quit_requested,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.pressed.clear();
        self.quit_requested = false;
    }

    pub(crate) fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::Quit { .. } => self.quit_requested = true,
            Event::KeyDown {
                keycode: Some(keycode),
                ..
            } => self.press(keycode),
            _ => {}
        }
    }

    /// Records a key press as if it had arrived through the event queue.
    pub fn press(&mut self, keycode: Keycode) {
        self.pressed.push(keycode);
    }
}

#[cfg(test)]
mod test {
    use super::{Gesture, Input, Keycode};
    use sdl2::event::Event;

    #[test]
    fn key_triggers_are_independent() {
        let mut input = Input::new();
        input.press(Keycode::D);
        assert!(input.poll_gesture(&Gesture::KeyTrigger(Keycode::D)));
        assert!(!input.poll_gesture(&Gesture::KeyTrigger(Keycode::Q)));
        assert!(!input.poll_gesture(&Gesture::QuitTrigger));
        assert!(!input.poll_gesture(&Gesture::NoGesture));

        input.reset();
        assert!(!input.poll_gesture(&Gesture::KeyTrigger(Keycode::D)));
    }

    #[test]
    fn quit_event_and_any_of() {
        let quit = Gesture::AnyOf(vec![
            Gesture::QuitTrigger,
            Gesture::KeyTrigger(Keycode::Escape),
        ]);

        let mut input = Input::new();
        assert!(!input.poll_gesture(&quit));
        input.handle_event(&Event::Quit { timestamp: 0 });
        assert!(input.poll_gesture(&quit));

        input.reset();
        input.press(Keycode::Escape);
        assert!(input.poll_gesture(&quit));
    }
}
