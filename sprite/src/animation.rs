/// Cycles through `frame_count` frames, holding each one for `ticks_per_frame` ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Animation {
    frame_count: usize,
    ticks_per_frame: usize,
    tick: usize,
}

impl Animation {
    /// Zero counts are clamped to one.
    pub fn new(frame_count: usize, ticks_per_frame: usize) -> Self {
        Animation {
            frame_count: frame_count.max(1),
            ticks_per_frame: ticks_per_frame.max(1),
            tick: 0,
        }
    }

    pub fn advance(&mut self) {
        self.tick = (self.tick + 1) % (self.frame_count * self.ticks_per_frame);
    }

    pub fn frame(&self) -> usize {
        self.tick / self.ticks_per_frame
    }

    pub fn reset(&mut self) {
        self.tick = 0;
    }
}

#[cfg(test)]
mod test {
    use super::Animation;

    #[test]
    fn holds_and_wraps() {
        let mut animation = Animation::new(4, 4);
        let mut frames = Vec::new();
        for _ in 0..20 {
            frames.push(animation.frame());
            animation.advance();
        }
        assert_eq!(
            frames,
            vec![0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 0, 0, 0, 0]
        );

        animation.reset();
        assert_eq!(animation.frame(), 0);
    }

    #[test]
    fn zero_counts_are_clamped() {
        let mut animation = Animation::new(0, 0);
        animation.advance();
        assert_eq!(animation.frame(), 0);
    }
}
