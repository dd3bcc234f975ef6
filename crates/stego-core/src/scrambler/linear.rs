use super::{position_of, ChannelPosition, Scrambler, COLOR_CHANNELS};

/// Walks the image in reading order, R, G and B of a pixel before moving on to the next one.
#[derive(Debug, Default, Clone)]
pub struct LinearScrambler {
    i: usize,
    width: usize,
    cap: usize,
}

impl LinearScrambler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scrambler for LinearScrambler {
    fn init(&mut self, width: u32, height: u32) {
        self.i = 0;
        self.width = width as usize;
        self.cap = self.width * height as usize * COLOR_CHANNELS;
    }

    fn next(&mut self) -> ChannelPosition {
        let pos = position_of(self.i, self.width);
        self.i += 1;
        pos
    }

    fn cap(&self) -> usize {
        self.cap
    }
}
