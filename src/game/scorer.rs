/// Points awarded for each correctly unscrambled word
pub const SCORE_INCREMENT: u32 = 20;

/// Awards a fixed number of points per correct guess.
#[derive(Debug, Clone, Copy)]
pub struct Scorer {
    increment: u32,
}

impl Scorer {
    pub fn new(increment: u32) -> Self {
        Self { increment }
    }

    /// Score after one more correct guess
    pub fn award(&self, score: u32) -> u32 {
        score.saturating_add(self.increment)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(SCORE_INCREMENT)
    }
}
