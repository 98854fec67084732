//! 32-bit xorshift (Marsaglia, shifts 13/17/5).

/// State before the game seeds from the timer.
pub const PRE_SEED: u32 = 0xBEEF_BABE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift32 {
    state: u32,
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(PRE_SEED)
    }
}

impl XorShift32 {
    /// A zero state is a fixed point of xorshift, so a zero seed falls back
    /// to [`PRE_SEED`].
    pub const fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { PRE_SEED } else { seed },
        }
    }

    /// Reseed in place. Zero leaves the current state untouched.
    pub fn seed(&mut self, seed: u32) {
        if seed != 0 {
            self.state = seed;
        }
    }

    pub const fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Iterator for XorShift32 {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}
