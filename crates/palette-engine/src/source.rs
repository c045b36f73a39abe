//! Random base colors
//!
//! Randomness sits behind [`BaseColorSource`] so sessions stay
//! deterministic under test.

use color_science::Color;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Largest per-channel change applied by [`vary_color`] (about 5%)
pub const MAX_VARIATION: i16 = 13;

/// Source of random colors and channel offsets
#[cfg_attr(test, mockall::automock)]
pub trait BaseColorSource {
    /// A uniformly random opaque color
    fn random_color(&mut self) -> Color;

    /// An offset in `[-max, max]`
    fn channel_offset(&mut self, max: i16) -> i16;
}

/// [`BaseColorSource`] backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RandomSource<R = ThreadRng> {
    rng: R,
}

impl RandomSource<ThreadRng> {
    /// Source using the thread-local generator
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomSource<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomSource<R> {
    /// Source using a caller-provided generator, e.g. a seeded `StdRng`
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BaseColorSource for RandomSource<R> {
    fn random_color(&mut self) -> Color {
        Color::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }

    fn channel_offset(&mut self, max: i16) -> i16 {
        let max = max.abs();
        self.rng.gen_range(-max..=max)
    }
}

/// Nudge each channel of `base` by up to [`MAX_VARIATION`], clamped to 0..=255
pub fn vary_color(base: Color, source: &mut dyn BaseColorSource) -> Color {
    let mut jitter = |channel: u8| {
        let offset = source.channel_offset(MAX_VARIATION);
        (i16::from(channel) + offset).clamp(0, 255) as u8
    };
    let r = jitter(base.r);
    let g = jitter(base.g);
    let b = jitter(base.b);
    Color::new(r, g, b)
}
