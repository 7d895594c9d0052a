//! Lava lamp
//!
//! A handful of blobs drift in and out of existence over a background. Each
//! blob alternates between hidden and shown, counting frames down at random
//! durations below `speed`. The strip frame is kept between ticks and every
//! pixel morphs one unit per frame, first towards the background and then
//! towards any blob covering it, so colors bleed smoothly.

use embassy_time::Duration;
use heapless::Vec;
use rand::Rng;
use rand_core::RngCore;

use super::{FrameContext, Pattern};
use crate::color::{BLACK, Rgb, expand, morph_step};
use crate::strip::RenderSink;

/// Fixed frame interval
pub const LAVA_INTERVAL: Duration = Duration::from_millis(10);

/// Number of blobs when no other pool size is requested
pub const DEFAULT_BLOBS: usize = 3;

/// A heat spot on the strip
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blob {
    /// Center pixel, `None` while hidden
    pub position: Option<usize>,
    /// Pixels covered on each side of the center
    pub radius: usize,
    /// Frames left before the blob flips between hidden and shown
    pub countdown: i64,
    pub color: Rgb,
}

impl Blob {
    const HIDDEN: Self = Self {
        position: None,
        radius: 0,
        countdown: 0,
        color: BLACK,
    };

    pub const fn is_active(&self) -> bool {
        self.position.is_some()
    }
}

/// Lava lamp with a frame buffer for up to `N` pixels and `BLOBS` blobs
#[derive(Debug, Clone)]
pub struct LavaPattern<const N: usize, const BLOBS: usize = DEFAULT_BLOBS> {
    frame: Vec<Rgb, N>,
    blobs: [Blob; BLOBS],
    background: Rgb,
}

impl<const N: usize, const BLOBS: usize> Default for LavaPattern<N, BLOBS> {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw a frame count in `0..speed`
fn random_countdown<R: RngCore>(rng: &mut R, speed: u32) -> i64 {
    if speed == 0 {
        0
    } else {
        i64::from(rng.gen_range(0..speed))
    }
}

/// Draw a blob radius skewed towards small values
///
/// The radius is `-ln(u)` for `u` uniform in `(0, 1]`, capped at `pixels`.
/// This is the same distribution as `pixels - ln(random(e^pixels))` but
/// never raises `e` to the strip length, which overflows on long strips.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn random_radius<R: RngCore>(rng: &mut R, pixels: usize) -> usize {
    let uniform = 1.0 - rng.r#gen::<f32>();
    let radius = -libm::logf(uniform);

    (radius as usize).min(pixels)
}

impl<const N: usize, const BLOBS: usize> LavaPattern<N, BLOBS> {
    pub const fn new() -> Self {
        Self {
            frame: Vec::new(),
            blobs: [Blob::HIDDEN; BLOBS],
            background: BLACK,
        }
    }

    /// The frame as drawn on the last tick
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    pub const fn blobs(&self) -> &[Blob; BLOBS] {
        &self.blobs
    }

    fn update_blobs<R: RngCore>(&mut self, rng: &mut R, a: Rgb, speed: u32) {
        let pixels = self.frame.len();
        for blob in &mut self.blobs {
            blob.countdown -= 1;
            if blob.countdown > 0 {
                continue;
            }

            if blob.is_active() {
                blob.position = None;
                blob.countdown = random_countdown(rng, speed);
            } else {
                blob.position = Some(rng.gen_range(0..pixels));
                blob.radius = random_radius(rng, pixels);
                blob.countdown = random_countdown(rng, speed);
                blob.color = expand(a, rng);
            }
        }
    }

    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn morph_frame(&mut self) {
        for pixel in &mut self.frame {
            *pixel = morph_step(*pixel, self.background);
        }

        let pixels = self.frame.len() as i64;
        for blob in &self.blobs {
            let Some(position) = blob.position else {
                continue;
            };
            let center = position as i64;
            let radius = blob.radius as i64;

            for offset in (center - radius)..=(center + radius) {
                let index = offset.rem_euclid(pixels) as usize;
                self.frame[index] = morph_step(self.frame[index], blob.color);
            }
        }
    }
}

impl<const N: usize, const BLOBS: usize> Pattern for LavaPattern<N, BLOBS> {
    fn advance<S: RenderSink, R: RngCore>(
        &mut self,
        ctx: &mut FrameContext<'_, S, R>,
        initial: bool,
        a: Rgb,
        b: Rgb,
        speed: u32,
    ) -> Duration {
        if initial {
            self.reset();
            let pixels = ctx.pixels().min(N);
            let _ = self.frame.resize(pixels, BLACK);
            self.background = expand(b, ctx.rng);
        }

        if self.frame.is_empty() {
            return LAVA_INTERVAL;
        }

        self.update_blobs(ctx.rng, a, speed);
        self.morph_frame();
        ctx.strip.draw_frame(&self.frame);

        LAVA_INTERVAL
    }

    fn reset(&mut self) {
        self.frame.clear();
        self.blobs = [Blob::HIDDEN; BLOBS];
        self.background = BLACK;
    }
}
