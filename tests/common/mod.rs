//! Shared test infrastructure

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use myrtio_strip_patterns::pattern::{FrameContext, Pattern};
use myrtio_strip_patterns::{Duration, Instant, RenderSink, Rgb, Strip};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

/// Sink that records every latched frame
#[derive(Debug, Default)]
pub struct RecordingSink {
    pending: Vec<Rgb>,
    pub frames: Vec<Vec<Rgb>>,
    pub latch_sizes: Vec<usize>,
    pub pixel_calls: usize,
}

impl RecordingSink {
    /// Number of latched frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }
}

impl RenderSink for RecordingSink {
    fn draw_pixel(&mut self, color: Rgb) {
        self.pixel_calls += 1;
        self.pending.push(color);
    }

    fn issue_latch(&mut self, pixels: usize) {
        self.latch_sizes.push(pixels);
        self.frames.push(core::mem::take(&mut self.pending));
    }
}

pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

pub fn strip(pixels: usize) -> Strip<RecordingSink> {
    Strip::new(RecordingSink::default(), pixels).expect("valid pixel count")
}

pub const fn ms(millis: u64) -> Instant {
    Instant::from_millis(millis)
}

/// Pattern under test together with its strip and generator
pub struct Harness<P: Pattern> {
    pub pattern: P,
    pub strip: Strip<RecordingSink>,
    pub rng: ChaCha8Rng,
}

impl<P: Pattern> Harness<P> {
    pub fn new(pattern: P, pixels: usize, seed: u64) -> Self {
        Self {
            pattern,
            strip: strip(pixels),
            rng: rng(seed),
        }
    }

    pub fn advance(&mut self, initial: bool, a: Rgb, b: Rgb, speed: u32) -> Duration {
        let mut ctx = FrameContext::new(&mut self.strip, &mut self.rng);
        self.pattern.advance(&mut ctx, initial, a, b, speed)
    }

    pub fn sink(&self) -> &RecordingSink {
        self.strip.sink()
    }
}
