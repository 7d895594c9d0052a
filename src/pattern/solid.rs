//! Solid fill
//!
//! Redraws the whole strip in color A every `speed` milliseconds. With a
//! sentinel color every redraw is a new random pick.

use embassy_time::Duration;
use rand_core::RngCore;

use super::{FrameContext, Pattern};
use crate::color::{Rgb, expand};
use crate::strip::RenderSink;

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidPattern;

impl Pattern for SolidPattern {
    fn advance<S: RenderSink, R: RngCore>(
        &mut self,
        ctx: &mut FrameContext<'_, S, R>,
        _initial: bool,
        a: Rgb,
        _b: Rgb,
        speed: u32,
    ) -> Duration {
        let color = expand(a, ctx.rng);
        ctx.strip.draw_solid(color);

        Duration::from_millis(u64::from(speed))
    }
}
