//! Pattern state machines with compile-time known variants
//!
//! All patterns live in one enum so switching never allocates. Each pattern
//! implements the [`Pattern`] trait: one call renders one frame and returns
//! how long to wait before the next.

mod alternate;
mod cylon;
mod flicker;
mod lava;
mod pulse;
mod solid;

use embassy_time::Duration;
use rand_core::RngCore;

pub use alternate::AlternatePattern;
pub use cylon::CylonPattern;
pub use flicker::{FLICKER_INTERVAL, FlickerPattern};
pub use lava::{Blob, DEFAULT_BLOBS, LAVA_INTERVAL, LavaPattern};
pub use pulse::{PULSE_STEPS, PulsePattern};
pub use solid::SolidPattern;

use crate::color::Rgb;
use crate::strip::{RenderSink, Strip};

const PATTERN_NAME_SOLID: &str = "SOLID";
const PATTERN_NAME_PULSE: &str = "PULSE";
const PATTERN_NAME_CYLON: &str = "CYLON";
const PATTERN_NAME_ALTERNATE: &str = "ALTERNATE";
const PATTERN_NAME_FLICKER: &str = "FLICKER";
const PATTERN_NAME_LAVA: &str = "LAVA";

const PATTERN_ID_SOLID: u8 = 0;
const PATTERN_ID_PULSE: u8 = 1;
const PATTERN_ID_CYLON: u8 = 2;
const PATTERN_ID_ALTERNATE: u8 = 3;
const PATTERN_ID_FLICKER: u8 = 4;
const PATTERN_ID_LAVA: u8 = 5;

/// Everything a pattern may touch while rendering a frame
pub struct FrameContext<'a, S: RenderSink, R: RngCore> {
    pub strip: &'a mut Strip<S>,
    pub rng: &'a mut R,
}

impl<'a, S: RenderSink, R: RngCore> FrameContext<'a, S, R> {
    pub fn new(strip: &'a mut Strip<S>, rng: &'a mut R) -> Self {
        Self { strip, rng }
    }

    /// Number of pixels on the strip
    pub const fn pixels(&self) -> usize {
        self.strip.pixels()
    }
}

pub trait Pattern {
    /// Render one frame and return the delay until the next one
    ///
    /// `initial` is set on the first call after the pattern was (re)selected
    /// and makes the pattern start over from scratch.
    fn advance<S: RenderSink, R: RngCore>(
        &mut self,
        ctx: &mut FrameContext<'_, S, R>,
        initial: bool,
        a: Rgb,
        b: Rgb,
        speed: u32,
    ) -> Duration;

    /// Drop all per-activation state
    fn reset(&mut self) {}
}

/// Known pattern kinds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PatternKind {
    #[default]
    Solid = PATTERN_ID_SOLID,
    Pulse = PATTERN_ID_PULSE,
    Cylon = PATTERN_ID_CYLON,
    Alternate = PATTERN_ID_ALTERNATE,
    Flicker = PATTERN_ID_FLICKER,
    Lava = PATTERN_ID_LAVA,
}

impl PatternKind {
    pub const ALL: [Self; 6] = [
        Self::Solid,
        Self::Pulse,
        Self::Cylon,
        Self::Alternate,
        Self::Flicker,
        Self::Lava,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_SOLID => Self::Solid,
            PATTERN_ID_PULSE => Self::Pulse,
            PATTERN_ID_CYLON => Self::Cylon,
            PATTERN_ID_ALTERNATE => Self::Alternate,
            PATTERN_ID_FLICKER => Self::Flicker,
            PATTERN_ID_LAVA => Self::Lava,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => PATTERN_NAME_SOLID,
            Self::Pulse => PATTERN_NAME_PULSE,
            Self::Cylon => PATTERN_NAME_CYLON,
            Self::Alternate => PATTERN_NAME_ALTERNATE,
            Self::Flicker => PATTERN_NAME_FLICKER,
            Self::Lava => PATTERN_NAME_LAVA,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_SOLID => Some(Self::Solid),
            PATTERN_NAME_PULSE => Some(Self::Pulse),
            PATTERN_NAME_CYLON => Some(Self::Cylon),
            PATTERN_NAME_ALTERNATE => Some(Self::Alternate),
            PATTERN_NAME_FLICKER => Some(Self::Flicker),
            PATTERN_NAME_LAVA => Some(Self::Lava),
            _ => None,
        }
    }

    /// Fresh state for this kind on a strip of up to `N` pixels
    pub fn to_slot<const N: usize>(self) -> PatternSlot<N> {
        match self {
            Self::Solid => PatternSlot::Solid(SolidPattern),
            Self::Pulse => PatternSlot::Pulse(PulsePattern::new()),
            Self::Cylon => PatternSlot::Cylon(CylonPattern::new()),
            Self::Alternate => PatternSlot::Alternate(AlternatePattern::new()),
            Self::Flicker => PatternSlot::Flicker(FlickerPattern::new()),
            Self::Lava => PatternSlot::Lava(LavaPattern::new()),
        }
    }
}

/// Pattern slot - enum holding the state of the active pattern
///
/// `N` bounds the strip length; only the lava variant stores a frame.
#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum PatternSlot<const N: usize> {
    Solid(SolidPattern),
    Pulse(PulsePattern),
    Cylon(CylonPattern),
    Alternate(AlternatePattern),
    Flicker(FlickerPattern),
    Lava(LavaPattern<N>),
}

impl<const N: usize> Default for PatternSlot<N> {
    fn default() -> Self {
        Self::Solid(SolidPattern)
    }
}

impl<const N: usize> PatternSlot<N> {
    /// Render one frame of the held pattern
    pub fn advance<S: RenderSink, R: RngCore>(
        &mut self,
        ctx: &mut FrameContext<'_, S, R>,
        initial: bool,
        a: Rgb,
        b: Rgb,
        speed: u32,
    ) -> Duration {
        match self {
            Self::Solid(pattern) => pattern.advance(ctx, initial, a, b, speed),
            Self::Pulse(pattern) => pattern.advance(ctx, initial, a, b, speed),
            Self::Cylon(pattern) => pattern.advance(ctx, initial, a, b, speed),
            Self::Alternate(pattern) => pattern.advance(ctx, initial, a, b, speed),
            Self::Flicker(pattern) => pattern.advance(ctx, initial, a, b, speed),
            Self::Lava(pattern) => pattern.advance(ctx, initial, a, b, speed),
        }
    }

    /// Get the pattern kind for external observation
    pub const fn kind(&self) -> PatternKind {
        match self {
            Self::Solid(_) => PatternKind::Solid,
            Self::Pulse(_) => PatternKind::Pulse,
            Self::Cylon(_) => PatternKind::Cylon,
            Self::Alternate(_) => PatternKind::Alternate,
            Self::Flicker(_) => PatternKind::Flicker,
            Self::Lava(_) => PatternKind::Lava,
        }
    }
}
