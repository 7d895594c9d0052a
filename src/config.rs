use crate::color::{BLACK, Rgb};
use crate::pattern::PatternKind;

/// Externally selected pattern and its parameters
///
/// The meaning of `speed` depends on the pattern: a frame period in
/// milliseconds for solid and alternate, a sweep period for pulse and cylon,
/// the walk range for flicker and the longest blob lifetime in frames for lava.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    pub kind: PatternKind,
    pub color_a: Rgb,
    pub color_b: Rgb,
    pub speed: u32,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self::new(PatternKind::Solid, BLACK, BLACK, 0)
    }
}

impl PatternConfig {
    pub const fn new(kind: PatternKind, color_a: Rgb, color_b: Rgb, speed: u32) -> Self {
        Self {
            kind,
            color_a,
            color_b,
            speed,
        }
    }
}
