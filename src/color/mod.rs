//! 7-bit strip colors
//!
//! Channels range from `0x00` to `0x7F`. The high bit belongs to the wire
//! framing, so values with it set are never valid colors. Two of those values
//! are reserved as sentinels that patterns replace with a random pick.

mod random;
mod utils;

use smart_leds::RGB8;

pub use random::{expand, random_color, random_primary_color};
pub use utils::{
    dim, is_sentinel, is_valid, mix_colors, morph_distance, morph_shade, morph_step,
    rgb_from_u32, rgb_to_u32,
};

pub type Rgb = RGB8;

/// Largest value a channel may carry
pub const CHANNEL_MAX: u8 = 0x7F;

pub const BLACK: Rgb = Rgb { r: 0x00, g: 0x00, b: 0x00 };
pub const WHITE: Rgb = Rgb { r: 0x7F, g: 0x7F, b: 0x7F };
pub const RED: Rgb = Rgb { r: 0x7F, g: 0x00, b: 0x00 };
pub const GREEN: Rgb = Rgb { r: 0x00, g: 0x7F, b: 0x00 };
pub const BLUE: Rgb = Rgb { r: 0x00, g: 0x00, b: 0x7F };
pub const YELLOW: Rgb = Rgb { r: 0x7F, g: 0x7F, b: 0x00 };
/// Dim gray used for backlit signage
pub const SIGN: Rgb = Rgb { r: 0x5F, g: 0x5F, b: 0x5F };

/// Replaced by a color with uniformly random channels
pub const RANDOM: Rgb = Rgb { r: 0x80, g: 0x80, b: 0x80 };
/// Replaced by a color whose channels are each either off or full
pub const RANDOM_PRIMARY: Rgb = Rgb { r: 0x81, g: 0x81, b: 0x81 };
