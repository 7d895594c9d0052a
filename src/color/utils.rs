use crate::color::{BLACK, CHANNEL_MAX, RANDOM, RANDOM_PRIMARY, Rgb};

/// Returns true for the two random-pick sentinels
pub fn is_sentinel(color: Rgb) -> bool {
    color == RANDOM || color == RANDOM_PRIMARY
}

/// Returns true when every channel fits in 7 bits
pub const fn is_valid(color: Rgb) -> bool {
    color.r <= CHANNEL_MAX && color.g <= CHANNEL_MAX && color.b <= CHANNEL_MAX
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix_channel(left: u8, right: u8, ratio: f32) -> u8 {
    let left = f32::from(left & CHANNEL_MAX);
    let right = f32::from(right & CHANNEL_MAX);
    let mixed = left + (right - left) * ratio;

    // Float to int casts saturate, so negative results land on zero.
    (mixed as u8).min(CHANNEL_MAX)
}

/// Linear interpolation between two colors
///
/// A ratio of `0.0` yields `left`, `1.0` yields `right`. Only the lower 7 bits
/// of each input channel are used and the result is clamped to `0x7F`, so the
/// ratio itself is left unclamped.
pub fn mix_colors(left: Rgb, right: Rgb, ratio: f32) -> Rgb {
    Rgb {
        r: mix_channel(left.r, right.r, ratio),
        g: mix_channel(left.g, right.g, ratio),
        b: mix_channel(left.b, right.b, ratio),
    }
}

/// Scale a color towards black (`brightness` from 0.0 to 1.0)
pub fn dim(color: Rgb, brightness: f32) -> Rgb {
    mix_colors(BLACK, color, brightness)
}

/// Move a single channel one unit towards `target`
#[inline]
pub const fn morph_shade(base: u8, target: u8) -> u8 {
    if base < target {
        base + 1
    } else if base > target {
        base - 1
    } else {
        base
    }
}

/// Move every channel of `base` one unit towards `target`
///
/// Repeated application never overshoots and reaches `target` after
/// [`morph_distance`] steps.
pub const fn morph_step(base: Rgb, target: Rgb) -> Rgb {
    Rgb {
        r: morph_shade(base.r, target.r),
        g: morph_shade(base.g, target.g),
        b: morph_shade(base.b, target.b),
    }
}

/// Number of [`morph_step`] calls needed to turn `base` into `target`
pub const fn morph_distance(base: Rgb, target: Rgb) -> u8 {
    let r = base.r.abs_diff(target.r);
    let g = base.g.abs_diff(target.g);
    let b = base.b.abs_diff(target.b);

    let max = if r > g { r } else { g };
    if max > b { max } else { b }
}

/// Create a color from a packed `0xRRGGBB` value
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack a color into `0xRRGGBB`
///
/// Channels are packed as stored; 7-bit values are not rescaled to 8 bits.
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    (color.r as u32) << 16 | (color.g as u32) << 8 | color.b as u32
}
