use rand::Rng;
use rand_core::RngCore;

use crate::color::{CHANNEL_MAX, RANDOM, RANDOM_PRIMARY, Rgb};

/// Pick a color with every channel uniform in `0..=0x7F`
///
/// Independent channels lean towards a muddy, dim white more often than one
/// might expect.
pub fn random_color<R: RngCore>(rng: &mut R) -> Rgb {
    Rgb {
        r: rng.gen_range(0..=CHANNEL_MAX),
        g: rng.gen_range(0..=CHANNEL_MAX),
        b: rng.gen_range(0..=CHANNEL_MAX),
    }
}

/// Pick a color with every channel either fully off or fully on
pub fn random_primary_color<R: RngCore>(rng: &mut R) -> Rgb {
    let mut channel = || if rng.gen_bool(0.5) { CHANNEL_MAX } else { 0 };
    Rgb {
        r: channel(),
        g: channel(),
        b: channel(),
    }
}

/// Resolve a sentinel into a concrete color
///
/// Literal colors are returned untouched and draw nothing from `rng`. Callers
/// hold on to the result for as long as the colored thing lives, so a random
/// pick stays stable instead of changing every frame.
pub fn expand<R: RngCore>(color: Rgb, rng: &mut R) -> Rgb {
    if color == RANDOM {
        random_color(rng)
    } else if color == RANDOM_PRIMARY {
        random_primary_color(rng)
    } else {
        color
    }
}
