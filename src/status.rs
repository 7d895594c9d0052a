//! Status text for control surfaces
//!
//! The active configuration is reported as
//! `<PATTERN>,0x<RRGGBB>,0x<RRGGBB>,<speed>`, e.g. `PULSE,0x7F0000,0x00007F,55`.
//! Colors are packed from their raw 7-bit channels, so full red reads `7F`
//! rather than `FF`. Setting a pattern from text is not supported.

use core::fmt::{self, Write};

use heapless::String;

use crate::color::rgb_to_u32;
use crate::config::PatternConfig;
use crate::error::UnsupportedError;

/// Longest possible status line: `ALTERNATE,0x818181,0x818181,4294967295`
pub const STATUS_CAPACITY: usize = 40;

impl fmt::Display for PatternConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},0x{:06X},0x{:06X},{}",
            self.kind.as_str(),
            rgb_to_u32(self.color_a),
            rgb_to_u32(self.color_b),
            self.speed
        )
    }
}

/// Render the status line of `config`
pub fn format_status(config: &PatternConfig) -> String<STATUS_CAPACITY> {
    let mut text = String::new();
    // Cannot overflow, the capacity covers the longest line.
    let _ = write!(text, "{config}");
    text
}

/// Parse a status line back into a configuration
///
/// Always fails: patterns are only selected through the typed API.
pub fn parse_status(_text: &str) -> Result<PatternConfig, UnsupportedError> {
    Err(UnsupportedError)
}
