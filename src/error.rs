//! Error types
//!
//! Pattern rendering itself cannot fail. Errors only surface while wiring a
//! strip up and on the unsupported half of the status codec.

use core::fmt;

/// Rejected strip configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A strip needs at least one pixel
    NoPixels,
    /// The pixel count exceeds the compile-time capacity
    TooManyPixels { pixels: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPixels => f.write_str("strip has no pixels"),
            Self::TooManyPixels { pixels, capacity } => {
                write!(f, "strip has {pixels} pixels, capacity is {capacity}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Returned by operations this crate deliberately does not implement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnsupportedError;

impl fmt::Display for UnsupportedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("operation is not supported")
    }
}

impl core::error::Error for UnsupportedError {}
