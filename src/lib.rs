#![no_std]

pub mod channel;
pub mod color;
pub mod config;
pub mod error;
pub mod pattern;
pub mod scheduler;
pub mod status;
pub mod strip;
pub mod wire;

pub use channel::{PatternChannel, PatternReceiver, PatternSender};
pub use color::{CHANNEL_MAX, Rgb};
pub use config::PatternConfig;
pub use error::{ConfigError, UnsupportedError};
pub use pattern::{Pattern, PatternKind, PatternSlot};
pub use scheduler::{FrameResult, PatternScheduler};
pub use status::{format_status, parse_status};
pub use strip::{RenderSink, Strip, latch_len};

pub use embassy_time::{Duration, Instant};
