//! Cooperative pattern scheduling
//!
//! The scheduler never sleeps. The caller polls [`PatternScheduler::tick`]
//! with the current time; the scheduler renders at most one frame per call,
//! and only once the frame is due.

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::String;
use rand_core::RngCore;

use crate::channel::PatternReceiver;
use crate::config::PatternConfig;
use crate::error::{ConfigError, UnsupportedError};
use crate::pattern::{FrameContext, PatternSlot};
use crate::status::{STATUS_CAPACITY, format_status, parse_status};
use crate::strip::{RenderSink, Strip};

/// Result of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameResult {
    /// Whether a frame was rendered during this tick.
    pub rendered: bool,
    /// The instant the next frame is due.
    pub next_deadline: Instant,
    /// How long until the next frame (zero if already behind schedule).
    pub sleep_duration: Duration,
}

/// Drives the active pattern on one strip.
///
/// `MAX_PIXELS` bounds the strip length for the patterns that keep a frame.
///
/// # Usage
///
/// ```ignore
/// let strip = Strip::new(sink, 60)?;
/// let mut scheduler = PatternScheduler::<_, _, 60>::new(strip, rng)?;
/// scheduler.set_pattern(PatternConfig::new(PatternKind::Pulse, RED, BLUE, 2_000));
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(millis()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct PatternScheduler<S: RenderSink, R: RngCore, const MAX_PIXELS: usize> {
    strip: Strip<S>,
    rng: R,
    config: PatternConfig,
    slot: PatternSlot<MAX_PIXELS>,
    /// `None` until the first frame of the active pattern
    next_due: Option<Instant>,
}

impl<S: RenderSink, R: RngCore, const MAX_PIXELS: usize> PatternScheduler<S, R, MAX_PIXELS> {
    /// Create a scheduler showing the default solid black pattern.
    ///
    /// Fails if the strip is longer than `MAX_PIXELS`.
    pub fn new(strip: Strip<S>, rng: R) -> Result<Self, ConfigError> {
        if strip.pixels() > MAX_PIXELS {
            return Err(ConfigError::TooManyPixels {
                pixels: strip.pixels(),
                capacity: MAX_PIXELS,
            });
        }

        let config = PatternConfig::default();
        Ok(Self {
            strip,
            rng,
            config,
            slot: config.kind.to_slot(),
            next_due: None,
        })
    }

    /// Switch to a new configuration.
    ///
    /// Discards all state of the running pattern; the next tick renders
    /// immediately and starts the pattern over.
    pub fn set_pattern(&mut self, config: PatternConfig) {
        #[cfg(feature = "esp32-log")]
        println!("[PatternScheduler.set_pattern] switching to {}", config);

        self.config = config;
        self.slot = config.kind.to_slot();
        self.next_due = None;
    }

    /// Apply the newest request queued on `requests`, if any.
    ///
    /// Returns true when the pattern was switched.
    pub fn apply_pending<const SIZE: usize>(
        &mut self,
        requests: &PatternReceiver<'_, SIZE>,
    ) -> bool {
        match requests.take_latest() {
            Some(config) => {
                self.set_pattern(config);
                true
            }
            None => false,
        }
    }

    /// Render the next frame if it is due.
    ///
    /// Calls before the deadline change nothing. A due call renders exactly
    /// one frame and pushes the deadline out by the delay the pattern asks
    /// for, counted from the previous deadline rather than from `now`.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let initial = self.next_due.is_none();
        let due = *self.next_due.get_or_insert(now);

        if now < due {
            return FrameResult {
                rendered: false,
                next_deadline: due,
                sleep_duration: due.saturating_duration_since(now),
            };
        }

        let mut ctx = FrameContext::new(&mut self.strip, &mut self.rng);
        let delay = self.slot.advance(
            &mut ctx,
            initial,
            self.config.color_a,
            self.config.color_b,
            self.config.speed,
        );

        let next = due + delay;
        self.next_due = Some(next);

        FrameResult {
            rendered: true,
            next_deadline: next,
            sleep_duration: next.saturating_duration_since(now),
        }
    }

    /// The active configuration.
    pub const fn config(&self) -> &PatternConfig {
        &self.config
    }

    /// State of the active pattern.
    pub const fn slot(&self) -> &PatternSlot<MAX_PIXELS> {
        &self.slot
    }

    /// The instant the next frame is due, `None` before the first frame.
    pub const fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Status line of the active configuration.
    pub fn status(&self) -> String<STATUS_CAPACITY> {
        format_status(&self.config)
    }

    /// Select a pattern from a status line.
    ///
    /// Not supported; always fails and leaves the active pattern alone.
    pub fn set_status(&mut self, text: &str) -> Result<(), UnsupportedError> {
        let config = parse_status(text)?;
        self.set_pattern(config);
        Ok(())
    }

    pub const fn strip(&self) -> &Strip<S> {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut Strip<S> {
        &mut self.strip
    }

    /// Release the strip and the random generator.
    pub fn into_parts(self) -> (Strip<S>, R) {
        (self.strip, self.rng)
    }
}
