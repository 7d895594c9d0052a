//! Pattern requests from other contexts
//!
//! Control surfaces often run in an interrupt or another task, while the
//! scheduler must only be touched by the loop that ticks it. Requests are
//! queued here under a critical section and applied by the scheduler between
//! frames. Only the newest queued request matters when several pile up.

use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;
use heapless::Deque;

use crate::config::PatternConfig;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub PatternConfig);

impl fmt::Display for TrySendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pattern queue is full, dropped {}", self.0)
    }
}

impl core::error::Error for TrySendError {}

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TryReceiveError;

impl fmt::Display for TryReceiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("pattern queue is empty")
    }
}

impl core::error::Error for TryReceiveError {}

/// A bounded queue of pattern requests
pub struct PatternChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<PatternConfig, SIZE>>>,
}

impl<const SIZE: usize> PatternChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> PatternSender<'_, SIZE> {
        PatternSender { channel: self }
    }

    pub const fn receiver(&self) -> PatternReceiver<'_, SIZE> {
        PatternReceiver { channel: self }
    }

    /// Queue a request, failing when the queue is full
    pub fn try_send(&self, config: PatternConfig) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(config).map_err(TrySendError)
        })
    }

    /// Queue a request, discarding the oldest one when the queue is full
    pub fn send(&self, config: PatternConfig) {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            if queue.is_full() {
                queue.pop_front();
            }
            let _ = queue.push_back(config);
        });
    }

    pub fn try_receive(&self) -> Result<PatternConfig, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Empty the queue and return the newest request
    pub fn take_latest(&self) -> Option<PatternConfig> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            let latest = queue.pop_back();
            queue.clear();
            latest
        })
    }
}

impl<const SIZE: usize> Default for PatternChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending half of a [`PatternChannel`]
#[derive(Clone, Copy)]
pub struct PatternSender<'a, const SIZE: usize> {
    channel: &'a PatternChannel<SIZE>,
}

impl<const SIZE: usize> PatternSender<'_, SIZE> {
    pub fn try_send(&self, config: PatternConfig) -> Result<(), TrySendError> {
        self.channel.try_send(config)
    }

    pub fn send(&self, config: PatternConfig) {
        self.channel.send(config);
    }
}

/// Receiving half of a [`PatternChannel`]
#[derive(Clone, Copy)]
pub struct PatternReceiver<'a, const SIZE: usize> {
    channel: &'a PatternChannel<SIZE>,
}

impl<const SIZE: usize> PatternReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Result<PatternConfig, TryReceiveError> {
        self.channel.try_receive()
    }

    pub fn take_latest(&self) -> Option<PatternConfig> {
        self.channel.take_latest()
    }
}
