//! Monotonic nonce generation
//!
//! Values are wall-clock milliseconds times 100 plus a repeat counter for
//! calls landing in the same millisecond, truncated to a fixed number of
//! low-order decimal digits.

use chrono::Utc;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
struct NonceState {
    last_time: Option<u64>,
    repeat_count: u64,
    last_issued: Option<u64>,
}

/// Per-client nonce source; safe to share between tasks
#[derive(Debug)]
pub struct NonceGenerator {
    digits: u32,
    state: Mutex<NonceState>,
}

impl NonceGenerator {
    /// Digits kept when none are configured
    pub const DEFAULT_DIGITS: u32 = 15;

    /// Narrowest width that holds ms*100 without wrapping
    pub const MIN_DIGITS: u32 = 15;

    /// Widest width whose modulus fits in a `u64`
    pub const MAX_DIGITS: u32 = 19;

    /// Create a generator keeping [`Self::DEFAULT_DIGITS`] digits
    pub fn new() -> Self {
        Self::with_digits(Self::DEFAULT_DIGITS)
    }

    /// Create a generator keeping `digits` low-order digits
    ///
    /// Clamped to [`Self::MIN_DIGITS`]..=[`Self::MAX_DIGITS`]; a narrower width
    /// would wrap and hand out a value below an earlier one.
    pub fn with_digits(digits: u32) -> Self {
        Self {
            digits: digits.clamp(Self::MIN_DIGITS, Self::MAX_DIGITS),
            state: Mutex::new(NonceState::default()),
        }
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Produce the next nonce; strictly greater than every earlier one
    pub fn next(&self) -> u64 {
        let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        self.next_at(millis.saturating_mul(100))
    }

    fn next_at(&self, now: u64) -> u64 {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);

        if state.last_time == Some(now) {
            state.repeat_count += 1;
        } else {
            state.repeat_count = 0;
            state.last_time = Some(now);
        }

        // More than 100 calls in one millisecond, or a clock stepping back,
        // would otherwise hand out a value already issued.
        let mut value = now + state.repeat_count;
        if let Some(prev) = state.last_issued {
            if value <= prev {
                value = prev + 1;
            }
        }
        state.last_issued = Some(value);

        value % 10u64.pow(self.digits)
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
