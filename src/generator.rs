//! UUIDv7 generator and related types.

#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

use crate::Uuid;

pub mod with_rand08;

/// A trait that defines the wall clock interface for [`V7Generator`].
pub trait TimeSource {
    /// Returns the current time as the number of milliseconds elapsed since the Unix epoch.
    ///
    /// The readings do not need to be monotonic. The generator tolerates a reading that is equal
    /// to or smaller than a preceding one by reusing the largest timestamp used so far.
    fn unix_ts_ms(&mut self) -> u64;
}

/// The default [`TimeSource`] that reads the system clock through [`std::time::SystemTime`].
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

#[cfg(feature = "std")]
impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_millis() as u64
    }
}

/// A trait that defines the random number source interface for [`V7Generator`].
pub trait RandSource {
    /// Fills `dest` with cryptographically strong random bytes, or returns [`EntropyError`] if
    /// the underlying source cannot supply them.
    ///
    /// Implementations must not fall back to a weaker source of randomness; the random bits are
    /// what guarantees the uniqueness of IDs generated at the same timestamp by independent
    /// generators.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Error generating a UUID because the random number source could not supply random bytes.
///
/// A call that fails with this error leaves the generator state untouched and has no effect on
/// the IDs generated by subsequent calls.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EntropyError {}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not generate random values")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for EntropyError {}

const MAX_COUNTER: u32 = (1 << 18) - 1;

/// Represents a UUIDv7 generator that encapsulates a counter and guarantees the monotonic order
/// of UUIDs generated within the same millisecond.
///
/// The generator offers the interface to customize the random number source and the wall clock
/// through the [`RandSource`] and [`TimeSource`] traits. It also helps control the scope of
/// guaranteed order of the generated UUIDs: a generator guarantees the order only for the UUIDs
/// it generated itself. The following example guarantees the process-wide (cross-thread)
/// monotonicity using Rust's standard synchronization mechanism.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::{sync, thread};
/// use uuidv7::V7Generator;
///
/// let g = sync::Arc::new(sync::Mutex::new(V7Generator::with_rand08(OsRng)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 let uuid = g.lock().unwrap().generate().expect("entropy unavailable");
///                 println!("{uuid} by thread {i}");
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Generator<R, T> {
    /// The `unix_ts_ms` used by the last generated UUID, which never moves backwards for the
    /// life of the generator.
    timestamp: u64,

    /// The current 18-bit sequence counter value.
    counter: u32,

    /// The random number source used by the generator.
    rand_source: R,

    /// The wall clock used by the generator.
    time_source: T,
}

impl<R: RandSource, T: TimeSource> V7Generator<R, T> {
    /// Creates a generator instance with the specified random number and time sources.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            timestamp: 0,
            counter: 0,
            rand_source,
            time_source,
        }
    }

    /// Generates a new UUIDv7 object from the current time source reading.
    pub fn generate(&mut self) -> Result<Uuid, EntropyError> {
        let unix_ts_ms = self.time_source.unix_ts_ms();
        self.generate_core(unix_ts_ms)
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// When `unix_ts_ms` moves past the largest timestamp used so far, the counter field is
    /// reseeded with random bits, with its most significant bit cleared to leave room for the
    /// roughly 192 thousand in-tick increments that may follow. Otherwise, the counter is
    /// incremented under the stored timestamp, and a counter overflow is translated into an
    /// increment of the stored timestamp; either way, the produced UUID is strictly greater than
    /// the preceding one even if `unix_ts_ms` is smaller than the preceding UUID's.
    ///
    /// # Panics
    ///
    /// Panics if `unix_ts_ms` is not a 48-bit unsigned integer.
    pub fn generate_core(&mut self, unix_ts_ms: u64) -> Result<Uuid, EntropyError> {
        assert!(
            unix_ts_ms < 1 << 48,
            "`unix_ts_ms` must be a 48-bit unsigned integer"
        );

        let mut bytes = [0u8; 16];
        if unix_ts_ms > self.timestamp {
            // fill everything after the timestamp with random bytes
            self.rand_source.fill_bytes(&mut bytes[6..])?;

            // clear the most significant counter bit to guard against a counter rollover within
            // the upcoming millisecond
            bytes[6] &= 0xf7;

            // read the randomly seeded counter bits from their field positions
            self.counter = u32::from(bytes[6] & 0x0f) << 14
                | u32::from(bytes[7]) << 6
                | u32::from(bytes[8] & 0x3f);
            self.timestamp = unix_ts_ms;
        } else {
            // Time did not move forward; count up under the stored timestamp, translating a
            // counter overflow into a timestamp increment. The new state is computed first and
            // committed only after the random fill succeeds.
            let (counter, timestamp) = if self.counter < MAX_COUNTER {
                (self.counter + 1, self.timestamp)
            } else {
                (0, self.timestamp + 1)
            };

            // fill everything after the timestamp and counter with random bytes
            self.rand_source.fill_bytes(&mut bytes[9..])?;
            self.counter = counter;
            self.timestamp = timestamp;

            bytes[6] = (self.counter >> 14) as u8; // counter bits 17-14
            bytes[7] = (self.counter >> 6) as u8; // counter bits 13-6
            bytes[8] = self.counter as u8; // counter bits 5-0
        }

        bytes[0] = (self.timestamp >> 40) as u8;
        bytes[1] = (self.timestamp >> 32) as u8;
        bytes[2] = (self.timestamp >> 24) as u8;
        bytes[3] = (self.timestamp >> 16) as u8;
        bytes[4] = (self.timestamp >> 8) as u8;
        bytes[5] = self.timestamp as u8;
        bytes[6] = 0x70 | (bytes[6] & 0x0f); // version 0111
        bytes[8] = 0x80 | (bytes[8] & 0x3f); // variant 10
        Ok(Uuid::from(bytes))
    }
}
