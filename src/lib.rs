//! A UUID version 7 generator with an 18-bit monotonic counter
//!
//! ```rust
//! let uuid = uuidv7::uuidv7();
//! println!("{uuid}"); // e.g., "017f22e2-79b0-7ae6-ac00-dc0c0c07398f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        counter        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|  counter  |                     rand                      |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 18-bit `counter` field accommodates the sequence counter that ensures the
//!   monotonic order of IDs generated within the same millisecond. The counter is
//!   incremented by one for each new ID generated within the same timestamp and is
//!   randomly seeded (with its most significant bit cleared) whenever the
//!   `unix_ts_ms` changes.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 56 `rand` bits are filled with a cryptographically strong random
//!   number.
//!
//! The random seeding of the counter leaves room for roughly 192 thousand IDs
//! within a single millisecond. When the counter does reach the maximum value
//! within the same timestamp, this library increments the `unix_ts_ms` instead of
//! wrapping the counter; therefore, the `unix_ts_ms` may run slightly ahead of the
//! real-time clock under sustained generation at higher rates. The stored
//! `unix_ts_ms` also never moves backwards, so the IDs generated by one generator
//! remain in strictly increasing order even when the system clock rewinds.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` integrates the library with the system clock and the thread-local
//!   random number generator and enables the [`uuidv7()`] entry point. Without
//!   `std`, this crate still provides the full generator through user-supplied
//!   time and random sources in `no_std` environments.
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of [`Uuid`] objects.
//! - `uuid` enables the conversions to and from the [`uuid`] crate's
//!   [`Uuid`](uuid::Uuid) type.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

pub mod generator;
pub use generator::{EntropyError, V7Generator};

mod entry;
#[cfg(feature = "std")]
pub use entry::uuidv7;
