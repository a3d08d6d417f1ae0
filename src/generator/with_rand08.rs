//! Integration with `rand` (v0.8) crate.

use super::{EntropyError, RandSource, V7Generator};
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.0.try_fill_bytes(dest).map_err(|_| EntropyError {})
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<T: RngCore> V7Generator<Adapter<T>, super::StdSystemTime> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate, reading the timestamp from the system clock.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuidv7::V7Generator;
    ///
    /// let mut g = V7Generator::with_rand08(rand::thread_rng());
    /// println!("{}", g.generate().expect("entropy unavailable"));
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::with_rand_and_time_sources(Adapter(rng), super::StdSystemTime)
    }
}
