//! Default generator and entry point functions

#![cfg(feature = "std")]

use crate::generator::{with_rand08, StdSystemTime, V7Generator};
use crate::Uuid;
use rand::rngs::ThreadRng;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<V7Generator<with_rand08::Adapter<ThreadRng>, StdSystemTime>> =
        Default::default();
}

/// Generates a UUIDv7 object.
///
/// This function employs a thread-local generator and guarantees the per-thread monotonic order of
/// UUIDs generated within the same millisecond. On Unix, this function resets the generator when
/// the process ID changes (i.e. upon process forks) to prevent collisions across processes.
///
/// # Panics
///
/// Panics if the thread-local random number generator fails to supply random bytes, which does not
/// occur in practice. Use [`V7Generator`] directly to handle the failure of a fallible random
/// number source explicitly.
///
/// # Examples
///
/// ```rust
/// let uuid = uuidv7::uuidv7();
/// println!("{uuid}"); // e.g., "017f22e2-79b0-7ae6-ac00-dc0c0c07398f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuidv7::uuidv7().to_string();
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub fn uuidv7() -> Uuid {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::reseed_thread_rng_upon_pid_change() {
            g.replace(Default::default());
        }

        g.borrow_mut()
            .generate()
            .expect("uuidv7: could not generate random values")
    })
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Reseeds ThreadRng immediately when the process ID changes (i.e. upon process forks),
    /// returning true if ThreadRng is reseeded or false otherwise.
    pub fn reseed_thread_rng_upon_pid_change() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            if pid == last_pid.replace(pid) {
                false
            } else {
                // As of rand v0.8.5 and rand_chacha v0.3.1, up to 63 `u32` values have to be used
                // before reseeding after a fork. See https://github.com/rust-random/rand/pull/1317
                let _: [[u32; 32]; 2] = rand::random();
                true
            }
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn reseed_thread_rng_upon_pid_change() -> bool {
        false
    }
}
