use crate::{EntropySource, Error, Result};
use rand::{TryRngCore, rngs::OsRng};

/// An [`EntropySource`] backed by the operating system's secure random
/// number generator ([`rand::rngs::OsRng`]).
///
/// `OsRng` reads directly from the OS entropy facility (`getrandom(2)` on
/// Linux, `SecRandomCopyBytes` on macOS, `BCryptGenRandom` on Windows) on
/// every call. It is never seeded or reseeded in userspace, so its output is
/// non-reproducible and suitable for one-time passwords.
///
/// This type is a zero-sized handle; it stores no RNG state and may be
/// freely copied and shared across threads. The OS serializes concurrent
/// reads of its randomness facility.
#[derive(Default, Clone, Copy, Debug)]
pub struct OsRandom;

impl EntropySource for OsRandom {
    fn try_fill(&self, dest: &mut [u8]) -> Result<()> {
        OsRng.try_fill_bytes(dest).map_err(|_| Error::Entropy)
    }
}
