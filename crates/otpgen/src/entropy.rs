use crate::Result;

/// A source of cryptographically secure random bytes.
///
/// Implementations must produce uniformly distributed, unpredictable bytes
/// suitable for security-sensitive use, and must be safe to call from
/// multiple threads at once. The generator borrows a source for the duration
/// of one call and never caches bytes across calls.
pub trait EntropySource {
    /// Fills `dest` entirely with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the underlying source fails. On error,
    /// the contents of `dest` are unspecified and must not be used.
    ///
    /// [`Error::Entropy`]: crate::Error::Entropy
    fn try_fill(&self, dest: &mut [u8]) -> Result<()>;
}
