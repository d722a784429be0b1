/// A result type defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All possible errors that `otpgen` can produce.
///
/// The two variants are mutually exclusive and exhaustive: a call either
/// failed local input validation before any randomness was drawn, or the
/// secure random source itself failed. Callers can branch on the variant to
/// decide whether a retry makes sense ([`Error::Entropy`] may be transient;
/// [`Error::InvalidLength`] never is without changing the input).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested token length is outside the supported bounds.
    ///
    /// Returned before the entropy source is touched; no randomness is
    /// consumed for an invalid request.
    #[error("token length must be between 1 and 1000, got {requested}")]
    InvalidLength {
        /// The length the caller asked for.
        requested: i32,
    },

    /// The operating system's secure random source reported a failure.
    ///
    /// Surfaced as-is rather than retried or masked: a failing entropy
    /// source can indicate a security-relevant platform fault, and the
    /// library never silently degrades to a weaker randomness source.
    #[error("failed to draw cryptographically secure random bytes")]
    Entropy,
}
