
use crate::{EntropySource, Error, OsRandom, Result, Token};

/// Minimum number of digits a token may have.
pub const MIN_LENGTH: i32 = 1;
/// Maximum number of digits a token may have.
pub const MAX_LENGTH: i32 = 1000;
/// Number of digits produced by [`generate_default`] and
/// [`TokenGenerator::generate_default`].
pub const DEFAULT_LENGTH: i32 = 6;

// Largest multiple of 10 representable in a byte. Bytes at or above this
// bound are rejected and redrawn so that every accepted value maps onto each
// digit exactly 25 times.
const REJECTION_BOUND: u8 = 250;

// Scratch size for batched entropy draws. Large enough that typical OTP
// lengths need a single fill even with rejections.
const FILL_CHUNK: usize = 128;

/// A numeric OTP token generator over an [`EntropySource`].
///
/// The generator is stateless: it holds only the entropy source, caches no
/// randomness between calls, and performs no I/O or logging. It is `Send`
/// and `Sync` whenever its source is, and concurrent calls produce
/// statistically independent tokens.
///
/// Digits are produced by rejection sampling (see [`Self::generate`]), so
/// every digit is exactly uniform over `0..=9`. The faster single-pass
/// `byte % 10` mapping is deliberately not offered: it gives digits 0
/// through 5 an extra 1/256 of probability each, and this crate's contract
/// is bias-free output.
///
/// # Example
/// ```
/// use otpgen::{OsRandom, TokenGenerator};
///
/// let generator = TokenGenerator::new(OsRandom);
/// let token = generator.generate(6)?;
/// assert_eq!(token.len(), 6);
/// # Ok::<(), otpgen::Error>(())
/// ```
pub struct TokenGenerator<R: EntropySource> {
    rng: R,
}

impl<R: EntropySource> TokenGenerator<R> {
    /// Creates a new [`TokenGenerator`] with the provided entropy source.
    ///
    /// # Parameters
    /// - `rng`: An [`EntropySource`] used to draw secure random bytes
    ///
    /// # Example
    /// ```
    /// use otpgen::{OsRandom, TokenGenerator};
    ///
    /// let generator = TokenGenerator::new(OsRandom);
    /// ```
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a cryptographically secure numeric token of `length`
    /// digits.
    ///
    /// The length is validated before the entropy source is touched, so an
    /// invalid request consumes no randomness. Valid requests draw random
    /// bytes in batches and convert each byte to a digit by rejection
    /// sampling: a byte `b` is accepted iff `b < 250` and yields the digit
    /// `b % 10`; bytes in `250..=255` are discarded and redrawn. Every
    /// accepted byte therefore maps onto each digit exactly 25 times, which
    /// makes the digits exactly uniform and mutually independent at the cost
    /// of a variable number of raw draws (expected ~1.024 bytes per digit).
    ///
    /// # Example
    /// ```
    /// use otpgen::{OsRandom, TokenGenerator};
    ///
    /// let generator = TokenGenerator::new(OsRandom);
    /// let token = generator.generate(8)?;
    /// assert_eq!(token.len(), 8);
    /// assert!(token.as_str().chars().all(|c| c.is_ascii_digit()));
    /// # Ok::<(), otpgen::Error>(())
    /// ```
    ///
    /// # Errors
    /// - [`Error::InvalidLength`]: `length` is outside
    ///   [`MIN_LENGTH`]`..=`[`MAX_LENGTH`]
    /// - [`Error::Entropy`]: the entropy source failed
    pub fn generate(&self, length: i32) -> Result<Token> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(Error::InvalidLength { requested: length });
        }
        let length = length as usize;

        let mut digits = String::with_capacity(length);
        let mut buf = [0u8; FILL_CHUNK];
        while digits.len() < length {
            // Ask for exactly the number of digits still missing, so an
            // all-accepted round never over-draws.
            let chunk = &mut buf[..(length - digits.len()).min(FILL_CHUNK)];
            self.rng.try_fill(chunk)?;
            for &byte in chunk.iter() {
                if byte < REJECTION_BOUND {
                    digits.push(char::from(b'0' + byte % 10));
                }
            }
        }
        Ok(Token::new(digits))
    }

    /// Generates a token of [`DEFAULT_LENGTH`] (6) digits.
    ///
    /// Exactly equivalent to `generate(6)`.
    ///
    /// # Errors
    /// - [`Error::Entropy`]: the entropy source failed
    pub fn generate_default(&self) -> Result<Token> {
        self.generate(DEFAULT_LENGTH)
    }
}

/// Generates a cryptographically secure numeric token of `length` digits
/// using the operating system's entropy source.
///
/// Convenience wrapper over [`TokenGenerator`] with [`OsRandom`].
///
/// # Example
/// ```
/// use otpgen::generate;
///
/// let token = generate(6)?;
/// assert_eq!(token.len(), 6);
/// # Ok::<(), otpgen::Error>(())
/// ```
///
/// # Errors
/// - [`Error::InvalidLength`]: `length` is outside
///   [`MIN_LENGTH`]`..=`[`MAX_LENGTH`]
/// - [`Error::Entropy`]: the OS entropy source failed
pub fn generate(length: i32) -> Result<Token> {
    TokenGenerator::new(OsRandom).generate(length)
}

/// Generates a 6-digit token using the operating system's entropy source.
///
/// # Example
/// ```
/// use otpgen::generate_default;
///
/// let token = generate_default()?;
/// assert_eq!(token.len(), 6);
/// # Ok::<(), otpgen::Error>(())
/// ```
///
/// # Errors
/// - [`Error::Entropy`]: the OS entropy source failed
pub fn generate_default() -> Result<Token> {
    TokenGenerator::new(OsRandom).generate_default()
}
