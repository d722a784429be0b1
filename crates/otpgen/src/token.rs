use core::fmt;

/// A fixed-length numeric one-time-password token.
///
/// A `Token` is an immutable sequence of ASCII decimal digits whose length
/// equals the length requested at generation time. It carries no link back
/// to the entropy source or to previously generated tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    // Callers only ever receive tokens from a generator; the digits are
    // validated ASCII by construction.
    pub(crate) fn new(digits: String) -> Self {
        Self(digits)
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of digits in the token.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the token contains no digits.
    ///
    /// Generated tokens always hold at least one digit, so this only exists
    /// to round out the container-like API.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}
