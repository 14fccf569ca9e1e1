//! Error types.

/// Returns immediately with an error.
macro_rules! err {
    ($index:expr, $kind:ident) => {
        return Err(crate::error::ParseError {
            index: $index,
            kind: crate::error::ParseErrorKind::$kind,
        })
    };
}

pub(crate) use err;

/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Invalid scheme component.
    ///
    /// The scheme is empty, does not start with a letter, or contains a
    /// character outside `ALPHA / DIGIT / "+" / "-" / "."`.
    ///
    /// The error index points to the offending character, or to the start
    /// of the input for an empty scheme.
    InvalidScheme,
    /// Unexpected character that is not allowed by the component's syntax.
    ///
    /// The error index points to the character.
    IllegalCharacter,
    /// Invalid percent-encoded octet that is either non-hexadecimal or incomplete.
    ///
    /// The error index points to the percent character "%" of the octet.
    InvalidPercentEncoding,
    /// Malformed host subcomponent.
    ///
    /// An IP literal is unterminated or followed by garbage, or a registered
    /// name contains a disallowed character.
    InvalidHost,
    /// The text between square brackets fails the IPv6 address grammar.
    ///
    /// The error index points to the start of the address text.
    InvalidIpv6Address,
    /// The port subcomponent contains a non-digit or exceeds 65535.
    InvalidPort,
}

/// An error occurred when parsing a URI reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
