//! Byte pattern tables from RFC 3986.
//!
//! The table constants in this module are documented with the ABNF
//! notation of [RFC 2234].
//!
//! [RFC 2234]: https://datatracker.ietf.org/doc/html/rfc2234/

/// A table determining the unencoded bytes allowed in a component.
///
/// Percent-encoded octets are never matched by a table; escape sequences
/// are recognized and decoded by [`PctDecoder`](super::PctDecoder) alone.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Table {
    arr: [bool; 256],
}

impl Table {
    /// Generates a table that allows exactly the given bytes.
    ///
    /// # Panics
    ///
    /// Panics if any of the bytes equals `b'%'`.
    pub(crate) const fn gen(mut bytes: &[u8]) -> Table {
        let mut arr = [false; 256];
        while let [cur, rem @ ..] = bytes {
            assert!(*cur != b'%', "cannot allow unencoded %");
            arr[*cur as usize] = true;
            bytes = rem;
        }
        Table { arr }
    }

    /// Generates a table that allows the bytes in `[first, last]`, inclusive.
    pub(crate) const fn range(first: u8, last: u8) -> Table {
        let mut arr = [false; 256];
        let mut i = first as usize;
        while i <= last as usize {
            arr[i] = true;
            i += 1;
        }
        Table { arr }
    }

    /// Combines two tables into one.
    ///
    /// Returns a new table that allows all the bytes allowed either by
    /// `self` or by `other`.
    pub(crate) const fn or(mut self, other: &Table) -> Table {
        let mut i = 0;
        while i < 256 {
            self.arr[i] |= other.arr[i];
            i += 1;
        }
        self
    }

    /// Returns `true` if the given byte is allowed by the table.
    #[inline]
    pub(crate) const fn allows(&self, x: u8) -> bool {
        self.arr[x as usize]
    }
}

const fn gen(bytes: &[u8]) -> Table {
    Table::gen(bytes)
}

/// ALPHA = A-Z / a-z
pub(crate) const ALPHA: &Table = &Table::range(b'A', b'Z').or(&Table::range(b'a', b'z'));

/// DIGIT = 0-9
pub(crate) const DIGIT: &Table = &Table::range(b'0', b'9');

/// HEXDIG = DIGIT / "A" / "B" / "C" / "D" / "E" / "F"
///                / "a" / "b" / "c" / "d" / "e" / "f"
pub(crate) const HEXDIG: &Table = &DIGIT.or(&Table::range(b'A', b'F')).or(&Table::range(b'a', b'f'));

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
pub(crate) const SUB_DELIMS: &Table = &gen(b"!$&'()*+,;=");

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
pub(crate) const UNRESERVED: &Table = &ALPHA.or(DIGIT).or(&gen(b"-._~"));

/// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
///
/// This table matches the characters allowed after the first; the first
/// character is checked against [`ALPHA`] separately.
pub(crate) const SCHEME: &Table = &ALPHA.or(DIGIT).or(&gen(b"+-."));

/// pchar = unreserved / pct-encoded / sub-delims / ":" / "@"
pub(crate) const PCHAR: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":@"));

/// userinfo = *( unreserved / pct-encoded / sub-delims / ":" )
pub(crate) const USERINFO: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":"));

/// reg-name = *( unreserved / pct-encoded / sub-delims )
pub(crate) const REG_NAME: &Table = &UNRESERVED.or(SUB_DELIMS);

/// IPvFuture = "v" 1\*HEXDIG "." 1\*( unreserved / sub-delims / ":" )
///
/// This table matches the characters allowed in the last part.
pub(crate) const IPV_FUTURE: &Table = &UNRESERVED.or(SUB_DELIMS).or(&gen(b":"));

/// query = *( pchar / "/" / "?" )
pub(crate) const QUERY: &Table = &PCHAR.or(&gen(b"/?"));

/// fragment = *( pchar / "/" / "?" )
pub(crate) const FRAGMENT: &Table = QUERY;
