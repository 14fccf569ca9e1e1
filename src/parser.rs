//! URI reference parser.

use crate::{
    encoding::{self, table::*, PctDecoder},
    error::{err, ParseError},
    Uri,
};
use alloc::{string::String, vec::Vec};

type Result<T> = core::result::Result<T, ParseError>;

pub(crate) fn parse(input: &str) -> Result<Uri> {
    let mut parser = Parser {
        text: input,
        pos: 0,
        out: Uri::default(),
    };

    parser.parse_scheme()?;
    if parser.read_str("//") {
        parser.parse_authority()?;
    }
    parser.parse_path()?;
    parser.parse_query_and_fragment()?;
    debug_assert!(!parser.has_remaining());

    // An authority followed by nothing is equivalent to one followed by "/".
    if parser.out.host.is_some() && parser.out.path.is_empty() {
        parser.out.path.push(String::new());
    }
    Ok(parser.out)
}

/// URI reference parser.
///
/// # Invariants
///
/// `pos <= text.len()`, `pos` is non-decreasing and always lands on an
/// ASCII delimiter boundary.
struct Parser<'a> {
    text: &'a str,
    pos: usize,
    out: Uri,
}

/// Host subcomponent parser state.
///
/// One state per byte class of RFC 3986 section 3.2.2; `PercentEscape`
/// carries the live octet decoder for a reg-name escape.
enum HostState {
    Start,
    RegNameOrIpv4,
    PercentEscape {
        decoder: PctDecoder,
        escape_start: usize,
    },
    IpLiteralOpen,
    Ipv6Body {
        body_start: usize,
    },
    IpvFutureVersion {
        seen_digit: bool,
    },
    IpvFutureBody {
        nonempty: bool,
    },
    AfterIpLiteral,
    Port,
}

impl<'a> Parser<'a> {
    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    fn len(&self) -> usize {
        self.text.len()
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.len()
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.bytes()[self.pos..].starts_with(s.as_bytes()) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Returns the index of the first of the given delimiters at or after
    /// `pos`, or the end of the input.
    fn find_delimiter(&self, delimiters: &[u8]) -> usize {
        self.bytes()[self.pos..]
            .iter()
            .position(|x| delimiters.contains(x))
            .map_or(self.len(), |n| self.pos + n)
    }

    /// Extracts and validates the scheme, if one is present.
    ///
    /// The search for the `:` delimiter is bounded by the first `/` so that
    /// a colon inside an authority or path is never taken for the scheme
    /// delimiter. A relative reference has no scheme at all.
    fn parse_scheme(&mut self) -> Result<()> {
        let bound = self
            .bytes()
            .iter()
            .position(|&x| x == b'/')
            .unwrap_or(self.len());
        let Some(colon) = self.bytes()[..bound].iter().position(|&x| x == b':') else {
            return Ok(());
        };

        let scheme = &self.bytes()[..colon];
        if !scheme.first().map_or(false, u8::is_ascii_alphabetic) {
            err!(0, InvalidScheme);
        }
        for (i, &x) in scheme.iter().enumerate().skip(1) {
            if !SCHEME.allows(x) {
                err!(i, InvalidScheme);
            }
        }

        // Schemes are case-insensitive (RFC 3986 section 3.1).
        let mut scheme = String::from(&self.text[..colon]);
        scheme.make_ascii_lowercase();
        self.out.scheme = Some(scheme);
        self.pos = colon + 1;
        Ok(())
    }

    /// Parses the authority component, after the `//` marker.
    fn parse_authority(&mut self) -> Result<()> {
        let start = self.pos;
        let end = self.find_delimiter(b"/?#");

        // Userinfo ends at the last "@" in the authority; an "@" in the
        // userinfo itself must be percent-encoded.
        let mut host_start = start;
        if let Some(at) = self.bytes()[start..end].iter().rposition(|&x| x == b'@') {
            let at = start + at;
            self.out.userinfo = Some(encoding::decode(&self.bytes()[start..at], USERINFO, start)?);
            host_start = at + 1;
        }

        self.parse_host_and_port(host_start, end)?;
        self.pos = end;
        Ok(())
    }

    /// Runs the host state machine over `text[start..end]`.
    fn parse_host_and_port(&mut self, start: usize, end: usize) -> Result<()> {
        let bytes = self.bytes();
        let mut state = HostState::Start;
        let mut host = Vec::new();
        let mut port_start = None;
        let mut is_reg_name = true;

        let mut i = start;
        while i < end {
            let x = bytes[i];
            state = match state {
                HostState::Start => {
                    if x == b'[' {
                        is_reg_name = false;
                        i += 1;
                        HostState::IpLiteralOpen
                    } else {
                        // Reprocessed below; reg-names are case-insensitive
                        // and lower-cased once complete.
                        HostState::RegNameOrIpv4
                    }
                }
                HostState::RegNameOrIpv4 => match x {
                    b'%' => {
                        let next = HostState::PercentEscape {
                            decoder: PctDecoder::new(),
                            escape_start: i,
                        };
                        i += 1;
                        next
                    }
                    b':' => {
                        port_start = Some(i + 1);
                        i += 1;
                        HostState::Port
                    }
                    _ if REG_NAME.allows(x) => {
                        host.push(x);
                        i += 1;
                        HostState::RegNameOrIpv4
                    }
                    _ => err!(i, InvalidHost),
                },
                HostState::PercentEscape {
                    mut decoder,
                    escape_start,
                } => {
                    if !decoder.feed(x) {
                        err!(escape_start, InvalidPercentEncoding);
                    }
                    i += 1;
                    if decoder.is_done() {
                        host.push(decoder.decoded_byte());
                        HostState::RegNameOrIpv4
                    } else {
                        HostState::PercentEscape {
                            decoder,
                            escape_start,
                        }
                    }
                }
                HostState::IpLiteralOpen => {
                    if matches!(x, b'v' | b'V') {
                        host.push(x);
                        i += 1;
                        HostState::IpvFutureVersion { seen_digit: false }
                    } else {
                        HostState::Ipv6Body { body_start: i }
                    }
                }
                HostState::Ipv6Body { body_start } => {
                    if x == b']' {
                        if !is_valid_ipv6(&bytes[body_start..i]) {
                            err!(body_start, InvalidIpv6Address);
                        }
                        host.extend_from_slice(&bytes[body_start..i]);
                        i += 1;
                        HostState::AfterIpLiteral
                    } else {
                        i += 1;
                        HostState::Ipv6Body { body_start }
                    }
                }
                HostState::IpvFutureVersion { seen_digit } => {
                    if HEXDIG.allows(x) {
                        host.push(x);
                        i += 1;
                        HostState::IpvFutureVersion { seen_digit: true }
                    } else if x == b'.' && seen_digit {
                        host.push(x);
                        i += 1;
                        HostState::IpvFutureBody { nonempty: false }
                    } else {
                        err!(i, InvalidHost);
                    }
                }
                HostState::IpvFutureBody { nonempty } => {
                    if x == b']' {
                        if !nonempty {
                            err!(i, InvalidHost);
                        }
                        i += 1;
                        HostState::AfterIpLiteral
                    } else if IPV_FUTURE.allows(x) {
                        host.push(x);
                        i += 1;
                        HostState::IpvFutureBody { nonempty: true }
                    } else {
                        err!(i, InvalidHost);
                    }
                }
                HostState::AfterIpLiteral => {
                    if x == b':' {
                        port_start = Some(i + 1);
                        i += 1;
                        HostState::Port
                    } else {
                        err!(i, InvalidHost);
                    }
                }
                HostState::Port => {
                    if x.is_ascii_digit() {
                        i += 1;
                        HostState::Port
                    } else {
                        err!(i, InvalidPort);
                    }
                }
            };
        }

        match state {
            HostState::Start
            | HostState::RegNameOrIpv4
            | HostState::AfterIpLiteral
            | HostState::Port => {}
            HostState::PercentEscape { escape_start, .. } => {
                err!(escape_start, InvalidPercentEncoding)
            }
            // Unterminated IP literal.
            _ => err!(end, InvalidHost),
        }

        let mut host = String::from_utf8(host).map_err(|_| ParseError {
            index: start,
            kind: crate::error::ParseErrorKind::IllegalCharacter,
        })?;
        if is_reg_name {
            host.make_ascii_lowercase();
        }
        self.out.host = Some(host);

        if let Some(port_start) = port_start {
            let digits = &self.text[port_start..end];
            if !digits.is_empty() {
                match digits.parse::<u16>() {
                    Ok(port) => self.out.port = Some(port),
                    Err(_) => err!(port_start, InvalidPort),
                }
            }
        }
        Ok(())
    }

    /// Splits the path into decoded segments.
    ///
    /// A leading empty segment marks an absolute path; `"/"` alone becomes a
    /// single empty segment, and an empty path stays an empty sequence.
    fn parse_path(&mut self) -> Result<()> {
        let start = self.pos;
        let end = self.find_delimiter(b"?#");
        let raw = &self.bytes()[start..end];

        if raw == b"/" {
            self.out.path.push(String::new());
        } else if !raw.is_empty() {
            let mut seg_start = 0;
            loop {
                let seg_end = raw[seg_start..]
                    .iter()
                    .position(|&x| x == b'/')
                    .map_or(raw.len(), |n| seg_start + n);
                self.out.path.push(encoding::decode(
                    &raw[seg_start..seg_end],
                    PCHAR,
                    start + seg_start,
                )?);
                if seg_end == raw.len() {
                    break;
                }
                seg_start = seg_end + 1;
            }
        }
        self.pos = end;
        Ok(())
    }

    /// Parses the query and fragment, keeping "present but empty" distinct
    /// from "absent".
    fn parse_query_and_fragment(&mut self) -> Result<()> {
        if self.read_str("?") {
            let start = self.pos;
            let end = self.find_delimiter(b"#");
            self.out.query = Some(encoding::decode(
                &self.bytes()[start..end],
                QUERY,
                start,
            )?);
            self.pos = end;
        }
        if self.read_str("#") {
            let start = self.pos;
            self.out.fragment = Some(encoding::decode(
                &self.bytes()[start..],
                FRAGMENT,
                start,
            )?);
            self.pos = self.len();
        }
        Ok(())
    }
}

/// IPv6 address segment classes, after the address grammar of
/// RFC 3986 section 3.2.2.
enum Seg {
    // *1":" 1*4HEXDIG
    Normal(bool),
    // "::"
    Ellipsis,
    // *1":" 1*4HEXDIG "." opening a dotted-decimal IPv4 tail
    MaybeV4(bool),
    // ":"
    SingleColon,
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Reader { bytes, pos: 0 }
    }

    fn has_remaining(&self) -> bool {
        self.pos < self.bytes.len()
    }

    fn peek(&self, i: usize) -> Option<u8> {
        self.bytes.get(self.pos + i).copied()
    }

    fn skip(&mut self, n: usize) {
        self.pos += n;
        debug_assert!(self.pos <= self.bytes.len());
    }

    fn read_str(&mut self, s: &str) -> bool {
        if self.bytes[self.pos..].starts_with(s.as_bytes()) {
            self.skip(s.len());
            true
        } else {
            false
        }
    }

    fn read_v6(&mut self) -> bool {
        let mut ellipsis_i = 8;

        let mut i = 0;
        while i < 8 {
            match self.read_v6_segment() {
                Some(Seg::Normal(colon)) => {
                    if colon == (i == 0 || i == ellipsis_i) {
                        // Leading colon, triple colons, or no colon.
                        return false;
                    }
                    i += 1;
                }
                Some(Seg::Ellipsis) => {
                    if ellipsis_i != 8 {
                        // Multiple ellipses.
                        return false;
                    }
                    ellipsis_i = i;
                }
                Some(Seg::MaybeV4(colon)) => {
                    if i > 6 || colon == (i == ellipsis_i) {
                        // Not enough space, triple colons, or no colon.
                        return false;
                    }
                    if !self.read_v4() {
                        return false;
                    }
                    i += 2;
                    break;
                }
                Some(Seg::SingleColon) => return false,
                None => break,
            }
        }

        if ellipsis_i == 8 {
            // No ellipsis: exactly eight groups.
            i == 8
        } else {
            // With an ellipsis the address must elide at least one group.
            i < 8
        }
    }

    fn read_v6_segment(&mut self) -> Option<Seg> {
        let colon = self.read_str(":");
        if !self.has_remaining() {
            return colon.then_some(Seg::SingleColon);
        }

        let first = self.peek(0).unwrap();
        if !first.is_ascii_hexdigit() {
            return colon.then(|| {
                if first == b':' {
                    self.skip(1);
                    Seg::Ellipsis
                } else {
                    Seg::SingleColon
                }
            });
        }

        let mut i = 1;
        while i < 4 {
            let Some(x) = self.peek(i) else {
                self.skip(i);
                return Some(Seg::Normal(colon));
            };
            if x.is_ascii_hexdigit() {
                i += 1;
            } else if x == b'.' {
                return Some(Seg::MaybeV4(colon));
            } else {
                break;
            }
        }
        self.skip(i);
        Some(Seg::Normal(colon))
    }

    fn read_v4(&mut self) -> bool {
        if !self.read_v4_octet() {
            return false;
        }
        for _ in 0..3 {
            if !self.read_str(".") || !self.read_v4_octet() {
                return false;
            }
        }
        true
    }

    // dec-octet: 0-255, no leading zeros.
    fn read_v4_octet(&mut self) -> bool {
        let Some(first) = self.peek_digit(0) else {
            return false;
        };
        if first == 0 {
            self.skip(1);
            return true;
        }

        let mut value = first;
        let mut i = 1;
        while i < 3 {
            match self.peek_digit(i) {
                Some(x) => {
                    value = value * 10 + x;
                    i += 1;
                }
                None => break,
            }
        }
        self.skip(i);
        value <= 255
    }

    fn peek_digit(&self, i: usize) -> Option<u32> {
        self.peek(i).and_then(|x| (x as char).to_digit(10))
    }
}

/// Checks the text of an IP literal body against the IPv6 address grammar.
pub(crate) fn is_valid_ipv6(bytes: &[u8]) -> bool {
    let mut reader = Reader::new(bytes);
    reader.read_v6() && !reader.has_remaining()
}

/// Checks a host against the IPvFuture grammar:
/// `"v" 1*HEXDIG "." 1*( unreserved / sub-delims / ":" )`.
pub(crate) fn is_ipv_future(bytes: &[u8]) -> bool {
    let [b'v' | b'V', rest @ ..] = bytes else {
        return false;
    };
    let Some(dot) = rest.iter().position(|&x| x == b'.') else {
        return false;
    };
    let (version, body) = rest.split_at(dot);
    !version.is_empty()
        && version.iter().all(|&x| HEXDIG.allows(x))
        && body.len() > 1
        && body[1..].iter().all(|&x| IPV_FUTURE.allows(x))
}
