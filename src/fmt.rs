use crate::{
    encoding::{self, table},
    error::{ParseError, ParseErrorKind},
    parser, Uri,
};
use core::fmt::{self, Write};

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.kind {
            ParseErrorKind::InvalidScheme => "invalid scheme at index ",
            ParseErrorKind::IllegalCharacter => "illegal character at index ",
            ParseErrorKind::InvalidPercentEncoding => "invalid percent-encoded octet at index ",
            ParseErrorKind::InvalidHost => "invalid host at index ",
            ParseErrorKind::InvalidIpv6Address => "invalid IPv6 address at index ",
            ParseErrorKind::InvalidPort => "invalid port at index ",
        };
        write!(f, "{}{}", msg, self.index)
    }
}

impl fmt::Display for Uri {
    /// Generates the string form of the URI reference.
    ///
    /// Components are written in order, percent-encoding any byte outside
    /// the component's allowed set. The authority marker `//` is written
    /// whenever a userinfo, host, or port is present. A host matching the
    /// IPv6 grammar is bracketed with its hexadecimal digits lower-cased;
    /// one matching the IPvFuture grammar is bracketed verbatim.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            f.write_str(scheme)?;
            f.write_char(':')?;
        }

        if self.userinfo.is_some() || self.host.is_some() || self.port.is_some() {
            f.write_str("//")?;
            if let Some(userinfo) = &self.userinfo {
                encoding::encode(f, userinfo, table::USERINFO)?;
                f.write_char('@')?;
            }
            if let Some(host) = &self.host {
                if parser::is_valid_ipv6(host.as_bytes()) {
                    f.write_char('[')?;
                    for x in host.bytes() {
                        f.write_char(x.to_ascii_lowercase() as char)?;
                    }
                    f.write_char(']')?;
                } else if parser::is_ipv_future(host.as_bytes()) {
                    write!(f, "[{host}]")?;
                } else {
                    encoding::encode(f, host, table::REG_NAME)?;
                }
            }
            if let Some(port) = self.port {
                write!(f, ":{port}")?;
            }
        }

        if self.path.len() == 1 && self.path[0].is_empty() {
            f.write_char('/')?;
        } else {
            for (i, segment) in self.path.iter().enumerate() {
                if i > 0 {
                    f.write_char('/')?;
                }
                encoding::encode(f, segment, table::PCHAR)?;
            }
        }

        if let Some(query) = &self.query {
            f.write_char('?')?;
            encoding::encode(f, query, table::QUERY)?;
        }
        if let Some(fragment) = &self.fragment {
            f.write_char('#')?;
            encoding::encode(f, fragment, table::FRAGMENT)?;
        }
        Ok(())
    }
}
