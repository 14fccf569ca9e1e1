#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! An owned-component URI handling library that strictly adheres to
//! IETF [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! Parsing splits a URI reference into its components (scheme, userinfo,
//! host, port, path segments, query, and fragment), validating each against
//! the grammar, percent-decoding the decodable ones and lower-casing the
//! case-insensitive ones. The components are owned values that can be read,
//! replaced, and re-serialized; [`Display`](core::fmt::Display) writes them
//! back out, percent-encoding wherever needed. Reference resolution and
//! dot-segment removal follow Sections 5.2.2 and 5.2.4.
//!
//! # Examples
//!
//! ```
//! use uri_parts::Uri;
//!
//! let base = Uri::parse("http://user@example.com:8042/over/there?name=ferret#nose")?;
//! assert_eq!(base.scheme(), Some("http"));
//! assert_eq!(base.user_info(), Some("user"));
//! assert_eq!(base.host(), Some("example.com"));
//! assert_eq!(base.port(), Some(8042));
//! assert_eq!(base.path(), ["", "over", "there"]);
//! assert_eq!(base.query(), Some("name=ferret"));
//! assert_eq!(base.fragment(), Some("nose"));
//!
//! let target = base.resolve(&Uri::parse("../here")?);
//! assert_eq!(target.to_string(), "http://user@example.com:8042/here");
//! # Ok::<_, uri_parts::error::ParseError>(())
//! ```
//!
//! # Feature flags
//!
//! All features except `std` are disabled by default.
//!
//! - `std`: Enables the [`Error`](std::error::Error) implementation for
//!   [`ParseError`](error::ParseError).
//! - `serde`: Enables [`Serialize`](serde::Serialize) and
//!   [`Deserialize`](serde::Deserialize) for [`Uri`], through its string
//!   form.

extern crate alloc;

pub mod error;

mod encoding;
mod fmt;
mod normalizer;
mod parser;
mod resolver;

use alloc::{string::String, vec::Vec};
use error::ParseError;

/// A [URI reference] held as its parsed components.
///
/// [URI reference]: https://datatracker.ietf.org/doc/html/rfc3986/#section-4.1
///
/// Every component is owned and stored in decoded form: percent-encoding is
/// resolved at parse time, the scheme and registered-name hosts are
/// lower-cased, and IP literal hosts are kept without their brackets.
/// Serializing with [`Display`](core::fmt::Display) re-encodes and
/// re-brackets as needed, so the generated string may differ from the parsed
/// input in case and escaping while denoting the same resource.
///
/// Absence and emptiness are distinct everywhere they differ in RFC 3986:
/// `http://example.com?` carries an empty query where `http://example.com`
/// carries none, an empty-but-present authority keeps `host() == Some("")`,
/// and port 0 is distinct from no port. Equality compares all components
/// including such presence distinctions.
///
/// The path is a sequence of decoded segments. A leading empty segment marks
/// an absolute path, a single empty segment is the root path `/`, and an
/// empty sequence is an empty path. Parsing a URI with an authority and an
/// empty path yields the root path, so `http://example.com` and
/// `http://example.com/` parse equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Uri {
    pub(crate) scheme: Option<String>,
    pub(crate) userinfo: Option<String>,
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) path: Vec<String>,
    pub(crate) query: Option<String>,
    pub(crate) fragment: Option<String>,
}

impl Uri {
    /// Parses a URI reference from a string into its components.
    ///
    /// The result is built from scratch; nothing carries over from any
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the first violated rule and the index
    /// where it was detected. No partial result is observable.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let uri = Uri::parse("http://www.example.com/foo/bar")?;
    /// assert_eq!(uri.scheme(), Some("http"));
    /// assert_eq!(uri.host(), Some("www.example.com"));
    /// assert_eq!(uri.path(), ["", "foo", "bar"]);
    ///
    /// let uri = Uri::parse("urn:book:fantasy:Hobbit")?;
    /// assert_eq!(uri.scheme(), Some("urn"));
    /// assert_eq!(uri.host(), None);
    /// assert_eq!(uri.path(), ["book:fantasy:Hobbit"]);
    ///
    /// assert!(Uri::parse("http://www.example.com:65536/").is_err());
    /// # Ok::<_, uri_parts::error::ParseError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Uri, ParseError> {
        parser::parse(input)
    }

    /// Returns the scheme, lower-cased, or `None` for a relative reference.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Returns the decoded userinfo subcomponent.
    #[inline]
    #[must_use]
    pub fn user_info(&self) -> Option<&str> {
        self.userinfo.as_deref()
    }

    /// Returns the decoded host subcomponent.
    ///
    /// Registered names are lower-cased; IPv6 and IPvFuture literals are
    /// returned without their enclosing brackets. `Some("")` is an
    /// empty-but-present authority, while `None` means the reference has no
    /// authority at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// assert_eq!(Uri::parse("http://[::1]/")?.host(), Some("::1"));
    /// assert_eq!(Uri::parse("file:///etc/hosts")?.host(), Some(""));
    /// assert_eq!(Uri::parse("mailto:joe@example.com")?.host(), None);
    /// # Ok::<_, uri_parts::error::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port, if one is present.
    ///
    /// Port 0 is a present port; an absent or empty port subcomponent is
    /// `None`.
    #[inline]
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Checks whether a port is present.
    #[inline]
    #[must_use]
    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }

    /// Returns the path as its decoded segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// assert!(Uri::parse("")?.path().is_empty());
    /// assert_eq!(Uri::parse("/")?.path(), [""]);
    /// assert_eq!(Uri::parse("foo/")?.path(), ["foo", ""]);
    /// assert_eq!(Uri::parse("/foo")?.path(), ["", "foo"]);
    /// # Ok::<_, uri_parts::error::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Returns the decoded query, if one is present.
    ///
    /// A trailing `?` with nothing after it is a present, empty query.
    #[inline]
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Checks whether a query is present.
    #[inline]
    #[must_use]
    pub fn has_query(&self) -> bool {
        self.query.is_some()
    }

    /// Returns the decoded fragment, if one is present.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Checks whether a fragment is present.
    #[inline]
    #[must_use]
    pub fn has_fragment(&self) -> bool {
        self.fragment.is_some()
    }

    /// Checks whether the reference is relative, i.e. has no scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// assert!(Uri::parse("/foo/bar")?.is_relative_reference());
    /// assert!(Uri::parse("//example.com/foo")?.is_relative_reference());
    /// assert!(!Uri::parse("http://example.com/")?.is_relative_reference());
    /// # Ok::<_, uri_parts::error::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn is_relative_reference(&self) -> bool {
        self.scheme.is_none()
    }

    /// Checks whether the path is empty or does not start at the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// assert!(Uri::parse("foo/bar")?.contains_relative_path());
    /// assert!(!Uri::parse("/foo/bar")?.contains_relative_path());
    /// # Ok::<_, uri_parts::error::ParseError>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn contains_relative_path(&self) -> bool {
        self.path.first().map_or(true, |s| !s.is_empty())
    }

    /// Sets or clears the scheme.
    ///
    /// Setters store the given text as is; disallowed bytes are
    /// percent-encoded when the URI is written out, not rejected here.
    #[inline]
    pub fn set_scheme(&mut self, scheme: Option<&str>) {
        self.scheme = scheme.map(String::from);
    }

    /// Sets or clears the userinfo subcomponent.
    #[inline]
    pub fn set_user_info(&mut self, user_info: Option<&str>) {
        self.userinfo = user_info.map(String::from);
    }

    /// Sets or clears the host subcomponent.
    ///
    /// IP literals are given without brackets; a host matching the IPv6 or
    /// IPvFuture grammar is re-bracketed when the URI is written out.
    #[inline]
    pub fn set_host(&mut self, host: Option<&str>) {
        self.host = host.map(String::from);
    }

    /// Sets the port.
    #[inline]
    pub fn set_port(&mut self, port: u16) {
        self.port = Some(port);
    }

    /// Removes the port.
    #[inline]
    pub fn clear_port(&mut self) {
        self.port = None;
    }

    /// Replaces the path with the given segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let mut uri = Uri::parse("http://example.com/a/b")?;
    /// uri.set_path(["", "c d"]);
    /// assert_eq!(uri.to_string(), "http://example.com/c%20d");
    /// # Ok::<_, uri_parts::error::ParseError>(())
    /// ```
    pub fn set_path<I>(&mut self, segments: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.path = segments.into_iter().map(Into::into).collect();
    }

    /// Sets the query. An empty string is a present, empty query.
    #[inline]
    pub fn set_query(&mut self, query: &str) {
        self.query = Some(String::from(query));
    }

    /// Removes the query.
    #[inline]
    pub fn clear_query(&mut self) {
        self.query = None;
    }

    /// Sets the fragment. An empty string is a present, empty fragment.
    #[inline]
    pub fn set_fragment(&mut self, fragment: &str) {
        self.fragment = Some(String::from(fragment));
    }

    /// Removes the fragment.
    #[inline]
    pub fn clear_fragment(&mut self) {
        self.fragment = None;
    }

    /// Removes `.` and `..` segments from the path, per RFC 3986
    /// Section 5.2.4.
    ///
    /// Applying this twice gives the same path as applying it once.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let mut uri = Uri::parse("example://a/./b/../b/c")?;
    /// uri.normalize_path();
    /// assert_eq!(uri.to_string(), "example://a/b/c");
    /// # Ok::<_, uri_parts::error::ParseError>(())
    /// ```
    pub fn normalize_path(&mut self) {
        normalizer::remove_dot_segments(&mut self.path);
    }

    /// Resolves a reference against this base, per RFC 3986 Section 5.2.2.
    ///
    /// The target is a fresh value; its fragment always comes from the
    /// reference, never from the base.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_parts::Uri;
    ///
    /// let base = Uri::parse("http://a/b/c/d;p?q")?;
    /// assert_eq!(base.resolve(&Uri::parse("g")?).to_string(), "http://a/b/c/g");
    /// assert_eq!(base.resolve(&Uri::parse("../../g")?).to_string(), "http://a/g");
    /// assert_eq!(base.resolve(&Uri::parse("?y")?).to_string(), "http://a/b/c/d;p?y");
    /// assert_eq!(base.resolve(&Uri::parse("#s")?).to_string(), "http://a/b/c/d;p?q#s");
    /// # Ok::<_, uri_parts::error::ParseError>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &Uri) -> Uri {
        resolver::resolve(self, reference)
    }
}

impl core::str::FromStr for Uri {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Uri, ParseError> {
        Uri::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Uri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        Uri::parse(&s).map_err(D::Error::custom)
    }
}
