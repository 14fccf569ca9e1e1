#![cfg(feature = "serde")]

use serde_test::{assert_de_tokens_error, assert_tokens, Token};
use uri_parts::Uri;

#[test]
fn tokens_round_trip() {
    let uri = Uri::parse("http://example.com/a?q#f").unwrap();
    assert_tokens(&uri, &[Token::Str("http://example.com/a?q#f")]);

    let uri = Uri::parse("foo/bar").unwrap();
    assert_tokens(&uri, &[Token::Str("foo/bar")]);
}

#[test]
fn deserialize_rejects_invalid_uris() {
    assert_de_tokens_error::<Uri>(
        &[Token::Str("http://example.com:spam/")],
        "invalid port at index 19",
    );
    assert_de_tokens_error::<Uri>(
        &[Token::Str("http://[::ffff::1]/")],
        "invalid IPv6 address at index 8",
    );
}
