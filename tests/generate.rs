use uri_parts::Uri;

fn build(
    scheme: Option<&str>,
    user_info: Option<&str>,
    host: Option<&str>,
    port: Option<u16>,
    path: &[&str],
    query: Option<&str>,
    fragment: Option<&str>,
) -> Uri {
    let mut uri = Uri::default();
    uri.set_scheme(scheme);
    uri.set_user_info(user_info);
    uri.set_host(host);
    match port {
        Some(port) => uri.set_port(port),
        None => uri.clear_port(),
    }
    uri.set_path(path.iter().copied());
    match query {
        Some(query) => uri.set_query(query),
        None => uri.clear_query(),
    }
    match fragment {
        Some(fragment) => uri.set_fragment(fragment),
        None => uri.clear_fragment(),
    }
    uri
}

#[test]
fn general_vectors() {
    let vectors: &[(Uri, &str)] = &[
        (
            build(
                Some("http"),
                Some("bob"),
                Some("www.example.com"),
                Some(8080),
                &["", "abc", "def"],
                Some("foobar"),
                Some("ch2"),
            ),
            "http://bob@www.example.com:8080/abc/def?foobar#ch2",
        ),
        (
            build(
                Some("http"),
                Some("bob"),
                Some("www.example.com"),
                Some(0),
                &[],
                Some("foobar"),
                Some("ch2"),
            ),
            "http://bob@www.example.com:0?foobar#ch2",
        ),
        (
            build(
                Some("http"),
                Some("bob"),
                Some("www.example.com"),
                Some(0),
                &[],
                Some("foobar"),
                Some(""),
            ),
            "http://bob@www.example.com:0?foobar#",
        ),
        (
            build(None, None, Some("example.com"), None, &[], Some("bar"), None),
            "//example.com?bar",
        ),
        (
            build(None, None, Some("example.com"), None, &[], Some(""), None),
            "//example.com?",
        ),
        (
            build(None, None, Some("example.com"), None, &[], None, None),
            "//example.com",
        ),
        (
            build(None, None, Some("example.com"), None, &[""], None, None),
            "//example.com/",
        ),
        (
            build(None, None, Some("example.com"), None, &["", "xyz"], None, None),
            "//example.com/xyz",
        ),
        (
            build(None, None, Some("example.com"), None, &["", "xyz", ""], None, None),
            "//example.com/xyz/",
        ),
        (build(None, None, None, None, &[""], None, None), "/"),
        (build(None, None, None, None, &["", "xyz"], None, None), "/xyz"),
        (
            build(None, None, None, None, &["", "xyz", ""], None, None),
            "/xyz/",
        ),
        (build(None, None, None, None, &[], None, None), ""),
        (build(None, None, None, None, &["xyz"], None, None), "xyz"),
        (build(None, None, None, None, &["xyz", ""], None, None), "xyz/"),
        (build(None, None, None, None, &[], Some("bar"), None), "?bar"),
        (
            build(Some("http"), None, None, None, &[], Some("bar"), None),
            "http:?bar",
        ),
        (build(Some("http"), None, None, None, &[], None, None), "http:"),
    ];

    for (uri, expected) in vectors {
        assert_eq!(uri.to_string(), *expected);
    }
}

#[test]
fn authority_marker_follows_any_authority_component() {
    // A userinfo or port alone still drags the "//" marker out.
    let uri = build(
        Some("http"),
        Some("bob"),
        None,
        None,
        &[],
        Some("foobar"),
        None,
    );
    assert_eq!(uri.to_string(), "http://bob@?foobar");

    let uri = build(None, Some("bob"), None, None, &[], Some("foobar"), None);
    assert_eq!(uri.to_string(), "//bob@?foobar");

    let uri = build(None, Some("bob"), None, None, &[], None, None);
    assert_eq!(uri.to_string(), "//bob@");
}

#[test]
fn ip_literal_hosts_are_bracketed() {
    let vectors = [
        ("::1", "http://[::1]"),
        ("::1.2.3.4", "http://[::1.2.3.4]"),
        ("1.2.3.4", "http://1.2.3.4"),
        ("v7.aB", "http://[v7.aB]"),
        ("example.com", "http://example.com"),
    ];
    for (host, expected) in vectors {
        let uri = build(Some("http"), None, Some(host), None, &[], None, None);
        assert_eq!(uri.to_string(), expected, "{host}");
    }

    // IPv6 hex digits are lower-cased on output.
    let uri = build(
        Some("http"),
        Some("bob"),
        Some("fFfF::1"),
        Some(8080),
        &["", "abc", "def"],
        Some("foobar"),
        Some("c 2"),
    );
    assert_eq!(
        uri.to_string(),
        "http://bob@[ffff::1]:8080/abc/def?foobar#c%202"
    );
}

#[test]
fn components_are_percent_encoded() {
    let uri = build(
        Some("http"),
        Some("b b"),
        Some("www.example.com"),
        Some(8080),
        &["", "abc", "def"],
        Some("foobar"),
        Some("ch2"),
    );
    assert_eq!(
        uri.to_string(),
        "http://b%20b@www.example.com:8080/abc/def?foobar#ch2"
    );

    let uri = build(
        Some("http"),
        Some("bob"),
        Some("www.e ample.com"),
        Some(8080),
        &["", "abc", "def"],
        Some("foobar"),
        Some("ch2"),
    );
    assert_eq!(
        uri.to_string(),
        "http://bob@www.e%20ample.com:8080/abc/def?foobar#ch2"
    );

    let uri = build(
        Some("http"),
        Some("bob"),
        Some("www.example.com"),
        Some(8080),
        &["", "a c", "def"],
        Some("foobar"),
        Some("ch2"),
    );
    assert_eq!(
        uri.to_string(),
        "http://bob@www.example.com:8080/a%20c/def?foobar#ch2"
    );

    let uri = build(
        Some("http"),
        Some("bob"),
        Some("www.example.com"),
        Some(8080),
        &["", "abc", "def"],
        Some("foo ar"),
        Some("ch2"),
    );
    assert_eq!(
        uri.to_string(),
        "http://bob@www.example.com:8080/abc/def?foo%20ar#ch2"
    );

    let uri = build(
        Some("http"),
        Some("bob"),
        Some("www.example.com"),
        Some(8080),
        &["", "abc", "def"],
        Some("foobar"),
        Some("c 2"),
    );
    assert_eq!(
        uri.to_string(),
        "http://bob@www.example.com:8080/abc/def?foobar#c%202"
    );

    // Multi-byte text is encoded per UTF-8 byte.
    let uri = build(None, None, None, None, &["caf\u{e9}"], None, None);
    assert_eq!(uri.to_string(), "caf%C3%A9");
}

#[test]
fn fragment_empty_but_present() {
    let mut uri = Uri::parse("http://example.com#").unwrap();
    assert!(uri.has_fragment());
    assert_eq!(uri.fragment(), Some(""));
    assert_eq!(uri.to_string(), "http://example.com/#");

    uri.clear_fragment();
    assert!(!uri.has_fragment());
    assert_eq!(uri.to_string(), "http://example.com/");

    let mut uri = Uri::parse("http://example.com").unwrap();
    assert!(!uri.has_fragment());
    uri.set_fragment("");
    assert!(uri.has_fragment());
    assert_eq!(uri.fragment(), Some(""));
    assert_eq!(uri.to_string(), "http://example.com/#");
}

#[test]
fn query_empty_but_present() {
    let mut uri = Uri::parse("http://example.com?").unwrap();
    assert!(uri.has_query());
    assert_eq!(uri.query(), Some(""));
    assert_eq!(uri.to_string(), "http://example.com/?");

    uri.clear_query();
    assert!(!uri.has_query());
    assert_eq!(uri.to_string(), "http://example.com/");

    let mut uri = Uri::parse("http://example.com").unwrap();
    assert!(!uri.has_query());
    uri.set_query("");
    assert!(uri.has_query());
    assert_eq!(uri.query(), Some(""));
    assert_eq!(uri.to_string(), "http://example.com/?");
}

#[test]
fn mutation_after_parse() {
    let mut uri = Uri::parse("http://user@example.com:8080/a/b?q#f").unwrap();
    uri.set_scheme(Some("https"));
    uri.set_user_info(None);
    uri.set_host(Some("example.org"));
    uri.clear_port();
    uri.set_path(["", "x"]);
    uri.set_query("n=1");
    uri.clear_fragment();
    assert_eq!(uri.to_string(), "https://example.org/x?n=1");

    // Mutated values parse back to the same components.
    let reparsed = Uri::parse(&uri.to_string()).unwrap();
    assert_eq!(uri, reparsed);
}
