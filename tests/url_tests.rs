//! Tests for the URL profile: default ports and query sorting.

use urivalue::*;

#[test]
fn test_default_ports() {
    let test_cases = vec![
        ("http://example.com:80/x", None),
        ("https://example.com:443/x", None),
        ("http://example.com:8080/x", Some(8080)),
        ("https://example.com:80/x", Some(80)),
        ("http://example.com:443/x", Some(443)),
        ("ftp://example.com:21/x", Some(21)),
        ("http://example.com/x", None),
    ];

    for (url, expected) in test_cases {
        let parsed = Url::parse(url).unwrap();
        assert_eq!(parsed.port(), expected, "Port mismatch for: {}", url);
    }
}

#[test]
fn test_default_port_removed_from_serialization() {
    let url = Url::parse("HTTPS://user@Example.com:443/a").unwrap();

    assert_eq!(url.authority(), Some("user@example.com"));
    assert_eq!(url.to_string(), "https://user@example.com/a");
    assert_eq!(url.display(), "https://example.com/a");
}

#[test]
fn test_default_port_follows_scheme_changes() {
    let url = Url::parse("http://example.com:443/").unwrap();
    assert_eq!(url.port(), Some(443));

    let secure = url.with_scheme("https").unwrap();
    assert_eq!(secure.port(), None);
    assert_eq!(secure.to_string(), "https://example.com/");
}

#[test]
fn test_query_sorting() {
    let test_cases = vec![
        ("http://e.com/?b=2&a=1", Some("a=1&b=2")),
        ("http://e.com/?=nokey&a=1", Some("a=1")),
        ("http://e.com/?a=2&a=1", Some("a=2&a=1")),
        ("http://e.com/?flag&b=1&a", Some("a&b=1&flag")),
        ("http://e.com/?&&c=3&", Some("c=3")),
        ("http://e.com/?", Some("")),
        ("http://e.com/?=only", Some("")),
        ("http://e.com/", None),
    ];

    for (url, expected) in test_cases {
        let parsed = Url::parse(url).unwrap();
        assert_eq!(parsed.query(), expected, "Query mismatch for: {}", url);
    }
}

#[test]
fn test_query_sorting_after_normalization() {
    let url = Url::parse("http://e.com/?%63=1&b=%7e").unwrap();
    assert_eq!(url.query(), Some("b=~&c=1"));

    let reparsed = Url::parse(&url.to_string()).unwrap();
    assert_eq!(reparsed, url);
}

#[test]
fn test_uri_keeps_query_order() {
    let uri = Uri::parse("http://e.com/?b=2&a=1").unwrap();
    assert_eq!(uri.query(), Some("b=2&a=1"));
    assert_eq!(uri.port(), None);

    let with_port = Uri::parse("http://e.com:80/").unwrap();
    assert_eq!(with_port.port(), Some(80));
}

#[test]
fn test_with_query_is_sorted() {
    let url = Url::parse("https://e.com/search").unwrap();
    let queried = url.with_query(Some("z=1&y=2")).unwrap();

    assert_eq!(queried.query(), Some("y=2&z=1"));
    assert_eq!(url.query(), None);
}

#[test]
fn test_convert_between_profiles() {
    let uri = Uri::parse("https://e.com:443/?b&a#f").unwrap();
    let url: Url = uri.clone().into_profile().unwrap();
    assert_eq!(url.to_string(), "https://e.com/?a&b#f");

    let back: Uri = url.into_profile().unwrap();
    assert_eq!(back.to_string(), "https://e.com/?a&b#f");
    assert_ne!(back, uri);
}

#[test]
fn test_url_fragment_is_not_sorted() {
    let url = Url::parse("http://e.com/#b=2&a=1").unwrap();
    assert_eq!(url.fragment(), Some("b=2&a=1"));
}
