//! Integration tests for serde and `url` crate interop.

use urivalue::*;

#[test]
fn test_url_crate_conversion() {
    let uri = Uri::parse("https://user@Example.com:8443/a/b?x=1#frag").unwrap();

    let converted = uri.to_url().unwrap();
    assert_eq!(converted.as_str(), "https://user@example.com:8443/a/b?x=1#frag");
    assert_eq!(converted.host_str(), Some("example.com"));
    assert_eq!(converted.port(), Some(8443));

    let back = Uri::try_from(&converted).unwrap();
    assert_eq!(back, uri);
}

#[test]
fn test_url_crate_conversion_via_try_from() {
    let url = Url::parse("http://example.com/?b=1&a=2").unwrap();
    let converted = url::Url::try_from(&url).unwrap();

    assert_eq!(converted.query(), Some("a=2&b=1"));
}

#[test]
fn test_url_crate_rejection_is_reported() {
    let uri = Uri::parse("http://[v1.x]/").unwrap();
    let err = uri.to_url().unwrap_err();

    match err {
        UriError::Conversion(_) => (),
        other => panic!("Expected Conversion error, got {:?}", other),
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;

    #[test]
    fn test_serialize_as_string() {
        let uri = Uri::parse("HTTP://Example.com/a/../b").unwrap();
        let json = serde_json::to_string(&uri).unwrap();
        assert_eq!(json, "\"http://example.com/b\"");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let url: Url = serde_json::from_str("\"https://e.com:443/?b&a\"").unwrap();
        assert_eq!(url.to_string(), "https://e.com/?a&b");
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        let result: Result<Uri, _> = serde_json::from_str("\"no-scheme\"");
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid scheme"));
    }

    #[test]
    fn test_components_serde() {
        let components = Uri::parse("http://e.com/p?").unwrap().to_components();
        let json = serde_json::to_value(&components).unwrap();

        assert_eq!(json["scheme"], "http");
        assert_eq!(json["authority"], "e.com");
        assert_eq!(json["query"], "");
        assert!(json["fragment"].is_null());

        let back: UriComponents = serde_json::from_value(json).unwrap();
        assert_eq!(back, components);
    }
}
