//! Decomposition of URI references into raw components.
//!
//! Splitting follows the regular expression of RFC 3986 Appendix B. It is
//! deliberately permissive: any string splits into some combination of
//! components, and rejecting bad input is left to the normalizers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::UriError;

static URI_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(([^:/?#]+):)?(//([^/?#]*))?([^?#]*)(\?([^#]*))?(#(.*))?$")
        .expect("URI reference pattern must compile")
});

static AUTHORITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?:([^@]*)@)?(\[[^\]]*\]|[^:]*)(?::([0-9]*))?$")
        .expect("authority pattern must compile")
});

/// The five components of a URI reference, borrowed from the input.
///
/// `None` marks a component whose separator did not appear; `Some("")`
/// marks a separator followed by nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawReference<'a> {
    /// Text before the first ':' when it precedes any '/', '?' or '#'
    pub scheme: Option<&'a str>,
    /// Text after "//" up to the next '/', '?' or '#'
    pub authority: Option<&'a str>,
    /// Always present, possibly empty
    pub path: &'a str,
    /// Text after '?' up to '#'
    pub query: Option<&'a str>,
    /// Text after '#'
    pub fragment: Option<&'a str>,
}

/// An authority split into user info, host and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawAuthority<'a> {
    /// Text before the first '@'
    pub user_info: Option<&'a str>,
    /// Bracketed IP literal or text up to the port separator
    pub host: &'a str,
    /// Port number, absent when no digits follow ':'
    pub port: Option<u16>,
}

/// Split a URI reference into its components.
///
/// # Examples
///
/// ```
/// use urivalue::core::parser::split;
///
/// let parts = split("http://example.com/a?#").unwrap();
/// assert_eq!(parts.scheme, Some("http"));
/// assert_eq!(parts.authority, Some("example.com"));
/// assert_eq!(parts.path, "/a");
/// assert_eq!(parts.query, Some(""));
/// assert_eq!(parts.fragment, Some(""));
///
/// let empty = split("").unwrap();
/// assert_eq!(empty.scheme, None);
/// assert_eq!(empty.path, "");
/// ```
pub fn split(reference: &str) -> Result<RawReference<'_>, UriError> {
    let captures = URI_REFERENCE
        .captures(reference)
        .ok_or_else(|| UriError::Malformed(reference.to_string()))?;

    let group = |index: usize| captures.get(index).map(|m| m.as_str());

    Ok(RawReference {
        scheme: group(2),
        authority: group(4),
        path: group(5).unwrap_or(""),
        query: group(7),
        fragment: group(9),
    })
}

/// Split an authority into user info, host and port.
///
/// Fails with [`UriError::InvalidAuthority`] when the text after the host
/// is not `:` followed by digits, and with [`UriError::InvalidPort`] when
/// the digits do not fit in 16 bits.
pub fn split_authority(authority: &str) -> Result<RawAuthority<'_>, UriError> {
    let captures = AUTHORITY.captures(authority).ok_or_else(|| {
        tracing::debug!("Authority '{}' does not match host[:port]", authority);
        UriError::InvalidAuthority(authority.to_string())
    })?;

    let port = match captures.get(3).map(|m| m.as_str()) {
        Some(digits) if !digits.is_empty() => Some(
            digits
                .parse::<u16>()
                .map_err(|_| UriError::InvalidPort(digits.to_string()))?,
        ),
        _ => None,
    };

    Ok(RawAuthority {
        user_info: captures.get(1).map(|m| m.as_str()),
        host: captures.get(2).map_or("", |m| m.as_str()),
        port,
    })
}
