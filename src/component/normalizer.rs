//! Per-component normalization.
//!
//! Each function takes the raw text of one component and returns its
//! normalized form or the [`UriError`] naming that component.

use crate::component::encoding::{self, reencode, UNRESERVED};
use crate::component::validator;
use crate::core::resolver::remove_dot_segments;
use crate::error::UriError;

/// Validate and lowercase a scheme.
pub fn normalize_scheme(scheme: &str) -> Result<String, UriError> {
    if !validator::is_valid_scheme(scheme) {
        tracing::debug!("Rejected scheme '{}'", scheme);
        return Err(UriError::InvalidScheme(scheme.to_string()));
    }
    Ok(scheme.to_ascii_lowercase())
}

/// Normalize the user info part of an authority.
pub fn normalize_user_info(user_info: &str) -> Result<String, UriError> {
    let normalized = reencode(user_info, UNRESERVED, encoding::USER_INFO);
    if !validator::is_valid_user_info(&normalized) {
        tracing::debug!("Rejected user info '{}'", user_info);
        return Err(UriError::InvalidUserInfo(user_info.to_string()));
    }
    Ok(normalized)
}

/// Lowercase a host and normalize its encoding.
///
/// Hosts starting with `[` keep their brackets and colons so IP literals
/// survive encoding. Percent-encoded triplets end up with uppercase hex
/// digits even though the rest of the host is lowercased.
///
/// # Examples
///
/// ```
/// use urivalue::component::normalizer::normalize_host;
///
/// assert_eq!(normalize_host("WWW.Example.COM").unwrap(), "www.example.com");
/// assert_eq!(normalize_host("[::FFFF:1]").unwrap(), "[::ffff:1]");
/// assert_eq!(normalize_host("caf%c3%a9.fr").unwrap(), "caf%C3%A9.fr");
/// ```
pub fn normalize_host(host: &str) -> Result<String, UriError> {
    let allowed = if host.starts_with('[') {
        encoding::IP_LITERAL
    } else {
        encoding::REG_NAME
    };
    // Lowercasing after the first decode also catches escaped letters; the
    // second decode inside reencode restores uppercase hex digits.
    let lowered = encoding::decode(host, UNRESERVED).to_lowercase();
    let normalized = reencode(&lowered, UNRESERVED, allowed);
    if !validator::is_valid_host(&normalized) {
        tracing::debug!("Rejected host '{}'", host);
        return Err(UriError::InvalidHost(host.to_string()));
    }
    Ok(normalized)
}

/// Normalize a path and remove its dot-segments.
///
/// `has_authority` selects the structural rule applied to the result: an
/// authority requires an empty or absolute path.
pub fn normalize_path(path: &str, has_authority: bool) -> Result<String, UriError> {
    if path.is_empty() {
        return Ok(String::new());
    }
    let normalized = remove_dot_segments(&reencode(path, UNRESERVED, encoding::PATH));
    if !validator::is_valid_path(&normalized, has_authority) {
        tracing::debug!("Rejected path '{}' (authority: {})", path, has_authority);
        return Err(UriError::InvalidPath(path.to_string()));
    }
    Ok(normalized)
}

/// Normalize a query string without reordering it.
pub fn normalize_query(query: &str) -> Result<String, UriError> {
    let normalized = reencode(query, UNRESERVED, encoding::QUERY);
    if !validator::is_valid_query(&normalized) {
        tracing::debug!("Rejected query '{}'", query);
        return Err(UriError::InvalidQuery(query.to_string()));
    }
    Ok(normalized)
}

/// Normalize a fragment.
pub fn normalize_fragment(fragment: &str) -> Result<String, UriError> {
    let normalized = reencode(fragment, UNRESERVED, encoding::FRAGMENT);
    if !validator::is_valid_fragment(&normalized) {
        tracing::debug!("Rejected fragment '{}'", fragment);
        return Err(UriError::InvalidFragment(fragment.to_string()));
    }
    Ok(normalized)
}

/// Drop keyless query parameters and stable-sort the rest by key.
///
/// A parameter is keyless when it is empty or starts with `=`. The key is
/// the text before the first `=`, or the whole parameter.
///
/// # Examples
///
/// ```
/// use urivalue::component::normalizer::sort_query;
///
/// assert_eq!(sort_query("b=2&=x&a=1&&a"), "a=1&a&b=2");
/// ```
pub fn sort_query(query: &str) -> String {
    let mut params: Vec<&str> = query
        .split('&')
        .filter(|param| !param.is_empty() && !param.starts_with('='))
        .collect();
    params.sort_by_key(|param| param.split_once('=').map_or(*param, |(key, _)| key));
    params.join("&")
}
