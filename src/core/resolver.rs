//! Reference resolution (RFC 3986 section 5.2).

use crate::core::parser::split;
use crate::error::UriError;
use crate::types::UriComponents;

/// Remove `.` and `..` segments from a path (RFC 3986 section 5.2.4).
///
/// `..` never climbs above the root; surplus segments are dropped. A
/// rootless path keeps its first segment.
///
/// # Examples
///
/// ```
/// use urivalue::core::resolver::remove_dot_segments;
///
/// assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
/// assert_eq!(remove_dot_segments("a/../b"), "a/b");
/// ```
pub fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());

    while !input.is_empty() {
        if let Some(rest) = input.strip_prefix("../") {
            input = rest;
        } else if let Some(rest) = input.strip_prefix("./") {
            input = rest;
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let start = usize::from(input.starts_with('/'));
            let end = input[start..].find('/').map_or(input.len(), |i| i + start);
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }

    output
}

/// Truncate `output` at the last '/' before its final character.
///
/// Without such a '/', `output` is left as it is.
fn pop_segment(output: &mut String) {
    let last = output.char_indices().next_back().map_or(0, |(index, _)| index);
    if let Some(index) = output[..last].rfind('/') {
        output.truncate(index);
    }
}

/// Merge a relative-path reference with the base path (RFC 3986 section 5.2.3).
///
/// # Examples
///
/// ```
/// use urivalue::core::resolver::merge;
///
/// assert_eq!(merge(true, "/b/c/d;p", "g"), "/b/c/g");
/// assert_eq!(merge(true, "", "g"), "/g");
/// assert_eq!(merge(false, "d", "g"), "g");
/// ```
pub fn merge(base_has_authority: bool, base_path: &str, reference_path: &str) -> String {
    if base_has_authority && base_path.is_empty() {
        return format!("/{reference_path}");
    }
    match base_path.rfind('/') {
        Some(index) => format!("{}{}", &base_path[..=index], reference_path),
        None => reference_path.to_string(),
    }
}

/// Resolve `reference` against the components of `base`.
///
/// The result holds un-normalized target components; the caller builds the
/// final value from them. With `strict` unset, a reference whose scheme
/// is textually equal to the base scheme is treated as scheme-less, as older parsers did.
///
/// A scheme-less reference without authority whose first path segment
/// contains ':' is rejected with [`UriError::AmbiguousReference`], since it
/// could be mistaken for a scheme.
pub fn resolve(base: &UriComponents, reference: &str, strict: bool) -> Result<UriComponents, UriError> {
    let parts = split(reference)?;

    let scheme = parts.scheme.filter(|scheme| {
        strict
            || !base
                .scheme
                .as_deref()
                .is_some_and(|base_scheme| base_scheme == *scheme)
    });

    let fragment = parts.fragment.map(str::to_string);

    if let Some(scheme) = scheme {
        tracing::trace!("Reference '{}' is absolute", reference);
        return Ok(UriComponents {
            scheme: Some(scheme.to_string()),
            authority: parts.authority.map(str::to_string),
            path: Some(remove_dot_segments(parts.path)),
            query: parts.query.map(str::to_string),
            fragment,
        });
    }

    if parts.authority.is_none() {
        let first_segment = parts.path.split('/').next().unwrap_or("");
        if first_segment.contains(':') {
            tracing::debug!("Reference '{}' has a colon in its first segment", reference);
            return Err(UriError::AmbiguousReference(reference.to_string()));
        }
    }

    if let Some(authority) = parts.authority {
        return Ok(UriComponents {
            scheme: base.scheme.clone(),
            authority: Some(authority.to_string()),
            path: Some(remove_dot_segments(parts.path)),
            query: parts.query.map(str::to_string),
            fragment,
        });
    }

    let base_path = base.path.as_deref().unwrap_or("");
    let (path, query) = if parts.path.is_empty() {
        let query = parts.query.map(str::to_string).or_else(|| base.query.clone());
        (base_path.to_string(), query)
    } else if parts.path.starts_with('/') {
        (remove_dot_segments(parts.path), parts.query.map(str::to_string))
    } else {
        let merged = merge(base.authority.is_some(), base_path, parts.path);
        (remove_dot_segments(&merged), parts.query.map(str::to_string))
    };

    tracing::trace!("Resolved '{}' to path '{}'", reference, path);

    Ok(UriComponents {
        scheme: base.scheme.clone(),
        authority: base.authority.clone(),
        path: Some(path),
        query,
        fragment,
    })
}
