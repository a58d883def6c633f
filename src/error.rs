//! Error types for URI parsing, normalization and resolution.

use thiserror::Error;

use crate::types::Component;

/// Errors that can occur while building a URI value.
///
/// Every variant carries the raw value that was rejected so callers can
/// report it back verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// The scheme is missing or does not match `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
    #[error("Invalid scheme: {0:?}")]
    InvalidScheme(String),

    /// The authority could not be split into user info, host and port.
    #[error("Invalid authority: {0:?}")]
    InvalidAuthority(String),

    /// The user info contains characters outside the allowed set.
    #[error("Invalid user info: {0:?}")]
    InvalidUserInfo(String),

    /// The host is neither an IP literal, an IPv4 address nor a registered name.
    #[error("Invalid host: {0:?}")]
    InvalidHost(String),

    /// The port is not a number between 0 and 65535.
    #[error("Invalid port: {0:?}")]
    InvalidPort(String),

    /// The path contains invalid characters or conflicts with the authority.
    #[error("Invalid path: {0:?}")]
    InvalidPath(String),

    /// The query contains characters outside the allowed set.
    #[error("Invalid query: {0:?}")]
    InvalidQuery(String),

    /// The fragment contains characters outside the allowed set.
    #[error("Invalid fragment: {0:?}")]
    InvalidFragment(String),

    /// A relative-path reference whose first segment contains a colon.
    #[error("Invalid path: first segment of relative reference {0:?} contains ':'")]
    AmbiguousReference(String),

    /// The reference could not be decomposed at all.
    #[error("Malformed URI reference: {0:?}")]
    Malformed(String),

    /// Conversion to or from `url::Url` failed.
    #[error("URL conversion error: {0}")]
    Conversion(String),
}

impl UriError {
    /// The component the error is about, if it names one.
    pub fn component(&self) -> Option<Component> {
        match self {
            UriError::InvalidScheme(_) => Some(Component::Scheme),
            UriError::InvalidAuthority(_) => Some(Component::Authority),
            UriError::InvalidUserInfo(_) => Some(Component::UserInfo),
            UriError::InvalidHost(_) => Some(Component::Host),
            UriError::InvalidPort(_) => Some(Component::Port),
            UriError::InvalidPath(_) | UriError::AmbiguousReference(_) => Some(Component::Path),
            UriError::InvalidQuery(_) => Some(Component::Query),
            UriError::InvalidFragment(_) => Some(Component::Fragment),
            UriError::Malformed(_) | UriError::Conversion(_) => None,
        }
    }

    /// The rejected raw value.
    pub fn value(&self) -> &str {
        match self {
            UriError::InvalidScheme(v)
            | UriError::InvalidAuthority(v)
            | UriError::InvalidUserInfo(v)
            | UriError::InvalidHost(v)
            | UriError::InvalidPort(v)
            | UriError::InvalidPath(v)
            | UriError::InvalidQuery(v)
            | UriError::InvalidFragment(v)
            | UriError::AmbiguousReference(v)
            | UriError::Malformed(v)
            | UriError::Conversion(v) => v,
        }
    }
}

impl From<url::ParseError> for UriError {
    fn from(err: url::ParseError) -> Self {
        UriError::Conversion(err.to_string())
    }
}
