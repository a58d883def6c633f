//! Plain data types shared across the crate.

use std::fmt;

/// Names one component of a URI reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Scheme (http, urn, mailto)
    Scheme,
    /// Full authority (user@example.com:8080)
    Authority,
    /// User info part of the authority (user:secret)
    UserInfo,
    /// Host part of the authority (example.com, [::1])
    Host,
    /// Port part of the authority (8080)
    Port,
    /// Path (/a/b/c)
    Path,
    /// Query without the leading '?' (a=1&b=2)
    Query,
    /// Fragment without the leading '#' (section1)
    Fragment,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Scheme => "scheme",
            Component::Authority => "authority",
            Component::UserInfo => "user info",
            Component::Host => "host",
            Component::Port => "port",
            Component::Path => "path",
            Component::Query => "query",
            Component::Fragment => "fragment",
        };
        f.write_str(name)
    }
}

/// The five top-level components of a URI as owned strings.
///
/// `None` means the component was absent (its separator did not appear);
/// `Some("")` means the separator was present with nothing after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UriComponents {
    /// Scheme without the trailing ':'
    pub scheme: Option<String>,
    /// Authority without the leading "//"
    pub authority: Option<String>,
    /// Path, possibly empty
    pub path: Option<String>,
    /// Query without the leading '?'
    pub query: Option<String>,
    /// Fragment without the leading '#'
    pub fragment: Option<String>,
}

impl UriComponents {
    /// Create components with only a scheme set.
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: Some(scheme.into()),
            ..Self::default()
        }
    }
}
