//! urivalue - Immutable RFC 3986 URI and URL value types
//!
//! This crate parses URI references into normalized, immutable values,
//! resolves relative references against a base and serializes the result.
//!
//! # Features
//!
//! - **Permissive decomposition**: any string splits into components; each
//!   component is then validated on its own
//! - **Normalization**: lowercase scheme and host, uppercase percent-encoding,
//!   decoded unreserved characters, dot-segments removed
//! - **Absent vs empty**: `http://e.com/p` and `http://e.com/p?` differ
//! - **Reference resolution**: RFC 3986 section 5, strict or lenient
//! - **URL profile**: [`Url`] strips `http`/`https` default ports and sorts
//!   query parameters
//!
//! # Quick Start
//!
//! ```
//! use urivalue::{Uri, Url};
//!
//! // Parse and normalize
//! let uri = Uri::parse("HTTP://Example.COM/a/./b/../c?q#f")?;
//! assert_eq!(uri.to_string(), "http://example.com/a/c?q#f");
//!
//! // Resolve a relative reference
//! let base = Uri::parse("http://a/b/c/d;p?q")?;
//! assert_eq!(base.resolve("../g")?.to_string(), "http://a/b/g");
//!
//! // URL rules
//! let url = Url::parse("http://example.com:80/search?b=2&a=1")?;
//! assert_eq!(url.port(), None);
//! assert_eq!(url.query(), Some("a=1&b=2"));
//! # Ok::<(), urivalue::UriError>(())
//! ```
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, UriError>`. Each error names
//! the offending component and carries its raw value:
//!
//! - Missing or malformed scheme
//! - Authority that does not split into `[userinfo@]host[:port]`
//! - Invalid IP literal hosts or ports above 65535
//! - Paths that conflict with the presence of an authority
//! - Relative references whose first segment contains `:`

// Re-export the value types
pub use crate::core::{Generic, Profile, Uri, UriValue, Url, Web};

// Re-export resolution helpers
pub use crate::core::{merge, remove_dot_segments, split, split_authority, RawAuthority, RawReference};

// Re-export public types
pub use error::UriError;
pub use types::{Component, UriComponents};

// Module declarations
pub mod component;
pub mod core;
pub mod error;
pub mod types;
