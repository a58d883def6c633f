//! Component-level processing.
//!
//! This module contains the building blocks applied to each URI component:
//! - Percent encoding and decoding with RFC 3986 character classes
//! - Syntax validation, including IPv4, IPv6 and IPvFuture hosts
//! - Normalization pipelines that combine the two

pub mod encoding;
pub mod normalizer;
pub mod validator;

// Re-export main functionality
pub use encoding::{decode, encode, CharClass};
pub use normalizer::{
    normalize_fragment, normalize_host, normalize_path, normalize_query, normalize_scheme,
    normalize_user_info, sort_query,
};
pub use validator::{is_valid_host, is_valid_ip_literal, is_valid_ipv4, is_valid_scheme};
