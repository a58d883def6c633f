//! Scheme-specific normalization rules.
//!
//! A [`Profile`] supplies the parts of normalization that differ between a
//! generic URI and a web URL: which ports are implied by a scheme and how
//! the query is normalized.

use std::fmt::Debug;
use std::hash::Hash;

use crate::component::normalizer::{normalize_query, sort_query};
use crate::error::UriError;

/// Normalization rules plugged into [`UriValue`](crate::UriValue).
pub trait Profile: Debug + Clone + Copy + PartialEq + Eq + Hash + Default + Send + Sync + 'static {
    /// `(scheme, port)` pairs whose port is dropped when written explicitly.
    const DEFAULT_PORTS: &'static [(&'static str, u16)];

    /// The registered default port of a lowercase scheme.
    fn default_port(scheme: &str) -> Option<u16> {
        Self::DEFAULT_PORTS
            .iter()
            .find(|(name, _)| *name == scheme)
            .map(|(_, port)| *port)
    }

    /// Normalize a raw query string.
    fn normalize_query(query: &str) -> Result<String, UriError> {
        normalize_query(query)
    }
}

/// Plain RFC 3986 rules: no default ports, query order preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Generic;

impl Profile for Generic {
    const DEFAULT_PORTS: &'static [(&'static str, u16)] = &[];
}

/// Web URL rules: `http` and `https` default ports are stripped and query
/// parameters are sorted by key, dropping those without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Web;

impl Profile for Web {
    const DEFAULT_PORTS: &'static [(&'static str, u16)] = &[("http", 80), ("https", 443)];

    fn normalize_query(query: &str) -> Result<String, UriError> {
        // Sort on normalized keys so that re-parsing yields the same order.
        let normalized = normalize_query(query)?;
        Ok(sort_query(&normalized))
    }
}
