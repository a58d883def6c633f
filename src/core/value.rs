//! Immutable URI and URL values.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use crate::component::normalizer::{
    normalize_fragment, normalize_host, normalize_path, normalize_scheme, normalize_user_info,
};
use crate::core::parser::{split, split_authority};
use crate::core::profile::{Generic, Profile, Web};
use crate::core::resolver;
use crate::error::UriError;
use crate::types::UriComponents;

/// A generic RFC 3986 URI.
pub type Uri = UriValue<Generic>;

/// A web URL: default ports of `http`/`https` are stripped and query
/// parameters are sorted.
pub type Url = UriValue<Web>;

/// A parsed, normalized and immutable URI.
///
/// All components are normalized when the value is built; every
/// `with_*` method returns a new value. Use the [`Uri`] and [`Url`]
/// aliases rather than naming the profile directly.
///
/// # Examples
///
/// ```
/// use urivalue::Uri;
///
/// let uri = Uri::parse("HTTP://User@Example.COM:8042/over/./there?name=ferret#nose")?;
/// assert_eq!(uri.scheme(), "http");
/// assert_eq!(uri.authority(), Some("User@example.com:8042"));
/// assert_eq!(uri.host(), Some("example.com"));
/// assert_eq!(uri.port(), Some(8042));
/// assert_eq!(uri.path(), "/over/there");
/// assert_eq!(uri.display(), "http://example.com:8042/over/there?name=ferret#nose");
/// # Ok::<(), urivalue::UriError>(())
/// ```
#[derive(Clone)]
pub struct UriValue<P: Profile> {
    scheme: String,
    authority: Option<String>,
    user_info: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    path: String,
    query: Option<String>,
    fragment: Option<String>,
    profile: PhantomData<P>,
}

impl<P: Profile> UriValue<P> {
    /// Parse and normalize a URI.
    ///
    /// Decomposition never fails on its own; errors come from the
    /// component that does not validate. A scheme is required, so the empty
    /// string fails with [`UriError::InvalidScheme`].
    pub fn parse(uri: &str) -> Result<Self, UriError> {
        tracing::trace!("Parsing URI '{}'", uri);
        let parts = split(uri)?;
        Self::build(
            parts.scheme,
            parts.authority,
            parts.path,
            parts.query,
            parts.fragment,
        )
    }

    /// Build a URI from individual components.
    ///
    /// A missing path is treated as empty; a missing scheme is an error.
    pub fn from_components(components: UriComponents) -> Result<Self, UriError> {
        Self::build(
            components.scheme.as_deref(),
            components.authority.as_deref(),
            components.path.as_deref().unwrap_or(""),
            components.query.as_deref(),
            components.fragment.as_deref(),
        )
    }

    /// Parse `base` and resolve `reference` against it.
    ///
    /// # Examples
    ///
    /// ```
    /// use urivalue::Uri;
    ///
    /// let uri = Uri::resolve_str("http://a/b/c/d;p?q", "../g", true)?;
    /// assert_eq!(uri.to_string(), "http://a/b/g");
    /// # Ok::<(), urivalue::UriError>(())
    /// ```
    pub fn resolve_str(base: &str, reference: &str, strict: bool) -> Result<Self, UriError> {
        Self::parse(base)?.resolve_with(reference, strict)
    }

    /// Resolve a reference against this URI with strict scheme handling.
    pub fn resolve(&self, reference: &str) -> Result<Self, UriError> {
        self.resolve_with(reference, true)
    }

    /// Resolve a reference against this URI.
    ///
    /// When `strict` is false a reference carrying this URI's own scheme is
    /// resolved as if the scheme were absent, so `http:g` against an `http`
    /// base behaves like `g`.
    pub fn resolve_with(&self, reference: &str, strict: bool) -> Result<Self, UriError> {
        let target = resolver::resolve(&self.to_components(), reference, strict)?;
        Self::from_components(target)
    }

    fn build(
        scheme: Option<&str>,
        authority: Option<&str>,
        path: &str,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Result<Self, UriError> {
        let scheme = normalize_scheme(scheme.unwrap_or(""))?;

        let (user_info, host, port) = match authority {
            Some(authority) => {
                let raw = split_authority(authority)?;
                let user_info = raw.user_info.map(normalize_user_info).transpose()?;
                let host = normalize_host(raw.host)?;
                let port = raw.port.filter(|port| P::default_port(&scheme) != Some(*port));
                (user_info, Some(host), port)
            }
            None => (None, None, None),
        };

        let path = normalize_path(path, host.is_some())?;
        let query = query.map(P::normalize_query).transpose()?;
        let fragment = fragment.map(normalize_fragment).transpose()?;

        let authority = host
            .as_deref()
            .map(|host| compose_authority(user_info.as_deref(), host, port));

        Ok(Self {
            scheme,
            authority,
            user_info,
            host,
            port,
            path,
            query,
            fragment,
            profile: PhantomData,
        })
    }

    /// The lowercase scheme.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The authority as `[userinfo@]host[:port]`, if present.
    pub fn authority(&self) -> Option<&str> {
        self.authority.as_deref()
    }

    /// The user info, if the authority has one.
    pub fn user_info(&self) -> Option<&str> {
        self.user_info.as_deref()
    }

    /// The host; `Some("")` for an empty authority such as `file:///`.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The port, unless absent or equal to the scheme's default.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// The path, possibly empty.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The query; `Some("")` when the URI ends in `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// The fragment; `Some("")` when the URI ends in `#`.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether an authority component is present.
    pub fn has_authority(&self) -> bool {
        self.host.is_some()
    }

    /// Whether this is an absolute URI in the RFC 3986 sense (no fragment).
    pub fn is_absolute(&self) -> bool {
        self.fragment.is_none()
    }

    /// The path split on `/`, without the leading empty segment of an
    /// absolute path.
    pub fn path_segments(&self) -> impl Iterator<Item = &str> {
        let path = (!self.path.is_empty())
            .then(|| self.path.strip_prefix('/').unwrap_or(&self.path));
        path.into_iter().flat_map(|path| path.split('/'))
    }

    /// Return a copy with a different scheme.
    pub fn with_scheme(&self, scheme: &str) -> Result<Self, UriError> {
        self.rebuild(|components| components.scheme = Some(scheme.to_string()))
    }

    /// Return a copy with a different authority, or none.
    pub fn with_authority(&self, authority: Option<&str>) -> Result<Self, UriError> {
        self.rebuild(|components| components.authority = authority.map(str::to_string))
    }

    /// Return a copy with a different path.
    pub fn with_path(&self, path: &str) -> Result<Self, UriError> {
        self.rebuild(|components| components.path = Some(path.to_string()))
    }

    /// Return a copy with a different query, or none.
    pub fn with_query(&self, query: Option<&str>) -> Result<Self, UriError> {
        self.rebuild(|components| components.query = query.map(str::to_string))
    }

    /// Return a copy with a different fragment, or none.
    pub fn with_fragment(&self, fragment: Option<&str>) -> Result<Self, UriError> {
        self.rebuild(|components| components.fragment = fragment.map(str::to_string))
    }

    /// Return a copy without the fragment.
    pub fn without_fragment(&self) -> Self {
        Self {
            fragment: None,
            ..self.clone()
        }
    }

    fn rebuild(&self, change: impl FnOnce(&mut UriComponents)) -> Result<Self, UriError> {
        let mut components = self.to_components();
        change(&mut components);
        Self::from_components(components)
    }

    /// The five top-level components.
    pub fn to_components(&self) -> UriComponents {
        UriComponents {
            scheme: Some(self.scheme.clone()),
            authority: self.authority.clone(),
            path: Some(self.path.clone()),
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        }
    }

    /// Re-normalize this value under another profile.
    ///
    /// # Examples
    ///
    /// ```
    /// use urivalue::{Uri, Url};
    ///
    /// let uri = Uri::parse("http://e.com:80/?b&a")?;
    /// let url: Url = uri.into_profile()?;
    /// assert_eq!(url.to_string(), "http://e.com/?a&b");
    /// # Ok::<(), urivalue::UriError>(())
    /// ```
    pub fn into_profile<Q: Profile>(self) -> Result<UriValue<Q>, UriError> {
        UriValue::<Q>::from_components(self.to_components())
    }

    /// The serialization without user info, safe for logs and display.
    pub fn display(&self) -> String {
        let mut out = String::new();
        let authority = self
            .host
            .as_deref()
            .map(|host| compose_authority(None, host, self.port));
        write_uri(&mut out, &self.scheme, authority.as_deref(), self);
        out
    }

    /// Compare serializations, returning `-1`, `0` or `1`.
    pub fn compare_to(&self, other: &Self) -> i8 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Convert into a `url::Url`.
    pub fn to_url(&self) -> Result<url::Url, UriError> {
        Ok(url::Url::parse(&self.to_string())?)
    }
}

fn compose_authority(user_info: Option<&str>, host: &str, port: Option<u16>) -> String {
    let mut authority = String::new();
    if let Some(user_info) = user_info {
        authority.push_str(user_info);
        authority.push('@');
    }
    authority.push_str(host);
    if let Some(port) = port {
        authority.push(':');
        authority.push_str(&port.to_string());
    }
    authority
}

fn write_uri<P: Profile>(out: &mut String, scheme: &str, authority: Option<&str>, uri: &UriValue<P>) {
    out.push_str(scheme);
    out.push(':');
    if let Some(authority) = authority {
        out.push_str("//");
        out.push_str(authority);
    }
    out.push_str(&uri.path);
    if let Some(query) = &uri.query {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = &uri.fragment {
        out.push('#');
        out.push_str(fragment);
    }
}

impl<P: Profile> fmt::Display for UriValue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_uri(&mut out, &self.scheme, self.authority.as_deref(), self);
        f.write_str(&out)
    }
}

impl<P: Profile> fmt::Debug for UriValue<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UriValue").field(&self.to_string()).finish()
    }
}

impl<P: Profile> PartialEq for UriValue<P> {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme
            && self.authority == other.authority
            && self.path == other.path
            && self.query == other.query
            && self.fragment == other.fragment
    }
}

impl<P: Profile> Eq for UriValue<P> {}

impl<P: Profile> Hash for UriValue<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme.hash(state);
        self.authority.hash(state);
        self.path.hash(state);
        self.query.hash(state);
        self.fragment.hash(state);
    }
}

impl<P: Profile> PartialOrd for UriValue<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Profile> Ord for UriValue<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl<P: Profile> FromStr for UriValue<P> {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<P: Profile> TryFrom<&str> for UriValue<P> {
    type Error = UriError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<P: Profile> TryFrom<String> for UriValue<P> {
    type Error = UriError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl<P: Profile> TryFrom<&url::Url> for UriValue<P> {
    type Error = UriError;

    fn try_from(value: &url::Url) -> Result<Self, Self::Error> {
        Self::parse(value.as_str())
    }
}

impl<P: Profile> TryFrom<&UriValue<P>> for url::Url {
    type Error = UriError;

    fn try_from(value: &UriValue<P>) -> Result<Self, Self::Error> {
        value.to_url()
    }
}

#[cfg(feature = "serde")]
impl<P: Profile> serde::Serialize for UriValue<P> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: Profile> serde::Deserialize<'de> for UriValue<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
