//! Syntax checks for individual URI components.
//!
//! Validators run on already re-encoded text, so they only accept literal
//! characters from the component's class and well-formed `%XX` triplets.

use std::net::Ipv6Addr;
use std::sync::LazyLock;

use regex::Regex;

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("component pattern must compile")
}

static SCHEME: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z][a-zA-Z0-9+.\-]*$"));

static USER_INFO: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?:[A-Za-z0-9\-._~!$&'()*+,;=:]|%[0-9A-Fa-f]{2})*$"));

static REG_NAME: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?:[A-Za-z0-9\-._~!$&'()*+,;=]|%[0-9A-Fa-f]{2})*$"));

static PATH: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?:[A-Za-z0-9\-._~!$&'()*+,;=:@/]|%[0-9A-Fa-f]{2})*$"));

static QUERY_OR_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?:[A-Za-z0-9\-._~!$&'()*+,;=:@/?]|%[0-9A-Fa-f]{2})*$"));

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$")
});

static IPV_FUTURE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^v[0-9a-f]+\.[a-z0-9\-._~!$&'()*+,;=:]+$"));

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`; the empty string is invalid.
pub fn is_valid_scheme(scheme: &str) -> bool {
    SCHEME.is_match(scheme)
}

/// `*( unreserved / pct-encoded / sub-delims / ":" )`
pub fn is_valid_user_info(user_info: &str) -> bool {
    USER_INFO.is_match(user_info)
}

/// Check a path's characters and its shape relative to the authority.
///
/// With an authority the path must be empty or absolute. Without one it
/// must not begin with `//`, which would read back as an authority.
pub fn is_valid_path(path: &str, has_authority: bool) -> bool {
    if !PATH.is_match(path) {
        return false;
    }
    if has_authority {
        path.is_empty() || path.starts_with('/')
    } else {
        !path.starts_with("//")
    }
}

/// `*( pchar / "/" / "?" )`
pub fn is_valid_query(query: &str) -> bool {
    QUERY_OR_FRAGMENT.is_match(query)
}

/// Same grammar as the query.
pub fn is_valid_fragment(fragment: &str) -> bool {
    QUERY_OR_FRAGMENT.is_match(fragment)
}

/// `IP-literal / IPv4address / reg-name`
///
/// # Examples
///
/// ```
/// use urivalue::component::validator::is_valid_host;
///
/// assert!(is_valid_host("example.com"));
/// assert!(is_valid_host("[::1]"));
/// assert!(is_valid_host(""));
/// assert!(!is_valid_host("[::g]"));
/// ```
pub fn is_valid_host(host: &str) -> bool {
    if host.contains('[') {
        return is_valid_ip_literal(host);
    }
    is_valid_ipv4(host) || is_valid_reg_name(host)
}

/// `"[" ( IPv6address / IPvFuture ) "]"`
pub fn is_valid_ip_literal(host: &str) -> bool {
    let Some(inner) = host
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return false;
    };

    IPV_FUTURE.is_match(inner) || inner.parse::<Ipv6Addr>().is_ok()
}

/// Dotted-quad with every octet in `0..=255` and no leading zeros.
pub fn is_valid_ipv4(host: &str) -> bool {
    IPV4.is_match(host)
}

/// `*( unreserved / pct-encoded / sub-delims )`
pub fn is_valid_reg_name(host: &str) -> bool {
    REG_NAME.is_match(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_validation() {
        assert!(is_valid_scheme("http"));
        assert!(is_valid_scheme("svn+ssh"));
        assert!(is_valid_scheme("X-Custom.1"));

        assert!(!is_valid_scheme(""));
        assert!(!is_valid_scheme("1http"));
        assert!(!is_valid_scheme("ht tp"));
        assert!(!is_valid_scheme("-http"));
    }

    #[test]
    fn test_path_validation() {
        assert!(is_valid_path("/a/b;c=1/@x:y", true));
        assert!(is_valid_path("", true));
        assert!(is_valid_path("a/b", false));
        assert!(is_valid_path("%2F", false));

        assert!(!is_valid_path("a/b", true)); // relative path after authority
        assert!(!is_valid_path("//a", false)); // would read as authority
        assert!(!is_valid_path("/a b", true));
        assert!(!is_valid_path("/100%", true));
        assert!(!is_valid_path("/a?b", true));
    }

    #[test]
    fn test_query_and_fragment_validation() {
        assert!(is_valid_query("a=1&b=/x?y"));
        assert!(is_valid_query(""));
        assert!(is_valid_fragment("section-1/sub?x"));

        assert!(!is_valid_query("a#b"));
        assert!(!is_valid_fragment("a b"));
    }

    #[test]
    fn test_user_info_validation() {
        assert!(is_valid_user_info("user:secret"));
        assert!(is_valid_user_info("us%40er"));
        assert!(!is_valid_user_info("us@er"));
        assert!(!is_valid_user_info("us/er"));
    }

    #[test]
    fn test_ipv4_validation() {
        assert!(is_valid_ipv4("127.0.0.1"));
        assert!(is_valid_ipv4("255.255.255.255"));

        assert!(!is_valid_ipv4("256.0.0.1"));
        assert!(!is_valid_ipv4("1.2.3"));
        assert!(!is_valid_ipv4("01.2.3.4"));
    }

    #[test]
    fn test_ip_literal_validation() {
        assert!(is_valid_ip_literal("[::1]"));
        assert!(is_valid_ip_literal("[2001:db8::7]"));
        assert!(is_valid_ip_literal("[::ffff:192.0.2.1]"));
        assert!(is_valid_ip_literal("[v1.fe80::a+en1]"));
        assert!(is_valid_ip_literal("[V7.x:y]"));

        assert!(!is_valid_ip_literal("::1"));
        assert!(!is_valid_ip_literal("[::1"));
        assert!(!is_valid_ip_literal("[1:2:3:4:5:6:7:8:9]"));
        assert!(!is_valid_ip_literal("[v.x]"));
        assert!(!is_valid_ip_literal("[]"));
    }

    #[test]
    fn test_host_validation() {
        assert!(is_valid_host("example.com"));
        assert!(is_valid_host("exa%20mple"));
        assert!(is_valid_host("192.168.0.1"));
        assert!(is_valid_host("999.1.1.1")); // falls back to reg-name

        assert!(!is_valid_host("a[b]"));
        assert!(!is_valid_host("ex ample"));
        assert!(!is_valid_host("host:80"));
    }
}
