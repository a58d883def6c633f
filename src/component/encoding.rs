//! Percent-encoding helpers and the character classes of RFC 3986.
//!
//! Normalization of every component follows the same two steps:
//! [`decode`] un-escapes triplets of unreserved characters and uppercases
//! the rest, then [`encode`] escapes whatever the component does not allow.

/// A set of ASCII characters allowed to appear literally in a component.
///
/// Unreserved characters (`A-Z a-z 0-9 - . _ ~`) are always part of the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharClass {
    extra: &'static str,
}

impl CharClass {
    const fn with(extra: &'static str) -> Self {
        Self { extra }
    }

    /// Check whether `ch` may appear unescaped.
    pub fn contains(&self, ch: char) -> bool {
        is_unreserved(ch) || self.extra.contains(ch)
    }
}

/// `ALPHA / DIGIT / "-" / "." / "_" / "~"`
pub const UNRESERVED: CharClass = CharClass::with("");

/// User info: unreserved, sub-delims and `:`.
pub const USER_INFO: CharClass = CharClass::with("!$&'()*+,;=:");

/// Registered names: unreserved and sub-delims.
pub const REG_NAME: CharClass = CharClass::with("!$&'()*+,;=");

/// IP literals additionally keep their brackets and colons.
pub const IP_LITERAL: CharClass = CharClass::with("!$&'()*+,;=:[]");

/// Paths: pchar and `/`.
pub const PATH: CharClass = CharClass::with("!$&'()*+,;=:@/");

/// Queries: pchar, `/` and `?`.
pub const QUERY: CharClass = CharClass::with("!$&'()*+,;=:@/?");

/// Fragments share the query character set.
pub const FRAGMENT: CharClass = QUERY;

/// Check whether `ch` is in the unreserved set.
pub fn is_unreserved(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '~')
}

/// Check whether `ch` is one of the sub-delims `!$&'()*+,;=`.
pub fn is_sub_delim(ch: char) -> bool {
    matches!(
        ch,
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | ';' | '='
    )
}

/// Percent-encode every character of `component` outside `allowed`.
///
/// Existing valid `%XX` triplets are left alone so already-encoded input is
/// never double-encoded. Non-ASCII characters are encoded byte by byte as
/// UTF-8 with uppercase hex digits.
///
/// # Examples
///
/// ```
/// use urivalue::component::encoding::{encode, PATH};
///
/// assert_eq!(encode("/a b/%41", PATH), "/a%20b/%41");
/// assert_eq!(encode("/é", PATH), "/%C3%A9");
/// ```
pub fn encode(component: &str, allowed: CharClass) -> String {
    let bytes = component.as_bytes();
    let mut encoded = String::with_capacity(component.len());

    for (index, ch) in component.char_indices() {
        // The two hex digits that follow are unreserved and copied as-is.
        if ch == '%' && triplet_at(bytes, index).is_some() {
            encoded.push('%');
        } else if allowed.contains(ch) {
            encoded.push(ch);
        } else {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                push_triplet(&mut encoded, byte);
            }
        }
    }

    encoded
}

/// Normalize the percent-encoded triplets of `component`.
///
/// A triplet whose byte is an ASCII character in `keep` is replaced by that
/// character; every other triplet is re-emitted with uppercase hex digits.
/// A stray `%` becomes `%25`, so decoding never forms a new triplet out of
/// its neighbours (`%4%31` must not turn into `%41`).
///
/// # Examples
///
/// ```
/// use urivalue::component::encoding::{decode, UNRESERVED};
///
/// assert_eq!(decode("%7euser%2fname", UNRESERVED), "~user%2Fname");
/// ```
pub fn decode(component: &str, keep: CharClass) -> String {
    let bytes = component.as_bytes();
    let mut decoded = String::with_capacity(component.len());
    let mut copied = 0;
    let mut index = 0;

    while index < bytes.len() {
        match triplet_at(bytes, index) {
            Some(byte) => {
                decoded.push_str(&component[copied..index]);
                let ch = char::from(byte);
                if byte.is_ascii() && keep.contains(ch) {
                    decoded.push(ch);
                } else {
                    push_triplet(&mut decoded, byte);
                }
                index += 3;
                copied = index;
            }
            None if bytes[index] == b'%' => {
                decoded.push_str(&component[copied..index]);
                decoded.push_str("%25");
                index += 1;
                copied = index;
            }
            None => index += 1,
        }
    }

    decoded.push_str(&component[copied..]);
    decoded
}

/// Decode `component` against `keep`, then encode it against `allowed`.
pub fn reencode(component: &str, keep: CharClass, allowed: CharClass) -> String {
    encode(&decode(component, keep), allowed)
}

/// The byte encoded by a `%XX` triplet starting at `index`, if there is one.
fn triplet_at(bytes: &[u8], index: usize) -> Option<u8> {
    if bytes.get(index) != Some(&b'%') {
        return None;
    }
    let high = hex_value(*bytes.get(index + 1)?)?;
    let low = hex_value(*bytes.get(index + 2)?)?;
    Some(high << 4 | low)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn push_triplet(out: &mut String, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    out.push('%');
    out.push(char::from(HEX[usize::from(byte >> 4)]));
    out.push(char::from(HEX[usize::from(byte & 0x0F)]));
}
