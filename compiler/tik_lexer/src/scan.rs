//! Byte-level search helpers for the tokenizer.
//!
//! All searches run over a byte slice already bounded at the end of the
//! trimmed text body and return absolute offsets into that slice. Brace and
//! delimiter lookups use memchr so that scanning stays a single SIMD pass
//! no matter how dense the directives are.

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines separate memchr calls when more bytes are searched for than
/// `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Offset of the next `{` or `}` at or after `from`.
#[inline]
pub(crate) fn find_brace(bytes: &[u8], from: usize) -> Option<usize> {
    memchr::memchr2(b'{', b'}', &bytes[from..]).map(|off| from + off)
}

/// Offset of the next `byte` at or after `from`.
#[inline]
pub(crate) fn find_byte(byte: u8, bytes: &[u8], from: usize) -> Option<usize> {
    memchr::memchr(byte, &bytes[from..]).map(|off| from + off)
}

/// Offset of the next byte that ends or invalidates a string placeholder
/// body: `"`, `\`, `{` or `}`.
pub(crate) fn find_string_delim(bytes: &[u8], from: usize) -> Option<usize> {
    let remaining = &bytes[from..];
    let primary = memchr::memchr3(b'"', b'\\', b'{', remaining);
    let closing = memchr::memchr(b'}', remaining);
    earliest_of(primary, closing).map(|off| from + off)
}

/// Whether the byte at `pos` is escaped.
///
/// Counts the run of backslashes immediately before `pos`: an odd count
/// escapes, an even count leaves the byte live. The backward scan stops at
/// the first non-backslash byte, so each run is visited once per brace.
#[inline]
pub(crate) fn is_escaped(bytes: &[u8], pos: usize) -> bool {
    bytes[..pos].iter().rev().take_while(|&&b| b == b'\\').count() % 2 == 1
}

/// Byte length of the leading Unicode whitespace of `s`.
#[inline]
pub(crate) fn leading_whitespace(s: &str) -> usize {
    s.len() - s.trim_start().len()
}
