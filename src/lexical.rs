/*!
Character-class predicates shared by the typed parsers. These are the shape
checks that run before any numeric conversion.
*/

/// True if `s` is non-empty and made entirely of ASCII decimal digits.
/// An empty string is not digits; "no input" and "zero" stay distinct.
#[inline]
#[must_use]
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// True if `s` is [digits][is_digits] after removing at most one leading
/// `+` or `-`. A bare sign is not an integer.
#[inline]
#[must_use]
pub fn is_valid_int(s: &str) -> bool {
    let digits = match s.as_bytes() {
        [b'+' | b'-', ..] => &s[1..],
        _ => s,
    };

    is_digits(digits)
}

/// True if `s` is non-empty and made entirely of `0-9`, `a-f` and `A-F`.
#[inline]
#[must_use]
pub fn is_hex_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// ASCII case-insensitive equality. Only `A-Z` are folded; every other byte,
/// including non-ASCII ones, must match exactly.
#[inline]
#[must_use]
pub fn iequals(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
