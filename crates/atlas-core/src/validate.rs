//! Input validators and strict decimal parsers.
//!
//! City names and numbers arrive from the textual command language as raw
//! octet fields.  Names may contain arbitrary bytes (including multi-byte
//! UTF-8 sequences) except control characters and the field separator.
//! Numbers are plain decimal ASCII: no `+` sign, no whitespace, `-` only on
//! years.  Anything else is malformed input.

use crate::RouteId;

// ── Value validators ──────────────────────────────────────────────────────────

/// A city name is a non-empty octet string containing no byte in `0..=31`
/// and no `b';'`.
pub fn is_valid_city_name(name: &[u8]) -> bool {
    !name.is_empty() && !name.iter().any(|&b| b <= 31 || b == b';')
}

/// Road lengths are positive (the upper bound is the `u32` domain itself).
#[inline]
pub fn is_valid_length(length: u32) -> bool {
    length > 0
}

/// Build/repair years span the whole `i32` domain except 0 — there is no
/// year zero.
#[inline]
pub fn is_valid_year(year: i32) -> bool {
    year != 0
}

// ── Decimal parsers ───────────────────────────────────────────────────────────

/// Parse an unsigned decimal field.  Rejects empty fields, signs, and any
/// non-digit byte; `None` on overflow past `u32::MAX`.
pub fn parse_unsigned(field: &[u8]) -> Option<u32> {
    if field.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for &b in field {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value
            .checked_mul(10)?
            .checked_add(u32::from(b - b'0'))?;
    }
    Some(value)
}

/// Parse a signed decimal field: an optional leading `-` followed by at
/// least one digit.  A leading `+` is malformed.  `None` outside the `i32`
/// domain (note `i32::MIN` itself parses).
pub fn parse_year(field: &[u8]) -> Option<i32> {
    let (negative, digits) = match field.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, field),
    };
    if digits.is_empty() {
        return None;
    }
    let mut value: i64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value * 10 + i64::from(b - b'0');
        // Bail before the accumulator can outgrow i64.
        if value > i64::from(i32::MAX) + 1 {
            return None;
        }
    }
    let value = if negative { -value } else { value };
    i32::try_from(value).ok()
}

/// Parse a route-number field: unsigned decimal in `1..=999`.
pub fn parse_route_id(field: &[u8]) -> Option<RouteId> {
    RouteId::new(parse_unsigned(field)?)
}
