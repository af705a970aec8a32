// SPDX-License-Identifier: MPL-2.0
//! Rail-fence key parsing.
//!
//! The key field is free text, so parsing follows browser `parseInt`
//! rules rather than `str::parse`: leading whitespace is skipped, an
//! optional sign and `0x` prefix are accepted, and parsing stops at the
//! first non-digit. `"3 rails"` therefore reads as `3`.

/// Result of reading the rail-fence key field.
///
/// `Empty` and `NotANumber` are kept apart: only a non-empty value that
/// fails to parse is a format error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailKey {
    /// Nothing but whitespace was entered.
    Empty,
    /// Something was entered but it has no leading integer.
    NotANumber,
    /// Leading integer of the input (saturated to the `i64` range).
    Number(i64),
}

impl RailKey {
    /// Parses the raw field value.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Empty;
        }
        parse_leading_integer(raw).map_or(Self::NotANumber, Self::Number)
    }

    /// Returns the parsed number when it is a usable rail count (>= 2).
    #[must_use]
    pub fn rails(self) -> Option<i64> {
        match self {
            Self::Number(n) if n >= MIN_RAILS => Some(n),
            _ => None,
        }
    }
}

/// Smallest rail count the cipher accepts.
pub const MIN_RAILS: i64 = 2;

/// Whitespace as the browser sees it: Unicode `White_Space` plus the BOM.
pub(crate) fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn parse_leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start_matches(is_form_whitespace);

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        seen_digit = true;
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(d));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
