//! Unbounded base-10 integers.
//!
//! Shift offsets and length bounds may be any integer, so command arguments
//! are kept as their canonical digit string rather than squeezed into a
//! machine word. Only the two operations the interpreter needs are provided:
//! reduction modulo a small divisor and a clamped conversion to `i64`.

use std::fmt;
use std::str::FromStr;

/// A signed decimal integer of any magnitude.
///
/// Parsing accepts an optional `+` or `-` followed by one or more ASCII
/// digits. The stored form is canonical: no `+`, no leading zeros and no
/// negative zero, so equal values compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    negative: bool,
    digits: String,
}

impl Integer {
    /// Euclidean remainder, always in `0..modulus`.
    pub fn rem_euclid(&self, modulus: u32) -> u32 {
        let modulus = u64::from(modulus.max(1));
        let rem = self
            .digits
            .bytes()
            .fold(0u64, |acc, d| (acc * 10 + u64::from(d - b'0')) % modulus);
        if self.negative && rem != 0 {
            (modulus - rem) as u32
        } else {
            rem as u32
        }
    }

    /// The value as `i64`, clamped to `i64::MIN..=i64::MAX`.
    pub fn saturating_i64(&self) -> i64 {
        self.to_string().parse::<i64>().unwrap_or(if self.negative {
            i64::MIN
        } else {
            i64::MAX
        })
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            digits: value.unsigned_abs().to_string(),
        }
    }
}

impl FromStr for Integer {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
            return Err(());
        }

        let trimmed = body.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Ok(Self {
            negative: negative && digits != "0",
            digits: digits.to_string(),
        })
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.digits)
        } else {
            f.write_str(&self.digits)
        }
    }
}
