//! # Ciphers
//!
//! Two classical, single-pass character maps. Neither keeps state between
//! characters and neither can fail: anything the cipher does not know how to
//! map is copied through verbatim.
//!
//! - [`SubstitutionCipher`]: positional lookup between two alphabets.
//! - [`ShiftCipher`]: rotation of ASCII letters within their own case.
//!
//! [`Cipher`] is the tagged union stored on a record. All three implement
//! [`TextCipher`].

use crate::integer::Integer;
use std::fmt;
use std::str::FromStr;

/// Encode/decode capability shared by every cipher variant.
pub trait TextCipher {
    fn encode(&self, text: &str) -> String;
    fn decode(&self, text: &str) -> String;
}

/// The name a cipher is addressed by in the command language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherKind {
    Substitution,
    Shift,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherKind::Substitution => write!(f, "SUBSTITUTION"),
            CipherKind::Shift => write!(f, "SHIFT"),
        }
    }
}

impl FromStr for CipherKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBSTITUTION" => Ok(CipherKind::Substitution),
            "SHIFT" => Ok(CipherKind::Shift),
            _ => Err(()),
        }
    }
}

/// Character-for-character replacement between two alphabets.
///
/// Both alphabets are lower-cased on construction. The case of the output
/// follows the case of the input character, never the alphabet. When an
/// alphabet repeats a character the first occurrence wins, and a position
/// with no counterpart in the other alphabet is left unmapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionCipher {
    source: Vec<char>,
    target: Vec<char>,
}

impl SubstitutionCipher {
    pub fn new(source_alphabet: &str, target_alphabet: &str) -> Self {
        Self {
            source: source_alphabet.to_lowercase().chars().collect(),
            target: target_alphabet.to_lowercase().chars().collect(),
        }
    }

    pub fn source_alphabet(&self) -> String {
        self.source.iter().collect()
    }

    pub fn target_alphabet(&self) -> String {
        self.target.iter().collect()
    }

    fn translate(text: &str, from: &[char], to: &[char]) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            let mapped = from
                .iter()
                .position(|&f| f == lower(c))
                .and_then(|pos| to.get(pos).copied());
            match mapped {
                Some(m) if c.is_uppercase() => out.extend(m.to_uppercase()),
                Some(m) => out.push(m),
                None => out.push(c),
            }
        }
        out
    }
}

impl TextCipher for SubstitutionCipher {
    fn encode(&self, text: &str) -> String {
        Self::translate(text, &self.source, &self.target)
    }

    fn decode(&self, text: &str) -> String {
        Self::translate(text, &self.target, &self.source)
    }
}

/// Rotation of ASCII letters by a fixed offset, modulo 26.
///
/// The offset keeps its full value for display; only its residue is used
/// for rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCipher {
    shift: Integer,
    offset: u8,
}

impl ShiftCipher {
    pub fn new(shift: i64) -> Self {
        Self::from_integer(Integer::from(shift))
    }

    pub fn from_integer(shift: Integer) -> Self {
        let offset = shift.rem_euclid(26) as u8;
        Self { shift, offset }
    }

    pub fn shift(&self) -> &Integer {
        &self.shift
    }

    fn rotate(text: &str, by: u8) -> String {
        text.chars()
            .map(|c| {
                if !c.is_ascii_alphabetic() {
                    return c;
                }
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                (((c as u8 - base) + by) % 26 + base) as char
            })
            .collect()
    }
}

impl TextCipher for ShiftCipher {
    fn encode(&self, text: &str) -> String {
        Self::rotate(text, self.offset)
    }

    fn decode(&self, text: &str) -> String {
        Self::rotate(text, (26 - self.offset) % 26)
    }
}

/// The cipher a record was created with, together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cipher {
    Substitution(SubstitutionCipher),
    Shift(ShiftCipher),
}

impl Cipher {
    pub fn substitution(source_alphabet: &str, target_alphabet: &str) -> Self {
        Cipher::Substitution(SubstitutionCipher::new(source_alphabet, target_alphabet))
    }

    pub fn shift(shift: i64) -> Self {
        Cipher::Shift(ShiftCipher::new(shift))
    }

    pub fn kind(&self) -> CipherKind {
        match self {
            Cipher::Substitution(_) => CipherKind::Substitution,
            Cipher::Shift(_) => CipherKind::Shift,
        }
    }
}

impl TextCipher for Cipher {
    fn encode(&self, text: &str) -> String {
        match self {
            Cipher::Substitution(c) => c.encode(text),
            Cipher::Shift(c) => c.encode(text),
        }
    }

    fn decode(&self, text: &str) -> String {
        match self {
            Cipher::Substitution(c) => c.decode(text),
            Cipher::Shift(c) => c.decode(text),
        }
    }
}

/// Single-char lower-casing; characters whose lower-case form expands to
/// several chars are kept as they are.
fn lower(c: char) -> char {
    let mut it = c.to_lowercase();
    match (it.next(), it.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_encodes_classic_caesar() {
        let cipher = ShiftCipher::new(3);
        assert_eq!(cipher.encode("Hi there"), "Kl wkhuh");
        assert_eq!(cipher.decode("Kl wkhuh"), "Hi there");
    }

    #[test]
    fn shift_wraps_at_end_of_alphabet() {
        let cipher = ShiftCipher::new(1);
        assert_eq!(cipher.encode("zZ"), "aA");
        assert_eq!(cipher.decode("aA"), "zZ");
    }

    #[test]
    fn shift_round_trips_every_letter_for_negative_and_large_offsets() {
        let letters: String = ('a'..='z').chain('A'..='Z').collect();
        for shift in [-1000, -53, -27, -26, -1, 0, 1, 13, 25, 26, 27, 52, 1000] {
            let cipher = ShiftCipher::new(shift);
            let encoded = cipher.encode(&letters);
            assert_eq!(cipher.decode(&encoded), letters, "shift {}", shift);
        }
    }

    #[test]
    fn shift_handles_extreme_offsets() {
        for shift in [i64::MIN, i64::MAX] {
            let cipher = ShiftCipher::new(shift);
            assert_eq!(cipher.decode(&cipher.encode("Hello")), "Hello");
        }
    }

    #[test]
    fn negative_shift_moves_backwards() {
        let cipher = ShiftCipher::new(-1);
        assert_eq!(cipher.encode("abc"), "zab");
    }

    #[test]
    fn shift_leaves_non_letters_alone() {
        let cipher = ShiftCipher::new(5);
        assert_eq!(cipher.encode("123 -_!? é"), "123 -_!? é");
    }

    #[test]
    fn substitution_maps_by_position() {
        let cipher = SubstitutionCipher::new("abc", "xyz");
        assert_eq!(cipher.encode("abc"), "xyz");
        assert_eq!(cipher.decode("xyz"), "abc");
    }

    #[test]
    fn substitution_preserves_input_case() {
        let cipher = SubstitutionCipher::new("ABC", "XyZ");
        assert_eq!(cipher.source_alphabet(), "abc");
        assert_eq!(cipher.target_alphabet(), "xyz");
        assert_eq!(cipher.encode("aBc Cab"), "xYz Zxy");
        assert_eq!(cipher.decode("xYz Zxy"), "aBc Cab");
    }

    #[test]
    fn substitution_passes_unknown_characters_through() {
        let cipher = SubstitutionCipher::new("ab", "ba");
        assert_eq!(cipher.encode("abc, d!"), "bac, d!");
    }

    #[test]
    fn substitution_round_trips_with_bijective_alphabets() {
        let source = "abcdefghijklmnopqrstuvwxyz";
        let target = "qwertyuiopasdfghjklzxcvbnm";
        let cipher = SubstitutionCipher::new(source, target);
        let text = "The Quick Brown Fox, jumps over 13 lazy dogs.";
        assert_eq!(cipher.decode(&cipher.encode(text)), text);
    }

    #[test]
    fn substitution_with_short_target_leaves_tail_unmapped() {
        let cipher = SubstitutionCipher::new("abc", "x");
        assert_eq!(cipher.encode("abc"), "xbc");
    }

    #[test]
    fn substitution_with_duplicate_target_is_lossy() {
        let cipher = SubstitutionCipher::new("ab", "xx");
        let encoded = cipher.encode("ab");
        assert_eq!(encoded, "xx");
        assert_eq!(cipher.decode(&encoded), "aa");
    }

    #[test]
    fn shift_accepts_offsets_beyond_i64() {
        let shift: Integer = "100000000000000000000".parse().unwrap();
        let cipher = ShiftCipher::from_integer(shift);
        assert_eq!(cipher.shift().to_string(), "100000000000000000000");
        // 10^20 is 22 mod 26
        assert_eq!(cipher.encode("abc"), ShiftCipher::new(22).encode("abc"));
        assert_eq!(cipher.decode(&cipher.encode("Hello")), "Hello");
    }

    #[test]
    fn cipher_kind_parses_and_displays() {
        assert_eq!("SHIFT".parse::<CipherKind>(), Ok(CipherKind::Shift));
        assert_eq!(
            "SUBSTITUTION".parse::<CipherKind>(),
            Ok(CipherKind::Substitution)
        );
        assert!("shift".parse::<CipherKind>().is_err());
        assert_eq!(CipherKind::Shift.to_string(), "SHIFT");
    }

    #[test]
    fn cipher_enum_delegates() {
        let cipher = Cipher::shift(3);
        assert_eq!(cipher.kind(), CipherKind::Shift);
        assert_eq!(cipher.encode("abc"), "def");
        let cipher = Cipher::substitution("abc", "xyz");
        assert_eq!(cipher.kind(), CipherKind::Substitution);
        assert_eq!(cipher.decode("zyx"), "cba");
    }
}
