//! # Command Language
//!
//! One command per line:
//!
//! ```text
//! ADD SUBSTITUTION "<text>" <owner> <date> "<source_alphabet>" "<target_alphabet>"
//! ADD SHIFT "<text>" <owner> <date> <integer_shift>
//! REM <field> <operator> <value_or_quoted_value>
//! PRINT
//! ```
//!
//! Command and cipher names are case sensitive. `owner` and `date` are bare
//! whitespace-delimited tokens. Quoted segments cannot contain `"` and there is
//! no escaping.
//!
//! Parsing never touches a store: [`Command::parse`] turns a line into a typed
//! [`Command`] or a [`CommandError`] carrying the user-facing message.

use crate::cipher::{Cipher, CipherKind, ShiftCipher};
use crate::error::CommandError;
use crate::filter::RemoveFilter;
use crate::integer::Integer;
use crate::model::Record;
use once_cell::sync::Lazy;
use regex::Regex;

static QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^"([^"]*)""#).expect("valid quoted string regex"));

/// A parsed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddRequest),
    Remove(RemoveFilter),
    Print,
}

/// Everything needed to build a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddRequest {
    pub text: String,
    pub owner: String,
    pub date: String,
    pub cipher: Cipher,
}

impl AddRequest {
    pub fn kind(&self) -> CipherKind {
        self.cipher.kind()
    }

    pub fn into_record(self) -> Record {
        Record::new(self.text, self.owner, self.date, self.cipher)
    }
}

impl Command {
    /// Parse one line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let Some((command, rest)) = split_first_word(line) else {
            return Ok(None);
        };

        let parsed = match command {
            "ADD" => Command::Add(parse_add(rest)?),
            "REM" => Command::Remove(parse_remove(rest)?),
            "PRINT" => Command::Print,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(Some(parsed))
    }
}

/// Extract a leading `"..."` segment.
///
/// Leading and trailing whitespace around `input` is ignored. On success
/// returns the enclosed text and the trimmed remainder after the closing
/// quote. Without a leading quoted segment returns `None` and `input`
/// untouched.
pub fn parse_quoted_string(input: &str) -> (Option<&str>, &str) {
    let trimmed = input.trim();
    match QUOTED_RE.captures(trimmed) {
        Some(caps) => {
            let whole = caps.get(0).map_or(0, |m| m.end());
            let inner = caps.get(1).map_or("", |m| m.as_str());
            (Some(inner), trimmed[whole..].trim())
        }
        None => (None, input),
    }
}

/// Split off the first whitespace-delimited word.
fn split_first_word(input: &str) -> Option<(&str, &str)> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }
    match input.find(char::is_whitespace) {
        Some(end) => Some((&input[..end], input[end..].trim_start())),
        None => Some((input, "")),
    }
}

fn parse_add(args: &str) -> Result<AddRequest, CommandError> {
    let (cipher_type, rest) = split_first_word(args).ok_or(CommandError::InvalidAdd)?;
    match cipher_type.parse::<CipherKind>() {
        Ok(CipherKind::Substitution) => parse_substitution(rest),
        Ok(CipherKind::Shift) => parse_shift(rest),
        Err(()) => Err(CommandError::UnknownCipherType(cipher_type.to_string())),
    }
}

fn parse_substitution(args: &str) -> Result<AddRequest, CommandError> {
    let (Some(text), rest) = parse_quoted_string(args) else {
        return Err(CommandError::InvalidText);
    };

    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(CommandError::InvalidSubstitutionFormat);
    }

    // Alphabets are re-tokenized from the joined tail, so runs of whitespace
    // inside a quoted alphabet collapse to a single space.
    let alphabets = parts[2..].join(" ");
    let (Some(source), after_source) = parse_quoted_string(&alphabets) else {
        return Err(CommandError::InvalidSourceAlphabet);
    };
    let (Some(target), _) = parse_quoted_string(after_source) else {
        return Err(CommandError::InvalidTargetAlphabet);
    };

    Ok(AddRequest {
        text: text.to_string(),
        owner: parts[0].to_string(),
        date: parts[1].to_string(),
        cipher: Cipher::substitution(source, target),
    })
}

fn parse_shift(args: &str) -> Result<AddRequest, CommandError> {
    let (Some(text), rest) = parse_quoted_string(args) else {
        return Err(CommandError::InvalidText);
    };

    let parts: Vec<&str> = rest.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(CommandError::InvalidShiftFormat);
    }

    let shift = parts[2]
        .parse::<Integer>()
        .map_err(|_| CommandError::InvalidShiftValue)?;

    Ok(AddRequest {
        text: text.to_string(),
        owner: parts[0].to_string(),
        date: parts[1].to_string(),
        cipher: Cipher::Shift(ShiftCipher::from_integer(shift)),
    })
}

fn parse_remove(args: &str) -> Result<RemoveFilter, CommandError> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(CommandError::InvalidRemFormat);
    }

    let value = parts[2..].join(" ");
    RemoveFilter::new(parts[0], parts[1], strip_quotes(&value))
}

/// Strip one layer of surrounding double quotes.
fn strip_quotes(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') {
        // A lone `"` both starts and ends the value.
        value.get(1..value.len().saturating_sub(1)).unwrap_or("")
    } else {
        value
    }
}
