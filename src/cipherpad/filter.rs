//! REM conditions.
//!
//! A [`RemoveFilter`] names the records to drop. Only five field/operator
//! pairs exist; notably `date` only supports `==`.

use crate::error::CommandError;
use crate::integer::Integer;
use crate::model::Record;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveFilter {
    OwnerEq(String),
    OwnerNe(String),
    DateEq(String),
    LengthGt(i64),
    LengthLt(i64),
}

impl RemoveFilter {
    /// Build a filter from the three parts of a REM condition.
    ///
    /// `value` is taken as is; quote stripping happens in the parser.
    pub fn new(field: &str, operator: &str, value: &str) -> Result<Self, CommandError> {
        let filter = match (field, operator) {
            ("owner", "==") => RemoveFilter::OwnerEq(value.to_string()),
            ("owner", "!=") => RemoveFilter::OwnerNe(value.to_string()),
            ("date", "==") => RemoveFilter::DateEq(value.to_string()),
            ("length", ">") => RemoveFilter::LengthGt(parse_length(value)?),
            ("length", "<") => RemoveFilter::LengthLt(parse_length(value)?),
            _ => {
                return Err(CommandError::UnknownRemCondition {
                    field: field.to_string(),
                    operator: operator.to_string(),
                    value: value.to_string(),
                })
            }
        };
        Ok(filter)
    }

    /// Returns `true` if the record should be removed.
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            RemoveFilter::OwnerEq(owner) => record.owner() == owner,
            RemoveFilter::OwnerNe(owner) => record.owner() != owner,
            RemoveFilter::DateEq(date) => record.date() == date,
            RemoveFilter::LengthGt(n) => text_length(record) > *n,
            RemoveFilter::LengthLt(n) => text_length(record) < *n,
        }
    }
}

impl fmt::Display for RemoveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveFilter::OwnerEq(v) => write!(f, "owner == {}", v),
            RemoveFilter::OwnerNe(v) => write!(f, "owner != {}", v),
            RemoveFilter::DateEq(v) => write!(f, "date == {}", v),
            RemoveFilter::LengthGt(n) => write!(f, "length > {}", n),
            RemoveFilter::LengthLt(n) => write!(f, "length < {}", n),
        }
    }
}

/// Any integer is a valid bound. Values past the `i64` range clamp to its
/// ends, which no text length can reach.
fn parse_length(value: &str) -> Result<i64, CommandError> {
    value
        .parse::<Integer>()
        .map(|n| n.saturating_i64())
        .map_err(|_| CommandError::InvalidLengthValue)
}

fn text_length(record: &Record) -> i64 {
    i64::try_from(record.text_length()).unwrap_or(i64::MAX)
}
