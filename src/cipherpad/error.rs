use std::path::PathBuf;
use thiserror::Error;

/// Per-line failures of the command language.
///
/// These never abort a run: the API turns them into error messages and the
/// next line is processed as usual. The `Display` strings are the exact
/// messages shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid ADD command")]
    InvalidAdd,

    #[error("Unknown cipher type: {0}")]
    UnknownCipherType(String),

    #[error("Invalid text format")]
    InvalidText,

    #[error("Invalid SUBSTITUTION command format")]
    InvalidSubstitutionFormat,

    #[error("Invalid source alphabet format")]
    InvalidSourceAlphabet,

    #[error("Invalid target alphabet format")]
    InvalidTargetAlphabet,

    #[error("Invalid SHIFT command format")]
    InvalidShiftFormat,

    #[error("Invalid shift value")]
    InvalidShiftValue,

    #[error("Invalid REM command format")]
    InvalidRemFormat,

    #[error("Unknown REM condition: {field} {operator} {value}")]
    UnknownRemCondition {
        field: String,
        operator: String,
        value: String,
    },

    #[error("Invalid length value")]
    InvalidLengthValue,
}

#[derive(Error, Debug)]
pub enum CipherpadError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Error reading file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CipherpadError>;
