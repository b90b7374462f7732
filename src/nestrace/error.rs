use crate::schema::Field;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("malformed trace line: {0}")]
    MalformedTraceLine(#[from] Malformed),

    #[error("unsupported render mode `{0}`")]
    UnsupportedMode(String),

    #[error("truncated rendering needs the raw trace line")]
    TruncationUnavailable,
}

/// Why a single trace line could not be turned into fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("line is {len} bytes long, needs at least {needed}")]
    TooShort { len: usize, needed: usize },

    #[error("bytes {start}..{end} do not fall on character boundaries")]
    NotText { start: usize, end: usize },

    #[error("{field:?} was not extracted")]
    MissingField { field: Field },

    #[error("label `{label}` is missing")]
    MissingLabel { label: &'static str },

    #[error("label `{label}` appears more than once")]
    DuplicateLabel { label: &'static str },

    #[error("{field:?} has invalid value `{value}`")]
    InvalidValue { field: Field, value: String },

    #[error("{field:?} value `{value}` does not fit its width")]
    OutOfRange { field: Field, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
