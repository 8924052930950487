use thiserror::Error;

/// Raised when a structurally valid cookie carries a field value that
/// cannot be decoded. Structural problems (wrong segment count) are not
/// errors; they yield the all-null record instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A __utma timestamp segment did not decode to an epoch time.
    #[error("invalid timestamp in __utma field `{field}`: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
}
