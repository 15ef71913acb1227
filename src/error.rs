use thiserror::Error;

/// Errors reported by tree mutations.
///
/// Duplicate and missing keys are not errors; they are reported through
/// `bool` / `Option` return values.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The key has no defined order, e.g. a floating point NaN.
    #[error("key has no defined order against the keys of the tree")]
    InvalidKey,
}

pub type Result<T> = std::result::Result<T, TreeError>;
