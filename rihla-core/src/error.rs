/// Errors crossing the repository boundary.
///
/// The store classifies driver failures into these three cases so callers
/// can tell a uniqueness violation (duplicate departure date) apart from
/// everything else without knowing the driver.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("duplicate record")]
    Duplicate,

    #[error("record not found")]
    NotFound,

    #[error("storage error: {0}")]
    Backend(String),
}

/// A required-field or range check that failed before any store call.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("required field is blank: {0}")]
    Blank(&'static str),

    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i16),

    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),
}
