use thiserror::Error;

/// Rejected user input for the add-course command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// The grade was not an integer.
    #[error("invalid grade: {0:?}")]
    Grade(String),

    /// The credits were not a non-negative integer.
    #[error("invalid credits: {0:?}")]
    Credits(String),
}

/// Statistics that cannot be computed for the current record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatisticsError {
    #[error("number of courses completed cannot be less than 1")]
    NoCourses,
}
