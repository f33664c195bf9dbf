use crate::error::InputError;
use std::fmt;

/// Highest grade a course can be awarded.
pub const MAX_GRADE: u8 = 5;

/// One course's best-known grade and most recent credit value.
///
/// A grade of 0 means the course is not graded yet. The grade only ever goes
/// up; credits are replaced by whatever was reported last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseEntry {
    name: String,
    grade: u8,
    credit: u32,
}

impl CourseEntry {
    /// Create an ungraded entry with zero credits.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grade: 0,
            credit: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> u8 {
        self.grade
    }

    pub fn credit(&self) -> u32 {
        self.credit
    }

    /// Raise the grade to `candidate` if it lies in `1..=5` and beats the
    /// current grade. Anything else is ignored.
    pub fn update_grade(&mut self, candidate: i64) {
        if candidate > i64::from(self.grade) && candidate <= i64::from(MAX_GRADE) {
            self.grade = candidate as u8;
        }
    }

    pub fn update_credit(&mut self, credit: u32) {
        self.credit = credit;
    }
}

impl fmt::Display for CourseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} cr) grade {}", self.name, self.credit, self.grade)
    }
}

/// Parse a grade typed by the user.
///
/// Any integer is accepted here; range checks belong to [`CourseEntry::update_grade`].
pub fn parse_grade(text: &str) -> Result<i64, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::Grade(text.to_string()))
}

/// Parse a credit value typed by the user. Credits must be a non-negative integer.
pub fn parse_credit(text: &str) -> Result<u32, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::Credits(text.to_string()))
}
