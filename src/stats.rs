//! Aggregate statistics over a set of course entries.

use crate::course::{CourseEntry, MAX_GRADE};
use crate::error::StatisticsError;
use std::fmt;

/// Summary of a course record: how many courses, how many credits, the mean
/// grade and how many courses sit at each grade.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Number of distinct courses, graded or not.
    pub completed: usize,
    pub total_credits: u64,
    /// Mean over all courses; ungraded courses count as 0.
    pub mean_grade: f64,
    /// `distribution[g - 1]` is the number of courses at grade `g`.
    distribution: [usize; MAX_GRADE as usize],
}

impl Statistics {
    /// Compute statistics for `entries`.
    ///
    /// Fails with [`StatisticsError::NoCourses`] when there is nothing to average.
    pub fn compute<'a>(
        entries: impl IntoIterator<Item = &'a CourseEntry>,
    ) -> Result<Self, StatisticsError> {
        let mut completed = 0usize;
        let mut total_credits = 0u64;
        let mut total_grades = 0u64;
        let mut distribution = [0usize; MAX_GRADE as usize];

        for entry in entries {
            completed += 1;
            total_credits += u64::from(entry.credit());
            total_grades += u64::from(entry.grade());
            if entry.grade() > 0 {
                distribution[usize::from(entry.grade()) - 1] += 1;
            }
        }

        if completed == 0 {
            return Err(StatisticsError::NoCourses);
        }

        Ok(Self {
            completed,
            total_credits,
            mean_grade: total_grades as f64 / completed as f64,
            distribution,
        })
    }

    /// Number of courses with exactly `grade`. Grade 0 and grades above the
    /// maximum are never counted.
    pub fn count_at(&self, grade: u8) -> usize {
        match grade {
            1..=MAX_GRADE => self.distribution[usize::from(grade) - 1],
            _ => 0,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} completed courses, a total of {} credits",
            self.completed, self.total_credits
        )?;
        writeln!(f, "mean {:.1}", self.mean_grade)?;
        write!(f, "grade distribution")?;
        for grade in (1..=MAX_GRADE).rev() {
            write!(f, "\n{}: {}", grade, "x".repeat(self.count_at(grade)))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, grade: i64, credit: u32) -> CourseEntry {
        let mut e = CourseEntry::new(name);
        e.update_grade(grade);
        e.update_credit(credit);
        e
    }

    #[test]
    fn test_no_courses() {
        let entries: Vec<CourseEntry> = Vec::new();
        assert_eq!(
            Statistics::compute(&entries),
            Err(StatisticsError::NoCourses)
        );
    }

    #[test]
    fn test_two_courses() {
        let entries = vec![entry("A", 3, 5), entry("B", 5, 2)];
        let stats = Statistics::compute(&entries).unwrap();

        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total_credits, 7);
        assert_eq!(stats.mean_grade, 4.0);
        assert_eq!(stats.count_at(5), 1);
        assert_eq!(stats.count_at(4), 0);
        assert_eq!(stats.count_at(3), 1);
        assert_eq!(stats.count_at(2), 0);
        assert_eq!(stats.count_at(1), 0);
    }

    #[test]
    fn test_ungraded_courses_lower_the_mean_but_are_not_tallied() {
        let entries = vec![entry("A", 0, 3), entry("B", 4, 3), entry("C", 0, 1)];
        let stats = Statistics::compute(&entries).unwrap();

        assert_eq!(stats.completed, 3);
        assert_eq!(stats.total_credits, 7);
        assert!((stats.mean_grade - 4.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.count_at(0), 0);
        assert_eq!(stats.count_at(4), 1);
    }

    #[test]
    fn test_display() {
        let entries = vec![entry("A", 3, 5), entry("B", 5, 2), entry("C", 5, 1)];
        let stats = Statistics::compute(&entries).unwrap();

        assert_eq!(
            stats.to_string(),
            "3 completed courses, a total of 8 credits\n\
             mean 4.3\n\
             grade distribution\n\
             5: xx\n\
             4: \n\
             3: x\n\
             2: \n\
             1: "
        );
    }

    #[test]
    fn test_display_all_ungraded_still_lists_every_grade() {
        let entries = vec![entry("A", 0, 0)];
        let text = Statistics::compute(&entries).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "mean 0.0");
        assert_eq!(&lines[3..], &["5: ", "4: ", "3: ", "2: ", "1: "]);
    }
}
