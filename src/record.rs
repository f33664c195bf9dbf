use crate::course::CourseEntry;
use crate::error::StatisticsError;
use crate::stats::Statistics;
use log::debug;
use std::collections::HashMap;

/// All course entries of one session, keyed by course name.
#[derive(Debug, Default, Clone)]
pub struct CourseRecord {
    courses: HashMap<String, CourseEntry>,
}

impl CourseRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a grade and credit value for `name`, creating the entry on first use.
    ///
    /// The grade is applied before the credit; see [`CourseEntry::update_grade`]
    /// for which grades are kept.
    pub fn add_or_update(&mut self, name: &str, grade: i64, credit: u32) {
        let entry = self.courses.entry(name.to_string()).or_insert_with(|| {
            debug!("new course entry {:?}", name);
            CourseEntry::new(name)
        });
        entry.update_grade(grade);
        entry.update_credit(credit);
        debug!("updated {}", entry);
    }

    pub fn lookup(&self, name: &str) -> Option<&CourseEntry> {
        self.courses.get(name)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn statistics(&self) -> Result<Statistics, StatisticsError> {
        Statistics::compute(self.courses.values())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_creates_entry() {
        let mut record = CourseRecord::new();
        assert!(record.is_empty());

        record.add_or_update("Physics", 4, 5);

        let entry = record.lookup("Physics").unwrap();
        assert_eq!(entry.grade(), 4);
        assert_eq!(entry.credit(), 5);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_lower_grade_keeps_best_and_overwrites_credit() {
        let mut record = CourseRecord::new();
        record.add_or_update("X", 3, 4);
        record.add_or_update("X", 2, 6);

        let entry = record.lookup("X").unwrap();
        assert_eq!(entry.grade(), 3);
        assert_eq!(entry.credit(), 6);
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_grade_is_max_of_valid_candidates() {
        let mut record = CourseRecord::new();
        for g in [2, 7, 4, -1, 0, 3, 6] {
            record.add_or_update("Y", g, 1);
        }
        assert_eq!(record.lookup("Y").unwrap().grade(), 4);

        for g in [0, 9, -3] {
            record.add_or_update("Z", g, 1);
        }
        assert_eq!(record.lookup("Z").unwrap().grade(), 0);
    }

    #[test]
    fn test_credit_follows_last_call() {
        let mut record = CourseRecord::new();
        for c in [5, 1, 9, 3] {
            record.add_or_update("C", 1, c);
        }
        assert_eq!(record.lookup("C").unwrap().credit(), 3);
    }

    #[test]
    fn test_lookup_missing() {
        let mut record = CourseRecord::new();
        record.add_or_update("A", 1, 1);
        assert!(record.lookup("B").is_none());
        assert!(record.lookup("a").is_none());
    }

    #[test]
    fn test_statistics() {
        let mut record = CourseRecord::new();
        assert_eq!(record.statistics(), Err(StatisticsError::NoCourses));

        record.add_or_update("A", 3, 5);
        record.add_or_update("B", 5, 2);

        let stats = record.statistics().unwrap();
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.total_credits, 7);
        assert_eq!(stats.mean_grade, 4.0);
    }
}
