use std::collections::HashSet;

use super::{Job, TimeStep};
use crate::SchedulingError;

/// The full, statically known job list, ordered by arrival time then name.
///
/// Every scheduler relies on this order, and the renderer uses it for column offsets.
#[derive(Debug, Clone)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    /// Validates and sorts `jobs`.
    ///
    /// # Errors
    /// Fails on an empty name, a zero service time or a name used twice.
    pub fn new(mut jobs: Vec<Job>) -> Result<Self, SchedulingError> {
        let mut seen = HashSet::new();

        for job in jobs.iter() {
            if job.name().is_empty() {
                return Err(SchedulingError::InvalidJob {
                    name: String::new(),
                    reason: "job name is empty".to_string(),
                });
            }
            if job.service_time() == 0 {
                return Err(SchedulingError::InvalidJob {
                    name: job.name().to_string(),
                    reason: "service time must be positive".to_string(),
                });
            }
            if !seen.insert(job.name()) {
                return Err(SchedulingError::DuplicateJob(job.name().to_string()));
            }
        }

        jobs.sort_by(|a, b| {
            a.arrival_time()
                .cmp(&b.arrival_time())
                .then_with(|| a.name().cmp(b.name()))
        });

        Ok(Self { jobs })
    }

    pub fn get_jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get_job(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }

    /// Index of the job called `name` in input order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.jobs.iter().position(|job| job.name() == name)
    }

    pub fn total_service_time(&self) -> TimeStep {
        self.jobs.iter().map(|job| job.service_time()).sum()
    }
}

impl<'a> IntoIterator for &'a JobSet {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_by_arrival_then_name() {
        let jobset = JobSet::new(vec![
            Job::new("C", 4, 4),
            Job::new("B", 0, 6),
            Job::new("A", 0, 3),
        ])
        .unwrap();

        let names: Vec<&str> = jobset.iter().map(|job| job.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(jobset.position("C"), Some(2));
        assert_eq!(jobset.position("Z"), None);
        assert_eq!(jobset.total_service_time(), 13);
    }

    #[test]
    fn test_rejects_zero_service_time() {
        let result = JobSet::new(vec![Job::new("A", 0, 0)]);
        assert!(matches!(result, Err(SchedulingError::InvalidJob { .. })));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let result = JobSet::new(vec![Job::new("A", 0, 1), Job::new("A", 3, 2)]);
        assert!(matches!(result, Err(SchedulingError::DuplicateJob(name)) if name == "A"));
    }
}
