use std::fmt;

use crate::{CompletedInterval, JobSet, TimeStep};

/// Outcome of one job under one discipline.
#[derive(Debug, Clone, PartialEq)]
pub struct JobStats {
    pub name: String,
    pub arrival_time: TimeStep,
    pub service_time: TimeStep,
    pub finish_time: TimeStep,
    pub turnaround: TimeStep, // finish - arrival
    pub normalized: f64,      // turnaround / service
}

/// Per-job statistics of a simulation run, in input order, with their means.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    jobs: Vec<JobStats>,
}

impl Summary {
    /// Derives finish and turnaround times from the interval sequence.
    /// Jobs without any interval are left out.
    pub fn new(intervals: &[CompletedInterval], jobs: &JobSet) -> Self {
        let jobs = jobs
            .iter()
            .filter_map(|job| {
                let finish_time = intervals
                    .iter()
                    .filter(|interval| interval.name() == job.name())
                    .map(|interval| interval.end_time())
                    .max()?;
                let turnaround = finish_time - job.arrival_time();

                Some(JobStats {
                    name: job.name().to_string(),
                    arrival_time: job.arrival_time(),
                    service_time: job.service_time(),
                    finish_time,
                    turnaround,
                    normalized: turnaround as f64 / job.service_time() as f64,
                })
            })
            .collect();

        Self { jobs }
    }

    pub fn jobs(&self) -> &[JobStats] {
        &self.jobs
    }

    pub fn mean_turnaround(&self) -> f64 {
        self.mean(|stats| stats.turnaround as f64)
    }

    pub fn mean_normalized(&self) -> f64 {
        self.mean(|stats| stats.normalized)
    }

    fn mean(&self, value: impl Fn(&JobStats) -> f64) -> f64 {
        if self.jobs.is_empty() {
            return 0.0;
        }
        self.jobs.iter().map(value).sum::<f64>() / self.jobs.len() as f64
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<8}{:>8}{:>8}{:>8}{:>12}{:>8}",
            "Job", "Arrival", "Service", "Finish", "Turnaround", "Tr/Ts"
        )?;
        for stats in self.jobs.iter() {
            writeln!(
                f,
                "{:<8}{:>8}{:>8}{:>8}{:>12}{:>8.2}",
                stats.name,
                stats.arrival_time,
                stats.service_time,
                stats.finish_time,
                stats.turnaround,
                stats.normalized
            )?;
        }
        writeln!(
            f,
            "{:<32}{:>12.2}{:>8.2}",
            "Mean",
            self.mean_turnaround(),
            self.mean_normalized()
        )
    }
}
