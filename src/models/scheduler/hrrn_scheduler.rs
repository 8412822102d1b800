use log::trace;

use super::scheduler::Scheduler;
use crate::{CompletedInterval, JobSet, Policy, TimeStep};

/// Non-preemptive highest response ratio next.
///
/// Candidates are scanned from the last job in input order to the first and
/// replaced only by a strictly higher ratio, so the latest job in input order
/// wins a tie.
pub struct HighestResponseRatioNext;

impl HighestResponseRatioNext {
    /// Index of the arrived, unfinished job with the highest response ratio at `t`.
    fn select(jobs: &JobSet, completed: &[bool], t: TimeStep) -> Option<usize> {
        let mut elected: Option<(usize, f64)> = None;

        for (index, job) in jobs.iter().enumerate().rev() {
            if completed[index] || !job.has_arrived(t) {
                continue;
            }
            let ratio = job.response_ratio(t);
            if elected.map_or(true, |(_, max_ratio)| ratio > max_ratio) {
                elected = Some((index, ratio));
            }
        }

        elected.map(|(index, _)| index)
    }
}

impl Scheduler for HighestResponseRatioNext {
    fn policy(&self) -> Policy {
        Policy::HighestResponseRatioNext
    }

    fn schedule(&self, jobs: &JobSet) -> Vec<CompletedInterval> {
        let mut done = Vec::with_capacity(jobs.len());
        let mut completed = vec![false; jobs.len()];
        let mut current_time = 0;

        while done.len() < jobs.len() {
            match Self::select(jobs, &completed, current_time) {
                Some(index) => {
                    let job = &jobs.get_jobs()[index];
                    trace!(
                        "HRRN t={} dispatch {} (ratio {:.3})",
                        current_time,
                        job.name(),
                        job.response_ratio(current_time)
                    );
                    done.push(CompletedInterval::new(
                        job.name(),
                        current_time,
                        current_time + job.service_time(),
                    ));
                    current_time += job.service_time();
                    completed[index] = true;
                }
                // Nothing has arrived: idle until the earliest unfinished job does
                None => {
                    let next_arrival = jobs
                        .iter()
                        .zip(completed.iter())
                        .find(|(_, finished)| !**finished)
                        .map(|(job, _)| job.arrival_time());
                    match next_arrival {
                        Some(arrival) => current_time = arrival,
                        None => break,
                    }
                }
            }
        }

        done
    }
}
