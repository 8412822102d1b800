use log::trace;

use super::scheduler::Scheduler;
use crate::{CompletedInterval, JobSet, Policy};

/// Runs jobs to completion in arrival order.
pub struct FirstComeFirstServed;

impl Scheduler for FirstComeFirstServed {
    fn policy(&self) -> Policy {
        Policy::FirstComeFirstServed
    }

    fn schedule(&self, jobs: &JobSet) -> Vec<CompletedInterval> {
        let mut done = Vec::with_capacity(jobs.len());
        let mut current_time = 0;

        for job in jobs {
            // Idle until the job arrives
            current_time = current_time.max(job.arrival_time());
            trace!("FCFS t={} dispatch {}", current_time, job.name());

            done.push(CompletedInterval::new(
                job.name(),
                current_time,
                current_time + job.service_time(),
            ));
            current_time += job.service_time();
        }

        done
    }
}
