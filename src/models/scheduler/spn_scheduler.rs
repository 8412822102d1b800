use log::trace;

use super::queue::{by_service_time, ReadyQueue};
use super::scheduler::Scheduler;
use crate::{CompletedInterval, JobSet, Policy, RuntimeJob};

/// Non-preemptive shortest process next.
///
/// Each time the CPU frees up, the arrived job with the shortest service time
/// runs to completion. Ties go to the smaller name.
pub struct ShortestProcessNext;

impl Scheduler for ShortestProcessNext {
    fn policy(&self) -> Policy {
        Policy::ShortestProcessNext
    }

    fn schedule(&self, jobs: &JobSet) -> Vec<CompletedInterval> {
        let mut done = Vec::with_capacity(jobs.len());
        let mut ready = ReadyQueue::new(by_service_time);
        let mut pending = jobs.iter().peekable();
        let mut current_time = 0;

        loop {
            while let Some(job) = pending.next_if(|job| job.has_arrived(current_time)) {
                ready.push(RuntimeJob::new(job));
            }

            match ready.pop() {
                Some(next) => {
                    trace!("SPN t={} dispatch {}", current_time, next.name());
                    done.push(CompletedInterval::new(
                        next.name(),
                        current_time,
                        current_time + next.service_time(),
                    ));
                    current_time += next.service_time();
                }
                // Nothing ready: idle until the next arrival
                None => match pending.peek() {
                    Some(job) => current_time = job.arrival_time(),
                    None => break,
                },
            }
        }

        done
    }
}
