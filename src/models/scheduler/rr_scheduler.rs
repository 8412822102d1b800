use std::collections::VecDeque;

use log::trace;

use super::scheduler::Scheduler;
use crate::{CompletedInterval, JobSet, Policy, RuntimeJob, TimeStep};

/// Round-robin over a FIFO ready queue with a fixed quantum.
///
/// A job is admitted once the clock reaches its arrival and immediately gets
/// its first slice. Preempted jobs go to the back of the queue.
pub struct RoundRobin {
    quantum: TimeStep,
}

impl RoundRobin {
    pub fn new(quantum: TimeStep) -> Self {
        Self { quantum }
    }

    pub fn quantum(&self) -> TimeStep {
        self.quantum
    }

    /// Runs one slice of `job` from `start` and queues its remainder.
    /// Returns the clock after the slice.
    fn run_slice<'a>(
        &self,
        job: RuntimeJob<'a>,
        start: TimeStep,
        queue: &mut VecDeque<RuntimeJob<'a>>,
        done: &mut Vec<CompletedInterval>,
    ) -> TimeStep {
        let (slice, rest) = job.run_for(self.quantum);
        trace!("RR t={} run {} for {}", start, job.name(), slice);

        done.push(CompletedInterval::new(job.name(), start, start + slice));
        if let Some(rest) = rest {
            queue.push_back(rest);
        }
        start + slice
    }
}

impl Scheduler for RoundRobin {
    fn policy(&self) -> Policy {
        Policy::RoundRobin
    }

    fn schedule(&self, jobs: &JobSet) -> Vec<CompletedInterval> {
        let mut done = Vec::new();
        let mut queue = VecDeque::new();
        let mut current_time = 0;

        for job in jobs {
            // Serve the ready queue until the next job arrives
            while current_time < job.arrival_time() {
                let Some(head) = queue.pop_front() else {
                    break;
                };
                current_time = self.run_slice(head, current_time, &mut queue, &mut done);
            }

            current_time = current_time.max(job.arrival_time());
            current_time = self.run_slice(RuntimeJob::new(job), current_time, &mut queue, &mut done);
        }

        while let Some(head) = queue.pop_front() {
            current_time = self.run_slice(head, current_time, &mut queue, &mut done);
        }

        done
    }
}
