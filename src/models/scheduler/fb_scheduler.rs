use std::collections::VecDeque;

use log::trace;

use super::scheduler::Scheduler;
use crate::constants::FEEDBACK_LEVELS;
use crate::{CompletedInterval, JobSet, Policy, RuntimeJob, TimeStep};

type Levels<'a> = [VecDeque<RuntimeJob<'a>>; FEEDBACK_LEVELS];

/// Multi-level feedback with three FIFO levels.
///
/// Every job starts on level 0 and drops one level each time it uses up a
/// slice without finishing. The lowest level feeds back into itself, and a
/// job is never promoted.
pub struct Feedback {
    quanta: [TimeStep; FEEDBACK_LEVELS], // Slice per level, level 0 first
}

impl Feedback {
    pub fn new(quanta: [TimeStep; FEEDBACK_LEVELS]) -> Self {
        Self { quanta }
    }

    pub fn quanta(&self) -> [TimeStep; FEEDBACK_LEVELS] {
        self.quanta
    }

    /// Same as [`Scheduler::schedule`], with the level each slice ran on.
    pub fn schedule_with_levels(&self, jobs: &JobSet) -> Vec<(usize, CompletedInterval)> {
        let mut done = Vec::new();
        let mut levels: Levels<'_> = Default::default();
        levels[0].extend(jobs.iter().map(RuntimeJob::new));
        let mut current_time = 0;

        while levels.iter().any(|level| !level.is_empty()) {
            // Every arrived job on the top level gets a slice
            while levels[0]
                .front()
                .map_or(false, |job| job.arrival_time() <= current_time)
            {
                if let Some(job) = levels[0].pop_front() {
                    current_time = self.run_slice(0, job, current_time, &mut levels, &mut done);
                }
            }

            if let Some(job) = levels[1].pop_front() {
                current_time = self.run_slice(1, job, current_time, &mut levels, &mut done);
            }

            let top_waiting = levels[0]
                .front()
                .map_or(true, |job| job.arrival_time() > current_time);
            if levels[1].is_empty() && top_waiting {
                if let Some(job) = levels[2].pop_front() {
                    current_time = self.run_slice(2, job, current_time, &mut levels, &mut done);
                }
            }

            // Only future arrivals left: idle until the next one
            if levels[1].is_empty() && levels[2].is_empty() {
                if let Some(job) = levels[0].front() {
                    current_time = current_time.max(job.arrival_time());
                }
            }
        }

        done
    }

    /// Runs one slice of `job` on `level` and demotes its remainder.
    /// Returns the clock after the slice.
    fn run_slice<'a>(
        &self,
        level: usize,
        job: RuntimeJob<'a>,
        start: TimeStep,
        levels: &mut Levels<'a>,
        done: &mut Vec<(usize, CompletedInterval)>,
    ) -> TimeStep {
        let (slice, rest) = job.run_for(self.quanta[level]);
        done.push((level, CompletedInterval::new(job.name(), start, start + slice)));

        if let Some(rest) = rest {
            let next_level = (level + 1).min(FEEDBACK_LEVELS - 1);
            trace!(
                "FB t={} {} ran {} on level {}, {} left, queued on level {}",
                start,
                job.name(),
                slice,
                level,
                rest.remaining_time(),
                next_level
            );
            levels[next_level].push_back(rest);
        } else {
            trace!("FB t={} {} finished on level {}", start + slice, job.name(), level);
        }

        start + slice
    }
}

impl Scheduler for Feedback {
    fn policy(&self) -> Policy {
        Policy::Feedback
    }

    fn schedule(&self, jobs: &JobSet) -> Vec<CompletedInterval> {
        self.schedule_with_levels(jobs)
            .into_iter()
            .map(|(_, interval)| interval)
            .collect()
    }
}
