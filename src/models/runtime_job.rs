use super::{Job, TimeStep};

/// Working copy of a [`Job`] held by a scheduler's ready queue.
///
/// A partially executed job is replaced by its successor from [`RuntimeJob::resumed`]
/// rather than updated in place, so each run owns its own state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuntimeJob<'a> {
    job: &'a Job,             // The input job this copy stands for
    remaining_time: TimeStep, // Service time still to execute, 0 once finished
}

impl<'a> RuntimeJob<'a> {
    pub fn new(job: &'a Job) -> Self {
        Self {
            job,
            remaining_time: job.service_time(),
        }
    }

    /// Successor copy carrying the remaining time left after a partial run.
    pub fn resumed(&self, remaining_time: TimeStep) -> Self {
        Self {
            job: self.job,
            remaining_time,
        }
    }

    pub fn job(&self) -> &'a Job {
        self.job
    }

    pub fn name(&self) -> &'a str {
        self.job.name()
    }

    pub fn arrival_time(&self) -> TimeStep {
        self.job.arrival_time()
    }

    pub fn service_time(&self) -> TimeStep {
        self.job.service_time()
    }

    pub fn remaining_time(&self) -> TimeStep {
        self.remaining_time
    }

    /// Length of the next slice under `quantum`, shorter when the remainder is.
    pub fn slice(&self, quantum: TimeStep) -> TimeStep {
        self.remaining_time.min(quantum)
    }

    /// Runs one slice of at most `quantum` and returns its length together
    /// with the successor copy, or `None` when the job has finished.
    pub fn run_for(&self, quantum: TimeStep) -> (TimeStep, Option<Self>) {
        let slice = self.slice(quantum);
        let left = self.remaining_time - slice;
        (slice, (left > 0).then(|| self.resumed(left)))
    }
}
