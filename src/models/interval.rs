use std::fmt;

use super::TimeStep;

/// A contiguous stretch of execution of one job on the simulated CPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedInterval {
    name: String,         // Name of the job that ran
    start_time: TimeStep, // First time unit of the slice
    end_time: TimeStep,   // Exclusive end of the slice
}

impl CompletedInterval {
    pub fn new(name: impl Into<String>, start_time: TimeStep, end_time: TimeStep) -> Self {
        debug_assert!(end_time > start_time, "empty interval {}..{}", start_time, end_time);
        Self {
            name: name.into(),
            start_time,
            end_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> TimeStep {
        self.start_time
    }

    pub fn end_time(&self) -> TimeStep {
        self.end_time
    }

    pub fn duration(&self) -> TimeStep {
        self.end_time - self.start_time
    }
}

impl fmt::Display for CompletedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}, {})", self.name, self.start_time, self.end_time)
    }
}
