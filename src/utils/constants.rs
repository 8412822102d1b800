use std::fmt;
use std::str::FromStr;

use crate::{SchedulingError, TimeStep};

pub const DEFAULT_JOB_FILE: &str = "jobs.txt";
pub const DEFAULT_QUANTUM: TimeStep = 1;
pub const FEEDBACK_LEVELS: usize = 3;

/// The six simulated disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    FirstComeFirstServed,
    RoundRobin,
    ShortestProcessNext,
    ShortestRemainingTime,
    HighestResponseRatioNext,
    Feedback,
}

impl Policy {
    /// Run order of the `ALL` selector.
    pub const ALL: [Policy; 6] = [
        Policy::FirstComeFirstServed,
        Policy::RoundRobin,
        Policy::ShortestProcessNext,
        Policy::ShortestRemainingTime,
        Policy::HighestResponseRatioNext,
        Policy::Feedback,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Policy::FirstComeFirstServed => "FCFS",
            Policy::RoundRobin => "RR",
            Policy::ShortestProcessNext => "SPN",
            Policy::ShortestRemainingTime => "SRT",
            Policy::HighestResponseRatioNext => "HRRN",
            Policy::Feedback => "FB",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Policy {
    type Err = SchedulingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Policy::ALL
            .into_iter()
            .find(|policy| policy.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| SchedulingError::UnknownPolicy(s.to_string()))
    }
}

/// Parses a command-line selector: one policy code, or `ALL`.
pub fn parse_selection(selector: &str) -> Result<Vec<Policy>, SchedulingError> {
    if selector.eq_ignore_ascii_case("ALL") {
        return Ok(Policy::ALL.to_vec());
    }
    selector.parse::<Policy>().map(|policy| vec![policy])
}

/// Tunables shared by the preemptive disciplines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    rr_quantum: TimeStep,                   // Slice granted per dispatch by RR
    fb_quanta: [TimeStep; FEEDBACK_LEVELS], // Slice per feedback level, highest priority first
}

impl SimulationConfig {
    pub fn new(
        rr_quantum: TimeStep,
        fb_quanta: [TimeStep; FEEDBACK_LEVELS],
    ) -> Result<Self, SchedulingError> {
        if rr_quantum == 0 || fb_quanta.contains(&0) {
            return Err(SchedulingError::InvalidQuantum);
        }
        Ok(Self {
            rr_quantum,
            fb_quanta,
        })
    }

    pub fn rr_quantum(&self) -> TimeStep {
        self.rr_quantum
    }

    pub fn fb_quanta(&self) -> [TimeStep; FEEDBACK_LEVELS] {
        self.fb_quanta
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rr_quantum: DEFAULT_QUANTUM,
            fb_quanta: [DEFAULT_QUANTUM; FEEDBACK_LEVELS],
        }
    }
}
