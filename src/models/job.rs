use super::TimeStep;

/// A schedulable unit as read from the job file. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    name: String,           // Unique identifier, usually a single letter
    arrival_time: TimeStep, // Instant at which the job becomes eligible to run
    service_time: TimeStep, // Total CPU time the job needs
}

impl Job {
    pub fn new(name: impl Into<String>, arrival_time: TimeStep, service_time: TimeStep) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            service_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arrival_time(&self) -> TimeStep {
        self.arrival_time
    }

    pub fn service_time(&self) -> TimeStep {
        self.service_time
    }

    pub fn has_arrived(&self, t: TimeStep) -> bool {
        self.arrival_time <= t
    }

    /// Response ratio `(wait + service) / service` at time `t`.
    ///
    /// Only meaningful once the job has arrived.
    pub fn response_ratio(&self, t: TimeStep) -> f64 {
        let wait = t.saturating_sub(self.arrival_time);
        (wait + self.service_time) as f64 / self.service_time as f64
    }
}
