mod interval;
mod job;
mod runtime_job;
pub mod jobset;
pub mod scheduler;

pub use interval::CompletedInterval;
pub use job::Job;
pub use jobset::JobSet;
pub use runtime_job::RuntimeJob;

pub type TimeStep = usize;
