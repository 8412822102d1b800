pub mod fb_scheduler;
pub mod fcfs_scheduler;
pub mod hrrn_scheduler;
pub mod queue;
pub mod rr_scheduler;
pub mod scheduler;
pub mod spn_scheduler;
pub mod srt_scheduler;

pub use fb_scheduler::Feedback;
pub use fcfs_scheduler::FirstComeFirstServed;
pub use hrrn_scheduler::HighestResponseRatioNext;
pub use queue::ReadyQueue;
pub use rr_scheduler::RoundRobin;
pub use scheduler::{scheduler_for, Scheduler};
pub use spn_scheduler::ShortestProcessNext;
pub use srt_scheduler::ShortestRemainingTime;
