use log::debug;

use crate::scheduler::scheduler_for;
use crate::{timeline, CompletedInterval, JobSet, Policy, SimulationConfig, Summary};

/// Runs one discipline over `jobs`.
///
/// # Arguments
/// * `policy` - The discipline to simulate.
/// * `jobs` - The complete job set, left untouched.
/// * `config` - Quanta for the preemptive disciplines.
///
/// # Returns
/// The execution intervals in chronological order.
pub fn simulation(
    policy: Policy,
    jobs: &JobSet,
    config: &SimulationConfig,
) -> Vec<CompletedInterval> {
    let scheduler = scheduler_for(policy, config);
    debug!("Simulating {} over {} jobs", policy, jobs.len());

    let intervals = scheduler.schedule(jobs);
    debug!(
        "{} produced {} intervals, last ending at t={}",
        policy,
        intervals.len(),
        intervals.last().map_or(0, |i| i.end_time())
    );
    intervals
}

/// Header line, timeline and, when asked, the statistics table of one run.
pub fn report(
    policy: Policy,
    jobs: &JobSet,
    intervals: &[CompletedInterval],
    with_stats: bool,
) -> String {
    let mut out = format!("{} scheduling algorithm\n", policy);
    out.push_str(&timeline::render(intervals, jobs));
    if with_stats {
        out.push_str(&Summary::new(intervals, jobs).to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Job;

    fn jobs() -> JobSet {
        JobSet::new(vec![Job::new("A", 0, 2), Job::new("B", 1, 1)]).unwrap()
    }

    #[test]
    fn test_simulation_leaves_jobs_untouched() {
        let jobs = jobs();
        let before = jobs.get_jobs().to_vec();

        for policy in Policy::ALL {
            simulation(policy, &jobs, &SimulationConfig::default());
        }

        assert_eq!(jobs.get_jobs(), &before[..]);
    }

    #[test]
    fn test_report_fcfs() {
        let jobs = jobs();
        let intervals = simulation(Policy::FirstComeFirstServed, &jobs, &SimulationConfig::default());

        assert_eq!(
            report(Policy::FirstComeFirstServed, &jobs, &intervals, false),
            "FCFS scheduling algorithm\nA B \nX\nX\n  X\n"
        );
    }

    #[test]
    fn test_report_with_stats() {
        let jobs = jobs();
        let intervals = simulation(Policy::RoundRobin, &jobs, &SimulationConfig::default());
        let out = report(Policy::RoundRobin, &jobs, &intervals, true);

        assert!(out.starts_with("RR scheduling algorithm\n"));
        assert!(out.contains("Turnaround"));
        assert!(out.contains("Mean"));
    }
}
