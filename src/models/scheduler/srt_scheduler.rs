use log::trace;

use super::queue::{by_remaining_time, ReadyQueue};
use super::scheduler::Scheduler;
use crate::{CompletedInterval, JobSet, Policy, RuntimeJob};

/// Preemptive shortest remaining time.
///
/// The running job is checked at every arrival before its natural completion.
/// It is preempted only when the ready head needs strictly less time than the
/// running job still does; equal remaining time never preempts.
pub struct ShortestRemainingTime;

impl Scheduler for ShortestRemainingTime {
    fn policy(&self) -> Policy {
        Policy::ShortestRemainingTime
    }

    fn schedule(&self, jobs: &JobSet) -> Vec<CompletedInterval> {
        let mut done = Vec::new();
        let mut ready = ReadyQueue::new(by_remaining_time);
        let mut pending = jobs.iter().peekable();
        let mut current_time = 0;

        loop {
            // Idle: admit everything that has arrived, then dispatch the head
            while let Some(job) = pending.next_if(|job| job.has_arrived(current_time)) {
                ready.push(RuntimeJob::new(job));
            }

            let Some(mut running) = ready.pop() else {
                match pending.peek() {
                    Some(job) => {
                        current_time = job.arrival_time();
                        continue;
                    }
                    None => break,
                }
            };

            let mut start_time = current_time;
            let mut end_time = current_time + running.remaining_time();
            trace!("SRT t={} dispatch {}", start_time, running.name());

            // Running: look at each arrival before the projected end
            while let Some(job) = pending.next_if(|job| job.arrival_time() < end_time) {
                current_time = job.arrival_time();
                ready.push(RuntimeJob::new(job));
                while let Some(job) = pending.next_if(|job| job.arrival_time() == current_time) {
                    ready.push(RuntimeJob::new(job));
                }

                let remaining = end_time - current_time;
                if let Some(next) = ready.pop_if(|head| head.remaining_time() < remaining) {
                    trace!(
                        "SRT t={} {} preempts {} ({} < {})",
                        current_time,
                        next.name(),
                        running.name(),
                        next.remaining_time(),
                        remaining
                    );
                    done.push(CompletedInterval::new(running.name(), start_time, current_time));
                    ready.push(running.resumed(remaining));

                    running = next;
                    start_time = current_time;
                    end_time = current_time + running.remaining_time();
                }
            }

            done.push(CompletedInterval::new(running.name(), start_time, end_time));
            current_time = end_time;
        }

        done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::scheduler::testing::{
        assert_valid_schedule, five_jobs, spans, sparse_jobs, three_jobs,
    };
    use crate::{Job, JobSet};

    #[test]
    fn test_srt_three_jobs() {
        let done = ShortestRemainingTime.schedule(&three_jobs());
        assert_eq!(
            spans(&done),
            vec![("A", 0, 3), ("B", 3, 4), ("C", 4, 8), ("B", 8, 13)]
        );
    }

    #[test]
    fn test_srt_five_jobs() {
        let done = ShortestRemainingTime.schedule(&five_jobs());
        assert_eq!(
            spans(&done),
            vec![
                ("A", 0, 3),
                ("B", 3, 4),
                ("C", 4, 8),
                ("E", 8, 10),
                ("B", 10, 15),
                ("D", 15, 20),
            ]
        );
    }

    #[test]
    fn test_srt_equal_remaining_time_does_not_preempt() {
        let jobs = JobSet::new(vec![Job::new("B", 0, 4), Job::new("A", 1, 3)]).unwrap();
        let done = ShortestRemainingTime.schedule(&jobs);
        assert_eq!(spans(&done), vec![("B", 0, 4), ("A", 4, 7)]);
    }

    #[test]
    fn test_srt_compares_against_elapsed_remaining_time() {
        // At t=4 the running job has 2 left, so a 3-unit arrival must wait
        let jobs = JobSet::new(vec![Job::new("A", 0, 6), Job::new("B", 4, 3)]).unwrap();
        let done = ShortestRemainingTime.schedule(&jobs);
        assert_eq!(spans(&done), vec![("A", 0, 6), ("B", 6, 9)]);
    }

    #[test]
    fn test_srt_repeated_preemption() {
        let jobs = JobSet::new(vec![
            Job::new("A", 0, 8),
            Job::new("B", 1, 4),
            Job::new("C", 2, 1),
        ])
        .unwrap();
        let done = ShortestRemainingTime.schedule(&jobs);

        assert_eq!(
            spans(&done),
            vec![("A", 0, 1), ("B", 1, 2), ("C", 2, 3), ("B", 3, 6), ("A", 6, 13)]
        );
        assert_valid_schedule(&jobs, &done);
    }

    #[test]
    fn test_srt_idles_until_arrival() {
        let done = ShortestRemainingTime.schedule(&sparse_jobs());
        assert_eq!(
            spans(&done),
            vec![("B", 3, 4), ("A", 4, 6), ("C", 10, 11), ("D", 11, 12), ("C", 12, 15), ("E", 20, 23)]
        );
    }
}
