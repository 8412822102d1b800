use std::cmp::Ordering;

use crate::RuntimeJob;

/// Comparator deciding which ready job runs first. `Less` runs earlier.
pub type JobOrdering = fn(&RuntimeJob<'_>, &RuntimeJob<'_>) -> Ordering;

/// Ready queue ordered by a comparator chosen by the owning scheduler.
pub struct ReadyQueue<'a> {
    jobs: Vec<RuntimeJob<'a>>, // Unordered storage, the head is found on demand
    ordering: JobOrdering,     // Dispatch order of this queue
}

impl<'a> ReadyQueue<'a> {
    pub fn new(ordering: JobOrdering) -> Self {
        Self {
            jobs: Vec::new(),
            ordering,
        }
    }

    pub fn push(&mut self, job: RuntimeJob<'a>) {
        self.jobs.push(job);
    }

    pub fn peek(&self) -> Option<&RuntimeJob<'a>> {
        self.head_index().map(|index| &self.jobs[index])
    }

    pub fn pop(&mut self) -> Option<RuntimeJob<'a>> {
        self.head_index().map(|index| self.jobs.remove(index))
    }

    /// Removes the head only when `predicate` holds for it.
    pub fn pop_if(&mut self, predicate: impl FnOnce(&RuntimeJob<'a>) -> bool) -> Option<RuntimeJob<'a>> {
        let index = self.head_index()?;
        if predicate(&self.jobs[index]) {
            Some(self.jobs.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    fn head_index(&self) -> Option<usize> {
        self.jobs
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (self.ordering)(*a, *b))
            .map(|(index, _)| index)
    }
}

/// Shortest service time first, then by name.
pub fn by_service_time(a: &RuntimeJob<'_>, b: &RuntimeJob<'_>) -> Ordering {
    a.service_time()
        .cmp(&b.service_time())
        .then_with(|| a.name().cmp(b.name()))
}

/// Shortest remaining time first, then by name.
pub fn by_remaining_time(a: &RuntimeJob<'_>, b: &RuntimeJob<'_>) -> Ordering {
    a.remaining_time()
        .cmp(&b.remaining_time())
        .then_with(|| a.name().cmp(b.name()))
}
