//! Runs the task list, isolating failures per task.

use std::fmt;

use log::{error, warn};

use super::{tasks::Task, Fetcher};
use crate::AggregateRecord;

/// A run succeeds when at least this many tasks succeed.
pub const MIN_SUCCESSFUL_TASKS: usize = 5;

/// Success count over the tasks run so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub succeeded: usize,
    pub total: usize,
}

impl Tally {
    pub fn record(self, ok: bool) -> Self {
        Self {
            succeeded: self.succeeded + usize::from(ok),
            total: self.total + 1,
        }
    }

    pub fn failed(&self) -> usize {
        self.total - self.succeeded
    }

    pub fn is_success(&self) -> bool {
        self.succeeded >= MIN_SUCCESSFUL_TASKS
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} tasks OK", self.succeeded, self.total)
    }
}

/// Run every task in order against `record`.
///
/// An `Err` from a task is logged with the task's name and counted as a
/// failure; the remaining tasks still run.
pub async fn run_tasks(fetcher: &Fetcher, tasks: &[Task], record: &mut AggregateRecord) -> Tally {
    let mut tally = Tally::default();

    for task in tasks {
        let ok = match task.execute(fetcher, record).await {
            Ok(true) => true,
            Ok(false) => {
                warn!("✗ {} failed", task.name());
                false
            }
            Err(e) => {
                error!("✗ {} error: {}", task.name(), e);
                false
            }
        };
        tally = tally.record(ok);
    }

    tally
}
