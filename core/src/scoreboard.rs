use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Finish times of every game won during this session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    times: Vec<Duration>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, time: Duration) {
        self.times.push(time);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Times in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = Duration> + '_ {
        self.times.iter().copied()
    }

    /// Times fastest first.
    pub fn sorted(&self) -> Vec<Duration> {
        let mut times = self.times.clone();
        times.sort_unstable();
        times
    }

    pub fn top(&self, limit: usize) -> Vec<Duration> {
        let mut times = self.sorted();
        times.truncate(limit);
        times
    }

    pub fn best(&self) -> Option<Duration> {
        self.times.iter().min().copied()
    }
}

/// Formats a duration as `minutes:seconds`, e.g. `2:05`.
pub fn format_time(time: Duration) -> String {
    let secs = time.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
