// Identifier allocation for widgets and dashboards
use chrono::{DateTime, Utc};

/// Issues decimal millisecond timestamps as ids. Two ids requested within
/// the same millisecond (or after the clock steps back) get `last + 1`.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Continue after the largest numeric id in `existing`, so ids issued
    /// ahead of the clock before a restart are not handed out again
    pub fn after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    pub fn next_id(&mut self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let id = if millis > self.last { millis } else { self.last + 1 };
        self.last = id;
        id.to_string()
    }
}
