use std::collections::BTreeMap;

use chrono::{DateTime, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use sightline_types::Session;

/// Calendar days covered by the dashboard activity chart, reference day
/// included.
pub const ACTIVITY_WINDOW_DAYS: u64 = 30;

/// Session count for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub count: usize,
}

/// Bucket sessions by the calendar day of their last activity over the
/// fixed window of [`ACTIVITY_WINDOW_DAYS`] days ending at `reference`'s
/// day, both endpoints inclusive.
///
/// Every day of the window is present in the result with zero-count days
/// included, and dates ascend strictly, so charts bind the output directly
/// without gap filling. Session timestamps are converted into `reference`'s
/// timezone before day truncation, applying one calendar policy uniformly.
/// The host must keep session timestamps normalized to a single zone;
/// violating that precondition silently misaligns buckets and is not
/// detected here. Sessions older than the window are ignored, never
/// clipped into the boundary day.
pub fn daily_activity<Tz: TimeZone>(
    sessions: &[Session],
    reference: DateTime<Tz>,
) -> Vec<DailyActivity> {
    let last_day = reference.date_naive();
    let first_day = last_day - Days::new(ACTIVITY_WINDOW_DAYS - 1);

    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    let mut day = first_day;
    while day <= last_day {
        buckets.insert(day, 0);
        day = day + Days::new(1);
    }

    let zone = reference.timezone();
    for session in sessions {
        let day = session.last_activity.with_timezone(&zone).date_naive();
        if let Some(count) = buckets.get_mut(&day) {
            *count += 1;
        }
    }

    buckets
        .into_iter()
        .map(|(date, count)| DailyActivity { date, count })
        .collect()
}
