use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

use crate::schedule::FutureEntry;

use super::config::ProjectionConfig;

pub const WEEKS_BACK: i64 = 2;
pub const WEEKS_AHEAD: i64 = 4;
pub const BUCKET_COUNT: usize = (WEEKS_BACK + WEEKS_AHEAD + 1) as usize;

/// One calendar week of the projection. Derived on every read, never stored.
#[derive(Debug, Clone)]
pub struct WeekBucket {
    /// First day of the week, aligned to the configured week start.
    pub start: NaiveDate,
    /// Last instant of the week: start + 6 days at 23:59:59.999.
    pub end: NaiveDateTime,
    /// Unreconciled entries due within the week, ordered by due date.
    pub entries: Vec<FutureEntry>,
    /// Algebraic signed sum of the entries' amounts.
    pub total_cents: i64,
    /// The week has fully elapsed and still holds unreconciled entries.
    pub is_overdue: bool,
    /// Marks the bucket whose range contains today.
    pub is_current: bool,
}

impl WeekBucket {
    pub fn end_date(&self) -> NaiveDate {
        self.end.date()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end_date()
    }

    /// Human-readable range label, e.g. "09 Jun - 15 Jun 2024".
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%d %b"),
            self.end_date().format("%d %b %Y")
        )
    }
}

/// Returns the week-start-aligned first day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let offset = (date.weekday().num_days_from_sunday() + 7
        - week_start.num_days_from_sunday())
        % 7;
    date - Duration::days(i64::from(offset))
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// Buckets `entries` into the fixed window of [`BUCKET_COUNT`] calendar weeks
/// around `now`: two weeks back through four weeks ahead.
///
/// Pure and deterministic. The caller owns the clock and must recompute when
/// the entry set changes or `now` crosses midnight; overdue detection uses
/// the un-normalized `now`, so a week ending today is not yet overdue.
/// Reconciled entries are excluded regardless of due date. Totals are signed
/// sums over whatever the store feeds in; there is no filter on sign.
pub fn weekly_buckets(
    now: NaiveDateTime,
    entries: &[FutureEntry],
    config: &ProjectionConfig,
) -> Vec<WeekBucket> {
    let today = now.date();
    let current_week_start = start_of_week(today, config.week_start);

    let mut buckets = Vec::with_capacity(BUCKET_COUNT);
    for offset in -WEEKS_BACK..=WEEKS_AHEAD {
        let start = current_week_start + Duration::weeks(offset);
        let end = end_of_day(start + Duration::days(6));

        let mut selected: Vec<FutureEntry> = entries
            .iter()
            .filter(|entry| {
                !entry.is_reconciled() && entry.due_date >= start && entry.due_date <= end.date()
            })
            .cloned()
            .collect();
        selected.sort_by_key(|entry| (entry.due_date, entry.id));

        let total_cents: i64 = selected.iter().map(|entry| entry.amount_cents).sum();
        buckets.push(WeekBucket {
            start,
            end,
            is_overdue: now > end && !selected.is_empty(),
            is_current: offset == 0,
            total_cents,
            entries: selected,
        });
    }

    buckets
}
