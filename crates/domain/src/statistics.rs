use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};

use crate::HistoryLedger;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WeeklyAnalytics {
    /// Number of distinct days with at least one recorded session.
    pub workouts_this_week: usize,
    /// Sum of reps × weight over all sets of the week.
    pub total_volume: f64,
}

/// The start of the week containing `now`, i.e. midnight of the most recent
/// `week_start` on or before `now`.
#[must_use]
pub fn week_boundary(now: NaiveDateTime, week_start: Weekday) -> NaiveDate {
    let today = now.date();
    let offset =
        (7 + today.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    today
        .checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(today)
}

/// Aggregate all sessions dated on or after the start of the current week.
#[must_use]
pub fn weekly_analytics(
    history: &HistoryLedger,
    now: NaiveDateTime,
    week_start: Weekday,
) -> WeeklyAnalytics {
    let boundary = week_boundary(now, week_start);
    let mut dates = BTreeSet::new();
    let mut total_volume = 0.0;

    for (_, sessions) in history.iter() {
        for session in sessions.iter().filter(|s| s.date >= boundary) {
            dates.insert(session.date);
            total_volume += session.volume();
        }
    }

    WeeklyAnalytics {
        workouts_this_week: dates.len(),
        total_volume,
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::LoggedSet;

    use super::*;

    fn date(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    // 2024-03-13 is a Wednesday.
    fn now() -> NaiveDateTime {
        date(3, 13).and_hms_opt(19, 45, 0).unwrap()
    }

    #[rstest]
    #[case(Weekday::Sun, date(3, 10))]
    #[case(Weekday::Mon, date(3, 11))]
    #[case(Weekday::Wed, date(3, 13))]
    #[case(Weekday::Thu, date(3, 7))]
    fn test_week_boundary(#[case] week_start: Weekday, #[case] expected: NaiveDate) {
        assert_eq!(week_boundary(now(), week_start), expected);
    }

    #[test]
    fn test_week_boundary_across_month() {
        let now = date(3, 2).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(week_boundary(now, Weekday::Sun), date(2, 25));
    }

    #[test]
    fn test_weekly_analytics() {
        let mut history = HistoryLedger::default();
        history.record_completion(
            "Squat",
            date(3, 11),
            &[
                LoggedSet::new("5", "100"),
                LoggedSet::new("5", "100"),
                LoggedSet::new("5", "100"),
            ],
        );
        history.record_completion("Squat", date(3, 8), &[LoggedSet::new("5", "120")]);

        let analytics = weekly_analytics(&history, now(), Weekday::Sun);

        assert_eq!(analytics.workouts_this_week, 1);
        assert_approx_eq!(analytics.total_volume, 1500.0);
    }

    #[test]
    fn test_weekly_analytics_deduplicates_days() {
        let mut history = HistoryLedger::default();
        history.record_completion("Squat", date(3, 11), &[LoggedSet::new("5", "100")]);
        history.record_completion("Bench Press", date(3, 11), &[LoggedSet::new("5", "60")]);
        history.record_completion("Deadlift", date(3, 10), &[LoggedSet::new("1", "200")]);

        let analytics = weekly_analytics(&history, now(), Weekday::Sun);

        assert_eq!(analytics.workouts_this_week, 2);
        assert_approx_eq!(analytics.total_volume, 1000.0);
    }

    #[test]
    fn test_weekly_analytics_empty() {
        assert_eq!(
            weekly_analytics(&HistoryLedger::default(), now(), Weekday::Sun),
            WeeklyAnalytics::default()
        );
    }

    #[test]
    fn test_weekly_analytics_with_unparsable_input() {
        let mut history = HistoryLedger::default();
        history.record_completion("Squat", date(3, 12), &[LoggedSet::new("x", "100")]);

        let analytics = weekly_analytics(&history, now(), Weekday::Sun);

        assert_eq!(analytics.workouts_this_week, 1);
        assert!(analytics.total_volume.is_nan());
    }
}
