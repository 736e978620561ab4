use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;

use crate::LoggedSet;

/// Completed sessions per exercise name, most recent first.
///
/// Sessions are only ever added, never changed or removed.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HistoryLedger {
    entries: BTreeMap<String, Vec<Session>>,
}

impl HistoryLedger {
    /// Record the filled sets of a finished exercise as a new session.
    ///
    /// Sets missing reps or weight are dropped. Returns `false` without
    /// recording anything if no set remains.
    pub fn record_completion(
        &mut self,
        exercise_name: &str,
        date: NaiveDate,
        logged_sets: &[LoggedSet],
    ) -> bool {
        let sets = logged_sets
            .iter()
            .filter(|s| s.is_filled())
            .map(CompletedSet::from)
            .collect::<Vec<_>>();

        if sets.is_empty() {
            return false;
        }

        debug!("recorded {} sets of {exercise_name} on {date}", sets.len());
        self.entries
            .entry(exercise_name.to_string())
            .or_default()
            .insert(0, Session { date, sets });
        true
    }

    #[must_use]
    pub fn sessions(&self, exercise_name: &str) -> &[Session] {
        self.entries
            .get(exercise_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Session])> {
        self.entries
            .iter()
            .map(|(name, sessions)| (name.as_str(), sessions.as_slice()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub date: NaiveDate,
    pub sets: Vec<CompletedSet>,
}

impl Session {
    /// Sum of reps × weight. Unparsable input makes the result NaN.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.sets.iter().map(|s| s.reps * s.weight).sum()
    }
}

/// Reps and weight parsed from a logged set, NaN where the input was not a
/// number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedSet {
    pub reps: f64,
    pub weight: f64,
}

impl From<&LoggedSet> for CompletedSet {
    fn from(value: &LoggedSet) -> Self {
        Self {
            reps: parse_int(&value.reps),
            weight: parse_int(&value.weight),
        }
    }
}

/// Parse the leading integer of `value`, ignoring anything after it.
///
/// `"100kg"` yields 100 and `"2.5"` yields 2. Input without leading digits
/// yields NaN.
#[must_use]
pub fn parse_int(value: &str) -> f64 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    if end == 0 {
        return f64::NAN;
    }

    let magnitude = digits[..end].parse::<f64>().unwrap_or(f64::NAN);
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn test_record_completion_prepends() {
        let mut history = HistoryLedger::default();

        assert!(history.record_completion("Squat", date(1), &[LoggedSet::new("5", "100")]));
        assert!(history.record_completion("Squat", date(4), &[LoggedSet::new("3", "110")]));

        assert_eq!(
            history.sessions("Squat"),
            &[
                Session {
                    date: date(4),
                    sets: vec![CompletedSet {
                        reps: 3.0,
                        weight: 110.0
                    }],
                },
                Session {
                    date: date(1),
                    sets: vec![CompletedSet {
                        reps: 5.0,
                        weight: 100.0
                    }],
                },
            ]
        );
    }

    #[test]
    fn test_record_completion_drops_unfilled_sets() {
        let mut history = HistoryLedger::default();

        history.record_completion(
            "Squat",
            date(1),
            &[
                LoggedSet::new("5", ""),
                LoggedSet::new("5", "100"),
                LoggedSet::new(" ", "100"),
            ],
        );

        assert_eq!(history.sessions("Squat")[0].sets.len(), 1);
    }

    #[test]
    fn test_record_completion_without_filled_sets() {
        let mut history = HistoryLedger::default();

        assert!(!history.record_completion(
            "Squat",
            date(1),
            &[LoggedSet::new("5", ""), LoggedSet::new("", "100")]
        ));
        assert!(!history.record_completion("Squat", date(1), &[]));

        assert!(history.is_empty());
        assert!(history.sessions("Squat").is_empty());
    }

    #[test]
    fn test_record_completion_keeps_unparsable_sets() {
        let mut history = HistoryLedger::default();

        history.record_completion("Squat", date(1), &[LoggedSet::new("five", "100")]);

        let session = &history.sessions("Squat")[0];
        assert!(session.sets[0].reps.is_nan());
        assert!(session.volume().is_nan());
    }

    #[test]
    fn test_history_is_keyed_by_name() {
        let mut history = HistoryLedger::default();

        history.record_completion("Squat", date(1), &[LoggedSet::new("5", "100")]);
        history.record_completion("Squat", date(2), &[LoggedSet::new("5", "100")]);
        history.record_completion("Bench Press", date(2), &[LoggedSet::new("5", "60")]);

        assert_eq!(
            history
                .iter()
                .map(|(name, sessions)| (name, sessions.len()))
                .collect::<Vec<_>>(),
            vec![("Bench Press", 1), ("Squat", 2)]
        );
    }

    #[test]
    fn test_session_volume() {
        let session = Session {
            date: date(1),
            sets: vec![
                CompletedSet {
                    reps: 5.0,
                    weight: 100.0,
                },
                CompletedSet {
                    reps: 8.0,
                    weight: 82.5,
                },
            ],
        };
        assert_approx_eq!(session.volume(), 1160.0);
    }

    #[rstest]
    #[case("5", 5.0)]
    #[case(" 12 ", 12.0)]
    #[case("100kg", 100.0)]
    #[case("2.5", 2.0)]
    #[case("-3", -3.0)]
    #[case("+7", 7.0)]
    fn test_parse_int(#[case] value: &str, #[case] expected: f64) {
        assert_approx_eq!(parse_int(value), expected);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("-")]
    #[case(".5")]
    fn test_parse_int_nan(#[case] value: &str) {
        assert!(parse_int(value).is_nan());
    }
}
