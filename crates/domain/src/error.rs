/// Reasons for rejecting a composed program.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Program name must not be empty")]
    MissingName,
    #[error("Program must contain at least one exercise")]
    NoExercises,
    #[error("Exercise {} of {} in {} has no name", .0.exercise, .0.day, .0.week)]
    MissingExerciseName(Position),
    #[error("Exercise \"{}\" on {} in {} has no sets", .0.exercise, .0.day, .0.week)]
    NoSets(Position),
    #[error("Set {set} of \"{}\" on {} in {} has no reps", .position.exercise, .position.day, .position.week)]
    MissingReps { position: Position, set: usize },
}

/// Location of an exercise inside a composed program, by display names.
///
/// For an exercise without a name, `exercise` holds its 1-based number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub week: String,
    pub day: String,
    pub exercise: String,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerError {
    #[error("unknown week")]
    UnknownWeek,
    #[error("unknown day")]
    UnknownDay,
    #[error("unknown exercise")]
    UnknownExercise,
    #[error("unknown set")]
    UnknownSet,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn position(exercise: &str) -> Position {
        Position {
            week: String::from("Week 1"),
            day: String::from("Day 2"),
            exercise: String::from(exercise),
        }
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::MissingExerciseName(position("3")).to_string(),
            "Exercise 3 of Day 2 in Week 1 has no name"
        );
        assert_eq!(
            ValidationError::NoSets(position("Squat")).to_string(),
            "Exercise \"Squat\" on Day 2 in Week 1 has no sets"
        );
        assert_eq!(
            ValidationError::MissingReps {
                position: position("Squat"),
                set: 2
            }
            .to_string(),
            "Set 2 of \"Squat\" on Day 2 in Week 1 has no reps"
        );
    }
}
