use crate::{Day, ExerciseID, Program, ProgramID, TargetSet};

/// What the workout view can show for the active program.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutState<'a> {
    NoActiveProgram,
    NoWorkoutDays,
    Ready(&'a WorkoutSession),
}

/// A workout in progress: the scheduled day and one log slot per target set.
///
/// Nothing outside the session changes until it is finished.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    pub program_id: ProgramID,
    pub day_index: usize,
    pub week_name: String,
    pub day: Day,
    pub exercises: Vec<ExerciseLog>,
}

impl WorkoutSession {
    /// Build the session for the day at `cursor`.
    ///
    /// Returns `None` if the program has no day at that position.
    #[must_use]
    pub fn start(program: &Program, cursor: usize) -> Option<Self> {
        let days = program.days();
        let scheduled = days.get(cursor)?;

        Some(Self {
            program_id: program.id,
            day_index: cursor,
            week_name: scheduled.week_name.to_string(),
            day: scheduled.day.clone(),
            exercises: scheduled
                .day
                .exercises
                .iter()
                .map(|e| ExerciseLog {
                    exercise_id: e.id,
                    name: e.name.clone(),
                    targets: e.sets.clone(),
                    sets: vec![LoggedSet::default(); e.sets.len()],
                })
                .collect(),
        })
    }

    pub fn update_set(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
        field: SetField,
        value: &str,
    ) -> Result<(), LogError> {
        let set = self.set_mut(exercise_idx, set_idx)?;
        match field {
            SetField::Reps => set.reps = value.to_string(),
            SetField::Weight => set.weight = value.to_string(),
        }
        Ok(())
    }

    /// Flip the completion flag and return its new value.
    pub fn toggle_completed(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
    ) -> Result<bool, LogError> {
        let set = self.set_mut(exercise_idx, set_idx)?;
        set.completed = !set.completed;
        Ok(set.completed)
    }

    /// Number of completed sets and total number of sets.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        let sets = self.exercises.iter().flat_map(|e| &e.sets);
        (sets.clone().filter(|s| s.completed).count(), sets.count())
    }

    fn set_mut(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
    ) -> Result<&mut LoggedSet, LogError> {
        self.exercises
            .get_mut(exercise_idx)
            .ok_or(LogError::NoSuchExercise(exercise_idx))?
            .sets
            .get_mut(set_idx)
            .ok_or(LogError::NoSuchSet(exercise_idx, set_idx))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseLog {
    pub exercise_id: ExerciseID,
    pub name: String,
    pub targets: Vec<TargetSet>,
    pub sets: Vec<LoggedSet>,
}

/// Reps and weight as entered by the user.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoggedSet {
    pub reps: String,
    pub weight: String,
    pub completed: bool,
}

impl LoggedSet {
    #[must_use]
    pub fn new(reps: &str, weight: &str) -> Self {
        Self {
            reps: reps.to_string(),
            weight: weight.to_string(),
            completed: false,
        }
    }

    /// Whether both reps and weight have been entered.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        !self.reps.trim().is_empty() && !self.weight.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Reps,
    Weight,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum LogError {
    #[error("No exercise at position {0}")]
    NoSuchExercise(usize),
    #[error("Exercise at position {0} has no set at position {1}")]
    NoSuchSet(usize, usize),
}
