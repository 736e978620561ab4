use log::debug;

use crate::{
    ComposerError, Day, DayID, Exercise, ExerciseID, IdGenerator, Name, Position, Program,
    ProgramCatalog, ProgramID, SetID, TargetSet, ValidationError, Visibility, Week, WeekID,
};

/// Builder for authoring a new program before it is added to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramComposer {
    pub name: String,
    pub description: String,
    pub visibility: Visibility,
    weeks: Vec<Week>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    Reps,
    Intensity,
    Weight,
}

impl ProgramComposer {
    /// An unnamed program consisting of an empty first week.
    pub fn new(ids: &mut impl IdGenerator) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            visibility: Visibility::default(),
            weeks: vec![Week::new(ids.next_id().into(), "Week 1")],
        }
    }

    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn add_week(&mut self, ids: &mut impl IdGenerator) -> WeekID {
        let week = Week::new(ids.next_id().into(), format!("Week {}", self.weeks.len() + 1));
        let id = week.id;
        self.weeks.push(week);
        id
    }

    pub fn add_day(
        &mut self,
        week_id: WeekID,
        ids: &mut impl IdGenerator,
    ) -> Result<DayID, ComposerError> {
        let week = self.week_mut(week_id)?;
        let day = Day::new(ids.next_id().into(), format!("Day {}", week.days.len() + 1));
        let id = day.id;
        week.days.push(day);
        Ok(id)
    }

    pub fn add_exercise(
        &mut self,
        week_id: WeekID,
        day_id: DayID,
        ids: &mut impl IdGenerator,
    ) -> Result<ExerciseID, ComposerError> {
        let day = self.day_mut(week_id, day_id)?;
        let exercise = Exercise::new(ids.next_id().into(), "");
        let id = exercise.id;
        day.exercises.push(exercise);
        Ok(id)
    }

    pub fn add_set(
        &mut self,
        week_id: WeekID,
        day_id: DayID,
        exercise_id: ExerciseID,
        ids: &mut impl IdGenerator,
    ) -> Result<SetID, ComposerError> {
        let exercise = self.exercise_mut(week_id, day_id, exercise_id)?;
        let set = TargetSet {
            id: ids.next_id().into(),
            ..TargetSet::default()
        };
        let id = set.id;
        exercise.sets.push(set);
        Ok(id)
    }

    pub fn rename_week(&mut self, week_id: WeekID, name: &str) -> Result<(), ComposerError> {
        self.week_mut(week_id)?.name = name.to_string();
        Ok(())
    }

    pub fn rename_day(
        &mut self,
        week_id: WeekID,
        day_id: DayID,
        name: &str,
    ) -> Result<(), ComposerError> {
        self.day_mut(week_id, day_id)?.name = name.to_string();
        Ok(())
    }

    pub fn rename_exercise(
        &mut self,
        week_id: WeekID,
        day_id: DayID,
        exercise_id: ExerciseID,
        name: &str,
    ) -> Result<(), ComposerError> {
        self.exercise_mut(week_id, day_id, exercise_id)?.name = name.to_string();
        Ok(())
    }

    /// Change one field of a target set. A blank weight is stored as no weight.
    pub fn update_set(
        &mut self,
        week_id: WeekID,
        day_id: DayID,
        exercise_id: ExerciseID,
        set_id: SetID,
        field: TargetField,
        value: &str,
    ) -> Result<(), ComposerError> {
        let set = self
            .exercise_mut(week_id, day_id, exercise_id)?
            .sets
            .iter_mut()
            .find(|s| s.id == set_id)
            .ok_or(ComposerError::UnknownSet)?;
        match field {
            TargetField::Reps => set.reps = value.to_string(),
            TargetField::Intensity => set.intensity = value.to_string(),
            TargetField::Weight => {
                set.weight = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
            }
        }
        Ok(())
    }

    pub fn remove_week(&mut self, week_id: WeekID) -> Result<(), ComposerError> {
        let idx = self
            .weeks
            .iter()
            .position(|w| w.id == week_id)
            .ok_or(ComposerError::UnknownWeek)?;
        self.weeks.remove(idx);
        Ok(())
    }

    pub fn remove_day(&mut self, week_id: WeekID, day_id: DayID) -> Result<(), ComposerError> {
        let days = &mut self.week_mut(week_id)?.days;
        let idx = days
            .iter()
            .position(|d| d.id == day_id)
            .ok_or(ComposerError::UnknownDay)?;
        days.remove(idx);
        Ok(())
    }

    pub fn remove_exercise(
        &mut self,
        week_id: WeekID,
        day_id: DayID,
        exercise_id: ExerciseID,
    ) -> Result<(), ComposerError> {
        let exercises = &mut self.day_mut(week_id, day_id)?.exercises;
        let idx = exercises
            .iter()
            .position(|e| e.id == exercise_id)
            .ok_or(ComposerError::UnknownExercise)?;
        exercises.remove(idx);
        Ok(())
    }

    pub fn remove_set(
        &mut self,
        week_id: WeekID,
        day_id: DayID,
        exercise_id: ExerciseID,
        set_id: SetID,
    ) -> Result<(), ComposerError> {
        let sets = &mut self.exercise_mut(week_id, day_id, exercise_id)?.sets;
        let idx = sets
            .iter()
            .position(|s| s.id == set_id)
            .ok_or(ComposerError::UnknownSet)?;
        sets.remove(idx);
        Ok(())
    }

    /// Replace the days of the week at `index` with a copy of the days of the
    /// week before it.
    ///
    /// Every copied node gets a fresh identifier. Returns `false` if there is
    /// no previous week or no week at `index`.
    pub fn copy_previous_week(&mut self, index: usize, ids: &mut impl IdGenerator) -> bool {
        if index == 0 || index >= self.weeks.len() {
            return false;
        }
        let days = self.weeks[index - 1].clone_days(ids);
        debug!(
            "copied {} days from {} to {}",
            days.len(),
            self.weeks[index - 1].name,
            self.weeks[index].name
        );
        self.weeks[index].days = days;
        true
    }

    /// Check the composed program and build it from the weeks containing
    /// exercises.
    ///
    /// The returned program has no identifier or author yet.
    pub fn validate(&self) -> Result<Program, ValidationError> {
        let name = Name::new(&self.name).map_err(|_| ValidationError::MissingName)?;
        let weeks = self
            .weeks
            .iter()
            .filter(|w| w.has_exercises())
            .cloned()
            .collect::<Vec<_>>();

        if weeks.is_empty() {
            return Err(ValidationError::NoExercises);
        }

        for week in &weeks {
            for day in &week.days {
                for (i, exercise) in day.exercises.iter().enumerate() {
                    let position = |exercise: String| Position {
                        week: week.name.clone(),
                        day: day.name.clone(),
                        exercise,
                    };
                    if exercise.name.trim().is_empty() {
                        return Err(ValidationError::MissingExerciseName(position(
                            (i + 1).to_string(),
                        )));
                    }
                    if exercise.sets.is_empty() {
                        return Err(ValidationError::NoSets(position(exercise.name.clone())));
                    }
                    if let Some(j) = exercise.sets.iter().position(|s| s.reps.trim().is_empty()) {
                        return Err(ValidationError::MissingReps {
                            position: position(exercise.name.clone()),
                            set: j + 1,
                        });
                    }
                }
            }
        }

        Ok(Program {
            id: ProgramID::nil(),
            name,
            author: String::new(),
            description: self.description.trim().to_string(),
            visibility: self.visibility,
            weeks,
        })
    }

    /// Add the composed program to `catalog` and start over with an empty
    /// composer.
    ///
    /// Nothing changes if the program is invalid.
    pub fn commit(
        &mut self,
        catalog: &mut ProgramCatalog,
        author: &str,
        ids: &mut impl IdGenerator,
    ) -> Result<ProgramID, ValidationError> {
        let program = self.validate()?;
        let id = catalog.add_program(program, author, ids);
        *self = Self::new(ids);
        Ok(id)
    }

    fn week_mut(&mut self, week_id: WeekID) -> Result<&mut Week, ComposerError> {
        self.weeks
            .iter_mut()
            .find(|w| w.id == week_id)
            .ok_or(ComposerError::UnknownWeek)
    }

    fn day_mut(&mut self, week_id: WeekID, day_id: DayID) -> Result<&mut Day, ComposerError> {
        self.week_mut(week_id)?
            .days
            .iter_mut()
            .find(|d| d.id == day_id)
            .ok_or(ComposerError::UnknownDay)
    }

    fn exercise_mut(
        &mut self,
        week_id: WeekID,
        day_id: DayID,
        exercise_id: ExerciseID,
    ) -> Result<&mut Exercise, ComposerError> {
        self.day_mut(week_id, day_id)?
            .exercises
            .iter_mut()
            .find(|e| e.id == exercise_id)
            .ok_or(ComposerError::UnknownExercise)
    }
}
