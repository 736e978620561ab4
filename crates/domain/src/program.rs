use std::fmt;

use crate::{DayID, ExerciseID, IdGenerator, Name, ProgramID, SetID, WeekID};

/// A named, authored workout plan composed of ordered weeks.
///
/// The content of a program is fixed once it has been added to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub id: ProgramID,
    pub name: Name,
    pub author: String,
    pub description: String,
    pub visibility: Visibility,
    pub weeks: Vec<Week>,
}

impl Program {
    /// The days of all weeks in performing order, annotated with the name of
    /// the week they belong to.
    #[must_use]
    pub fn days(&self) -> Vec<ScheduledDay<'_>> {
        self.weeks
            .iter()
            .flat_map(|week| {
                week.days.iter().map(move |day| ScheduledDay {
                    week_name: &week.name,
                    day,
                })
            })
            .collect()
    }

    #[must_use]
    pub fn num_days(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.weeks
            .iter()
            .flat_map(|w| &w.days)
            .flat_map(|d| &d.exercises)
            .map(|e| e.sets.len())
            .sum()
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Visibility::Public => "public",
                Visibility::Private => "private",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub id: WeekID,
    pub name: String,
    pub days: Vec<Day>,
}

impl Week {
    #[must_use]
    pub fn new(id: WeekID, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            days: vec![],
        }
    }

    #[must_use]
    pub fn has_exercises(&self) -> bool {
        self.days.iter().any(|d| !d.exercises.is_empty())
    }

    /// Copy of the days of this week where every node has a fresh identifier.
    pub fn clone_days(&self, ids: &mut impl IdGenerator) -> Vec<Day> {
        self.days.iter().map(|d| d.deep_clone(ids)).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Day {
    pub id: DayID,
    pub name: String,
    pub exercises: Vec<Exercise>,
}

impl Day {
    #[must_use]
    pub fn new(id: DayID, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            exercises: vec![],
        }
    }

    pub fn deep_clone(&self, ids: &mut impl IdGenerator) -> Self {
        Self {
            id: ids.next_id().into(),
            name: self.name.clone(),
            exercises: self
                .exercises
                .iter()
                .map(|e| e.deep_clone(ids))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    /// Also the key under which completed sets are kept in the history, so
    /// exercises with equal names share their history.
    pub name: String,
    pub sets: Vec<TargetSet>,
}

impl Exercise {
    #[must_use]
    pub fn new(id: ExerciseID, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sets: vec![],
        }
    }

    pub fn deep_clone(&self, ids: &mut impl IdGenerator) -> Self {
        Self {
            id: ids.next_id().into(),
            name: self.name.clone(),
            sets: self
                .sets
                .iter()
                .map(|s| TargetSet {
                    id: ids.next_id().into(),
                    ..s.clone()
                })
                .collect(),
        }
    }
}

/// A planned unit of work. All fields are free-form text, e.g. `"10-12"` reps
/// at `"RPE 8-9"`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TargetSet {
    pub id: SetID,
    pub reps: String,
    pub intensity: String,
    pub weight: Option<String>,
}

impl TargetSet {
    #[must_use]
    pub fn new(id: SetID, reps: &str, intensity: &str, weight: Option<&str>) -> Self {
        Self {
            id,
            reps: reps.to_string(),
            intensity: intensity.to_string(),
            weight: weight.map(ToString::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledDay<'a> {
    pub week_name: &'a str,
    pub day: &'a Day,
}
