use chrono::Weekday;
use log::{debug, info, warn};

use crate::{
    ActiveProgram, Clock, HistoryLedger, IdGenerator, LogError, LoggedSet, Program,
    ProgramCatalog, ProgramComposer, ProgramID, Session, SetField, ValidationError,
    WeeklyAnalytics, WorkoutSession, WorkoutState, weekly_analytics,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Author tag of programs added by the user.
    pub author: String,
    pub week_start: Weekday,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: String::from("You"),
            week_start: Weekday::Sun,
        }
    }
}

/// All application state, driven by one user action at a time.
pub struct Service<I, C> {
    config: Config,
    ids: I,
    clock: C,
    catalog: ProgramCatalog,
    active: ActiveProgram,
    workout: Option<WorkoutSession>,
    history: HistoryLedger,
    composer: ProgramComposer,
}

impl<I: IdGenerator, C: Clock> Service<I, C> {
    pub fn new(config: Config, catalog: ProgramCatalog, mut ids: I, clock: C) -> Self {
        let composer = ProgramComposer::new(&mut ids);
        Self {
            config,
            ids,
            clock,
            catalog,
            active: ActiveProgram::default(),
            workout: None,
            history: HistoryLedger::default(),
            composer,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    #[must_use]
    pub fn catalog(&self) -> &ProgramCatalog {
        &self.catalog
    }

    pub fn add_program(&mut self, program: Program) -> ProgramID {
        let id = self
            .catalog
            .add_program(program, &self.config.author, &mut self.ids);
        info!("added program {}", *id);
        id
    }

    /// Add the program to the user's programs and make it the active one.
    ///
    /// Returns `false` if the program is unknown.
    pub fn select_program(&mut self, id: ProgramID) -> bool {
        if !self.catalog.select_program(id) {
            warn!("failed to select unknown program {}", *id);
            return false;
        }
        self.set_active(id)
    }

    /// Make the program active and start over at its first day.
    pub fn set_active(&mut self, id: ProgramID) -> bool {
        let Some(program) = self.catalog.program(id) else {
            warn!("failed to activate unknown program {}", *id);
            return false;
        };
        info!("activated program {}", program.name);
        self.active.set_active(program.clone());
        self.workout = None;
        true
    }

    pub fn discover(&self) -> impl Iterator<Item = &Program> {
        self.catalog.discover()
    }

    pub fn selected(&self) -> impl Iterator<Item = &Program> {
        self.catalog.selected()
    }

    #[must_use]
    pub fn active(&self) -> &ActiveProgram {
        &self.active
    }

    /// Start the workout of the current day unless one is already in progress.
    pub fn start_workout(&mut self) -> WorkoutState<'_> {
        let Some(program) = self.active.program() else {
            return WorkoutState::NoActiveProgram;
        };

        if self.workout.is_none() {
            self.workout = WorkoutSession::start(program, self.active.cursor());
            if let Some(ref workout) = self.workout {
                debug!(
                    "started workout {} of {} in {}",
                    workout.day.name, program.name, workout.week_name
                );
            }
        }

        match self.workout {
            Some(ref workout) => WorkoutState::Ready(workout),
            None => WorkoutState::NoWorkoutDays,
        }
    }

    #[must_use]
    pub fn workout(&self) -> Option<&WorkoutSession> {
        self.workout.as_ref()
    }

    /// Enter reps or weight into a set of the running workout.
    ///
    /// Does nothing if no workout is in progress.
    pub fn log_set(
        &mut self,
        exercise_idx: usize,
        set_idx: usize,
        field: SetField,
        value: &str,
    ) -> Result<(), LogError> {
        match self.workout {
            Some(ref mut workout) => workout.update_set(exercise_idx, set_idx, field, value),
            None => Ok(()),
        }
    }

    pub fn toggle_set(&mut self, exercise_idx: usize, set_idx: usize) -> Result<bool, LogError> {
        match self.workout {
            Some(ref mut workout) => workout.toggle_completed(exercise_idx, set_idx),
            None => Ok(false),
        }
    }

    /// Record the running workout in the history and move on to the next day.
    ///
    /// Returns the number of exercises added to the history.
    pub fn finish_workout(&mut self) -> usize {
        let Some(workout) = self.workout.take() else {
            return 0;
        };
        let date = self.clock.today();

        let recorded = workout
            .exercises
            .iter()
            .filter(|e| self.history.record_completion(&e.name, date, &e.sets))
            .count();

        let total_days = self.active.program().map_or(0, Program::num_days);
        match self.active.advance_day(total_days) {
            Some(cursor) => info!(
                "finished workout {}, recorded {recorded} exercises, next day {cursor}",
                workout.day.name
            ),
            None => warn!("finished workout {} without active day", workout.day.name),
        }

        recorded
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    /// Record sets of an exercise dated today.
    pub fn record_completion(&mut self, exercise_name: &str, logged_sets: &[LoggedSet]) -> bool {
        let date = self.clock.today();
        self.history
            .record_completion(exercise_name, date, logged_sets)
    }

    #[must_use]
    pub fn exercise_history(&self, exercise_name: &str) -> &[Session] {
        self.history.sessions(exercise_name)
    }

    #[must_use]
    pub fn weekly_analytics(&self) -> WeeklyAnalytics {
        weekly_analytics(&self.history, self.clock.now(), self.config.week_start)
    }

    #[must_use]
    pub fn composer(&self) -> &ProgramComposer {
        &self.composer
    }

    /// The composer together with the identifier source for new nodes.
    pub fn composer_mut(&mut self) -> (&mut ProgramComposer, &mut I) {
        (&mut self.composer, &mut self.ids)
    }

    pub fn commit_program(&mut self) -> Result<ProgramID, ValidationError> {
        match self
            .composer
            .commit(&mut self.catalog, &self.config.author, &mut self.ids)
        {
            Ok(id) => {
                info!("created program {}", *id);
                Ok(id)
            }
            Err(err) => {
                warn!("failed to create program: {err}");
                Err(err)
            }
        }
    }
}
