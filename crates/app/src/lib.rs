#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use liftbook_domain::{
    Clock, IdGenerator, NameError, ProgramCatalog, RandomIds, Service, SystemClock, seed,
};

pub mod log;
mod settings;
mod view;

pub use settings::{Settings, WeightUnit};
pub use view::{ProgramsTab, View};

/// State of the user interface: the current view and the application state
/// it renders.
pub struct Model<I, C> {
    pub view: View,
    pub settings: Settings,
    pub service: Service<I, C>,
}

impl Model<RandomIds, SystemClock> {
    /// The application as it starts, with the first seeded program active.
    pub fn init(settings: Settings) -> Result<Self, NameError> {
        Self::with_seed(settings, RandomIds, SystemClock)
    }
}

impl<I: IdGenerator, C: Clock> Model<I, C> {
    pub fn with_seed(settings: Settings, mut ids: I, clock: C) -> Result<Self, NameError> {
        let programs = seed::programs(&mut ids)?;
        let default_program = seed::default_program(&programs);
        let mut service = Service::new(
            settings.config(),
            ProgramCatalog::new(programs),
            ids,
            clock,
        );
        if let Some(id) = default_program {
            service.select_program(id);
        }
        ::log::debug!(
            "initialized model with {} programs",
            service.catalog().programs().len()
        );
        Ok(Self {
            view: View::default(),
            settings,
            service,
        })
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.service.set_config(settings.config());
        self.settings = settings;
    }

    /// Title shown in the header.
    #[must_use]
    pub fn title(&self) -> String {
        self.view.to_string()
    }
}
