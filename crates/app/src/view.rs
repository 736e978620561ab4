use strum::{Display, EnumIter};

/// The screen currently shown. Kept outside the domain state and passed to
/// whatever renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum View {
    Discover,
    #[strum(to_string = "My Programs")]
    MyPrograms(ProgramsTab),
    Workout,
    Create,
    Settings,
}

impl Default for View {
    fn default() -> Self {
        View::MyPrograms(ProgramsTab::default())
    }
}

impl View {
    /// Sub-tabs offered in the header of this view.
    #[must_use]
    pub fn tabs(self) -> &'static [ProgramsTab] {
        match self {
            View::MyPrograms(_) => &[ProgramsTab::Active, ProgramsTab::Completed],
            View::Discover | View::Workout | View::Create | View::Settings => &[],
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ProgramsTab {
    #[default]
    Active,
    Completed,
}
