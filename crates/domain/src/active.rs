use crate::{Program, ProgramID};

/// The program currently performed and the position of the next workout day
/// in its flattened day sequence.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ActiveProgram {
    program: Option<Program>,
    cursor: usize,
}

impl ActiveProgram {
    pub fn set_active(&mut self, program: Program) {
        self.program = Some(program);
        self.cursor = 0;
    }

    #[must_use]
    pub fn program(&self) -> Option<&Program> {
        self.program.as_ref()
    }

    #[must_use]
    pub fn program_id(&self) -> Option<ProgramID> {
        self.program.as_ref().map(|p| p.id)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor to the next day, wrapping after the last one.
    ///
    /// Returns `None` and leaves the cursor untouched if there are no days.
    pub fn advance_day(&mut self, total_days: usize) -> Option<usize> {
        let next = next_day(self.cursor, total_days)?;
        self.cursor = next;
        Some(next)
    }
}

#[must_use]
pub fn next_day(cursor: usize, total_days: usize) -> Option<usize> {
    if total_days == 0 {
        return None;
    }
    Some(cursor.wrapping_add(1) % total_days)
}
