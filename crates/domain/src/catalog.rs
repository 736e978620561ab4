use log::debug;

use crate::{IdGenerator, Program, ProgramID};

/// All known programs together with the subset the user has selected.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ProgramCatalog {
    programs: Vec<Program>,
    selected: Vec<ProgramID>,
}

impl ProgramCatalog {
    #[must_use]
    pub fn new(programs: Vec<Program>) -> Self {
        Self {
            programs,
            selected: vec![],
        }
    }

    /// Add a program under a fresh identifier with `author` as its author tag.
    pub fn add_program(
        &mut self,
        mut program: Program,
        author: &str,
        ids: &mut impl IdGenerator,
    ) -> ProgramID {
        program.id = ids.next_id().into();
        program.author = author.to_string();
        debug!("added program {} ({})", program.name, *program.id);
        let id = program.id;
        self.programs.push(program);
        id
    }

    /// Add the program to the selection unless it is already selected.
    ///
    /// Returns `false` if the program is unknown.
    pub fn select_program(&mut self, id: ProgramID) -> bool {
        if self.program(id).is_none() {
            return false;
        }
        if !self.selected.contains(&id) {
            self.selected.push(id);
        }
        true
    }

    #[must_use]
    pub fn program(&self, id: ProgramID) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn discover(&self) -> impl Iterator<Item = &Program> {
        self.programs.iter().filter(|p| p.is_public())
    }

    pub fn selected(&self) -> impl Iterator<Item = &Program> {
        self.selected.iter().filter_map(|id| self.program(*id))
    }

    #[must_use]
    pub fn is_selected(&self, id: ProgramID) -> bool {
        self.selected.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{Name, SequentialIds, Visibility};

    use super::*;

    fn program(id: u128, name: &str, visibility: Visibility) -> Program {
        Program {
            id: id.into(),
            name: Name::new(name).unwrap(),
            author: String::from("Someone"),
            description: String::new(),
            visibility,
            weeks: vec![],
        }
    }

    static CATALOG: std::sync::LazyLock<ProgramCatalog> = std::sync::LazyLock::new(|| {
        ProgramCatalog::new(vec![
            program(1, "A", Visibility::Public),
            program(2, "B", Visibility::Private),
            program(3, "C", Visibility::Public),
        ])
    });

    #[test]
    fn test_add_program() {
        let mut catalog = CATALOG.clone();
        let mut ids = SequentialIds::new(10);

        let id = catalog.add_program(program(1, "D", Visibility::Private), "You", &mut ids);

        assert_eq!(id, ProgramID::from(10));
        assert_eq!(catalog.programs().len(), 4);
        let added = catalog.program(id).unwrap();
        assert_eq!(added.name.as_str(), "D");
        assert_eq!(added.author, "You");
        assert_eq!(catalog.program(1.into()).unwrap().name.as_str(), "A");
    }

    #[test]
    fn test_select_program_is_idempotent() {
        let mut catalog = CATALOG.clone();

        assert!(catalog.select_program(2.into()));
        assert!(catalog.select_program(2.into()));

        assert_eq!(
            catalog.selected().map(|p| p.id).collect::<Vec<_>>(),
            vec![ProgramID::from(2)]
        );
        assert!(catalog.is_selected(2.into()));
    }

    #[test]
    fn test_select_program_keeps_selection_order() {
        let mut catalog = CATALOG.clone();

        catalog.select_program(3.into());
        catalog.select_program(1.into());

        assert_eq!(
            catalog.selected().map(|p| p.id).collect::<Vec<_>>(),
            vec![ProgramID::from(3), ProgramID::from(1)]
        );
    }

    #[test]
    fn test_select_unknown_program() {
        let mut catalog = CATALOG.clone();

        assert!(!catalog.select_program(42.into()));
        assert_eq!(catalog.selected().count(), 0);
    }

    #[test]
    fn test_discover() {
        assert_eq!(
            CATALOG.discover().map(|p| p.id).collect::<Vec<_>>(),
            vec![ProgramID::from(1), ProgramID::from(3)]
        );
    }
}
