use derive_more::Deref;
use uuid::Uuid;

macro_rules! id_type {
    ($name: ident) => {
        #[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            #[must_use]
            pub fn nil() -> Self {
                Self(Uuid::nil())
            }

            #[must_use]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self(Uuid::from_bytes(value.to_be_bytes()))
            }
        }
    };
}

id_type!(ProgramID);
id_type!(WeekID);
id_type!(DayID);
id_type!(ExerciseID);
id_type!(SetID);

/// Source of identifiers for newly created or cloned nodes.
pub trait IdGenerator {
    fn next_id(&mut self) -> Uuid;
}

/// Random version 4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Deterministic identifiers counting up from a start value.
///
/// The nil UUID is never produced, so every generated identifier is
/// distinguishable from an unassigned one.
#[derive(Debug, Clone, Copy)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    #[must_use]
    pub fn new(start: u128) -> Self {
        Self {
            next: start.max(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new(1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        let id = Uuid::from_bytes(self.next.to_be_bytes());
        self.next = self.next.wrapping_add(1).max(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_id_nil() {
        assert!(ProgramID::nil().is_nil());
        assert_eq!(ProgramID::nil(), ProgramID::default());
        assert!(!SetID::from(1).is_nil());
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ExerciseID::from(ids.next_id()), ExerciseID::from(1));
        assert_eq!(ExerciseID::from(ids.next_id()), ExerciseID::from(2));
    }

    #[test]
    fn test_sequential_ids_skip_nil() {
        let mut ids = SequentialIds::new(0);
        assert!(!ids.next_id().is_nil());
    }

    #[test]
    fn test_random_ids_unique() {
        let mut ids = RandomIds;
        let generated = (0..100).map(|_| ids.next_id()).collect::<HashSet<_>>();
        assert_eq!(generated.len(), 100);
    }
}
