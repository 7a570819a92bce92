use serde::{Deserialize, Serialize};

use super::Subject;

crate::define_id_type!(u64, TeacherId);

/// A registered teacher.
///
/// `subjects` keeps insertion order; the service layer rejects duplicate
/// assignments, so the vector behaves as an ordered set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub surname: String,
    pub experience: u32,
    pub subjects: Vec<Subject>,
}

impl Teacher {
    pub fn new(
        id: TeacherId,
        name: impl Into<String>,
        surname: impl Into<String>,
        experience: u32,
        subjects: Vec<Subject>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            experience,
            subjects,
        }
    }
}

// Value-equality over the payload; id excluded.
impl PartialEq for Teacher {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.surname == other.surname
            && self.experience == other.experience
            && self.subjects == other.subjects
    }
}

impl Eq for Teacher {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_id() {
        let a = Teacher::new(TeacherId(1), "Jane", "Smith", 5, vec![Subject::Math]);
        let b = Teacher::new(TeacherId(9), "Jane", "Smith", 5, vec![Subject::Math]);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_covers_subjects() {
        let a = Teacher::new(TeacherId(1), "Jane", "Smith", 5, vec![Subject::Math]);
        let b = Teacher::new(TeacherId(1), "Jane", "Smith", 5, vec![Subject::Economics]);
        assert_ne!(a, b);
    }
}
