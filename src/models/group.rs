use serde::{Deserialize, Serialize};

use super::Student;

crate::define_id_type!(u64, GroupId);

/// A study group with its enrolled students.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: GroupId,
    pub number: u64,
    pub students: Vec<Student>,
}

impl Group {
    pub fn new(id: GroupId, number: u64, students: Vec<Student>) -> Self {
        Self {
            id,
            number,
            students,
        }
    }
}

// The group number is the natural key: two groups with the same number
// are the same group regardless of membership.
impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Group {}
