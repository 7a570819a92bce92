use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

crate::define_id_type!(u64, StudentId);

/// A registered student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub surname: String,
    #[serde(with = "crate::wire::wire_date")]
    pub birth_date: NaiveDate,
    pub phone_number: String,
}

impl Student {
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        surname: impl Into<String>,
        birth_date: NaiveDate,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            surname: surname.into(),
            birth_date,
            phone_number: phone_number.into(),
        }
    }
}

// Value-equality over the payload; the generated id is excluded so that
// duplicate detection compares candidates against stored entities.
impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.surname == other.surname
            && self.birth_date == other.birth_date
            && self.phone_number == other.phone_number
    }
}

impl Eq for Student {}

#[cfg(test)]
mod tests {
    use super::*;

    fn john(id: u64) -> Student {
        Student::new(
            StudentId(id),
            "John",
            "Doe",
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            "+7 (123) 456-78-90",
        )
    }

    #[test]
    fn equality_ignores_id() {
        assert_eq!(john(1), john(2));
    }

    #[test]
    fn equality_covers_phone_number() {
        let mut other = john(1);
        other.phone_number = "+7 (123) 456-78-91".to_string();
        assert_ne!(john(1), other);
    }
}
