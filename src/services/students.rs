//! Directory service for students.

use std::sync::Arc;

use log::info;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewStudent, Student, StudentId};
use crate::store::MemoryDb;

use super::eq_ignore_case;

/// CRUD and lookup over the student collection.
#[derive(Clone)]
pub struct StudentService {
    db: Arc<MemoryDb>,
}

impl StudentService {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }

    /// Register a new student.
    ///
    /// Fails with `AlreadyExists` if a value-equal student is already
    /// stored. The duplicate check and the insert happen under one write
    /// guard, so two racing identical candidates cannot both commit.
    pub fn add(&self, candidate: NewStudent) -> ServiceResult<Student> {
        candidate.validate()?;

        let mut students = self.db.students.write();
        let new = Student::new(
            StudentId(0),
            candidate.name,
            candidate.surname,
            candidate.birth_date,
            candidate.phone_number,
        );
        if students.values().any(|s| s == &new) {
            return Err(ServiceError::AlreadyExists(format!(
                "student {} {}",
                new.name, new.surname
            )));
        }

        let id = self.db.students.next_id();
        let student = Student { id: StudentId(id), ..new };
        students.insert(id, student.clone());
        info!("added student {} ({} {})", id, student.name, student.surname);
        Ok(student)
    }

    /// Replace the student stored under `id` with a rebuilt entity.
    ///
    /// Fails with `NotFound` if the id is absent, or `AlreadyExists` if
    /// some *other* stored student is value-equal to the updated one.
    pub fn update(&self, id: StudentId, candidate: NewStudent) -> ServiceResult<Student> {
        candidate.validate()?;

        let mut students = self.db.students.write();
        if !students.contains_key(&id.0) {
            return Err(ServiceError::NotFound(format!("student with id {id}")));
        }

        let updated = Student::new(
            id,
            candidate.name,
            candidate.surname,
            candidate.birth_date,
            candidate.phone_number,
        );
        if students.iter().any(|(k, v)| *k != id.0 && v == &updated) {
            return Err(ServiceError::AlreadyExists(format!(
                "student {} {}",
                updated.name, updated.surname
            )));
        }

        students.insert(id.0, updated.clone());
        info!("updated student {id}");
        Ok(updated)
    }

    /// Remove a student. Fails with `NotFound` if absent.
    pub fn delete(&self, id: StudentId) -> ServiceResult<()> {
        if self.db.students.remove(id.0).is_none() {
            return Err(ServiceError::NotFound(format!("student with id {id}")));
        }
        info!("deleted student {id}");
        Ok(())
    }

    pub fn find_all(&self) -> Vec<Student> {
        self.db.students.values()
    }

    pub fn find_by_id(&self, id: StudentId) -> Option<Student> {
        self.db.students.get(id.0)
    }

    /// Exact name and surname match, both case-insensitive.
    pub fn find_by_name_and_surname(&self, name: &str, surname: &str) -> Vec<Student> {
        self.db
            .students
            .values()
            .into_iter()
            .filter(|s| eq_ignore_case(&s.name, name) && eq_ignore_case(&s.surname, surname))
            .collect()
    }

    pub fn find_by_name(&self, name: &str) -> Vec<Student> {
        self.db
            .students
            .values()
            .into_iter()
            .filter(|s| eq_ignore_case(&s.name, name))
            .collect()
    }

    pub fn find_by_surname(&self, surname: &str) -> Vec<Student> {
        self.db
            .students
            .values()
            .into_iter()
            .filter(|s| eq_ignore_case(&s.surname, surname))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn service() -> StudentService {
        StudentService::new(Arc::new(MemoryDb::new()))
    }

    fn john_doe() -> NewStudent {
        NewStudent {
            name: "John".to_string(),
            surname: "Doe".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            phone_number: "+7 (123) 456-78-90".to_string(),
        }
    }

    #[test]
    fn add_then_find_round_trips() {
        let service = service();
        let added = service.add(john_doe()).unwrap();

        let found = service.find_by_id(added.id).unwrap();
        assert_eq!(found, added);
        assert_eq!(found.id, added.id);
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let service = service();
        service.add(john_doe()).unwrap();

        let result = service.add(john_doe());
        assert!(matches!(result, Err(ServiceError::AlreadyExists(_))));
        assert_eq!(service.find_all().len(), 1);
    }

    #[test]
    fn same_person_different_phone_is_a_new_student() {
        let service = service();
        service.add(john_doe()).unwrap();

        let mut other = john_doe();
        other.phone_number = "+7 (123) 456-78-91".to_string();
        assert!(service.add(other).is_ok());
        assert_eq!(service.find_all().len(), 2);
    }

    #[test]
    fn ids_increase_across_deletes() {
        let service = service();
        let first = service.add(john_doe()).unwrap();
        service.delete(first.id).unwrap();

        let mut other = john_doe();
        other.name = "Jane".to_string();
        let second = service.add(other).unwrap();
        assert!(second.id.0 > first.id.0);
    }

    #[test]
    fn delete_missing_student_is_not_found() {
        let service = service();
        service.add(john_doe()).unwrap();

        let result = service.delete(StudentId(999));
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
        assert_eq!(service.find_all().len(), 1);
    }

    #[test]
    fn update_keeps_the_id() {
        let service = service();
        let added = service.add(john_doe()).unwrap();

        let mut changed = john_doe();
        changed.phone_number = "8 (123) 456-78-90".to_string();
        let updated = service.update(added.id, changed).unwrap();
        assert_eq!(updated.id, added.id);
        assert_eq!(updated.phone_number, "8 (123) 456-78-90");
    }

    #[test]
    fn update_to_duplicate_of_other_student_is_rejected() {
        let service = service();
        service.add(john_doe()).unwrap();
        let mut other = john_doe();
        other.name = "Jane".to_string();
        let jane = service.add(other).unwrap();

        // Updating Jane into an exact copy of John must fail.
        let result = service.update(jane.id, john_doe());
        assert!(matches!(result, Err(ServiceError::AlreadyExists(_))));
    }

    #[test]
    fn update_to_itself_is_allowed() {
        let service = service();
        let added = service.add(john_doe()).unwrap();
        assert!(service.update(added.id, john_doe()).is_ok());
    }

    #[test]
    fn update_missing_student_is_not_found() {
        let service = service();
        let result = service.update(StudentId(404), john_doe());
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let service = service();
        service.add(john_doe()).unwrap();

        assert_eq!(service.find_by_name("JOHN").len(), 1);
        assert_eq!(service.find_by_surname("doe").len(), 1);
        assert_eq!(service.find_by_name_and_surname("john", "DOE").len(), 1);
        assert!(service.find_by_surname("Smith").is_empty());
    }

    #[test]
    fn invalid_candidate_is_rejected_before_any_write() {
        let service = service();
        let mut bad = john_doe();
        bad.phone_number = "12345".to_string();

        let result = service.add(bad);
        assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
        assert!(service.find_all().is_empty());
    }
}
