//! Directory service for teachers.

use std::sync::Arc;

use log::info;

use crate::error::{ServiceError, ServiceResult};
use crate::models::{NewTeacher, Subject, Teacher, TeacherId};
use crate::store::MemoryDb;

use super::eq_ignore_case;

/// CRUD and lookup over the teacher collection.
#[derive(Clone)]
pub struct TeacherService {
    db: Arc<MemoryDb>,
}

impl TeacherService {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }

    /// Register a new teacher; `AlreadyExists` on a value-equal duplicate.
    pub fn add(&self, candidate: NewTeacher) -> ServiceResult<Teacher> {
        candidate.validate()?;

        let mut teachers = self.db.teachers.write();
        let new = Teacher::new(
            TeacherId(0),
            candidate.name,
            candidate.surname,
            candidate.experience,
            candidate.subjects,
        );
        if teachers.values().any(|t| t == &new) {
            return Err(ServiceError::AlreadyExists(format!(
                "teacher {} {}",
                new.name, new.surname
            )));
        }

        let id = self.db.teachers.next_id();
        let teacher = Teacher { id: TeacherId(id), ..new };
        teachers.insert(id, teacher.clone());
        info!("added teacher {} ({} {})", id, teacher.name, teacher.surname);
        Ok(teacher)
    }

    /// Replace the teacher stored under `id`, keeping the id.
    pub fn update(&self, id: TeacherId, candidate: NewTeacher) -> ServiceResult<Teacher> {
        candidate.validate()?;

        let mut teachers = self.db.teachers.write();
        if !teachers.contains_key(&id.0) {
            return Err(ServiceError::NotFound(format!("teacher with id {id}")));
        }

        let updated = Teacher::new(
            id,
            candidate.name,
            candidate.surname,
            candidate.experience,
            candidate.subjects,
        );
        if teachers.iter().any(|(k, v)| *k != id.0 && v == &updated) {
            return Err(ServiceError::AlreadyExists(format!(
                "teacher {} {}",
                updated.name, updated.surname
            )));
        }

        teachers.insert(id.0, updated.clone());
        info!("updated teacher {id}");
        Ok(updated)
    }

    /// Assign one more subject to a teacher. The subject list keeps
    /// insertion order; assigning a subject already taught fails with
    /// `AlreadyExists`.
    pub fn add_subject(&self, id: TeacherId, subject: Subject) -> ServiceResult<Teacher> {
        let mut teachers = self.db.teachers.write();
        let teacher = teachers
            .get_mut(&id.0)
            .ok_or_else(|| ServiceError::NotFound(format!("teacher with id {id}")))?;

        if teacher.subjects.contains(&subject) {
            return Err(ServiceError::AlreadyExists(format!(
                "subject {subject} for teacher {id}"
            )));
        }

        teacher.subjects.push(subject);
        info!("teacher {id} now teaches {subject}");
        Ok(teacher.clone())
    }

    pub fn find_all(&self) -> Vec<Teacher> {
        self.db.teachers.values()
    }

    pub fn find_by_id(&self, id: TeacherId) -> Option<Teacher> {
        self.db.teachers.get(id.0)
    }

    pub fn find_by_name(&self, name: &str) -> Vec<Teacher> {
        self.db
            .teachers
            .values()
            .into_iter()
            .filter(|t| eq_ignore_case(&t.name, name))
            .collect()
    }

    pub fn find_by_surname(&self, surname: &str) -> Vec<Teacher> {
        self.db
            .teachers
            .values()
            .into_iter()
            .filter(|t| eq_ignore_case(&t.surname, surname))
            .collect()
    }

    /// Exact name and surname match, both case-insensitive.
    pub fn find_by_name_and_surname(&self, name: &str, surname: &str) -> Vec<Teacher> {
        self.db
            .teachers
            .values()
            .into_iter()
            .filter(|t| eq_ignore_case(&t.name, name) && eq_ignore_case(&t.surname, surname))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TeacherService {
        TeacherService::new(Arc::new(MemoryDb::new()))
    }

    fn jane_smith() -> NewTeacher {
        NewTeacher {
            name: "Jane".to_string(),
            surname: "Smith".to_string(),
            experience: 5,
            subjects: vec![Subject::Math],
        }
    }

    #[test]
    fn add_then_find_round_trips() {
        let service = service();
        let added = service.add(jane_smith()).unwrap();
        assert_eq!(service.find_by_id(added.id).unwrap(), added);
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let service = service();
        service.add(jane_smith()).unwrap();
        assert!(matches!(
            service.add(jane_smith()),
            Err(ServiceError::AlreadyExists(_))
        ));
    }

    #[test]
    fn different_subject_set_is_a_different_teacher() {
        let service = service();
        service.add(jane_smith()).unwrap();

        let mut other = jane_smith();
        other.subjects = vec![Subject::Math, Subject::Programming];
        assert!(service.add(other).is_ok());
        assert_eq!(service.find_all().len(), 2);
    }

    #[test]
    fn add_subject_appends_in_order() {
        let service = service();
        let added = service.add(jane_smith()).unwrap();

        let updated = service.add_subject(added.id, Subject::Economics).unwrap();
        assert_eq!(updated.subjects, vec![Subject::Math, Subject::Economics]);
    }

    #[test]
    fn duplicate_subject_is_rejected() {
        let service = service();
        let added = service.add(jane_smith()).unwrap();

        let result = service.add_subject(added.id, Subject::Math);
        assert!(matches!(result, Err(ServiceError::AlreadyExists(_))));
        assert_eq!(service.find_by_id(added.id).unwrap().subjects.len(), 1);
    }

    #[test]
    fn add_subject_to_missing_teacher_is_not_found() {
        let service = service();
        let result = service.add_subject(TeacherId(404), Subject::Math);
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let service = service();
        service.add(jane_smith()).unwrap();
        assert_eq!(service.find_by_name("JANE").len(), 1);
        assert_eq!(service.find_by_surname("smith").len(), 1);
        assert_eq!(service.find_by_name_and_surname("jane", "SMITH").len(), 1);
        assert!(service.find_by_surname("Jones").is_empty());
    }
}
