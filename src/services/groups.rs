//! Directory service for study groups.
//!
//! Group identity is the group number: value-equality ignores membership,
//! so a second group with the same number is a duplicate even with a
//! different roster.

use std::sync::Arc;

use log::{info, warn};

use crate::config::Policy;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{Group, GroupId, NewGroup, Student, StudentId};
use crate::store::MemoryDb;

use super::eq_ignore_case;

/// CRUD, lookup and enrollment over the group collection.
#[derive(Clone)]
pub struct GroupService {
    db: Arc<MemoryDb>,
    policy: Policy,
}

impl GroupService {
    pub fn new(db: Arc<MemoryDb>, policy: Policy) -> Self {
        Self { db, policy }
    }

    /// Resolve a candidate's member ids into students.
    ///
    /// The requested count must lie within the configured group size
    /// bounds (`InvalidArgument` otherwise); every id must resolve
    /// (`NotFound` on the first that does not). No store mutation happens
    /// here.
    pub fn resolve_students(&self, candidate: &NewGroup) -> ServiceResult<Vec<Student>> {
        let count = candidate.student_ids.len();
        if count < self.policy.min_students {
            return Err(ServiceError::InvalidArgument(format!(
                "group must have at least {} students, got {count}",
                self.policy.min_students
            )));
        }
        if count > self.policy.max_students {
            return Err(ServiceError::InvalidArgument(format!(
                "group cannot have more than {} students, got {count}",
                self.policy.max_students
            )));
        }

        let mut students = Vec::with_capacity(count);
        for &student_id in &candidate.student_ids {
            match self.db.students.get(student_id) {
                Some(student) => students.push(student),
                None => {
                    return Err(ServiceError::NotFound(format!(
                        "student with id {student_id}"
                    )))
                }
            }
        }
        Ok(students)
    }

    /// Create a group from a candidate, resolving its members first.
    /// `AlreadyExists` if a group with the same number is stored.
    pub fn add(&self, candidate: NewGroup) -> ServiceResult<Group> {
        let students = self.resolve_students(&candidate)?;

        let mut groups = self.db.groups.write();
        let new = Group::new(GroupId(0), candidate.number, students);
        if groups.values().any(|g| g == &new) {
            return Err(ServiceError::AlreadyExists(format!(
                "group {}",
                new.number
            )));
        }

        let id = self.db.groups.next_id();
        let group = Group { id: GroupId(id), ..new };
        groups.insert(id, group.clone());
        info!("added group {} (number {})", id, group.number);
        Ok(group)
    }

    /// Rebuild the group stored under `id` from a candidate, keeping the
    /// id. `AlreadyExists` if another group already has that number.
    pub fn update(&self, id: GroupId, candidate: NewGroup) -> ServiceResult<Group> {
        let students = self.resolve_students(&candidate)?;

        let mut groups = self.db.groups.write();
        if !groups.contains_key(&id.0) {
            return Err(ServiceError::NotFound(format!("group with id {id}")));
        }

        let updated = Group::new(id, candidate.number, students);
        if groups.iter().any(|(k, v)| *k != id.0 && v == &updated) {
            return Err(ServiceError::AlreadyExists(format!(
                "group {}",
                updated.number
            )));
        }

        groups.insert(id.0, updated.clone());
        info!("updated group {id}");
        Ok(updated)
    }

    pub fn find_all(&self) -> Vec<Group> {
        self.db.groups.values()
    }

    pub fn find_by_id(&self, id: GroupId) -> Option<Group> {
        self.db.groups.get(id.0)
    }

    pub fn find_by_number(&self, number: u64) -> Option<Group> {
        self.db
            .groups
            .values()
            .into_iter()
            .find(|g| g.number == number)
    }

    /// First group matching both the number and an enrolled student's
    /// surname (case-insensitive).
    pub fn find_by_number_and_student_surname(
        &self,
        number: u64,
        surname: &str,
    ) -> Option<Group> {
        self.db.groups.values().into_iter().find(|g| {
            g.number == number
                && g.students
                    .iter()
                    .any(|s| eq_ignore_case(&s.surname, surname))
        })
    }

    /// First group containing a student with the given surname.
    pub fn find_by_student_surname(&self, surname: &str) -> Option<Group> {
        self.db.groups.values().into_iter().find(|g| {
            g.students
                .iter()
                .any(|s| eq_ignore_case(&s.surname, surname))
        })
    }

    /// Enroll additional students into the group with the given number.
    ///
    /// Fails with `NotFound` if no group carries the number, and with
    /// `CapacityExceeded` before touching the roster if the resulting
    /// size would exceed the maximum. Candidates are then appended one by
    /// one; hitting an already-enrolled student (value-equality) fails
    /// with `AlreadyMember` and leaves the earlier appends of the same
    /// batch in place.
    pub fn add_students(
        &self,
        group_number: u64,
        students_to_add: Vec<Student>,
    ) -> ServiceResult<Group> {
        let mut groups = self.db.groups.write();
        let group = groups
            .values_mut()
            .find(|g| g.number == group_number)
            .ok_or_else(|| {
                ServiceError::NotFound(format!("group with number {group_number}"))
            })?;

        if group.students.len() + students_to_add.len() > self.policy.max_students {
            return Err(ServiceError::CapacityExceeded(format!(
                "adding {} students would exceed the maximum of {}",
                students_to_add.len(),
                self.policy.max_students
            )));
        }

        for student in students_to_add {
            if group.students.contains(&student) {
                warn!(
                    "student {} already enrolled in group {group_number}",
                    student.id
                );
                return Err(ServiceError::AlreadyMember(format!(
                    "student with id {}",
                    student.id
                )));
            }
            group.students.push(student);
        }

        info!("group {group_number} now has {} students", group.students.len());
        Ok(group.clone())
    }
}
