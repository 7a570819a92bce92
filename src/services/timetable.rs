//! Timetable scheduling engine.
//!
//! Validates slot duration against the fixed session length, rejects
//! duplicate sessions, and enforces the per-day workload cap for the
//! teacher and the group independently. Duplicate and cap checks run
//! under the timetable table's write guard together with the commit, so
//! two racing `add` calls cannot both pass the cap check.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, info};

use crate::config::Policy;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{ClassSlot, SlotId, SlotRequest};
use crate::store::MemoryDb;

use super::eq_ignore_case;

/// Scheduling operations over the timetable collection.
#[derive(Clone)]
pub struct SchedulingService {
    db: Arc<MemoryDb>,
    policy: Policy,
}

impl SchedulingService {
    pub fn new(db: Arc<MemoryDb>, policy: Policy) -> Self {
        Self { db, policy }
    }

    /// Commit a new class session.
    ///
    /// Rejections, in order: `InvalidArgument` for an inverted window,
    /// `InvalidDuration` unless the length equals the configured session
    /// length exactly, `NotFound` for an unknown group or teacher,
    /// `AlreadyExists` for a value-equal committed slot, and
    /// `CapacityExceeded` if the teacher's or the group's same-day total
    /// would strictly exceed the daily cap.
    pub fn add(&self, request: SlotRequest) -> ServiceResult<ClassSlot> {
        request.validate()?;
        self.check_session_length(&request)?;

        if !self.db.groups.contains_key(request.group_id.0) {
            return Err(ServiceError::NotFound(format!(
                "group with id {}",
                request.group_id
            )));
        }
        if !self.db.teachers.contains_key(request.teacher_id.0) {
            return Err(ServiceError::NotFound(format!(
                "teacher with id {}",
                request.teacher_id
            )));
        }

        let mut slots = self.db.timetables.write();
        let new = ClassSlot::new(
            SlotId(0),
            request.group_id,
            request.teacher_id,
            request.start,
            request.end,
        );
        if slots.values().any(|s| s == &new) {
            return Err(ServiceError::AlreadyExists(format!(
                "class for group {} with teacher {} at {}",
                new.group_id, new.teacher_id, new.start
            )));
        }

        self.check_daily_caps(&slots, &new, None)?;

        let id = self.db.timetables.next_id();
        let slot = ClassSlot { id: SlotId(id), ..new };
        slots.insert(id, slot.clone());
        info!(
            "scheduled slot {} for group {} with teacher {} at {}",
            id, slot.group_id, slot.teacher_id, slot.start
        );
        Ok(slot)
    }

    /// Move the committed slot identified by (group, teacher, start date)
    /// to the requested times.
    ///
    /// The daily totals are recomputed with the slot's own prior
    /// contribution excluded before its new one is added, so a session
    /// can be moved within a fully booked day without false rejection. A
    /// rejected update leaves the slot unchanged.
    pub fn update(&self, date: NaiveDate, request: SlotRequest) -> ServiceResult<ClassSlot> {
        request.validate()?;
        self.check_session_length(&request)?;

        let mut slots = self.db.timetables.write();
        let key = slots
            .iter()
            .find(|(_, s)| {
                s.group_id == request.group_id
                    && s.teacher_id == request.teacher_id
                    && s.date() == date
            })
            .map(|(k, _)| *k)
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "class for group {} with teacher {} on {date}",
                    request.group_id, request.teacher_id
                ))
            })?;

        let updated = ClassSlot::new(
            SlotId(key),
            request.group_id,
            request.teacher_id,
            request.start,
            request.end,
        );
        self.check_daily_caps(&slots, &updated, Some(key))?;

        slots.insert(key, updated.clone());
        info!("rescheduled slot {key} to {}", updated.start);
        Ok(updated)
    }

    /// First committed slot for the group with the given number.
    /// `NotFound` if the group itself does not exist.
    pub fn by_group_number(&self, group_number: u64) -> ServiceResult<Option<ClassSlot>> {
        let group = self
            .db
            .groups
            .values()
            .into_iter()
            .find(|g| g.number == group_number)
            .ok_or_else(|| {
                ServiceError::NotFound(format!("group with number {group_number}"))
            })?;

        debug!("timetable lookup for group number {group_number}");
        Ok(self
            .db
            .timetables
            .values()
            .into_iter()
            .find(|s| s.group_id == group.id))
    }

    /// All slots whose group contains a student with the surname
    /// (case-insensitive). `NotFound` on an empty result.
    pub fn by_student_surname(&self, surname: &str) -> ServiceResult<Vec<ClassSlot>> {
        let slots: Vec<ClassSlot> = self
            .db
            .timetables
            .values()
            .into_iter()
            .filter(|slot| {
                self.db
                    .groups
                    .get(slot.group_id.0)
                    .map(|g| {
                        g.students
                            .iter()
                            .any(|student| eq_ignore_case(&student.surname, surname))
                    })
                    .unwrap_or(false)
            })
            .collect();

        if slots.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "no classes for student surname {surname}"
            )));
        }
        Ok(slots)
    }

    /// All slots taught by a teacher with the surname (case-insensitive).
    /// `NotFound` on an empty result.
    pub fn by_teacher_surname(&self, surname: &str) -> ServiceResult<Vec<ClassSlot>> {
        let slots: Vec<ClassSlot> = self
            .db
            .timetables
            .values()
            .into_iter()
            .filter(|slot| {
                self.db
                    .teachers
                    .get(slot.teacher_id.0)
                    .map(|t| eq_ignore_case(&t.surname, surname))
                    .unwrap_or(false)
            })
            .collect();

        if slots.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "no classes for teacher surname {surname}"
            )));
        }
        Ok(slots)
    }

    /// All slots starting on the given date. `NotFound` on an empty result.
    pub fn by_date(&self, date: NaiveDate) -> ServiceResult<Vec<ClassSlot>> {
        let slots: Vec<ClassSlot> = self
            .db
            .timetables
            .values()
            .into_iter()
            .filter(|s| s.date() == date)
            .collect();

        if slots.is_empty() {
            return Err(ServiceError::NotFound(format!("no classes on {date}")));
        }
        Ok(slots)
    }

    pub fn all(&self) -> Vec<ClassSlot> {
        self.db.timetables.values()
    }

    fn check_session_length(&self, request: &SlotRequest) -> ServiceResult<()> {
        let duration = request.duration_minutes();
        if duration != self.policy.session_minutes {
            return Err(ServiceError::InvalidDuration(format!(
                "session must be exactly {} minutes, got {duration}",
                self.policy.session_minutes
            )));
        }
        Ok(())
    }

    /// Verify the candidate keeps both the teacher's and the group's
    /// same-day totals within the cap. `exclude` names a slot key whose
    /// current contribution is ignored (the slot being updated). A total
    /// exactly equal to the cap is permitted.
    fn check_daily_caps(
        &self,
        slots: &HashMap<u64, ClassSlot>,
        candidate: &ClassSlot,
        exclude: Option<u64>,
    ) -> ServiceResult<()> {
        let day = candidate.date();
        let duration = candidate.duration_minutes();

        let teacher_total: i64 = slots
            .iter()
            .filter(|(k, s)| {
                Some(**k) != exclude
                    && s.date() == day
                    && s.teacher_id == candidate.teacher_id
            })
            .map(|(_, s)| s.duration_minutes())
            .sum();
        if teacher_total + duration > self.policy.daily_cap_minutes {
            return Err(ServiceError::CapacityExceeded(format!(
                "teacher {} would have {} minutes on {day}, cap is {}",
                candidate.teacher_id,
                teacher_total + duration,
                self.policy.daily_cap_minutes
            )));
        }

        let group_total: i64 = slots
            .iter()
            .filter(|(k, s)| {
                Some(**k) != exclude && s.date() == day && s.group_id == candidate.group_id
            })
            .map(|(_, s)| s.duration_minutes())
            .sum();
        if group_total + duration > self.policy.daily_cap_minutes {
            return Err(ServiceError::CapacityExceeded(format!(
                "group {} would have {} minutes on {day}, cap is {}",
                candidate.group_id,
                group_total + duration,
                self.policy.daily_cap_minutes
            )));
        }

        Ok(())
    }
}
