//! Candidate shapes consumed by the services.
//!
//! The transcoding collaborator turns wire payloads into these plain
//! structs; the services turn them into full entities by attaching a
//! freshly allocated id.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{GroupId, Subject, TeacherId};
use crate::error::ServiceResult;
use crate::validate;

/// Candidate student: everything but the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub surname: String,
    #[serde(with = "crate::wire::wire_date")]
    pub birth_date: NaiveDate,
    pub phone_number: String,
}

impl NewStudent {
    /// Structural validation of the candidate fields.
    pub fn validate(&self) -> ServiceResult<()> {
        validate::validate_name(&self.name)?;
        validate::validate_name(&self.surname)?;
        validate::validate_phone(&self.phone_number)?;
        Ok(())
    }
}

/// Candidate teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeacher {
    pub name: String,
    pub surname: String,
    pub experience: u32,
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl NewTeacher {
    pub fn validate(&self) -> ServiceResult<()> {
        validate::validate_name(&self.name)?;
        validate::validate_name(&self.surname)?;
        Ok(())
    }
}

/// Candidate group: its number plus the ids of the students to enroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGroup {
    pub number: u64,
    #[serde(default)]
    pub student_ids: Vec<u64>,
}

/// Candidate timetable slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequest {
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    #[serde(with = "crate::wire::wire_datetime")]
    pub start: NaiveDateTime,
    #[serde(with = "crate::wire::wire_datetime")]
    pub end: NaiveDateTime,
}

impl SlotRequest {
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Checks the window is well-formed; length policy is enforced by the
    /// scheduling engine.
    pub fn validate(&self) -> ServiceResult<()> {
        validate::validate_time_window(self.start, self.end)
    }
}
