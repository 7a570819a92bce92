use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{GroupId, TeacherId};

crate::define_id_type!(u64, SlotId);

/// One committed class session: a group meeting a teacher over a fixed
/// time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSlot {
    pub id: SlotId,
    pub group_id: GroupId,
    pub teacher_id: TeacherId,
    #[serde(with = "crate::wire::wire_datetime")]
    pub start: NaiveDateTime,
    #[serde(with = "crate::wire::wire_datetime")]
    pub end: NaiveDateTime,
}

impl ClassSlot {
    pub fn new(
        id: SlotId,
        group_id: GroupId,
        teacher_id: TeacherId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            group_id,
            teacher_id,
            start,
            end,
        }
    }

    /// Session length in whole minutes (may be negative for an inverted
    /// window; the services reject those before committing).
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Calendar day the session starts on. Daily workload caps are
    /// computed per start date.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }
}

// Value-equality over (group, teacher, start, end); id excluded.
impl PartialEq for ClassSlot {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id
            && self.teacher_id == other.teacher_id
            && self.start == other.start
            && self.end == other.end
    }
}

impl Eq for ClassSlot {}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: u64, start_h: u32, end_h: u32, end_m: u32) -> ClassSlot {
        let day = NaiveDate::from_ymd_opt(2024, 7, 26).unwrap();
        ClassSlot::new(
            SlotId(id),
            GroupId(1),
            TeacherId(1),
            day.and_hms_opt(start_h, 0, 0).unwrap(),
            day.and_hms_opt(end_h, end_m, 0).unwrap(),
        )
    }

    #[test]
    fn duration_in_minutes() {
        assert_eq!(slot(1, 9, 10, 30).duration_minutes(), 90);
    }

    #[test]
    fn equality_ignores_id() {
        assert_eq!(slot(1, 9, 10, 30), slot(2, 9, 10, 30));
        assert_ne!(slot(1, 9, 10, 30), slot(1, 11, 12, 30));
    }
}
