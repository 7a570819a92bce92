//! Service layer: directory services and the scheduling engine.
//!
//! One service per entity kind, each owning a handle to the shared
//! [`MemoryDb`](crate::store::MemoryDb). Directory services provide CRUD
//! and lookup with value-equality duplicate rejection; the scheduling
//! service additionally enforces session length and per-day workload
//! caps from the configured [`Policy`](crate::config::Policy).
//!
//! Lookups are linear scans; "first match" follows the store's hash-map
//! iteration order, which is unspecified.

pub mod groups;
pub mod students;
pub mod teachers;
pub mod timetable;

pub use groups::GroupService;
pub use students::StudentService;
pub use teachers::TeacherService;
pub use timetable::SchedulingService;

/// Case-insensitive comparison used by the surname/name lookups.
/// Names may be non-ASCII, so this folds via `to_lowercase`.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
