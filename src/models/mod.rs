//! Domain entities and the candidate shapes used to build them.
//!
//! Entities carry a generated id plus their payload fields; equality is
//! value-equality over the payload (the id is excluded), which is what
//! duplicate detection in the services relies on.

pub mod group;
pub mod macros;
pub mod requests;
pub mod slot;
pub mod student;
pub mod subject;
pub mod teacher;

pub use group::*;
pub use requests::*;
pub use slot::*;
pub use student::*;
pub use subject::*;
pub use teacher::*;
