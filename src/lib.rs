//! uniserver - In-memory university registry and timetable scheduling core.
//!
//! This crate keeps a small set of related entities (students, teachers,
//! groups, timetable slots) in memory and enforces allocation and
//! scheduling rules when callers mutate them. Transport, routing and
//! presentation are external collaborators; the crate's public surface is
//! the service layer plus the wire transcoding helpers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Transport Layer (HTTP, CLI, ...) - external            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │ candidate shapes / JSON text
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  wire / validate - transcoding and structural checks    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  services - directory services + scheduling engine      │
//! │  - duplicate detection (value-equality)                 │
//! │  - group capacity bounds                                │
//! │  - slot duration and per-day workload caps              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  store - MemoryDb: four keyed tables, id allocators     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes flow one direction only: caller → validation (structural,
//! then policy) → store mutation → confirmation. Reads are linear
//! predicates over the in-memory collections.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod validate;
pub mod wire;

pub use config::Policy;
pub use error::{ServiceError, ServiceResult};
pub use store::MemoryDb;
