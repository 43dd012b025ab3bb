//! Enrollment domain module.
//!
//! This crate contains business rules for student and course enrollment,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod registry;

pub use registry::{CourseId, EnrollmentRegistry, StudentId};
