//! Accounts domain module (immutable value objects).
//!
//! This crate contains the concrete value objects of the workspace: profiles
//! with multiple builder variants, extension-by-composition employee records,
//! and the wire-facing signup/applicant records, implemented purely as
//! deterministic in-memory values (no IO, no HTTP, no storage).

pub mod applicant;
pub mod employee;
pub mod profile;
pub mod signup;

pub use applicant::Applicant;
pub use employee::{Employee, EmployeeBuilder, Person};
pub use profile::{Account, FromAccountBuilder, Profile, ProfileBuilder};
pub use signup::Signup;
