//! gradebook-core: students, mentors, grading rules and grade averages.
//!
//! This crate defines the entity model (students, lecturers, reviewers),
//! the rules under which they rate each other within courses, and the
//! aggregation helpers that turn recorded grades into averages.

pub mod config;
pub mod course;
pub mod error;
pub mod member;
pub mod mentor;
pub mod report;
pub mod statistics;
pub mod student;
pub mod traits;

pub use error::{GradebookError, Result};
pub use member::{Member, MemberKind};
pub use mentor::{Lecturer, MentorInfo, Reviewer};
pub use student::Student;
pub use traits::{AsLecturer, AsStudent, Mentor, Person};
