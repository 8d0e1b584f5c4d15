//! Gradebook error types.
//!
//! Every failing operation in this crate is a no-op: the error is returned
//! to the caller and no list or grade map is touched.

use thiserror::Error;

use crate::course::CourseListKind;
use crate::member::MemberKind;

/// Errors returned by gradebook operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradebookError {
    /// The course is already present in the target list.
    #[error("course '{course}' is already in the {list} list")]
    DuplicateCourse { course: String, list: CourseListKind },

    /// A rating was rejected by one of its gates (entity kind, course
    /// attachment, enrollment or grade range).
    #[error("rating rejected")]
    ValidationFailed,

    /// Two entities of incompatible kinds were compared.
    #[error("cannot compare {left} with {right}")]
    TypeMismatch { left: MemberKind, right: MemberKind },
}

impl GradebookError {
    /// Returns `true` for the duplicate-course condition.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, GradebookError::DuplicateCourse { .. })
    }
}

/// Result alias used throughout the gradebook crates.
pub type Result<T> = std::result::Result<T, GradebookError>;
