//! A single type for any gradebook entity.
//!
//! `Member` is what callers hold when the kind of an entity is only known at
//! runtime. It is where kind-checked comparison lives: students compare with
//! students, lecturers with lecturers, and anything else is a type mismatch.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};
use crate::mentor::{Lecturer, Reviewer};
use crate::student::Student;
use crate::traits::{AsLecturer, AsStudent, Person};

/// Entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Student,
    Lecturer,
    Reviewer,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Student => write!(f, "student"),
            MemberKind::Lecturer => write!(f, "lecturer"),
            MemberKind::Reviewer => write!(f, "reviewer"),
        }
    }
}

/// Any one student, lecturer or reviewer.
#[derive(Debug, Clone)]
pub enum Member {
    Student(Student),
    Lecturer(Lecturer),
    Reviewer(Reviewer),
}

impl Member {
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Student(_) => MemberKind::Student,
            Member::Lecturer(_) => MemberKind::Lecturer,
            Member::Reviewer(_) => MemberKind::Reviewer,
        }
    }

    /// Order two members by their average grade.
    ///
    /// Only student/student and lecturer/lecturer pairs are comparable.
    /// Reviewers are never graded, so they compare with nothing.
    pub fn try_compare(&self, other: &Member) -> Result<Ordering> {
        let ordering = match (self, other) {
            (Member::Student(a), Member::Student(b)) => a.partial_cmp(b),
            (Member::Lecturer(a), Member::Lecturer(b)) => a.partial_cmp(b),
            _ => {
                return Err(GradebookError::TypeMismatch {
                    left: self.kind(),
                    right: other.kind(),
                })
            }
        };
        // Averages of integer grades are never NaN.
        Ok(ordering.unwrap_or(Ordering::Equal))
    }

    /// `try_compare` reduced to an equality check.
    pub fn try_eq(&self, other: &Member) -> Result<bool> {
        self.try_compare(other).map(Ordering::is_eq)
    }

    /// `try_compare` reduced to a less-than check.
    pub fn try_lt(&self, other: &Member) -> Result<bool> {
        self.try_compare(other).map(Ordering::is_lt)
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Member::Student(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_lecturer(&self) -> Option<&Lecturer> {
        match self {
            Member::Lecturer(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_reviewer(&self) -> Option<&Reviewer> {
        match self {
            Member::Reviewer(r) => Some(r),
            _ => None,
        }
    }
}

impl Person for Member {
    fn name(&self) -> &str {
        match self {
            Member::Student(s) => s.name(),
            Member::Lecturer(l) => l.name(),
            Member::Reviewer(r) => r.name(),
        }
    }

    fn surname(&self) -> &str {
        match self {
            Member::Student(s) => s.surname(),
            Member::Lecturer(l) => l.surname(),
            Member::Reviewer(r) => r.surname(),
        }
    }
}

impl AsStudent for Member {
    fn as_student_mut(&mut self) -> Option<&mut Student> {
        match self {
            Member::Student(s) => Some(s),
            _ => None,
        }
    }
}

impl AsLecturer for Member {
    fn as_lecturer_mut(&mut self) -> Option<&mut Lecturer> {
        match self {
            Member::Lecturer(l) => Some(l),
            _ => None,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Member::Student(s) => fmt::Display::fmt(s, f),
            Member::Lecturer(l) => fmt::Display::fmt(l, f),
            Member::Reviewer(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl From<Student> for Member {
    fn from(s: Student) -> Self {
        Member::Student(s)
    }
}

impl From<Lecturer> for Member {
    fn from(l: Lecturer) -> Self {
        Member::Lecturer(l)
    }
}

impl From<Reviewer> for Member {
    fn from(r: Reviewer) -> Self {
        Member::Reviewer(r)
    }
}
