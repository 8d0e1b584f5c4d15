//! Course name lists and per-course grade maps.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};

/// An integer rating. Lecture grades are kept within
/// [`LECTURE_GRADE_RANGE`]; homework grades are stored as given.
pub type Grade = i64;

/// Accepted range for grades students give to lectures.
pub const LECTURE_GRADE_RANGE: std::ops::RangeInclusive<Grade> = 0..=10;

/// Course name to the grades received for it, in the order they were given.
pub type GradeMap = BTreeMap<String, Vec<Grade>>;

/// Append a grade to the course's list, creating the list on first use.
pub(crate) fn record_grade(grades: &mut GradeMap, course: &str, grade: Grade) {
    grades.entry(course.to_string()).or_default().push(grade);
}

/// Which course list an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseListKind {
    Finished,
    InProgress,
    Attached,
}

impl fmt::Display for CourseListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseListKind::Finished => write!(f, "finished"),
            CourseListKind::InProgress => write!(f, "in-progress"),
            CourseListKind::Attached => write!(f, "attached"),
        }
    }
}

/// An ordered list of course names without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CourseList {
    #[serde(skip)]
    kind: CourseListKind,
    courses: Vec<String>,
}

impl CourseList {
    pub fn new(kind: CourseListKind) -> Self {
        Self {
            kind,
            courses: Vec::new(),
        }
    }

    /// Which list this is.
    pub fn kind(&self) -> CourseListKind {
        self.kind
    }

    /// Append `course` unless it is already present.
    pub fn add(&mut self, course: &str) -> Result<()> {
        if self.contains(course) {
            return Err(GradebookError::DuplicateCourse {
                course: course.to_string(),
                list: self.kind(),
            });
        }
        self.courses.push(course.to_string());
        Ok(())
    }

    pub fn contains(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.courses
    }

    /// Join the course names with `separator`, in insertion order.
    pub fn join(&self, separator: &str) -> String {
        self.courses.join(separator)
    }
}
