//! Mentors: lecturers, who are rated by students, and reviewers, who grade
//! students' homework.

use std::cmp::Ordering;
use std::fmt;

use crate::course::{record_grade, CourseList, CourseListKind, Grade, GradeMap};
use crate::error::{GradebookError, Result};
use crate::statistics::own_average_grade;
use crate::traits::{AsStudent, Mentor, Person};

/// Identity and course attachments shared by every mentor.
#[derive(Debug, Clone)]
pub struct MentorInfo {
    name: String,
    surname: String,
    pub(crate) courses_attached: CourseList,
}

impl MentorInfo {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            courses_attached: CourseList::new(CourseListKind::Attached),
        }
    }
}

impl Person for MentorInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn surname(&self) -> &str {
        &self.surname
    }
}

// ---------------------------------------------------------------------------
// Lecturer
// ---------------------------------------------------------------------------

/// A mentor who gives lectures. Students rate lectures from 0 to 10;
/// lecturers compare by the mean of every grade received.
#[derive(Debug, Clone)]
pub struct Lecturer {
    info: MentorInfo,
    grades: GradeMap,
}

impl Lecturer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            info: MentorInfo::new(name, surname),
            grades: GradeMap::new(),
        }
    }

    /// Lecture grades received, per course.
    pub fn grades(&self) -> &GradeMap {
        &self.grades
    }

    /// Mean of every lecture grade, `0.0` when there are none.
    pub fn average_grade(&self) -> f64 {
        own_average_grade(&self.grades)
    }

    pub(crate) fn grades_mut(&mut self) -> &mut GradeMap {
        &mut self.grades
    }
}

impl Person for Lecturer {
    fn name(&self) -> &str {
        self.info.name()
    }

    fn surname(&self) -> &str {
        self.info.surname()
    }
}

impl Mentor for Lecturer {
    fn mentor_info(&self) -> &MentorInfo {
        &self.info
    }

    fn mentor_info_mut(&mut self) -> &mut MentorInfo {
        &mut self.info
    }
}

impl PartialEq for Lecturer {
    fn eq(&self, other: &Self) -> bool {
        self.average_grade() == other.average_grade()
    }
}

impl PartialOrd for Lecturer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.average_grade().partial_cmp(&other.average_grade())
    }
}

impl fmt::Display for Lecturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name())?;
        writeln!(f, "Surname: {}", self.surname())?;
        write!(f, "Average lecture grade: {}", self.average_grade())
    }
}

// ---------------------------------------------------------------------------
// Reviewer
// ---------------------------------------------------------------------------

/// A mentor who grades homework. Reviewers are not rated themselves.
#[derive(Debug, Clone)]
pub struct Reviewer {
    info: MentorInfo,
}

impl Reviewer {
    pub fn new(name: impl Into<String>, surname: impl Into<String>) -> Self {
        Self {
            info: MentorInfo::new(name, surname),
        }
    }

    /// Grade `student`'s homework in `course`.
    ///
    /// Recorded only if the target is a student, this reviewer is attached
    /// to `course`, and the student is currently taking it. The grade value
    /// itself is not range-checked.
    pub fn rate_hw<S>(&self, student: &mut S, course: &str, grade: Grade) -> Result<()>
    where
        S: AsStudent + ?Sized,
    {
        let Some(student) = student.as_student_mut() else {
            tracing::debug!("{} tried to grade a non-student", self.full_name());
            return Err(GradebookError::ValidationFailed);
        };

        if !self.is_attached(course) || !student.is_enrolled(course) {
            tracing::debug!(
                "homework grade rejected: {} -> {} in '{course}' ({grade})",
                self.full_name(),
                student.full_name()
            );
            return Err(GradebookError::ValidationFailed);
        }

        record_grade(student.grades_mut(), course, grade);
        tracing::debug!(
            "{} graded {} in '{course}': {grade}",
            self.full_name(),
            student.full_name()
        );
        Ok(())
    }
}

impl Person for Reviewer {
    fn name(&self) -> &str {
        self.info.name()
    }

    fn surname(&self) -> &str {
        self.info.surname()
    }
}

impl Mentor for Reviewer {
    fn mentor_info(&self) -> &MentorInfo {
        &self.info
    }

    fn mentor_info_mut(&mut self) -> &mut MentorInfo {
        &mut self.info
    }
}

impl fmt::Display for Reviewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name())?;
        write!(f, "Surname: {}", self.surname())
    }
}
