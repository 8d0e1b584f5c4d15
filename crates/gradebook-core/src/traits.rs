//! Capability traits shared by the gradebook entities.
//!
//! `Person` and `Mentor` describe what an entity *is*; `AsStudent` and
//! `AsLecturer` describe what an entity can be rated as. The rating
//! operations take the latter, so handing them an entity of the wrong kind
//! fails the rating instead of failing to compile.

use crate::course::CourseList;
use crate::error::Result;
use crate::mentor::{Lecturer, MentorInfo};
use crate::student::Student;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Anything with a fixed name and surname.
pub trait Person {
    fn name(&self) -> &str;

    fn surname(&self) -> &str;

    /// "Name Surname".
    fn full_name(&self) -> String {
        format!("{} {}", self.name(), self.surname())
    }
}

// ---------------------------------------------------------------------------
// Mentors
// ---------------------------------------------------------------------------

/// Entities that can be attached to courses (lecturers and reviewers).
pub trait Mentor: Person {
    fn mentor_info(&self) -> &MentorInfo;

    fn mentor_info_mut(&mut self) -> &mut MentorInfo;

    /// Courses this mentor is attached to, in order of addition.
    fn courses_attached(&self) -> &CourseList {
        &self.mentor_info().courses_attached
    }

    /// Attach a course. Fails with `DuplicateCourse` if already attached.
    fn mentor_add_course(&mut self, course: &str) -> Result<()> {
        self.mentor_info_mut().courses_attached.add(course)?;
        tracing::debug!("{} attached to course '{course}'", self.full_name());
        Ok(())
    }

    fn is_attached(&self, course: &str) -> bool {
        self.courses_attached().contains(course)
    }
}

// ---------------------------------------------------------------------------
// Rating targets
// ---------------------------------------------------------------------------

/// Something a student may try to rate as a lecturer.
pub trait AsLecturer {
    /// The lecturer behind this value, if it is one.
    fn as_lecturer_mut(&mut self) -> Option<&mut Lecturer>;
}

/// Something a reviewer may try to grade as a student.
pub trait AsStudent {
    /// The student behind this value, if it is one.
    fn as_student_mut(&mut self) -> Option<&mut Student>;
}

impl AsLecturer for Lecturer {
    fn as_lecturer_mut(&mut self) -> Option<&mut Lecturer> {
        Some(self)
    }
}

impl AsStudent for Student {
    fn as_student_mut(&mut self) -> Option<&mut Student> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mentor::Reviewer;

    #[test]
    fn full_name_joins_parts() {
        let reviewer = Reviewer::new("Elena", "Sidorova");
        assert_eq!(reviewer.full_name(), "Elena Sidorova");
    }

    #[test]
    fn mentor_add_course_rejects_duplicates() {
        let mut lecturer = Lecturer::new("Oleg", "Bulygin");
        lecturer.mentor_add_course("Python").unwrap();
        lecturer.mentor_add_course("C++").unwrap();
        let err = lecturer.mentor_add_course("Python").unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(lecturer.courses_attached().as_slice(), ["Python", "C++"]);
        assert!(lecturer.is_attached("C++"));
        assert!(!lecturer.is_attached("Git"));
    }
}
