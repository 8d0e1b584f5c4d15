//! The `Student` entity.

use std::cmp::Ordering;
use std::fmt;

use crate::course::{
    record_grade, CourseList, CourseListKind, Grade, GradeMap, LECTURE_GRADE_RANGE,
};
use crate::error::{GradebookError, Result};
use crate::statistics::own_average_grade;
use crate::traits::{AsLecturer, Mentor, Person};

/// Separator used when a student's course lists are displayed.
pub const DEFAULT_COURSE_SEPARATOR: &str = ", ";

/// A student who takes courses, receives homework grades from reviewers
/// and rates lectures.
///
/// Students compare by the mean of all their homework grades across every
/// course.
#[derive(Debug, Clone)]
pub struct Student {
    name: String,
    surname: String,
    gender: String,
    finished_courses: CourseList,
    courses_in_progress: CourseList,
    grades: GradeMap,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            gender: gender.into(),
            finished_courses: CourseList::new(CourseListKind::Finished),
            courses_in_progress: CourseList::new(CourseListKind::InProgress),
            grades: GradeMap::new(),
        }
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn finished_courses(&self) -> &CourseList {
        &self.finished_courses
    }

    pub fn courses_in_progress(&self) -> &CourseList {
        &self.courses_in_progress
    }

    /// Homework grades received, per course.
    pub fn grades(&self) -> &GradeMap {
        &self.grades
    }

    /// Mean of every homework grade, `0.0` when there are none.
    pub fn average_grade(&self) -> f64 {
        own_average_grade(&self.grades)
    }

    pub fn add_finished_course(&mut self, course: &str) -> Result<()> {
        self.finished_courses.add(course)
    }

    pub fn add_courses_in_progress(&mut self, course: &str) -> Result<()> {
        self.courses_in_progress.add(course)
    }

    pub fn is_enrolled(&self, course: &str) -> bool {
        self.courses_in_progress.contains(course)
    }

    /// Rate a lecture of `lecturer` in `course`.
    ///
    /// The grade is recorded only if the target is a lecturer, the lecturer
    /// teaches `course`, this student is currently taking `course`, and the
    /// grade lies in `0..=10`. Otherwise nothing changes and
    /// `ValidationFailed` is returned.
    pub fn rate_lecture<L>(&self, lecturer: &mut L, course: &str, grade: Grade) -> Result<()>
    where
        L: AsLecturer + ?Sized,
    {
        let Some(lecturer) = lecturer.as_lecturer_mut() else {
            tracing::debug!("{} tried to rate a non-lecturer", self.full_name());
            return Err(GradebookError::ValidationFailed);
        };

        if !lecturer.is_attached(course)
            || !self.is_enrolled(course)
            || !LECTURE_GRADE_RANGE.contains(&grade)
        {
            tracing::debug!(
                "lecture rating rejected: {} -> {} in '{course}' ({grade})",
                self.full_name(),
                lecturer.full_name()
            );
            return Err(GradebookError::ValidationFailed);
        }

        record_grade(lecturer.grades_mut(), course, grade);
        tracing::debug!(
            "{} rated {} in '{course}': {grade}",
            self.full_name(),
            lecturer.full_name()
        );
        Ok(())
    }

    pub(crate) fn grades_mut(&mut self) -> &mut GradeMap {
        &mut self.grades
    }

    /// Display with a custom separator between course names.
    pub fn display_with<'a>(&'a self, separator: &'a str) -> StudentDisplay<'a> {
        StudentDisplay {
            student: self,
            separator,
        }
    }
}

impl Person for Student {
    fn name(&self) -> &str {
        &self.name
    }

    fn surname(&self) -> &str {
        &self.surname
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.average_grade() == other.average_grade()
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.average_grade().partial_cmp(&other.average_grade())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(DEFAULT_COURSE_SEPARATOR), f)
    }
}

/// Multi-line rendering of a [`Student`], see [`Student::display_with`].
pub struct StudentDisplay<'a> {
    student: &'a Student,
    separator: &'a str,
}

impl fmt::Display for StudentDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.student;
        writeln!(f, "Name: {}", s.name)?;
        writeln!(f, "Surname: {}", s.surname)?;
        writeln!(f, "Average homework grade: {}", s.average_grade())?;
        writeln!(
            f,
            "Courses in progress: {}",
            s.courses_in_progress.join(self.separator)
        )?;
        write!(
            f,
            "Finished courses: {}",
            s.finished_courses.join(self.separator)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::member::Member;
    use crate::mentor::{Lecturer, Reviewer};

    fn enrolled_student(course: &str) -> Student {
        let mut s = Student::new("Ivan", "Ivanov", "M");
        s.add_courses_in_progress(course).unwrap();
        s
    }

    fn lecturer_for(course: &str) -> Lecturer {
        let mut l = Lecturer::new("Oleg", "Bulygin");
        l.mentor_add_course(course).unwrap();
        l
    }

    #[test]
    fn identity_accessors() {
        let s = Student::new("Ivan", "Ivanov", "M");
        assert_eq!(s.name(), "Ivan");
        assert_eq!(s.surname(), "Ivanov");
        assert_eq!(s.gender(), "M");
        assert!(s.grades().is_empty());
    }

    #[test]
    fn duplicate_courses_are_signalled() {
        let mut s = Student::new("Ivan", "Ivanov", "M");
        s.add_finished_course("Git").unwrap();
        assert_eq!(
            s.add_finished_course("Git"),
            Err(GradebookError::DuplicateCourse {
                course: "Git".into(),
                list: CourseListKind::Finished,
            })
        );
        s.add_courses_in_progress("Python").unwrap();
        assert!(s.add_courses_in_progress("Python").unwrap_err().is_duplicate());
        assert_eq!(s.finished_courses().len(), 1);
        assert_eq!(s.courses_in_progress().len(), 1);
    }

    #[test]
    fn course_may_be_finished_and_in_progress() {
        let mut s = Student::new("Ivan", "Ivanov", "M");
        s.add_finished_course("Python").unwrap();
        s.add_courses_in_progress("Python").unwrap();
        assert!(s.finished_courses().contains("Python"));
        assert!(s.is_enrolled("Python"));
    }

    #[test]
    fn rate_lecture_out_of_range_keeps_previous_grades() {
        let s = enrolled_student("Python");
        let mut l = lecturer_for("Python");

        s.rate_lecture(&mut l, "Python", 8).unwrap();
        assert_eq!(
            s.rate_lecture(&mut l, "Python", 12),
            Err(GradebookError::ValidationFailed)
        );
        assert_eq!(l.grades()["Python"], vec![8]);
    }

    #[test]
    fn rate_lecture_range_bounds() {
        let s = enrolled_student("Python");
        let mut l = lecturer_for("Python");

        s.rate_lecture(&mut l, "Python", 0).unwrap();
        s.rate_lecture(&mut l, "Python", 10).unwrap();
        assert!(s.rate_lecture(&mut l, "Python", -1).is_err());
        assert!(s.rate_lecture(&mut l, "Python", 11).is_err());
        assert_eq!(l.grades()["Python"], vec![0, 10]);
    }

    #[test]
    fn rate_lecture_requires_attachment() {
        let s = enrolled_student("Python");
        let mut l = lecturer_for("C++");

        assert!(s.rate_lecture(&mut l, "Python", 7).is_err());
        assert!(l.grades().is_empty());
    }

    #[test]
    fn rate_lecture_requires_enrollment() {
        let mut s = Student::new("Ivan", "Ivanov", "M");
        s.add_finished_course("Python").unwrap();
        let mut l = lecturer_for("Python");

        assert!(s.rate_lecture(&mut l, "Python", 7).is_err());
        assert!(l.grades().is_empty());
    }

    #[test]
    fn rate_lecture_requires_lecturer() {
        let s = enrolled_student("Python");
        let mut reviewer = Reviewer::new("Elena", "Sidorova");
        reviewer.mentor_add_course("Python").unwrap();
        let mut member = Member::Reviewer(reviewer);

        assert_eq!(
            s.rate_lecture(&mut member, "Python", 7),
            Err(GradebookError::ValidationFailed)
        );

        let mut member = Member::Lecturer(lecturer_for("Python"));
        s.rate_lecture(&mut member, "Python", 7).unwrap();
        match member {
            Member::Lecturer(l) => assert_eq!(l.grades()["Python"], vec![7]),
            other => panic!("unexpected member: {other:?}"),
        }
    }

    #[test]
    fn students_compare_by_overall_average() {
        let mut a = Student::new("Ivan", "Ivanov", "M");
        let mut b = Student::new("Petr", "Petrov", "M");
        for s in [&mut a, &mut b] {
            s.add_courses_in_progress("Python").unwrap();
            s.add_courses_in_progress("Git").unwrap();
        }
        let mut r = Reviewer::new("Vladimir", "Smirnov");
        r.mentor_add_course("Python").unwrap();
        r.mentor_add_course("Git").unwrap();

        // a: Python [10], Git [4] -> 7.0; b: Python [8] -> 8.0.
        // Per-course Python comparison would favour a.
        r.rate_hw(&mut a, "Python", 10).unwrap();
        r.rate_hw(&mut a, "Git", 4).unwrap();
        r.rate_hw(&mut b, "Python", 8).unwrap();

        assert!(a < b);
        assert!(b > a);
        assert!(a != b);
    }

    #[test]
    fn students_without_grades_are_equal() {
        let a = Student::new("Ivan", "Ivanov", "M");
        let b = Student::new("Petr", "Petrov", "M");
        assert!(a == b);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
    }

    #[test]
    fn display_lists_courses() {
        let mut s = Student::new("Ivan", "Ivanov", "M");
        s.add_courses_in_progress("Python").unwrap();
        s.add_courses_in_progress("JavaScript").unwrap();
        s.add_finished_course("Git").unwrap();
        let mut r = Reviewer::new("Vladimir", "Smirnov");
        r.mentor_add_course("Python").unwrap();
        r.rate_hw(&mut s, "Python", 9).unwrap();
        r.rate_hw(&mut s, "Python", 10).unwrap();

        assert_eq!(
            s.to_string(),
            "Name: Ivan\n\
             Surname: Ivanov\n\
             Average homework grade: 9.5\n\
             Courses in progress: Python, JavaScript\n\
             Finished courses: Git"
        );
        assert!(s
            .display_with(" | ")
            .to_string()
            .contains("Courses in progress: Python | JavaScript"));
    }

    #[test]
    fn display_without_grades_shows_zero() {
        let s = Student::new("Ivan", "Ivanov", "M");
        assert!(s.to_string().contains("Average homework grade: 0\n"));
    }
}
