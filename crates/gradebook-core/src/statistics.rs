//! Grade averages.
//!
//! Every helper here returns `0.0` when there is nothing to average, so
//! "no grades" and "all grades are zero" look the same to callers.

use crate::course::{Grade, GradeMap};
use crate::mentor::Lecturer;
use crate::student::Student;

/// Arithmetic mean of `grades`, or `0.0` for an empty sequence.
pub fn mean<'a, I>(grades: I) -> f64
where
    I: IntoIterator<Item = &'a Grade>,
{
    // Homework grades are unbounded, so the running sum is widened.
    let (sum, count) = grades
        .into_iter()
        .fold((0i128, 0usize), |(sum, count), &g| {
            (sum + i128::from(g), count + 1)
        });
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}

/// Mean of every grade in the map, across all courses.
pub fn own_average_grade(grades: &GradeMap) -> f64 {
    mean(grades.values().flatten())
}

/// Mean homework grade in `course` across `students`.
///
/// Students without grades for the course are skipped.
pub fn students_average_grade<'a, I>(students: I, course: &str) -> f64
where
    I: IntoIterator<Item = &'a Student>,
{
    mean(
        students
            .into_iter()
            .filter_map(|s| s.grades().get(course))
            .flatten(),
    )
}

/// Mean lecture grade in `course` across `lecturers`.
///
/// Lecturers without grades for the course are skipped.
pub fn mentors_average_grade<'a, I>(lecturers: I, course: &str) -> f64
where
    I: IntoIterator<Item = &'a Lecturer>,
{
    mean(
        lecturers
            .into_iter()
            .filter_map(|l| l.grades().get(course))
            .flatten(),
    )
}

/// Number of grades recorded for `course` in `grades`.
pub fn grade_count(grades: &GradeMap, course: &str) -> usize {
    grades.get(course).map_or(0, Vec::len)
}
