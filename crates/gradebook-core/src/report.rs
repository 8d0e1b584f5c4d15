//! Summary report over a set of students, lecturers and reviewers.
//!
//! The report is a snapshot for console output (text tables, markdown or
//! JSON). It is never read back.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::mentor::{Lecturer, Reviewer};
use crate::statistics::{grade_count, mentors_average_grade, students_average_grade};
use crate::student::Student;
use crate::traits::{Mentor, Person};

/// Snapshot of a whole gradebook.
#[derive(Debug, Clone, Serialize)]
pub struct GradebookReport {
    pub students: Vec<StudentSummary>,
    pub lecturers: Vec<LecturerSummary>,
    pub reviewers: Vec<ReviewerSummary>,
    /// One entry per course mentioned anywhere, sorted by name.
    pub courses: Vec<CourseAverages>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub surname: String,
    pub average_grade: f64,
    pub courses_in_progress: Vec<String>,
    pub finished_courses: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LecturerSummary {
    pub name: String,
    pub surname: String,
    pub average_grade: f64,
    pub courses_attached: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewerSummary {
    pub name: String,
    pub surname: String,
    pub courses_attached: Vec<String>,
}

/// Homework and lecture averages for one course.
#[derive(Debug, Clone, Serialize)]
pub struct CourseAverages {
    pub course: String,
    /// Mean homework grade across all students.
    pub homework_average: f64,
    pub homework_grades: usize,
    /// Mean lecture grade across all lecturers.
    pub lecture_average: f64,
    pub lecture_grades: usize,
}

impl GradebookReport {
    pub fn build(students: &[Student], lecturers: &[Lecturer], reviewers: &[Reviewer]) -> Self {
        let mut course_names: BTreeSet<&str> = BTreeSet::new();
        for s in students {
            course_names.extend(s.courses_in_progress().iter());
            course_names.extend(s.finished_courses().iter());
            course_names.extend(s.grades().keys().map(String::as_str));
        }
        for l in lecturers {
            course_names.extend(l.courses_attached().iter());
        }
        for r in reviewers {
            course_names.extend(r.courses_attached().iter());
        }

        let courses = course_names
            .into_iter()
            .map(|course| CourseAverages {
                course: course.to_string(),
                homework_average: students_average_grade(students, course),
                homework_grades: students.iter().map(|s| grade_count(s.grades(), course)).sum(),
                lecture_average: mentors_average_grade(lecturers, course),
                lecture_grades: lecturers.iter().map(|l| grade_count(l.grades(), course)).sum(),
            })
            .collect();

        Self {
            students: students
                .iter()
                .map(|s| StudentSummary {
                    name: s.name().to_string(),
                    surname: s.surname().to_string(),
                    average_grade: s.average_grade(),
                    courses_in_progress: s.courses_in_progress().as_slice().to_vec(),
                    finished_courses: s.finished_courses().as_slice().to_vec(),
                })
                .collect(),
            lecturers: lecturers
                .iter()
                .map(|l| LecturerSummary {
                    name: l.name().to_string(),
                    surname: l.surname().to_string(),
                    average_grade: l.average_grade(),
                    courses_attached: l.courses_attached().as_slice().to_vec(),
                })
                .collect(),
            reviewers: reviewers
                .iter()
                .map(|r| ReviewerSummary {
                    name: r.name().to_string(),
                    surname: r.surname().to_string(),
                    courses_attached: r.courses_attached().as_slice().to_vec(),
                })
                .collect(),
            courses,
        }
    }

    /// Averages for a single course, if it appears in the report.
    pub fn course(&self, name: &str) -> Option<&CourseAverages> {
        self.courses.iter().find(|c| c.course == name)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize gradebook report")
    }

    /// Render the report as markdown tables.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("# Gradebook Report\n\n");

        md.push_str("## Students\n\n");
        md.push_str("| Student | Avg homework | In progress | Finished |\n");
        md.push_str("|---------|--------------|-------------|----------|\n");
        for s in &self.students {
            md.push_str(&format!(
                "| {} {} | {} | {} | {} |\n",
                s.name,
                s.surname,
                s.average_grade,
                s.courses_in_progress.join(", "),
                s.finished_courses.join(", ")
            ));
        }

        md.push_str("\n## Lecturers\n\n");
        md.push_str("| Lecturer | Avg lecture | Courses |\n");
        md.push_str("|----------|-------------|---------|\n");
        for l in &self.lecturers {
            md.push_str(&format!(
                "| {} {} | {} | {} |\n",
                l.name,
                l.surname,
                l.average_grade,
                l.courses_attached.join(", ")
            ));
        }

        md.push_str("\n## Reviewers\n\n");
        md.push_str("| Reviewer | Courses |\n");
        md.push_str("|----------|---------|\n");
        for r in &self.reviewers {
            md.push_str(&format!(
                "| {} {} | {} |\n",
                r.name,
                r.surname,
                r.courses_attached.join(", ")
            ));
        }

        md.push_str("\n## Courses\n\n");
        md.push_str("| Course | Avg homework | Homework grades | Avg lecture | Lecture grades |\n");
        md.push_str("|--------|--------------|-----------------|-------------|----------------|\n");
        for c in &self.courses {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                c.course, c.homework_average, c.homework_grades, c.lecture_average, c.lecture_grades
            ));
        }

        md
    }
}
