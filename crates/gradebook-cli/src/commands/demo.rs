//! The `gradebook demo` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::config::{load_config_from, GradebookConfig};
use gradebook_core::report::GradebookReport;
use gradebook_core::statistics::{
    mentors_average_grade, own_average_grade, students_average_grade,
};
use gradebook_core::{Lecturer, Mentor, Person, Reviewer, Student};

/// The sample gradebook after every rating has been attempted.
pub struct Demo {
    pub students: Vec<Student>,
    pub lecturers: Vec<Lecturer>,
    pub reviewers: Vec<Reviewer>,
    /// Ratings that were attempted but rejected.
    pub rejected: usize,
}

/// Two students, two lecturers and two reviewers. Two of the lecture
/// ratings target courses the student is not taking and are rejected.
pub fn build_demo() -> Result<Demo> {
    let mut ivan = Student::new("Ivan", "Ivanov", "M");
    let mut petr = Student::new("Petr", "Petrov", "M");
    ivan.add_courses_in_progress("Python")?;
    ivan.add_courses_in_progress("JavaScript")?;
    petr.add_courses_in_progress("Python")?;
    petr.add_courses_in_progress("Git")?;
    ivan.add_finished_course("Git")?;
    petr.add_finished_course("JavaScript")?;

    let mut oleg = Lecturer::new("Oleg", "Bulygin");
    let mut timur = Lecturer::new("Timur", "Anvartdinov");
    oleg.mentor_add_course("Python")?;
    oleg.mentor_add_course("C++")?;
    timur.mentor_add_course("Python")?;
    timur.mentor_add_course("JavaScript")?;

    let mut vladimir = Reviewer::new("Vladimir", "Smirnov");
    let mut elena = Reviewer::new("Elena", "Sidorova");
    vladimir.mentor_add_course("Python")?;
    vladimir.mentor_add_course("JavaScript")?;
    elena.mentor_add_course("Python")?;
    elena.mentor_add_course("Git")?;

    let outcomes = [
        vladimir.rate_hw(&mut ivan, "Python", 9),
        vladimir.rate_hw(&mut ivan, "JavaScript", 10),
        elena.rate_hw(&mut petr, "Python", 8),
        elena.rate_hw(&mut petr, "Git", 9),
        ivan.rate_lecture(&mut oleg, "Python", 8),
        ivan.rate_lecture(&mut oleg, "C++", 7),
        petr.rate_lecture(&mut timur, "Python", 10),
        petr.rate_lecture(&mut timur, "JavaScript", 9),
    ];

    let mut rejected = 0;
    for err in outcomes.iter().filter_map(|o| o.as_ref().err()) {
        tracing::info!("rating not recorded: {err}");
        rejected += 1;
    }

    Ok(Demo {
        students: vec![ivan, petr],
        lecturers: vec![oleg, timur],
        reviewers: vec![vladimir, elena],
        rejected,
    })
}

pub fn execute(
    course: Option<String>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config_from(config_path.as_deref())?;
    if let Some(course) = course {
        config.report_course = course;
    }

    let demo = build_demo()?;
    let report = GradebookReport::build(&demo.students, &demo.lecturers, &demo.reviewers);

    match format.as_str() {
        "json" => println!("{}", report.to_json()?),
        "markdown" | "md" => println!("{}", report.to_markdown()),
        "text" => {
            print_text(&demo, &config);
            print_course_table(&report);
        }
        other => anyhow::bail!("unknown format: {other} (expected text, markdown or json)"),
    }

    Ok(())
}

fn print_text(demo: &Demo, config: &GradebookConfig) {
    println!("=== Students ===");
    for s in &demo.students {
        println!("{}\n", s.display_with(&config.course_separator));
    }

    println!("=== Lecturers ===");
    for l in &demo.lecturers {
        println!("{l}\n");
    }

    println!("=== Reviewers ===");
    for r in &demo.reviewers {
        println!("{r}\n");
    }

    if let [a, b, ..] = demo.lecturers.as_slice() {
        println!(
            "Is lecturer {} better than lecturer {}? {}",
            a.full_name(),
            b.full_name(),
            a > b
        );
        println!(
            "Lecturer averages: {} and {}",
            own_average_grade(a.grades()),
            own_average_grade(b.grades())
        );
    }

    if let [a, b, ..] = demo.students.as_slice() {
        println!(
            "Is student {} better than student {}? {}",
            a.full_name(),
            b.full_name(),
            a > b
        );
        println!(
            "Student averages: {} and {}",
            own_average_grade(a.grades()),
            own_average_grade(b.grades())
        );
    }

    let course = &config.report_course;
    println!(
        "\nAverage homework grade for {course} across students: {}",
        students_average_grade(&demo.students, course)
    );
    println!(
        "Average lecture grade for {course} across lecturers: {}",
        mentors_average_grade(&demo.lecturers, course)
    );
}

fn print_course_table(report: &GradebookReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "Course",
        "Avg homework",
        "Homework grades",
        "Avg lecture",
        "Lecture grades",
    ]);

    for c in &report.courses {
        table.add_row(vec![
            Cell::new(&c.course),
            Cell::new(format!("{:.2}", c.homework_average)),
            Cell::new(c.homework_grades),
            Cell::new(format!("{:.2}", c.lecture_average)),
            Cell::new(c.lecture_grades),
        ]);
    }

    println!("\n{table}");
}
