//! The `gradebook init` command.

use anyhow::{Context, Result};

use gradebook_core::config::parse_config;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("gradebook.toml");
    if path.exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        // Never write a config the loader would refuse.
        parse_config(SAMPLE_CONFIG).context("built-in sample config is invalid")?;
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit gradebook.toml to pick the report course");
    println!("  2. Run: gradebook demo");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

# Separator between course names in student listings
course_separator = ", "

# Course averaged across all students and lecturers
report_course = "Python"
"#;
