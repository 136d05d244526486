//! Input and output sinks for a grading run.
//!
//! Both ends default to the standard streams when no path is given.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::debug;

use crate::error::{GradeError, Result};
use crate::gradebook::GradeBook;
use crate::parser::parse_grade_book;
use crate::tiers::GradeTiers;

/// Reads a grade book from `path`, or from stdin when `path` is `None`.
pub fn read_grade_book(path: Option<&Path>, tiers: GradeTiers) -> Result<GradeBook> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Reading students from file");
            let file = File::open(path).map_err(|e| GradeError::io(path, e))?;
            parse_grade_book(BufReader::new(file), &path.display().to_string(), tiers)
        }
        None => {
            debug!("Reading students from stdin");
            let stdin = io::stdin();
            parse_grade_book(stdin.lock(), "<stdin>", tiers)
        }
    }
}

/// Writes `report` followed by a newline to `path`, or to stdout when `path`
/// is `None`.
pub fn write_report(path: Option<&Path>, report: &str) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| GradeError::io(path, e))?;
            write_to(BufWriter::new(file), report).map_err(|e| GradeError::io(path, e))?;
            debug!(path = %path.display(), bytes = report.len(), "Report written");
        }
        None => {
            let stdout = io::stdout();
            write_to(stdout.lock(), report).map_err(|e| GradeError::io("<stdout>", e))?;
        }
    }
    Ok(())
}

fn write_to<W: Write>(mut writer: W, report: &str) -> io::Result<()> {
    writer.write_all(report.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
