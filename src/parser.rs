//! Line parser for student records.
//!
//! A record is `<first> <last name...> <score> [<score>...]`: one
//! whitespace-free first name, a last name that may span several words, and
//! the maximal trailing run of numeric tokens as scores.

use std::io::BufRead;
use std::rc::Rc;
use tracing::{debug, info};

use crate::error::{GradeError, Result};
use crate::gradebook::GradeBook;
use crate::student::{Name, Student};
use crate::tiers::GradeTiers;

/// Why a single line failed the record grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    Empty,
    MissingLastName,
    MissingScores,
}

impl std::fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            ParseFailure::Empty => "empty record",
            ParseFailure::MissingLastName => "no last name before the scores",
            ParseFailure::MissingScores => "no trailing numeric scores",
        };
        f.write_str(reason)
    }
}

fn score(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses one record line.
///
/// # Errors
///
/// Returns a [`ParseFailure`] if the line has no tokens, no numeric tail, or
/// nothing between the first name and the scores.
pub fn parse_student(line: &str) -> std::result::Result<Student, ParseFailure> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (first, rest) = tokens.split_first().ok_or(ParseFailure::Empty)?;

    let name_len = rest
        .iter()
        .rposition(|t| score(t).is_none())
        .map_or(0, |i| i + 1);

    if name_len == rest.len() {
        return Err(ParseFailure::MissingScores);
    }
    if name_len == 0 {
        return Err(ParseFailure::MissingLastName);
    }

    let (last, scores) = rest.split_at(name_len);
    let scores = scores.iter().filter_map(|t| score(t)).collect();

    Ok(Student::new(Name::new(*first, last.join(" ")), scores))
}

/// Reads every record from `reader` into a new book graded by `tiers`.
///
/// Whitespace-only lines are skipped. Any other line that fails the grammar
/// aborts the whole read.
///
/// # Errors
///
/// Returns [`GradeError::Parse`] for the first malformed line, or
/// [`GradeError::Io`] (tagged with `source`) if reading fails.
pub fn parse_grade_book<R: BufRead>(
    reader: R,
    source: &str,
    tiers: GradeTiers,
) -> Result<GradeBook> {
    let mut book = GradeBook::new(tiers);

    for (idx, line) in reader.lines().enumerate() {
        let line_number = idx + 1;
        let line = line.map_err(|e| GradeError::io(source, e))?;

        if line.trim().is_empty() {
            debug!(line_number, "Skipping blank line");
            continue;
        }

        let student = parse_student(&line).map_err(|reason| GradeError::Parse {
            line_number,
            line: line.clone(),
            reason: reason.to_string(),
        })?;

        debug!(
            line_number,
            first = %student.name.first,
            last = %student.name.last,
            scores = student.scores.len(),
            "Parsed student"
        );
        book.add(Rc::new(student));
    }

    info!(source, students = book.len(), "Grade book loaded");
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_record() {
        let student = parse_student("Ada Lovelace 90 88").unwrap();
        assert_eq!(student.name, Name::new("Ada", "Lovelace"));
        assert_eq!(student.scores, vec![90.0, 88.0]);
    }

    #[test]
    fn test_parse_multi_word_last_name() {
        let student = parse_student("  Ludwig van  Beethoven\t77.5 81 ").unwrap();
        assert_eq!(student.name.first, "Ludwig");
        assert_eq!(student.name.last, "van Beethoven");
        assert_eq!(student.scores, vec![77.5, 81.0]);
    }

    #[test]
    fn test_parse_numeric_word_inside_last_name() {
        let student = parse_student("Henry Tudor 8th King 90").unwrap();
        assert_eq!(student.name.last, "Tudor 8th King");
        assert_eq!(student.scores, vec![90.0]);
    }

    #[test]
    fn test_non_finite_tokens_belong_to_name() {
        let student = parse_student("Nan Inf NaN 70").unwrap();
        assert_eq!(student.name.last, "Inf NaN");
        assert_eq!(student.scores, vec![70.0]);
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse_student("   "), Err(ParseFailure::Empty));
        assert_eq!(
            parse_student("Ada Lovelace"),
            Err(ParseFailure::MissingScores)
        );
        assert_eq!(parse_student("Ada"), Err(ParseFailure::MissingScores));
        assert_eq!(
            parse_student("Ada 90 88"),
            Err(ParseFailure::MissingLastName)
        );
    }

    #[test]
    fn test_parse_grade_book_skips_blank_lines() {
        let input = "Ada Lovelace 90 88\n\n   \nAlan Turing 70 75 80\n";
        let book = parse_grade_book(input.as_bytes(), "<test>", GradeTiers::standard()).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.number_of_assignments(), 3);
    }

    #[test]
    fn test_parse_grade_book_reports_bad_line() {
        let input = "Ada Lovelace 90 88\nAlan Turing\n";
        let err = parse_grade_book(input.as_bytes(), "<test>", GradeTiers::standard()).unwrap_err();
        match err {
            GradeError::Parse {
                line_number, line, ..
            } => {
                assert_eq!(line_number, 2);
                assert_eq!(line, "Alan Turing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
