//! Grade book aggregation: averages, letters, ordering and the report view
//! every output format is rendered from.

use serde::Serialize;
use std::rc::Rc;
use tracing::debug;

use crate::error::Result;
use crate::render::Format;
use crate::student::Student;
use crate::tiers::GradeTiers;

/// Students graded against one tier table.
///
/// Membership is by identity: adding the same `Rc<Student>` twice keeps one
/// entry, while two separately built students with equal values are both kept.
#[derive(Debug)]
pub struct GradeBook {
    students: Vec<Rc<Student>>,
    tiers: GradeTiers,
}

/// One rendered line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub first_name: String,
    pub last_name: String,
    pub average: f64,
    pub letter: String,
    pub scores: Vec<f64>,
}

/// The sorted, graded view of a book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub assignments: usize,
    pub rows: Vec<ReportRow>,
}

impl Report {
    pub const FIXED_HEADERS: [&'static str; 4] =
        ["First Name", "Last Name", "Overall Average", "Letter Grade"];

    /// Column titles: the fixed four followed by `Score 1..=N`.
    pub fn headers(&self) -> Vec<String> {
        Self::FIXED_HEADERS
            .iter()
            .map(|h| h.to_string())
            .chain((1..=self.assignments).map(|i| format!("Score {}", i)))
            .collect()
    }
}

impl ReportRow {
    /// Cell text for every column, with blank cells padding missing scores
    /// out to `assignments`.
    pub fn cells(&self, assignments: usize) -> Vec<String> {
        let mut cells = vec![
            self.first_name.clone(),
            self.last_name.clone(),
            self.average.to_string(),
            self.letter.clone(),
        ];
        cells.extend(self.scores.iter().map(|s| s.to_string()));
        let width = Report::FIXED_HEADERS.len() + assignments;
        if cells.len() < width {
            cells.resize(width, String::new());
        }
        cells
    }
}

impl GradeBook {
    pub fn new(tiers: GradeTiers) -> Self {
        Self {
            students: Vec::new(),
            tiers,
        }
    }

    /// Adds a student. Returns `false` if this exact instance is already in
    /// the book.
    pub fn add(&mut self, student: impl Into<Rc<Student>>) -> bool {
        let student = student.into();
        if self.students.iter().any(|s| Rc::ptr_eq(s, &student)) {
            debug!(
                first = %student.name.first,
                last = %student.name.last,
                "Student already in grade book"
            );
            return false;
        }
        self.students.push(student);
        true
    }

    /// Students in insertion order.
    pub fn students(&self) -> &[Rc<Student>] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn tiers(&self) -> &GradeTiers {
        &self.tiers
    }

    /// Largest score count of any student, 0 for an empty book.
    pub fn number_of_assignments(&self) -> usize {
        self.students
            .iter()
            .map(|s| s.scores.len())
            .max()
            .unwrap_or(0)
    }

    pub fn grade_average(&self, student: &Student, assignments: Option<usize>) -> f64 {
        student.grade_average(assignments)
    }

    pub fn letter_for(&self, average: f64) -> &str {
        self.tiers.letter(average)
    }

    /// Students by descending average over the book-wide assignment count.
    /// Equal averages keep insertion order.
    pub fn sorted_students(&self) -> Vec<Rc<Student>> {
        let assignments = Some(self.number_of_assignments());
        let mut keyed: Vec<(f64, Rc<Student>)> = self
            .students
            .iter()
            .map(|s| (s.grade_average(assignments), Rc::clone(s)))
            .collect();
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        keyed.into_iter().map(|(_, s)| s).collect()
    }

    /// Builds the graded, sorted view shared by every output format.
    pub fn report(&self) -> Report {
        let assignments = self.number_of_assignments();
        let rows = self
            .sorted_students()
            .iter()
            .map(|student| {
                let average = student.grade_average(Some(assignments));
                ReportRow {
                    first_name: student.name.first.clone(),
                    last_name: student.name.last.clone(),
                    average,
                    letter: self.letter_for(average).to_string(),
                    scores: student.scores.clone(),
                }
            })
            .collect();

        Report { assignments, rows }
    }

    /// Renders the report in `format`, without a trailing newline.
    pub fn render(&self, format: Format) -> Result<String> {
        let report = self.report();
        debug!(
            ?format,
            students = report.rows.len(),
            assignments = report.assignments,
            "Rendering report"
        );
        format.render(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::student::Name;

    fn student(first: &str, last: &str, scores: &[f64]) -> Rc<Student> {
        Rc::new(Student::new(Name::new(first, last), scores.to_vec()))
    }

    fn book() -> GradeBook {
        GradeBook::new(GradeTiers::standard())
    }

    #[test]
    fn test_add_same_instance_is_noop() {
        let mut book = book();
        let ada = student("Ada", "Lovelace", &[90.0]);
        assert!(book.add(Rc::clone(&ada)));
        assert!(!book.add(Rc::clone(&ada)));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_equal_values_kept() {
        let mut book = book();
        book.add(student("Ada", "Lovelace", &[90.0]));
        book.add(student("Ada", "Lovelace", &[90.0]));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_number_of_assignments() {
        let mut book = book();
        assert_eq!(book.number_of_assignments(), 0);
        book.add(student("A", "One", &[1.0, 2.0]));
        book.add(student("B", "Two", &[1.0, 2.0, 3.0, 4.0]));
        book.add(student("C", "Three", &[1.0, 2.0, 3.0]));
        assert_eq!(book.number_of_assignments(), 4);
    }

    #[test]
    fn test_sorted_students_uses_book_assignment_count() {
        let mut book = book();
        // Own-count average 89 would beat Turing's 75; over three assignments it is 60.
        book.add(student("Ada", "Lovelace", &[90.0, 88.0]));
        book.add(student("Alan", "Turing", &[70.0, 75.0, 80.0]));

        let sorted = book.sorted_students();
        assert_eq!(sorted[0].name.last, "Turing");
        assert_eq!(sorted[1].name.last, "Lovelace");
    }

    #[test]
    fn test_sorted_students_ties_keep_insertion_order() {
        let mut book = book();
        book.add(student("First", "Tie", &[80.0]));
        book.add(student("Top", "Score", &[95.0]));
        book.add(student("Second", "Tie", &[80.0]));

        let order: Vec<_> = book
            .sorted_students()
            .iter()
            .map(|s| s.name.first.clone())
            .collect();
        assert_eq!(order, ["Top", "First", "Second"]);
    }

    #[test]
    fn test_report_rows() {
        let mut book = book();
        book.add(student("Ada", "Lovelace", &[90.0, 88.0]));
        book.add(student("Alan", "Turing", &[70.0, 75.0, 80.0]));

        let report = book.report();
        assert_eq!(report.assignments, 3);
        assert_eq!(report.rows[0].average, 75.0);
        assert_eq!(report.rows[0].letter, "C");
        assert_eq!(report.rows[1].average, 60.0);
        assert_eq!(report.rows[1].letter, "D-");
    }

    #[test]
    fn test_row_cells_pad_missing_scores() {
        let row = ReportRow {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            average: 60.0,
            letter: "D-".into(),
            scores: vec![90.0, 88.5],
        };
        assert_eq!(
            row.cells(3),
            ["Ada", "Lovelace", "60", "D-", "90", "88.5", ""]
        );
    }

    #[test]
    fn test_headers() {
        let report = Report {
            assignments: 2,
            rows: vec![],
        };
        assert_eq!(
            report.headers(),
            [
                "First Name",
                "Last Name",
                "Overall Average",
                "Letter Grade",
                "Score 1",
                "Score 2"
            ]
        );
    }
}
