/// Given name and family name, in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Name {
    pub first: String,
    pub last: String,
}

impl Name {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }
}

/// One student's scores, one per assignment in assignment order.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: Name,
    pub scores: Vec<f64>,
}

impl Student {
    pub fn new(name: Name, scores: Vec<f64>) -> Self {
        Self { name, scores }
    }

    /// Sum of scores divided by `assignments`, rounded up.
    ///
    /// `assignments` defaults to this student's own score count; a count of
    /// zero yields `0.0`.
    pub fn grade_average(&self, assignments: Option<usize>) -> f64 {
        let count = assignments.unwrap_or(self.scores.len());
        if count == 0 {
            return 0.0;
        }
        (self.scores.iter().sum::<f64>() / count as f64).ceil()
    }
}
