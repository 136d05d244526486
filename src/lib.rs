pub mod config;
pub mod error;
pub mod gradebook;
pub mod output;
pub mod parser;
pub mod render;
pub mod student;
pub mod tiers;

pub use error::{GradeError, Result};
pub use gradebook::{GradeBook, Report, ReportRow};
pub use render::Format;
pub use student::{Name, Student};
pub use tiers::{GradeTiers, Tier};
