//! Report rendering.
//!
//! Every format lays out the same columns from a [`Report`]: First Name,
//! Last Name, Overall Average, Letter Grade, then `Score 1..=N`.

pub mod console;
pub mod csv;
pub mod html;
pub mod json;
pub mod markdown;

use clap::ValueEnum;

use crate::error::Result;
use crate::gradebook::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Boxed plain-text table
    #[default]
    Console,
    /// Standalone HTML page with a bordered table
    Html,
    /// Pipe table
    Markdown,
    /// Comma-separated values with a header record
    Csv,
    /// Pretty-printed JSON document
    Json,
}

impl Format {
    /// Renders `report` in this format, without a trailing newline.
    pub fn render(self, report: &Report) -> Result<String> {
        match self {
            Format::Console => Ok(console::render(report)),
            Format::Html => Ok(html::render(report)),
            Format::Markdown => Ok(markdown::render(report)),
            Format::Csv => csv::render(report),
            Format::Json => json::render(report),
        }
    }
}
