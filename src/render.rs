//! Bordered text tables for the terminal.
//!
//! Parsed records carry semantic values only. Each record type says which
//! [`Tone`] its cells have and color is applied here, at render time.

use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;

mod rows;

/// Display intent of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// No styling
    Plain,
    /// Healthy or permissive state (green)
    Good,
    /// Down or blocking state (red)
    Bad,
    /// A value worth noticing, such as an address (yellow)
    Highlight,
    /// Restricted or unrecognized state (bright yellow)
    Warning,
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Text as extracted from the command output
    pub text: String,
    /// How the text should be styled
    pub tone: Tone,
}

impl Cell {
    /// Creates a cell.
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// Applies the tone's color to the text.
    pub fn styled(&self) -> String {
        match self.tone {
            Tone::Plain => self.text.clone(),
            Tone::Good => self.text.green().to_string(),
            Tone::Bad => self.text.red().to_string(),
            Tone::Highlight => self.text.yellow().to_string(),
            Tone::Warning => self.text.bright_yellow().to_string(),
        }
    }
}

/// A record that can be shown as a table row.
pub trait TableRow {
    /// Column headers
    const HEADERS: &'static [&'static str];

    /// Cells of this row, in header order.
    fn cells(&self) -> Vec<Cell>;
}

/// Renders `rows` under the headers of their type.
pub fn render_table<T: TableRow>(rows: &[T]) -> String {
    render_grid(T::HEADERS, rows.iter().map(TableRow::cells))
}

/// Renders a grid from explicit headers and cells.
///
/// Row widths are not checked against the header width.
pub fn render_grid<I>(headers: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<Cell>>,
{
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row.iter().map(Cell::styled));
    }
    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}

/// Colored heading printed above each table.
pub fn section_title(title: &str) -> String {
    format!("{}:", title).blue().to_string()
}
