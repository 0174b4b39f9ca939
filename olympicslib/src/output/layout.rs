//! Alignment primitives and the numbered grid layout.
//!
//! Every grid line has the shape
//!
//! ```text
//!  <number> | <cell> | <cell> | ... |
//! ```
//!
//! so the total width is `sum(widths) + 3 * columns + number_width + 3` and
//! every column lines up across header, body and footer. Widths are counted in
//! characters, never truncated.

use serde::Serialize;

use super::report::Report;

/// Label of the row-number column in the header.
const NUMBER_HEADER: &str = "№";

/// Narrowest number column, wide enough for `"10."`.
const MIN_NUMBER_WIDTH: usize = 3;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Append spaces after `s` up to `width` characters.
pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(char_len(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Center `s` in `width` characters; an odd leftover space goes to the right.
pub fn pad_center(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(char_len(s));
    let left = fill / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(fill - left))
}

/// Horizontal alignment of a column's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Center,
}

impl Align {
    pub fn apply(self, s: &str, width: usize) -> String {
        match self {
            Align::Left => pad_left(s, width),
            Align::Center => pad_center(s, width),
        }
    }
}

/// A table column: header label plus cell alignment. Labels are always centered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub label: String,
    pub align: Align,
}

impl Column {
    pub fn new(label: impl Into<String>, align: Align) -> Self {
        Self {
            label: label.into(),
            align,
        }
    }
}

/// A titled, numbered grid of pre-formatted cells.
#[derive(Debug, Clone)]
pub struct ReportTable {
    title: String,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    footer: Option<String>,
}

impl ReportTable {
    pub fn new(title: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            title: title.into(),
            columns,
            rows: Vec::new(),
            footer: None,
        }
    }

    /// Builder: append a row. Missing trailing cells render empty.
    pub fn row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self
    }

    /// Builder: append many rows.
    pub fn rows<I: IntoIterator<Item = Vec<String>>>(mut self, rows: I) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Builder: set the summary line centered under the table.
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    fn cell(&self, row: usize, column: usize) -> &str {
        self.rows[row].get(column).map(String::as_str).unwrap_or("")
    }

    /// Widest label or cell per column.
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                (0..self.rows.len())
                    .map(|row| char_len(self.cell(row, i)))
                    .chain(std::iter::once(char_len(&column.label)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Width of the `"N."` row labels.
    pub fn number_width(&self) -> usize {
        char_len(&format!("{}.", self.rows.len())).max(MIN_NUMBER_WIDTH)
    }

    pub fn total_width(&self) -> usize {
        let widths = self.column_widths();
        widths.iter().sum::<usize>() + 3 * widths.len() + self.number_width() + 3
    }

    fn line(number: &str, cells: &[String]) -> String {
        format!(" {} | {} |", number, cells.join(" | "))
    }

    /// Lay out every line of the report.
    pub fn layout(&self) -> Report {
        let widths = self.column_widths();
        let number_width = self.number_width();
        let total_width = self.total_width();

        let labels: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| pad_center(&column.label, width))
            .collect();
        let header = Self::line(&pad_left(NUMBER_HEADER, number_width), &labels);

        let body = (0..self.rows.len())
            .map(|row| {
                let cells: Vec<String> = self
                    .columns
                    .iter()
                    .zip(&widths)
                    .enumerate()
                    .map(|(i, (column, &width))| column.align.apply(self.cell(row, i), width))
                    .collect();
                Self::line(&pad_left(&format!("{}.", row + 1), number_width), &cells)
            })
            .collect();

        Report {
            title: pad_center(&self.title, total_width),
            separator: "-".repeat(total_width),
            header,
            body,
            footer: self
                .footer
                .as_deref()
                .map(|footer| pad_center(footer, total_width)),
        }
    }
}
