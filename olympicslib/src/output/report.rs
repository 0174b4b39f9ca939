//! The assembled report: pre-formatted lines ready to print.

use serde::Serialize;
use std::fmt;

use super::layout::{pad_center, pad_left};

/// A report laid out to a common width.
///
/// Lines are stored padded, so printing them one per line yields an aligned
/// block framed by separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Title centered over the full width
    pub title: String,
    /// A run of `-` as wide as the report
    pub separator: String,
    pub header: String,
    pub body: Vec<String>,
    /// Centered summary line(s) under the last separator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Report {
    /// Lay out free-text lines that do not form a grid.
    ///
    /// The width is the longest of `header`, `body` and `footer`; the header is
    /// left-aligned, body lines, title and footer are centered.
    pub fn free_text(title: &str, header: &str, body: &[String], footer: &str) -> Self {
        let width = std::iter::once(header)
            .chain(body.iter().map(String::as_str))
            .chain(std::iter::once(footer))
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        Report {
            title: pad_center(title, width),
            separator: "-".repeat(width),
            header: pad_left(header, width),
            body: body.iter().map(|line| pad_center(line, width)).collect(),
            footer: Some(pad_center(footer, width)),
        }
    }

    /// Width of the report in characters.
    pub fn width(&self) -> usize {
        self.separator.chars().count()
    }

    /// The printable block. Starts with an empty line; a missing footer
    /// leaves an empty last line.
    pub fn render(&self) -> String {
        format!(
            "\n{title}\n{sep}\n{header}\n{sep}\n{body}\n{sep}\n{footer}",
            title = self.title,
            sep = self.separator,
            header = self.header,
            body = self.body.join("\n"),
            footer = self.footer.as_deref().unwrap_or(""),
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
