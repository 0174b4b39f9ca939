//! Output formatting: lay query results out as fixed-width text tables.
//!
//! This module handles the third and final stage of the pipeline. It provides:
//!
//! - **Alignment primitives**: [`pad_left`] and [`pad_center`]
//! - **ReportTable**: a numbered grid of columns whose widths fit every cell
//! - **Report**: the assembled title, separator, header, body and footer lines
//!
//! Report is a pure presentation layer - it only holds strings. All filtering
//! and aggregation happens in the query stage.
//!
//! ## Example
//!
//! ```rust
//! use olympicslib::output::{Align, Column, ReportTable};
//!
//! let report = ReportTable::new(
//!     "Countries:",
//!     vec![Column::new("Country", Align::Left), Column::new("Gold", Align::Center)],
//! )
//! .row(vec!["Norway".to_string(), "16".to_string()])
//! .layout();
//!
//! assert_eq!(report.header, " №   | Country | Gold |");
//! assert_eq!(report.body[0], " 1.  | Norway  |  16  |");
//! ```

pub mod layout;
pub mod report;
mod reports;

pub use layout::{pad_center, pad_left, Align, Column, ReportTable};
pub use report::Report;
