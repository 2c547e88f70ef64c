//! # Issue Report Rendering
//!
//! Turns one result category into an ordered tabular report. The
//! transform to `ReportTable` is pure and independent of any markup;
//! `html` renders a table into the log-sink markup and can be swapped
//! for another sink without touching the transform.

pub mod html;
pub mod table;

pub use html::render_html;
pub use table::{ReportRow, ReportTable};
