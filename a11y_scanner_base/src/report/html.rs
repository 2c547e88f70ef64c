//! HTML sink for report tables.
//!
//! Emits the four-column issue table (ID#, LOCATOR, HTML, ISSUE) in the
//! markup the host framework's log viewer styles as an info message.

use std::fmt::Write;

use crate::report::table::ReportTable;

const CELL_STYLE: &str = "padding: 1em;";

const SNIPPET_STYLE: &str = "overflow:auto;\
word-wrap:normal;\
background-color:#626264;\
border-radius:0.3em;\
min-height:4em;\
color: white;\
margin-block-start:0;\
margin-block-end:0;\
padding: 0.5em;";

/// Render a report table into an HTML table string
pub fn render_html(table: &ReportTable) -> String {
    let mut out = String::new();

    out.push_str("<table class=\"messages info-message\">\n");
    out.push_str("<colgroup>");
    for width in ["5%", "15%", "25%", "25%"] {
        let _ = write!(out, "<col style=\"width:{width};\">");
    }
    out.push_str("</colgroup>\n<tbody>\n");

    out.push_str("<tr style=\"text-align: left;\">");
    for heading in ["ID#", "LOCATOR", "HTML", "ISSUE"] {
        let _ = write!(out, "<th style=\"{CELL_STYLE}\">{heading}</th>");
    }
    out.push_str("</tr>\n");

    for row in table.rows() {
        out.push_str("<tr style=\"text-align: left;\">");
        let _ = write!(out, "<td style=\"{CELL_STYLE}\">{}</td>", row.id);
        let _ = write!(
            out,
            "<td style=\"{CELL_STYLE}\">{}</td>",
            escape(&row.locator)
        );
        let _ = write!(
            out,
            "<td style=\"padding: 0em;\"><pre style=\"{SNIPPET_STYLE}\"><code>{}</code></pre></td>",
            escape(&row.html)
        );
        let _ = write!(out, "<td style=\"{CELL_STYLE}\">{}</td>", escape(&row.issue));
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n");
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
