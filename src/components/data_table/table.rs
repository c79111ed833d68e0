//! DataTable Text Renderer
//!
//! Lays a `GridView` out as fixed-width text:
//!
//! ```text
//! Something went wrong. <message>        (only after a failed fetch)
//! Name ▲        │ Capital          │ ...
//! [Search name] │ [Search capital] │ ...  (only when a column is filterable)
//! ━━━━━━━━━━━━━━┿━━━━━━━━━━━━━━━━━━┿━━━━
//! rows of the current page
//! footer (see `pagination`)
//! ```

use std::io::Write;

use super::pagination::footer_lines;
use crate::components::Renderer;
use crate::constants::MAX_CELL_WIDTH;
use crate::domain::view::{GridView, HeaderView};
use crate::error::Result;
use crate::utils::{pad, truncate};

const COLUMN_GAP: &str = " │ ";
const UNSORTED_MARK: &str = "*";

/// Renders grid snapshots as plain text into any writer
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, view: &GridView) -> Result<()> {
        for line in table_lines(view) {
            writeln!(self.out, "{}", line.trim_end())?;
        }
        for line in footer_lines(view) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Everything above the footer, one entry per output line
pub fn table_lines(view: &GridView) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(message) = view.status.warning() {
        lines.push(format!("Something went wrong. {message}"));
    }

    let titles: Vec<String> = view.headers.iter().map(header_title).collect();
    let any_filterable = view.headers.iter().any(|h| h.filterable);
    let searches: Vec<String> = view.headers.iter().map(search_cell).collect();
    let body: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|row| {
            (0..view.headers.len())
                .map(|i| truncate(&row.cell(i).as_text(), MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..view.headers.len())
        .map(|i| {
            let mut width = titles[i].chars().count();
            if any_filterable {
                width = width.max(searches[i].chars().count());
            }
            body.iter()
                .map(|cells| cells[i].chars().count())
                .fold(width, usize::max)
        })
        .collect();

    lines.push(join_padded(&titles, &widths));
    if any_filterable {
        lines.push(join_padded(&searches, &widths));
    }
    lines.push(separator(&widths, view.header_fixed));

    if body.is_empty() {
        lines.push(empty_message(view).to_string());
    } else {
        lines.extend(body.iter().map(|cells| join_padded(cells, &widths)));
    }

    lines
}

fn header_title(header: &HeaderView) -> String {
    match (header.sort, header.sortable) {
        (Some(direction), _) => format!("{} {}", header.label, direction.arrow()),
        (None, true) => format!("{} {}", header.label, UNSORTED_MARK),
        (None, false) => header.label.clone(),
    }
}

fn search_cell(header: &HeaderView) -> String {
    if !header.filterable {
        return String::new();
    }
    match &header.filter_term {
        Some(term) => truncate(term, MAX_CELL_WIDTH),
        None => format!("[Search {}]", header.id),
    }
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| pad(cell, width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn separator(widths: &[usize], header_fixed: bool) -> String {
    let (rule, cross) = if header_fixed { ('━', "━┿━") } else { ('─', "─┼─") };
    widths
        .iter()
        .map(|&width| std::iter::repeat_n(rule, width).collect::<String>())
        .collect::<Vec<_>>()
        .join(cross)
}

fn empty_message(view: &GridView) -> &'static str {
    if view.status.is_loading() {
        "Loading..."
    } else {
        "No data"
    }
}
