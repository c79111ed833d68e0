//! Pagination Component
//!
//! Page navigation footer for the DataTable.

use crate::constants::PAGE_SIZE_CHOICES;
use crate::domain::view::GridView;
use crate::utils::format_time;

/// Footer lines: display range, page links, page-size choices, load time
pub fn footer_lines(view: &GridView) -> Vec<String> {
    let mut lines = vec![view.display_range.to_string()];

    if view.paginated {
        if !view.page_window.is_empty() {
            lines.push(page_links(view));
        }
        lines.push(page_size_choices(view.page_size));
    }

    if let Some(loaded_at) = &view.loaded_at {
        lines.push(format!(
            "Loaded {} rows at {}",
            view.source_len,
            format_time(loaded_at)
        ));
    }

    lines
}

/// `« 1 [2] 3 4 5 »` with one-based labels; the arrows only show when usable
fn page_links(view: &GridView) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(view.page_window.len() + 2);

    parts.push(if view.has_previous() { "«" } else { " " }.to_string());
    for &page in &view.page_window {
        if page == view.page_index {
            parts.push(format!("[{}]", page + 1));
        } else {
            parts.push((page + 1).to_string());
        }
    }
    parts.push(if view.has_next() { "»" } else { " " }.to_string());

    parts.join(" ")
}

fn page_size_choices(current: usize) -> String {
    let mut choices: Vec<usize> = PAGE_SIZE_CHOICES.to_vec();
    if !choices.contains(&current) {
        choices.push(current);
        choices.sort_unstable();
    }

    let labels: Vec<String> = choices
        .into_iter()
        .map(|size| {
            if size == current {
                format!("[{size}]")
            } else {
                size.to_string()
            }
        })
        .collect();

    format!("Rows per page: {}", labels.join(" "))
}
