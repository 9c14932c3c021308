//! Box-drawn table rendering for the `list` action.

use crate::store::User;

const INDEX_HEADER: &str = "(index)";
const HEADERS: [&str; 3] = [INDEX_HEADER, "name", "age"];

/// Render users as a table with an index column, one row per record.
pub fn render(users: &[User]) -> Vec<String> {
    let rows: Vec<[String; 3]> = users
        .iter()
        .enumerate()
        .map(|(index, user)| {
            [
                index.to_string(),
                format!("'{}'", user.name()),
                user.age().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count() + 2);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count() + 2);
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border(&widths, "┌", "┬", "┐"));
    lines.push(row_line(&widths, &HEADERS));
    lines.push(border(&widths, "├", "┼", "┤"));
    for row in &rows {
        let cells = [row[0].as_str(), row[1].as_str(), row[2].as_str()];
        lines.push(row_line(&widths, &cells));
    }
    lines.push(border(&widths, "└", "┴", "┘"));
    lines
}

fn border(widths: &[usize; 3], left: &str, middle: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|width| "─".repeat(*width)).collect();
    format!("{left}{}{right}", segments.join(middle))
}

fn row_line(widths: &[usize; 3], cells: &[&str; 3]) -> String {
    let centered: Vec<String> = widths
        .iter()
        .zip(cells)
        .map(|(width, cell)| center(cell, *width))
        .collect();
    format!("│{}│", centered.join("│"))
}

/// Centre `text` in `width` columns; odd padding puts the extra space on the right.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let padding = width.saturating_sub(len);
    let left = padding / 2;
    let right = padding - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}
