use crossterm::style::{Color, Stylize};
use similar::{ChangeTag, TextDiff};

/// Unified diff of `old` against `new` with old/new line number columns
pub fn render_unified_diff(path: &str, old: &str, new: &str, supports_color: bool) -> String {
    let diff = TextDiff::from_lines(old, new);
    let old_lines = old.lines().count().max(1);
    let new_lines = new.lines().count().max(1);
    let width = old_lines.max(new_lines).to_string().len();

    let mut out = String::new();

    for header in [format!("--- a/{}", path), format!("+++ b/{}", path)] {
        out.push_str(&paint(&header, Color::Cyan, supports_color));
        out.push('\n');
    }

    for change in diff.iter_all_changes() {
        let (old_no, new_no, sign, color) = match change.tag() {
            ChangeTag::Delete => (change.old_index().map(|i| i + 1), None, "-", Color::Red),
            ChangeTag::Insert => (None, change.new_index().map(|i| i + 1), "+", Color::Green),
            ChangeTag::Equal => (
                change.old_index().map(|i| i + 1),
                change.new_index().map(|i| i + 1),
                " ",
                Color::DarkGrey,
            ),
        };

        let old_col = column(old_no, width);
        let new_col = column(new_no, width);
        let value = change.value().trim_end_matches('\n');
        let line = format!("{old_col} {new_col} {sign} {value}");
        out.push_str(&paint(&line, color, supports_color));
        out.push('\n');
    }

    out
}

fn column(n: Option<usize>, width: usize) -> String {
    n.map(|n| format!("{:>width$}", n, width = width))
        .unwrap_or_else(|| " ".repeat(width))
}

fn paint(s: &str, color: Color, supports_color: bool) -> String {
    if supports_color {
        format!("{}", s.with(color))
    } else {
        s.to_string()
    }
}
