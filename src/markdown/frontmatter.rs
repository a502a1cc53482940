//! Leading metadata block removal.

const DELIMITER: &str = "---";

/// Removes a `---` delimited frontmatter block and trims the result.
///
/// The block is recognized only when the very first line is exactly `---`.
/// Everything up to and including the next line that is exactly `---` is
/// dropped. Without a closing delimiter the whole document is kept,
/// opening line included.
pub fn strip_frontmatter(raw: &str) -> String {
    let lines: Vec<&str> = raw.split('\n').collect();

    let mut start = 0;
    if lines.first() == Some(&DELIMITER) {
        if let Some(close) = lines.iter().skip(1).position(|line| *line == DELIMITER) {
            start = close + 2;
        }
    }

    lines[start..].join("\n").trim().to_string()
}
