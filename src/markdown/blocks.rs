//! Line oriented block classification.

/// Alt text used when an image line carries none.
pub const DEFAULT_IMAGE_ALT: &str = "Blog illustration";

const DISCLAIMER_PREFIX: &str = "*This blog";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H2,
    H3,
}

/// One structurally classified unit of document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Paragraph(String),
    Heading {
        level: HeadingLevel,
        text: String,
    },
    Image {
        src: String,
        alt: String,
        caption: Option<String>,
    },
    Disclaimer(String),
}

/// Splits document text into content blocks, preserving input order.
///
/// Never fails: a line that matches no construct becomes a paragraph and
/// blank lines are dropped. An image line consumes the following line when
/// that line is a caption.
pub fn parse_blocks(text: &str) -> Vec<ContentBlock> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut blocks = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        i += 1;

        if let Some((alt, path)) = match_image_line(line) {
            let caption = match lines.get(i).and_then(|next| match_caption(next)) {
                Some(caption) => {
                    i += 1;
                    Some(caption).filter(|c| !c.is_empty())
                }
                None => None,
            };

            blocks.push(ContentBlock::Image {
                src: normalize_image_path(path),
                alt: if alt.is_empty() {
                    DEFAULT_IMAGE_ALT.to_string()
                } else {
                    alt.to_string()
                },
                caption,
            });
            continue;
        }

        if let Some(block) = classify_line(line) {
            blocks.push(block);
        }
    }

    blocks
}

fn classify_line(line: &str) -> Option<ContentBlock> {
    let trimmed = line.trim();

    if trimmed.starts_with(DISCLAIMER_PREFIX) {
        return Some(ContentBlock::Disclaimer(
            line.replace('*', "").trim().to_string(),
        ));
    }

    if let Some(rest) = trimmed.strip_prefix("## ") {
        return Some(ContentBlock::Heading {
            level: HeadingLevel::H2,
            text: rest.to_string(),
        });
    }

    if let Some(rest) = trimmed.strip_prefix("### ") {
        return Some(ContentBlock::Heading {
            level: HeadingLevel::H3,
            text: rest.to_string(),
        });
    }

    if trimmed.is_empty() {
        None
    } else {
        Some(ContentBlock::Paragraph(line.to_string()))
    }
}

/// Matches a whole line of the form `![alt](path)`.
///
/// Returns trimmed alt text and path. The alt text runs to the first `]`,
/// the path to the first `)`, which must end the line.
fn match_image_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("![")?;
    let close = rest.find(']')?;
    let alt = &rest[..close];
    let rest = rest[close + 1..].strip_prefix('(')?;
    let end = rest.find(')')?;
    if end == 0 || end + 1 != rest.len() {
        return None;
    }
    Some((alt.trim(), rest[..end].trim()))
}

/// Recognizes a caption line: `^text` or `*text*`.
///
/// The `^` form is checked first. Stripping is applied in sequence (leading
/// `^`, then one leading `*`, then one trailing `*`), so `^*text*` yields
/// `text`.
fn match_caption(line: &str) -> Option<String> {
    let trimmed = line.trim();
    let is_caption =
        trimmed.starts_with('^') || (trimmed.starts_with('*') && trimmed.ends_with('*'));
    if !is_caption {
        return None;
    }

    let caption = trimmed.strip_prefix('^').unwrap_or(trimmed);
    let caption = caption.strip_prefix('*').unwrap_or(caption);
    let caption = caption.strip_suffix('*').unwrap_or(caption);
    Some(caption.to_string())
}

fn normalize_image_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
