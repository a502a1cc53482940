//! Flat inline formatter for links, bold and italic runs.
//!
//! The scanner repeatedly looks for the next construct in the remaining
//! text, in priority order: link anywhere in the remainder, then bold, then
//! italic. Text before the chosen match is emitted as plain text and
//! scanning resumes after it. Constructs never nest; anything malformed is
//! left as literal characters.

/// A formatted fragment of a paragraph or heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    Link { text: String, href: String },
    Bold(String),
    Italic(String),
}

struct Match {
    start: usize,
    end: usize,
    span: Span,
}

/// Splits `text` into styled spans.
pub fn parse_inline(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let found = find_link(rest)
            .or_else(|| find_bold(rest))
            .or_else(|| find_italic(rest));

        let Some(m) = found else {
            spans.push(Span::Text(rest.to_string()));
            break;
        };

        if m.start > 0 {
            spans.push(Span::Text(rest[..m.start].to_string()));
        }
        spans.push(m.span);
        rest = &rest[m.end..];
    }

    spans
}

/// Earliest `[text](url)` with non-empty text and url.
fn find_link(s: &str) -> Option<Match> {
    for (open, _) in s.match_indices('[') {
        let after = &s[open + 1..];
        let Some(close) = after.find(']') else {
            break;
        };
        if close == 0 {
            continue;
        }
        let label = &after[..close];
        let Some(target) = after[close + 1..].strip_prefix('(') else {
            continue;
        };
        let Some(end) = target.find(')') else {
            continue;
        };
        if end == 0 {
            continue;
        }

        // open + '[' + label + "](" + url + ')'
        let total = 1 + close + 2 + end + 1;
        return Some(Match {
            start: open,
            end: open + total,
            span: Span::Link {
                text: label.to_string(),
                href: target[..end].to_string(),
            },
        });
    }
    None
}

/// Earliest `**text**` or `__text__`.
fn find_bold(s: &str) -> Option<Match> {
    let stars = find_delimited(s, "**", '*');
    let unders = find_delimited(s, "__", '_');

    let (start, end, inner) = match (stars, unders) {
        (Some(a), Some(b)) => {
            if a.0 <= b.0 {
                a
            } else {
                b
            }
        }
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return None,
    };

    Some(Match {
        start,
        end,
        span: Span::Bold(inner.to_string()),
    })
}

/// Earliest `*text*` with no `*` inside.
fn find_italic(s: &str) -> Option<Match> {
    find_delimited(s, "*", '*').map(|(start, end, inner)| Match {
        start,
        end,
        span: Span::Italic(inner.to_string()),
    })
}

/// Finds the earliest `delim inner delim` where `inner` is non-empty and
/// free of `forbidden`. Returns start, end and the inner slice.
fn find_delimited<'a>(s: &'a str, delim: &str, forbidden: char) -> Option<(usize, usize, &'a str)> {
    for (open, _) in s.match_indices(forbidden) {
        let Some(body) = s[open..].strip_prefix(delim) else {
            continue;
        };
        let len = body.find(forbidden).unwrap_or(body.len());
        if len == 0 {
            continue;
        }
        if body[len..].starts_with(delim) {
            let end = open + delim.len() + len + delim.len();
            return Some((open, end, &body[..len]));
        }
    }
    None
}
