//! Markdown subset used by blog documents.
//!
//! Supports `##`/`###` headings, whole-line images with an optional caption
//! line, a disclaimer paragraph, and inline links, bold and italic runs.
//! Frontmatter is stripped before block parsing. Nothing here fails:
//! unrecognized syntax degrades to plain paragraphs and literal text.

mod blocks;
mod frontmatter;
mod inline;
mod render;

pub use blocks::{ContentBlock, DEFAULT_IMAGE_ALT, HeadingLevel, parse_blocks};
pub use frontmatter::strip_frontmatter;
pub use inline::{Span, parse_inline};
pub use render::{render_blocks, render_document, render_inline};
