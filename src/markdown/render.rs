//! HTML rendering of parsed content blocks.

use maud::{Markup, html};

use super::blocks::{ContentBlock, HeadingLevel};
use super::inline::{Span, parse_inline};
use crate::routes::LinkStyle;

/// Renders inline spans for a paragraph or heading.
///
/// Links open in a new tab. Text is escaped by maud, so raw HTML in the
/// source document is displayed literally.
pub fn render_inline(text: &str) -> Markup {
    html! {
        @for span in parse_inline(text) {
            @match span {
                Span::Text(t) => { (t) }
                Span::Link { text, href } => {
                    a href=(href) target="_blank" rel="noreferrer" class="inline-link" { (text) }
                }
                Span::Bold(t) => { strong { (t) } }
                Span::Italic(t) => { em { (t) } }
            }
        }
    }
}

/// Renders content blocks in document order.
///
/// Image sources are resolved through `links` so root-absolute paths work
/// from pages at any depth of the static build.
pub fn render_blocks(blocks: &[ContentBlock], links: LinkStyle) -> Markup {
    html! {
        @for block in blocks {
            @match block {
                ContentBlock::Paragraph(text) => {
                    p class="post-paragraph" { (render_inline(text)) }
                }
                ContentBlock::Heading { level: HeadingLevel::H2, text } => {
                    h2 class="post-heading" { (render_inline(text)) }
                }
                ContentBlock::Heading { level: HeadingLevel::H3, text } => {
                    h3 class="post-subheading" { (render_inline(text)) }
                }
                ContentBlock::Image { src, alt, caption } => {
                    figure class="post-figure" {
                        img src=(links.resource(src)) alt=(alt) loading="lazy";
                        @if let Some(caption) = caption {
                            figcaption { (caption) }
                        }
                    }
                }
                ContentBlock::Disclaimer(text) => {
                    div class="post-disclaimer" {
                        p { (text) }
                    }
                }
            }
        }
    }
}

/// Parses and renders a document body.
pub fn render_document(text: &str, links: LinkStyle) -> Markup {
    render_blocks(&super::parse_blocks(text), links)
}
