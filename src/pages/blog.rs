//! Blog directory and post reader pages

use maud::{Markup, html};

use crate::blog::PostPhase;
use crate::components::layout::page_wrapper;
use crate::content::{BlogPost, SiteContent};
use crate::markdown::render_document;
use crate::routes::{LinkStyle, Route};

/// Generates the blog directory page
///
/// Lists posts in configured order with date, title and generator label.
/// An empty list shows a placeholder rather than a blank section.
///
/// # Arguments
///
/// * `content`: Site content with post metadata
/// * `links`: Link style for post links
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn render_directory(content: &SiteContent, links: LinkStyle) -> Markup {
    let route = Route::Blog(None);

    page_wrapper(
        content,
        &route,
        links,
        "Blogs",
        html! {
            section.page-intro {
                h1.page-title { "Thoughts & Updates" }
                p.page-lede {
                    "Thoughts on research, alignment, and small pieces of life I want to share."
                }
            }

            div.post-list {
                @if content.posts.is_empty() {
                    div.empty-state {
                        p.empty-quote {
                            "\"Research is formalized curiosity. It is poking and prying with a purpose.\""
                        }
                        p.empty-note { "Content coming soon" }
                    }
                } @else {
                    @for post in &content.posts {
                        a.post-row href=(Route::Blog(Some(post.id.clone())).href(links)) {
                            span.post-date { (post.date) }
                            div.post-summary {
                                h3.post-title { (post.title) }
                                @if let Some(generator) = &post.generator {
                                    span.post-generator {
                                        i.ph.ph-robot {}
                                        (generator)
                                    }
                                }
                            }
                            span.post-arrow { "→" }
                        }
                    }
                }
            }
        },
    )
}

/// Generates the reader page for one post
///
/// The body shows a loading notice until the document arrives, then the
/// parsed content. A failed load has already been replaced by the fallback
/// text, which renders like any other document.
///
/// # Arguments
///
/// * `content`: Site content for layout
/// * `post`: Post metadata
/// * `phase`: Reader phase for this post
/// * `links`: Link style for navigation
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn render_post(
    content: &SiteContent,
    post: &BlogPost,
    phase: &PostPhase,
    links: LinkStyle,
) -> Markup {
    let route = Route::Blog(Some(post.id.clone()));

    page_wrapper(
        content,
        &route,
        links,
        &post.title,
        html! {
            a.back-link href=(Route::Blog(None).href(links)) {
                i.ph.ph-arrow-left {}
                " Back to Blogs"
            }

            article.post {
                div.post-meta {
                    span.post-date { (post.date) }
                    @if let Some(generator) = &post.generator {
                        span.post-generator-badge {
                            i.ph.ph-robot {}
                            "Generated by " (generator)
                        }
                    }
                }
                h1.post-heading-title { (post.title) }
                div.post-body {
                    @match phase {
                        PostPhase::Loaded(text) => { (render_document(text, links)) }
                        _ => {
                            p.loading { "Loading..." }
                        }
                    }
                }
            }
        },
    )
}
