//! Publication list page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::content::SiteContent;
use crate::routes::{LinkStyle, Route};

/// Generates the publications page
///
/// Each entry shows preprint and topic badges, the linked title, the author
/// list with the site owner emphasised, venue and year, and paper / code
/// links when present.
pub fn render(content: &SiteContent, links: LinkStyle) -> Markup {
    let owner = content.profile.name.as_str();

    page_wrapper(
        content,
        &Route::Publications,
        links,
        "Publications",
        html! {
            div.page-header {
                h1.page-title { "Publications" }
                p.page-lede { "Selected papers & Preprints" }
            }

            div.publication-list {
                @for publication in &content.publications {
                    div.publication {
                        div.badges {
                            @if publication.preprint {
                                span.badge.badge-preprint { "Preprint" }
                            }
                            @for tag in &publication.tags {
                                span.badge.badge-tag { (tag) }
                            }
                        }

                        h3.publication-title {
                            @if let Some(link) = &publication.link {
                                a href=(link) target="_blank" rel="noreferrer" { (publication.title) }
                            } @else {
                                (publication.title)
                            }
                        }

                        p.publication-authors {
                            @for (i, author) in publication.authors.iter().enumerate() {
                                @if !owner.is_empty() && author.contains(owner) {
                                    strong.author-self { (author) }
                                } @else {
                                    span { (author) }
                                }
                                @if i + 1 < publication.authors.len() {
                                    ", "
                                }
                            }
                        }

                        div.publication-venue {
                            @if let Some(venue) = &publication.venue {
                                (venue) " "
                            }
                            "(" (publication.year) ")"
                        }

                        div.publication-links {
                            @if let Some(link) = &publication.link {
                                a href=(link) target="_blank" rel="noreferrer" {
                                    i.ph.ph-file-text {}
                                    " ArXiv"
                                }
                            }
                            @if let Some(github) = &publication.github {
                                a href=(github) target="_blank" rel="noreferrer" {
                                    i.ph.ph-github-logo {}
                                    " Code"
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
