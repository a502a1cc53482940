//! Page for unknown preview server paths

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::content::SiteContent;
use crate::routes::{LinkStyle, Route};

/// Generates the not found page for `path`, with a link back home.
pub fn render(content: &SiteContent, path: &str, links: LinkStyle) -> Markup {
    page_wrapper(
        content,
        &Route::Home,
        links,
        "Not Found",
        html! {
            section.not-found {
                div.not-found-code { "404" }
                p.page-lede { "Nothing lives at " code { (path) } "." }
                a.back-link href=(Route::Home.href(links)) {
                    i.ph.ph-arrow-left {}
                    " Back home"
                }
            }
        },
    )
}
