//! Page layout wrapper component

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;
use super::nav::navbar;
use crate::assets::STYLESHEET;
use crate::content::SiteContent;
use crate::routes::{LinkStyle, Route};

/// Wraps page content with standard HTML structure
///
/// Provides DOCTYPE, head, navigation bar and footer around the page body.
/// The stylesheet link is resolved through `links` so pages written at any
/// depth of the static build find the bundled CSS.
///
/// # Arguments
///
/// * `content`: Site content supplying owner name and navigation items
/// * `route`: Route being rendered, used for active navigation state
/// * `links`: Link style for navigation and asset paths
/// * `title`: Page title text (without suffix)
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document with wrapped content
pub fn page_wrapper(
    content: &SiteContent,
    route: &Route,
    links: LinkStyle,
    title: &str,
    body: Markup,
) -> Markup {
    let owner = content.profile.name.as_str();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (owner) }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                link rel="stylesheet" href=(links.asset(STYLESHEET));
            }
            body {
                (navbar(owner, &content.nav, route, links))
                main class="container" {
                    (body)
                }
                (footer(owner))
            }
        }
    }
}

/// Standalone document used when a page fails to render
///
/// Carries no navigation so it cannot itself depend on the content that
/// failed. The only recovery offered is a full reload.
pub fn failure_document(message: &str, links: LinkStyle) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Something went wrong" }
                link rel="stylesheet" href=(links.asset(STYLESHEET));
            }
            body class="failure-body" {
                div class="failure-card" {
                    h1 { "Something went wrong" }
                    p { "The application encountered an unexpected error." }
                    pre class="failure-message" { (message) }
                    button type="button" class="reload-button" onclick="window.location.reload()" {
                        "Reload Page"
                    }
                }
            }
        }
    }
}
