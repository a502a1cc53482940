//! Site navigation bar component

use maud::{Markup, html};

use crate::content::NavItem;
use crate::routes::{LinkStyle, Route};

/// Renders the top navigation bar
///
/// Shows the owner name linking home, followed by the configured navigation
/// items. An item whose route matches the current section is marked active.
/// Items with paths outside the site's routes are linked verbatim. The
/// mobile menu uses a `details` disclosure, so no script is needed.
///
/// # Arguments
///
/// * `owner`: Site owner name shown as the brand link
/// * `items`: Navigation items in display order
/// * `current`: Route being rendered
/// * `links`: Link style for item targets
///
/// # Returns
///
/// Navigation bar markup
pub fn navbar(owner: &str, items: &[NavItem], current: &Route, links: LinkStyle) -> Markup {
    let section = current.section();
    let entries: Vec<(&str, String, bool)> = items
        .iter()
        .map(|item| match Route::parse(&item.path, None) {
            Some(route) => (item.label.as_str(), route.href(links), route == section),
            None => (item.label.as_str(), item.path.clone(), false),
        })
        .collect();

    html! {
        nav class="site-nav" {
            div class="nav-inner" {
                a class="nav-brand" href=(Route::Home.href(links)) { (owner) }
                div class="nav-links" {
                    @for (label, href, active) in &entries {
                        a class=(if *active { "nav-link active" } else { "nav-link" }) href=(href) { (label) }
                    }
                }
                details class="nav-mobile" {
                    summary aria-label="Toggle menu" { i class="ph ph-list" {} }
                    div class="nav-mobile-links" {
                        @for (label, href, active) in &entries {
                            a class=(if *active { "nav-link active" } else { "nav-link" }) href=(href) { (label) }
                        }
                    }
                }
            }
        }
    }
}
