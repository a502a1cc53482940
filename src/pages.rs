//! Page generation modules for the site's views
//!
//! Each page module renders one view (home, blog, publications, travel)
//! inside the shared layout. Rendering is synchronous: documents and
//! boundaries are fetched beforehand and passed in. [`render_guarded`]
//! is the last-resort boundary that turns a panic during rendering into a
//! failure page instead of a blank response.

pub mod blog;
pub mod home;
pub mod not_found;
pub mod publications;
pub mod travel;

use maud::Markup;
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::error;

use crate::components::layout::failure_document;
use crate::error::SiteError;
use crate::routes::{LinkStyle, Route};

/// Runs `render`, replacing the page with a failure notice if it panics.
pub fn render_guarded<F>(links: LinkStyle, render: F) -> Markup
where
    F: FnOnce() -> Markup,
{
    match catch_unwind(AssertUnwindSafe(render)) {
        Ok(markup) => markup,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown error".to_string());
            let fault = SiteError::Render(message);
            error!(error = %fault, "render_fault");
            failure_document(&fault.to_string(), links)
        }
    }
}

/// Resolves a content link to an href.
///
/// Site paths (`/travel`, `/blog?id=…`, or the hash form `#/travel`) are
/// rewritten for `links`; anything else is returned unchanged and flagged
/// external so it opens in a new tab.
pub fn resolve_link(link: &str, links: LinkStyle) -> (String, bool) {
    let local = link.strip_prefix('#').unwrap_or(link);
    if local.starts_with('/') {
        let (path, query) = match local.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (local, None),
        };
        if let Some(route) = Route::parse(path, query) {
            return (route.href(links), false);
        }
    }
    (link.to_string(), true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    #[test]
    fn test_render_guarded_passes_through() {
        let markup = render_guarded(LinkStyle::Query, || html! { p { "fine" } });

        assert_eq!(markup.into_string(), "<p>fine</p>");
    }

    #[test]
    fn test_render_guarded_catches_panic() {
        // Act
        let markup = render_guarded(LinkStyle::Query, || -> Markup {
            panic!("records out of sync");
        });

        // Assert
        let html = markup.into_string();
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("Render fault: records out of sync"));
        assert!(html.contains("Reload Page"));
    }

    #[test]
    fn test_resolve_link() {
        assert_eq!(
            resolve_link("#/travel", LinkStyle::Query),
            ("/travel".to_string(), false)
        );
        assert_eq!(
            resolve_link("/blog?id=first", LinkStyle::Static { depth: 0 }),
            ("blog/first.html".to_string(), false)
        );
        assert_eq!(
            resolve_link("https://arxiv.org/abs/1", LinkStyle::Query),
            ("https://arxiv.org/abs/1".to_string(), true)
        );
        assert_eq!(
            resolve_link("/unknown", LinkStyle::Query),
            ("/unknown".to_string(), true)
        );
    }
}
