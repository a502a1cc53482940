//! Route rendering shared by the static build and the preview server.

use maud::Markup;
use std::sync::Arc;
use tracing::debug;

use crate::blog::{DocumentSource, PostView, open_post};
use crate::content::SiteContent;
use crate::geo::{MapSelection, MapState, fetch_boundaries};
use crate::pages::{self, render_guarded};
use crate::routes::{LinkStyle, Route};

/// Site content plus the sources pages fetch from at view time.
#[derive(Clone)]
pub struct Site {
    content: SiteContent,
    documents: Arc<dyn DocumentSource>,
    http: reqwest::Client,
}

impl Site {
    pub fn new(content: SiteContent, documents: Arc<dyn DocumentSource>, http: reqwest::Client) -> Self {
        Self {
            content,
            documents,
            http,
        }
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Renders any route, fetching what the view needs.
    pub async fn render(&self, route: &Route, links: LinkStyle) -> Markup {
        match route {
            Route::Home => render_guarded(links, || pages::home::render(&self.content, links)),
            Route::Publications => {
                render_guarded(links, || pages::publications::render(&self.content, links))
            }
            Route::Blog(id) => self.render_blog(id.as_deref(), links).await,
            Route::Travel(id) => {
                let state = self.load_map().await;
                self.render_travel(&state, id.as_deref(), links)
            }
        }
    }

    /// Renders the blog directory, or post `id` with a freshly loaded document.
    ///
    /// An id with no matching post falls back to the directory.
    pub async fn render_blog(&self, id: Option<&str>, links: LinkStyle) -> Markup {
        let post = match id.map(|id| self.content.post(id)) {
            Some(Ok(post)) => Some(post),
            Some(Err(e)) => {
                debug!(error = %e, "blog_directory_fallback");
                None
            }
            None => None,
        };

        let Some(post) = post else {
            return render_guarded(links, || pages::blog::render_directory(&self.content, links));
        };

        let view = PostView::new();
        open_post(&view, self.documents.as_ref(), &post.id).await;
        let snapshot = view.snapshot();

        render_guarded(links, || {
            pages::blog::render_post(&self.content, post, &snapshot.phase, links)
        })
    }

    /// Mounts a map: fetches the boundary dataset and settles its state.
    pub async fn load_map(&self) -> MapState {
        let result = fetch_boundaries(&self.http, &self.content.map.boundaries_url).await;
        MapState::Loading.resolve(result)
    }

    /// Renders the travel page for `state` with place `id` selected.
    ///
    /// An unknown id renders with nothing selected.
    pub fn render_travel(&self, state: &MapState, id: Option<&str>, links: LinkStyle) -> Markup {
        let selection = MapSelection::select(id, &self.content.places);
        if let (Some(id), None) = (id, selection.id()) {
            debug!(place = %id, "unknown_place_selection_dropped");
        }

        render_guarded(links, || {
            pages::travel::render(&self.content, state, &selection, links)
        })
    }
}
