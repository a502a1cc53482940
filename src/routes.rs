//! View routing and link generation.
//!
//! Routes are addressed by path, with the blog post and selected place
//! carried in query parameters (`/blog?id=…`, `/travel?place=…`) so they
//! can be deep-linked. The static build writes each route to its own file
//! instead, and links between files are relative.

use std::path::PathBuf;

use crate::content::is_valid_id;

/// A view of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Blog directory, or one post when an id is given.
    Blog(Option<String>),
    Publications,
    /// Travel map, with the selected place when an id is given.
    Travel(Option<String>),
}

/// How links between views are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    /// Root-absolute paths with query parameters, for the preview server.
    Query,
    /// Relative file paths from a page `depth` directories below the root.
    Static { depth: usize },
}

impl LinkStyle {
    /// Link style for files generated for `route`.
    pub fn for_route(route: &Route) -> Self {
        LinkStyle::Static {
            depth: route.depth(),
        }
    }

    /// Resolves a root relative asset path such as `assets/site.css`.
    pub fn asset(&self, path: &str) -> String {
        match self {
            LinkStyle::Query => format!("/{}", path),
            LinkStyle::Static { depth } => format!("{}{}", "../".repeat(*depth), path),
        }
    }

    /// Resolves a content image or file reference.
    ///
    /// Root-absolute sources (`/travel/x.jpg`) are rewritten like assets;
    /// anything else, such as a full URL, is returned unchanged.
    pub fn resource(&self, src: &str) -> String {
        match src.strip_prefix('/') {
            Some(path) => self.asset(path.trim_start_matches('/')),
            None => src.to_string(),
        }
    }
}

impl Route {
    /// Parses a request path and optional query string.
    ///
    /// Returns `None` for unknown paths. Unknown or malformed query values
    /// are dropped, leaving the directory or unselected view.
    pub fn parse(path: &str, query: Option<&str>) -> Option<Self> {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/index.html" => Some(Route::Home),
            "/blog" => Some(Route::Blog(query_param(query, "id"))),
            "/publications" => Some(Route::Publications),
            "/travel" => Some(Route::Travel(query_param(query, "place"))),
            _ => None,
        }
    }

    /// The route with any selected id removed.
    pub fn section(&self) -> Route {
        match self {
            Route::Blog(_) => Route::Blog(None),
            Route::Travel(_) => Route::Travel(None),
            other => other.clone(),
        }
    }

    /// Link to this route.
    pub fn href(&self, style: LinkStyle) -> String {
        match style {
            LinkStyle::Query => match self {
                Route::Home => "/".to_string(),
                Route::Blog(None) => "/blog".to_string(),
                Route::Blog(Some(id)) => format!("/blog?id={}", id),
                Route::Publications => "/publications".to_string(),
                Route::Travel(None) => "/travel".to_string(),
                Route::Travel(Some(id)) => format!("/travel?place={}", id),
            },
            LinkStyle::Static { depth } => {
                format!("{}{}", "../".repeat(depth), self.file_name())
            }
        }
    }

    /// Output file for the static build, relative to the site root.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(self.file_name())
    }

    /// Directory depth of the route's output file below the site root.
    pub fn depth(&self) -> usize {
        self.file_name().matches('/').count()
    }

    fn file_name(&self) -> String {
        match self {
            Route::Home => "index.html".to_string(),
            Route::Blog(None) => "blog/index.html".to_string(),
            Route::Blog(Some(id)) => format!("blog/{}.html", id),
            Route::Publications => "publications/index.html".to_string(),
            Route::Travel(None) => "travel/index.html".to_string(),
            Route::Travel(Some(id)) => format!("travel/{}.html", id),
        }
    }
}

/// Extracts `key` from a query string, keeping only well formed ids.
fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
        .filter(|v| is_valid_id(v))
        .map(String::from)
}
