//! Blog document loading and the post reader's view state.
//!
//! Documents are fetched per view from a [`DocumentSource`]. A failed fetch
//! never propagates: the reader shows [`LOAD_ERROR_TEXT`] instead. When
//! posts are requested in quick succession, only the most recent request
//! may update the view.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::error::SiteError;
use crate::markdown::strip_frontmatter;

/// Text shown in place of a document that could not be loaded.
pub const LOAD_ERROR_TEXT: &str = "Error loading blog content.";

/// Where blog documents come from.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches the raw markdown of post `id`.
    async fn fetch(&self, id: &str) -> Result<String, SiteError>;
}

/// Reads `blogs/{id}.md` below a content directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentSource for DirectorySource {
    async fn fetch(&self, id: &str) -> Result<String, SiteError> {
        let path = self.root.join("blogs").join(format!("{}.md", id));
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| SiteError::fetch(path.display().to_string(), e))
    }
}

/// Requests `GET {base}/blogs/{id}.md` from a web origin.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base: String,
}

impl HttpSource {
    pub fn new(client: reqwest::Client, base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { client, base }
    }

    pub fn document_url(&self, id: &str) -> String {
        format!("{}/blogs/{}.md", self.base, id)
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, id: &str) -> Result<String, SiteError> {
        let url = self.document_url(id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SiteError::fetch(&url, e))?;
        response.text().await.map_err(|e| SiteError::fetch(&url, e))
    }
}

/// Fetches a post and strips its frontmatter.
///
/// Any fetch failure is logged and replaced by [`LOAD_ERROR_TEXT`].
pub async fn load_document(source: &dyn DocumentSource, id: &str) -> String {
    match source.fetch(id).await {
        Ok(raw) => strip_frontmatter(&raw),
        Err(e) => {
            warn!(post = %id, error = %e, "blog_load_failed");
            LOAD_ERROR_TEXT.to_string()
        }
    }
}

/// Identifies one document request issued by a [`PostView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostPhase {
    /// Directory view, no post open.
    Idle,
    Loading,
    Loaded(String),
}

/// What the reader currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSnapshot {
    pub post_id: Option<String>,
    pub phase: PostPhase,
}

#[derive(Debug)]
struct ViewInner {
    latest: u64,
    snapshot: PostSnapshot,
}

/// Reader state with last-request-wins resolution.
///
/// Every request issues a new ticket. A document result is
/// applied only if its ticket is still the latest one, so a slow response
/// for an earlier post cannot overwrite a newer one.
#[derive(Debug)]
pub struct PostView {
    inner: Mutex<ViewInner>,
}

impl Default for PostView {
    fn default() -> Self {
        Self::new()
    }
}

impl PostView {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(ViewInner {
                latest: 0,
                snapshot: PostSnapshot {
                    post_id: None,
                    phase: PostPhase::Idle,
                },
            }),
        }
    }

    /// Opens post `id` in the loading phase and returns its ticket.
    pub fn request(&self, id: &str) -> Ticket {
        let mut inner = self.inner.lock();
        inner.latest += 1;
        inner.snapshot = PostSnapshot {
            post_id: Some(id.to_string()),
            phase: PostPhase::Loading,
        };
        Ticket(inner.latest)
    }

    /// Applies a document result. Returns false if `ticket` is stale.
    pub fn resolve(&self, ticket: Ticket, content: String) -> bool {
        let mut inner = self.inner.lock();
        if ticket.0 != inner.latest {
            debug!(ticket = ticket.0, latest = inner.latest, "stale_document_dropped");
            return false;
        }
        inner.snapshot.phase = PostPhase::Loaded(content);
        true
    }

    pub fn snapshot(&self) -> PostSnapshot {
        self.inner.lock().snapshot.clone()
    }
}

/// Requests post `id` on `view`, loads it, and applies the result.
///
/// Returns whether the loaded document reached the view.
pub async fn open_post(view: &PostView, source: &dyn DocumentSource, id: &str) -> bool {
    let ticket = view.request(id);
    let content = load_document(source, id).await;
    view.resolve(ticket, content)
}
