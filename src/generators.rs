//! Static build of every route into an output directory.

use anyhow::{Context, Result};
use maud::Markup;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::assets::write_css_assets;
use crate::routes::{LinkStyle, Route};
use crate::site::Site;

/// Counts reported after a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub files_copied: usize,
}

/// Generates the complete static site.
///
/// Copies the public content directory into `output`, writes the bundled
/// stylesheet, then renders one file per route: the home and publication
/// pages, the blog directory and every post, and the travel page for every
/// selection state. The boundary dataset is fetched once and shared by all
/// travel pages.
///
/// # Arguments
///
/// * `site`: Site to render
/// * `content_dir`: Public files (blog documents, images) copied verbatim
/// * `output`: Output directory, created if missing
///
/// # Returns
///
/// Number of pages written and files copied
///
/// # Errors
///
/// Returns error if the output directory cannot be created or any file
/// cannot be copied or written. Fetch failures never fail the build; they
/// render as the affected view's error state.
pub async fn build_site(site: &Site, content_dir: &Path, output: &Path) -> Result<BuildSummary> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;

    let mut summary = BuildSummary::default();

    if content_dir.is_dir() {
        let skip = output.canonicalize().ok();
        summary.files_copied = copy_tree(content_dir, output, skip.as_deref())
            .with_context(|| format!("Failed to copy {}", content_dir.display()))?;
    } else {
        debug!(dir = %content_dir.display(), "content_dir_missing");
    }

    write_css_assets(&output.join("assets"))?;

    let content = site.content();

    for route in [Route::Home, Route::Publications] {
        let html = site.render(&route, LinkStyle::for_route(&route)).await;
        write_page(output, &route, html)?;
        summary.pages += 1;
    }

    let directory = Route::Blog(None);
    let html = site.render_blog(None, LinkStyle::for_route(&directory)).await;
    write_page(output, &directory, html)?;
    summary.pages += 1;

    for post in &content.posts {
        let route = Route::Blog(Some(post.id.clone()));
        let html = site.render_blog(Some(&post.id), LinkStyle::for_route(&route)).await;
        write_page(output, &route, html)?;
        summary.pages += 1;
    }

    let state = site.load_map().await;
    let travel_routes = std::iter::once(None)
        .chain(content.places.iter().map(|place| Some(place.id.as_str())));
    for id in travel_routes {
        let route = Route::Travel(id.map(String::from));
        let html = site.render_travel(&state, id, LinkStyle::for_route(&route));
        write_page(output, &route, html)?;
        summary.pages += 1;
    }

    info!(
        pages = summary.pages,
        files_copied = summary.files_copied,
        output = %output.display(),
        "site_built"
    );

    Ok(summary)
}

fn write_page(output: &Path, route: &Route, html: Markup) -> Result<()> {
    let path = output.join(route.output_path());
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&path, html.into_string())
        .with_context(|| format!("Failed to write page to {}", path.display()))?;

    info!(path = %path.display(), "page_generated");
    Ok(())
}

/// Recursively copies `src` into `dst`, skipping dotfiles and `skip`.
fn copy_tree(src: &Path, dst: &Path, skip: Option<&Path>) -> Result<usize> {
    let mut copied = 0;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let path = entry.path();

        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if skip.is_some() && path.canonicalize().ok().as_deref() == skip {
            continue;
        }

        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_tree(&path, &target, skip)?;
        } else {
            fs::copy(&path, &target)?;
            copied += 1;
        }
    }

    Ok(copied)
}
