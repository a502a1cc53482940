//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const NAV: &str = include_str!("../assets/components/nav.css");

const HOME_PAGE: &str = include_str!("../assets/page-home.css");
const BLOG_PAGE: &str = include_str!("../assets/page-blog.css");
const PUBLICATIONS_PAGE: &str = include_str!("../assets/page-publications.css");
const TRAVEL_PAGE: &str = include_str!("../assets/page-travel.css");
const FAILURE_PAGE: &str = include_str!("../assets/page-failure.css");

/// Stylesheet path every page links, relative to the site root.
pub const STYLESHEET: &str = "assets/site.css";

const PARTS: &[&str] = &[
    BASE,
    LAYOUT,
    NAV,
    HOME_PAGE,
    BLOG_PAGE,
    PUBLICATIONS_PAGE,
    TRAVEL_PAGE,
    FAILURE_PAGE,
];

/// Returns the single stylesheet shared by all pages.
pub fn bundled_css() -> String {
    PARTS.join("\n")
}

/// Writes all bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!("Failed to create assets directory: {}", assets_dir.display())
    })?;
    write_bundled(assets_dir, "site.css", PARTS)
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
