//! Integration tests for the static build.

mod common;

use anyhow::Result;
use folio::{DirectorySource, LOAD_ERROR_TEXT, Site, SiteContent, build_site};
use std::fs;
use std::sync::Arc;

use common::{TestSite, create_test_site};

fn load_site(test_site: &TestSite) -> Result<Site> {
    let content = SiteContent::load(&test_site.site_file())?;
    Ok(Site::new(
        content,
        Arc::new(DirectorySource::new(test_site.content_dir())),
        reqwest::Client::new(),
    ))
}

#[tokio::test]
async fn test_build_writes_every_route() -> Result<()> {
    // Arrange
    let test_site = create_test_site(None)?;
    let site = load_site(&test_site)?;
    let output = test_site.output_dir();

    // Act
    let summary = build_site(&site, &test_site.content_dir(), &output).await?;

    // Assert
    for page in [
        "index.html",
        "publications/index.html",
        "blog/index.html",
        "blog/first-post.html",
        "blog/draft.html",
        "travel/index.html",
        "travel/iceland.html",
        "travel/japan.html",
    ] {
        assert!(output.join(page).exists(), "{} should be generated", page);
    }
    assert_eq!(summary.pages, 8);
    assert!(output.join("assets/site.css").exists());
    assert!(output.join("blogs/first-post.md").exists());
    assert!(output.join("travel/iceland/1.jpg").exists());
    assert!(!output.join(".DS_Store").exists());

    Ok(())
}

#[tokio::test]
async fn test_built_post_renders_document_blocks() -> Result<()> {
    // Arrange
    let test_site = create_test_site(None)?;
    let site = load_site(&test_site)?;
    let output = test_site.output_dir();

    // Act
    build_site(&site, &test_site.content_dir(), &output).await?;

    // Assert
    let post = fs::read_to_string(output.join("blog/first-post.html"))?;
    assert!(post.contains(r#"<div class="post-disclaimer">"#));
    assert!(post.contains(r#"<h2 class="post-heading">Getting Started</h2>"#));
    assert!(post.contains(r#"<h3 class="post-subheading">Details</h3>"#));
    assert!(
        post.contains(concat!(
            "Some **bold** words and a ",
            r#"<a href="https://example.org" target="_blank" rel="noreferrer" class="inline-link">link</a>"#
        )),
        "a link in the line leaves other emphasis literal"
    );
    assert!(post.contains(r#"src="../images/diagram.png" alt="Blog illustration""#));
    assert!(post.contains("<figcaption>The pipeline</figcaption>"));
    assert!(post.contains("<em>thoughts</em>"));
    assert!(!post.contains("title: First Post"), "frontmatter is stripped");
    assert!(post.contains(r#"href="../assets/site.css""#));

    let draft = fs::read_to_string(output.join("blog/draft.html"))?;
    assert!(draft.contains(LOAD_ERROR_TEXT));

    Ok(())
}

#[tokio::test]
async fn test_built_travel_pages_reflect_selection() -> Result<()> {
    // Arrange
    let test_site = create_test_site(None)?;
    let site = load_site(&test_site)?;
    let output = test_site.output_dir();

    // Act
    build_site(&site, &test_site.content_dir(), &output).await?;

    // Assert
    let index = fs::read_to_string(output.join("travel/index.html"))?;
    assert!(index.contains("Select a marker on the map to view my journey."));
    assert_eq!(index.matches("<path d=").count(), 2, "one path per polygon");
    assert!(!index.contains("map-marker selected"));

    let japan = fs::read_to_string(output.join("travel/japan.html"))?;
    assert_eq!(japan.matches("map-marker selected").count(), 1);
    assert!(japan.contains("Visited 3 times"));
    assert!(japan.contains("Gallery (0 photos)"));

    let iceland = fs::read_to_string(output.join("travel/iceland.html"))?;
    assert!(iceland.contains(r#"src="../travel/iceland/1.jpg""#));
    assert!(
        japan.contains(r#"<a href="../travel/index.html" class="map-background">"#),
        "background click clears selection"
    );

    Ok(())
}

#[tokio::test]
async fn test_unreachable_boundaries_render_error_state() -> Result<()> {
    // Arrange
    let test_site = create_test_site(Some("/nonexistent/world.geojson"))?;
    let site = load_site(&test_site)?;
    let output = test_site.output_dir();

    // Act
    let summary = build_site(&site, &test_site.content_dir(), &output).await?;

    // Assert
    assert_eq!(summary.pages, 8, "map failure never fails the build");
    let travel = fs::read_to_string(output.join("travel/iceland.html"))?;
    assert!(travel.contains("Map data unavailable. Please refresh or try again later."));
    assert!(!travel.contains("map-marker"));
    assert!(travel.contains("Visited 1 time"), "details still render");

    Ok(())
}

#[tokio::test]
async fn test_home_links_are_relative() -> Result<()> {
    let test_site = create_test_site(None)?;
    let site = load_site(&test_site)?;
    let output = test_site.output_dir();

    build_site(&site, &test_site.content_dir(), &output).await?;

    let home = fs::read_to_string(output.join("index.html"))?;
    assert!(home.contains(r#"href="assets/site.css""#));
    assert!(home.contains(r#"href="travel/index.html""#));
    assert!(home.contains(r#"<a class="nav-link active" href="index.html">Home</a>"#));
    assert!(home.contains("<strong>robust</strong>"));

    Ok(())
}
