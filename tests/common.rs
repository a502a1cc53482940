//! Shared test utilities for integration tests.
//!
//! Provides a helper that lays out a complete sample site in a temporary
//! directory: the TOML site file plus a public content directory with blog
//! documents, a small boundaries dataset and an image.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FIRST_POST: &str = "---
title: First Post
---
*This blog was drafted with help from a writing assistant.*

## Getting Started

Some **bold** words and a [link](https://example.org).

![](images/diagram.png)
*The pipeline*

### Details

Closing *thoughts*.";

/// Two squares: one around Iceland, one around Japan.
const WORLD: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon",
      "coordinates": [[[-25, 63], [-13, 63], [-13, 67], [-25, 67], [-25, 63]]]}},
    {"type": "Feature", "properties": {}, "geometry": {"type": "MultiPolygon",
      "coordinates": [[[[129, 31], [146, 31], [146, 45], [129, 45], [129, 31]]]]}}
  ]
}"#;

/// Sample site laid out on disk.
pub struct TestSite {
    pub dir: TempDir,
}

impl TestSite {
    pub fn site_file(&self) -> PathBuf {
        self.dir.path().join("site.toml")
    }

    pub fn content_dir(&self) -> PathBuf {
        self.dir.path().join("public")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("dist")
    }
}

/// Creates a temporary site with two posts, two places and local boundaries.
///
/// Post `draft` has no document on disk, so loading it falls back to the
/// error text. `boundaries` overrides the boundaries location; `None` points
/// at the bundled sample dataset.
///
/// # Errors
///
/// Returns error if any fixture file cannot be written
pub fn create_test_site(boundaries: Option<&str>) -> Result<TestSite> {
    let dir = TempDir::new()?;
    let public = dir.path().join("public");

    write_file(&public, "blogs/first-post.md", FIRST_POST)?;
    write_file(&public, "world.geojson", WORLD)?;
    write_file(&public, "travel/iceland/1.jpg", "jpeg")?;
    write_file(&public, ".DS_Store", "junk")?;

    let default_world = public.join("world.geojson").display().to_string();
    let boundaries = boundaries.unwrap_or(&default_world);
    let site = format!(
        r##"
[profile]
name = "Ada Lovelace"
tagline = "Engines and alignment"
bio = ["I study **robust** alignment."]

[[nav]]
label = "Home"
path = "/"

[[nav]]
label = "Blogs"
path = "/blog"

[[nav]]
label = "Publications"
path = "/publications"

[[nav]]
label = "Travel"
path = "/travel"

[[news]]
date = "2025/11/28"
content = "Back from Iceland!"
link = "#/travel"

[[publications]]
id = "scene"
title = "Read the Scene, Not the Script"
authors = ["Ada Lovelace", "Charles Babbage"]
year = 2025
preprint = true

[[posts]]
id = "first-post"
title = "First Post"
date = "2025/12/01"
generator = "Quill"

[[posts]]
id = "draft"
title = "Unfinished"
date = "2025/11/01"

[[places]]
id = "iceland"
name = "Iceland"
coordinates = [-19.0208, 64.9631]
date = "2025/11/24-2025/11/28"
description = "Blue Lagoon, Golden Circle."
images = ["/travel/iceland/1.jpg"]

[[places]]
id = "japan"
name = "Japan"
coordinates = [138.2529, 36.2048]
date = "2024/04/01"
description = "Cherry blossoms."
visit_count = 3

[map]
boundaries_url = '{}'
width = 650.0
height = 500.0
"##,
        boundaries
    );
    fs::write(dir.path().join("site.toml"), site)?;

    Ok(TestSite { dir })
}

/// Writes file content, creating parent directories.
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let full_path = root.join(path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(full_path, content)?;
    Ok(())
}
