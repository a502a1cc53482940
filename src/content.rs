//! Static site content loaded from the TOML site file.
//!
//! Everything the pages display besides blog documents and map boundaries
//! lives here: profile, navigation, research interests, publications,
//! news, blog post metadata and visited places. The records are read once
//! at startup and never mutated.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::SiteError;

/// Public world boundaries dataset used when the site file names none.
pub const DEFAULT_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/holtzy/D3-graph-gallery/master/DATA/world.geojson";

const DEFAULT_MAP_WIDTH: f64 = 1104.0;
const DEFAULT_MAP_HEIGHT: f64 = 500.0;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: Option<String>,
    /// Bio paragraphs, inline markdown allowed.
    #[serde(default)]
    pub bio: Vec<String>,
    #[serde(default)]
    pub scholar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResearchInterest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub period: Option<String>,
    /// Extra CSS classes for the interest card.
    #[serde(default)]
    pub color_theme: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(default)]
    pub venue: Option<String>,
    pub year: u16,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub preprint: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsItem {
    pub date: String,
    pub content: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Blog post metadata. The document body is fetched per view.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub generator: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisitedPlace {
    pub id: String,
    pub name: String,
    /// `[longitude, latitude]` in degrees.
    pub coordinates: [f64; 2],
    pub date: String,
    pub description: String,
    #[serde(default = "default_visit_count")]
    pub visit_count: u32,
    #[serde(default)]
    pub images: Vec<String>,
}

fn default_visit_count() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapSettings {
    /// URL or local path of the GeoJSON boundaries dataset.
    #[serde(default = "default_boundaries_url")]
    pub boundaries_url: String,
    /// Drawing surface width in pixels, fixed at render time.
    #[serde(default = "default_map_width")]
    pub width: f64,
    #[serde(default = "default_map_height")]
    pub height: f64,
}

fn default_boundaries_url() -> String {
    DEFAULT_BOUNDARIES_URL.to_string()
}

fn default_map_width() -> f64 {
    DEFAULT_MAP_WIDTH
}

fn default_map_height() -> f64 {
    DEFAULT_MAP_HEIGHT
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            boundaries_url: default_boundaries_url(),
            width: DEFAULT_MAP_WIDTH,
            height: DEFAULT_MAP_HEIGHT,
        }
    }
}

/// All static records injected into the renderer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub research: Vec<ResearchInterest>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub news: Vec<NewsItem>,
    #[serde(default)]
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub places: Vec<VisitedPlace>,
    #[serde(default)]
    pub map: MapSettings,
}

impl SiteContent {
    /// Reads and validates the site file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML for the
    /// content schema, or fails [`SiteContent::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read site file: {}", path.display()))?;
        let content = Self::from_toml(&raw)
            .with_context(|| format!("Invalid site file: {}", path.display()))?;
        Ok(content)
    }

    /// Parses and validates site content from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let content: SiteContent = toml::from_str(raw).context("Failed to parse TOML")?;
        content.validate()?;
        Ok(content)
    }

    /// Checks identifiers and coordinates.
    ///
    /// Post and place ids become file names and query values, so they are
    /// restricted to ASCII alphanumerics, `-` and `_`, and must be unique.
    ///
    /// # Errors
    ///
    /// Returns error on an empty, malformed or duplicate id, or on a
    /// coordinate outside longitude [-180, 180] / latitude [-90, 90].
    pub fn validate(&self) -> Result<()> {
        check_ids("post", self.posts.iter().map(|p| p.id.as_str()))?;
        check_ids("place", self.places.iter().map(|p| p.id.as_str()))?;

        for place in &self.places {
            let [lon, lat] = place.coordinates;
            if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
                bail!(
                    "Place '{}' has out of range coordinates [{}, {}]",
                    place.id,
                    lon,
                    lat
                );
            }
        }

        if !(self.map.width > 0.0 && self.map.height > 0.0) {
            bail!("Map width and height must be positive");
        }

        Ok(())
    }

    /// Looks up a blog post by id.
    pub fn post(&self, id: &str) -> Result<&BlogPost, SiteError> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SiteError::NotFound {
                kind: "post",
                id: id.to_string(),
            })
    }

    /// Looks up a visited place by id.
    pub fn place(&self, id: &str) -> Result<&VisitedPlace, SiteError> {
        self.places
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SiteError::NotFound {
                kind: "place",
                id: id.to_string(),
            })
    }
}

/// Returns true when `id` is usable as a file name and query value.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn check_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !is_valid_id(id) {
            bail!("Invalid {} id: '{}'", kind, id);
        }
        if !seen.insert(id) {
            bail!("Duplicate {} id: '{}'", kind, id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[profile]
name = "Ada Lovelace"
tagline = "Analytical engines"
bio = ["I study **engines**."]

[[nav]]
label = "Home"
path = "/"

[[posts]]
id = "first-post"
title = "First"
date = "2025/12/01"
generator = "Quill"

[[places]]
id = "iceland"
name = "Iceland"
coordinates = [-19.0208, 64.9631]
date = "2025/11/24-2025/11/28"
description = "Blue Lagoon."
images = ["/travel/iceland/1.jpg"]
"#;

    #[test]
    fn test_from_toml_parses_sample() {
        // Act
        let content = SiteContent::from_toml(SAMPLE).expect("sample should parse");

        // Assert
        assert_eq!(content.profile.name, "Ada Lovelace");
        assert_eq!(content.nav.len(), 1);
        assert_eq!(content.posts[0].generator.as_deref(), Some("Quill"));
        assert_eq!(content.places[0].visit_count, 1, "visit count defaults to 1");
        assert_eq!(content.map.boundaries_url, DEFAULT_BOUNDARIES_URL);
        assert_eq!(content.map.height, 500.0);
    }

    #[test]
    fn test_duplicate_post_ids_rejected() {
        // Arrange
        let raw = r#"
[profile]
name = "A"

[[posts]]
id = "same"
title = "One"
date = "d"

[[posts]]
id = "same"
title = "Two"
date = "d"
"#;

        // Act
        let result = SiteContent::from_toml(raw);

        // Assert
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Duplicate post id"));
    }

    #[test]
    fn test_invalid_id_rejected() {
        let raw = r#"
[profile]
name = "A"

[[places]]
id = "../etc"
name = "Nowhere"
coordinates = [0.0, 0.0]
date = "d"
description = "x"
"#;

        assert!(SiteContent::from_toml(raw).is_err());
    }

    #[test]
    fn test_out_of_range_coordinates_rejected() {
        let raw = r#"
[profile]
name = "A"

[[places]]
id = "mars"
name = "Mars"
coordinates = [0.0, 123.0]
date = "d"
description = "x"
"#;

        let err = SiteContent::from_toml(raw).unwrap_err();
        assert!(format!("{:#}", err).contains("out of range"));
    }

    #[test]
    fn test_lookup_not_found() {
        // Arrange
        let content = SiteContent::from_toml(SAMPLE).unwrap();

        // Act & Assert
        assert!(content.post("first-post").is_ok());
        assert_eq!(
            content.post("nope").unwrap_err(),
            SiteError::NotFound {
                kind: "post",
                id: "nope".to_string()
            }
        );
        assert!(content.place("iceland").is_ok());
        assert!(content.place("atlantis").is_err());
    }

    #[test]
    fn test_is_valid_id() {
        assert!(is_valid_id("a-supervision-gaming"));
        assert!(is_valid_id("post_2"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("a b"));
        assert!(!is_valid_id("a/b"));
    }
}
