//! Map component: load state, marker geometry and SVG rendering.

use maud::{Markup, html};

use super::{Boundaries, MapEvent, MapSelection, Projection};
use crate::content::{MapSettings, VisitedPlace};
use crate::error::SiteError;
use crate::routes::{LinkStyle, Route};

pub const LAND_FILL: &str = "#E6E4DD";
pub const BORDER_STROKE: &str = "#F4F3EF";
pub const MARKER_FILL: &str = "#D97757";
pub const SELECTED_FILL: &str = "#191919";
const PULSE_FILL: &str = "rgba(217, 119, 87, 0.3)";

const PULSE_RADIUS: f64 = 6.0;
const MARKER_RADIUS: f64 = 4.0;
const SELECTED_RADIUS: f64 = 6.0;

pub const MAP_UNAVAILABLE: &str = "Map data unavailable. Please refresh or try again later.";

/// Boundary dataset lifecycle for one map mount.
///
/// `Loading` resolves exactly once. `Ready` and `Error` are terminal;
/// retrying means mounting a new map.
#[derive(Debug, Clone, PartialEq)]
pub enum MapState {
    Loading,
    Ready(Boundaries),
    Error(SiteError),
}

impl MapState {
    /// Applies the outcome of the boundary fetch.
    ///
    /// Has no effect unless the state is still `Loading`.
    pub fn resolve(self, result: Result<Boundaries, SiteError>) -> Self {
        match self {
            MapState::Loading => match result {
                Ok(boundaries) => MapState::Ready(boundaries),
                Err(e) => MapState::Error(e),
            },
            settled => settled,
        }
    }

    /// Markers accept clicks only once boundaries are drawn.
    pub fn is_interactive(&self) -> bool {
        matches!(self, MapState::Ready(_))
    }
}

/// Drawn geometry of one visited place.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: &'static str,
    pub selected: bool,
}

/// Projects every place to a marker, skipping places that do not project.
pub fn place_markers(
    projection: &Projection,
    places: &[VisitedPlace],
    selection: &MapSelection,
) -> Vec<Marker> {
    places
        .iter()
        .filter_map(|place| {
            let (x, y) = projection.project(place.coordinates)?;
            let selected = selection.is_selected(&place.id);
            Some(Marker {
                id: place.id.clone(),
                name: place.name.clone(),
                x,
                y,
                radius: if selected { SELECTED_RADIUS } else { MARKER_RADIUS },
                fill: if selected { SELECTED_FILL } else { MARKER_FILL },
                selected,
            })
        })
        .collect()
}

/// Inputs for one map render.
pub struct MapView<'a> {
    pub state: &'a MapState,
    pub places: &'a [VisitedPlace],
    pub selection: &'a MapSelection,
    pub settings: &'a MapSettings,
}

impl MapView<'_> {
    /// Route reached by `event` from the current selection.
    fn target(&self, event: &MapEvent) -> Route {
        let next = self.selection.apply(event, self.places);
        Route::Travel(next.id().map(String::from))
    }
}

/// Renders the map for its current state.
///
/// The whole surface is redrawn on every render. Clicks are expressed as
/// links: each marker links to the selection its click produces, and a
/// background layer beneath the markers links to the cleared selection.
/// Marker and background anchors are siblings, so a marker click never
/// reaches the background.
pub fn render_map(view: &MapView<'_>, links: LinkStyle) -> Markup {
    let width = view.settings.width;
    let height = view.settings.height;

    let boundaries = match view.state {
        MapState::Error(_) => {
            return html! {
                div class="map-container map-error" style=(format!("height: {}px", height)) {
                    (MAP_UNAVAILABLE)
                }
            };
        }
        MapState::Loading => {
            return html! {
                div class="map-container" {
                    div class="map-loading" { "Loading Map..." }
                    svg class="world-map" width=(width) height=(height) xmlns="http://www.w3.org/2000/svg" {}
                }
            };
        }
        MapState::Ready(boundaries) => boundaries,
    };

    let projection = Projection::for_surface(width, height);
    let paths = boundaries.to_svg_paths(&projection);
    let markers = place_markers(&projection, view.places, view.selection);
    let background_href = view.target(&MapEvent::BackgroundClick).href(links);

    html! {
        div class="map-container" {
            svg class="world-map" width=(width) height=(height)
                viewBox=(format!("0 0 {} {}", width, height))
                xmlns="http://www.w3.org/2000/svg" {
                a href=(background_href) class="map-background" {
                    rect x="0" y="0" width=(width) height=(height) fill="transparent" {}
                }
                g class="map-boundaries" pointer-events="none" {
                    @for d in &paths {
                        path d=(d) fill=(LAND_FILL) stroke=(BORDER_STROKE) stroke-width="0.5" opacity="0.8" {}
                    }
                }
                g class="map-markers" {
                    @for marker in &markers {
                        @let href = view.target(&MapEvent::MarkerClick(marker.id.clone())).href(links);
                        g transform=(format!("translate({:.2}, {:.2})", marker.x, marker.y)) {
                            a href=(href) class=(if marker.selected { "map-marker selected" } else { "map-marker" })
                                data-place=(marker.id) aria-label=(marker.name) {
                                circle class="marker-pulse" r=(PULSE_RADIUS) fill=(PULSE_FILL) pointer-events="none" {}
                                circle class="marker-dot" r=(marker.radius) fill=(marker.fill)
                                    stroke=(BORDER_STROKE) stroke-width="1" {}
                            }
                        }
                    }
                }
            }
        }
    }
}
