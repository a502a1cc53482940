//! Travel gallery page generation

use maud::{Markup, html};

use crate::components::layout::page_wrapper;
use crate::content::{SiteContent, VisitedPlace};
use crate::geo::{MapSelection, MapState, MapView, render_map};
use crate::routes::{LinkStyle, Route};

/// Generates the travel page for one selection state
///
/// Renders the map, its legend, and either the selected place's details
/// with its photo gallery or a prompt to pick a marker.
///
/// # Arguments
///
/// * `content`: Site content with visited places and map settings
/// * `state`: Boundary load state for this map mount
/// * `selection`: Currently selected place
/// * `links`: Link style for marker and navigation links
///
/// # Returns
///
/// Complete HTML page as Markup
pub fn render(
    content: &SiteContent,
    state: &MapState,
    selection: &MapSelection,
    links: LinkStyle,
) -> Markup {
    let route = Route::Travel(selection.id().map(String::from));
    let view = MapView {
        state,
        places: &content.places,
        selection,
        settings: &content.map,
    };

    page_wrapper(
        content,
        &route,
        links,
        "Travel Gallery",
        html! {
            section.page-intro.centered {
                h1.page-title { "Travel Gallery" }
                p.page-lede {
                    "A record of my journey around the globe. Select a marked location to view details."
                }
            }

            div.map-frame {
                (render_map(&view, links))
                div.map-legend {
                    span.legend-item { span.legend-dot.visited {} " Visited" }
                    span.legend-item { span.legend-dot.selected {} " Selected" }
                }
            }

            @match selection.place(&content.places) {
                Some(place) => { (place_details(place, links)) }
                None => {
                    div.empty-state {
                        p { "Select a marker on the map to view my journey." }
                    }
                }
            }
        },
    )
}

fn place_details(place: &VisitedPlace, links: LinkStyle) -> Markup {
    let times = if place.visit_count == 1 { "time" } else { "times" };

    html! {
        div.place-details {
            div.place-header {
                div {
                    div.place-label {
                        i.ph.ph-map-pin {}
                        span { (place.name) }
                    }
                    h2.place-name { (place.name) }
                    div.place-meta {
                        span.place-date {
                            i.ph.ph-calendar {}
                            " " (place.date)
                        }
                        span.place-visits {
                            i.ph.ph-hash {}
                            " Visited " (place.visit_count) " " (times)
                        }
                    }
                }
                p.place-description { (place.description) }
            }

            div.place-gallery {
                div.gallery-label {
                    i.ph.ph-camera {}
                    " Gallery (" (place.images.len()) " photos)"
                }
                div.gallery-scroll {
                    @for (i, image) in place.images.iter().enumerate() {
                        div.gallery-item {
                            img src=(links.resource(image)) alt=(format!("{} scene {}", place.name, i + 1)) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}
