//! Travel map: boundary background, place markers and selection.

mod boundaries;
mod map;
mod projection;
mod selection;

pub use boundaries::{Boundaries, Polygon, fetch_boundaries};
pub use map::{MAP_UNAVAILABLE, MapState, MapView, Marker, place_markers, render_map};
pub use projection::Projection;
pub use selection::{MapEvent, MapSelection};
