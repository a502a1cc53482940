//! Marker selection state.

use crate::content::VisitedPlace;

/// Pointer events on the map surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    /// A marker was clicked. The event does not reach the background.
    MarkerClick(String),
    /// The surface was clicked outside any marker.
    BackgroundClick,
}

/// The currently selected place, if any.
///
/// A selection always names a place present in the collection it was
/// built against: constructing or applying with an unknown id yields an
/// empty selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSelection {
    selected: Option<String>,
}

impl MapSelection {
    pub fn none() -> Self {
        Self::default()
    }

    /// Selects `id` if it names one of `places`.
    pub fn select(id: Option<&str>, places: &[VisitedPlace]) -> Self {
        let selected = id
            .filter(|id| places.iter().any(|p| p.id == *id))
            .map(String::from);
        Self { selected }
    }

    /// Returns the selection that results from `event`.
    pub fn apply(&self, event: &MapEvent, places: &[VisitedPlace]) -> Self {
        match event {
            MapEvent::MarkerClick(id) => Self::select(Some(id), places),
            MapEvent::BackgroundClick => Self::none(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Resolves the selected place record.
    pub fn place<'a>(&self, places: &'a [VisitedPlace]) -> Option<&'a VisitedPlace> {
        let id = self.selected.as_deref()?;
        places.iter().find(|p| p.id == id)
    }
}
