//! The `City` entity.

use std::borrow::Cow;
use std::collections::BTreeMap;

use atlas_core::RoadId;

/// A named graph vertex.
///
/// The name is an owned octet string (validated on creation — see
/// [`atlas_core::is_valid_city_name`]); it may contain arbitrary non-control,
/// non-`;` bytes, so it is stored as raw bytes rather than `str`.
///
/// Fields are `pub` for direct access on hot paths.  Do not construct
/// directly; cities are created through
/// [`RoadGraph::get_or_add_city`](crate::RoadGraph::get_or_add_city).
pub struct City {
    /// The city's name, owned.
    pub name: Box<[u8]>,

    /// Ordered neighbour map: name of the other endpoint → the unique road
    /// connecting to it.  Byte-wise lexicographic iteration order.
    pub neighbours: BTreeMap<Box<[u8]>, RoadId>,
}

impl City {
    pub(crate) fn new(name: &[u8]) -> City {
        City {
            name: name.into(),
            neighbours: BTreeMap::new(),
        }
    }

    /// Degree of this city (number of incident roads).
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Lossy UTF-8 view of the name, for log and error messages only.
    /// Wire output always uses the raw bytes.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }
}
