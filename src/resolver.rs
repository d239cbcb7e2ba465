//! Free-text location lookup and nearest collection point ranking.

use crate::catalog::{Catalog, CollectionPoint, Coordinate, LitterHotspot};

/// How many collection points are suggested for a location.
pub const DEFAULT_NEARBY_LIMIT: usize = 3;

/// A collection point paired with its planar distance from a query coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyPoint<'a> {
    pub point: &'a CollectionPoint,
    pub distance: f64,
}

/// Finds the hotspot a query is talking about.
///
/// Aliases are tried first, in declared order, as plain substrings of the
/// lowercased query. Failing that, the query is split on whitespace and the
/// first hotspot whose lowercased name contains any of the tokens is
/// returned. This is deliberately loose: a common word such as "area" picks
/// the first hotspot with "area" in its name.
pub fn find_location<'a>(catalog: &'a Catalog, query: &str) -> Option<&'a LitterHotspot> {
    let query = query.to_lowercase();

    for alias in catalog.aliases() {
        if query.contains(alias.keyword) {
            // A dangling alias falls through to the next one.
            if let Some(hotspot) = catalog.hotspot_named(alias.hotspot) {
                return Some(hotspot);
            }
        }
    }

    let tokens: Vec<&str> = query.split_whitespace().collect();
    catalog.hotspots().iter().find(|hotspot| {
        let name = hotspot.name.to_lowercase();
        tokens.iter().any(|token| name.contains(token))
    })
}

/// Ranks collection points by straight-line distance from `from`.
///
/// Ties keep catalog order. At most `limit` points are returned.
pub fn nearest_collection_points<'a>(
    catalog: &'a Catalog,
    from: &Coordinate,
    limit: usize,
) -> Vec<NearbyPoint<'a>> {
    let mut ranked: Vec<NearbyPoint<'a>> = catalog
        .collection_points()
        .iter()
        .map(|point| NearbyPoint {
            point,
            distance: from.planar_distance(&point.coords),
        })
        .collect();

    // sort_by is stable, which is what keeps ties in catalog order
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked.truncate(limit);
    ranked
}
