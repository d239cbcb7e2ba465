//! Static knowledge base: Containers for Change collection points, litter
//! hotspots around Perth, and the keyword aliases used to find them.
//!
//! Everything here is built once from embedded literals and only ever read.

use serde::Serialize;

/// Centre of the Perth CBD, used to frame the map.
pub const PERTH_CENTER: Coordinate = Coordinate::new(-31.9505, 115.8605);

/// Refund paid for every eligible container.
pub const REFUND_RATE: &str = "10¢ per container";

/// A `(lat, lon)` pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Straight-line distance on the raw degree values. Not geodesic.
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        ((self.lat - other.lat).powi(2) + (self.lon - other.lon).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionCategory {
    DriveThru,
    Automated,
    Depot,
    Rvm,
}

impl CollectionCategory {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::DriveThru => "drive_thru",
            Self::Automated => "automated",
            Self::Depot => "depot",
            Self::Rvm => "rvm",
        }
    }

    /// Human label, e.g. "Drive Thru".
    pub fn label(&self) -> &'static str {
        match self {
            Self::DriveThru => "Drive Thru",
            Self::Automated => "Automated",
            Self::Depot => "Depot",
            Self::Rvm => "Rvm",
        }
    }

    pub fn marker_color(&self) -> &'static str {
        match self {
            Self::DriveThru => "green",
            Self::Automated => "darkgreen",
            Self::Depot => "orange",
            Self::Rvm => "blue",
        }
    }

    /// Font Awesome icon name for the map marker.
    pub fn marker_icon(&self) -> &'static str {
        match self {
            Self::DriveThru => "car",
            Self::Automated => "cog",
            Self::Depot => "home",
            Self::Rvm => "laptop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HotspotCategory {
    Beach,
    Park,
    Sports,
    Entertainment,
    Education,
    Shopping,
    Transport,
    Events,
    Markets,
    Residential,
}

impl HotspotCategory {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Beach => "beach",
            Self::Park => "park",
            Self::Sports => "sports",
            Self::Entertainment => "entertainment",
            Self::Education => "education",
            Self::Shopping => "shopping",
            Self::Transport => "transport",
            Self::Events => "events",
            Self::Markets => "markets",
            Self::Residential => "residential",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beach => "Beach",
            Self::Park => "Park",
            Self::Sports => "Sports",
            Self::Entertainment => "Entertainment",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Transport => "Transport",
            Self::Events => "Events",
            Self::Markets => "Markets",
            Self::Residential => "Residential",
        }
    }

    /// Circle fill colour on the map.
    pub fn fill_color(&self) -> &'static str {
        match self {
            Self::Beach => "lightblue",
            Self::Park => "lightgreen",
            Self::Sports => "red",
            Self::Entertainment => "purple",
            Self::Education => "orange",
            Self::Shopping => "pink",
            Self::Transport => "gray",
            Self::Events => "darkred",
            Self::Markets => "cadetblue",
            Self::Residential => "beige",
        }
    }
}

/// An official place that pays the refund for returned containers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CollectionPoint {
    pub name: &'static str,
    pub coords: Coordinate,
    pub category: CollectionCategory,
    pub address: &'static str,
    pub refund_rate: &'static str,
    pub hours: &'static str,
}

/// An area where discarded containers accumulate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LitterHotspot {
    pub name: &'static str,
    pub coords: Coordinate,
    pub category: HotspotCategory,
    /// Subjective score, 0 to 10.
    pub density: u8,
    pub peak_times: &'static str,
    pub container_types: &'static str,
    pub specific_areas: Option<&'static str>,
}

/// Lowercase keyword that points at one hotspot by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub keyword: &'static str,
    pub hotspot: &'static str,
}

/// The read-only catalog shared by the resolver, the gateway and the map.
#[derive(Debug, Clone)]
pub struct Catalog {
    collection_points: Vec<CollectionPoint>,
    hotspots: Vec<LitterHotspot>,
    aliases: Vec<Alias>,
}

impl Catalog {
    pub fn new(
        collection_points: Vec<CollectionPoint>,
        hotspots: Vec<LitterHotspot>,
        aliases: Vec<Alias>,
    ) -> Self {
        Self {
            collection_points,
            hotspots,
            aliases,
        }
    }

    /// The built-in Perth data set.
    pub fn perth() -> Self {
        Self::new(
            PERTH_COLLECTION_POINTS.to_vec(),
            PERTH_HOTSPOTS.to_vec(),
            PERTH_ALIASES
                .iter()
                .map(|&(keyword, hotspot)| Alias { keyword, hotspot })
                .collect(),
        )
    }

    pub fn collection_points(&self) -> &[CollectionPoint] {
        &self.collection_points
    }

    pub fn hotspots(&self) -> &[LitterHotspot] {
        &self.hotspots
    }

    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    pub fn hotspot_named(&self, name: &str) -> Option<&LitterHotspot> {
        self.hotspots.iter().find(|h| h.name == name)
    }

    /// Hotspots ordered by density, highest first. Equal densities keep catalog order.
    pub fn hotspots_by_density(&self) -> Vec<&LitterHotspot> {
        let mut sorted: Vec<&LitterHotspot> = self.hotspots.iter().collect();
        sorted.sort_by(|a, b| b.density.cmp(&a.density));
        sorted
    }
}

const fn point(
    name: &'static str,
    lat: f64,
    lon: f64,
    category: CollectionCategory,
    address: &'static str,
    hours: &'static str,
) -> CollectionPoint {
    CollectionPoint {
        name,
        coords: Coordinate::new(lat, lon),
        category,
        address,
        refund_rate: REFUND_RATE,
        hours,
    }
}

#[allow(clippy::too_many_arguments)]
const fn hotspot(
    name: &'static str,
    lat: f64,
    lon: f64,
    category: HotspotCategory,
    density: u8,
    peak_times: &'static str,
    container_types: &'static str,
    specific_areas: Option<&'static str>,
) -> LitterHotspot {
    LitterHotspot {
        name,
        coords: Coordinate::new(lat, lon),
        category,
        density,
        peak_times,
        container_types,
        specific_areas,
    }
}

use CollectionCategory::{Automated, Depot, DriveThru, Rvm};
use HotspotCategory::{
    Beach, Education, Entertainment, Events, Markets, Park, Residential, Shopping, Sports,
    Transport,
};

const DAILY: &str = "7am-6pm daily";
const ALWAYS_OPEN: &str = "24/7 access";
const LOCAL_HOURS: &str = "Check local hours";
const MALL_HOURS: &str = "Mall hours";

static PERTH_COLLECTION_POINTS: [CollectionPoint; 16] = [
    // Drive-through depots
    point("Return-It Balcatta Drive-Thru", -31.8700, 115.8300, DriveThru, "Balcatta", DAILY),
    point("Return-It Cockburn Drive-Thru", -32.1200, 115.8500, DriveThru, "Cockburn", DAILY),
    point("Return-It Shenton Park Drive-Thru", -31.9600, 115.8100, DriveThru, "Shenton Park", DAILY),
    point("Return-It Welshpool Drive-Thru", -31.9900, 115.9300, DriveThru, "Welshpool", DAILY),
    // Automated depots
    point("Return-It Malaga Automated", -31.8600, 115.8900, Automated, "Malaga", ALWAYS_OPEN),
    point("Return-It Butler/Clarkson Automated", -31.7200, 115.7000, Automated, "Butler/Clarkson", ALWAYS_OPEN),
    point("Return-It Bunbury Automated", -33.3267, 115.6347, Automated, "Bunbury", ALWAYS_OPEN),
    point("Return-It Geraldton Automated", -28.7774, 114.6147, Automated, "Geraldton", ALWAYS_OPEN),
    // Scout depots
    point("Scouts Recycling Malaga", -31.8600, 115.8900, Depot, "Malaga", LOCAL_HOURS),
    point("Scouts Recycling Wangara", -31.7800, 115.8300, Depot, "Wangara", LOCAL_HOURS),
    point("Scouts Recycling Kenwick", -32.0300, 115.9600, Depot, "Kenwick", LOCAL_HOURS),
    point("Scouts Recycling Cockburn", -32.1200, 115.8500, Depot, "Cockburn", LOCAL_HOURS),
    // Reverse vending machines
    point("Westfield Carousel RVM", -32.0177, 115.9344, Rvm, "Westfield Carousel", MALL_HOURS),
    point("Garden City Shopping Centre RVM", -32.0600, 115.8000, Rvm, "Garden City", MALL_HOURS),
    point("Westfield Innaloo RVM", -31.8950, 115.8050, Rvm, "Westfield Innaloo", MALL_HOURS),
    point("Lakeside Joondalup RVM", -31.7448, 115.7661, Rvm, "Lakeside Joondalup", MALL_HOURS),
];

static PERTH_HOTSPOTS: [LitterHotspot; 36] = [
    // Beaches
    hotspot(
        "Cottesloe Beach", -31.9959, 115.7581, Beach, 10,
        "Weekends, summer evenings",
        "Beer cans, soft drink bottles, water bottles",
        Some("Main beach area near pavilion, north end near groyne, around beach volleyball courts"),
    ),
    hotspot(
        "Scarborough Beach", -31.8944, 115.7581, Beach, 9,
        "Daily, especially weekends",
        "Mixed beverage containers, energy drinks",
        Some("Amphitheatre area, beachfront promenade, around surf club"),
    ),
    hotspot(
        "City Beach", -31.9400, 115.7600, Beach, 8,
        "Weekend afternoons",
        "Beer bottles, soft drinks",
        None,
    ),
    hotspot(
        "Hillarys Beach & Marina", -31.8194, 115.7372, Beach, 8,
        "Daily tourist traffic",
        "Restaurant/cafe containers, tourist drinks",
        None,
    ),
    hotspot(
        "Fremantle Beach", -32.0555, 115.7482, Beach, 9,
        "Market days, weekends",
        "Tourist containers, market drinks",
        Some("Bathers Beach, around fishing boat harbour, near markets"),
    ),
    hotspot(
        "Rockingham Beach", -32.2769, 115.7297, Beach, 7,
        "Family weekends, school holidays",
        "Family drink containers, juice boxes",
        None,
    ),
    // Parks
    hotspot(
        "Kings Park", -31.9590, 115.8331, Park, 9,
        "Events, festivals, weekends",
        "Event containers, picnic drinks",
        Some("Synergy Parkland, around DNA Tower, State War Memorial area"),
    ),
    hotspot(
        "Whiteman Park", -31.8200, 115.9100, Park, 7,
        "Weekends, school holidays",
        "Family containers, sports drinks",
        None,
    ),
    hotspot(
        "Hyde Park", -31.9450, 115.8550, Park, 8,
        "Festivals, weekend events",
        "Event beverages, food court drinks",
        None,
    ),
    // Sports venues
    hotspot(
        "Optus Stadium Surrounds", -31.9513, 115.8908, Sports, 10,
        "Post-game (AFL, cricket, concerts)",
        "Beer cans, soft drinks, water bottles",
        Some("Burswood Park, around train stations, walkways to stadium"),
    ),
    hotspot(
        "Perth Arena Area", -31.9481, 115.8614, Sports, 9,
        "Post-event evenings",
        "Entertainment event containers",
        None,
    ),
    hotspot(
        "HBF Park Surrounds", -31.9200, 115.8850, Sports, 8,
        "Post-match weekends",
        "Sports drinks, beer cans",
        None,
    ),
    hotspot(
        "WACA Ground Area", -31.9590, 115.8745, Sports, 8,
        "Cricket match days",
        "Beer cans, soft drinks",
        None,
    ),
    // Entertainment districts
    hotspot(
        "Northbridge Streets", -31.9477, 115.8537, Entertainment, 10,
        "Weekend nights, early mornings",
        "Beer bottles, energy drinks, pre-drinks",
        Some("William Street, James Street, Lake Street, Cultural Centre area"),
    ),
    hotspot(
        "Fremantle Entertainment District", -32.0555, 115.7482, Entertainment, 8,
        "Weekend evenings",
        "Craft beer bottles, tourist drinks",
        None,
    ),
    hotspot(
        "Leederville Precinct", -31.9356, 115.8413, Entertainment, 7,
        "Friday/Saturday nights",
        "Restaurant drinks, bar containers",
        None,
    ),
    hotspot(
        "Subiaco Entertainment Area", -31.9474, 115.8219, Entertainment, 7,
        "Weekend dining/nightlife",
        "Wine bottles, craft beer cans",
        None,
    ),
    // Universities
    hotspot(
        "UWA Campus & Surrounds", -31.9806, 115.8178, Education, 9,
        "Semester periods, parties",
        "Student drinks, party containers, energy drinks",
        Some("Hackett Drive, around student accommodation, near tavern"),
    ),
    hotspot(
        "Curtin University Area", -32.0023, 115.8957, Education, 9,
        "Academic year, student events",
        "Student beverages, sports drinks",
        Some("Around student housing, near tavern, campus green areas"),
    ),
    hotspot(
        "Murdoch University Surrounds", -32.0677, 115.8362, Education, 8,
        "Student events, orientation",
        "Campus drinks, student party containers",
        None,
    ),
    hotspot(
        "ECU Joondalup Campus", -31.7448, 115.7661, Education, 7,
        "Semester periods",
        "Student beverages, energy drinks",
        None,
    ),
    // Shopping centre perimeters
    hotspot(
        "Westfield Carousel Surrounds", -32.0177, 115.9344, Shopping, 8,
        "Daily shopping traffic",
        "Food court drinks, takeaway containers",
        None,
    ),
    hotspot(
        "Garden City Perimeter", -32.0600, 115.8000, Shopping, 8,
        "Weekend shopping",
        "Shopping beverages, food court overflow",
        None,
    ),
    hotspot(
        "Westfield Innaloo Area", -31.8950, 115.8050, Shopping, 7,
        "Cinema nights, weekends",
        "Cinema drinks, food court containers",
        None,
    ),
    hotspot(
        "Lakeside Joondalup Surrounds", -31.7448, 115.7661, Shopping, 7,
        "Weekend family shopping",
        "Family drinks, food court beverages",
        None,
    ),
    // Transport hubs
    hotspot(
        "Perth Airport Surrounds", -31.9403, 115.9669, Transport, 8,
        "Peak travel times",
        "Travel beverages, duty-free containers",
        None,
    ),
    hotspot(
        "Perth Train Station Area", -31.9505, 115.8605, Transport, 7,
        "Rush hours, weekends",
        "Commuter drinks, coffee cups with deposit",
        None,
    ),
    hotspot(
        "Elizabeth Quay Bus Area", -31.9565, 115.8614, Transport, 6,
        "Peak commuter times",
        "Commuter beverages",
        None,
    ),
    // Event venues
    hotspot(
        "Perth Convention Centre Area", -31.9565, 115.8614, Events, 8,
        "Post-conference/exhibition",
        "Conference beverages, networking drinks",
        None,
    ),
    hotspot(
        "Crown Perth Complex", -31.9731, 115.8781, Events, 9,
        "24/7, peak weekends",
        "Casino drinks, entertainment containers",
        None,
    ),
    hotspot(
        "Claremont Showground", -31.9850, 115.7800, Events, 9,
        "Show days, market weekends",
        "Fair drinks, market beverages",
        None,
    ),
    // Markets
    hotspot(
        "Fremantle Markets Area", -32.0555, 115.7482, Markets, 9,
        "Weekend market days",
        "Market beverages, tourist drinks, food vendor containers",
        None,
    ),
    hotspot(
        "Subiaco Farmers Market", -31.9474, 115.8219, Markets, 7,
        "Saturday mornings",
        "Coffee containers, fresh juice bottles",
        None,
    ),
    hotspot(
        "Kalamunda Markets", -31.9750, 116.0550, Markets, 6,
        "Weekend market days",
        "Local beverage containers",
        None,
    ),
    // Residential bin-day collections
    hotspot(
        "Claremont Residential", -31.9850, 115.7800, Residential, 6,
        "Bin collection days",
        "Household beverage containers",
        None,
    ),
    hotspot(
        "South Yarra Residential", -31.9200, 115.8400, Residential, 6,
        "Bin collection days",
        "Residential drinks, wine bottles",
        None,
    ),
];

// Checked in declaration order; the first keyword found in a query wins.
static PERTH_ALIASES: [(&str, &str); 36] = [
    ("cottesloe", "Cottesloe Beach"),
    ("cott", "Cottesloe Beach"),
    ("scarborough", "Scarborough Beach"),
    ("scarbs", "Scarborough Beach"),
    ("kings park", "Kings Park"),
    ("optus", "Optus Stadium Surrounds"),
    ("optus stadium", "Optus Stadium Surrounds"),
    ("northbridge", "Northbridge Streets"),
    ("fremantle", "Fremantle Beach"),
    ("freo", "Fremantle Beach"),
    ("uwa", "UWA Campus & Surrounds"),
    ("curtin", "Curtin University Area"),
    ("city beach", "City Beach"),
    ("hillarys", "Hillarys Beach & Marina"),
    ("rockingham", "Rockingham Beach"),
    ("whiteman", "Whiteman Park"),
    ("hyde park", "Hyde Park"),
    ("perth arena", "Perth Arena Area"),
    ("hbf park", "HBF Park Surrounds"),
    ("waca", "WACA Ground Area"),
    ("leederville", "Leederville Precinct"),
    ("subiaco", "Subiaco Entertainment Area"),
    ("murdoch", "Murdoch University Surrounds"),
    ("edith cowan", "ECU Joondalup Campus"),
    ("ecu joondalup", "ECU Joondalup Campus"),
    ("carousel", "Westfield Carousel Surrounds"),
    ("garden city", "Garden City Perimeter"),
    ("innaloo", "Westfield Innaloo Area"),
    ("lakeside", "Lakeside Joondalup Surrounds"),
    ("airport", "Perth Airport Surrounds"),
    ("train station", "Perth Train Station Area"),
    ("elizabeth quay", "Elizabeth Quay Bus Area"),
    ("convention centre", "Perth Convention Centre Area"),
    ("crown", "Crown Perth Complex"),
    ("showground", "Claremont Showground"),
    ("kalamunda", "Kalamunda Markets"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_perth_catalog_sizes() {
        let catalog = Catalog::perth();
        assert_eq!(catalog.collection_points().len(), 16);
        assert_eq!(catalog.hotspots().len(), 36);
        assert_eq!(catalog.aliases().len(), 36);
    }

    #[test]
    fn test_every_alias_points_at_a_hotspot() {
        let catalog = Catalog::perth();
        for alias in catalog.aliases() {
            assert!(
                catalog.hotspot_named(alias.hotspot).is_some(),
                "alias '{}' points at unknown hotspot '{}'",
                alias.keyword,
                alias.hotspot
            );
            assert_eq!(alias.keyword, alias.keyword.to_lowercase());
        }
    }

    #[test]
    fn test_densities_in_range() {
        for h in Catalog::perth().hotspots() {
            assert!(h.density <= 10, "{} has density {}", h.name, h.density);
        }
    }

    #[test]
    fn test_hotspot_names_unique() {
        let catalog = Catalog::perth();
        let names: HashSet<_> = catalog.hotspots().iter().map(|h| h.name).collect();
        assert_eq!(names.len(), catalog.hotspots().len());
    }

    #[test]
    fn test_every_point_pays_the_standard_rate() {
        assert!(Catalog::perth()
            .collection_points()
            .iter()
            .all(|p| p.refund_rate == REFUND_RATE));
    }

    #[test]
    fn test_specific_areas_carried_for_chatbot_locations() {
        let catalog = Catalog::perth();
        let with_areas = catalog
            .hotspots()
            .iter()
            .filter(|h| h.specific_areas.is_some())
            .count();
        assert_eq!(with_areas, 8);
        assert!(catalog
            .hotspot_named("Kings Park")
            .and_then(|h| h.specific_areas)
            .unwrap()
            .contains("DNA Tower"));
    }

    #[test]
    fn test_hotspots_by_density_is_stable() {
        let catalog = Catalog::perth();
        let top: Vec<&str> = catalog
            .hotspots_by_density()
            .iter()
            .take(5)
            .map(|h| h.name)
            .collect();
        assert_eq!(
            top,
            vec![
                "Cottesloe Beach",
                "Optus Stadium Surrounds",
                "Northbridge Streets",
                "Scarborough Beach",
                "Fremantle Beach",
            ]
        );
    }

    #[test]
    fn test_planar_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert_eq!(a.planar_distance(&b), 5.0);
        assert_eq!(b.planar_distance(&a), 5.0);
        assert_eq!(a.planar_distance(&a), 0.0);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(CollectionCategory::DriveThru.slug(), "drive_thru");
        assert_eq!(CollectionCategory::DriveThru.label(), "Drive Thru");
        assert_eq!(CollectionCategory::Rvm.marker_icon(), "laptop");
        assert_eq!(HotspotCategory::Markets.fill_color(), "cadetblue");
        assert_eq!(HotspotCategory::Residential.label(), "Residential");
    }
}
