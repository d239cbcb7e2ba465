//! Renders the catalog to a single self-contained Leaflet page.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use minijinja::{context, Environment};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{Catalog, CollectionCategory, CollectionPoint, Coordinate, LitterHotspot, PERTH_CENTER};

/// Output name used by the standalone map program.
pub const DEFAULT_MAP_FILENAME: &str = "perth_container_litter_cash_map.html";

const MAP_TEMPLATE: &str = include_str!("../templates/map.html");
const POINT_POPUP_TEMPLATE: &str = include_str!("../templates/point_popup.html");
const HOTSPOT_POPUP_TEMPLATE: &str = include_str!("../templates/hotspot_popup.html");

const INITIAL_ZOOM: u8 = 10;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Timestamped output name, one-second resolution: two maps rendered within
/// the same second share a name and the later one replaces the earlier.
pub fn timestamped_filename(at: NaiveDateTime) -> String {
    format!("perth_containers_{}.html", at.format("%Y%m%d_%H%M%S"))
}

#[derive(Serialize)]
struct PointMarker {
    lat: f64,
    lon: f64,
    color: &'static str,
    icon: &'static str,
    tooltip: String,
    popup: String,
}

#[derive(Serialize)]
struct HotspotMarker {
    lat: f64,
    lon: f64,
    radius: u32,
    fill_color: &'static str,
    tooltip: String,
    popup: String,
}

#[derive(Serialize)]
struct LegendEntry {
    icon: &'static str,
    color: &'static str,
    title: &'static str,
    note: &'static str,
}

fn legend() -> Vec<LegendEntry> {
    [
        (CollectionCategory::DriveThru, "Drive-Thru Depots", "Quick service"),
        (CollectionCategory::Automated, "Automated Depots", "24/7 access"),
        (CollectionCategory::Depot, "Scout Depots", "Community support"),
        (CollectionCategory::Rvm, "Reverse Vending", "Shopping centers"),
    ]
    .into_iter()
    .map(|(category, title, note)| LegendEntry {
        icon: category.marker_icon(),
        color: category.marker_color(),
        title,
        note,
    })
    .collect()
}

pub struct MapRenderer {
    env: Environment<'static>,
    center: Coordinate,
}

impl MapRenderer {
    pub fn new() -> Result<Self, MapError> {
        let mut env = Environment::new();
        env.add_template("map.html", MAP_TEMPLATE)?;
        env.add_template("point_popup.html", POINT_POPUP_TEMPLATE)?;
        env.add_template("hotspot_popup.html", HOTSPOT_POPUP_TEMPLATE)?;
        Ok(Self {
            env,
            center: PERTH_CENTER,
        })
    }

    pub fn render(&self, catalog: &Catalog) -> Result<String, MapError> {
        let points = catalog
            .collection_points()
            .iter()
            .map(|p| self.point_marker(p))
            .collect::<Result<Vec<_>, _>>()?;
        let hotspots = catalog
            .hotspots()
            .iter()
            .map(|h| self.hotspot_marker(h))
            .collect::<Result<Vec<_>, _>>()?;
        let heat: Vec<[f64; 3]> = catalog
            .hotspots()
            .iter()
            .map(|h| [h.coords.lat, h.coords.lon, f64::from(h.density)])
            .collect();

        let html = self.env.get_template("map.html")?.render(context! {
            title => "Perth Container Litter & Cash Collection Map",
            center => self.center,
            zoom => INITIAL_ZOOM,
            legend => legend(),
            points => points,
            hotspots => hotspots,
            heat => heat,
            heat_max => 10,
        })?;
        debug!(bytes = html.len(), "Rendered map page");
        Ok(html)
    }

    /// Renders and writes the page to `path`, replacing any existing file.
    pub fn save(&self, catalog: &Catalog, path: &Path) -> Result<(), MapError> {
        let html = self.render(catalog)?;
        fs::write(path, html).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Map saved");
        Ok(())
    }

    /// Writes the page into `dir` under a name derived from `at`.
    pub fn save_timestamped(
        &self,
        catalog: &Catalog,
        dir: &Path,
        at: NaiveDateTime,
    ) -> Result<PathBuf, MapError> {
        let path = dir.join(timestamped_filename(at));
        self.save(catalog, &path)?;
        Ok(path)
    }

    fn point_marker(&self, point: &CollectionPoint) -> Result<PointMarker, MapError> {
        let popup = self.env.get_template("point_popup.html")?.render(context! {
            name => point.name,
            hours => point.hours,
            refund_rate => point.refund_rate,
            address => point.address,
            category => point.category.label(),
        })?;
        Ok(PointMarker {
            lat: point.coords.lat,
            lon: point.coords.lon,
            color: point.category.marker_color(),
            icon: point.category.marker_icon(),
            tooltip: format!("💰 {} - {}", point.name, point.refund_rate),
            popup,
        })
    }

    fn hotspot_marker(&self, hotspot: &LitterHotspot) -> Result<HotspotMarker, MapError> {
        let popup = self.env.get_template("hotspot_popup.html")?.render(context! {
            name => hotspot.name,
            density => hotspot.density,
            peak_times => hotspot.peak_times,
            container_types => hotspot.container_types,
            specific_areas => hotspot.specific_areas,
            category => hotspot.category.label(),
        })?;
        Ok(HotspotMarker {
            lat: hotspot.coords.lat,
            lon: hotspot.coords.lon,
            radius: u32::from(hotspot.density) * 2,
            fill_color: hotspot.category.fill_color(),
            tooltip: format!("🗑️ {} - Density: {}/10", hotspot.name, hotspot.density),
            popup,
        })
    }
}
