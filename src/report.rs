// Plain-text summaries of the catalog. Pure functions of the catalog, so
// printing them twice prints the same thing.
//
// `fmt::Write` into a `String` never fails, so the `writeln!` results below
// are dropped with `let _`.

use std::fmt::Write as _;

use crate::catalog::Catalog;

/// Hotspots listed by the `stats` command.
pub const STATS_TOP_HOTSPOTS: usize = 5;
/// Hotspots listed by the map program's recommendations.
pub const RECOMMENDED_HOTSPOTS: usize = 15;
/// Collection points listed after the recommendations.
pub const LISTED_COLLECTION_POINTS: usize = 8;

const DAILY_VALUE_PER_HOTSPOT: usize = 30;
const DAILY_REVENUE_PER_HOTSPOT: usize = 50;

/// Output of the chatbot's `stats` command.
pub fn chat_stats(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "📊 PERTH CONTAINER COLLECTION STATISTICS:");
    let _ = writeln!(out);
    let _ = writeln!(out, "💰 Collection Points: {}", catalog.collection_points().len());
    let _ = writeln!(out, "🗑️  Litter Hotspots: {}", catalog.hotspots().len());
    let _ = writeln!(
        out,
        "💵 Potential Daily Value: ${}+",
        catalog.hotspots().len() * DAILY_VALUE_PER_HOTSPOT
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "🏆 TOP DENSITY AREAS:");
    for (i, area) in catalog
        .hotspots_by_density()
        .into_iter()
        .take(STATS_TOP_HOTSPOTS)
        .enumerate()
    {
        let _ = writeln!(out, "  {}. {} - {}/10 density", i + 1, area.name, area.density);
    }
    out
}

/// Header printed by the map program before writing the page.
pub fn map_summary(catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🗺️  PERTH CONTAINER LITTER & CASH COLLECTION MAP");
    let _ = writeln!(out, "{}", "=".repeat(55));
    let _ = writeln!(out, "💰 Cash Collection Points: {}", catalog.collection_points().len());
    let _ = writeln!(out, "🗑️  High Litter Density Areas: {}", catalog.hotspots().len());
    let _ = writeln!(
        out,
        "💵 Potential Revenue: Up to ${}/day",
        catalog.hotspots().len() * DAILY_REVENUE_PER_HOTSPOT
    );
    out
}

/// The densest `limit` hotspots with their peak times and container types,
/// followed by the first few collection points.
pub fn top_recommendations(catalog: &Catalog, limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "🏆 TOP CONTAINER COLLECTION HOTSPOTS:");
    let _ = writeln!(out, "{}", "=".repeat(50));

    for (i, area) in catalog.hotspots_by_density().into_iter().take(limit).enumerate() {
        let _ = writeln!(
            out,
            "{:2}. {:<25} | Density: {}/10 | {}",
            i + 1,
            area.name,
            area.density,
            area.category.label()
        );
        let _ = writeln!(out, "    ⏰ {}", area.peak_times);
        let _ = writeln!(out, "    🥤 {}", area.container_types);
        let _ = writeln!(out);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "💰 NEAREST CASH COLLECTION POINTS:");
    let _ = writeln!(out, "{}", "=".repeat(40));
    for point in catalog.collection_points().iter().take(LISTED_COLLECTION_POINTS) {
        let _ = writeln!(out, "💵 {} ({})", point.name, point.category.label());
        let _ = writeln!(out, "   📍 {} | 🕒 {}", point.address, point.hours);
        let _ = writeln!(out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_stats() {
        let stats = chat_stats(&Catalog::perth());
        assert!(stats.contains("💰 Collection Points: 16\n"));
        assert!(stats.contains("🗑️  Litter Hotspots: 36\n"));
        assert!(stats.contains("💵 Potential Daily Value: $1080+\n"));
        assert!(stats.ends_with(
            "  1. Cottesloe Beach - 10/10 density\n\
             \x20 2. Optus Stadium Surrounds - 10/10 density\n\
             \x20 3. Northbridge Streets - 10/10 density\n\
             \x20 4. Scarborough Beach - 9/10 density\n\
             \x20 5. Fremantle Beach - 9/10 density\n"
        ));
    }

    #[test]
    fn test_chat_stats_idempotent() {
        let catalog = Catalog::perth();
        assert_eq!(chat_stats(&catalog), chat_stats(&catalog));
    }

    #[test]
    fn test_map_summary() {
        let summary = map_summary(&Catalog::perth());
        assert!(summary.contains("Cash Collection Points: 16"));
        assert!(summary.contains("High Litter Density Areas: 36"));
        assert!(summary.contains("Up to $1800/day"));
    }

    #[test]
    fn test_top_recommendations_layout() {
        let text = top_recommendations(&Catalog::perth(), RECOMMENDED_HOTSPOTS);
        assert!(text.contains(" 1. Cottesloe Beach           | Density: 10/10 | Beach\n"));
        assert!(text.contains("15. "));
        assert!(!text.contains("16. "));
        assert_eq!(text.matches("💵 ").count(), LISTED_COLLECTION_POINTS);
        assert!(text.contains("💵 Return-It Balcatta Drive-Thru (Drive Thru)\n   📍 Balcatta | 🕒 7am-6pm daily\n"));
        assert!(!text.contains("Scouts Recycling Wangara"));
    }

    #[test]
    fn test_empty_catalog() {
        let empty = Catalog::new(vec![], vec![], vec![]);
        let stats = chat_stats(&empty);
        assert!(stats.contains("Collection Points: 0"));
        assert!(stats.ends_with("🏆 TOP DENSITY AREAS:\n"));
    }
}
