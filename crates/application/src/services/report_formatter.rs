//! Location report formatting
//!
//! Pure functions turning a [`LocationReport`] into terminal-friendly text.

use domain::{GeoLocation, Place, TransitStop};

use super::locator_service::LocationReport;

/// Generate a Google Maps link from coordinates
#[must_use]
pub fn maps_link(location: &GeoLocation) -> String {
    format!(
        "https://maps.google.com/maps?q={},{}",
        location.latitude(),
        location.longitude()
    )
}

/// Format the nearest-stop line, including the "no stop nearby" case
#[must_use]
pub fn format_stop(stop: Option<&TransitStop>) -> String {
    match stop {
        Some(stop) if stop.wheelchair_accessible => {
            format!("🚏 Nearest stop: {} ♿ wheelchair accessible", stop.name)
        },
        Some(stop) => format!("🚏 Nearest stop: {} (not known to be accessible)", stop.name),
        None => "🚏 No transit stop nearby".to_string(),
    }
}

/// Format a single place as one line
///
/// Missing fields are left out rather than filled with placeholders,
/// except for the name.
#[must_use]
pub fn format_place(place: &Place) -> String {
    let mut line = place.name.clone().unwrap_or_else(|| "(unnamed)".to_string());

    if let Some(rating) = place.rating {
        line.push_str(&format!(" ⭐ {rating:.1}"));
    }
    if let Some(ref address) = place.address {
        line.push_str(&format!(" · {address}"));
    }
    if let Some(ref phone) = place.phone {
        line.push_str(&format!(" · 📞 {phone}"));
    }

    line
}

/// Format a report, listing at most `show` places
#[must_use]
pub fn format_report(report: &LocationReport, show: usize) -> String {
    let mut parts = vec![
        format!("📍 {} ({})", report.query, report.coordinates),
        format!("🗺️ {}", maps_link(&report.coordinates)),
        format_stop(report.stop.as_ref()),
        String::new(),
    ];

    if report.places.is_empty() {
        parts.push(format!("🍽️ No {} found nearby", report.category));
        return parts.join("\n");
    }

    let shown = report.places.len().min(show);
    parts.push(format!(
        "🍽️ Nearby {} ({shown} of {}):",
        report.category,
        report.places.len()
    ));
    parts.extend(
        report
            .places
            .iter()
            .take(show)
            .enumerate()
            .map(|(i, place)| format!("  {}. {}", i + 1, format_place(place))),
    );

    parts.join("\n")
}
