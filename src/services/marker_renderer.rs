use crate::constants::*;
use crate::models::{Coordinates, MapWidget, MarkerSpec};
use crate::services::sampler::Pairing;

/// Green-to-red hex color for a severity score: `#RRGG00` with
/// R = floor(score / 100 * 255) and G = 255 - R. Scores outside 0-100 clamp;
/// NaN counts as 0.
pub fn severity_color(severity_score: f64) -> String {
    let score = if severity_score.is_nan() {
        SEVERITY_MIN
    } else {
        severity_score.clamp(SEVERITY_MIN, SEVERITY_MAX)
    };
    let intensity = ((score / SEVERITY_MAX) * 255.0).floor() as u8;
    format!("#{:02x}{:02x}00", intensity, 255 - intensity)
}

pub fn popup_html(severity_score: f64, anchor: &Coordinates, image_link: Option<&str>) -> String {
    let location = format!(
        "<b>Location:</b> {:.prec$}, {:.prec$}",
        anchor.lat,
        anchor.lng,
        prec = POPUP_COORD_PRECISION
    );
    match image_link {
        Some(link) => format!(
            "<div style='text-align: center;'><img src='{}' width='{}'><br><b>Severity Score:</b> {}<br>{}</div>",
            link, POPUP_IMAGE_WIDTH, severity_score, location
        ),
        None => format!(
            "<b>Pothole<br>Severity Score:</b> {}<br>{}",
            severity_score, location
        ),
    }
}

pub fn tooltip_text(severity_score: f64) -> String {
    format!("Severity Score: {}", severity_score)
}

/// Build the marker for one pairing, or `None` when the route has no
/// LineString anchor.
pub fn marker_for(pairing: &Pairing<'_>) -> Option<MarkerSpec> {
    let anchor = pairing.route.anchor()?;
    let severity_score = pairing.pothole.severity_score.unwrap_or(0.0);
    let color = severity_color(severity_score);

    Some(MarkerSpec {
        location: anchor,
        severity_score,
        color,
        radius: MARKER_RADIUS,
        fill: true,
        fill_opacity: MARKER_FILL_OPACITY,
        popup: popup_html(
            severity_score,
            &anchor,
            pairing.pothole.converted_link.as_deref(),
        ),
        tooltip: tooltip_text(severity_score),
    })
}

/// Append one marker per renderable pairing to the map.
pub fn render_markers(map: &mut MapWidget, pairings: &[Pairing<'_>]) {
    let mut skipped = 0;
    for pairing in pairings {
        match marker_for(pairing) {
            Some(marker) => map.add_marker(marker),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!("Skipped {} sampled routes without a LineString anchor", skipped);
    }
    tracing::info!("Rendered {} markers", map.markers().len());
}
