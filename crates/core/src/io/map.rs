//! Distance-ring map writer.
//!
//! Produces a self-contained Leaflet HTML document with a labeled center
//! marker, one circle per requested radius, and a legend. The center is
//! given as a DMS pair so callers can paste coordinates straight from
//! gazetteer listings.

use crate::dms::parse_pair;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

const METERS_PER_MILE: f64 = 1609.344;

/// Circle colors per scheme, cycled when there are more radii than colors
const SCHEMES: [&[&str]; 5] = [
    &["#1f78b4", "#33a02c", "#e31a1c", "#ff7f00", "#6a3d9a"],
    &["#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854"],
    &["#d73027", "#fc8d59", "#fee090", "#91bfdb", "#4575b4"],
    &["#7fc97f", "#beaed4", "#fdc086", "#ffff99", "#386cb0"],
    &["#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e"],
];

/// Options for the distance-ring map
#[derive(Debug, Clone)]
pub struct MapOptions {
    /// Marker label and document title
    pub label: String,
    /// Circle radii in miles, drawn largest first
    pub radii_miles: Vec<f64>,
    /// Color scheme index, 1 through 5
    pub scheme: u8,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            label: "Center".to_string(),
            radii_miles: vec![1.0, 5.0, 10.0],
            scheme: 1,
        }
    }
}

/// Write a distance-ring map as a standalone HTML file.
///
/// The center is a DMS coordinate pair such as
/// `"41° 15′ 31″ N, 95° 56′ 15″ W"`. Returns the output path.
pub fn write_map(center: &str, options: &MapOptions, path: &Path) -> Result<PathBuf> {
    let (lat, lon) = parse_pair(center)?;
    if options.radii_miles.is_empty() {
        return Err(Error::Format("no radii given".to_string()));
    }
    if let Some(bad) = options.radii_miles.iter().find(|r| !r.is_finite() || **r <= 0.0) {
        return Err(Error::Format(format!("radius must be positive: {}", bad)));
    }
    let colors = scheme_colors(options.scheme)?;

    let html = render(lat, lon, options, colors);
    fs::write(path, html)?;
    Ok(path.to_path_buf())
}

fn scheme_colors(scheme: u8) -> Result<&'static [&'static str]> {
    if !(1..=SCHEMES.len() as u8).contains(&scheme) {
        return Err(Error::Format(format!(
            "color scheme must be 1-{}, got {}",
            SCHEMES.len(),
            scheme
        )));
    }
    Ok(SCHEMES[scheme as usize - 1])
}

fn render(lat: f64, lon: f64, options: &MapOptions, colors: &[&str]) -> String {
    // Largest ring first so smaller ones stay clickable on top
    let mut radii = options.radii_miles.clone();
    radii.sort_by(|a, b| b.total_cmp(a));

    let mut circles = String::new();
    let mut legend = String::new();
    for (i, miles) in radii.iter().enumerate() {
        let color = colors[i % colors.len()];
        circles.push_str(&format!(
            "    L.circle([{lat}, {lon}], {{radius: {:.1}, color: '{color}', fill: false, weight: 2}}).addTo(map);\n",
            miles * METERS_PER_MILE
        ));
        legend.push_str(&format!(
            "      <div><span style=\"background:{color}\"></span>{miles} mi</div>\n"
        ));
    }

    let zoom = zoom_for(radii[0]);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>{label}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"/>
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <style>
    html, body, #map {{ height: 100%; margin: 0; }}
    .legend {{ position: absolute; bottom: 16px; right: 16px; z-index: 1000;
              background: white; padding: 8px 12px; border-radius: 4px;
              font: 13px sans-serif; box-shadow: 0 1px 4px rgba(0,0,0,0.3); }}
    .legend span {{ display: inline-block; width: 12px; height: 12px;
                   margin-right: 6px; border-radius: 50%; }}
  </style>
</head>
<body>
  <div id="map"></div>
  <div class="legend">
    <div><strong>{label}</strong></div>
{legend}  </div>
  <script>
    var map = L.map('map').setView([{lat}, {lon}], {zoom});
    L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
      attribution: '&copy; OpenStreetMap contributors'
    }}).addTo(map);
    L.marker([{lat}, {lon}]).addTo(map).bindPopup('{label}');
{circles}  </script>
</body>
</html>
"#,
        label = options.label,
    )
}

/// Rough zoom level so the largest ring fits the viewport
fn zoom_for(max_miles: f64) -> u8 {
    match max_miles {
        m if m <= 2.0 => 13,
        m if m <= 5.0 => 12,
        m if m <= 12.0 => 11,
        m if m <= 25.0 => 10,
        m if m <= 50.0 => 9,
        m if m <= 100.0 => 8,
        _ => 7,
    }
}
