use maud::{html, Markup, PreEscaped};
use serde::Serialize;

/// One map point, serialized into the page for Leaflet. Mirrors what the
/// hover tooltip shows.
#[derive(Debug, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
    pub price: String,
    pub bedrooms: u32,
    pub baths: String,
}

/// The property map. Markers are inlined as JSON; the view centers on their
/// mean coordinate. No markers renders a warning instead of an empty map.
pub fn property_map(markers: &[MapMarker]) -> Markup {
    if markers.is_empty() {
        return html! {
            p class="warning" { "No properties with valid location data" }
        };
    }

    let data = serde_json::to_string(markers).unwrap_or_else(|_| "[]".to_string());

    html! {
        div class="map-container" {
            div id="map" {}
            script {
                (PreEscaped(format!(
                    r#"
document.addEventListener("DOMContentLoaded", function () {{
    var markers = {data};
    var lat = markers.reduce(function (s, m) {{ return s + m.lat; }}, 0) / markers.length;
    var lng = markers.reduce(function (s, m) {{ return s + m.lng; }}, 0) / markers.length;
    var map = L.map("map").setView([lat, lng], 11);
    L.tileLayer("https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png", {{
        maxZoom: 19,
        attribution: "&copy; OpenStreetMap contributors"
    }}).addTo(map);
    markers.forEach(function (m) {{
        L.marker([m.lat, m.lng]).addTo(map).bindPopup(
            "<b>Address:</b> " + m.address +
            "<br/><b>Price:</b> " + m.price +
            "<br/><b>Bedrooms:</b> " + m.bedrooms +
            "<br/><b>Baths:</b> " + m.baths
        );
    }});
}});
"#
                )))
            }
        }
    }
}
