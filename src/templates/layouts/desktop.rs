use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Shared page shell: header nav plus the styling the property cards and
/// filter sidebar rely on. Leaflet comes from a CDN; the map component only
/// feeds it markers.
pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
                script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" defer {}
                style { (PreEscaped(STYLES)) }
            }
            body {
                header class="topbar" {
                    h3 { "FairVision" }
                    nav {
                        ul {
                            li { a href="/" { "Property Search" } }
                            li { a href="/predict" { "Price Prediction" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}

const STYLES: &str = r#"
body { background-color: #f5f5f5; font-family: "Helvetica Neue", Arial, sans-serif; margin: 0; }
.topbar { display: flex; align-items: center; justify-content: space-between; padding: 8px 24px; background: white; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
.topbar nav ul { list-style: none; display: flex; gap: 16px; margin: 0; padding: 0; }
.layout { display: flex; gap: 20px; padding: 20px; align-items: flex-start; }
.sidebar { width: 280px; background: white; border-radius: 8px; padding: 15px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
.sidebar label { display: block; margin-top: 10px; font-weight: bold; font-size: 14px; }
.sidebar input, .sidebar select { width: 100%; margin-top: 4px; padding: 4px; box-sizing: border-box; }
.sidebar button { width: 100%; margin-top: 15px; padding: 8px; border-radius: 4px; cursor: pointer; }
.results { flex: 1; }
.property-card { background-color: white; border-radius: 8px; padding: 15px; margin-bottom: 15px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
.property-card .facts { display: flex; flex-wrap: wrap; gap: 8px 24px; margin: 8px 0; font-size: 14px; }
.property-card .actions { display: flex; gap: 10px; margin-top: 10px; }
.property-card .actions button { flex: 1; border-radius: 4px; padding: 6px; cursor: pointer; }
.property-card details { font-size: 14px; margin-top: 8px; }
.map-container { margin-bottom: 20px; }
#map { height: 420px; border-radius: 8px; }
.warning { background: #fff3cd; border: 1px solid #ffe69c; border-radius: 4px; padding: 10px; }
.info { background: #cfe2ff; border: 1px solid #9ec5fe; border-radius: 4px; padding: 10px; }
.predict-form { max-width: 420px; margin: 40px auto; background: white; border-radius: 8px; padding: 20px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
.predict-form label { display: block; margin-top: 10px; font-weight: bold; font-size: 14px; }
.predict-form input { width: 100%; margin-top: 4px; padding: 6px; box-sizing: border-box; }
.predict-form button { width: 100%; margin-top: 15px; padding: 8px; border-radius: 4px; cursor: pointer; }
.predicted { font-size: 20px; margin-top: 15px; }
"#;
