use std::path::Path;

use htmlize::escape_text;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{MapError, MapResult};
use crate::geo::{Bounds, LatLng};
use crate::map::features::layer_to_geojson;
use crate::map::layer::Layer;

/// Degrees of slack around the data extent when panning
const BOUNDS_PADDING: f64 = 2.0;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const AWESOME_MARKERS_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.css";
const AWESOME_MARKERS_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/Leaflet.awesome-markers/2.0.2/leaflet.awesome-markers.js";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
const MINIMAP_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet-minimap/3.6.1/Control.MiniMap.min.css";
const MINIMAP_JS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet-minimap/3.6.1/Control.MiniMap.min.js";

/// Turns the inlined config and GeoJSON blocks into Leaflet layers
const BOOTSTRAP_JS: &str = r#"(function () {
  var cfg = JSON.parse(document.getElementById('map-config').textContent);
  var opts = { center: cfg.center, zoom: cfg.zoom };
  if (cfg.maxBounds) { opts.maxBounds = cfg.maxBounds; }
  var map = L.map('map', opts);
  var tiles = { attribution: cfg.tiles.attribution, subdomains: 'abcd', maxZoom: 19 };
  L.tileLayer(cfg.tiles.url, tiles).addTo(map);
  var blocks = document.querySelectorAll('script.map-layer');
  var overlays = {};
  cfg.layers.forEach(function (meta, i) {
    var group = L.geoJSON(JSON.parse(blocks[i].textContent), {
      pointToLayer: function (f, latlng) {
        var p = f.properties;
        if (p.kind === 'circle_marker') {
          return L.circleMarker(latlng, {
            radius: p.radius, color: p.color, fill: true, fillColor: p.fillColor,
            fillOpacity: p.fillOpacity, weight: p.weight, opacity: p.opacity
          });
        }
        if (p.kind === 'div_marker') {
          return L.marker(latlng, { icon: L.divIcon({
            html: p.html, iconSize: p.iconSize, iconAnchor: p.iconAnchor, className: 'empty'
          }) });
        }
        return L.marker(latlng, { icon: L.AwesomeMarkers.icon({
          icon: p.icon.glyph, prefix: p.icon.prefix, markerColor: p.icon.color
        }) });
      },
      style: function (f) {
        var p = f.properties;
        if (p.kind !== 'polyline') { return {}; }
        return { color: p.color, weight: p.weight, opacity: p.opacity, dashArray: p.dashArray };
      },
      onEachFeature: function (f, layer) {
        var p = f.properties;
        if (p.tooltip) { layer.bindTooltip(p.tooltip); }
        if (p.popup) { layer.bindPopup(p.popup, { maxWidth: p.popupMaxWidth }); }
      }
    });
    if (meta.show) { group.addTo(map); }
    overlays[meta.name] = group;
  });
  if (cfg.layerControl) {
    L.control.layers({}, overlays, cfg.layerControl).addTo(map);
  }
  if (cfg.minimap) {
    new L.Control.MiniMap(L.tileLayer(cfg.tiles.url, { subdomains: 'abcd' }), cfg.minimap).addTo(map);
  }
})();"#;

/// Base tile set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tiles {
    CartoDbPositron,
}

impl Tiles {
    fn url(self) -> &'static str {
        match self {
            Tiles::CartoDbPositron => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
        }
    }

    fn attribution(self) -> &'static str {
        match self {
            Tiles::CartoDbPositron => {
                "&copy; OpenStreetMap contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>"
            }
        }
    }
}

/// Screen corner for map controls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Corner {
    TopRight,
    BottomRight,
}

/// Geographic center, zoom and tiles of a map
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseMap {
    pub center: LatLng,
    pub zoom: u8,
    pub tiles: Tiles,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LayerControl {
    pub position: Corner,
    pub collapsed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MiniMap {
    pub position: Corner,
    pub toggle_display: bool,
}

#[derive(Serialize)]
struct TileConfig {
    url: &'static str,
    attribution: &'static str,
}

#[derive(Serialize)]
struct LayerMeta<'a> {
    name: &'a str,
    show: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageConfig<'a> {
    center: [f64; 2],
    zoom: u8,
    tiles: TileConfig,
    max_bounds: Option<[[f64; 2]; 2]>,
    layers: Vec<LayerMeta<'a>>,
    layer_control: Option<LayerControl>,
    minimap: Option<MiniMap>,
}

/// A composed map: base map, overlay layers and static panels
pub struct MapDocument {
    title: String,
    base: BaseMap,
    layers: Vec<Layer>,
    overlays: Vec<String>,
    layer_control: Option<LayerControl>,
    minimap: Option<MiniMap>,
}

impl MapDocument {
    pub fn new(title: impl Into<String>, base: BaseMap) -> Self {
        Self {
            title: title.into(),
            base,
            layers: Vec::new(),
            overlays: Vec::new(),
            layer_control: None,
            minimap: None,
        }
    }

    /// Layers are drawn and listed in insertion order
    pub fn add_layer(&mut self, layer: Layer) {
        debug!(layer = %layer.name, elements = layer.len(), "attached layer");
        self.layers.push(layer);
    }

    /// Append a fixed-position HTML panel (legend, title, notes)
    pub fn add_overlay(&mut self, html: impl Into<String>) {
        self.overlays.push(html.into());
    }

    pub fn with_layer_control(mut self, position: Corner, collapsed: bool) -> Self {
        self.layer_control = Some(LayerControl { position, collapsed });
        self
    }

    pub fn with_minimap(mut self, position: Corner, toggle_display: bool) -> Self {
        self.minimap = Some(MiniMap {
            position,
            toggle_display,
        });
        self
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn overlays(&self) -> &[String] {
        &self.overlays
    }

    /// Extent of every element on the map
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.layers.iter().flat_map(|l| l.points()))
    }

    /// Serialize to a self-contained HTML page
    pub fn render(&self) -> MapResult<String> {
        let config = PageConfig {
            center: [self.base.center.lat, self.base.center.lng],
            zoom: self.base.zoom,
            tiles: TileConfig {
                url: self.base.tiles.url(),
                attribution: self.base.tiles.attribution(),
            },
            max_bounds: self
                .bounds()
                .map(|b| b.padded(BOUNDS_PADDING).to_leaflet()),
            layers: self
                .layers
                .iter()
                .map(|l| LayerMeta {
                    name: &l.name,
                    show: l.show,
                })
                .collect(),
            layer_control: self.layer_control,
            minimap: self.minimap,
        };

        // Head with CDN assets
        let mut html = String::with_capacity(64 * 1024);
        html.push_str("<!DOCTYPE html>\n<html lang=\"ko\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\" />\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n",
        );
        html.push_str(&format!("<title>{}</title>\n", escape_text(self.title.as_str())));
        for css in [LEAFLET_CSS, FONT_AWESOME_CSS, AWESOME_MARKERS_CSS] {
            html.push_str(&format!("<link rel=\"stylesheet\" href=\"{css}\" />\n"));
        }
        if self.minimap.is_some() {
            html.push_str(&format!("<link rel=\"stylesheet\" href=\"{MINIMAP_CSS}\" />\n"));
        }
        for js in [LEAFLET_JS, AWESOME_MARKERS_JS] {
            html.push_str(&format!("<script src=\"{js}\"></script>\n"));
        }
        if self.minimap.is_some() {
            html.push_str(&format!("<script src=\"{MINIMAP_JS}\"></script>\n"));
        }
        html.push_str(
            "<style>html,body{margin:0;padding:0;height:100%;}\
             #map{position:absolute;top:0;bottom:0;left:0;right:0;}\
             .empty{background:none;border:none;}</style>\n",
        );
        html.push_str("</head>\n<body>\n<div id=\"map\"></div>\n");

        // Fixed-position panels
        for overlay in &self.overlays {
            html.push_str(overlay);
            html.push('\n');
        }

        // Inline data, read back by the bootstrap script
        html.push_str(&format!(
            "<script type=\"application/json\" id=\"map-config\">{}</script>\n",
            script_safe(serde_json::to_string(&config)?)
        ));
        for layer in &self.layers {
            html.push_str(&format!(
                "<script type=\"application/geo+json\" class=\"map-layer\">{}</script>\n",
                script_safe(serde_json::to_string(&layer_to_geojson(layer))?)
            ));
        }
        html.push_str(&format!("<script>\n{BOOTSTRAP_JS}\n</script>\n"));
        html.push_str("</body>\n</html>\n");

        Ok(html)
    }

    /// Render and write the page in a single call.
    ///
    /// The parent directory must already exist.
    pub fn save(&self, path: &Path) -> MapResult<()> {
        let html = self.render()?;
        std::fs::write(path, html).map_err(|source| MapError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), layers = self.layers.len(), "saved map");
        Ok(())
    }
}

/// Keep inlined JSON from closing its `<script>` element
fn script_safe(json: String) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::layer::{Element, Icon, Shape};

    fn sample() -> MapDocument {
        let mut doc = MapDocument::new(
            "test",
            BaseMap {
                center: LatLng::new(36.3, 127.8),
                zoom: 7,
                tiles: Tiles::CartoDbPositron,
            },
        )
        .with_layer_control(Corner::TopRight, false);

        let mut layer = Layer::new("도시");
        layer.push(
            Element::new(Shape::Marker {
                at: LatLng::new(37.56, 126.97),
                icon: Icon {
                    color: "cadetblue".into(),
                    glyph: "building".into(),
                    prefix: "fa".into(),
                },
            })
            .with_tooltip("서울</script>"),
        );
        doc.add_layer(layer);
        doc.add_overlay("<div id=\"legend\"></div>");
        doc
    }

    #[test]
    fn test_render_inlines_layers() {
        let html = sample().render().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches("class=\"map-layer\"").count(), 1);
        assert!(html.contains("\"name\":\"도시\""));
        assert!(html.contains("\"layerControl\":{\"position\":\"topright\",\"collapsed\":false}"));
        assert!(html.contains("<div id=\"legend\"></div>"));
        assert!(!html.contains(MINIMAP_JS));
    }

    #[test]
    fn test_render_escapes_script_close() {
        let html = sample().render().unwrap();
        assert!(html.contains("서울<\\/script>"));
        assert!(!html.contains("서울</script>"));
    }

    #[test]
    fn test_max_bounds_from_data() {
        let doc = sample();
        let bounds = doc.bounds().unwrap();
        assert_eq!(bounds.south_west(), LatLng::new(37.56, 126.97));
        let html = doc.render().unwrap();
        assert!(html.contains("\"maxBounds\":[["));
    }

    #[test]
    fn test_minimap_assets() {
        let html = sample()
            .with_minimap(Corner::BottomRight, true)
            .render()
            .unwrap();
        assert!(html.contains(MINIMAP_JS));
        assert!(html.contains("\"minimap\":{\"position\":\"bottomright\",\"toggleDisplay\":true}"));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.html");
        sample().save(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, sample().render().unwrap());
    }

    #[test]
    fn test_save_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("map.html");
        let err = sample().save(&path).unwrap_err();
        assert!(matches!(err, MapError::Write { .. }));
        assert!(!path.exists());
    }
}
