//! Conceptual map of the Korean transmission grid.

pub mod assemble;
pub mod tables;

use tracing::info;

use crate::geo::LatLng;
use crate::map::style::{StyleError, StyleTable, VoltageStyle};
use crate::map::{BaseMap, Corner, FacilityCategory, Layer, MapDocument, Tiles, VoltageClass};
use assemble::{add_cities, add_power_plants, add_substations, add_transmission_lines, LineGroups};
use tables::{FACILITY_ICONS, MAJOR_CITIES, POWER_PLANTS, SUBSTATIONS, TRANSMISSION_LINES, VOLTAGE_STYLES};

pub const OUTPUT_FILE: &str = "korea_grid_map.html";

pub const PLANTS_LAYER: &str = "발전소";
pub const SUBSTATIONS_LAYER: &str = "변전소";
pub const CITIES_LAYER: &str = "주요 도시";

const TITLE: &str = "대한민국 전력 송전망 개념도";

/// Build the grid map from the embedded tables
pub fn build_map() -> Result<MapDocument, StyleError> {
    let base = BaseMap {
        center: LatLng::new(36.3, 127.8),
        zoom: 7,
        tiles: Tiles::CartoDbPositron,
    };
    let mut doc = MapDocument::new(TITLE, base)
        .with_layer_control(Corner::TopRight, false)
        .with_minimap(Corner::BottomRight, true);

    // Fresh layers per build
    let mut plants = Layer::new(PLANTS_LAYER);
    let mut substations = Layer::new(SUBSTATIONS_LAYER);
    let mut cities = Layer::new(CITIES_LAYER);
    let mut lines = LineGroups::new();

    add_power_plants(POWER_PLANTS, &mut plants)?;
    add_substations(SUBSTATIONS, &mut substations)?;
    add_cities(MAJOR_CITIES, &mut cities)?;
    add_transmission_lines(TRANSMISSION_LINES, VOLTAGE_STYLES, &mut lines)?;

    // Lines first so markers draw on top
    for layer in lines.into_layers() {
        doc.add_layer(layer);
    }
    doc.add_layer(plants);
    doc.add_layer(substations);
    doc.add_layer(cities);

    // Legend and title
    doc.add_overlay(legend_html(VOLTAGE_STYLES));
    doc.add_overlay(title_html());

    info!(layers = doc.layers().len(), "grid map composed");
    Ok(doc)
}

fn legend_html(styles: &StyleTable<VoltageClass, VoltageStyle>) -> String {
    let mut line_items = String::new();
    for (_, style) in styles {
        line_items.push_str(&format!(
            "<div style=\"display:flex;align-items:center;margin:4px 0;\">\
             <svg width=\"40\" height=\"4\" style=\"margin-right:8px;\">\
             <line x1=\"0\" y1=\"2\" x2=\"40\" y2=\"2\" stroke=\"{}\" stroke-width=\"3\" \
             stroke-dasharray=\"{}\"/></svg><span>{}</span></div>",
            style.color, style.dash_array, style.label
        ));
    }

    let mut facility_items = String::new();
    for (category, icon) in FACILITY_ICONS {
        if category.is_substation() {
            facility_items.push_str(&format!(
                "<div style=\"display:flex;align-items:center;margin:3px 0;\">\
                 <span style=\"color:{};font-size:14px;margin-right:8px;\">&#9679;</span>\
                 <span>{}</span></div>",
                icon.color, icon.label
            ));
        } else if *category == FacilityCategory::City {
            facility_items.push_str(&format!(
                "<div style=\"display:flex;align-items:center;margin:3px 0;\">\
                 <span style=\"color:steelblue;font-size:14px;margin-right:8px;\">&#9632;</span>\
                 <span>{}</span></div>",
                icon.label
            ));
        }
    }

    format!(
        "<div id=\"legend\" style=\"position:fixed;bottom:30px;left:10px;z-index:1000;\
         background:white;border:2px solid #888;border-radius:8px;padding:12px 16px;\
         font-family:'Malgun Gothic',sans-serif;font-size:12px;box-shadow:0 2px 8px rgba(0,0,0,0.2);\
         max-height:60vh;overflow-y:auto;\">\
         <div style=\"font-weight:700;font-size:14px;margin-bottom:8px;border-bottom:1px solid #ddd;\
         padding-bottom:6px;\">&#9889; 범례</div>\
         <div style=\"font-weight:600;margin:6px 0 4px;\">송전선로</div>{line_items}\
         <div style=\"font-weight:600;margin:10px 0 4px;\">시설물</div>\
         <div style=\"display:flex;align-items:center;margin:3px 0;\">\
         <span style=\"color:red;font-size:14px;margin-right:8px;\">&#9889;</span><span>발전소</span></div>\
         {facility_items}\
         <div style=\"margin-top:10px;padding-top:6px;border-top:1px solid #ddd;color:#888;font-size:10px;\">\
         * 교육/참고용 가상 데이터입니다</div></div>"
    )
}

fn title_html() -> String {
    format!(
        "<div id=\"title\" style=\"position:fixed;top:10px;left:50%;transform:translateX(-50%);\
         z-index:1000;background:rgba(30,58,95,0.9);color:white;padding:10px 24px;border-radius:8px;\
         font-family:'Malgun Gothic',sans-serif;box-shadow:0 2px 8px rgba(0,0,0,0.3);text-align:center;\">\
         <div style=\"font-size:18px;font-weight:700;\">&#9889; {TITLE}</div>\
         <div style=\"font-size:11px;opacity:0.8;margin-top:4px;\">\
         교육/참고 목적 | 실제 송전망 위치와 다를 수 있음</div></div>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_order() {
        let doc = build_map().unwrap();
        let names: Vec<&str> = doc.layers().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "765kV 송전선로",
                "345kV 송전선로",
                "154kV 송전선로",
                "HVDC 직류송전",
                PLANTS_LAYER,
                SUBSTATIONS_LAYER,
                CITIES_LAYER,
            ]
        );
    }

    #[test]
    fn test_all_plants_and_voltage_layers_rendered() {
        let doc = build_map().unwrap();
        assert_eq!(doc.layer(PLANTS_LAYER).unwrap().count_kind("marker"), 17);
        let html = doc.render().unwrap();
        assert_eq!(html.matches("class=\"map-layer\"").count(), 7);
        for name in ["765kV 송전선로", "345kV 송전선로", "154kV 송전선로", "HVDC 직류송전"] {
            assert!(html.contains(&format!("\"name\":\"{name}\"")), "{name}");
        }
        for plant in POWER_PLANTS {
            assert!(html.contains(plant.name), "{}", plant.name);
        }
    }

    #[test]
    fn test_legend_lists_every_voltage() {
        let legend = legend_html(VOLTAGE_STYLES);
        for (_, style) in VOLTAGE_STYLES {
            assert!(legend.contains(style.label));
            assert!(legend.contains(&format!("stroke-dasharray=\"{}\"", style.dash_array)));
        }
        assert!(legend.contains("765kV 변전소"));
        assert!(legend.contains("주요 소비지"));
        assert!(!legend.contains("원자력발전소"));
    }

    #[test]
    fn test_overlays_attached() {
        let doc = build_map().unwrap();
        assert_eq!(doc.overlays().len(), 2);
        assert!(doc.overlays()[1].contains(TITLE));
    }

    #[test]
    fn test_save_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        build_map().unwrap().save(&path).unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains(TITLE));
        assert!(html.contains("Control.MiniMap"));
    }
}
