use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::map::layer::{Element, Layer, Shape};

/// Encode a layer as a GeoJSON feature collection.
///
/// Rendering attributes travel in each feature's `properties`; the page
/// bootstrap turns `kind` back into the matching Leaflet constructor.
pub fn layer_to_geojson(layer: &Layer) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: layer.elements().iter().map(element_to_feature).collect(),
        foreign_members: None,
    }
}

fn element_to_feature(element: &Element) -> Feature {
    let (value, mut props) = match &element.shape {
        Shape::Marker { at, icon } => (
            Value::Point(at.to_position()),
            json!({
                "icon": {
                    "color": icon.color,
                    "glyph": icon.glyph,
                    "prefix": icon.prefix,
                },
            }),
        ),
        Shape::CircleMarker { at, style } => (
            Value::Point(at.to_position()),
            json!({
                "radius": style.radius,
                "color": style.color,
                "fillColor": style.fill_color,
                "fillOpacity": style.fill_opacity,
                "weight": style.weight,
                "opacity": style.opacity,
            }),
        ),
        Shape::PolyLine { path, style } => (
            Value::LineString(path.iter().map(|p| p.to_position()).collect()),
            json!({
                "color": style.color,
                "weight": style.weight,
                "opacity": style.opacity,
                "dashArray": style.dash_array,
            }),
        ),
        Shape::DivMarker { at, icon } => (
            Value::Point(at.to_position()),
            json!({
                "html": icon.html,
                "iconSize": [icon.size.0, icon.size.1],
                "iconAnchor": [icon.anchor.0, icon.anchor.1],
            }),
        ),
    };

    props["kind"] = json!(element.shape.kind());
    if let Some(tooltip) = &element.tooltip {
        props["tooltip"] = json!(tooltip);
    }
    if let Some(popup) = &element.popup {
        props["popup"] = json!(popup.html);
        props["popupMaxWidth"] = json!(popup.max_width);
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(value)),
        id: None,
        properties: Some(into_object(props)),
        foreign_members: None,
    }
}

fn into_object(value: serde_json::Value) -> JsonObject {
    match value {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    }
}
