use tracing::debug;

use crate::grid::tables::{
    City, PowerPlant, Substation, TransmissionLine, FACILITY_ICONS,
};
use crate::map::layer::{CircleStyle, DivIcon, Element, Icon, Layer, LineStyle, Popup, Shape};
use crate::map::popup;
use crate::map::style::{
    facility_icon, voltage_style, FacilityCategory, StyleError, StyleTable, VoltageClass,
    VoltageStyle,
};

const TOWER_TOOLTIP: &str = "송전탑";

/// One layer per voltage class, in legend order
pub struct LineGroups {
    groups: Vec<(VoltageClass, Layer)>,
}

impl LineGroups {
    pub fn new() -> Self {
        let groups = vec![
            (VoltageClass::Kv765, Layer::new("765kV 송전선로")),
            (VoltageClass::Kv345, Layer::new("345kV 송전선로")),
            (VoltageClass::Kv154, Layer::new("154kV 송전선로")),
            (VoltageClass::Hvdc, Layer::new("HVDC 직류송전")),
        ];
        Self { groups }
    }

    pub fn get_mut(&mut self, class: VoltageClass) -> Option<&mut Layer> {
        self.groups
            .iter_mut()
            .find(|(c, _)| *c == class)
            .map(|(_, layer)| layer)
    }

    pub fn get(&self, class: VoltageClass) -> Option<&Layer> {
        self.groups
            .iter()
            .find(|(c, _)| *c == class)
            .map(|(_, layer)| layer)
    }

    pub fn into_layers(self) -> impl Iterator<Item = Layer> {
        self.groups.into_iter().map(|(_, layer)| layer)
    }
}

impl Default for LineGroups {
    fn default() -> Self {
        Self::new()
    }
}

fn icon_for(category: FacilityCategory) -> Result<Icon, StyleError> {
    let style = facility_icon(FACILITY_ICONS, category)?;
    Ok(Icon {
        color: style.color.to_string(),
        glyph: style.icon.to_string(),
        prefix: style.prefix.to_string(),
    })
}

/// Icon marker per plant
pub fn add_power_plants(plants: &[PowerPlant], layer: &mut Layer) -> Result<(), StyleError> {
    for plant in plants {
        let style = facility_icon(FACILITY_ICONS, plant.category)?;
        let html = popup::render(
            plant.name,
            &[
                ("유형", style.label.to_string()),
                ("설비용량", plant.capacity.to_string()),
                ("호기수", format!("{}기", plant.units)),
                ("운영사", plant.operator.to_string()),
            ],
        );
        layer.push(
            Element::new(Shape::Marker {
                at: plant.at,
                icon: icon_for(plant.category)?,
            })
            .with_tooltip(plant.name)
            .with_popup(Popup::new(html, 280)),
        );
    }
    debug!(count = plants.len(), "power plants");
    Ok(())
}

/// Circle marker per substation, larger for 765kV
pub fn add_substations(substations: &[Substation], layer: &mut Layer) -> Result<(), StyleError> {
    for ss in substations {
        let style = facility_icon(FACILITY_ICONS, ss.category)?;
        let radius = if ss.voltage_kv == 765 { 12.0 } else { 8.0 };
        let html = popup::render(
            ss.name,
            &[
                ("전압", format!("{}kV", ss.voltage_kv)),
                ("용량", ss.capacity.to_string()),
            ],
        );
        layer.push(
            Element::new(Shape::CircleMarker {
                at: ss.at,
                style: CircleStyle {
                    radius,
                    color: style.color.to_string(),
                    fill_color: style.color.to_string(),
                    fill_opacity: 0.7,
                    weight: 2.0,
                    opacity: 1.0,
                },
            })
            .with_tooltip(ss.name)
            .with_popup(Popup::new(html, 250)),
        );
    }
    debug!(count = substations.len(), "substations");
    Ok(())
}

pub fn add_cities(cities: &[City], layer: &mut Layer) -> Result<(), StyleError> {
    let icon = icon_for(FacilityCategory::City)?;
    for city in cities {
        let html = popup::render(
            city.name,
            &[
                ("인구", city.population.to_string()),
                ("역할", "주요 전력 소비지".to_string()),
            ],
        );
        layer.push(
            Element::new(Shape::Marker {
                at: city.at,
                icon: icon.clone(),
            })
            .with_tooltip(city.name)
            .with_popup(Popup::new(html, 250)),
        );
    }
    debug!(count = cities.len(), "cities");
    Ok(())
}

/// Dashed polyline per line plus tower icons on its interior vertices
pub fn add_transmission_lines(
    lines: &[TransmissionLine],
    styles: &StyleTable<VoltageClass, VoltageStyle>,
    groups: &mut LineGroups,
) -> Result<(), StyleError> {
    for line in lines {
        let style = voltage_style(styles, line.voltage)?;
        let layer = groups
            .get_mut(line.voltage)
            .ok_or(StyleError::MissingVoltageStyle(line.voltage))?;

        let html = popup::render(
            line.name,
            &[
                ("전압", style.label.to_string()),
                ("구간", format!("{} → {}", line.from, line.to)),
                ("연장", format!("{}km", line.length_km)),
            ],
        );
        layer.push(
            Element::new(Shape::PolyLine {
                path: line.path.to_vec(),
                style: LineStyle {
                    color: style.color.to_string(),
                    weight: style.weight,
                    opacity: style.opacity,
                    dash_array: style.dash_array.to_string(),
                },
            })
            .with_tooltip(format!("{} ({})", line.name, style.label))
            .with_popup(Popup::new(html, 280)),
        );

        add_towers(line, style.color, layer);
    }
    debug!(count = lines.len(), "transmission lines");
    Ok(())
}

/// Endpoints are plants or substations, so only interior vertices get a tower
fn add_towers(line: &TransmissionLine, color: &str, layer: &mut Layer) {
    let [_, interior @ .., _] = line.path else {
        return;
    };
    if interior.is_empty() {
        return;
    }

    let icon = DivIcon {
        html: format!("<div style=\"opacity:0.8;\">{}</div>", tower_svg(color)),
        size: (16, 20),
        anchor: (8, 10),
    };
    for &at in interior {
        layer.push(
            Element::new(Shape::DivMarker {
                at,
                icon: icon.clone(),
            })
            .with_tooltip(TOWER_TOOLTIP),
        );
    }
}

fn tower_svg(color: &str) -> String {
    let strokes = [
        (8, 0, 8, 20, "1.5"),
        (2, 4, 14, 4, "1.5"),
        (3, 8, 13, 8, "1.2"),
        (4, 4, 2, 8, "0.8"),
        (12, 4, 14, 8, "0.8"),
        (5, 8, 3, 20, "0.8"),
        (11, 8, 13, 20, "0.8"),
    ];
    let mut svg = String::from(
        "<svg width=\"16\" height=\"20\" viewBox=\"0 0 16 20\" xmlns=\"http://www.w3.org/2000/svg\">",
    );
    for (x1, y1, x2, y2, width) in strokes {
        svg.push_str(&format!(
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{color}\" stroke-width=\"{width}\"/>"
        ));
    }
    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::LatLng;
    use crate::grid::tables::{
        MAJOR_CITIES, POWER_PLANTS, SUBSTATIONS, TRANSMISSION_LINES, VOLTAGE_STYLES,
    };

    #[test]
    fn test_power_plants_one_marker_each() {
        let mut layer = Layer::new("발전소");
        add_power_plants(POWER_PLANTS, &mut layer).unwrap();
        assert_eq!(layer.count_kind("marker"), 17);
        let first = &layer.elements()[0];
        assert_eq!(first.tooltip.as_deref(), Some("고리/신고리 원자력"));
        let popup = first.popup.as_ref().unwrap();
        assert!(popup.html.contains("원자력발전소"));
        assert!(popup.html.contains("10기"));
        assert_eq!(popup.max_width, 280);
    }

    #[test]
    fn test_substation_radius() {
        let mut layer = Layer::new("변전소");
        add_substations(SUBSTATIONS, &mut layer).unwrap();
        assert_eq!(layer.len(), 13);
        let radii: Vec<f64> = layer
            .elements()
            .iter()
            .map(|e| match &e.shape {
                Shape::CircleMarker { style, .. } => style.radius,
                other => panic!("unexpected shape {other:?}"),
            })
            .collect();
        assert_eq!(radii.iter().filter(|&&r| r == 12.0).count(), 5);
        assert_eq!(radii.iter().filter(|&&r| r == 8.0).count(), 8);
    }

    #[test]
    fn test_cities() {
        let mut layer = Layer::new("주요 도시");
        add_cities(MAJOR_CITIES, &mut layer).unwrap();
        assert_eq!(layer.count_kind("marker"), 5);
        assert!(layer.elements()[0]
            .popup
            .as_ref()
            .unwrap()
            .html
            .contains("주요 전력 소비지"));
    }

    #[test]
    fn test_lines_grouped_by_voltage_with_towers() {
        let mut groups = LineGroups::new();
        add_transmission_lines(TRANSMISSION_LINES, VOLTAGE_STYLES, &mut groups).unwrap();

        let expected_lines = [
            (VoltageClass::Kv765, 5),
            (VoltageClass::Kv345, 10),
            (VoltageClass::Kv154, 2),
            (VoltageClass::Hvdc, 2),
        ];
        for (class, count) in expected_lines {
            let layer = groups.get(class).unwrap();
            assert_eq!(layer.count_kind("polyline"), count, "{class}");

            let towers: usize = TRANSMISSION_LINES
                .iter()
                .filter(|l| l.voltage == class)
                .map(|l| l.path.len() - 2)
                .sum();
            assert_eq!(layer.count_kind("div_marker"), towers, "{class}");
        }
    }

    #[test]
    fn test_line_tooltip_and_popup() {
        let mut groups = LineGroups::new();
        add_transmission_lines(&TRANSMISSION_LINES[17..18], VOLTAGE_STYLES, &mut groups).unwrap();
        let layer = groups.get(VoltageClass::Hvdc).unwrap();
        let line = &layer.elements()[0];
        assert_eq!(
            line.tooltip.as_deref(),
            Some("해남-제주 HVDC (HVDC (직류송전))")
        );
        let html = &line.popup.as_ref().unwrap().html;
        assert!(html.contains("해남 → 제주"));
        assert!(html.contains("101km"));
    }

    #[test]
    fn test_two_point_line_has_no_towers() {
        const PATH: &[LatLng] = &[LatLng::new(35.0, 128.0), LatLng::new(35.1, 128.1)];
        let short = TransmissionLine {
            name: "test",
            voltage: VoltageClass::Kv154,
            from: "a",
            to: "b",
            length_km: 1,
            path: PATH,
        };
        let mut groups = LineGroups::new();
        add_transmission_lines(&[short], VOLTAGE_STYLES, &mut groups).unwrap();
        let layer = groups.get(VoltageClass::Kv154).unwrap();
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.count_kind("div_marker"), 0);
    }

    #[test]
    fn test_missing_style_aborts() {
        let mut groups = LineGroups::new();
        let err = add_transmission_lines(TRANSMISSION_LINES, &VOLTAGE_STYLES[..3], &mut groups)
            .unwrap_err();
        assert_eq!(err, StyleError::MissingVoltageStyle(VoltageClass::Hvdc));
    }

    #[test]
    fn test_tower_svg_uses_line_color() {
        let svg = tower_svg("#DC2626");
        assert_eq!(svg.matches("stroke=\"#DC2626\"").count(), 7);
    }
}
