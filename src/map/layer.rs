use crate::geo::LatLng;

/// Popup content attached to an element
#[derive(Clone, Debug, PartialEq)]
pub struct Popup {
    pub html: String,
    pub max_width: u32,
}

impl Popup {
    pub fn new(html: String, max_width: u32) -> Self {
        Self { html, max_width }
    }
}

/// Font Awesome marker icon
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    pub color: String,
    pub glyph: String,
    pub prefix: String,
}

/// Circle drawn in screen pixels (radius does not scale with zoom)
#[derive(Clone, Debug, PartialEq)]
pub struct CircleStyle {
    pub radius: f64,
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
    pub weight: f64,
    pub opacity: f64,
}

/// Stroke of a polyline
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub dash_array: String,
}

/// Raw HTML icon with pixel size and anchor
#[derive(Clone, Debug, PartialEq)]
pub struct DivIcon {
    pub html: String,
    pub size: (u32, u32),
    pub anchor: (u32, u32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Marker { at: LatLng, icon: Icon },
    CircleMarker { at: LatLng, style: CircleStyle },
    PolyLine { path: Vec<LatLng>, style: LineStyle },
    DivMarker { at: LatLng, icon: DivIcon },
}

impl Shape {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Marker { .. } => "marker",
            Shape::CircleMarker { .. } => "circle_marker",
            Shape::PolyLine { .. } => "polyline",
            Shape::DivMarker { .. } => "div_marker",
        }
    }

    /// Every coordinate the shape touches
    pub fn points(&self) -> &[LatLng] {
        match self {
            Shape::Marker { at, .. } | Shape::CircleMarker { at, .. } | Shape::DivMarker { at, .. } => {
                std::slice::from_ref(at)
            }
            Shape::PolyLine { path, .. } => path,
        }
    }
}

/// One rendered map element
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub shape: Shape,
    pub tooltip: Option<String>,
    pub popup: Option<Popup>,
}

impl Element {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            tooltip: None,
            popup: None,
        }
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }
}

/// Named, independently toggled group of elements
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub name: String,
    pub show: bool,
    elements: Vec<Element>,
}

impl Layer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            show: true,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of elements of a given shape kind
    pub fn count_kind(&self, kind: &str) -> usize {
        self.elements.iter().filter(|e| e.shape.kind() == kind).count()
    }

    pub fn points(&self) -> impl Iterator<Item = LatLng> + '_ {
        self.elements
            .iter()
            .flat_map(|e| e.shape.points().iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(lat: f64, lng: f64) -> Element {
        Element::new(Shape::Marker {
            at: LatLng::new(lat, lng),
            icon: Icon {
                color: "red".into(),
                glyph: "bolt".into(),
                prefix: "fa".into(),
            },
        })
    }

    #[test]
    fn test_layer_counts() {
        let mut layer = Layer::new("발전소");
        assert!(layer.is_empty());
        layer.push(marker(35.0, 129.0).with_tooltip("a"));
        layer.push(Element::new(Shape::PolyLine {
            path: vec![LatLng::new(35.0, 129.0), LatLng::new(36.0, 128.0)],
            style: LineStyle {
                color: "#000".into(),
                weight: 1.0,
                opacity: 1.0,
                dash_array: "2 2".into(),
            },
        }));
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.count_kind("marker"), 1);
        assert_eq!(layer.count_kind("polyline"), 1);
        assert_eq!(layer.points().count(), 3);
        assert!(layer.show);
    }
}
