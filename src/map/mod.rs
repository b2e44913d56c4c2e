pub mod document;
pub mod features;
pub mod layer;
pub mod popup;
pub mod style;

pub use document::{BaseMap, Corner, MapDocument, Tiles};
pub use layer::{CircleStyle, DivIcon, Element, Icon, Layer, LineStyle, Popup, Shape};
pub use style::{FacilityCategory, FacilityIcon, StyleError, VoltageClass, VoltageStyle};
