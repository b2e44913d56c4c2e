use std::fmt;

/// Transmission voltage class, determines how a line is drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VoltageClass {
    Kv765,
    Kv345,
    Kv154,
    Hvdc,
}

impl fmt::Display for VoltageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoltageClass::Kv765 => f.write_str("765kV"),
            VoltageClass::Kv345 => f.write_str("345kV"),
            VoltageClass::Kv154 => f.write_str("154kV"),
            VoltageClass::Hvdc => f.write_str("HVDC"),
        }
    }
}

/// Facility category, determines the marker icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FacilityCategory {
    Nuclear,
    Coal,
    Lng,
    Hydro,
    Renewable,
    Substation765,
    Substation345,
    City,
}

impl FacilityCategory {
    pub fn is_substation(self) -> bool {
        matches!(
            self,
            FacilityCategory::Substation765 | FacilityCategory::Substation345
        )
    }
}

impl fmt::Display for FacilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FacilityCategory::Nuclear => "nuclear",
            FacilityCategory::Coal => "coal",
            FacilityCategory::Lng => "lng",
            FacilityCategory::Hydro => "hydro",
            FacilityCategory::Renewable => "renewable",
            FacilityCategory::Substation765 => "substation_765",
            FacilityCategory::Substation345 => "substation_345",
            FacilityCategory::City => "city",
        };
        f.write_str(name)
    }
}

/// Rendering attributes of a transmission line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoltageStyle {
    pub color: &'static str,
    pub weight: f64,
    pub dash_array: &'static str,
    pub opacity: f64,
    pub label: &'static str,
}

/// Marker icon of a facility category (Font Awesome glyph)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FacilityIcon {
    pub color: &'static str,
    pub icon: &'static str,
    pub prefix: &'static str,
    pub label: &'static str,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("no line style registered for voltage class {0}")]
    MissingVoltageStyle(VoltageClass),

    #[error("no marker icon registered for facility category {0}")]
    MissingFacilityIcon(FacilityCategory),
}

/// Ordered style table keyed by `K`; order is kept for legends
pub type StyleTable<K, V> = [(K, V)];

fn lookup<K: PartialEq + Copy, V>(table: &StyleTable<K, V>, key: K) -> Option<&V> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}

pub fn voltage_style(
    table: &StyleTable<VoltageClass, VoltageStyle>,
    class: VoltageClass,
) -> Result<&VoltageStyle, StyleError> {
    lookup(table, class).ok_or(StyleError::MissingVoltageStyle(class))
}

pub fn facility_icon(
    table: &StyleTable<FacilityCategory, FacilityIcon>,
    category: FacilityCategory,
) -> Result<&FacilityIcon, StyleError> {
    lookup(table, category).ok_or(StyleError::MissingFacilityIcon(category))
}
