use glam::DVec2;

/// A geographic position in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// GeoJSON position order is (lon, lat)
    #[inline(always)]
    pub fn to_position(self) -> Vec<f64> {
        vec![self.lng, self.lat]
    }

    #[inline(always)]
    fn to_vec(self) -> DVec2 {
        DVec2::new(self.lng, self.lat)
    }
}

/// Axis-aligned bounding box over lon/lat
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min: DVec2,
    max: DVec2,
}

impl Bounds {
    /// Smallest box containing every point, `None` when there are no points
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = LatLng>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?.to_vec();
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            let v = p.to_vec();
            (min.min(v), max.max(v))
        });
        Some(Self { min, max })
    }

    /// Grow the box by `degrees` on every side, clamped to valid latitudes
    pub fn padded(self, degrees: f64) -> Self {
        let pad = DVec2::splat(degrees);
        let min = (self.min - pad).max(DVec2::new(-180.0, -90.0));
        let max = (self.max + pad).min(DVec2::new(180.0, 90.0));
        Self { min, max }
    }

    pub fn south_west(&self) -> LatLng {
        LatLng::new(self.min.y, self.min.x)
    }

    pub fn north_east(&self) -> LatLng {
        LatLng::new(self.max.y, self.max.x)
    }

    pub fn contains(&self, p: LatLng) -> bool {
        let v = p.to_vec();
        v.cmpge(self.min).all() && v.cmple(self.max).all()
    }

    /// Leaflet `[[south, west], [north, east]]` form
    pub fn to_leaflet(&self) -> [[f64; 2]; 2] {
        [[self.min.y, self.min.x], [self.max.y, self.max.x]]
    }
}
