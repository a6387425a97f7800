use geo::{Coord, Rect};

/// Western edge of the drawable area, in degrees longitude.
pub const MIN_LON: f64 = 124.5;
/// Eastern edge of the drawable area, in degrees longitude.
pub const MAX_LON: f64 = 131.0;
/// Southern edge, low enough to include Jeju.
pub const MIN_LAT: f64 = 33.0;
/// Northern edge, in degrees latitude.
pub const MAX_LAT: f64 = 38.7;

pub const CANVAS_WIDTH: f64 = 500.0;
pub const CANVAS_HEIGHT: f64 = 700.0;

pub const MARGIN_TOP: f64 = 20.0;
pub const MARGIN_SIDE: f64 = 20.0;
/// Larger than the top margin so the peninsula does not sit visually low.
pub const MARGIN_BOTTOM: f64 = 60.0;

/// Label anchor used when a region has no outline points.
pub const FALLBACK_ANCHOR: Coord<f64> = Coord { x: CANVAS_WIDTH / 2.0, y: CANVAS_HEIGHT / 2.0 };

/// Geographic box covered by the canvas, as a `geo::Rect` (x = lon, y = lat).
pub fn bounds() -> Rect<f64> {
    Rect::new(Coord { x: MIN_LON, y: MIN_LAT }, Coord { x: MAX_LON, y: MAX_LAT })
}

/// Linear lon/lat -> canvas mapping. Y grows downward, so increasing latitude moves up.
///
/// No clamping: coordinates outside [`bounds`] land outside the drawable area.
#[inline]
pub fn project(lon: f64, lat: f64) -> (f64, f64) {
    let inner_width = CANVAS_WIDTH - 2.0 * MARGIN_SIDE;
    let inner_height = CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    let x = MARGIN_SIDE + (lon - MIN_LON) / (MAX_LON - MIN_LON) * inner_width;
    let y = MARGIN_TOP + (MAX_LAT - lat) / (MAX_LAT - MIN_LAT) * inner_height; // invert vertically
    (x, y)
}

/// Project a lon/lat coordinate into a canvas coordinate.
#[inline]
pub fn project_coord(coord: &Coord<f64>) -> Coord<f64> {
    let (x, y) = project(coord.x, coord.y);
    Coord { x, y }
}
