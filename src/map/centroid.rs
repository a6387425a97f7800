use geo::Coord;

use crate::geom::{ProjectedPath, FALLBACK_ANCHOR};

/// Label anchor for a region: the unweighted mean of every projected point in its paths.
///
/// Each vertex counts once, so rings with more vertices pull the anchor toward them.
/// This is a label position, not the area centroid. Empty input returns [`FALLBACK_ANCHOR`].
pub fn centroid_of(paths: &[ProjectedPath]) -> Coord<f64> {
    mean_point(paths.iter().flat_map(|path| path.points().iter().copied()))
}

/// Arithmetic mean of a point sequence, or [`FALLBACK_ANCHOR`] when empty.
pub fn mean_point(points: impl IntoIterator<Item = Coord<f64>>) -> Coord<f64> {
    let (sum, n) = points.into_iter()
        .fold((Coord { x: 0.0, y: 0.0 }, 0usize), |(sum, n), p| (sum + p, n + 1));

    if n == 0 { return FALLBACK_ANCHOR }
    sum / n as f64
}
