use crate::{to_coords, CellIndex, Coord, GameError, Result};

/// Offset so that 0° points up in screen orientation instead of atan2's
/// rightward zero.
const UP_OFFSET_DEG: f64 = 90.0;

/// Heading in degrees from one cell toward another, for the directional
/// hint arrow.
///
/// Both indices are decoded against `dimension`; an index outside
/// `[0, dimension²)` fails with [`GameError::InvalidCell`]. The result is
/// left unnormalized (it may lie outside `[0, 360)`); rotation-based
/// renderers do not care, and anyone who does can normalize at the edge.
///
/// `from == to` collapses to `atan2(0, 0) = 0` and therefore yields exactly
/// 90°. Callers suppress the hint for a winning guess instead of relying
/// on that value.
pub fn bearing(from: CellIndex, to: CellIndex, dimension: Coord) -> Result<f64> {
    let total = crate::total_cells(dimension);
    if from >= total || to >= total {
        return Err(GameError::InvalidCell);
    }

    let (from_x, from_y) = to_coords(from, dimension);
    let (to_x, to_y) = to_coords(to, dimension);

    let delta_x = f64::from(to_x) - f64::from(from_x);
    let delta_y = f64::from(to_y) - f64::from(from_y);

    Ok(delta_y.atan2(delta_x).to_degrees() + UP_OFFSET_DEG)
}
