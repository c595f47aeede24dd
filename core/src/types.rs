/// Single coordinate axis of the square grid.
pub type Coord = u16;

/// Linear cell address in row-major order, valid in `[0, dimension²)`.
pub type CellIndex = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Total number of cells for a square grid of the given dimension.
pub const fn total_cells(dimension: Coord) -> CellIndex {
    let n = dimension as CellIndex;
    n * n
}

/// Decodes a linear index into `(x, y)`.
///
/// The mapping is a bijection with `[0, dimension²)`: `x = index % dimension`,
/// `y = index / dimension`. Callers validate the index first.
pub const fn to_coords(index: CellIndex, dimension: Coord) -> Coord2 {
    let n = dimension as CellIndex;
    ((index % n) as Coord, (index / n) as Coord)
}

/// Encodes `(x, y)` back into a linear index.
pub const fn to_index((x, y): Coord2, dimension: Coord) -> CellIndex {
    let n = dimension as CellIndex;
    (y as CellIndex) * n + (x as CellIndex)
}
