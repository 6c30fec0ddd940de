use {
  std::convert::TryFrom,
  bitvec::vec::BitVec,
  serde::{Deserialize, Serialize},
  crate::error::ParmError as Error,
  crate::grid::*,
};

type Result<T> = std::result::Result<T, Error>;

/// A square bit-matrix annotated with its number of 1-cells.
///
/// This is the "P-tree" of a single band: the full cell pattern is kept densely,
/// and the count of pure-1 cells (the root count) is cached alongside it.
/// The cached count is always recomputed from the final cells, never patched,
/// so `population()` can be trusted the moment a `Grid` exists.
///
/// Grids are value objects: once built they are only read or combined into new grids.
///
/// ```
/// fn main() -> Result<(), ptree_arm::error::ParmError> {
///   use ptree_arm::Grid;
///   let a = Grid::from_rows(2, &[[1, 0], [0, 1]])?;
///   let b = Grid::from_rows(2, &[[1, 0], [1, 0]])?;
///   let c = a.and(&b)?;
///   assert_eq!(1, c.population());
///   assert_eq!(vec![vec![1, 0], vec![0, 0]], c.to_rows());
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "GridRepr", try_from = "GridRepr")]
pub struct Grid {
  size: usize,
  /// Row-major: the cell at column x, row y lives at `y*size + x`.
  cells: BitVec,
  population: usize,
}

/* Public */
impl Grid {
  /// Returns an all-zero `Grid` of width and height `size`.
  /// ```
  /// use ptree_arm::Grid;
  /// let g = Grid::new(4).unwrap();
  /// assert_eq!(4, g.size());
  /// assert_eq!(0, g.population());
  /// assert!(Grid::new(0).is_err());
  /// ```
  pub fn new(size: usize) -> Result<Self> {
    if size == 0 {
      return Err(Error::InvalidGridSize { size })
    }
    let mut cells = BitVec::with_capacity(size*size);
    cells.resize_with(size*size, Default::default);
    Ok(Grid {
      size,
      cells,
      population: 0,
    })
  }
  /// Builds a `Grid` of width `size` from a matrix of rows of 0/1 values.
  pub fn from_rows<R: AsRef<[u8]>>(size: usize, matrix: &[R]) -> Result<Self> {
    let mut grid = Grid::new(size)?;
    grid.build(matrix)?;
    Ok(grid)
  }
  /// Builds a `Grid` from a flat, row-major collection of bits.
  ///
  /// Unlike a `BitMatrix`, the data is never padded or truncated: anything other
  /// than exactly `size * size` bits is a `DimensionMismatch`.
  pub fn from_bits(size: usize, data: impl IntoIterator<Item=bool>) -> Result<Self> {
    if size == 0 {
      return Err(Error::InvalidGridSize { size })
    }
    let cells: BitVec = data.into_iter().collect();
    if cells.len() != size*size {
      return Err(Error::DimensionMismatch {
        expected: size,
        found: match cells.len() % size {
          0 => [cells.len() / size, size],
          partial => [cells.len() / size + 1, partial],
        },
      })
    }
    let population = ones_in_range(&cells, 0, cells.len());
    Ok(Grid {
      size,
      cells,
      population,
    })
  }
  /// Populates the grid from a matrix of rows of 0/1 values.
  ///
  /// The whole matrix is validated before anything is written, so on error
  /// the grid is left exactly as it was.
  /// ```
  /// use ptree_arm::Grid;
  /// let mut g = Grid::new(2).unwrap();
  /// assert!(g.build(&[vec![1, 1], vec![1]]).is_err());
  /// assert_eq!(0, g.population());
  /// g.build(&[vec![1, 1], vec![0, 1]]).unwrap();
  /// assert_eq!(3, g.population());
  /// ```
  pub fn build<R: AsRef<[u8]>>(&mut self, matrix: &[R]) -> Result<()> {
    validate(self.size, matrix)?;
    self.cells = matrix
      .iter()
      .flat_map(|row| row.as_ref().iter().map(|&v| v == 1))
      .collect();
    self.population = ones_in_range(&self.cells, 0, self.cells.len());
    Ok(())
  }
  /// Returns a new `Grid` holding the cell-wise AND of both grids.
  ///
  /// Neither input is modified. Both grids must have the same width.
  pub fn and(&self, other: &Grid) -> Result<Grid> {
    if self.size != other.size {
      return Err(Error::DimensionMismatch {
        expected: self.size,
        found: [other.size, other.size],
      })
    }
    let cells: BitVec = self.cells
      .iter()
      .zip(other.cells.iter())
      .map(|(a, b)| *a & *b)
      .collect();
    let population = ones_in_range(&cells, 0, cells.len());
    Ok(Grid {
      size: self.size,
      cells,
      population,
    })
  }
  /// Width (and height) of the grid.
  pub fn size(&self) -> usize {
    self.size
  }
  /// Number of 1-cells in the grid. O(1).
  pub fn population(&self) -> usize {
    self.population
  }
  /// Returns true if the grid contains no 1s.
  pub fn is_empty(&self) -> bool {
    self.population == 0
  }
  /// Returns the state of the cell at column `x`, row `y`.
  pub fn get(&self, x: usize, y: usize) -> Result<bool> {
    if x >= self.size || y >= self.size {
      return Err(Error::OutOfBounds {
        x_y: [x, y],
        max_x_y: [self.size-1, self.size-1],
      })
    }
    Ok(self.cells[y*self.size + x])
  }
  /// Produces the contents of the grid as rows of 0/1 values.
  pub fn to_rows(&self) -> Vec<Vec<u8>> {
    let mut rows = vec![Vec::with_capacity(self.size); self.size];
    for (y, row) in rows.iter_mut().enumerate() {
      row.extend(self.cells[y*self.size..(y+1)*self.size].into_iter().map(|bit| *bit as u8));
    }
    rows
  }
  /// Splits the grid into `k * k` equally sized quadrants and returns the
  /// population of each, ordered by rows then columns.
  ///
  /// These are the counts found one level below the root of a k-ary P-tree.
  /// ```
  /// fn main() -> Result<(), ptree_arm::error::ParmError> {
  ///   use ptree_arm::Grid;
  ///   let g = Grid::from_rows(4, &[
  ///     [1, 1, 0, 0],
  ///     [1, 1, 0, 1],
  ///     [0, 0, 0, 0],
  ///     [1, 0, 0, 0],
  ///   ])?;
  ///   assert_eq!(vec![4, 1, 1, 0], g.quadrant_counts(2)?);
  ///   assert!(g.quadrant_counts(3).is_err());
  ///   Ok(())
  /// }
  /// ```
  pub fn quadrant_counts(&self, k: usize) -> Result<Vec<usize>> {
    let whole = Range2D::new(0, self.size-1, 0, self.size-1);
    let quadrants = SubRanges::from_range(whole, k, k)?;
    Ok(quadrants.iter().map(|r| self.ones_in(r)).collect())
  }
}

/* Traits */
impl std::fmt::Display for Grid {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "P-tree root count: {}", self.population)?;
    for row in self.to_rows() {
      let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
      writeln!(f, "{}", line.join(" "))?;
    }
    Ok(())
  }
}

/// Serialized form of a `Grid`. The population is left out and recomputed on load.
#[derive(Serialize, Deserialize)]
struct GridRepr {
  size: usize,
  rows: Vec<Vec<u8>>,
}
impl From<Grid> for GridRepr {
  fn from(grid: Grid) -> Self {
    GridRepr {
      size: grid.size,
      rows: grid.to_rows(),
    }
  }
}
impl TryFrom<GridRepr> for Grid {
  type Error = Error;
  fn try_from(repr: GridRepr) -> Result<Self> {
    Grid::from_rows(repr.size, &repr.rows)
  }
}

/* Private */
impl Grid {
  fn ones_in(&self, r: &Range2D) -> usize {
    (r.min_y..=r.max_y)
      .map(|y| {
        let row_start = y*self.size;
        ones_in_range(&self.cells, row_start + r.min_x, row_start + r.max_x + 1)
      })
      .sum()
  }
}

fn validate<R: AsRef<[u8]>>(size: usize, matrix: &[R]) -> Result<()> {
  let bad_row = matrix.iter().map(|row| row.as_ref()).find(|row| row.len() != size);
  if matrix.len() != size || bad_row.is_some() {
    let cols = bad_row
      .or_else(|| matrix.first().map(|row| row.as_ref()))
      .map_or(0, |row| row.len());
    return Err(Error::DimensionMismatch {
      expected: size,
      found: [matrix.len(), cols],
    })
  }
  for (y, row) in matrix.iter().enumerate() {
    for (x, &value) in row.as_ref().iter().enumerate() {
      if value > 1 {
        return Err(Error::InvalidCell { x, y, value })
      }
    }
  }
  Ok(())
}
