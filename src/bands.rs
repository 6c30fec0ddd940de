use {
  serde::Serialize,
  tracing::debug,
  crate::error::ParmError as Error,
  crate::grid::Grid,
};

type Result<T> = std::result::Result<T, Error>;

/// One layer of a spatial dataset, e.g. a single spectral channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Band {
  /// Position of the band in its `BandIndex`, starting at 0.
  pub index: usize,
  /// Optional human-readable label.
  pub name: Option<String>,
  /// The band's cell pattern.
  pub grid: Grid,
}

/// A write-once, ordered collection of bands that all share the same grid size.
///
/// Bands are numbered from 0 in the order they were added, and every other
/// part of the library refers to bands purely by that number.
///
/// ```
/// fn main() -> Result<(), ptree_arm::error::ParmError> {
///   use ptree_arm::BandIndex;
///   let mut bands = BandIndex::new(2)?;
///   assert_eq!(0, bands.add_band(&[[1, 0], [0, 1]])?);
///   assert_eq!(1, bands.add_named_band("red", &[[1, 1], [1, 0]])?);
///   assert!(bands.add_band(&[vec![1, 1], vec![1]]).is_err());
///   assert_eq!(2, bands.len());
///   assert_eq!(3, bands.grid(1)?.population());
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandIndex {
  grid_size: usize,
  bands: Vec<Band>,
}

impl BandIndex {
  /// Creates an empty index whose bands must all be `grid_size x grid_size`.
  pub fn new(grid_size: usize) -> Result<Self> {
    if grid_size == 0 {
      return Err(Error::InvalidGridSize { size: grid_size })
    }
    Ok(BandIndex {
      grid_size,
      bands: Vec::new(),
    })
  }
  /// Builds an index from a sequence of band matrices, numbering them in order.
  ///
  /// Stops at the first matrix that doesn't fit.
  pub fn from_matrices<M, R>(grid_size: usize, matrices: impl IntoIterator<Item=M>) -> Result<Self>
  where
    M: AsRef<[R]>,
    R: AsRef<[u8]>,
  {
    let mut index = BandIndex::new(grid_size)?;
    for matrix in matrices {
      index.add_band(matrix.as_ref())?;
    }
    Ok(index)
  }
  /// Validates `matrix` against the index's grid size and appends it as a new band.
  ///
  /// Returns the new band's index. On error nothing is appended and the error
  /// names the index the band would have received.
  pub fn add_band<R: AsRef<[u8]>>(&mut self, matrix: &[R]) -> Result<usize> {
    self.push(None, matrix)
  }
  /// Same as `add_band`, but labels the band.
  pub fn add_named_band<R: AsRef<[u8]>>(&mut self, name: impl Into<String>, matrix: &[R]) -> Result<usize> {
    self.push(Some(name.into()), matrix)
  }
  /// The width and height every band's grid has.
  pub fn grid_size(&self) -> usize {
    self.grid_size
  }
  /// Number of bands.
  pub fn len(&self) -> usize {
    self.bands.len()
  }
  /// Returns true if no band has been added yet.
  pub fn is_empty(&self) -> bool {
    self.bands.is_empty()
  }
  /// Returns the band at `index`, if any.
  pub fn get(&self, index: usize) -> Option<&Band> {
    self.bands.get(index)
  }
  /// Returns the grid of the band at `index`.
  pub fn grid(&self, index: usize) -> Result<&Grid> {
    self.get(index)
      .map(|band| &band.grid)
      .ok_or(Error::UnknownBand { band: index })
  }
  /// Iterates over the bands in index order.
  pub fn iter(&self) -> std::slice::Iter<'_, Band> {
    self.bands.iter()
  }
}

impl<'a> IntoIterator for &'a BandIndex {
  type Item = &'a Band;
  type IntoIter = std::slice::Iter<'a, Band>;
  fn into_iter(self) -> Self::IntoIter {
    self.bands.iter()
  }
}

/* Private */
impl BandIndex {
  fn push<R: AsRef<[u8]>>(&mut self, name: Option<String>, matrix: &[R]) -> Result<usize> {
    let index = self.bands.len();
    let grid = Grid::from_rows(self.grid_size, matrix).map_err(|e| Error::Band {
      band: index,
      source: Box::new(e),
    })?;
    debug!(band = index, population = grid.population(), "added band");
    self.bands.push(Band { index, name, grid });
    Ok(index)
  }
}
