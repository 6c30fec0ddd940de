/*!
These are all the custom errors that this library could return.

This library uses a nesting system to convey the most useful information
while minimising the number of unique enumerations required:
- Band:
  - The error occured while validating or building a specific band. The band
    was *not* added to the `BandIndex`.
- Pair:
  - The error occured while intersecting a specific pair of bands during mining.

Empty inputs (no bands, no frequent itemsets) are never errors, they simply
produce empty results.
*/

/// Errors produced while building grids, mining itemsets or generating rules.
#[derive(Clone, Debug, PartialEq)]
pub enum ParmError {
  /// Produced when a grid is declared with a width of 0.
  InvalidGridSize {
    ///
    size: usize,
  },
  /// Produced when a matrix does not have the declared `size x size` shape,
  /// or when two grids of different sizes are combined.
  DimensionMismatch {
    /// The width/height the grid was declared with.
    expected: usize,
    /// `[rows, columns]` that were actually found. For ragged input, columns
    /// is the length of the first row that didn't match.
    found: [usize; 2],
  },
  /// Produced when a source matrix contains a value other than 0 or 1.
  InvalidCell {
    ///
    x: usize,
    ///
    y: usize,
    ///
    value: u8,
  },
  /// Produced when a user attempts to read a cell outside of the grid.
  OutOfBounds {
    ///
    x_y: [usize; 2],
    ///
    max_x_y: [usize; 2],
  },
  /// Produced when a grid cannot be evenly split into `k * k` quadrants.
  CannotSubdivide {
    ///
    size: usize,
    ///
    k: usize,
  },
  /// Produced when a rule's antecedent has a support of 0, so its confidence
  /// is undefined.
  DivisionByZero {
    /// The band indices of the antecedent.
    antecedent: Vec<usize>,
  },
  /// Produced when an itemset refers to a band the `BandIndex` doesn't hold.
  UnknownBand {
    ///
    band: usize,
  },
  /// Produced when an intersection is requested over zero grids.
  EmptyIntersection,
  /// Produced when a `MiningConfig` holds an unusable threshold.
  InvalidConfig {
    ///
    reason: String,
  },
  /// Indicates that the source error was produced while building the band
  /// with the given index.
  Band {
    ///
    band: usize,
    ///
    source: Box<ParmError>,
  },
  /// Indicates that the source error was produced while intersecting the
  /// given pair of bands.
  Pair {
    ///
    bands: [usize; 2],
    ///
    source: Box<ParmError>,
  },
}
impl std::error::Error for ParmError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use ParmError::*;
    match self {
      Band{source, ..} => Some(source),
      Pair{source, ..} => Some(source),
      _ => None,
    }
  }
}
impl std::fmt::Display for ParmError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use ParmError::*;
    match self {
      InvalidGridSize{size} => write!(f, "Attempt to create a grid with a width of {}, the minimum is 1.", size),
      DimensionMismatch {
        expected,
        found: [rows, cols],
      } => write!(f, "Expected a {0}x{0} matrix but found {1} rows with a row of length {2}", expected, rows, cols),
      InvalidCell{x, y, value} => write!(f, "Cell at coordinates ({}, {}) holds {}, only 0 and 1 are allowed", x, y, value),
      OutOfBounds {
        x_y: [x, y],
        max_x_y: [max_x, max_y],
      } => write!(f, "Attempt to access a cell at coordinates ({}, {}) which are not in the range of the grid: (0, 0) -> ({}, {})", x, y, max_x, max_y),
      CannotSubdivide{size, k} => write!(f, "A grid of width {} could not be evenly subdivided into {}x{} quadrants.", size, k, k),
      DivisionByZero{antecedent} => write!(f, "Antecedent {:?} has a support of 0, its confidence is undefined", antecedent),
      UnknownBand{band} => write!(f, "Band {} does not exist", band),
      EmptyIntersection => write!(f, "Cannot intersect an empty set of grids"),
      InvalidConfig{reason} => write!(f, "Invalid mining configuration: {}", reason),
      Band{band, source} => write!(f, "Error in band {}: {}", band, source),
      Pair{bands: [i, j], source} => write!(f, "Error intersecting bands {} and {}: {}", i, j, source),
    }
  }
}
