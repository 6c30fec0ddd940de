use {
  crate::error::ParmError as Error,
  crate::grid::Grid,
};

type Result<T> = std::result::Result<T, Error>;

/// Intersects two grids, producing a new grid of their co-occurring 1-cells.
///
/// The population of the result is the support of the two bands together.
/// Costs O(size²).
pub fn intersect(a: &Grid, b: &Grid) -> Result<Grid> {
  a.and(b)
}

/// Intersects any non-zero number of grids, left to right.
///
/// A single grid intersects to a copy of itself.
/// ```
/// fn main() -> Result<(), ptree_arm::error::ParmError> {
///   use ptree_arm::{Grid, intersect::intersect_all};
///   let a = Grid::from_rows(2, &[[1, 1], [1, 0]])?;
///   let b = Grid::from_rows(2, &[[1, 1], [0, 1]])?;
///   let c = Grid::from_rows(2, &[[0, 1], [1, 1]])?;
///   assert_eq!(1, intersect_all(vec![&a, &b, &c])?.population());
///   assert!(intersect_all(Vec::new()).is_err());
///   Ok(())
/// }
/// ```
pub fn intersect_all<'a>(grids: impl IntoIterator<Item=&'a Grid>) -> Result<Grid> {
  let mut grids = grids.into_iter();
  let first = grids.next().ok_or(Error::EmptyIntersection)?;
  grids.try_fold(first.clone(), |acc, grid| intersect(&acc, grid))
}
