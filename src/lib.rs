#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

/*!
Spatial association-rule mining over multi-band bit-matrices.

Each band of a spatial dataset (a spectral channel, a land-use layer...) is stored
as a count-annotated `Grid`, a simplified Peano-tree or "P-tree". Bands are intersected
with a bitwise AND to count how often they co-occur, and rules of the form
"band X implies band Y" are kept when they meet support and confidence thresholds.

**Note:** This library relies upon [bitvec](https://docs.rs/bitvec/0.17.4/bitvec/) to store
grid cells. Always try to compile with optimisations!
*/

/*!
# How it Works:

## Bands as Grids

Every band is a square bit-matrix. Its root count is the number of 1-cells:

```ignore
Band 0         Band 2
1 0 0 1        1 1 1 0
0 1 1 0        0 1 0 0
1 0 1 1        1 0 1 1
0 0 1 0        1 0 0 0
count: 8       count: 8
```

## Support

ANDing two grids keeps only the cells where both bands are 1.
The root count of the result is the support of the pair:

```ignore
Band 0 & Band 2
1 0 0 0
0 1 0 0
1 0 1 1
0 0 0 0
support: 5
```

Every pair `(i, j)` with `i < j` is visited in ascending order, and pairs whose support
reaches the minimum become frequent itemsets.

## Confidence

A frequent pair `{0, 2}` yields the rules `{2} -> {0}` and `{0} -> {2}`. The confidence of
a rule is the support of the pair divided by the root count of the antecedent band:

```ignore
{0} -> {2}: 5 / 8 = 0.625
```

Rules are kept when their confidence reaches the minimum.

## Quadrant Counts

A full P-tree would also record the count of each quadrant, recursively. This library keeps
the grid dense, but one level of those counts is available through `Grid::quadrant_counts`:

```ignore
1 0 | 0 1
0 1 | 1 0      2 | 2
----+----  =>  --+--
1 0 | 1 1      1 | 3
0 0 | 1 0
```
*/

pub use grid::Grid;
pub use bands::{Band, BandIndex};
pub use config::MiningConfig;
pub use pipeline::{MiningReport, Parm};

/// `Grid` struct.
pub mod grid;

/// `Band` and `BandIndex`.
pub mod bands;

/// Grid intersection.
pub mod intersect;

/// Frequent-itemset mining.
pub mod itemsets;

/// Association-rule generation.
pub mod rules;

/// `MiningConfig` struct.
pub mod config;

/// The full mining pipeline.
pub mod pipeline;

/// Library error types.
pub mod error;

#[cfg(test)]
mod unit_tests;
