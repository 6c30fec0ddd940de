use {
  std::collections::HashSet,
  serde::{Deserialize, Serialize},
  tracing::{debug, trace},
  crate::error::ParmError as Error,
  crate::bands::BandIndex,
  crate::intersect::{intersect, intersect_all},
};

type Result<T> = std::result::Result<T, Error>;

/// A combination of bands together with its support.
///
/// `members` is always sorted ascending and holds at least two band indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Itemset {
  /// Indices of the member bands, ascending.
  pub members: Vec<usize>,
  /// Number of cells that are 1 in every member band.
  pub support: usize,
}

impl std::fmt::Display for Itemset {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}: support = {}", self.members, self.support)
  }
}

/// Finds every pair of bands whose intersection holds at least `min_support` 1-cells.
///
/// Pairs `(i, j)` with `i < j` are visited by ascending `i`, then ascending `j`,
/// and the result keeps that order. With fewer than two bands the result is empty,
/// and a `min_support` of 0 makes every pair frequent.
/// ```
/// fn main() -> Result<(), ptree_arm::error::ParmError> {
///   use ptree_arm::{BandIndex, itemsets::mine};
///   let bands = BandIndex::from_matrices(2, vec![
///     vec![[1, 0], [0, 1]],
///     vec![[1, 0], [1, 0]],
///   ])?;
///   let frequent = mine(&bands, 1)?;
///   assert_eq!(1, frequent.len());
///   assert_eq!(vec![0, 1], frequent[0].members);
///   assert_eq!(1, frequent[0].support);
///   assert!(mine(&bands, 2)?.is_empty());
///   Ok(())
/// }
/// ```
pub fn mine(bands: &BandIndex, min_support: usize) -> Result<Vec<Itemset>> {
  let mut frequent = Vec::new();
  for [i, j] in band_pairs(bands.len()) {
    if let Some(itemset) = evaluate_pair(bands, i, j, min_support)? {
      frequent.push(itemset);
    }
  }
  debug!(bands = bands.len(), min_support, frequent = frequent.len(), "mined band pairs");
  Ok(frequent)
}

/// Same as [`mine`], with the pairs evaluated on the rayon thread pool.
///
/// All pairs are joined before returning, and the output order is identical to `mine`.
#[cfg(feature = "parallel")]
pub fn mine_parallel(bands: &BandIndex, min_support: usize) -> Result<Vec<Itemset>> {
  use rayon::prelude::*;
  let pairs: Vec<[usize; 2]> = band_pairs(bands.len()).collect();
  let evaluated = pairs
    .par_iter()
    .map(|&[i, j]| evaluate_pair(bands, i, j, min_support))
    .collect::<Result<Vec<Option<Itemset>>>>()?;
  let frequent: Vec<Itemset> = evaluated.into_iter().flatten().collect();
  debug!(bands = bands.len(), min_support, frequent = frequent.len(), "mined band pairs in parallel");
  Ok(frequent)
}

/// Grows frequent itemsets beyond pairs, up to `max_len` members.
///
/// Level 2 is exactly [`mine`]. Each further level joins two frequent itemsets
/// that differ only in their last member, drops candidates with an infrequent
/// subset, and keeps those whose intersection still meets `min_support`.
///
/// The result is ordered by itemset length, then lexicographically by members.
/// A `max_len` below 2 produces nothing.
pub fn mine_levelwise(bands: &BandIndex, min_support: usize, max_len: usize) -> Result<Vec<Itemset>> {
  if max_len < 2 {
    return Ok(Vec::new())
  }
  let mut frequent = Vec::new();
  let mut level = mine(bands, min_support)?;
  let mut len = 2;
  while !level.is_empty() && len < max_len {
    let next = next_level(bands, &level, len, min_support)?;
    debug!(len = len + 1, frequent = next.len(), "mined itemset level");
    frequent.append(&mut level);
    level = next;
    len += 1;
  }
  frequent.append(&mut level);
  Ok(frequent)
}

/* Private */
fn band_pairs(n: usize) -> impl Iterator<Item=[usize; 2]> {
  (0..n).flat_map(move |i| (i+1..n).map(move |j| [i, j]))
}

fn evaluate_pair(bands: &BandIndex, i: usize, j: usize, min_support: usize) -> Result<Option<Itemset>> {
  let support = intersect(bands.grid(i)?, bands.grid(j)?)
    .map_err(|e| Error::Pair {
      bands: [i, j],
      source: Box::new(e),
    })?
    .population();
  trace!(i, j, support, "evaluated band pair");
  if support >= min_support {
    Ok(Some(Itemset {
      members: vec![i, j],
      support,
    }))
  }
  else {
    Ok(None)
  }
}

/// `level` must be sorted and hold itemsets of exactly `len` members.
fn next_level(bands: &BandIndex, level: &[Itemset], len: usize, min_support: usize) -> Result<Vec<Itemset>> {
  let known: HashSet<&[usize]> = level.iter().map(|s| s.members.as_slice()).collect();
  let mut next = Vec::new();
  for (pos, a) in level.iter().enumerate() {
    for b in &level[pos+1..] {
      // Sorted order keeps itemsets sharing a prefix next to each other
      if a.members[..len-1] != b.members[..len-1] { break }
      let mut members = a.members.clone();
      members.push(b.members[len-1]);
      if !all_subsets_frequent(&members, &known) {
        trace!(?members, "pruned candidate with an infrequent subset");
        continue
      }
      let grids = members
        .iter()
        .map(|&m| bands.grid(m))
        .collect::<Result<Vec<_>>>()?;
      let support = intersect_all(grids)?.population();
      if support >= min_support {
        next.push(Itemset { members, support });
      }
    }
  }
  Ok(next)
}

fn all_subsets_frequent(members: &[usize], known: &HashSet<&[usize]>) -> bool {
  (0..members.len()).all(|skip| {
    let subset: Vec<usize> = members
      .iter()
      .enumerate()
      .filter(|(pos, _)| *pos != skip)
      .map(|(_, &m)| m)
      .collect();
    known.contains(subset.as_slice())
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::Rng;

  fn four_bands() -> BandIndex {
    BandIndex::from_matrices(2, vec![
      vec![[1, 1], [1, 0]],
      vec![[1, 1], [0, 1]],
      vec![[0, 1], [1, 1]],
      vec![[0, 0], [0, 0]],
    ]).unwrap()
  }

  #[test]
  fn pairs_in_ascending_order() {
    let pairs: Vec<[usize; 2]> = band_pairs(4).collect();
    assert_eq!(vec![[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]], pairs);
    assert_eq!(0, band_pairs(1).count());
    assert_eq!(0, band_pairs(0).count());
  }
  #[test]
  fn mine_two_bands() -> Result<()> {
    let bands = BandIndex::from_matrices(2, vec![
      vec![[1, 0], [0, 1]],
      vec![[1, 0], [1, 0]],
    ])?;
    assert_eq!(vec![Itemset { members: vec![0, 1], support: 1 }], mine(&bands, 1)?);
    assert_eq!(Vec::<Itemset>::new(), mine(&bands, 2)?);
    Ok(())
  }
  #[test]
  fn mine_keeps_enumeration_order() -> Result<()> {
    let frequent = mine(&four_bands(), 1)?;
    let members: Vec<Vec<usize>> = frequent.iter().map(|s| s.members.clone()).collect();
    assert_eq!(vec![vec![0, 1], vec![0, 2], vec![1, 2]], members);
    let supports: Vec<usize> = frequent.iter().map(|s| s.support).collect();
    assert_eq!(vec![2, 2, 2], supports);
    Ok(())
  }
  #[test]
  fn zero_support_keeps_every_pair() -> Result<()> {
    assert_eq!(6, mine(&four_bands(), 0)?.len());
    Ok(())
  }
  #[test]
  fn fewer_than_two_bands() -> Result<()> {
    let mut bands = BandIndex::new(2)?;
    assert!(mine(&bands, 0)?.is_empty());
    bands.add_band(&[[1, 1], [1, 1]])?;
    assert!(mine(&bands, 0)?.is_empty());
    Ok(())
  }
  #[test]
  fn support_bounded_by_member_bands() -> Result<()> {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
      let matrices: Vec<Vec<Vec<u8>>> = (0..5)
        .map(|_| (0..6).map(|_| (0..6).map(|_| rng.gen_range(0, 2)).collect()).collect())
        .collect();
      let bands = BandIndex::from_matrices(6, matrices)?;
      for itemset in mine_levelwise(&bands, 0, 5)? {
        for &m in &itemset.members {
          assert!(itemset.support <= bands.grid(m)?.population());
        }
      }
    }
    Ok(())
  }
  #[test]
  fn levelwise_pairs_only_matches_mine() -> Result<()> {
    let bands = four_bands();
    assert_eq!(mine(&bands, 1)?, mine_levelwise(&bands, 1, 2)?);
    assert!(mine_levelwise(&bands, 1, 1)?.is_empty());
    Ok(())
  }
  #[test]
  fn levelwise_grows_triples() -> Result<()> {
    let bands = BandIndex::from_matrices(2, vec![
      vec![[1, 1], [1, 0]],
      vec![[1, 1], [0, 1]],
      vec![[1, 1], [1, 1]],
      vec![[0, 0], [0, 1]],
    ])?;
    let frequent = mine_levelwise(&bands, 2, 4)?;
    let members: Vec<Vec<usize>> = frequent.iter().map(|s| s.members.clone()).collect();
    assert_eq!(
      vec![vec![0, 1], vec![0, 2], vec![1, 2], vec![0, 1, 2]],
      members
    );
    assert_eq!(2, frequent[3].support);
    Ok(())
  }
  #[test]
  fn levelwise_prunes_infrequent_subsets() {
    let mut pairs: Vec<Vec<usize>> = vec![vec![0, 1], vec![0, 2]];
    {
      let known: HashSet<&[usize]> = pairs.iter().map(|p| p.as_slice()).collect();
      assert!(!all_subsets_frequent(&[0, 1, 2], &known));
    }
    pairs.push(vec![1, 2]);
    let known: HashSet<&[usize]> = pairs.iter().map(|p| p.as_slice()).collect();
    assert!(all_subsets_frequent(&[0, 1, 2], &known));
  }
  #[test]
  fn display() {
    let itemset = Itemset { members: vec![0, 2], support: 3 };
    assert_eq!("[0, 2]: support = 3", itemset.to_string());
  }
  #[cfg(feature = "parallel")]
  #[test]
  fn parallel_matches_sequential() -> Result<()> {
    let bands = four_bands();
    for min_support in 0..4 {
      assert_eq!(mine(&bands, min_support)?, mine_parallel(&bands, min_support)?);
    }
    Ok(())
  }
}
