use {
  serde::{Deserialize, Serialize},
  tracing::{debug, trace},
  crate::error::ParmError as Error,
  crate::bands::BandIndex,
  crate::intersect::intersect_all,
  crate::itemsets::Itemset,
};

type Result<T> = std::result::Result<T, Error>;

/// An association rule `antecedent -> consequent` derived from a frequent itemset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
  /// Bands on the left-hand side of the rule.
  pub antecedent: Vec<usize>,
  /// Bands on the right-hand side of the rule.
  pub consequent: Vec<usize>,
  /// Support of the whole itemset the rule came from.
  pub support: usize,
  /// `support / support(antecedent)`, a fraction in `[0, 1]`.
  pub confidence: f64,
}

impl std::fmt::Display for Rule {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?} -> {:?}: confidence = {}", self.antecedent, self.consequent, self.confidence)
  }
}

/// Derives every rule whose confidence is at least `min_confidence`.
///
/// For each itemset, every non-empty proper subset of its members is tried as
/// the consequent, smallest subsets first and then in member order, with the
/// remaining members as the antecedent. For a pair `{i, j}` that is exactly
/// `{j} -> {i}` followed by `{i} -> {j}`.
///
/// The support of a single-band antecedent is that band's own population;
/// larger antecedents use the population of their intersection. An antecedent
/// with a support of 0 fails with `DivisionByZero`.
/// ```
/// fn main() -> Result<(), ptree_arm::error::ParmError> {
///   use ptree_arm::{BandIndex, itemsets::mine, rules::generate};
///   let bands = BandIndex::from_matrices(2, vec![
///     vec![[1, 1], [1, 1]],
///     vec![[1, 1], [0, 0]],
///   ])?;
///   let frequent = mine(&bands, 2)?;
///   let rules = generate(&frequent, &bands, 0.6)?;
///   assert_eq!(1, rules.len());
///   assert_eq!(vec![1], rules[0].antecedent);
///   assert_eq!(1.0, rules[0].confidence);
///   assert_eq!(2, generate(&frequent, &bands, 0.5)?.len());
///   Ok(())
/// }
/// ```
pub fn generate(itemsets: &[Itemset], bands: &BandIndex, min_confidence: f64) -> Result<Vec<Rule>> {
  let mut rules = Vec::new();
  for itemset in itemsets {
    for consequent in consequents(&itemset.members) {
      let antecedent: Vec<usize> = itemset.members
        .iter()
        .copied()
        .filter(|m| !consequent.contains(m))
        .collect();
      let antecedent_support = support_of(bands, &antecedent)?;
      if antecedent_support == 0 {
        return Err(Error::DivisionByZero { antecedent })
      }
      let confidence = itemset.support as f64 / antecedent_support as f64;
      if confidence >= min_confidence {
        rules.push(Rule {
          antecedent,
          consequent,
          support: itemset.support,
          confidence,
        });
      }
      else {
        trace!(?antecedent, ?consequent, confidence, "rule below confidence threshold");
      }
    }
  }
  debug!(itemsets = itemsets.len(), min_confidence, rules = rules.len(), "generated rules");
  Ok(rules)
}

/* Private */
fn support_of(bands: &BandIndex, members: &[usize]) -> Result<usize> {
  match members {
    [band] => Ok(bands.grid(*band)?.population()),
    _ => {
      let grids = members
        .iter()
        .map(|&m| bands.grid(m))
        .collect::<Result<Vec<_>>>()?;
      Ok(intersect_all(grids)?.population())
    },
  }
}

/// All non-empty proper subsets of `members`, by size and then by position.
fn consequents(members: &[usize]) -> Vec<Vec<usize>> {
  let n = members.len();
  let mut subsets = Vec::new();
  for k in 1..n {
    let mut picks: Vec<usize> = (0..k).collect();
    loop {
      subsets.push(picks.iter().map(|&p| members[p]).collect());
      // Find the rightmost pick that can still move right
      let mut i = k;
      while i > 0 && picks[i-1] == n - k + (i-1) { i -= 1; }
      if i == 0 { break }
      picks[i-1] += 1;
      for t in i..k { picks[t] = picks[t-1] + 1; }
    }
  }
  subsets
}
