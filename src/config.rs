use {
  serde::{Deserialize, Serialize},
  crate::error::ParmError as Error,
};

type Result<T> = std::result::Result<T, Error>;

/// Thresholds and dimensions for a mining run.
///
/// Any field left out when deserializing takes its default: a 4x4 grid,
/// a minimum support of 2, a minimum confidence of 0.6 and pairs only.
/// ```
/// use ptree_arm::MiningConfig;
/// let config = MiningConfig::default();
/// assert_eq!(4, config.grid_size);
/// assert_eq!(2, config.min_support);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
  /// Width and height every band must have.
  pub grid_size: usize,
  /// Minimum number of co-occurring 1-cells for an itemset to be frequent.
  pub min_support: usize,
  /// Minimum confidence, as a fraction, for a rule to be kept.
  pub min_confidence: f64,
  /// Largest itemset to mine. 2 mines pairs only.
  pub max_itemset_len: usize,
}

impl MiningConfig {
  /// Checks that every threshold is usable.
  pub fn validate(&self) -> Result<()> {
    if self.grid_size == 0 {
      return Err(Error::InvalidGridSize { size: self.grid_size })
    }
    if !(0.0..=1.0).contains(&self.min_confidence) {
      return Err(Error::InvalidConfig {
        reason: format!("min_confidence must be within [0, 1], got {}", self.min_confidence),
      })
    }
    if self.max_itemset_len < 2 {
      return Err(Error::InvalidConfig {
        reason: format!("max_itemset_len must be at least 2, got {}", self.max_itemset_len),
      })
    }
    Ok(())
  }
}

impl Default for MiningConfig {
  fn default() -> Self {
    MiningConfig {
      grid_size: 4,
      min_support: 2,
      min_confidence: 0.6,
      max_itemset_len: 2,
    }
  }
}
