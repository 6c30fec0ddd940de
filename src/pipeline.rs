use {
  serde::{Deserialize, Serialize},
  tracing::debug,
  crate::error::ParmError as Error,
  crate::bands::BandIndex,
  crate::config::MiningConfig,
  crate::itemsets::{self, Itemset},
  crate::rules::{self, Rule},
};

type Result<T> = std::result::Result<T, Error>;

/// Everything a mining run produced, in output order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MiningReport {
  /// Frequent itemsets, in enumeration order.
  pub itemsets: Vec<Itemset>,
  /// Rules meeting the confidence threshold, grouped by itemset.
  pub rules: Vec<Rule>,
}

/// Drives a whole run: bands in, frequent itemsets and rules out.
///
/// ```
/// fn main() -> Result<(), ptree_arm::error::ParmError> {
///   use ptree_arm::{MiningConfig, Parm};
///   let mut parm = Parm::new(MiningConfig {
///     grid_size: 2,
///     min_support: 1,
///     min_confidence: 0.5,
///     ..MiningConfig::default()
///   })?;
///   parm.add_band(&[[1, 0], [0, 1]])?;
///   parm.add_band(&[[1, 0], [1, 0]])?;
///   let report = parm.run()?;
///   assert_eq!(1, report.itemsets.len());
///   assert_eq!(2, report.rules.len());
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Parm {
  config: MiningConfig,
  bands: BandIndex,
}

impl Parm {
  /// Validates `config` and starts with no bands.
  pub fn new(config: MiningConfig) -> Result<Self> {
    config.validate()?;
    let bands = BandIndex::new(config.grid_size)?;
    Ok(Parm { config, bands })
  }
  /// Starts from an already built `BandIndex`.
  pub fn with_bands(config: MiningConfig, bands: BandIndex) -> Result<Self> {
    config.validate()?;
    if bands.grid_size() != config.grid_size {
      return Err(Error::DimensionMismatch {
        expected: config.grid_size,
        found: [bands.grid_size(), bands.grid_size()],
      })
    }
    Ok(Parm { config, bands })
  }
  /// See [`BandIndex::add_band`].
  pub fn add_band<R: AsRef<[u8]>>(&mut self, matrix: &[R]) -> Result<usize> {
    self.bands.add_band(matrix)
  }
  /// See [`BandIndex::add_named_band`].
  pub fn add_named_band<R: AsRef<[u8]>>(&mut self, name: impl Into<String>, matrix: &[R]) -> Result<usize> {
    self.bands.add_named_band(name, matrix)
  }
  /// The configuration this run uses.
  pub fn config(&self) -> &MiningConfig {
    &self.config
  }
  /// The bands added so far.
  pub fn bands(&self) -> &BandIndex {
    &self.bands
  }
  /// Mines frequent itemsets up to the configured length.
  pub fn frequent_itemsets(&self) -> Result<Vec<Itemset>> {
    if self.config.max_itemset_len == 2 {
      self.mine_pairs()
    }
    else {
      itemsets::mine_levelwise(&self.bands, self.config.min_support, self.config.max_itemset_len)
    }
  }
  /// Generates the rules of `itemsets` that meet the configured confidence.
  pub fn rules(&self, itemsets: &[Itemset]) -> Result<Vec<Rule>> {
    rules::generate(itemsets, &self.bands, self.config.min_confidence)
  }
  /// Runs the whole pipeline.
  pub fn run(&self) -> Result<MiningReport> {
    let itemsets = self.frequent_itemsets()?;
    let rules = self.rules(&itemsets)?;
    debug!(
      bands = self.bands.len(),
      itemsets = itemsets.len(),
      rules = rules.len(),
      "mining run finished"
    );
    Ok(MiningReport { itemsets, rules })
  }
}

/* Private */
impl Parm {
  #[cfg(not(feature = "parallel"))]
  fn mine_pairs(&self) -> Result<Vec<Itemset>> {
    itemsets::mine(&self.bands, self.config.min_support)
  }
  #[cfg(feature = "parallel")]
  fn mine_pairs(&self) -> Result<Vec<Itemset>> {
    itemsets::mine_parallel(&self.bands, self.config.min_support)
  }
}
