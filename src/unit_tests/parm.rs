

/* Public Interface Tests */

use crate::{
  error::ParmError,
  intersect::intersect,
  itemsets::{mine, Itemset},
  rules::generate,
  BandIndex,
  MiningConfig,
  MiningReport,
  Parm,
};

type Result<T> = std::result::Result<T, ParmError>;

/* Private funcs used in testing */
fn spectral_bands() -> Vec<Vec<Vec<u8>>> {
  vec![
    vec![
      vec![1,0,0,1],
      vec![0,1,1,0],
      vec![1,0,1,1],
      vec![0,0,1,0],
    ],
    vec![
      vec![0,1,0,0],
      vec![1,0,1,0],
      vec![1,1,0,1],
      vec![0,1,0,1],
    ],
    vec![
      vec![1,1,1,0],
      vec![0,1,0,0],
      vec![1,0,1,1],
      vec![1,0,0,0],
    ],
  ]
}
fn spectral_parm() -> Parm {
  let bands = BandIndex::from_matrices(4, spectral_bands()).unwrap();
  Parm::with_bands(MiningConfig::default(), bands).unwrap()
}

#[test]
fn band_populations() -> Result<()> {
  let parm = spectral_parm();
  let populations: Vec<usize> = parm.bands().iter().map(|b| b.grid.population()).collect();
  assert_eq!(vec![8, 8, 8], populations);
  Ok(())
}
#[test]
fn pair_supports() -> Result<()> {
  let parm = spectral_parm();
  let bands = parm.bands();
  assert_eq!(3, intersect(bands.grid(0)?, bands.grid(1)?)?.population());
  assert_eq!(5, intersect(bands.grid(0)?, bands.grid(2)?)?.population());
  assert_eq!(3, intersect(bands.grid(1)?, bands.grid(2)?)?.population());
  Ok(())
}
#[test]
fn frequent_itemsets() -> Result<()> {
  let parm = spectral_parm();
  assert_eq!(
    vec![
      Itemset { members: vec![0, 1], support: 3 },
      Itemset { members: vec![0, 2], support: 5 },
      Itemset { members: vec![1, 2], support: 3 },
    ],
    parm.frequent_itemsets()?
  );
  let strict = mine(parm.bands(), 4)?;
  assert_eq!(vec![Itemset { members: vec![0, 2], support: 5 }], strict);
  Ok(())
}
#[test]
fn rules_above_sixty_percent() -> Result<()> {
  let report = spectral_parm().run()?;
  assert_eq!(3, report.itemsets.len());
  assert_eq!(2, report.rules.len());
  assert_eq!((vec![2], vec![0]), (report.rules[0].antecedent.clone(), report.rules[0].consequent.clone()));
  assert_eq!((vec![0], vec![2]), (report.rules[1].antecedent.clone(), report.rules[1].consequent.clone()));
  for rule in &report.rules {
    assert_eq!(0.625, rule.confidence);
    assert_eq!(5, rule.support);
  }
  Ok(())
}
#[test]
fn every_rule_at_zero_confidence() -> Result<()> {
  let parm = spectral_parm();
  let itemsets = parm.frequent_itemsets()?;
  let rules = generate(&itemsets, parm.bands(), 0.0)?;
  assert_eq!(6, rules.len());
  assert_eq!(0.375, rules[0].confidence);
  Ok(())
}
#[test]
fn single_band_mines_nothing() -> Result<()> {
  let mut parm = Parm::new(MiningConfig::default())?;
  parm.add_band(&spectral_bands()[0])?;
  assert_eq!(MiningReport::default(), parm.run()?);
  Ok(())
}
#[test]
fn short_row_rejected() -> Result<()> {
  let mut parm = Parm::new(MiningConfig::default())?;
  let mut bad = spectral_bands().remove(1);
  bad[2].pop();
  match parm.add_band(&bad) {
    Err(ParmError::Band { band: 0, source }) => {
      assert_eq!(ParmError::DimensionMismatch { expected: 4, found: [4, 3] }, *source);
    },
    other => panic!("expected a band error, got {:?}", other),
  }
  assert!(parm.bands().is_empty());
  Ok(())
}
#[test]
fn quadrant_counts_sum_to_population() -> Result<()> {
  let parm = spectral_parm();
  for band in parm.bands() {
    let quadrants = band.grid.quadrant_counts(2)?;
    assert_eq!(band.grid.population(), quadrants.iter().sum::<usize>());
  }
  assert_eq!(vec![2, 2, 1, 3], parm.bands().grid(0)?.quadrant_counts(2)?);
  Ok(())
}
#[test]
fn report_to_json() -> Result<()> {
  let report = spectral_parm().run()?;
  let json = serde_json::to_string(&report).unwrap();
  let back: MiningReport = serde_json::from_str(&json).unwrap();
  assert_eq!(report, back);
  Ok(())
}
#[test]
fn config_from_yaml_drives_run() -> Result<()> {
  let config: MiningConfig = serde_yaml::from_str("min_support: 5\nmin_confidence: 0.0\n").unwrap();
  let bands = BandIndex::from_matrices(config.grid_size, spectral_bands())?;
  let report = Parm::with_bands(config, bands)?.run()?;
  assert_eq!(1, report.itemsets.len());
  assert_eq!(2, report.rules.len());
  Ok(())
}
#[test]
fn is_send() {
  fn assert_send<T: Send>() {}
  assert_send::<Parm>();
  assert_send::<MiningReport>();
  assert_send::<ParmError>();
}
#[test]
fn is_sync() {
  fn assert_sync<T: Sync>() {}
  assert_sync::<Parm>();
  assert_sync::<BandIndex>();
}
