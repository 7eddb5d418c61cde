use anyhow::Result;

use meanvar_rs::portfolio::AssetPair;
use meanvar_rs::portfolio::PortfolioEngine;
use meanvar_rs::portfolio::PortfolioEngineConfig;

/// Percent-denominated inputs, converted to decimal fractions at the edge.
fn pair_from_percent(r1: f64, sd1: f64, r2: f64, sd2: f64, correlation: f64) -> AssetPair {
  AssetPair {
    return_1: r1 / 100.0,
    return_2: r2 / 100.0,
    std_dev_1: sd1 / 100.0,
    std_dev_2: sd2 / 100.0,
    correlation,
  }
}

fn main() -> Result<()> {
  let pair = pair_from_percent(5.0, 9.0, 12.0, 20.0, -0.2);
  let engine = PortfolioEngine::new(PortfolioEngineConfig {
    risk_free: 0.02,
    risk_aversion: 5.0,
    ..PortfolioEngineConfig::default()
  });

  let solution = engine.solve(&pair)?;
  let tangency = solution.tangency;
  let complete = solution.complete;

  println!("Tangency portfolio");
  println!("  Asset 1:         {:.2}%", tangency.weight_1 * 100.0);
  println!("  Asset 2:         {:.2}%", tangency.weight_2 * 100.0);
  println!("  Expected return: {:.2}%", tangency.expected_return * 100.0);
  println!("  Risk (std dev):  {:.2}%", tangency.std_dev * 100.0);
  println!("  Sharpe ratio:    {:.4}", tangency.sharpe);

  println!();
  println!("Your optimal portfolio");
  println!("  Risk-free asset: {:.2}%", complete.weight_risk_free * 100.0);
  println!("  Asset 1:         {:.2}%", complete.weight_1 * 100.0);
  println!("  Asset 2:         {:.2}%", complete.weight_2 * 100.0);
  println!("  Expected return: {:.2}%", complete.expected_return * 100.0);
  println!("  Risk (std dev):  {:.2}%", complete.std_dev * 100.0);
  println!("  Utility:         {:.4}", complete.utility);

  Ok(())
}
