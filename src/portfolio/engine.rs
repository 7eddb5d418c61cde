//! # Portfolio Engine
//!
//! $$
//! (\mu,\sigma,\rho,r_f,\gamma) \mapsto
//! (\mathrm{tangency}, \mathrm{complete})
//! $$
//!
//! High-level orchestration API: validate inputs, locate the tangency mix,
//! derive the complete allocation and sample the frontier from one
//! configuration. All state lives in the explicit inputs; every call
//! recomputes from scratch.

use super::allocator::compute_optimal_portfolio;
use super::frontier::efficient_frontier;
use super::frontier::find_tangency_portfolio;
use super::frontier::FrontierConfig;
use super::frontier::FRONTIER_DISPLAY_POINTS;
use super::types::AssetPair;
use super::types::PortfolioError;
use super::types::PortfolioPoint;
use super::types::PortfolioSolution;

/// Runtime configuration for [`PortfolioEngine`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioEngineConfig {
  /// Risk-free rate used for Sharpe ratios and the risk-free leg.
  pub risk_free: f64,
  /// Risk-aversion coefficient gamma, must be finite and positive.
  pub risk_aversion: f64,
  /// Tangency solver settings.
  pub frontier: FrontierConfig,
  /// Frontier sample count handed to display consumers.
  pub frontier_points: usize,
}

impl Default for PortfolioEngineConfig {
  fn default() -> Self {
    Self {
      risk_free: 0.02,
      risk_aversion: 5.0,
      frontier: FrontierConfig::default(),
      frontier_points: FRONTIER_DISPLAY_POINTS,
    }
  }
}

/// Single entry-point engine for two-asset allocation workflows.
#[derive(Clone, Debug)]
pub struct PortfolioEngine {
  config: PortfolioEngineConfig,
}

impl PortfolioEngine {
  /// Construct a new engine with explicit configuration.
  pub fn new(config: PortfolioEngineConfig) -> Self {
    Self { config }
  }

  /// Borrow engine configuration.
  pub fn config(&self) -> &PortfolioEngineConfig {
    &self.config
  }

  /// Solve tangency and complete portfolio for the pair.
  ///
  /// Rejects out-of-domain inputs before any arithmetic runs; leveraged and
  /// short allocations are valid results, never errors.
  pub fn solve(&self, pair: &AssetPair) -> Result<PortfolioSolution, PortfolioError> {
    pair.validate()?;
    if !self.config.risk_aversion.is_finite() || self.config.risk_aversion <= 0.0 {
      return Err(PortfolioError::InvalidRiskAversion(self.config.risk_aversion));
    }

    let tangency = find_tangency_portfolio(pair, self.config.risk_free, &self.config.frontier);
    let complete =
      compute_optimal_portfolio(&tangency, self.config.risk_free, self.config.risk_aversion)?;

    Ok(PortfolioSolution { tangency, complete })
  }

  /// Sample the frontier at the configured display resolution.
  pub fn frontier(&self, pair: &AssetPair) -> Result<Vec<PortfolioPoint>, PortfolioError> {
    pair.validate()?;
    Ok(efficient_frontier(
      pair,
      self.config.frontier_points,
      &self.config.frontier,
    ))
  }

  /// Sample the frontier at a caller-chosen resolution.
  pub fn frontier_with_points(
    &self,
    pair: &AssetPair,
    points: usize,
  ) -> Result<Vec<PortfolioPoint>, PortfolioError> {
    pair.validate()?;
    Ok(efficient_frontier(pair, points, &self.config.frontier))
  }
}

impl Default for PortfolioEngine {
  fn default() -> Self {
    Self::new(PortfolioEngineConfig::default())
  }
}
