//! # Portfolio Types
//!
//! $$
//! w_{rf} + w_1 + w_2 = 1
//! $$
//!
//! Immutable value records exchanged between the frontier solver and the
//! utility-based allocator. Every record is recomputed fresh per input set;
//! nothing here holds long-lived state.

use impl_new_derive::ImplNew;
use thiserror::Error;

/// Input rejected before any computation runs.
///
/// Numerical edge cases with a defined outcome (zero variance, leveraged or
/// short tangency shares) are never errors; only genuinely out-of-domain
/// inputs land here.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum PortfolioError {
  #[error("correlation must lie in [-1, 1], got {0}")]
  CorrelationOutOfRange(f64),
  #[error("standard deviation must be non-negative, got {0}")]
  NegativeStdDev(f64),
  #[error("risk aversion must be a finite positive number, got {0}")]
  InvalidRiskAversion(f64),
}

/// Joint statistics of the two risky assets.
///
/// Returns and standard deviations are decimal fractions (0.05 for 5%).
#[derive(ImplNew, Clone, Copy, Debug, PartialEq)]
pub struct AssetPair {
  /// Expected return of asset 1.
  pub return_1: f64,
  /// Expected return of asset 2.
  pub return_2: f64,
  /// Standard deviation of asset 1, non-negative.
  pub std_dev_1: f64,
  /// Standard deviation of asset 2, non-negative.
  pub std_dev_2: f64,
  /// Return correlation between the two assets, in [-1, 1].
  pub correlation: f64,
}

impl AssetPair {
  /// Reject out-of-domain statistics before they reach a solver.
  pub fn validate(&self) -> Result<(), PortfolioError> {
    if !(-1.0..=1.0).contains(&self.correlation) || self.correlation.is_nan() {
      return Err(PortfolioError::CorrelationOutOfRange(self.correlation));
    }
    if self.std_dev_1 < 0.0 || self.std_dev_1.is_nan() {
      return Err(PortfolioError::NegativeStdDev(self.std_dev_1));
    }
    if self.std_dev_2 < 0.0 || self.std_dev_2.is_nan() {
      return Err(PortfolioError::NegativeStdDev(self.std_dev_2));
    }
    Ok(())
  }
}

impl Default for AssetPair {
  /// Reference scenario: 5%/9% vs 12%/20% with correlation -0.2.
  fn default() -> Self {
    Self {
      return_1: 0.05,
      return_2: 0.12,
      std_dev_1: 0.09,
      std_dev_2: 0.20,
      correlation: -0.2,
    }
  }
}

/// One sampled point on the two-asset frontier.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PortfolioPoint {
  /// Weight of asset 1 within the risky sub-portfolio.
  pub weight_1: f64,
  /// Expected return of the mix.
  pub expected_return: f64,
  /// Standard deviation of the mix.
  pub std_dev: f64,
}

impl PortfolioPoint {
  /// Weight of asset 2, the complement of `weight_1`.
  pub fn weight_2(&self) -> f64 {
    1.0 - self.weight_1
  }
}

/// Sharpe-maximizing risky mix for a given asset pair and risk-free rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TangencyPortfolio {
  /// Weight of asset 1 in the risky sub-portfolio.
  pub weight_1: f64,
  /// Weight of asset 2, `1 - weight_1`.
  pub weight_2: f64,
  /// Expected return of the tangency mix.
  pub expected_return: f64,
  /// Standard deviation of the tangency mix.
  pub std_dev: f64,
  /// `(expected_return - risk_free) / std_dev`; `-inf` when no mix on the
  /// sampled domain carries risk.
  pub sharpe: f64,
}

/// Final allocation across the risk-free asset and both risky assets.
///
/// `weight_risk_free` below 0 means borrowing at the risk-free rate
/// (leverage); risky weights below 0 mean a short position. The engine
/// reports both without clamping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompletePortfolio {
  /// Weight of the risk-free asset.
  pub weight_risk_free: f64,
  /// Weight of risky asset 1.
  pub weight_1: f64,
  /// Weight of risky asset 2.
  pub weight_2: f64,
  /// Expected return of the complete portfolio.
  pub expected_return: f64,
  /// Standard deviation of the complete portfolio, always non-negative.
  pub std_dev: f64,
  /// Mean-variance utility `expected_return - (gamma/2) * std_dev^2`.
  pub utility: f64,
}

impl CompletePortfolio {
  /// Fraction invested in the tangency portfolio, `1 - weight_risk_free`.
  pub fn tangency_share(&self) -> f64 {
    1.0 - self.weight_risk_free
  }
}

/// Tangency portfolio and the complete allocation derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioSolution {
  pub tangency: TangencyPortfolio,
  pub complete: CompletePortfolio,
}
