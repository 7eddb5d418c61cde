//! # Frontier & Tangency Solver
//!
//! $$
//! w_1^\* = \arg\max_{w_1\in[0,1]} \frac{\mathbb E[R_p]-r_f}{\sigma_p}
//! $$
//!
//! Portfolio return/risk for arbitrary two-asset mixes, efficient-frontier
//! sampling and the Sharpe-maximizing tangency mix.

use ndarray::Array1;

use super::types::AssetPair;
use super::types::PortfolioPoint;
use super::types::TangencyPortfolio;

/// Default number of weight samples in the tangency grid search.
pub const TANGENCY_GRID_POINTS: usize = 1000;

/// Default number of frontier samples for display consumers.
pub const FRONTIER_DISPLAY_POINTS: usize = 200;

/// Tangency solver selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TangencyMethod {
  /// Dense linear sampling of `w1` over [0, 1] with a stable argmax.
  /// Resolution is `1 / (grid_points - 1)` in `w1`.
  #[default]
  GridSearch,
  /// Closed-form tangency weights, restricted to `w1` in [0, 1]. Offered as
  /// an explicit alternative; never substituted silently for the grid.
  Analytic,
}

/// Solver configuration for [`find_tangency_portfolio`] and the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierConfig {
  /// Solver used for the tangency search.
  pub method: TangencyMethod,
  /// Number of `w1` samples when [`TangencyMethod::GridSearch`] is active.
  /// Values below 2 are treated as 2, the two boundary mixes.
  pub grid_points: usize,
  /// Clamp the variance radicand at zero before the square root. Guards
  /// against negative-near-zero radicands at `correlation = ±1`; disable
  /// only to reproduce raw (NaN-capable) arithmetic.
  pub clamp_radicand: bool,
}

impl Default for FrontierConfig {
  fn default() -> Self {
    Self {
      method: TangencyMethod::GridSearch,
      grid_points: TANGENCY_GRID_POINTS,
      clamp_radicand: true,
    }
  }
}

/// Expected return of a `w1` / `1 - w1` mix of the two assets.
///
/// `w1` is not restricted to [0, 1]; values outside extrapolate linearly.
pub fn portfolio_return(weight_1: f64, return_1: f64, return_2: f64) -> f64 {
  weight_1 * return_1 + (1.0 - weight_1) * return_2
}

/// Standard deviation of a `w1` / `1 - w1` mix of the two assets.
///
/// The radicand is clamped at zero: at `correlation = ±1` rounding can push
/// the true zero-variance point a few ulps negative, which would otherwise
/// surface as NaN.
pub fn portfolio_std_dev(
  weight_1: f64,
  std_dev_1: f64,
  std_dev_2: f64,
  correlation: f64,
) -> f64 {
  mix_variance(weight_1, std_dev_1, std_dev_2, correlation)
    .max(0.0)
    .sqrt()
}

/// [`portfolio_std_dev`] without the radicand clamp.
///
/// Reproduces raw floating-point behavior (NaN at degenerate correlations)
/// for callers that need parity with unguarded implementations.
pub fn portfolio_std_dev_unclamped(
  weight_1: f64,
  std_dev_1: f64,
  std_dev_2: f64,
  correlation: f64,
) -> f64 {
  mix_variance(weight_1, std_dev_1, std_dev_2, correlation).sqrt()
}

fn mix_variance(weight_1: f64, std_dev_1: f64, std_dev_2: f64, correlation: f64) -> f64 {
  let w2 = 1.0 - weight_1;
  weight_1 * weight_1 * std_dev_1 * std_dev_1
    + w2 * w2 * std_dev_2 * std_dev_2
    + 2.0 * correlation * weight_1 * w2 * std_dev_1 * std_dev_2
}

fn point_at(pair: &AssetPair, weight_1: f64, clamp: bool) -> PortfolioPoint {
  let std_dev = if clamp {
    portfolio_std_dev(weight_1, pair.std_dev_1, pair.std_dev_2, pair.correlation)
  } else {
    portfolio_std_dev_unclamped(weight_1, pair.std_dev_1, pair.std_dev_2, pair.correlation)
  };

  PortfolioPoint {
    weight_1,
    expected_return: portfolio_return(weight_1, pair.return_1, pair.return_2),
    std_dev,
  }
}

/// Sample the frontier at `points` evenly spaced weights, `w1` ascending
/// from 0 to 1.
///
/// `points` is the display resolution and is independent of
/// `config.grid_points`; `config.clamp_radicand` applies to every sample.
pub fn efficient_frontier(
  pair: &AssetPair,
  points: usize,
  config: &FrontierConfig,
) -> Vec<PortfolioPoint> {
  if points == 0 {
    return Vec::new();
  }
  if points == 1 {
    return vec![point_at(pair, 0.0, config.clamp_radicand)];
  }

  Array1::linspace(0.0, 1.0, points)
    .iter()
    .map(|&w1| point_at(pair, w1, config.clamp_radicand))
    .collect()
}

/// Find the Sharpe-maximizing risky mix for the pair.
///
/// Zero-risk samples score `-inf` and are never selected; ties keep the
/// first sample in ascending `w1` order.
pub fn find_tangency_portfolio(
  pair: &AssetPair,
  risk_free: f64,
  config: &FrontierConfig,
) -> TangencyPortfolio {
  match config.method {
    TangencyMethod::GridSearch => tangency_grid(pair, risk_free, config),
    TangencyMethod::Analytic => tangency_analytic(pair, risk_free, config),
  }
}

fn sharpe_at(point: &PortfolioPoint, risk_free: f64) -> f64 {
  if point.std_dev > 0.0 {
    (point.expected_return - risk_free) / point.std_dev
  } else {
    f64::NEG_INFINITY
  }
}

fn tangency_from_point(point: PortfolioPoint, sharpe: f64) -> TangencyPortfolio {
  TangencyPortfolio {
    weight_1: point.weight_1,
    weight_2: 1.0 - point.weight_1,
    expected_return: point.expected_return,
    std_dev: point.std_dev,
    sharpe,
  }
}

fn tangency_grid(pair: &AssetPair, risk_free: f64, config: &FrontierConfig) -> TangencyPortfolio {
  let n = config.grid_points.max(2);
  let weights = Array1::linspace(0.0, 1.0, n);

  let mut best_point = point_at(pair, weights[0], config.clamp_radicand);
  let mut best_sharpe = sharpe_at(&best_point, risk_free);

  for &w1 in weights.iter().skip(1) {
    let point = point_at(pair, w1, config.clamp_radicand);
    let sharpe = sharpe_at(&point, risk_free);
    // strict > keeps the earliest sample on exact ties
    if sharpe > best_sharpe {
      best_point = point;
      best_sharpe = sharpe;
    }
  }

  tangency_from_point(best_point, best_sharpe)
}

/// Closed-form tangency weight for two risky assets, from the first-order
/// condition of the Sharpe ratio in `w1`. Falls back to the grid when the
/// denominator degenerates (identical excess-return/risk profiles).
fn tangency_analytic(
  pair: &AssetPair,
  risk_free: f64,
  config: &FrontierConfig,
) -> TangencyPortfolio {
  let e1 = pair.return_1 - risk_free;
  let e2 = pair.return_2 - risk_free;
  let cov = pair.correlation * pair.std_dev_1 * pair.std_dev_2;
  let var_1 = pair.std_dev_1 * pair.std_dev_1;
  let var_2 = pair.std_dev_2 * pair.std_dev_2;

  let numerator = e1 * var_2 - e2 * cov;
  let denominator = e1 * var_2 + e2 * var_1 - (e1 + e2) * cov;

  if denominator.abs() < 1e-15 || !denominator.is_finite() {
    let grid_cfg = FrontierConfig {
      method: TangencyMethod::GridSearch,
      ..*config
    };
    return tangency_grid(pair, risk_free, &grid_cfg);
  }

  // The critical point is the Sharpe maximum only when some mix earns a
  // positive excess return; with both excess returns negative it is the
  // minimum. The constrained maximum over [0,1] therefore sits at the
  // clamped critical point or at a boundary; check all three, keeping the
  // lowest w1 on exact ties as the grid does.
  let interior = (numerator / denominator).clamp(0.0, 1.0);
  let mut best_point = point_at(pair, 0.0, config.clamp_radicand);
  let mut best_sharpe = sharpe_at(&best_point, risk_free);

  for w1 in [interior, 1.0] {
    let point = point_at(pair, w1, config.clamp_radicand);
    let sharpe = sharpe_at(&point, risk_free);
    if sharpe > best_sharpe {
      best_point = point;
      best_sharpe = sharpe;
    }
  }

  tangency_from_point(best_point, best_sharpe)
}
