//! # Utility-Based Allocator
//!
//! $$
//! y^\* = \frac{\mu_T - r_f}{\gamma\,\sigma_T^2}
//! \qquad
//! U = \mathbb E[R_c] - \frac{\gamma}{2}\sigma_c^2
//! $$
//!
//! Splits wealth between the tangency portfolio and the risk-free asset by
//! maximizing mean-variance utility.

use super::types::CompletePortfolio;
use super::types::PortfolioError;
use super::types::TangencyPortfolio;

/// Derive the complete portfolio from the tangency mix.
///
/// The tangency share is left unclamped: values above 1 mean borrowing at
/// the risk-free rate, values below 0 a short position in the risky mix.
/// A zero-risk tangency mix yields a fully risk-free allocation.
pub fn compute_optimal_portfolio(
  tangency: &TangencyPortfolio,
  risk_free: f64,
  gamma: f64,
) -> Result<CompletePortfolio, PortfolioError> {
  if !gamma.is_finite() || gamma <= 0.0 {
    return Err(PortfolioError::InvalidRiskAversion(gamma));
  }

  let excess = tangency.expected_return - risk_free;
  let tangency_share = if tangency.std_dev > 0.0 {
    excess / (gamma * tangency.std_dev * tangency.std_dev)
  } else {
    0.0
  };

  let expected_return = risk_free + tangency_share * excess;
  // risk is unsigned even for short positions
  let std_dev = tangency_share.abs() * tangency.std_dev;
  let utility = expected_return - 0.5 * gamma * std_dev * std_dev;

  Ok(CompletePortfolio {
    weight_risk_free: 1.0 - tangency_share,
    weight_1: tangency_share * tangency.weight_1,
    weight_2: tangency_share * tangency.weight_2,
    expected_return,
    std_dev,
    utility,
  })
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;

  use super::super::frontier::find_tangency_portfolio;
  use super::super::frontier::FrontierConfig;
  use super::super::types::AssetPair;
  use super::*;

  fn reference_tangency() -> TangencyPortfolio {
    find_tangency_portfolio(&AssetPair::default(), 0.02, &FrontierConfig::default())
  }

  #[test]
  fn rejects_non_positive_gamma() {
    let tangency = reference_tangency();

    for gamma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
      let result = compute_optimal_portfolio(&tangency, 0.02, gamma);
      assert!(matches!(
        result,
        Err(PortfolioError::InvalidRiskAversion(_))
      ));
    }
  }

  #[test]
  fn weights_sum_to_one_for_any_gamma() {
    let tangency = reference_tangency();

    for gamma in [0.1, 0.5, 1.0, 2.5, 5.0, 10.0, 100.0] {
      let complete = compute_optimal_portfolio(&tangency, 0.02, gamma).unwrap();
      let sum = complete.weight_risk_free + complete.weight_1 + complete.weight_2;
      assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
    }
  }

  #[test]
  fn reference_scenario_allocation() {
    // gamma = 5 on the reference pair: leveraged ~1.59x tangency position
    let complete = compute_optimal_portfolio(&reference_tangency(), 0.02, 5.0).unwrap();

    assert_abs_diff_eq!(complete.tangency_share(), 1.5935429654673727, epsilon = 1e-10);
    assert_abs_diff_eq!(complete.weight_risk_free, -0.5935429654673727, epsilon = 1e-10);
    assert_abs_diff_eq!(complete.weight_1, 1.0033418671461236, epsilon = 1e-10);
    assert_abs_diff_eq!(complete.weight_2, 0.5902010983212491, epsilon = 1e-10);
    assert_abs_diff_eq!(complete.expected_return, 0.10912036584650862, epsilon = 1e-10);
    assert_abs_diff_eq!(complete.std_dev, 0.13350682817482304, epsilon = 1e-10);
    assert_abs_diff_eq!(complete.utility, 0.06456018292325431, epsilon = 1e-10);
  }

  #[test]
  fn high_gamma_pushes_allocation_to_risk_free() {
    let tangency = reference_tangency();

    let at_five = compute_optimal_portfolio(&tangency, 0.02, 5.0).unwrap();
    let at_ten = compute_optimal_portfolio(&tangency, 0.02, 10.0).unwrap();
    let extreme = compute_optimal_portfolio(&tangency, 0.02, 1e6).unwrap();

    assert!(at_ten.tangency_share() < at_five.tangency_share());
    assert_abs_diff_eq!(at_ten.tangency_share(), 0.7967714827336864, epsilon = 1e-10);
    assert!(extreme.tangency_share().abs() < 1e-4);
    assert_abs_diff_eq!(extreme.weight_risk_free, 1.0, epsilon = 1e-4);
  }

  #[test]
  fn zero_risk_tangency_yields_fully_risk_free_allocation() {
    let tangency = TangencyPortfolio {
      weight_1: 0.0,
      weight_2: 1.0,
      expected_return: 0.03,
      std_dev: 0.0,
      sharpe: f64::NEG_INFINITY,
    };
    let complete = compute_optimal_portfolio(&tangency, 0.02, 5.0).unwrap();

    assert_eq!(complete.weight_risk_free, 1.0);
    assert_eq!(complete.weight_1, 0.0);
    assert_eq!(complete.weight_2, 0.0);
    assert_eq!(complete.expected_return, 0.02);
    assert_eq!(complete.std_dev, 0.0);
    assert_eq!(complete.utility, 0.02);
  }

  #[test]
  fn negative_excess_return_goes_short_with_unsigned_risk() {
    let tangency = TangencyPortfolio {
      weight_1: 0.5,
      weight_2: 0.5,
      expected_return: 0.01,
      std_dev: 0.1,
      sharpe: -0.1,
    };
    let complete = compute_optimal_portfolio(&tangency, 0.02, 2.0).unwrap();

    assert!(complete.tangency_share() < 0.0);
    assert!(complete.weight_risk_free > 1.0);
    assert!(complete.std_dev > 0.0);
    let sum = complete.weight_risk_free + complete.weight_1 + complete.weight_2;
    assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
  }

  #[test]
  fn utility_matches_mean_variance_functional() {
    let complete = compute_optimal_portfolio(&reference_tangency(), 0.02, 3.0).unwrap();
    let expected =
      complete.expected_return - 0.5 * 3.0 * complete.std_dev * complete.std_dev;
    assert_abs_diff_eq!(complete.utility, expected, epsilon = 1e-15);
  }
}
