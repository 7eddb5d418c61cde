//! # Portfolio
//!
//! $$
//! \sigma_p^2 = w_1^2\sigma_1^2 + (1-w_1)^2\sigma_2^2
//!   + 2\rho w_1(1-w_1)\sigma_1\sigma_2
//! $$
//!
//! Two-asset frontier/tangency solver and complete-portfolio allocator.

pub mod allocator;
pub mod engine;
pub mod frontier;
pub mod types;

pub use allocator::compute_optimal_portfolio;
pub use engine::PortfolioEngine;
pub use engine::PortfolioEngineConfig;
pub use frontier::FrontierConfig;
pub use frontier::TangencyMethod;
pub use frontier::efficient_frontier;
pub use frontier::find_tangency_portfolio;
pub use frontier::portfolio_return;
pub use frontier::portfolio_std_dev;
pub use frontier::portfolio_std_dev_unclamped;
pub use types::AssetPair;
pub use types::CompletePortfolio;
pub use types::PortfolioError;
pub use types::PortfolioPoint;
pub use types::PortfolioSolution;
pub use types::TangencyPortfolio;
