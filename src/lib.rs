//! # meanvar-rs
//!
//! $$
//! \max_{w_1}\frac{\mathbb E[R_p]-r_f}{\sigma_p}
//! \qquad
//! \max_{y}\ \mathbb E[R_c]-\frac{\gamma}{2}\sigma_c^2
//! $$
//!
//! Two-asset Markowitz engine: efficient-frontier sampling, tangency
//! portfolio search and utility-based allocation between the tangency mix
//! and a risk-free asset.

pub mod portfolio;

pub use portfolio::AssetPair;
pub use portfolio::CompletePortfolio;
pub use portfolio::PortfolioEngine;
pub use portfolio::PortfolioEngineConfig;
pub use portfolio::PortfolioError;
pub use portfolio::TangencyPortfolio;
