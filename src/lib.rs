//! # price-paths: Monte Carlo Asset Price Path Generation
//!
//! A Rust library for simulating discretized sample paths of asset prices
//! (and, where the model calls for it, instantaneous variance) under the
//! stochastic models used in derivatives pricing.
//!
//! ## Key Features
//!
//! - **Four models**: GBM (Black–Scholes), Heston stochastic volatility,
//!   Merton jump diffusion, and Bates (Heston + jumps)
//! - **Variance Reduction**: antithetic sampling for GBM paths
//! - **Correlated shocks**: Cholesky-based bivariate-normal generation for
//!   the variance/price innovations
//! - **High Performance**: path-parallel generation with Rayon over dense
//!   `ndarray` matrices
//! - **Reproducible**: per-path seeded streams make output independent of
//!   thread count for a fixed seed
//! - **Production Ready**: validated configuration and fail-fast errors
//!
//! ## Quick Start
//!
//! ```rust
//! use price_paths::config::SimulationConfig;
//! use price_paths::models::gbm::Gbm;
//!
//! // 1,000 paths, 252 daily steps over one year
//! let config = SimulationConfig::new(100.0, 0.2, 0.05, 1_000, 252, 1.0, 42)
//!     .expect("Valid configuration");
//!
//! let prices = Gbm::new(config)
//!     .expect("Even path count")
//!     .simulate()
//!     .expect("Simulation succeeds");
//!
//! assert_eq!(prices.dim(), (1_000, 252));
//! assert_eq!(prices[[0, 0]], 100.0);
//! ```
//!
//! ## Output Convention
//!
//! Every simulator returns dense matrices with one row per path and one
//! column per discretized time point; column 0 holds the initial value.
//! Matrices are freshly allocated per call and owned by the caller.

// Module declarations
pub mod config;
pub mod correlate;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod output;
pub mod rng;

// Re-export commonly used types for convenience
pub use config::SimulationConfig;
pub use error::{SimError, SimResult};

use ndarray::Array2;

/// Dense matrix of simulated price trajectories: row = path, column = step.
pub type PathMatrix = Array2<f64>;

/// Instantaneous-variance trajectories produced alongside prices by the
/// Heston and Bates simulators; same shape convention as [`PathMatrix`].
pub type VariancePathMatrix = Array2<f64>;
