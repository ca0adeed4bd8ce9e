// src/models/heston.rs
//! Heston stochastic volatility paths
//!
//! # Mathematical Framework
//!
//! The Heston model couples the asset price to a mean-reverting variance
//! process:
//! ```text
//! dS_t = r S_t dt + √V_t S_t dW_t^(1)
//! dV_t = κ(η - V_t) dt + θ √V_t dW_t^(2)
//! ```
//! with Corr(dW^(1), dW^(2)) = ρ. Note the parameter naming used throughout
//! this crate: `eta` is the long-run variance level and `theta` the
//! vol-of-vol.
//!
//! # Discretization
//!
//! Joint Euler scheme with a full-truncation-style floor on the variance:
//! the Euler recursion for a square-root diffusion can overshoot below zero,
//! so the previous step's value is floored to its absolute value wherever a
//! square root (or the mean-reversion gap) is evaluated. The recursion is
//! ```text
//! v[0]     = vol0
//! v_used   = |v[i-1]|
//! v[i]     = v[i-1] + κ(η - v_used)·dt + θ·√v_used·ε₁[i]
//! dlogS[i] = (r - v[i-1]/2)·dt + v[i-1]·√dt·ε₂[i]
//! ```
//! Two contract details are deliberate and load-bearing:
//! - the leading `v[i-1]` term stays raw (signed) while only the
//!   mean-reversion gap and the square root see the floored value;
//! - the price diffusion uses the variance level `v[i-1]` directly, not its
//!   square root.
//! The returned variance matrix holds the raw signed recursion values, so
//! transient sub-zero excursions remain observable to the caller.

use crate::config::SimulationConfig;
use crate::correlate;
use crate::error::{validation::*, SimResult};
use crate::{PathMatrix, VariancePathMatrix};
use ndarray::{Array2, Zip};

#[derive(Clone, Copy, Debug)]
pub struct HestonParams {
    pub kappa: f64, // Mean reversion speed
    pub eta: f64,   // Long-run variance level
    pub theta: f64, // Volatility of variance (vol-of-vol)
    pub rho: f64,   // Correlation between variance and price shocks
    pub vol0: f64,  // Initial variance
}

#[derive(Debug)]
pub struct Heston {
    config: SimulationConfig,
    params: HestonParams,
}

impl Heston {
    pub fn new(config: SimulationConfig, params: HestonParams) -> SimResult<Self> {
        Self::validate_params(&params)?;
        Ok(Heston { config, params })
    }

    pub(crate) fn validate_params(params: &HestonParams) -> SimResult<()> {
        validate_finite("kappa", params.kappa)?;
        validate_non_negative("kappa", params.kappa)?;
        validate_finite("eta", params.eta)?;
        validate_non_negative("eta", params.eta)?;
        validate_finite("theta", params.theta)?;
        validate_non_negative("theta", params.theta)?;
        validate_correlation("rho", params.rho)?;
        validate_finite("vol0", params.vol0)?;
        Ok(())
    }

    /// Simulate variance and price paths jointly.
    ///
    /// Returns `(variance_paths, price_paths)`, both `paths × steps` with
    /// column 0 equal to `vol0` resp. `s0`.
    ///
    /// # Errors
    /// `NumericalDegeneracy` if the correlation matrix for `rho` cannot be
    /// Cholesky-factored (singular at `rho = ±1`).
    pub fn simulate(&self) -> SimResult<(VariancePathMatrix, PathMatrix)> {
        let cfg = &self.config;
        let p = &self.params;
        let (paths, steps) = (cfg.paths(), cfg.steps());

        let dt = cfg.dt();
        let sqrt_dt = dt.sqrt();
        let rate = cfg.rate();
        let s0 = cfg.s0();
        let log_s0 = s0.ln();

        // One call yields both shock matrices; eps1 drives the variance,
        // eps2 the price innovation.
        let (eps1, eps2) =
            correlate::correlated_normal_matrices(p.rho, paths, steps, cfg.seed())?;

        let mut variances = Array2::<f64>::zeros((paths, steps));
        let mut prices = Array2::<f64>::zeros((paths, steps));

        Zip::from(variances.rows_mut())
            .and(prices.rows_mut())
            .and(eps1.rows())
            .and(eps2.rows())
            .par_for_each(|mut v_row, mut s_row, e1, e2| {
                v_row[0] = p.vol0;
                s_row[0] = s0;

                let mut log_s = log_s0;
                for i in 1..steps {
                    let v_prev = v_row[i - 1];
                    v_row[i] = variance_step(p, v_prev, dt, e1[i]);
                    log_s += (rate - v_prev / 2.0) * dt + v_prev * sqrt_dt * e2[i];
                    s_row[i] = log_s.exp();
                }
            });

        Ok((variances, prices))
    }
}

/// One step of the floored variance recursion; the square root only ever
/// sees `|v_prev|`. Shared with the Bates simulator.
#[inline]
pub(crate) fn variance_step(params: &HestonParams, v_prev: f64, dt: f64, eps: f64) -> f64 {
    let v_used = v_prev.abs();
    v_prev + params.kappa * (params.eta - v_used) * dt + params.theta * v_used.sqrt() * eps
}
