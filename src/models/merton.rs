// src/models/merton.rs
//! Merton jump-diffusion paths
//!
//! GBM diffusion plus a compound-Poisson jump term: per step the number of
//! jumps is Poisson with rate λ·dt and the jump magnitude carries its own
//! normal noise. The jump term used here is the literal
//! ```text
//! exp(μ + δ·ε₂ - 1) · count
//! ```
//! with the `-1` inside the exponent, and it adds into the log-price
//! accumulation together with the continuous increment. No antithetic
//! pairing is applied to jump-diffusion paths.

use crate::config::SimulationConfig;
use crate::error::{validation::*, SimError, SimResult};
use crate::rng::{self, PathStreams};
use crate::PathMatrix;
use ndarray::{Array2, Zip};
use rand::rngs::StdRng;
use rand_distr::{Distribution, Poisson};

#[derive(Clone, Copy, Debug)]
pub struct JumpParams {
    pub mu: f64,     // Mean log-jump size
    pub delta: f64,  // Jump-size volatility
    pub lambda: f64, // Poisson jump intensity (per year)
}

pub struct Merton {
    config: SimulationConfig,
    params: JumpParams,
}

impl Merton {
    pub fn new(config: SimulationConfig, params: JumpParams) -> SimResult<Self> {
        validate_jump_params(&params)?;
        Ok(Merton { config, params })
    }

    pub fn simulate(&self) -> SimResult<PathMatrix> {
        let cfg = &self.config;
        let p = &self.params;
        let (paths, steps) = (cfg.paths(), cfg.steps());

        let dt = cfg.dt();
        let drift = (cfg.rate() - 0.5 * cfg.vol() * cfg.vol()) * dt;
        let vol_sqrt_dt = cfg.vol() * dt.sqrt();
        let s0 = cfg.s0();
        let log_s0 = s0.ln();

        let jump_counts = jump_count_dist(p.lambda, dt)?;

        let mut prices = Array2::<f64>::zeros((paths, steps));
        let streams = PathStreams::new(cfg.seed());

        Zip::indexed(prices.rows_mut()).par_for_each(|k, mut row| {
            let mut rng = streams.stream(k as u64);
            row[0] = s0;

            let mut log_s = log_s0;
            for i in 1..steps {
                let z1 = rng::get_normal_draw(&mut rng);
                let z2 = rng::get_normal_draw(&mut rng);
                let count = sample_jump_count(&jump_counts, &mut rng);
                log_s += drift + vol_sqrt_dt * z1 + jump_increment(p, z2, count);
                row[i] = log_s.exp();
            }
        });

        Ok(prices)
    }
}

pub(crate) fn validate_jump_params(params: &JumpParams) -> SimResult<()> {
    validate_finite("mu", params.mu)?;
    validate_finite("delta", params.delta)?;
    validate_non_negative("delta", params.delta)?;
    validate_finite("lambda", params.lambda)?;
    validate_non_negative("lambda", params.lambda)?;
    Ok(())
}

/// Poisson distribution for the per-step jump count; `None` when the
/// intensity is zero (the distribution rejects a zero rate, and no draws
/// are needed in that case).
pub(crate) fn jump_count_dist(lambda: f64, dt: f64) -> SimResult<Option<Poisson<f64>>> {
    let rate = lambda * dt;
    if rate > 0.0 {
        let dist = Poisson::new(rate).map_err(|e| SimError::InvalidParameter {
            parameter: "lambda".to_string(),
            value: lambda,
            constraint: format!("does not yield a valid Poisson rate: {}", e),
        })?;
        Ok(Some(dist))
    } else {
        Ok(None)
    }
}

pub(crate) fn sample_jump_count(dist: &Option<Poisson<f64>>, rng: &mut StdRng) -> f64 {
    match dist {
        Some(d) => d.sample(rng),
        None => 0.0,
    }
}

/// Literal Merton-style jump term, shared with the Bates simulator.
#[inline]
pub(crate) fn jump_increment(params: &JumpParams, z: f64, count: f64) -> f64 {
    (params.mu + params.delta * z - 1.0).exp() * count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig::new(100.0, 0.2, 0.05, 32, 40, 1.0, 42).expect("Valid configuration")
    }

    fn params() -> JumpParams {
        JumpParams {
            mu: 0.0,
            delta: 0.1,
            lambda: 1.0,
        }
    }

    #[test]
    fn test_shape_and_initial_column() {
        let prices = Merton::new(config(), params())
            .expect("Valid parameters")
            .simulate()
            .expect("Simulation succeeds");

        assert_eq!(prices.dim(), (32, 40));
        for &s in prices.column(0) {
            assert_eq!(s, 100.0);
        }
    }

    #[test]
    fn test_negative_intensity_rejected() {
        let mut bad = params();
        bad.lambda = -1.0;
        assert!(Merton::new(config(), bad).is_err());

        let mut bad_delta = params();
        bad_delta.delta = -0.1;
        assert!(Merton::new(config(), bad_delta).is_err());
    }

    #[test]
    fn test_zero_intensity_zero_vol_is_deterministic() {
        // lambda = 0 kills the jump term, vol = 0 kills the diffusion; the
        // remaining path is the pure drift.
        let cfg = SimulationConfig::new(100.0, 0.0, 0.05, 8, 16, 1.0, 42)
            .expect("Valid configuration");
        let no_jumps = JumpParams {
            mu: 0.3,
            delta: 0.5,
            lambda: 0.0,
        };

        let prices = Merton::new(cfg, no_jumps)
            .expect("Valid parameters")
            .simulate()
            .expect("Simulation succeeds");

        let dt = cfg.dt();
        for row in prices.rows() {
            for (i, &s) in row.iter().enumerate() {
                let expected = 100.0 * (0.05 * i as f64 * dt).exp();
                assert!((s - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_jump_increment_literal_formula() {
        let p = params();
        assert_eq!(jump_increment(&p, 0.5, 0.0), 0.0);
        let expected = (p.mu + p.delta * 0.5 - 1.0_f64).exp() * 2.0;
        assert!((jump_increment(&p, 0.5, 2.0) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_reproducible_for_fixed_seed() {
        let merton = Merton::new(config(), params()).expect("Valid parameters");
        let a = merton.simulate().expect("Succeeds");
        let b = merton.simulate().expect("Succeeds");
        assert_eq!(a, b);
    }
}
