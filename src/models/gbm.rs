// src/models/gbm.rs
//! Geometric Brownian motion paths with antithetic sampling
//!
//! Euler discretization of the log-price under Black–Scholes dynamics:
//! ```text
//! d(log S) = (r - σ²/2) dt + σ √dt · ε,   ε ~ N(0,1)
//! ```
//! Half the paths use independent draws ε, the other half the negated draws
//! -ε. Averaging a path with its sign-mirrored twin cancels the first-order
//! noise contribution, cutting Monte Carlo variance at a fixed path count.

use crate::config::SimulationConfig;
use crate::error::{validation::*, SimResult};
use crate::rng::{self, PathStreams};
use crate::PathMatrix;
use ndarray::{Array2, Axis, Zip};

pub struct Gbm {
    config: SimulationConfig,
}

impl Gbm {
    /// Antithetic pairing needs two equal halves, so the configured path
    /// count must be even; odd counts are rejected here, before any draw.
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        validate_even_paths(config.paths())?;
        Ok(Gbm { config })
    }

    /// Simulate price paths; row `k + paths/2` is the antithetic mirror of
    /// row `k`.
    pub fn simulate(&self) -> SimResult<PathMatrix> {
        let cfg = &self.config;
        let (paths, steps) = (cfg.paths(), cfg.steps());
        let half = paths / 2;

        let dt = cfg.dt();
        let drift = (cfg.rate() - 0.5 * cfg.vol() * cfg.vol()) * dt;
        let vol_sqrt_dt = cfg.vol() * dt.sqrt();
        let log_s0 = cfg.s0().ln();
        let s0 = cfg.s0();

        let mut prices = Array2::<f64>::zeros((paths, steps));
        let streams = PathStreams::new(cfg.seed());

        {
            let (mut top, mut bottom) = prices.view_mut().split_at(Axis(0), half);
            Zip::indexed(top.rows_mut())
                .and(bottom.rows_mut())
                .par_for_each(|k, mut row, mut mirror| {
                    let mut rng = streams.stream(k as u64);
                    row[0] = s0;
                    mirror[0] = s0;

                    // Log-price accumulates step by step; the price level is
                    // the elementwise exponential of the running sum.
                    let mut log_s = log_s0;
                    let mut log_m = log_s0;
                    for i in 1..steps {
                        let z = rng::get_normal_draw(&mut rng);
                        log_s += drift + vol_sqrt_dt * z;
                        log_m += drift - vol_sqrt_dt * z;
                        row[i] = log_s.exp();
                        mirror[i] = log_m.exp();
                    }
                });
        }

        Ok(prices)
    }
}
