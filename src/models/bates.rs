// src/models/bates.rs
//! Bates model paths: Heston stochastic volatility plus Merton-style jumps
//!
//! The variance/price recursion is exactly the Heston one (see
//! [`super::heston`]); the log-price accumulation additionally receives the
//! literal jump term of [`super::merton`], driven by a third normal stream
//! and a Poisson count stream that are independent of the correlated
//! diffusion shocks. With `lambda = 0` the output coincides with Heston's
//! for the same configuration and parameters.

use crate::config::SimulationConfig;
use crate::correlate;
use crate::error::SimResult;
use crate::models::heston::{self, Heston, HestonParams};
use crate::models::merton::{
    jump_count_dist, jump_increment, sample_jump_count, validate_jump_params, JumpParams,
};
use crate::rng::{self, PathStreams};
use crate::{PathMatrix, VariancePathMatrix};
use ndarray::{Array2, Zip};

// Keeps the jump streams disjoint from the diffusion streams for any path
// count below the validation ceiling.
const JUMP_STREAM_TAG: u64 = 0x9E37_79B9_7F4A_7C15;

pub struct Bates {
    config: SimulationConfig,
    heston_params: HestonParams,
    jump_params: JumpParams,
}

impl Bates {
    pub fn new(
        config: SimulationConfig,
        heston_params: HestonParams,
        jump_params: JumpParams,
    ) -> SimResult<Self> {
        // Same parameter constraints as the two models being composed.
        Heston::validate_params(&heston_params)?;
        validate_jump_params(&jump_params)?;
        Ok(Bates {
            config,
            heston_params,
            jump_params,
        })
    }

    /// Simulate variance and price paths jointly.
    ///
    /// Returns `(variance_paths, price_paths)`, both `paths × steps`.
    pub fn simulate(&self) -> SimResult<(VariancePathMatrix, PathMatrix)> {
        let cfg = &self.config;
        let hp = &self.heston_params;
        let jp = &self.jump_params;
        let (paths, steps) = (cfg.paths(), cfg.steps());

        let dt = cfg.dt();
        let sqrt_dt = dt.sqrt();
        let rate = cfg.rate();
        let s0 = cfg.s0();
        let log_s0 = s0.ln();

        let (eps1, eps2) =
            correlate::correlated_normal_matrices(hp.rho, paths, steps, cfg.seed())?;
        let jump_counts = jump_count_dist(jp.lambda, dt)?;
        let jump_streams = PathStreams::new(cfg.seed()).offset(JUMP_STREAM_TAG);

        let mut variances = Array2::<f64>::zeros((paths, steps));
        let mut prices = Array2::<f64>::zeros((paths, steps));

        Zip::indexed(variances.rows_mut())
            .and(prices.rows_mut())
            .and(eps1.rows())
            .and(eps2.rows())
            .par_for_each(|k, mut v_row, mut s_row, e1, e2| {
                let mut jump_rng = jump_streams.stream(k as u64);
                v_row[0] = hp.vol0;
                s_row[0] = s0;

                let mut log_s = log_s0;
                for i in 1..steps {
                    let v_prev = v_row[i - 1];
                    v_row[i] = heston::variance_step(hp, v_prev, dt, e1[i]);

                    let z3 = rng::get_normal_draw(&mut jump_rng);
                    let count = sample_jump_count(&jump_counts, &mut jump_rng);
                    log_s += (rate - v_prev / 2.0) * dt
                        + v_prev * sqrt_dt * e2[i]
                        + jump_increment(jp, z3, count);
                    s_row[i] = log_s.exp();
                }
            });

        Ok((variances, prices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig::new(100.0, 0.2, 0.05, 32, 40, 1.0, 42).expect("Valid configuration")
    }

    fn heston_params() -> HestonParams {
        HestonParams {
            kappa: 2.0,
            eta: 0.04,
            theta: 0.3,
            rho: -0.5,
            vol0: 0.04,
        }
    }

    fn jump_params() -> JumpParams {
        JumpParams {
            mu: 0.0,
            delta: 0.1,
            lambda: 1.0,
        }
    }

    #[test]
    fn test_shapes_and_initial_columns() {
        let (variances, prices) = Bates::new(config(), heston_params(), jump_params())
            .expect("Valid parameters")
            .simulate()
            .expect("Simulation succeeds");

        assert_eq!(variances.dim(), (32, 40));
        assert_eq!(prices.dim(), (32, 40));
        for &v in variances.column(0) {
            assert_eq!(v, 0.04);
        }
        for &s in prices.column(0) {
            assert_eq!(s, 100.0);
        }
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut bad_rho = heston_params();
        bad_rho.rho = -1.2;
        assert!(Bates::new(config(), bad_rho, jump_params()).is_err());

        let mut bad_lambda = jump_params();
        bad_lambda.lambda = -0.5;
        assert!(Bates::new(config(), heston_params(), bad_lambda).is_err());
    }

    #[test]
    fn test_zero_intensity_reduces_to_heston() {
        let no_jumps = JumpParams {
            mu: 0.0,
            delta: 0.1,
            lambda: 0.0,
        };

        let (bv, bs) = Bates::new(config(), heston_params(), no_jumps)
            .expect("Valid parameters")
            .simulate()
            .expect("Simulation succeeds");
        let (hv, hs) = Heston::new(config(), heston_params())
            .expect("Valid parameters")
            .simulate()
            .expect("Simulation succeeds");

        assert_eq!(bv, hv);
        assert_eq!(bs, hs);
    }

    #[test]
    fn test_variance_unaffected_by_jumps() {
        // Jumps enter the log-price only; the variance recursion must be
        // identical with and without them.
        let (v_with, _) = Bates::new(config(), heston_params(), jump_params())
            .expect("Valid parameters")
            .simulate()
            .expect("Succeeds");
        let (v_without, _) = Heston::new(config(), heston_params())
            .expect("Valid parameters")
            .simulate()
            .expect("Succeeds");
        assert_eq!(v_with, v_without);
    }

    #[test]
    fn test_reproducible_for_fixed_seed() {
        let bates =
            Bates::new(config(), heston_params(), jump_params()).expect("Valid parameters");
        let (v1, s1) = bates.simulate().expect("Succeeds");
        let (v2, s2) = bates.simulate().expect("Succeeds");
        assert_eq!(v1, v2);
        assert_eq!(s1, s2);
    }
}
