// src/config.rs
//! Simulation configuration shared by all four path simulators

use crate::error::{validation::*, SimResult};

/// Validated parameter bundle shared by every simulator.
///
/// Constructed through the single validating factory [`SimulationConfig::new`];
/// fields are immutable afterwards, so a config that reaches a simulator is
/// known to satisfy all invariants. "Updating" a value goes through a `with_*`
/// method, which builds a fresh instance and re-runs the full validation —
/// there is no way to observe a partially-updated configuration.
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    s0: f64,
    vol: f64,
    rate: f64,
    paths: usize,
    steps: usize,
    horizon: f64,
    seed: u64,
}

impl SimulationConfig {
    /// Build a validated configuration.
    ///
    /// # Parameters
    /// - `s0`: initial asset price (> 0)
    /// - `vol`: base volatility (≥ 0); the constant diffusion coefficient for
    ///   GBM and Merton (Heston/Bates carry their own variance process)
    /// - `rate`: risk-free rate (any finite real)
    /// - `paths`: number of independent trajectories (≥ 1)
    /// - `steps`: number of discretized time points, column 0 included (≥ 1)
    /// - `horizon`: time horizon in years (> 0)
    /// - `seed`: base seed for the per-path random streams
    ///
    /// # Errors
    /// `SimError::InvalidParameter` / `SimError::InvalidConfiguration` if any
    /// constraint is violated; nothing is allocated or drawn before this check.
    pub fn new(
        s0: f64,
        vol: f64,
        rate: f64,
        paths: usize,
        steps: usize,
        horizon: f64,
        seed: u64,
    ) -> SimResult<Self> {
        validate_finite("s0", s0)?;
        validate_positive("s0", s0)?;
        validate_finite("vol", vol)?;
        validate_non_negative("vol", vol)?;
        validate_finite("rate", rate)?;
        validate_paths(paths)?;
        validate_steps(steps)?;
        validate_finite("horizon", horizon)?;
        validate_positive("horizon", horizon)?;

        Ok(Self {
            s0,
            vol,
            rate,
            paths,
            steps,
            horizon,
            seed,
        })
    }

    pub fn s0(&self) -> f64 {
        self.s0
    }

    pub fn vol(&self) -> f64 {
        self.vol
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn paths(&self) -> usize {
        self.paths
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Time increment of the Euler discretization
    pub fn dt(&self) -> f64 {
        self.horizon / self.steps as f64
    }

    /// New configuration with a different path count, re-validated
    pub fn with_paths(&self, paths: usize) -> SimResult<Self> {
        Self::new(
            self.s0, self.vol, self.rate, paths, self.steps, self.horizon, self.seed,
        )
    }

    /// New configuration with a different step count, re-validated
    pub fn with_steps(&self, steps: usize) -> SimResult<Self> {
        Self::new(
            self.s0, self.vol, self.rate, self.paths, steps, self.horizon, self.seed,
        )
    }

    /// New configuration with a different base volatility, re-validated
    pub fn with_vol(&self, vol: f64) -> SimResult<Self> {
        Self::new(
            self.s0, vol, self.rate, self.paths, self.steps, self.horizon, self.seed,
        )
    }

    /// New configuration with a different base seed
    pub fn with_seed(&self, seed: u64) -> SimResult<Self> {
        Self::new(
            self.s0, self.vol, self.rate, self.paths, self.steps, self.horizon, seed,
        )
    }
}
