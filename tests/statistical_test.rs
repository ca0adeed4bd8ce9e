// tests/statistical_test.rs
use price_paths::config::SimulationConfig;
use price_paths::correlate::correlated_normal_matrices;
use price_paths::math_utils::{sample_correlation, sample_mean};
use price_paths::models::gbm::Gbm;
use price_paths::models::heston::{Heston, HestonParams};
use price_paths::models::merton::{JumpParams, Merton};

#[test]
fn test_correlated_generator_hits_target_rho() {
    // 100,000 x 50 cells; the sampling error of the correlation estimate is
    // well inside +/-0.02 at this size.
    let rho = 0.7;
    let (eps1, eps2) = correlated_normal_matrices(rho, 100_000, 50, 42).expect("Valid");

    let sample_rho = sample_correlation(&eps1, &eps2);
    assert!(
        (sample_rho - rho).abs() < 0.02,
        "sample correlation {} outside tolerance of target {}",
        sample_rho,
        rho
    );
}

#[test]
fn test_gbm_antithetic_pair_mean_is_deterministic_drift() {
    // Averaging log S over a path and its mirror cancels the noise term
    // entirely, leaving the deterministic drift at every step.
    let cfg = SimulationConfig::new(100.0, 0.2, 0.05, 200, 50, 1.0, 42)
        .expect("Valid configuration");
    let prices = Gbm::new(cfg).expect("Even").simulate().expect("Succeeds");

    let half = cfg.paths() / 2;
    let dt = cfg.dt();
    let drift = (cfg.rate() - 0.5 * cfg.vol() * cfg.vol()) * dt;

    for k in 0..half {
        for i in 0..cfg.steps() {
            let pair_mean = 0.5 * (prices[[k, i]].ln() + prices[[k + half, i]].ln());
            let expected = 100.0_f64.ln() + i as f64 * drift;
            assert!(
                (pair_mean - expected).abs() < 1e-9,
                "pair {} step {}: mean log-price {} vs drift {}",
                k,
                i,
                pair_mean,
                expected
            );
        }
    }
}

#[test]
fn test_gbm_terminal_mean_near_forward() {
    // E[S_T] = S0 * exp(r T) under the risk-neutral drift; antithetic
    // sampling keeps the estimator tight even at moderate path counts.
    let cfg = SimulationConfig::new(100.0, 0.2, 0.05, 20_000, 64, 1.0, 42)
        .expect("Valid configuration");
    let prices = Gbm::new(cfg).expect("Even").simulate().expect("Succeeds");

    let last = cfg.steps() - 1;
    let t_last = last as f64 * cfg.dt();
    let terminal: Vec<f64> = prices.column(last).to_vec();
    let forward = 100.0 * (0.05_f64 * t_last).exp();

    let mean = sample_mean(&terminal);
    let rel_error = (mean - forward).abs() / forward;
    assert!(
        rel_error < 0.01,
        "terminal mean {} deviates from forward {} by {}",
        mean,
        forward,
        rel_error
    );
}

#[test]
fn test_heston_outputs_finite_at_scale() {
    // The variance floor guarantees sqrt never sees a negative argument, so
    // even a Feller-violating parameter set cannot produce NaN.
    let params = HestonParams {
        kappa: 0.5,
        eta: 0.04,
        theta: 1.5,
        rho: -0.8,
        vol0: 0.04,
    };
    let cfg = SimulationConfig::new(100.0, 0.2, 0.05, 2_000, 252, 1.0, 42)
        .expect("Valid configuration");

    let (variances, prices) = Heston::new(cfg, params)
        .expect("Valid parameters")
        .simulate()
        .expect("Simulation succeeds");

    assert!(variances.iter().all(|v| v.is_finite()));
    assert!(prices.iter().all(|s| s.is_finite() && *s > 0.0));
}

#[test]
fn test_merton_jump_intensity_raises_dispersion() {
    // More jumps mean wider terminal dispersion, holding everything else
    // fixed. A coarse but robust sanity check of the compound-Poisson term.
    let cfg = SimulationConfig::new(100.0, 0.1, 0.02, 4_000, 64, 1.0, 42)
        .expect("Valid configuration");
    let quiet = JumpParams {
        mu: 0.0,
        delta: 0.4,
        lambda: 0.1,
    };
    let busy = JumpParams {
        mu: 0.0,
        delta: 0.4,
        lambda: 3.0,
    };

    let last = cfg.steps() - 1;
    let spread = |params: JumpParams| -> f64 {
        let prices = Merton::new(cfg, params)
            .expect("Valid parameters")
            .simulate()
            .expect("Simulation succeeds");
        let terminal: Vec<f64> = prices.column(last).to_vec();
        price_paths::math_utils::sample_std(&terminal)
    };

    let quiet_spread = spread(quiet);
    let busy_spread = spread(busy);
    assert!(
        busy_spread > quiet_spread,
        "terminal std {} at lambda=3 not above {} at lambda=0.1",
        busy_spread,
        quiet_spread
    );
}
