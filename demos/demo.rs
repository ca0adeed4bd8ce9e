// demos/demo.rs
use price_paths::config::SimulationConfig;
use price_paths::math_utils::{sample_mean, sample_std, Timer};
use price_paths::models::bates::Bates;
use price_paths::models::gbm::Gbm;
use price_paths::models::heston::{Heston, HestonParams};
use price_paths::models::merton::{JumpParams, Merton};
use price_paths::{output, PathMatrix};

fn main() {
    println!("Running price-paths demo\n");

    let paths = 10_000;
    let steps = 252; // Daily steps over one year
    let config = SimulationConfig::new(100.0, 0.2, 0.05, paths, steps, 1.0, 12345)
        .expect("Valid configuration");

    let heston_params = HestonParams {
        kappa: 2.0,
        eta: 0.04,
        theta: 0.3,
        rho: -0.7,
        vol0: 0.04,
    };
    let jump_params = JumpParams {
        mu: 0.0,
        delta: 0.15,
        lambda: 0.5,
    };

    std::fs::create_dir_all("results").expect("Could not create results directory");
    let mut timer = Timer::new();

    // --- GBM ---
    println!("--- GBM (antithetic) ---");
    timer.start();
    let gbm_paths = Gbm::new(config)
        .expect("Even path count")
        .simulate()
        .expect("Valid configuration");
    report("GBM", &gbm_paths, timer.elapsed_ms());

    // --- Heston ---
    println!("--- Heston ---");
    timer.start();
    let (heston_variances, heston_paths) = Heston::new(config, heston_params)
        .expect("Valid parameters")
        .simulate()
        .expect("Valid correlation");
    report("Heston", &heston_paths, timer.elapsed_ms());
    let terminal_var: Vec<f64> = heston_variances.column(steps - 1).to_vec();
    println!(
        "Terminal variance: mean {:.6}, long-run level {:.6}\n",
        sample_mean(&terminal_var),
        heston_params.eta
    );

    // --- Merton ---
    println!("--- Merton jump diffusion ---");
    timer.start();
    let merton_paths = Merton::new(config, jump_params)
        .expect("Valid parameters")
        .simulate()
        .expect("Valid configuration");
    report("Merton", &merton_paths, timer.elapsed_ms());

    // --- Bates ---
    println!("--- Bates ---");
    timer.start();
    let (_, bates_paths) = Bates::new(config, heston_params, jump_params)
        .expect("Valid parameters")
        .simulate()
        .expect("Valid correlation");
    report("Bates", &bates_paths, timer.elapsed_ms());

    // --- CSV Output ---
    match output::write_matrix_to_csv("results/gbm_paths.csv", &gbm_paths) {
        Ok(_) => println!("GBM paths written to results/gbm_paths.csv"),
        Err(e) => eprintln!("Error writing GBM paths: {}", e),
    }
    match output::write_matrix_to_csv("results/heston_variance_paths.csv", &heston_variances) {
        Ok(_) => println!("Heston variance paths written to results/heston_variance_paths.csv"),
        Err(e) => eprintln!("Error writing Heston variance paths: {}", e),
    }

    let gbm_terminal: Vec<f64> = gbm_paths.column(steps - 1).to_vec();
    let gbm_mean = sample_mean(&gbm_terminal).to_string();
    let gbm_std = sample_std(&gbm_terminal).to_string();
    let paths_str = paths.to_string();
    let steps_str = steps.to_string();
    let summary_data = vec![
        ("metric", "value"),
        ("paths", paths_str.as_str()),
        ("steps", steps_str.as_str()),
        ("gbm_terminal_mean", gbm_mean.as_str()),
        ("gbm_terminal_std", gbm_std.as_str()),
    ];
    match output::write_summary_to_csv("results/summary.csv", &summary_data) {
        Ok(_) => println!("Summary written to results/summary.csv"),
        Err(e) => eprintln!("Error writing summary: {}", e),
    }
}

fn report(name: &str, prices: &PathMatrix, elapsed_ms: f64) {
    let (paths, steps) = prices.dim();
    let terminal: Vec<f64> = prices.column(steps - 1).to_vec();
    println!(
        "{}: {} paths x {} steps in {:.1} ms ({:.0} paths/sec)",
        name,
        paths,
        steps,
        elapsed_ms,
        paths as f64 / (elapsed_ms / 1000.0)
    );
    println!(
        "Terminal price: mean {:.4}, std {:.4}\n",
        sample_mean(&terminal),
        sample_std(&terminal)
    );
}
