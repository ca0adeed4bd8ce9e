// scripts/benchmark.rs
use price_paths::config::SimulationConfig;
use price_paths::math_utils::Timer;
use price_paths::models::bates::Bates;
use price_paths::models::gbm::Gbm;
use price_paths::models::heston::{Heston, HestonParams};
use price_paths::models::merton::{JumpParams, Merton};
use std::env;
use std::fs::File;
use std::io::Write;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rayon_threads: usize,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rayon_threads: rayon::current_num_threads(),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }

    fn print(&self) {
        println!("OS: {}", self.os);
        println!("CPU cores: {}", self.cpu_cores);
        println!("Rayon threads: {}", self.rayon_threads);
        println!("RUSTFLAGS: {}", self.rustc_flags);
        println!();
    }
}

struct BenchResult {
    model: &'static str,
    paths: usize,
    steps: usize,
    elapsed_ms: f64,
}

impl BenchResult {
    fn paths_per_sec(&self) -> f64 {
        self.paths as f64 / (self.elapsed_ms / 1000.0)
    }
}

fn bench_model(model: &'static str, paths: usize, steps: usize) -> BenchResult {
    let config = SimulationConfig::new(100.0, 0.2, 0.05, paths, steps, 1.0, 42)
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

    let mut timer = Timer::new();
    timer.start();
    match model {
        "gbm" => {
            Gbm::new(config)
                .expect("Even path count")
                .simulate()
                .expect("Simulation succeeds");
        }
        "heston" => {
            Heston::new(config, heston_params)
                .expect("Valid parameters")
                .simulate()
                .expect("Simulation succeeds");
        }
        "merton" => {
            Merton::new(config, jump_params)
                .expect("Valid parameters")
                .simulate()
                .expect("Simulation succeeds");
        }
        "bates" => {
            Bates::new(config, heston_params, jump_params)
                .expect("Valid parameters")
                .simulate()
                .expect("Simulation succeeds");
        }
        _ => unreachable!("unknown model {}", model),
    }
    let elapsed_ms = timer.elapsed_ms();

    BenchResult {
        model,
        paths,
        steps,
        elapsed_ms,
    }
}

fn main() {
    println!(
        "price-paths benchmark — {}\n",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    let info = SystemInfo::gather();
    info.print();

    let steps = 252;
    let path_grid = [10_000usize, 50_000, 100_000];
    let models = ["gbm", "heston", "merton", "bates"];

    let mut results = Vec::new();
    for &paths in &path_grid {
        for model in models {
            let result = bench_model(model, paths, steps);
            println!(
                "{:<8} {:>8} paths x {} steps: {:>9.1} ms ({:>12.0} paths/sec)",
                result.model,
                result.paths,
                result.steps,
                result.elapsed_ms,
                result.paths_per_sec()
            );
            results.push(result);
        }
        println!();
    }

    std::fs::create_dir_all("bench").expect("Could not create bench directory");
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("bench/results_{}.csv", timestamp);
    let mut file = File::create(&filename).expect("Could not create results file");
    writeln!(file, "model,paths,steps,elapsed_ms,paths_per_sec").expect("Could not write header");
    for r in &results {
        writeln!(
            file,
            "{},{},{},{:.3},{:.1}",
            r.model,
            r.paths,
            r.steps,
            r.elapsed_ms,
            r.paths_per_sec()
        )
        .expect("Could not write row");
    }
    println!("Benchmark results written to {}", filename);
}
