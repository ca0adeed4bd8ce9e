// src/math_utils.rs
use ndarray::Array2;

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

pub fn sample_mean(xs: &[f64]) -> f64 {
    xs.iter().sum::<f64>() / xs.len() as f64
}

pub fn sample_std(xs: &[f64]) -> f64 {
    let mean = sample_mean(xs);
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / xs.len() as f64;
    var.sqrt()
}

/// Pearson correlation across all cells of two equal-shape matrices
pub fn sample_correlation(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    assert_eq!(a.dim(), b.dim(), "matrices must have the same shape");
    let n = a.len() as f64;

    let (mut sum_a, mut sum_b, mut sum_ab, mut sum_aa, mut sum_bb) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (x, y) in a.iter().zip(b.iter()) {
        sum_a += x;
        sum_b += y;
        sum_ab += x * y;
        sum_aa += x * x;
        sum_bb += y * y;
    }

    let cov = sum_ab / n - (sum_a / n) * (sum_b / n);
    let var_a = sum_aa / n - (sum_a / n).powi(2);
    let var_b = sum_bb / n - (sum_b / n).powi(2);
    cov / (var_a.sqrt() * var_b.sqrt())
}
