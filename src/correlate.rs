// src/correlate.rs
//! Correlated standard-normal generation via Cholesky factorization
//!
//! # Mathematical Framework
//!
//! Given a target correlation ρ ∈ (-1, 1), the 2×2 correlation matrix
//! ```text
//! C = [[1, ρ],
//!      [ρ, 1]]
//! ```
//! factors as C = L·Lᵀ with lower-triangular
//! ```text
//! L = [[1,  0        ],
//!      [ρ,  √(1 - ρ²)]]
//! ```
//! Left-multiplying a pair of independent standard normals (z₁, z₂) by L
//! yields (ε₁, ε₂) with unit variances and Corr(ε₁, ε₂) = ρ.
//!
//! Cells are independent across paths and across steps: each path row owns a
//! seeded stream and every step consumes a fresh (z₁, z₂) pair. One call
//! returns BOTH matrices — drawing ε₁ and ε₂ from separate invocations would
//! silently decorrelate them.

use crate::error::{validation::*, SimError, SimResult};
use crate::rng::{self, PathStreams};
use nalgebra::{Cholesky, Matrix2};
use ndarray::{Array2, Zip};

/// Lower-triangular Cholesky factor of the 2×2 correlation matrix.
///
/// # Errors
/// - `InvalidParameter` if `rho` lies outside [-1, 1]
/// - `NumericalDegeneracy` if the factorization fails; at `rho = ±1` the
///   matrix is singular and the decomposition hits a zero pivot
pub fn cholesky_factor(rho: f64) -> SimResult<Matrix2<f64>> {
    validate_correlation("rho", rho)?;

    let correlation = Matrix2::new(1.0, rho, rho, 1.0);
    let cholesky = Cholesky::new(correlation).ok_or_else(|| SimError::NumericalDegeneracy {
        operation: "Cholesky factorization".to_string(),
        reason: format!(
            "correlation matrix with rho = {} is not positive-definite",
            rho
        ),
    })?;

    Ok(cholesky.l())
}

/// Generate two `paths × steps` matrices of standard normals with per-cell
/// correlation `rho`.
///
/// Row `k` of both matrices is drawn from the stream seeded with
/// `seed + k`, so the output is deterministic for a fixed seed at any
/// thread count.
pub fn correlated_normal_matrices(
    rho: f64,
    paths: usize,
    steps: usize,
    seed: u64,
) -> SimResult<(Array2<f64>, Array2<f64>)> {
    validate_paths(paths)?;
    validate_steps(steps)?;
    let l = cholesky_factor(rho)?;
    let (l00, l10, l11) = (l[(0, 0)], l[(1, 0)], l[(1, 1)]);

    let mut eps1 = Array2::<f64>::zeros((paths, steps));
    let mut eps2 = Array2::<f64>::zeros((paths, steps));
    let streams = PathStreams::new(seed);

    Zip::indexed(eps1.rows_mut())
        .and(eps2.rows_mut())
        .par_for_each(|k, mut row1, mut row2| {
            let mut rng = streams.stream(k as u64);
            for i in 0..steps {
                let z1 = rng::get_normal_draw(&mut rng);
                let z2 = rng::get_normal_draw(&mut rng);
                row1[i] = l00 * z1;
                row2[i] = l10 * z1 + l11 * z2;
            }
        });

    Ok((eps1, eps2))
}
