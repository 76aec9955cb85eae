//! Multiplicative-update SymNMF.
//!
//! Finds a non-negative `H` (n x k) with `H Hᵗ ≈ W` by repeating
//!
//! ```text
//! H'[i][j] = H[i][j] * ((1 - β) + β * (W H)[i][j] / (H Hᵗ H)[i][j])
//! ```
//!
//! with `β = 0.5`. Every factor in the update is non-negative, so `H` stays
//! non-negative for any non-negative `W` and starting point.

use crate::config::{validate_cluster_count, SymNmfConfig};
use crate::distance::frobenius_distance;
use crate::error::SymNmfError;
use ndarray::{Array1, Array2, ArrayView2, Zip};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;
use tracing::{debug, trace};

/// Step size of the damped multiplicative update
pub const BETA: f64 = 0.5;

/// Result of the SymNMF iteration
#[derive(Debug, Clone)]
pub struct FactorizationResult {
    pub factor: Array2<f64>,
    pub n_iterations: usize,
    pub converged: bool,
}

/// Draw the starting factor uniformly from `[0, 2 * sqrt(mean(W) / k))`.
///
/// The generator is supplied by the caller so that runs are reproducible
/// from a seed.
///
/// # Errors
///
/// - [`SymNmfError::InvalidClusterCount`] unless `1 <= k < n`
/// - [`SymNmfError::DegenerateGraph`] if `W` has no positive, finite mean
pub fn initialize_factor<R: Rng + ?Sized>(
    w: &ArrayView2<f64>,
    k: usize,
    rng: &mut R,
) -> Result<Array2<f64>, SymNmfError> {
    let n = w.nrows();
    validate_cluster_count(k, n)?;

    let mean = w.mean().unwrap_or(0.0);
    let upper = 2.0 * (mean / k as f64).sqrt();
    if !(upper.is_finite() && upper > 0.0) {
        return Err(SymNmfError::DegenerateGraph(format!(
            "normalized similarity has mean {}, cannot seed the factor",
            mean
        )));
    }

    Ok(Array2::random_using((n, k), Uniform::new(0.0, upper), rng))
}

/// One damped multiplicative update of the factor.
///
/// Entries whose denominator `(H Hᵗ H)[i][j]` is zero are left unchanged.
pub fn update_factor(w: &ArrayView2<f64>, h: &ArrayView2<f64>) -> Array2<f64> {
    let numerator = w.dot(h);
    // H (Hᵗ H) costs n*k^2 instead of n^2*k for (H Hᵗ) H
    let denominator = h.dot(&h.t().dot(h));

    let mut next = Array2::zeros(h.raw_dim());
    Zip::from(&mut next)
        .and(h)
        .and(&numerator)
        .and(&denominator)
        .for_each(|out, &h_ij, &num, &den| {
            *out = if den > 0.0 {
                h_ij * ((1.0 - BETA) + BETA * num / den)
            } else {
                h_ij
            };
        });

    next
}

/// Iterate [`update_factor`] until the factor stops moving or the iteration
/// budget runs out.
///
/// Running out of iterations is not an error: the last computed factor is
/// returned with `converged` set to `false`.
pub fn factorize(
    w: &ArrayView2<f64>,
    initial: Array2<f64>,
    config: &SymNmfConfig,
) -> FactorizationResult {
    let mut current = initial;
    let mut n_iterations = 0;
    let mut converged = false;

    for iteration in 0..config.max_iters {
        n_iterations = iteration + 1;

        let next = update_factor(w, &current.view());
        let delta = frobenius_distance(&next.view(), &current.view());
        current = next;

        trace!(iteration = n_iterations, delta, "symnmf update");

        if delta < config.tol {
            converged = true;
            break;
        }
    }

    if converged {
        debug!(n_iterations, tol = config.tol, "symnmf converged");
    } else {
        debug!(
            max_iters = config.max_iters,
            "symnmf stopped at iteration budget without converging"
        );
    }

    FactorizationResult {
        factor: current,
        n_iterations,
        converged,
    }
}

/// Hard labels from a factor: the arg-max of each row, ties to the lowest index
pub fn assign_from_factor(factor: &ArrayView2<f64>) -> Array1<usize> {
    factor
        .outer_iter()
        .map(|row| {
            let mut best = 0;
            for (j, &value) in row.iter().enumerate() {
                if value > row[best] {
                    best = j;
                }
            }
            best
        })
        .collect()
}
