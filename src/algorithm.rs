use crate::config::{validate_cluster_count, KMeansConfig};
use crate::distance::{compute_centroid_shift, find_nearest_centroids, squared_euclidean};
use crate::error::SymNmfError;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};
use std::time::Instant;
use tracing::{debug, trace};

/// Result of the k-means algorithm
#[derive(Debug, Clone)]
pub struct KMeansResult {
    pub centroids: Array2<f64>,
    pub labels: Array1<usize>,
    pub n_iterations: usize,
    pub converged: bool,
}

/// Run Lloyd's algorithm
///
/// Centroids start at the first `k` points. Each round assigns every point to
/// its nearest centroid and moves each centroid to the mean of its points; the
/// loop stops once no centroid moves by `config.tol` or more, or after
/// `config.max_iters` rounds.
pub fn lloyd(data: &ArrayView2<f64>, config: &KMeansConfig) -> Result<KMeansResult, SymNmfError> {
    let n_samples = data.nrows();
    let k = config.k;

    validate_cluster_count(k, n_samples)?;

    debug!(
        n_samples,
        n_features = data.ncols(),
        k,
        "training k-means"
    );

    let mut centroids = initialize_centroids(data, k);
    let mut n_iterations = 0;
    let mut converged = false;

    for iteration in 0..config.max_iters {
        let iter_start = Instant::now();
        n_iterations = iteration + 1;

        let labels = assign_labels(data, &centroids.view());
        let next = update_centroids(data, &labels.view(), &centroids.view());
        let shift = compute_centroid_shift(&centroids.view(), &next.view());
        centroids = next;

        trace!(
            iteration = n_iterations,
            shift,
            elapsed_s = iter_start.elapsed().as_secs_f64(),
            "k-means round"
        );

        if shift < config.tol {
            converged = true;
            debug!(
                n_iterations,
                shift,
                tol = config.tol,
                "k-means converged"
            );
            break;
        }
    }

    if !converged {
        debug!(
            max_iters = config.max_iters,
            "k-means stopped at iteration budget without converging"
        );
    }

    let labels = assign_labels(data, &centroids.view());

    Ok(KMeansResult {
        centroids,
        labels,
        n_iterations,
        converged,
    })
}

/// Initialize centroids as the first `k` data points, in order
pub fn initialize_centroids(data: &ArrayView2<f64>, k: usize) -> Array2<f64> {
    data.slice(s![..k, ..]).to_owned()
}

/// Label each point with the index of its nearest centroid
pub fn assign_labels(data: &ArrayView2<f64>, centroids: &ArrayView2<f64>) -> Array1<usize> {
    find_nearest_centroids(data, centroids)
}

/// Move each centroid to the mean of the points assigned to it.
///
/// A centroid with no assigned points keeps its previous position.
pub fn update_centroids(
    data: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
    previous: &ArrayView2<f64>,
) -> Array2<f64> {
    let (k, n_features) = previous.dim();

    let mut cluster_sums: Array2<f64> = Array2::zeros((k, n_features));
    let mut cluster_counts = vec![0usize; k];

    for (point, &label) in data.outer_iter().zip(labels.iter()) {
        cluster_counts[label] += 1;
        let mut sum = cluster_sums.row_mut(label);
        sum += &point;
    }

    let mut centroids = previous.to_owned();
    for (cluster_idx, &count) in cluster_counts.iter().enumerate() {
        if count > 0 {
            let mean = &cluster_sums.row(cluster_idx) / count as f64;
            centroids.row_mut(cluster_idx).assign(&mean);
        }
    }

    centroids
}

/// Sum of squared distances from each point to its assigned centroid
pub fn inertia(
    data: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
    centroids: &ArrayView2<f64>,
) -> f64 {
    data.outer_iter()
        .zip(labels.iter())
        .map(|(point, &label)| squared_euclidean(&point, &centroids.row(label)))
        .sum()
}
