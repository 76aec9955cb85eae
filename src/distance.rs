use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Zip};

/// Squared Euclidean distance between two vectors of equal length
#[inline]
pub fn squared_euclidean(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Squared Euclidean distances between every pair of rows.
///
/// Only the upper triangle is computed and mirrored, so the result is exactly
/// symmetric with a zero diagonal.
pub fn pairwise_squared_distances(data: &ArrayView2<f64>) -> Array2<f64> {
    let n = data.nrows();
    let mut dists = Array2::zeros((n, n));

    for i in 0..n {
        let row_i = data.row(i);
        for j in (i + 1)..n {
            let d = squared_euclidean(&row_i, &data.row(j));
            dists[[i, j]] = d;
            dists[[j, i]] = d;
        }
    }

    dists
}

/// Find the nearest centroid for each data point
///
/// Distances are computed directly rather than through the
/// `||x||^2 + ||c||^2 - 2*x.c` expansion so that exact ties stay ties and
/// resolve to the lowest centroid index.
///
/// # Arguments
/// * `data` - Data points (n_data, n_features)
/// * `centroids` - Centroids (k, n_features)
///
/// # Returns
/// * `labels` - Cluster assignments for each data point (n_data,)
pub fn find_nearest_centroids(data: &ArrayView2<f64>, centroids: &ArrayView2<f64>) -> Array1<usize> {
    let mut labels = Array1::zeros(data.nrows());

    for (label, point) in labels.iter_mut().zip(data.outer_iter()) {
        let mut best_dist = f64::INFINITY;
        for (j, centroid) in centroids.outer_iter().enumerate() {
            let dist = squared_euclidean(&point, &centroid);
            // Strict comparison keeps the first (lowest) index on ties
            if dist < best_dist {
                best_dist = dist;
                *label = j;
            }
        }
    }

    labels
}

/// Largest Euclidean movement of any single centroid between two rounds
pub fn compute_centroid_shift(
    old_centroids: &ArrayView2<f64>,
    new_centroids: &ArrayView2<f64>,
) -> f64 {
    old_centroids
        .outer_iter()
        .zip(new_centroids.outer_iter())
        .map(|(old_c, new_c)| squared_euclidean(&old_c, &new_c).sqrt())
        .fold(0.0, f64::max)
}

/// Frobenius norm of `a - b`
pub fn frobenius_distance(a: &ArrayView2<f64>, b: &ArrayView2<f64>) -> f64 {
    let mut sum = 0.0;
    Zip::from(a).and(b).for_each(|&x, &y| {
        let d = x - y;
        sum += d * d;
    });
    sum.sqrt()
}
