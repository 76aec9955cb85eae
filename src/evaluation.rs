//! Cluster quality scoring and the SymNMF / k-means comparison.
//!
//! The quality metric sits behind [`ClusterScorer`]. [`Silhouette`] is the
//! default scorer and follows the scikit-learn definition: for point `i` with
//! mean intra-cluster distance `a` and smallest mean distance to another
//! cluster `b`, `s(i) = (b - a) / max(a, b)`, with `s(i) = 0` for points in
//! singleton clusters. The score is the mean of `s(i)` over all points.

use crate::algorithm::assign_labels;
use crate::distance::pairwise_squared_distances;
use crate::error::SymNmfError;
use crate::factorization::assign_from_factor;
use ndarray::{ArrayView1, ArrayView2};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// A clustering quality metric over points and hard labels.
///
/// Implementations can assume `labels.len() == points.nrows()` and between 2
/// and `n - 1` distinct labels; [`evaluate_with`] checks both before calling.
pub trait ClusterScorer {
    /// Score a labeling; higher means better separated clusters.
    fn score(&self, points: &ArrayView2<f64>, labels: &ArrayView1<usize>) -> f64;
}

/// Mean silhouette coefficient with Euclidean distance
#[derive(Debug, Clone, Copy, Default)]
pub struct Silhouette;

impl ClusterScorer for Silhouette {
    fn score(&self, points: &ArrayView2<f64>, labels: &ArrayView1<usize>) -> f64 {
        let n = points.nrows();
        if n == 0 {
            return 0.0;
        }

        // Dense cluster indices in label order
        let clusters: BTreeMap<usize, usize> = labels
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(dense, label)| (label, dense))
            .collect();
        let n_clusters = clusters.len();
        let dense: Vec<usize> = labels.iter().map(|label| clusters[label]).collect();

        let mut sizes = vec![0usize; n_clusters];
        for &c in &dense {
            sizes[c] += 1;
        }

        let dists = pairwise_squared_distances(points).mapv_into(f64::sqrt);

        let mut total = 0.0;
        let mut dist_sums = vec![0.0; n_clusters];
        for i in 0..n {
            let own = dense[i];
            if sizes[own] == 1 {
                continue;
            }

            dist_sums.iter_mut().for_each(|sum| *sum = 0.0);
            for (j, &c) in dense.iter().enumerate() {
                dist_sums[c] += dists[[i, j]];
            }

            let a = dist_sums[own] / (sizes[own] - 1) as f64;
            let b = (0..n_clusters)
                .filter(|&c| c != own)
                .map(|c| dist_sums[c] / sizes[c] as f64)
                .fold(f64::INFINITY, f64::min);

            let denom = a.max(b);
            if denom > 0.0 {
                total += (b - a) / denom;
            }
        }

        total / n as f64
    }
}

/// Scores of both clustering methods on the same points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub symnmf: f64,
    pub kmeans: f64,
}

/// Score a labeling with the default [`Silhouette`] scorer.
pub fn evaluate(points: &ArrayView2<f64>, labels: &ArrayView1<usize>) -> Result<f64, SymNmfError> {
    evaluate_with(&Silhouette, points, labels)
}

/// Score a labeling with a custom scorer.
///
/// # Errors
///
/// - [`SymNmfError::InvalidDimensions`] if there is not one label per point
/// - [`SymNmfError::DegenerateLabeling`] if all points share one label or
///   every point has its own
pub fn evaluate_with<S: ClusterScorer + ?Sized>(
    scorer: &S,
    points: &ArrayView2<f64>,
    labels: &ArrayView1<usize>,
) -> Result<f64, SymNmfError> {
    let n_points = points.nrows();
    if labels.len() != n_points {
        return Err(SymNmfError::InvalidDimensions(format!(
            "Expected {} labels, got {}",
            n_points,
            labels.len()
        )));
    }

    let n_labels = labels
        .iter()
        .collect::<BTreeSet<_>>()
        .len();
    if n_labels < 2 || n_labels >= n_points {
        return Err(SymNmfError::DegenerateLabeling { n_labels, n_points });
    }

    Ok(scorer.score(points, labels))
}

/// Score SymNMF and k-means results against each other.
///
/// SymNMF labels are the row arg-max of `factor`; k-means labels are the
/// nearest of `centroids`.
pub fn compare(
    points: &ArrayView2<f64>,
    factor: &ArrayView2<f64>,
    centroids: &ArrayView2<f64>,
) -> Result<Comparison, SymNmfError> {
    if centroids.ncols() != points.ncols() {
        return Err(SymNmfError::InvalidDimensions(format!(
            "Expected centroids with {} features, got {}",
            points.ncols(),
            centroids.ncols()
        )));
    }

    let symnmf_labels = assign_from_factor(factor);
    let kmeans_labels = assign_labels(points, centroids);

    let comparison = Comparison {
        symnmf: evaluate(points, &symnmf_labels.view())?,
        kmeans: evaluate(points, &kmeans_labels.view())?,
    };

    debug!(
        symnmf = comparison.symnmf,
        kmeans = comparison.kmeans,
        "compared clusterings"
    );
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_silhouette_two_pairs() {
        let points = array![[0.0, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]];
        let labels = array![0usize, 0, 1, 1];

        // a = 1, b = (10 + sqrt(101)) / 2 for every point
        let b = (10.0 + 101f64.sqrt()) / 2.0;
        let expected = (b - 1.0) / b;

        let score = evaluate(&points.view(), &labels.view()).unwrap();
        assert_relative_eq!(score, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_silhouette_singleton_scores_zero() {
        let points = array![[0.0], [1.0], [5.0]];
        let labels = array![0usize, 0, 1];

        // Points 0 and 1: a = 1, b = 5 and 4; point 2 is a singleton
        let expected = ((5.0 - 1.0) / 5.0 + (4.0 - 1.0) / 4.0) / 3.0;

        let score = evaluate(&points.view(), &labels.view()).unwrap();
        assert_relative_eq!(score, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_silhouette_ignores_label_values() {
        let points = array![[0.0], [0.5], [4.0], [4.5]];
        let a = evaluate(&points.view(), &array![0usize, 0, 1, 1].view()).unwrap();
        let b = evaluate(&points.view(), &array![7usize, 7, 2, 2].view()).unwrap();

        assert_relative_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn test_bad_labeling_is_rejected() {
        let points = array![[0.0], [1.0], [2.0]];

        assert!(matches!(
            evaluate(&points.view(), &array![1usize, 1, 1].view()),
            Err(SymNmfError::DegenerateLabeling { n_labels: 1, n_points: 3 })
        ));
        assert!(matches!(
            evaluate(&points.view(), &array![0usize, 1, 2].view()),
            Err(SymNmfError::DegenerateLabeling { n_labels: 3, n_points: 3 })
        ));
        assert!(matches!(
            evaluate(&points.view(), &array![0usize, 1].view()),
            Err(SymNmfError::InvalidDimensions(_))
        ));
    }

    struct Constant(f64);

    impl ClusterScorer for Constant {
        fn score(&self, _points: &ArrayView2<f64>, _labels: &ArrayView1<usize>) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_custom_scorer() {
        let points = array![[0.0], [1.0], [2.0]];
        let score = evaluate_with(&Constant(0.25), &points.view(), &array![0usize, 0, 1].view());
        assert_eq!(score.unwrap(), 0.25);
    }

    #[test]
    fn test_compare() {
        let points = array![[0.0, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]];
        let factor = array![[0.9, 0.1], [0.8, 0.0], [0.0, 0.7], [0.2, 0.6]];
        // Splits the pairs the wrong way
        let centroids = array![[5.0, 0.0], [5.0, 1.0]];

        let comparison = compare(&points.view(), &factor.view(), &centroids.view()).unwrap();

        assert!(comparison.symnmf > 0.9);
        assert!(comparison.kmeans < 0.0);
    }
}
