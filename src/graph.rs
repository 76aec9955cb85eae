//! Similarity graph construction.
//!
//! Points become vertices of a complete weighted graph whose edge weights are
//! a Gaussian kernel of the squared Euclidean distance:
//!
//! ```text
//! A[i][j] = exp(-||p_i - p_j||^2 / 2)    (i != j),    A[i][i] = 0
//! D[i][i] = sum_j A[i][j]
//! W       = D^(-1/2) A D^(-1/2)
//! ```
//!
//! `W` is what the SymNMF factorization consumes.

use crate::distance::pairwise_squared_distances;
use crate::error::SymNmfError;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use tracing::debug;

/// Build the similarity matrix `A` of a point set.
///
/// # Errors
///
/// Returns [`SymNmfError::MalformedInput`] if the point set is empty, has zero
/// dimensions, or contains a non-finite coordinate.
pub fn similarity_matrix(points: &ArrayView2<f64>) -> Result<Array2<f64>, SymNmfError> {
    validate_points(points)?;

    let mut similarity = pairwise_squared_distances(points);
    similarity.mapv_inplace(|sq_dist| (-sq_dist / 2.0).exp());
    similarity.diag_mut().fill(0.0);

    debug!(n = points.nrows(), d = points.ncols(), "built similarity matrix");
    Ok(similarity)
}

/// Build the diagonal degree matrix `D` of a point set.
pub fn degree_matrix(points: &ArrayView2<f64>) -> Result<Array2<f64>, SymNmfError> {
    let similarity = similarity_matrix(points)?;
    Ok(Array2::from_diag(&degrees(&similarity.view())))
}

/// Build the normalized similarity matrix `W = D^(-1/2) A D^(-1/2)`.
///
/// # Errors
///
/// Returns [`SymNmfError::DegenerateGraph`] when a point has zero similarity
/// to every other point (including the single-point set), since its degree
/// cannot be inverted.
pub fn normalized_similarity(points: &ArrayView2<f64>) -> Result<Array2<f64>, SymNmfError> {
    let similarity = similarity_matrix(points)?;
    let degrees = degrees(&similarity.view());
    normalize(&similarity.view(), &degrees.view())
}

/// Vertex degrees, i.e. the row sums of a similarity matrix
pub fn degrees(similarity: &ArrayView2<f64>) -> Array1<f64> {
    similarity.sum_axis(Axis(1))
}

/// Scale a similarity matrix by the inverse square roots of its degrees.
pub fn normalize(
    similarity: &ArrayView2<f64>,
    degrees: &ArrayView1<f64>,
) -> Result<Array2<f64>, SymNmfError> {
    let n = similarity.nrows();

    if let Some(isolated) = degrees.iter().position(|&deg| deg == 0.0) {
        return Err(SymNmfError::DegenerateGraph(format!(
            "point {} has zero similarity to every other point",
            isolated
        )));
    }

    let inv_sqrt = degrees.mapv(|deg| 1.0 / deg.sqrt());
    let mut normalized = Array2::zeros((n, n));

    for i in 0..n {
        for j in (i + 1)..n {
            let w = inv_sqrt[i] * similarity[[i, j]] * inv_sqrt[j];
            normalized[[i, j]] = w;
            normalized[[j, i]] = w;
        }
    }

    debug!(n, "normalized similarity matrix");
    Ok(normalized)
}

pub(crate) fn validate_points(points: &ArrayView2<f64>) -> Result<(), SymNmfError> {
    if points.nrows() == 0 {
        return Err(SymNmfError::MalformedInput(
            "point set is empty".to_string(),
        ));
    }
    if points.ncols() == 0 {
        return Err(SymNmfError::MalformedInput(
            "points have zero dimensions".to_string(),
        ));
    }
    if let Some(((i, j), _)) = points.indexed_iter().find(|(_, v)| !v.is_finite()) {
        return Err(SymNmfError::MalformedInput(format!(
            "coordinate {} of point {} is not finite",
            j, i
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_similarity_values() {
        let points = array![[0.0, 0.0], [0.0, 1.0], [2.0, 0.0]];
        let a = similarity_matrix(&points.view()).unwrap();

        assert_relative_eq!(a[[0, 1]], (-0.5f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(a[[0, 2]], (-2.0f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(a[[1, 2]], (-2.5f64).exp(), epsilon = 1e-12);
        assert_eq!(a[[2, 1]], a[[1, 2]]);
        assert_eq!(a.diag().sum(), 0.0);
    }

    #[test]
    fn test_degree_is_row_sum() {
        let points = array![[0.0], [1.0], [3.0]];
        let a = similarity_matrix(&points.view()).unwrap();
        let d = degree_matrix(&points.view()).unwrap();

        for i in 0..3 {
            assert_relative_eq!(d[[i, i]], a.row(i).sum(), epsilon = 1e-12);
            for j in 0..3 {
                if i != j {
                    assert_eq!(d[[i, j]], 0.0);
                }
            }
        }
    }

    #[test]
    fn test_normalized_two_points() {
        // With two points both degrees equal the single edge weight, so W[0][1] = 1
        let points = array![[0.0, 0.0], [1.0, 1.0]];
        let w = normalized_similarity(&points.view()).unwrap();

        assert_relative_eq!(w[[0, 1]], 1.0, epsilon = 1e-12);
        assert_relative_eq!(w[[1, 0]], 1.0, epsilon = 1e-12);
        assert_eq!(w[[0, 0]], 0.0);
    }

    #[test]
    fn test_normalized_matches_matrix_product() {
        let points = array![[0.0, 0.0], [0.5, 1.0], [2.0, 0.0], [1.0, 1.5]];
        let a = similarity_matrix(&points.view()).unwrap();
        let d = degree_matrix(&points.view()).unwrap();
        let d_inv_sqrt = d.mapv(|v| if v > 0.0 { 1.0 / v.sqrt() } else { 0.0 });
        let expected = d_inv_sqrt.dot(&a).dot(&d_inv_sqrt);

        let w = normalized_similarity(&points.view()).unwrap();
        for (x, y) in w.iter().zip(expected.iter()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_isolated_point_is_rejected() {
        // exp(-1e6 / 2) underflows to exactly zero
        let points = array![[0.0, 0.0], [0.0, 1.0], [1000.0, 0.0]];
        let result = normalized_similarity(&points.view());

        match result {
            Err(SymNmfError::DegenerateGraph(msg)) => assert!(msg.contains("point 2")),
            other => panic!("expected DegenerateGraph, got {:?}", other),
        }
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let points = array![[1.0, 2.0]];
        assert!(similarity_matrix(&points.view()).is_ok());
        assert!(matches!(
            normalized_similarity(&points.view()),
            Err(SymNmfError::DegenerateGraph(_))
        ));
    }

    #[test]
    fn test_malformed_points() {
        let empty = Array2::<f64>::zeros((0, 2));
        assert!(matches!(
            similarity_matrix(&empty.view()),
            Err(SymNmfError::MalformedInput(_))
        ));

        let no_dims = Array2::<f64>::zeros((3, 0));
        assert!(matches!(
            similarity_matrix(&no_dims.view()),
            Err(SymNmfError::MalformedInput(_))
        ));

        let nan = array![[0.0, f64::NAN], [1.0, 1.0]];
        assert!(matches!(
            degree_matrix(&nan.view()),
            Err(SymNmfError::MalformedInput(_))
        ));
    }
}
