use ndarray::Array2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use symnmf_rs::factorization::{initialize_factor, update_factor};
use symnmf_rs::graph::{degree_matrix, normalized_similarity, similarity_matrix};
use symnmf_rs::KMeans;

/// Point sets with `n` in `n_range`, dimension 1..4 and coordinates in `(-span, span)`
fn point_sets(
    n_range: std::ops::Range<usize>,
    span: f64,
) -> impl Strategy<Value = Array2<f64>> {
    (n_range, 1usize..4).prop_flat_map(move |(n, d)| {
        prop::collection::vec(-span..span, n * d).prop_map(move |values| {
            Array2::from_shape_vec((n, d), values).expect("shape matches length")
        })
    })
}

proptest! {
    #[test]
    fn prop_similarity_symmetric_zero_diagonal(points in point_sets(1..15, 10.0)) {
        let a = similarity_matrix(&points.view()).unwrap();
        let n = points.nrows();

        for i in 0..n {
            prop_assert_eq!(a[[i, i]], 0.0);
            for j in 0..n {
                prop_assert_eq!(a[[i, j]], a[[j, i]]);
                prop_assert!((0.0..=1.0).contains(&a[[i, j]]));
            }
        }
    }

    #[test]
    fn prop_degree_row_sums(points in point_sets(1..15, 10.0)) {
        let a = similarity_matrix(&points.view()).unwrap();
        let d = degree_matrix(&points.view()).unwrap();
        let n = points.nrows();

        for i in 0..n {
            prop_assert!(d[[i, i]] >= 0.0);
            prop_assert!((d[[i, i]] - a.row(i).sum()).abs() < 1e-12);
            for j in 0..n {
                if i != j {
                    prop_assert_eq!(d[[i, j]], 0.0);
                }
            }
        }
    }

    #[test]
    fn prop_normalized_symmetric_zero_diagonal(points in point_sets(2..15, 2.0)) {
        let w = normalized_similarity(&points.view()).unwrap();
        let n = points.nrows();

        for i in 0..n {
            prop_assert_eq!(w[[i, i]], 0.0);
            for j in 0..n {
                prop_assert_eq!(w[[i, j]], w[[j, i]]);
            }
        }
    }

    #[test]
    fn prop_factor_non_negative(
        points in point_sets(3..12, 2.0),
        k_seed in 0usize..100,
        seed in any::<u64>()
    ) {
        let n = points.nrows();
        let k = 1 + k_seed % (n - 1);
        let w = normalized_similarity(&points.view()).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut h = initialize_factor(&w.view(), k, &mut rng).unwrap();

        for _ in 0..20 {
            h = update_factor(&w.view(), &h.view());
            prop_assert!(h.iter().all(|&v| v >= 0.0));
        }
    }

    #[test]
    fn prop_kmeans_all_assigned(points in point_sets(2..20, 10.0), k_seed in 0usize..100) {
        let n = points.nrows();
        let k = 1 + k_seed % (n - 1);

        let labels = KMeans::new(k).fit_predict(&points.view()).unwrap();

        prop_assert_eq!(labels.len(), n);
        for &l in labels.iter() {
            prop_assert!(l < k);
        }
    }
}
