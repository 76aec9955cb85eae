//! Basic example comparing SymNMF and k-means on synthetic data
//!
//! Run with: cargo run --example basic --release

use ndarray::Array2;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use symnmf_rs::{compare, KMeans, SymNmf, SymNmfConfig};

fn main() {
    println!("=== symnmf-rs example ===\n");

    // 3 clusters in 2D, interleaved so the first k points seed different clusters
    let n_samples = 90;
    let n_features = 2;
    let n_clusters = 3;

    println!("Generating {} samples with {} features...", n_samples, n_features);

    let mut data = Array2::<f64>::zeros((n_samples, n_features));
    let centers = [[-5.0, -5.0], [0.0, 5.0], [5.0, -5.0]];

    for i in 0..n_samples {
        let cluster_idx = i % 3;
        let noise = Array2::random((1, n_features), Uniform::new(-1.0, 1.0));
        data[[i, 0]] = centers[cluster_idx][0] + noise[[0, 0]];
        data[[i, 1]] = centers[cluster_idx][1] + noise[[0, 1]];
    }

    println!("True cluster centers:");
    for (i, center) in centers.iter().enumerate() {
        println!("  Cluster {}: ({:.2}, {:.2})", i, center[0], center[1]);
    }
    println!();

    println!("Running SymNMF with k={}...", n_clusters);
    let mut symnmf = SymNmf::with_config(SymNmfConfig::new(n_clusters).with_seed(42));
    let symnmf_labels = symnmf.fit_predict(&data.view()).expect("SymNMF failed");
    println!(
        "  {} iterations, converged: {}",
        symnmf.n_iterations(),
        symnmf.converged()
    );

    println!("Running k-means with k={}...\n", n_clusters);
    let mut kmeans = KMeans::new(n_clusters);
    let kmeans_labels = kmeans.fit_predict(&data.view()).expect("k-means failed");

    println!("Learned centroids:");
    let centroids = kmeans.centroids().unwrap();
    for i in 0..centroids.nrows() {
        println!(
            "  Centroid {}: ({:.4}, {:.4})",
            i,
            centroids[[i, 0]],
            centroids[[i, 1]]
        );
    }
    println!();

    let mut symnmf_counts = vec![0usize; n_clusters];
    let mut kmeans_counts = vec![0usize; n_clusters];
    for (&s, &k) in symnmf_labels.iter().zip(kmeans_labels.iter()) {
        symnmf_counts[s] += 1;
        kmeans_counts[k] += 1;
    }

    println!("Cluster sizes (symnmf / kmeans):");
    for i in 0..n_clusters {
        println!("  Cluster {}: {} / {}", i, symnmf_counts[i], kmeans_counts[i]);
    }
    println!();

    let scores = compare(
        &data.view(),
        &symnmf.factor().unwrap().view(),
        &centroids.view(),
    )
    .expect("Scoring failed");

    println!("Silhouette scores:");
    println!("  nmf: {:.4}", scores.symnmf);
    println!("  kmeans: {:.4}", scores.kmeans);

    println!("\n=== Done! ===");
}
