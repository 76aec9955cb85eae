//! # symnmf-rs
//!
//! Symmetric Non-negative Matrix Factorization (SymNMF) clustering in Rust,
//! compared against Lloyd's k-means, built on ndarray.
//!
//! ## Pipeline
//!
//! - **Similarity graph**: Gaussian-kernel similarity `A`, degree matrix `D`
//!   and normalized similarity `W = D^(-1/2) A D^(-1/2)` ([`graph`])
//! - **SymNMF**: seeded non-negative factor `H` refined with damped
//!   multiplicative updates until `H Hᵗ ≈ W` ([`SymNmf`])
//! - **k-means**: Lloyd iterations seeded from the first `k` points ([`KMeans`])
//! - **Evaluation**: hard labels from both methods scored with the silhouette
//!   coefficient ([`evaluation`])
//!
//! Everything is single-threaded and deterministic: the same points, `k` and
//! seed always give the same result.
//!
//! ## Example
//!
//! ```rust
//! use symnmf_rs::{compare, KMeans, SymNmf};
//! use ndarray::array;
//!
//! let points = array![[0.0, 0.0], [10.0, 0.0], [0.0, 1.0], [10.0, 1.0]];
//!
//! let mut symnmf = SymNmf::new(2);
//! symnmf.fit(&points.view()).unwrap();
//!
//! let mut kmeans = KMeans::new(2);
//! kmeans.train(&points.view()).unwrap();
//!
//! let scores = compare(
//!     &points.view(),
//!     &symnmf.factor().unwrap().view(),
//!     &kmeans.centroids().unwrap().view(),
//! )
//! .unwrap();
//! assert!(scores.symnmf > 0.9 && scores.kmeans > 0.9);
//! ```
//!
//! ## Custom Configuration
//!
//! ```rust
//! use symnmf_rs::{SymNmf, SymNmfConfig};
//! use ndarray::array;
//!
//! let points = array![[0.0, 0.0], [0.1, 0.2], [5.0, 5.0], [5.1, 4.9], [2.5, 2.5]];
//!
//! let config = SymNmfConfig {
//!     k: 2,
//!     max_iters: 50,
//!     tol: 1e-6,
//!     seed: 42,
//! };
//!
//! let mut model = SymNmf::with_config(config);
//! let labels = model.fit_predict(&points.view()).unwrap();
//! assert_eq!(labels.len(), 5);
//! ```
//!
//! ## BLAS Acceleration
//!
//! The matrix products of the factorization can run on a BLAS backend:
//!
//! ```toml
//! # macOS (recommended - uses Apple Accelerate)
//! symnmf-rs = { version = "0.1", features = ["accelerate"] }
//!
//! # Linux/Windows (requires OpenBLAS installed)
//! symnmf-rs = { version = "0.1", features = ["openblas"] }
//! ```

// Link BLAS libraries when features are enabled
#[cfg(any(feature = "accelerate", feature = "openblas"))]
extern crate blas_src;

#[cfg(feature = "accelerate")]
extern crate accelerate_src;

#[cfg(feature = "openblas")]
extern crate openblas_src;

mod algorithm;
mod config;
mod distance;
mod error;
pub mod evaluation;
pub mod factorization;
mod goal;
pub mod graph;
pub mod io;
mod kmeans;
mod symnmf;

pub use algorithm::{assign_labels, inertia, initialize_centroids, lloyd, update_centroids, KMeansResult};
pub use config::{validate_cluster_count, KMeansConfig, SymNmfConfig, DEFAULT_SEED};
pub use error::SymNmfError;
pub use evaluation::{compare, evaluate, evaluate_with, ClusterScorer, Comparison, Silhouette};
pub use goal::Goal;
pub use kmeans::KMeans;
pub use symnmf::SymNmf;
