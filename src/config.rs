use crate::error::SymNmfError;

/// Seed used for factor initialization unless configured otherwise
pub const DEFAULT_SEED: u64 = 0;

/// Configuration for the SymNMF factorization
#[derive(Debug, Clone)]
pub struct SymNmfConfig {
    /// Number of clusters (columns of the factor matrix)
    pub k: usize,

    /// Maximum number of multiplicative update rounds
    pub max_iters: usize,

    /// Convergence tolerance. The factorization stops once the Frobenius norm
    /// of the change between two successive factors drops below this value.
    pub tol: f64,

    /// Seed of the generator used to draw the initial factor
    pub seed: u64,
}

impl Default for SymNmfConfig {
    fn default() -> Self {
        Self {
            k: 2,
            max_iters: 300,
            tol: 1e-4,
            seed: DEFAULT_SEED,
        }
    }
}

impl SymNmfConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Configuration for Lloyd's k-means
#[derive(Debug, Clone)]
pub struct KMeansConfig {
    /// Number of clusters
    pub k: usize,

    /// Maximum number of assign/update rounds
    pub max_iters: usize,

    /// Convergence tolerance. The algorithm stops once every centroid moves by
    /// less than this Euclidean distance in one round.
    pub tol: f64,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self {
            k: 2,
            max_iters: 200,
            tol: 1e-3,
        }
    }
}

impl KMeansConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set the convergence tolerance
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }
}

/// Check that `k` lies in `[1, n_points)`.
///
/// Both clustering methods need at least one cluster and strictly fewer
/// clusters than points.
pub fn validate_cluster_count(k: usize, n_points: usize) -> Result<(), SymNmfError> {
    if k == 0 || k >= n_points {
        return Err(SymNmfError::InvalidClusterCount { k, n_points });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SymNmfConfig::new(3);
        assert_eq!(config.k, 3);
        assert_eq!(config.max_iters, 300);
        assert_eq!(config.tol, 1e-4);
        assert_eq!(config.seed, DEFAULT_SEED);

        let config = KMeansConfig::new(4).with_max_iters(10).with_tol(0.5);
        assert_eq!(config.k, 4);
        assert_eq!(config.max_iters, 10);
        assert_eq!(config.tol, 0.5);
    }

    #[test]
    fn test_validate_cluster_count() {
        assert!(validate_cluster_count(1, 2).is_ok());
        assert!(validate_cluster_count(3, 4).is_ok());
        assert!(matches!(
            validate_cluster_count(0, 4),
            Err(SymNmfError::InvalidClusterCount { k: 0, n_points: 4 })
        ));
        assert!(matches!(
            validate_cluster_count(4, 4),
            Err(SymNmfError::InvalidClusterCount { k: 4, n_points: 4 })
        ));
        assert!(validate_cluster_count(1, 1).is_err());
    }
}
