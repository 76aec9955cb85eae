use crate::config::{validate_cluster_count, SymNmfConfig};
use crate::error::SymNmfError;
use crate::factorization::{assign_from_factor, factorize, initialize_factor};
use crate::graph::normalized_similarity;
use ndarray::{Array1, Array2, ArrayView2};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Symmetric non-negative matrix factorization clustering.
///
/// Fitting builds the normalized similarity graph of the points, seeds a
/// factor from `config.seed` and refines it with damped multiplicative
/// updates. Row `i` of the fitted factor is a soft membership of point `i`;
/// its arg-max is the hard label.
///
/// # Example
///
/// ```
/// use symnmf_rs::SymNmf;
/// use ndarray::array;
///
/// let points = array![[0.0, 0.0], [0.0, 1.0], [10.0, 0.0], [10.0, 1.0]];
///
/// let mut model = SymNmf::new(2);
/// let labels = model.fit_predict(&points.view()).unwrap();
///
/// assert_eq!(labels[0], labels[1]);
/// assert_eq!(labels[2], labels[3]);
/// assert_ne!(labels[0], labels[2]);
/// ```
pub struct SymNmf {
    /// Model configuration
    config: SymNmfConfig,

    /// Fitted factor (None if not yet fitted)
    factor: Option<Array2<f64>>,

    /// Update rounds used by the last fit
    n_iterations: usize,

    /// Whether the last fit met the tolerance before the iteration budget
    converged: bool,
}

impl SymNmf {
    /// Create a new model with default configuration and `k` clusters.
    pub fn new(k: usize) -> Self {
        Self::with_config(SymNmfConfig::new(k))
    }

    /// Create a new model with custom configuration.
    pub fn with_config(config: SymNmfConfig) -> Self {
        Self {
            config,
            factor: None,
            n_iterations: 0,
            converged: false,
        }
    }

    /// Fit the model to a point set of shape (n_points, n_features).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `k` is not in `[1, n_points)` (checked before any matrix is built)
    /// - the points are empty or not finite
    /// - a point is isolated and the graph cannot be normalized
    pub fn fit(&mut self, points: &ArrayView2<f64>) -> Result<&mut Self, SymNmfError> {
        validate_cluster_count(self.config.k, points.nrows())?;

        let w = normalized_similarity(points)?;
        self.fit_normalized(&w.view())
    }

    /// Fit the model to an already normalized similarity matrix.
    pub fn fit_normalized(&mut self, w: &ArrayView2<f64>) -> Result<&mut Self, SymNmfError> {
        if w.nrows() != w.ncols() {
            return Err(SymNmfError::InvalidDimensions(format!(
                "Expected a square similarity matrix, got {}x{}",
                w.nrows(),
                w.ncols()
            )));
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let initial = initialize_factor(w, self.config.k, &mut rng)?;
        let result = factorize(w, initial, &self.config);

        self.factor = Some(result.factor);
        self.n_iterations = result.n_iterations;
        self.converged = result.converged;
        Ok(self)
    }

    /// Hard cluster labels of the fitted points.
    ///
    /// # Errors
    ///
    /// Returns [`SymNmfError::NotFitted`] before the first fit.
    pub fn predict(&self) -> Result<Array1<usize>, SymNmfError> {
        let factor = self.factor.as_ref().ok_or(SymNmfError::NotFitted)?;
        Ok(assign_from_factor(&factor.view()))
    }

    /// Fit the model and return the hard labels in one call.
    pub fn fit_predict(&mut self, points: &ArrayView2<f64>) -> Result<Array1<usize>, SymNmfError> {
        self.fit(points)?;
        self.predict()
    }

    /// Get the fitted factor.
    ///
    /// # Returns
    ///
    /// Returns `Some(&Array2<f64>)` if the model has been fitted, `None` otherwise.
    pub fn factor(&self) -> Option<&Array2<f64>> {
        self.factor.as_ref()
    }

    /// Number of update rounds run by the last fit.
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Whether the last fit converged within the iteration budget.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the configuration.
    pub fn config(&self) -> &SymNmfConfig {
        &self.config
    }
}
