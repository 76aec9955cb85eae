use crate::algorithm::{assign_labels, lloyd};
use crate::config::KMeansConfig;
use crate::error::SymNmfError;
use ndarray::{Array1, Array2, ArrayView2};

/// Lloyd's k-means clustering on ndarray data.
///
/// Centroids are seeded deterministically from the first `k` points, so the
/// result depends only on the data and its row order. This is the baseline
/// that SymNMF is compared against.
///
/// # Example
///
/// ```
/// use symnmf_rs::KMeans;
/// use ndarray::array;
///
/// let data = array![[0.0, 0.0], [10.0, 0.0], [0.0, 1.0], [10.0, 1.0]];
///
/// let mut kmeans = KMeans::new(2);
/// kmeans.train(&data.view()).unwrap();
///
/// let labels = kmeans.predict(&data.view()).unwrap();
/// assert_eq!(labels.to_vec(), vec![0, 1, 0, 1]);
/// ```
pub struct KMeans {
    /// Model configuration
    config: KMeansConfig,

    /// Number of features (dimensions), 0 until the first train call
    d: usize,

    /// Trained centroids (None if not yet fitted)
    centroids: Option<Array2<f64>>,
}

impl KMeans {
    /// Create a new KMeans instance with default configuration.
    pub fn new(k: usize) -> Self {
        Self::with_config(KMeansConfig::new(k))
    }

    /// Create a new KMeans instance with custom configuration.
    pub fn with_config(config: KMeansConfig) -> Self {
        Self {
            config,
            d: 0,
            centroids: None,
        }
    }

    /// Train the k-means model on the given data.
    ///
    /// # Arguments
    ///
    /// * `data` - Training data of shape (n_samples, n_features)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `k` is not in `[1, n_samples)`
    /// - Data dimensions don't match (for subsequent calls)
    pub fn train(&mut self, data: &ArrayView2<f64>) -> Result<(), SymNmfError> {
        let n_features = data.ncols();

        // Set dimensions on first call, validate on subsequent calls
        if self.d == 0 {
            self.d = n_features;
        } else if n_features != self.d {
            return Err(SymNmfError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        let result = lloyd(data, &self.config)?;

        self.centroids = Some(result.centroids);
        Ok(())
    }

    /// Fit the model to the data.
    ///
    /// Equivalent to `train()`, returning `&mut Self` for method chaining.
    pub fn fit(&mut self, data: &ArrayView2<f64>) -> Result<&mut Self, SymNmfError> {
        self.train(data)?;
        Ok(self)
    }

    /// Predict cluster assignments for data.
    ///
    /// # Returns
    ///
    /// Returns an array of cluster labels of shape (n_samples,).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The model has not been fitted yet
    /// - Data dimensions don't match the training data
    pub fn predict(&self, data: &ArrayView2<f64>) -> Result<Array1<usize>, SymNmfError> {
        let centroids = self.centroids.as_ref().ok_or(SymNmfError::NotFitted)?;

        let n_features = data.ncols();
        if n_features != self.d {
            return Err(SymNmfError::InvalidDimensions(format!(
                "Expected {} features, got {}",
                self.d, n_features
            )));
        }

        Ok(assign_labels(data, &centroids.view()))
    }

    /// Fit the model and predict cluster assignments in one call.
    pub fn fit_predict(&mut self, data: &ArrayView2<f64>) -> Result<Array1<usize>, SymNmfError> {
        self.train(data)?;
        self.predict(data)
    }

    /// Get the centroids of the fitted model.
    ///
    /// # Returns
    ///
    /// Returns `Some(&Array2<f64>)` if the model has been fitted, `None` otherwise.
    pub fn centroids(&self) -> Option<&Array2<f64>> {
        self.centroids.as_ref()
    }

    /// Get the number of clusters.
    pub fn k(&self) -> usize {
        self.config.k
    }

    /// Get the number of features (dimensions).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Get the configuration.
    pub fn config(&self) -> &KMeansConfig {
        &self.config
    }
}
