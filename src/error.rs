use thiserror::Error;

/// Error types for the symnmf-rs library
#[derive(Error, Debug)]
pub enum SymNmfError {
    /// Input could not be read as a rectangular matrix of finite reals
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// The number of clusters k is outside [1, n)
    #[error("Invalid cluster count: k = {k}, but it must satisfy 1 <= k < {n_points}")]
    InvalidClusterCount {
        /// Requested number of clusters
        k: usize,
        /// Number of points in the dataset
        n_points: usize,
    },

    /// The similarity graph cannot be normalized
    #[error("Degenerate graph: {0}")]
    DegenerateGraph(String),

    /// Scoring requested on a labeling with a single cluster or only singletons
    #[error("Degenerate labeling: {n_labels} distinct labels over {n_points} points, need between 2 and n - 1")]
    DegenerateLabeling {
        /// Number of distinct labels present
        n_labels: usize,
        /// Number of labeled points
        n_points: usize,
    },

    /// Unrecognized goal selector
    #[error("Unknown goal '{0}', expected one of: sym, ddg, norm, symnmf")]
    UnknownMode(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call fit() first.")]
    NotFitted,

    /// Dimension mismatch between data and model
    #[error("Dimension mismatch: {0}")]
    InvalidDimensions(String),

    /// Reading the input failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
