use crate::config::{validate_cluster_count, SymNmfConfig};
use crate::error::SymNmfError;
use crate::graph::{degree_matrix, normalized_similarity, similarity_matrix};
use crate::symnmf::SymNmf;
use ndarray::{Array2, ArrayView2};
use std::fmt;
use std::str::FromStr;

/// Which matrix the inspector should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    /// Similarity matrix `A`
    Sym,
    /// Diagonal degree matrix `D`
    Ddg,
    /// Normalized similarity matrix `W`
    Norm,
    /// Final SymNMF factor `H`
    SymNmf,
}

impl FromStr for Goal {
    type Err = SymNmfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sym" => Ok(Goal::Sym),
            "ddg" => Ok(Goal::Ddg),
            "norm" => Ok(Goal::Norm),
            "symnmf" => Ok(Goal::SymNmf),
            other => Err(SymNmfError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Goal::Sym => "sym",
            Goal::Ddg => "ddg",
            Goal::Norm => "norm",
            Goal::SymNmf => "symnmf",
        };
        f.write_str(name)
    }
}

impl Goal {
    /// Compute the matrix this goal selects.
    ///
    /// `config.k` is validated against the number of points before anything
    /// else, for every goal.
    pub fn compute(
        self,
        points: &ArrayView2<f64>,
        config: &SymNmfConfig,
    ) -> Result<Array2<f64>, SymNmfError> {
        validate_cluster_count(config.k, points.nrows())?;

        match self {
            Goal::Sym => similarity_matrix(points),
            Goal::Ddg => degree_matrix(points),
            Goal::Norm => normalized_similarity(points),
            Goal::SymNmf => {
                let mut model = SymNmf::with_config(config.clone());
                model.fit(points)?;
                model.factor().cloned().ok_or(SymNmfError::NotFitted)
            }
        }
    }
}
