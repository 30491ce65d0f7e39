use std::fmt;
use std::io;
use thiserror::Error;

/// Dimensionality of a value held in the variable store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableShape {
    Scalar,
    Vector(usize),
    Matrix(usize, usize),
    /// Rows of unequal length.
    Ragged,
}

impl fmt::Display for VariableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableShape::Scalar => write!(f, "scalar"),
            VariableShape::Vector(n) => write!(f, "{}-vector", n),
            VariableShape::Matrix(r, c) => write!(f, "{}x{} matrix", r, c),
            VariableShape::Ragged => write!(f, "ragged matrix"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AirDataError {
    #[error("Variable not found: {0}")]
    MissingVariable(String),

    #[error("Variable '{key}' has wrong shape: expected {expected}, found {found}")]
    ShapeMismatch {
        key: String,
        expected: VariableShape,
        found: VariableShape,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AirDataError>;
