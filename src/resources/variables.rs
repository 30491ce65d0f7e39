use bevy::prelude::*;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use super::keys;
use crate::utils::{AirDataError, PhysicalConstants, Result, VariableShape};

/// A single named simulation variable.
///
/// Serialized untagged so a snapshot reads naturally: a number, a list, or a
/// list of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Variable {
    Scalar(f64),
    Vector(Vec<f64>),
    Matrix(Vec<Vec<f64>>),
}

impl Variable {
    pub fn shape(&self) -> VariableShape {
        match self {
            Variable::Scalar(_) => VariableShape::Scalar,
            Variable::Vector(v) => VariableShape::Vector(v.len()),
            Variable::Matrix(rows) => {
                let cols = rows.first().map_or(0, Vec::len);
                if rows.iter().all(|row| row.len() == cols) {
                    VariableShape::Matrix(rows.len(), cols)
                } else {
                    VariableShape::Ragged
                }
            }
        }
    }

    fn mismatch(&self, key: &str, expected: VariableShape) -> AirDataError {
        AirDataError::ShapeMismatch {
            key: key.to_string(),
            expected,
            found: self.shape(),
        }
    }

    fn to_scalar(&self, key: &str) -> Result<f64> {
        match self {
            Variable::Scalar(value) => Ok(*value),
            _ => Err(self.mismatch(key, VariableShape::Scalar)),
        }
    }

    fn to_vector3(&self, key: &str) -> Result<Vector3<f64>> {
        match self {
            Variable::Vector(v) if v.len() == 3 => Ok(Vector3::new(v[0], v[1], v[2])),
            _ => Err(self.mismatch(key, VariableShape::Vector(3))),
        }
    }

    fn to_matrix3(&self, key: &str) -> Result<Matrix3<f64>> {
        match self {
            Variable::Matrix(rows) if self.shape() == VariableShape::Matrix(3, 3) => {
                Ok(Matrix3::from_fn(|r, c| rows[r][c]))
            }
            _ => Err(self.mismatch(key, VariableShape::Matrix(3, 3))),
        }
    }
}

impl From<f64> for Variable {
    fn from(value: f64) -> Self {
        Variable::Scalar(value)
    }
}

impl From<Vector3<f64>> for Variable {
    fn from(v: Vector3<f64>) -> Self {
        Variable::Vector(v.iter().copied().collect())
    }
}

impl From<Matrix3<f64>> for Variable {
    fn from(m: Matrix3<f64>) -> Self {
        Variable::Matrix(
            m.row_iter()
                .map(|row| row.iter().copied().collect())
                .collect(),
        )
    }
}

impl From<Vec<f64>> for Variable {
    fn from(v: Vec<f64>) -> Self {
        Variable::Vector(v)
    }
}

/// Shared store of named simulation variables.
///
/// Upstream stages (kinematics, wind, atmosphere, geometry) publish into it;
/// the air data stage reads those and publishes its own results back.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariableStore {
    #[serde(default)]
    pub constants: PhysicalConstants,
    #[serde(default)]
    variables: BTreeMap<String, Variable>,
}

impl VariableStore {
    pub fn new(constants: PhysicalConstants) -> Self {
        Self {
            constants,
            variables: BTreeMap::new(),
        }
    }

    /// Store with the sea-level reference density seeded from the constants.
    pub fn with_standard_atmosphere() -> Self {
        let mut store = Self::default();
        store.set(keys::RHO_0, store.constants.sea_level_density);
        store
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Variable>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get_var(&self, key: &str) -> Result<&Variable> {
        self.variables
            .get(key)
            .ok_or_else(|| AirDataError::MissingVariable(key.to_string()))
    }

    pub fn scalar(&self, key: &str) -> Result<f64> {
        self.get_var(key)?.to_scalar(key)
    }

    pub fn vector3(&self, key: &str) -> Result<Vector3<f64>> {
        self.get_var(key)?.to_vector3(key)
    }

    pub fn matrix3(&self, key: &str) -> Result<Matrix3<f64>> {
        self.get_var(key)?.to_matrix3(key)
    }

    /// Like [`scalar`](Self::scalar), but an absent key is `Ok(None)`. A
    /// present value of the wrong shape is still an error.
    pub fn optional_scalar(&self, key: &str) -> Result<Option<f64>> {
        match self.variables.get(key) {
            Some(variable) => variable.to_scalar(key).map(Some),
            None => Ok(None),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Variable> {
        self.variables.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
