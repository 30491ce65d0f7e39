pub mod keys;
mod variables;

pub use variables::{Variable, VariableStore};
