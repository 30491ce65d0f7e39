mod calculator;
pub mod formulas;
mod pipeline;
mod rates;
mod system;

pub use calculator::AirRelativeMotionCalculator;
pub use pipeline::{compute_air_relative_motion, AirDataInputs};
pub use rates::{angle_rate_estimator_system, AngleRateEstimator};
pub use system::{air_relative_motion_system, publish_air_data_system};
