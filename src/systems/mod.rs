pub mod air_data;

pub use air_data::{
    air_relative_motion_system, angle_rate_estimator_system, compute_air_relative_motion,
    publish_air_data_system, AirDataInputs, AirRelativeMotionCalculator, AngleRateEstimator,
};
