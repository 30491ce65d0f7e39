pub mod air_data;

pub use air_data::{AirDataConfig, ConfigError, RateEstimation};
