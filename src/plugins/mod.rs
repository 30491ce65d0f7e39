mod air_data;

pub use air_data::{AirDataPlugin, AirDataSet};
