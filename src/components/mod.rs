pub mod air_data;

pub use air_data::{
    AeroAngleRates, AirRelativeMotion, AtmosphereState, BodyGeometry, BodyKinematics,
    PublishAirData, WindState,
};
