use bevy::prelude::*;

use crate::config::AirDataConfig;
use crate::systems::{
    air_relative_motion_system, angle_rate_estimator_system, publish_air_data_system,
};

/// Air data stages, run in this order every fixed step.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum AirDataSet {
    AirData,
    RateEstimation,
    Publish,
}

#[derive(Default)]
pub struct AirDataPlugin {
    /// Overrides any `AirDataConfig` already present in the app.
    pub config: Option<AirDataConfig>,
}

impl AirDataPlugin {
    pub fn with_config(config: AirDataConfig) -> Self {
        Self {
            config: Some(config),
        }
    }
}

impl Plugin for AirDataPlugin {
    fn build(&self, app: &mut App) {
        match &self.config {
            Some(config) => {
                info!("Air data configured: {:?}", config);
                app.insert_resource(config.clone());
            }
            None => {
                app.init_resource::<AirDataConfig>();
            }
        }
        app.init_resource::<Time<Fixed>>();

        app.configure_sets(
            FixedUpdate,
            (
                AirDataSet::AirData,
                AirDataSet::RateEstimation,
                AirDataSet::Publish,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                air_relative_motion_system.in_set(AirDataSet::AirData),
                angle_rate_estimator_system.in_set(AirDataSet::RateEstimation),
                publish_air_data_system.in_set(AirDataSet::Publish),
            ),
        );
    }
}
